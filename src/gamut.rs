//! sRGB gamut boundary in Oklch and the per-hue shades built on it.

use palette::convert::FromColorUnclamped;
use palette::{LinSrgb, Oklch};

use crate::bucket::{hue_degree, normalize_hue};

/// Upper bound for the chroma search. No sRGB color reaches it.
pub const CHROMA_CEILING: f32 = 0.4;

const SEARCH_STEPS: usize = 24;
const GAMUT_EPSILON: f32 = 1e-5;

const CUSP_MIN_LIGHTNESS: f32 = 0.40;
const CUSP_LIGHTNESS_STEP: f32 = 0.005;
const CUSP_SAMPLES: usize = 111; // 0.40 ..= 0.95

/// Dark shades sit at this fraction of the bright lightness.
pub const DARK_LIGHTNESS_RATIO: f32 = 0.6;

/// A lightness/chroma pair in Oklch units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shade {
    pub lightness: f32,
    pub chroma: f32,
}

impl Shade {
    pub const fn new(lightness: f32, chroma: f32) -> Self {
        Self { lightness, chroma }
    }

    /// Euclidean distance in the (L, C) plane.
    pub fn distance(self, other: Shade) -> f32 {
        (self.lightness - other.lightness).hypot(self.chroma - other.chroma)
    }
}

/// Whether the Oklch triple maps inside the sRGB cube.
pub fn in_gamut(lightness: f32, chroma: f32, hue: f32) -> bool {
    let lin = LinSrgb::<f32>::from_color_unclamped(Oklch::new(lightness, chroma, hue));
    [lin.red, lin.green, lin.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

/// Largest chroma displayable at `lightness` and `hue`.
///
/// Binary search along the chroma ray from gray, which is always inside
/// the gamut for lightness in (0, 1). Returns 0 at the black and white ends.
pub fn max_chroma(lightness: f32, hue: f32) -> f32 {
    let lightness = lightness.clamp(0.0, 1.0);
    if lightness <= 0.0 || lightness >= 1.0 {
        return 0.0;
    }
    let hue = normalize_hue(hue);

    let (mut lo, mut hi) = (0.0_f32, CHROMA_CEILING);
    for _ in 0..SEARCH_STEPS {
        let mid = (lo + hi) / 2.0;
        if in_gamut(lightness, mid, hue) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// The most chromatic displayable shade of `hue` (the gamut cusp), sampled
/// on a fixed lightness grid. Ties resolve to the lower lightness.
fn cusp(hue: f32) -> Shade {
    let mut best = Shade::new(CUSP_MIN_LIGHTNESS, max_chroma(CUSP_MIN_LIGHTNESS, hue));
    for i in 1..CUSP_SAMPLES {
        let lightness = CUSP_MIN_LIGHTNESS + i as f32 * CUSP_LIGHTNESS_STEP;
        let chroma = max_chroma(lightness, hue);
        if chroma > best.chroma {
            best = Shade::new(lightness, chroma);
        }
    }
    best
}

/// Bright and dark shades for every integer hue degree.
///
/// Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct ShadeTable {
    bright: Vec<Shade>,
    dark: Vec<Shade>,
}

impl ShadeTable {
    pub fn new() -> Self {
        let bright: Vec<Shade> = (0..360).map(|h| cusp(h as f32)).collect();
        let dark = bright
            .iter()
            .enumerate()
            .map(|(h, b)| {
                let lightness = b.lightness * DARK_LIGHTNESS_RATIO;
                Shade::new(lightness, max_chroma(lightness, h as f32))
            })
            .collect();
        log::debug!("built shade table for 360 hues");
        Self { bright, dark }
    }

    /// Bright shade of the hue nearest to `hue` degrees.
    pub fn bright(&self, hue: f32) -> Shade {
        self.bright[hue_degree(hue) as usize]
    }

    /// Dark shade of the hue nearest to `hue` degrees.
    pub fn dark(&self, hue: f32) -> Shade {
        self.dark[hue_degree(hue) as usize]
    }
}

impl Default for ShadeTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_chroma_is_non_negative() {
        for li in 0..=20 {
            let l = li as f32 / 20.0;
            for h in (0..360).step_by(15) {
                let c = max_chroma(l, h as f32);
                assert!(c >= 0.0, "negative chroma at L={l} h={h}: {c}");
            }
        }
    }

    #[test]
    fn max_chroma_is_zero_at_black_and_white() {
        assert_eq!(max_chroma(0.0, 40.0), 0.0);
        assert_eq!(max_chroma(1.0, 40.0), 0.0);
        assert_eq!(max_chroma(-3.0, 40.0), 0.0);
    }

    #[test]
    fn max_chroma_sits_on_the_boundary() {
        for h in (0..360).step_by(30) {
            let hue = h as f32;
            let c = max_chroma(0.6, hue);
            assert!(in_gamut(0.6, c, hue), "max chroma left gamut at h={h}");
            assert!(
                !in_gamut(0.6, c + 0.01, hue),
                "boundary not tight at h={h}: {c}"
            );
        }
    }

    #[test]
    fn max_chroma_normalizes_hue() {
        assert_eq!(max_chroma(0.7, 30.0), max_chroma(0.7, 390.0));
        assert_eq!(max_chroma(0.7, 30.0), max_chroma(0.7, -330.0));
    }

    #[test]
    fn gray_is_always_in_gamut() {
        for li in 1..20 {
            assert!(in_gamut(li as f32 / 20.0, 0.0, 0.0));
        }
    }

    #[test]
    fn bright_shades_are_cusps() {
        let table = ShadeTable::new();
        for h in (0..360).step_by(10) {
            let bright = table.bright(h as f32);
            assert!(bright.chroma > 0.05, "flat bright shade at h={h}");
            assert_eq!(bright.chroma, max_chroma(bright.lightness, h as f32));
            assert!(bright.chroma + 1e-4 >= max_chroma(0.5, h as f32));
        }
    }

    #[test]
    fn dark_shades_are_darker() {
        let table = ShadeTable::new();
        for h in (0..360).step_by(10) {
            let hue = h as f32;
            assert!(table.dark(hue).lightness < table.bright(hue).lightness);
            assert!(table.dark(hue).chroma <= CHROMA_CEILING);
        }
    }

    #[test]
    fn lookups_round_to_nearest_degree() {
        let table = ShadeTable::new();
        assert_eq!(table.bright(359.7), table.bright(0.0));
        assert_eq!(table.bright(-10.0), table.bright(350.0));
    }
}
