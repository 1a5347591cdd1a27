use anyhow::{bail, Context, Result};
use palette::{Clamp, FromColor, IntoColor, LinSrgb, Mix, Oklab, Oklch, Srgb};

use crate::gamut;

/// An 8-bit sRGB color as painted on screen and written to reports.
///
/// Everything perceptual happens in Oklch/Oklab through `palette`; this
/// type is only the display end of that pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or bare `rrggbb`, either case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("invalid hex color {hex:?}: expected 6 hex digits");
        }
        let packed = u32::from_str_radix(digits, 16)
            .with_context(|| format!("invalid hex color {hex:?}"))?;
        let [_, r, g, b] = packed.to_be_bytes();
        Ok(Self::new(r, g, b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        let packed = u32::from_be_bytes([0, self.r, self.g, self.b]);
        format!("#{packed:06x}")
    }

    fn to_srgb_f32(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    fn from_srgb_f32(srgb: Srgb<f32>) -> Self {
        let quantized: Srgb<u8> = srgb.clamp().into_format();
        Self::new(quantized.red, quantized.green, quantized.blue)
    }

    pub fn to_oklch(self) -> Oklch {
        self.to_srgb_f32().into_color()
    }

    /// Convert from Oklch. Out-of-gamut channels are clipped.
    pub fn from_oklch(oklch: Oklch) -> Self {
        Self::from_srgb_f32(Srgb::from_color(oklch))
    }

    /// Create from a lightness/chroma/hue triple.
    ///
    /// Chroma is first reduced to the gamut boundary at the same lightness
    /// and hue, so out-of-range requests keep their hue and lightness
    /// instead of being clipped per channel.
    pub fn from_lch(lightness: f32, chroma: f32, hue: f32) -> Self {
        let lightness = lightness.clamp(0.0, 1.0);
        let chroma = chroma.max(0.0).min(gamut::max_chroma(lightness, hue));
        Self::from_oklch(Oklch::new(lightness, chroma, hue))
    }

    /// Oklch hue in degrees, `[0, 360)`.
    pub fn hue(self) -> f32 {
        self.to_oklch().hue.into_positive_degrees()
    }

    /// Interpolate towards `other` in Oklab. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let a: Oklab = self.to_srgb_f32().into_color();
        let b: Oklab = other.to_srgb_f32().into_color();
        Self::from_srgb_f32(Srgb::from_color(a.mix(b, t.clamp(0.0, 1.0))))
    }

    /// WCAG 2.0 relative luminance.
    pub fn relative_luminance(self) -> f32 {
        let lin: LinSrgb<f32> = self.to_srgb_f32().into_linear();
        0.2126 * lin.red + 0.7152 * lin.green + 0.0722 * lin.blue
    }

    /// WCAG 2.0 contrast ratio between two colors, in [1, 21].
    pub fn contrast_ratio(c1: &Color, c2: &Color) -> f32 {
        let (a, b) = (c1.relative_luminance(), c2.relative_luminance());
        (a.max(b) + 0.05) / (a.min(b) + 0.05)
    }

    /// Black or white, whichever reads better on this color.
    pub fn legible_text(self) -> Color {
        let on_black = Color::contrast_ratio(&self, &Color::BLACK);
        let on_white = Color::contrast_ratio(&self, &Color::WHITE);
        if on_black >= on_white {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hue_gap(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn hex_round_trip() {
        let original = Color::from_hex("#ff8800").unwrap();
        assert_eq!(original, Color::new(255, 136, 0));
        assert_eq!(original.to_hex(), "#ff8800");
    }

    #[test]
    fn hex_uppercase_and_bare() {
        assert_eq!(Color::from_hex("#FF8800").unwrap().to_hex(), "#ff8800");
        assert_eq!(Color::from_hex("aabbcc").unwrap().to_hex(), "#aabbcc");
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("+fffff").is_err());
        assert!(Color::from_hex("#ffé00").is_err());
    }

    #[test]
    fn oklch_round_trip() {
        for original in [
            Color::new(200, 100, 50),
            Color::new(0, 255, 0),
            Color::new(128, 128, 128),
            Color::WHITE,
        ] {
            let recovered = Color::from_oklch(original.to_oklch());
            for (a, b) in [
                (original.r, recovered.r),
                (original.g, recovered.g),
                (original.b, recovered.b),
            ] {
                assert!(
                    (a as i16 - b as i16).unsigned_abs() <= 1,
                    "channel mismatch for {original}: {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn from_lch_keeps_hue_when_chroma_is_out_of_gamut() {
        // 0.4 is far outside sRGB at this lightness for every hue.
        for hue in [0.0_f32, 90.0, 200.0, 300.0] {
            let color = Color::from_lch(0.7, 0.4, hue);
            let gap = hue_gap(color.hue(), hue);
            assert!(gap < 4.0, "hue {hue} drifted to {}", color.hue());
        }
    }

    #[test]
    fn from_lch_zero_chroma_is_gray() {
        let gray = Color::from_lch(0.6, 0.0, 123.0);
        assert!(gray.r.abs_diff(gray.g) <= 1 && gray.g.abs_diff(gray.b) <= 1);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::new(200, 40, 40);
        let b = Color::new(40, 40, 200);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn contrast_ratio_black_white() {
        let ratio = Color::contrast_ratio(&Color::BLACK, &Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.1, "got {ratio}");
        assert_eq!(ratio, Color::contrast_ratio(&Color::WHITE, &Color::BLACK));
    }

    #[test]
    fn legible_text_flips_with_luminance() {
        assert_eq!(Color::new(250, 240, 120).legible_text(), Color::BLACK);
        assert_eq!(Color::new(30, 20, 90).legible_text(), Color::WHITE);
        assert_eq!(Color::WHITE.legible_text(), Color::BLACK);
        assert_eq!(Color::BLACK.legible_text(), Color::WHITE);
    }

    #[test]
    fn display_matches_to_hex() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), color.to_hex());
    }
}
