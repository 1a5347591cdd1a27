//! Pareto frontier of hue separation against perceptual cost.
//!
//! For a base hue, every integer minimum-separation constraint `s` in
//! `0..=180` maps to the cheapest companion hue at least `s` degrees away,
//! together with what that companion gives up ("deficit").

use crate::bucket::hue_degree;
use crate::gamut::{max_chroma, ShadeTable};

/// Largest meaningful hue separation, in degrees.
pub const MAX_SEPARATION: u16 = 180;

const FRONTIER_LEN: usize = MAX_SEPARATION as usize + 1;

/// Below this maximum deficit the frontier is treated as flat.
const FLAT_EPSILON: f32 = 0.001;

/// Plot scale used for flat frontiers.
pub const NOMINAL_SCALE: f32 = 0.05;

/// How the companion pays for hue separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CostModel {
    /// Companion keeps the base lightness and only loses chroma.
    ChromaOnly,
    /// Companion uses its own most chromatic shade; cost is the (L, C)
    /// distance from the base shade.
    ChromaLightness,
}

impl CostModel {
    pub fn toggled(self) -> Self {
        match self {
            CostModel::ChromaOnly => CostModel::ChromaLightness,
            CostModel::ChromaLightness => CostModel::ChromaOnly,
        }
    }

    /// Axis label for the plot.
    pub fn label(self) -> &'static str {
        match self {
            CostModel::ChromaOnly => "Chroma sacrifice",
            CostModel::ChromaLightness => "L + C distance",
        }
    }

    /// Cost of replacing the bright shade of `base` with hue `companion`.
    pub fn cost(self, shades: &ShadeTable, base: u16, companion: u16) -> f32 {
        let base_shade = shades.bright(base as f32);
        match self {
            CostModel::ChromaOnly => {
                let ceiling = max_chroma(base_shade.lightness, companion as f32);
                base_shade.chroma - base_shade.chroma.min(ceiling)
            }
            CostModel::ChromaLightness => shades.bright(companion as f32).distance(base_shade),
        }
    }
}

impl std::fmt::Display for CostModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModel::ChromaOnly => write!(f, "chroma-only"),
            CostModel::ChromaLightness => write!(f, "chroma-lightness"),
        }
    }
}

/// One frontier entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierPoint {
    pub companion_hue: u16,
    pub deficit: f32,
}

/// The frontier for one base hue under one cost model.
#[derive(Debug, Clone)]
pub struct Frontier {
    base_hue: u16,
    model: CostModel,
    points: Vec<FrontierPoint>,
}

/// Build the frontier for `base_hue` under `model`.
pub fn compute_pareto(shades: &ShadeTable, base_hue: f32, model: CostModel) -> Frontier {
    let base = hue_degree(base_hue);

    let exact: Vec<FrontierPoint> = (0..=MAX_SEPARATION)
        .map(|s| cheapest_at_distance(shades, base, s, model))
        .collect();

    // A minimum separation of s admits every distance d >= s, so sweep from
    // the complement inwards keeping the cheapest; ties keep the smaller d.
    let mut points = exact.clone();
    let mut best = exact[FRONTIER_LEN - 1];
    for s in (0..FRONTIER_LEN).rev() {
        if exact[s].deficit <= best.deficit {
            best = exact[s];
        }
        points[s] = best;
    }

    // Deficits must never decrease as the constraint tightens.
    let mut running = 0.0_f32;
    for point in &mut points {
        running = running.max(point.deficit);
        point.deficit = running;
    }

    Frontier {
        base_hue: base,
        model,
        points,
    }
}

/// Cheaper of the two hues exactly `separation` degrees from `base`.
/// Equal costs go to the increasing side, `(base + separation) % 360`.
pub fn cheapest_at_distance(
    shades: &ShadeTable,
    base: u16,
    separation: u16,
    model: CostModel,
) -> FrontierPoint {
    let base = base % 360;
    let separation = separation.min(MAX_SEPARATION);
    let up = (base + separation) % 360;
    let down = (base + 360 - separation) % 360;
    let up_cost = model.cost(shades, base, up);
    let down_cost = model.cost(shades, base, down);
    if up_cost <= down_cost {
        FrontierPoint {
            companion_hue: up,
            deficit: up_cost,
        }
    } else {
        FrontierPoint {
            companion_hue: down,
            deficit: down_cost,
        }
    }
}

impl Frontier {
    pub fn base_hue(&self) -> u16 {
        self.base_hue
    }

    pub fn model(&self) -> CostModel {
        self.model
    }

    pub fn points(&self) -> &[FrontierPoint] {
        &self.points
    }

    /// Entry for `separation` degrees, rounded and clamped to `[0, 180]`.
    pub fn at(&self, separation: f32) -> FrontierPoint {
        self.points[clamp_separation(separation) as usize]
    }

    pub fn max_deficit(&self) -> f32 {
        self.points.iter().fold(0.0, |acc, p| acc.max(p.deficit))
    }

    /// Vertical scale for plotting. Flat frontiers get a fixed nominal
    /// scale so nothing divides by zero.
    pub fn plot_scale(&self) -> f32 {
        let max = self.max_deficit();
        if max < FLAT_EPSILON {
            NOMINAL_SCALE
        } else {
            max
        }
    }
}

/// Round and clamp a separation to `0..=180`. NaN maps to 0.
pub fn clamp_separation(separation: f32) -> u16 {
    if separation.is_nan() {
        return 0;
    }
    separation.round().clamp(0.0, MAX_SEPARATION as f32) as u16
}
