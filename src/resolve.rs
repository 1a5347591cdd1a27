//! Concrete companion shades for a chosen separation.

use crate::color::Color;
use crate::frontier::{clamp_separation, compute_pareto, CostModel, Frontier};
use crate::gamut::{max_chroma, Shade, ShadeTable};

/// The derived role-2 color for one base hue and separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Companion {
    pub hue: u16,
    pub separation: u16,
    pub deficit: f32,
    pub bright: Shade,
    pub dark: Shade,
}

impl Companion {
    pub fn bright_color(&self) -> Color {
        Color::from_lch(self.bright.lightness, self.bright.chroma, self.hue as f32)
    }

    pub fn dark_color(&self) -> Color {
        Color::from_lch(self.dark.lightness, self.dark.chroma, self.hue as f32)
    }
}

/// Resolve the companion of `base_hue` at `separation` degrees.
pub fn companion_for(
    shades: &ShadeTable,
    base_hue: f32,
    separation: f32,
    model: CostModel,
) -> Companion {
    companion_on(&compute_pareto(shades, base_hue, model), shades, separation)
}

/// Resolve against an already computed frontier.
pub fn companion_on(frontier: &Frontier, shades: &ShadeTable, separation: f32) -> Companion {
    let point = frontier.at(separation);
    let (bright, dark) = companion_shades(
        shades,
        frontier.base_hue(),
        point.companion_hue,
        frontier.model(),
    );
    Companion {
        hue: point.companion_hue,
        separation: clamp_separation(separation),
        deficit: point.deficit,
        bright,
        dark,
    }
}

/// Bright and dark shades of `companion` paired with `base` under `model`.
pub fn companion_shades(
    shades: &ShadeTable,
    base: u16,
    companion: u16,
    model: CostModel,
) -> (Shade, Shade) {
    match model {
        CostModel::ChromaOnly => {
            let fit = |shade: Shade| {
                let ceiling = max_chroma(shade.lightness, companion as f32);
                Shade::new(shade.lightness, shade.chroma.min(ceiling))
            };
            (
                fit(shades.bright(base as f32)),
                fit(shades.dark(base as f32)),
            )
        }
        CostModel::ChromaLightness => (
            shades.bright(companion as f32),
            shades.dark(companion as f32),
        ),
    }
}
