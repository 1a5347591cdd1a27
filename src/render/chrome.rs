use crate::cli::ThemeMode;
use crate::color::Color;

/// Non-data colors of the view: text, grid, highlights.
///
/// Terminal cells cannot blend, so the translucent overlays of a canvas are
/// pre-mixed against the background here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub background: Color,
    pub text: Color,
    pub subtle: Color,
    pub divider: Color,
    pub grid: Color,
    pub plot_background: Color,
    pub curve_outline: Color,
    pub selection: Color,
    pub hover: Color,
    pub handle_ring: Color,
    pub vs: Color,
    pub toggle_background: Color,
}

impl Chrome {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => {
                let bg = Color::new(18, 18, 22);
                Self {
                    background: bg,
                    text: bg.lerp(Color::WHITE, 0.85),
                    subtle: bg.lerp(Color::WHITE, 0.5),
                    divider: bg.lerp(Color::BLACK, 0.1),
                    grid: bg.lerp(Color::WHITE, 0.08),
                    plot_background: bg.lerp(Color::WHITE, 0.03),
                    curve_outline: bg.lerp(Color::BLACK, 0.35),
                    selection: bg.lerp(Color::WHITE, 0.85),
                    hover: bg.lerp(Color::WHITE, 0.25),
                    handle_ring: bg.lerp(Color::WHITE, 0.5),
                    vs: bg.lerp(Color::WHITE, 0.15),
                    toggle_background: bg.lerp(Color::WHITE, 0.06),
                }
            }
            ThemeMode::Light => {
                let bg = Color::new(250, 250, 247);
                Self {
                    background: bg,
                    text: bg.lerp(Color::BLACK, 0.85),
                    subtle: bg.lerp(Color::BLACK, 0.5),
                    divider: bg.lerp(Color::BLACK, 0.1),
                    grid: bg.lerp(Color::BLACK, 0.08),
                    plot_background: bg.lerp(Color::BLACK, 0.03),
                    curve_outline: bg.lerp(Color::WHITE, 0.5),
                    selection: bg.lerp(Color::BLACK, 0.75),
                    hover: bg.lerp(Color::BLACK, 0.25),
                    handle_ring: bg.lerp(Color::BLACK, 0.5),
                    vs: bg.lerp(Color::BLACK, 0.2),
                    toggle_background: bg.lerp(Color::BLACK, 0.06),
                }
            }
        }
    }
}

impl Default for Chrome {
    fn default() -> Self {
        Self::for_mode(ThemeMode::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_readable_on_background() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let chrome = Chrome::for_mode(mode);
            let ratio = Color::contrast_ratio(&chrome.text, &chrome.background);
            assert!(ratio > 7.0, "{mode:?} text contrast {ratio:.1}:1");
        }
    }
}
