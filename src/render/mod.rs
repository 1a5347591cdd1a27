pub mod chrome;
pub mod strip;

use crate::color::Color;
use crate::layout::{Point, Rect};

pub use chrome::Chrome;
pub use strip::StripView;

/// A linear gradient between two surface points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    /// Offsets in [0, 1], ascending.
    pub stops: Vec<(f32, Color)>,
}

impl LinearGradient {
    pub fn new(from: Point, to: Point, start: Color, end: Color) -> Self {
        Self {
            from,
            to,
            stops: vec![(0.0, start), (1.0, end)],
        }
    }

    /// Color at `p`, projected onto the gradient axis.
    pub fn sample(&self, p: Point) -> Color {
        let (dx, dy) = (self.to.x - self.from.x, self.to.y - self.from.y);
        let len_sq = dx * dx + dy * dy;
        let t = if len_sq <= f32::EPSILON {
            0.0
        } else {
            (((p.x - self.from.x) * dx + (p.y - self.from.y) * dy) / len_sq).clamp(0.0, 1.0)
        };

        let Some(&(first_offset, first)) = self.stops.first() else {
            return Color::BLACK;
        };
        if t <= first_offset {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (a_off, a) = pair[0];
            let (b_off, b) = pair[1];
            if t <= b_off {
                let span = b_off - a_off;
                let local = if span <= f32::EPSILON {
                    1.0
                } else {
                    (t - a_off) / span
                };
                return a.lerp(b, local);
            }
        }
        self.stops.last().map_or(first, |&(_, c)| c)
    }
}

/// Fill or stroke style.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
}

impl Paint {
    pub fn color_at(&self, p: Point) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::Linear(g) => g.sample(p),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A 2-D drawing surface. Creation and resizing belong to the host.
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    fn stroke_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a polyline through `points`.
    fn stroke_path(&mut self, points: &[Point], paint: &Paint, dashed: bool);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn text(&mut self, at: Point, text: &str, color: Color, align: Align);
}
