//! Surface-local geometry of the strip view and the hit regions derived from it.
//!
//! Units are whatever the drawing surface uses; the terminal front end uses
//! one unit per cell.

use crate::bucket::BUCKET_COUNT;
use crate::frontier::{clamp_separation, MAX_SEPARATION};

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Closed containment, edges included.
    pub fn contains_inclusive(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

const PAD_X: f32 = 6.0;
const LABEL_ROW: f32 = 0.0;
const P1_BRIGHT_H: f32 = 4.0;
const P1_DARK_H: f32 = 2.0;
const GAP_H: f32 = 1.0;
const P2_DARK_H: f32 = 2.0;
const P2_BRIGHT_H: f32 = 4.0;
const SLIDER_GAP: f32 = 1.0;
const SLIDER_H: f32 = 10.0;
const TOGGLE_W: f32 = 26.0;
const PLOT_LEFT: f32 = 8.0;
const PLOT_RIGHT_MARGIN: f32 = 2.0;
const PLOT_AXIS_ROWS: f32 = 3.0;
const MIN_PLOT_H: f32 = 2.0;

/// Vertical bands of the strip, all spanning the full column width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    pub p1_bright: Rect,
    pub p1_dark: Rect,
    pub gap: Rect,
    pub p2_dark: Rect,
    pub p2_bright: Rect,
}

impl Bands {
    /// Everything from the top of P1 bright to the bottom of P2 bright.
    pub fn outline(&self) -> Rect {
        Rect::new(
            self.p1_bright.x,
            self.p1_bright.y,
            self.p1_bright.w,
            self.p2_bright.bottom() - self.p1_bright.y,
        )
    }
}

/// Geometry of the whole view for one surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub width: f32,
    pub height: f32,
    pub pad_x: f32,
    pub cell_w: f32,
    pub label_y: f32,
    pub bands: Bands,
    pub slider: Rect,
    pub info_y: f32,
    pub toggle: Rect,
    pub handle_label_y: f32,
    pub plot: Rect,
}

impl StripLayout {
    pub fn new(width: f32, height: f32) -> Self {
        let strip_w = (width - PAD_X).max(BUCKET_COUNT as f32);
        let cell_w = strip_w / BUCKET_COUNT as f32;

        let band = |y: f32, h: f32| Rect::new(PAD_X, y, strip_w, h);
        let p1_bright = band(LABEL_ROW + 1.0, P1_BRIGHT_H);
        let p1_dark = band(p1_bright.bottom(), P1_DARK_H);
        let gap = band(p1_dark.bottom(), GAP_H);
        let p2_dark = band(gap.bottom(), P2_DARK_H);
        let p2_bright = band(p2_dark.bottom(), P2_BRIGHT_H);
        let slider = band(p2_bright.bottom() + SLIDER_GAP, SLIDER_H);

        let info_y = slider.bottom();
        let toggle_y = info_y + 2.0;
        let handle_label_y = toggle_y + 1.0;
        let plot_y = handle_label_y + 1.0;
        let plot_w = (width - PLOT_LEFT - PLOT_RIGHT_MARGIN).max(1.0);
        let plot_h = (height - plot_y - PLOT_AXIS_ROWS).max(MIN_PLOT_H);
        let plot = Rect::new(PLOT_LEFT, plot_y, plot_w, plot_h);
        let toggle = Rect::new(
            plot.center().x - TOGGLE_W / 2.0,
            toggle_y,
            TOGGLE_W,
            1.0,
        );

        Self {
            width,
            height,
            pad_x: PAD_X,
            cell_w,
            label_y: LABEL_ROW,
            bands: Bands {
                p1_bright,
                p1_dark,
                gap,
                p2_dark,
                p2_bright,
            },
            slider,
            info_y,
            toggle,
            handle_label_y,
            plot,
        }
    }

    /// Left edge of bucket column `index`.
    pub fn column_x(&self, index: usize) -> f32 {
        self.pad_x + index as f32 * self.cell_w
    }

    /// Horizontal slice of `band` belonging to column `index`.
    pub fn column_rect(&self, band: Rect, index: usize) -> Rect {
        Rect::new(self.column_x(index), band.y, self.cell_w, band.h)
    }

    fn column_at(&self, x: f32) -> Option<usize> {
        let col = ((x - self.pad_x) / self.cell_w).floor();
        if col >= 0.0 && col < BUCKET_COUNT as f32 {
            Some(col as usize)
        } else {
            None
        }
    }

    /// Bucket whose column contains the point, anywhere from the top of the
    /// colour bands down to the slider track.
    pub fn bucket_at(&self, x: f32, y: f32) -> Option<usize> {
        if y >= self.bands.p1_bright.y && y < self.slider.y {
            self.column_at(x)
        } else {
            None
        }
    }

    /// Bucket whose slider track contains the point. Edges count.
    pub fn slider_at(&self, x: f32, y: f32) -> Option<usize> {
        if y >= self.slider.y && y <= self.slider.bottom() {
            self.column_at(x)
        } else {
            None
        }
    }

    pub fn in_plot(&self, x: f32, y: f32) -> bool {
        self.plot.contains_inclusive(x, y)
    }

    pub fn in_toggle(&self, x: f32, y: f32) -> bool {
        self.toggle.contains_inclusive(x, y)
    }

    /// Separation selected by a slider pointer at height `y`; top is 0.
    pub fn separation_from_slider(&self, y: f32) -> u16 {
        let frac = ((y - self.slider.y) / self.slider.h).clamp(0.0, 1.0);
        clamp_separation(frac * MAX_SEPARATION as f32)
    }

    /// Separation selected by a plot pointer at `x`; left is 0.
    pub fn separation_from_plot(&self, x: f32) -> u16 {
        let frac = ((x - self.plot.x) / self.plot.w).clamp(0.0, 1.0);
        clamp_separation(frac * MAX_SEPARATION as f32)
    }

    /// Height within the slider track for a separation.
    pub fn slider_y(&self, separation: u16) -> f32 {
        self.slider.y + separation as f32 / MAX_SEPARATION as f32 * self.slider.h
    }

    /// Map normalised plot coordinates (x right, y up) to the surface.
    pub fn plot_point(&self, fx: f32, fy: f32) -> Point {
        Point::new(
            self.plot.x + fx * self.plot.w,
            self.plot.bottom() - fy * self.plot.h,
        )
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::new(120.0, 48.0)
    }
}
