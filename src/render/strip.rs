//! Paints the hue strip, the per-bucket tradeoff sliders and the frontier plot.

use crate::bucket::{bucket_index_of, hue_degree, hue_distance, HUE_NAMES};
use crate::color::Color;
use crate::frontier::{CostModel, Frontier, MAX_SEPARATION};
use crate::gamut::Shade;
use crate::interaction::{HoverTarget, Interaction};
use crate::layout::{Point, Rect, StripLayout};
use crate::resolve::{companion_on, companion_shades};

use super::{Align, Chrome, LinearGradient, Paint, Surface};

const GRID_DIVISIONS: usize = 6;
const Y_TICKS: usize = 4;
const X_TICK_STEP: usize = 30;
const HANDLE_RADIUS: f32 = 0.6;
const HANDLE_RING: f32 = 1.0;

fn shade_color(shade: Shade, hue: f32) -> Color {
    Color::from_lch(shade.lightness, shade.chroma, hue)
}

/// Read-only view over an [`Interaction`] that knows how to paint it.
pub struct StripView<'a> {
    state: &'a Interaction,
    chrome: Chrome,
}

impl<'a> StripView<'a> {
    pub fn new(state: &'a Interaction, chrome: Chrome) -> Self {
        Self { state, chrome }
    }

    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let layout = self.state.layout();
        surface.fill_rect(
            Rect::new(0.0, 0.0, layout.width, layout.height),
            &Paint::Solid(self.chrome.background),
        );

        let frontiers: Vec<Frontier> = (0..self.state.buckets().len())
            .map(|i| self.state.bucket_frontier(i))
            .collect();

        self.paint_bands(surface, layout, &frontiers);
        self.paint_sliders(surface, layout, &frontiers);
        self.paint_highlights(surface, layout);
        self.paint_labels(surface, layout);
        self.paint_info(surface, layout);
        self.paint_plot(surface, layout);
    }

    /// Companion color of a frontier entry under the active cost model.
    fn frontier_color(&self, frontier: &Frontier, separation: usize) -> Color {
        let companion = frontier.points()[separation].companion_hue;
        let (bright, _) = companion_shades(
            self.state.shades(),
            frontier.base_hue(),
            companion,
            frontier.model(),
        );
        shade_color(bright, companion as f32)
    }

    fn paint_bands<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &StripLayout,
        frontiers: &[Frontier],
    ) {
        let bands = &layout.bands;
        let shades = self.state.shades();
        for (i, bucket) in self.state.buckets().iter().enumerate() {
            let companion = companion_on(&frontiers[i], shades, bucket.tradeoff() as f32);
            let h2 = companion.hue as f32;
            let cells = [
                (bands.p1_bright, shade_color(bucket.bright, bucket.hue)),
                (bands.p1_dark, shade_color(bucket.dark, bucket.hue)),
                (bands.p2_dark, shade_color(companion.dark, h2)),
                (bands.p2_bright, shade_color(companion.bright, h2)),
            ];
            for (band, color) in cells {
                surface.fill_rect(layout.column_rect(band, i), &Paint::Solid(color));
            }

            if i > 0 {
                let x = layout.column_x(i);
                let outline = bands.outline();
                surface.stroke_path(
                    &[Point::new(x, outline.y), Point::new(x, outline.bottom())],
                    &Paint::Solid(self.chrome.divider),
                    false,
                );
            }
        }
    }

    fn paint_sliders<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        layout: &StripLayout,
        frontiers: &[Frontier],
    ) {
        let track = layout.slider;
        let rows = track.h.max(1.0) as usize;
        for (i, bucket) in self.state.buckets().iter().enumerate() {
            let column = layout.column_rect(track, i);
            for row in 0..rows {
                let frac = row as f32 / rows as f32;
                let separation = (frac * MAX_SEPARATION as f32).round() as usize;
                let color = self.frontier_color(&frontiers[i], separation);
                surface.fill_rect(
                    Rect::new(column.x, track.y + row as f32, column.w, 1.0),
                    &Paint::Solid(color),
                );
            }

            let y = layout.slider_y(bucket.tradeoff()).min(track.bottom() - 0.5);
            surface.stroke_path(
                &[Point::new(column.x, y), Point::new(column.right(), y)],
                &Paint::Solid(self.chrome.selection),
                false,
            );

            if i > 0 {
                surface.stroke_path(
                    &[Point::new(column.x, track.y), Point::new(column.x, track.bottom())],
                    &Paint::Solid(self.chrome.divider),
                    false,
                );
            }
        }
    }

    fn paint_highlights<S: Surface + ?Sized>(&self, surface: &mut S, layout: &StripLayout) {
        let selected = self.state.selected_bucket();
        let outline = layout.bands.outline();

        match self.state.hover() {
            HoverTarget::Bucket(i) if i != selected => {
                surface.stroke_rect(layout.column_rect(outline, i), self.chrome.hover);
            }
            HoverTarget::Slider(i) if i != selected => {
                surface.stroke_rect(layout.column_rect(layout.slider, i), self.chrome.hover);
            }
            _ => {}
        }

        surface.stroke_rect(layout.column_rect(outline, selected), self.chrome.selection);
        surface.stroke_rect(
            layout.column_rect(layout.slider, selected),
            self.chrome.selection,
        );
    }

    fn paint_labels<S: Surface + ?Sized>(&self, surface: &mut S, layout: &StripLayout) {
        let bands = &layout.bands;
        let selection = self.state.selection();
        let (top, bottom) = if selection.swapped {
            ("P2", "P1")
        } else {
            ("P1", "P2")
        };
        let label_x = layout.pad_x / 2.0;

        let top_mid = (bands.p1_bright.y + bands.p1_dark.bottom()) / 2.0;
        let bottom_mid = (bands.p2_dark.y + bands.p2_bright.bottom()) / 2.0;
        surface.text(Point::new(label_x, top_mid), top, self.chrome.text, Align::Center);
        surface.text(
            Point::new(label_x, bottom_mid),
            bottom,
            self.chrome.text,
            Align::Center,
        );

        let index = self.state.selected_bucket();
        let selected = layout.column_rect(bands.gap, index);
        surface.text(
            Point::new(selected.center().x, bands.gap.y),
            "vs",
            self.chrome.vs,
            Align::Center,
        );

        // tag the selected pair inside its own swatches
        let bucket = self.state.buckets()[index];
        let p1 = shade_color(bucket.bright, bucket.hue);
        let p2 = self.state.bucket_companion(index).bright_color();
        for (band, tag, fill) in [(bands.p1_bright, top, p1), (bands.p2_bright, bottom, p2)] {
            let cell = layout.column_rect(band, index).center();
            surface.text(cell, tag, fill.legible_text(), Align::Center);
        }

        for (hue, name) in HUE_NAMES {
            let column = layout.column_rect(bands.p1_bright, bucket_index_of(hue));
            surface.text(
                Point::new(column.center().x, layout.label_y),
                name,
                self.chrome.subtle,
                Align::Center,
            );
        }

        let track = layout.slider;
        let tick_x = layout.pad_x - 1.0;
        surface.text(Point::new(tick_x, track.y), "0°", self.chrome.subtle, Align::Right);
        surface.text(
            Point::new(tick_x, track.y + track.h / 2.0),
            "90°",
            self.chrome.subtle,
            Align::Right,
        );
        surface.text(
            Point::new(tick_x, track.bottom() - 1.0),
            "180°",
            self.chrome.subtle,
            Align::Right,
        );
        surface.text(
            Point::new(1.0, track.y + track.h / 4.0),
            "Δh",
            self.chrome.subtle,
            Align::Left,
        );
    }

    fn paint_info<S: Surface + ?Sized>(&self, surface: &mut S, layout: &StripLayout) {
        let line = info_line(self.state);
        let mid = layout.pad_x + (layout.width - layout.pad_x) / 2.0;
        surface.text(Point::new(mid, layout.info_y), &line, self.chrome.text, Align::Center);
    }

    fn paint_plot<S: Surface + ?Sized>(&self, surface: &mut S, layout: &StripLayout) {
        let plot = layout.plot;
        let shades = self.state.shades();
        let selection = self.state.selection();
        let frontier = self.state.selected_frontier();
        let scale = frontier.plot_scale();
        let tradeoff = self.state.tradeoff(self.state.selected_bucket());

        let p1 = shade_color(shades.bright(selection.role1_hue), selection.role1_hue);
        let (p2_shade, _) = companion_shades(
            shades,
            self.state.role1_degree(),
            hue_degree(selection.role2_hue),
            selection.cost_model,
        );
        let p2 = shade_color(p2_shade, selection.role2_hue);

        surface.fill_rect(plot, &Paint::Solid(self.chrome.plot_background));

        let grid = Paint::Solid(self.chrome.grid);
        for g in 0..=GRID_DIVISIONS {
            let f = g as f32 / GRID_DIVISIONS as f32;
            let y = plot.y + f * plot.h;
            let x = plot.x + f * plot.w;
            surface.stroke_path(&[Point::new(plot.x, y), Point::new(plot.right(), y)], &grid, false);
            surface.stroke_path(&[Point::new(x, plot.y), Point::new(x, plot.bottom())], &grid, false);
        }

        let axes = Paint::Solid(p1);
        surface.stroke_path(
            &[
                Point::new(plot.x, plot.y),
                Point::new(plot.x, plot.bottom()),
                Point::new(plot.right(), plot.bottom()),
            ],
            &axes,
            false,
        );

        let curve: Vec<Point> = frontier
            .points()
            .iter()
            .enumerate()
            .map(|(s, p)| {
                layout.plot_point(s as f32 / MAX_SEPARATION as f32, p.deficit / scale)
            })
            .collect();
        surface.stroke_path(&curve, &Paint::Solid(self.chrome.curve_outline), false);
        for (s, segment) in curve.windows(2).enumerate() {
            let color = self.frontier_color(&frontier, s);
            surface.stroke_path(segment, &Paint::Solid(color), false);
        }

        let handle = self.state.handle_point();
        let floor = Point::new(handle.x, plot.bottom());
        let wall = Point::new(plot.x, handle.y);
        surface.stroke_path(
            &[handle, floor],
            &Paint::Linear(LinearGradient::new(handle, floor, p2, p1)),
            true,
        );
        surface.stroke_path(
            &[handle, wall],
            &Paint::Linear(LinearGradient::new(wall, handle, p1, p2)),
            true,
        );
        surface.fill_circle(handle, HANDLE_RING, self.chrome.handle_ring);
        surface.fill_circle(handle, HANDLE_RADIUS, p2);

        for t in 0..=Y_TICKS {
            let frac = t as f32 / Y_TICKS as f32;
            let y = plot.bottom() - frac * plot.h;
            surface.text(
                Point::new(plot.x - 1.0, y),
                &format!("{:.3}", scale * frac),
                self.chrome.text,
                Align::Right,
            );
        }
        for deg in (0..=MAX_SEPARATION as usize).step_by(X_TICK_STEP) {
            let x = plot.x + deg as f32 / MAX_SEPARATION as f32 * plot.w;
            surface.text(
                Point::new(x, plot.bottom() + 1.0),
                &format!("{deg}°"),
                self.chrome.text,
                Align::Center,
            );
        }

        let mid = plot.center().x;
        surface.text(
            Point::new(mid, plot.bottom() + 2.0),
            "Minimum hue contrast",
            self.chrome.text,
            Align::Center,
        );
        surface.text(
            Point::new(mid, layout.info_y + 1.0),
            &format!(
                "Contrast vs Sacrifice Tradeoff  (y: {})",
                selection.cost_model.label()
            ),
            self.chrome.text,
            Align::Center,
        );
        surface.text(
            Point::new(mid, layout.handle_label_y),
            &format!(
                "Δh ≥ {tradeoff}°   deficit = {:.3}",
                frontier.at(tradeoff as f32).deficit
            ),
            self.chrome.text,
            Align::Center,
        );

        let toggle_text = if self.state.hover() == HoverTarget::ModelToggle {
            self.chrome.text
        } else {
            self.chrome.subtle
        };
        surface.fill_rect(layout.toggle, &Paint::Solid(self.chrome.toggle_background));
        surface.text(
            Point::new(layout.toggle.center().x, layout.toggle.y),
            toggle_label(selection.cost_model),
            toggle_text,
            Align::Center,
        );
    }
}

fn toggle_label(model: CostModel) -> &'static str {
    match model {
        CostModel::ChromaOnly => "▸ Chroma only",
        CostModel::ChromaLightness => "▸ Chroma + Lightness",
    }
}

/// One-line summary of the current pair, shown under the sliders.
pub fn info_line(state: &Interaction) -> String {
    let selection = state.selection();
    let (top, bottom) = if selection.swapped {
        ("P2", "P1")
    } else {
        ("P1", "P2")
    };
    let h1 = state.role1_degree();
    let h2 = hue_degree(selection.role2_hue);
    let p1 = state.shades().bright(h1 as f32);
    let (p2, _) = companion_shades(state.shades(), h1, h2, selection.cost_model);
    let separation = hue_distance(h1 as f32, h2 as f32).round() as u16;
    format!(
        "{top}: {h1}°  {bottom}: {h2}°  (Δ{separation}°)   L₁={:.2}  C₁={:.3}  L₂={:.2}  C₂={:.3}",
        p1.lightness, p1.chroma, p2.lightness, p2.chroma
    )
}
