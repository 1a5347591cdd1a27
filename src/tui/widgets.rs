use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::interaction::{CompanionMode, DragMode, Interaction};
use crate::layout::{Point, Rect as SurfaceRect};
use crate::render::{Align, Chrome, Paint, StripView, Surface};

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// A [`Surface`] over a ratatui buffer: one surface unit per cell, cells
/// painted when their centre falls inside a shape.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut ratatui::buffer::Cell> {
        if col < 0 || row < 0 || col >= self.area.width as i32 || row >= self.area.height as i32 {
            return None;
        }
        let pos = (self.area.x + col as u16, self.area.y + row as u16);
        self.buf.cell_mut(pos)
    }

    /// Cell indices whose centres lie in `[lo, hi)`.
    fn span(lo: f32, hi: f32) -> std::ops::Range<i32> {
        (lo - 0.5).ceil() as i32..(hi - 0.5).ceil() as i32
    }

    fn plot(&mut self, p: Point, color: AppColor, symbol: &str) {
        let (col, row) = (p.x.floor() as i32, p.y.floor() as i32);
        if let Some(cell) = self.cell_mut(col, row) {
            cell.set_symbol(symbol).set_fg(to_color(color));
        }
    }
}

impl Surface for BufferSurface<'_> {
    fn fill_rect(&mut self, rect: SurfaceRect, paint: &Paint) {
        for row in Self::span(rect.y, rect.bottom()) {
            for col in Self::span(rect.x, rect.right()) {
                let color = paint.color_at(Point::new(col as f32 + 0.5, row as f32 + 0.5));
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.set_symbol(" ").set_bg(to_color(color));
                }
            }
        }
    }

    fn stroke_rect(&mut self, rect: SurfaceRect, color: AppColor) {
        let cols = Self::span(rect.x, rect.right());
        let rows = Self::span(rect.y, rect.bottom());
        if cols.is_empty() || rows.is_empty() {
            return;
        }
        let fg = to_color(color);
        for row in rows.clone() {
            for col in [cols.start, cols.end - 1] {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.set_fg(fg).set_style(Style::default().add_modifier(Modifier::BOLD));
                    if cell.symbol() == " " {
                        cell.set_symbol(if col == cols.start { "▏" } else { "▕" });
                    }
                }
            }
        }
        for col in cols {
            for row in [rows.start, rows.end - 1] {
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.set_fg(fg);
                    if cell.symbol() == " " {
                        cell.set_symbol(if row == rows.start { "▔" } else { "▁" });
                    }
                }
            }
        }
    }

    fn stroke_path(&mut self, points: &[Point], paint: &Paint, dashed: bool) {
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let len = (b.x - a.x).hypot(b.y - a.y);
            let steps = (len * 2.0).ceil().max(1.0) as usize;
            let symbol = if (b.x - a.x).abs() < 0.01 {
                "│"
            } else if (b.y - a.y).abs() < 0.01 {
                "─"
            } else {
                "•"
            };
            for i in 0..=steps {
                if dashed && (i / 2) % 2 == 1 {
                    continue;
                }
                let t = i as f32 / steps as f32;
                let p = Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
                self.plot(p, paint.color_at(p), symbol);
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: AppColor) {
        let bg = to_color(color);
        for row in Self::span(center.y - radius, center.y + radius) {
            for col in Self::span(center.x - radius, center.x + radius) {
                let (dx, dy) = (col as f32 + 0.5 - center.x, row as f32 + 0.5 - center.y);
                if dx * dx + dy * dy <= radius * radius {
                    if let Some(cell) = self.cell_mut(col, row) {
                        cell.set_symbol(" ").set_bg(bg);
                    }
                }
            }
        }
        // always mark the centre cell so tiny radii stay visible
        let (col, row) = (center.x.floor() as i32, center.y.floor() as i32);
        if let Some(cell) = self.cell_mut(col, row) {
            cell.set_symbol("●").set_fg(bg);
        }
    }

    fn text(&mut self, at: Point, text: &str, color: AppColor, align: Align) {
        let width = text.chars().count() as f32;
        let x = match align {
            Align::Left => at.x,
            Align::Center => at.x - width / 2.0,
            Align::Right => at.x - width,
        };
        let row = at.y.floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            let col = (x + i as f32).round() as i32;
            if let Some(cell) = self.cell_mut(col, row) {
                cell.set_char(ch).set_fg(to_color(color));
            }
        }
    }
}

/// The strip view and frontier plot as a ratatui widget.
pub struct StripWidget<'a> {
    state: &'a Interaction,
    chrome: Chrome,
}

impl<'a> StripWidget<'a> {
    pub fn new(state: &'a Interaction, chrome: Chrome) -> Self {
        Self { state, chrome }
    }
}

impl Widget for StripWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut surface = BufferSurface::new(buf, area);
        StripView::new(self.state, self.chrome).paint(&mut surface);
    }
}

/// Key hints plus the current mode flags.
pub struct StatusBar<'a> {
    state: &'a Interaction,
    chrome: Chrome,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a Interaction, chrome: Chrome) -> Self {
        Self { state, chrome }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key = Style::default()
            .fg(to_color(self.chrome.text))
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(to_color(self.chrome.subtle));
        let selection = self.state.selection();

        let lock = match selection.companion_mode {
            CompanionMode::Locked => "[locked]",
            CompanionMode::Independent => "[unlocked]",
        };
        let drag = match self.state.drag_mode() {
            DragMode::Idle => String::new(),
            DragMode::DraggingGraphHandle => " dragging handle".to_string(),
            DragMode::DraggingBucketSlider(i) => format!(" dragging slider {i}"),
        };

        let line = Line::from(vec![
            Span::styled(" q", key),
            Span::styled(":Quit ", dim),
            Span::styled("m", key),
            Span::styled(":Model ", dim),
            Span::styled("l", key),
            Span::styled(":Lock ", dim),
            Span::styled("s", key),
            Span::styled(":Swap ", dim),
            Span::styled("←/→", key),
            Span::styled(":Hue ", dim),
            Span::styled(format!("{} {lock}{drag}", selection.cost_model), key),
        ]);
        Paragraph::new(line)
            .style(Style::default().bg(to_color(self.chrome.background)))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(width: u16, height: u16) -> Buffer {
        Buffer::empty(Rect::new(0, 0, width, height))
    }

    #[test]
    fn fill_rect_paints_cells_by_centre() {
        let mut buf = buffer(10, 4);
        let area = buf.area;
        let red = AppColor::new(255, 0, 0);
        BufferSurface::new(&mut buf, area)
            .fill_rect(SurfaceRect::new(2.0, 1.0, 3.0, 2.0), &Paint::Solid(red));

        assert_eq!(buf[(2, 1)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(4, 2)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(5, 1)].bg, Color::Reset);
        assert_eq!(buf[(2, 3)].bg, Color::Reset);
    }

    #[test]
    fn drawing_outside_the_area_is_ignored() {
        let mut buf = buffer(4, 2);
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.fill_rect(SurfaceRect::new(-5.0, -5.0, 100.0, 100.0), &Paint::Solid(AppColor::WHITE));
        surface.text(Point::new(50.0, 50.0), "far away", AppColor::WHITE, Align::Left);
        surface.stroke_path(
            &[Point::new(-10.0, 0.5), Point::new(10.0, 0.5)],
            &Paint::Solid(AppColor::WHITE),
            true,
        );
        assert_eq!(buf[(3, 1)].bg, Color::Rgb(255, 255, 255));
    }

    #[test]
    fn text_alignment() {
        let mut buf = buffer(12, 1);
        let area = buf.area;
        let mut surface = BufferSurface::new(&mut buf, area);
        surface.text(Point::new(6.0, 0.0), "ab", AppColor::WHITE, Align::Center);
        surface.text(Point::new(12.0, 0.0), "z", AppColor::WHITE, Align::Right);
        surface.text(Point::new(0.0, 0.0), "q", AppColor::WHITE, Align::Left);
        assert_eq!(buf[(5, 0)].symbol(), "a");
        assert_eq!(buf[(6, 0)].symbol(), "b");
        assert_eq!(buf[(11, 0)].symbol(), "z");
        assert_eq!(buf[(0, 0)].symbol(), "q");
    }
}
