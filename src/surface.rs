//! The drawing capability the renderer consumes.
//!
//! The core never talks to a windowing toolkit directly; it issues primitive
//! calls against a [`Surface`]. The host provides an implementation, usually
//! [`PainterSurface`] wrapping an egui painter.

use eframe::egui;

use crate::model::{Point, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStroke {
    pub width: f32,
    pub color: Rgba,
    /// `(dash, gap)` lengths; `None` draws a solid line.
    pub dash: Option<(f32, f32)>,
}

impl LineStroke {
    pub fn solid(width: f32, color: Rgba) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }

    pub fn dashed(width: f32, color: Rgba, dash: f32, gap: f32) -> Self {
        Self {
            width,
            color,
            dash: Some((dash, gap)),
        }
    }
}

pub trait Surface {
    /// Size of the drawable region, in surface coordinates.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self, min: Point, max: Point, color: Rgba);
    fn fill_rect(&mut self, min: Point, width: f32, height: f32, color: Rgba);
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);
    fn fill_triangle(&mut self, points: [Point; 3], color: Rgba);
    fn stroke_line(&mut self, from: Point, to: Point, stroke: LineStroke);
}

/// Draws onto an egui painter. Surface coordinates are relative to the
/// top-left of `rect`, the canvas area allocated by the host.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self { painter, rect }
    }

    fn screen(&self, p: Point) -> egui::Pos2 {
        self.rect.min + p.to_pos2().to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.rect.width(), self.rect.height())
    }

    fn clear(&mut self, min: Point, max: Point, color: Rgba) {
        let rect = egui::Rect::from_min_max(self.screen(min), self.screen(max));
        self.painter.rect_filled(rect, 0.0, color.to_color32());
    }

    fn fill_rect(&mut self, min: Point, width: f32, height: f32, color: Rgba) {
        let rect = egui::Rect::from_min_size(self.screen(min), egui::vec2(width, height));
        self.painter.rect_filled(rect, 0.0, color.to_color32());
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.screen(center), radius, color.to_color32());
    }

    fn fill_triangle(&mut self, points: [Point; 3], color: Rgba) {
        let points = points.iter().map(|p| self.screen(*p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            color.to_color32(),
            egui::Stroke::NONE,
        ));
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: LineStroke) {
        let a = self.screen(from);
        let b = self.screen(to);
        let egui_stroke = egui::Stroke::new(stroke.width, stroke.color.to_color32());
        match stroke.dash {
            None => {
                self.painter.line_segment([a, b], egui_stroke);
            }
            Some((dash_len, gap_len)) => {
                draw_dashed_line(self.painter, a, b, egui_stroke, dash_len, gap_len);
            }
        }
    }
}

fn draw_dashed_line(
    painter: &egui::Painter,
    a: egui::Pos2,
    b: egui::Pos2,
    stroke: egui::Stroke,
    dash_len: f32,
    gap_len: f32,
) {
    let v = b - a;
    let len = v.length();
    if len <= f32::EPSILON || dash_len <= 0.0 {
        return;
    }
    let dir = v / len;
    let mut pos = 0.0;
    let mut drawing = true;
    while pos < len {
        let seg_len = if drawing { dash_len } else { gap_len.max(0.0) };
        let next_pos = (pos + seg_len).min(len);
        if drawing {
            painter.line_segment([a + dir * pos, a + dir * next_pos], stroke);
        }
        pos = next_pos;
        drawing = !drawing;
    }
}
