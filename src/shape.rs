//! Geometry for the closed set of diagram shapes.
//!
//! Every placed shape is positioned by its top-left corner. Anchors are the
//! midpoints of the bounding box edges, always in [`Anchor::ALL`] order, so a
//! connector can refer to "anchor 1 of node A" without knowing the variant.

use crate::model::{Anchor, Arrow, Point, ShapeKind};

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

pub fn size(kind: &ShapeKind) -> (f32, f32) {
    match *kind {
        ShapeKind::Rectangle { width, height } => (width, height),
        ShapeKind::Circle { radius } => (radius * 2.0, radius * 2.0),
    }
}

pub fn arrow_size(arrow: &Arrow) -> (f32, f32) {
    (
        (arrow.to.x - arrow.from.x).abs(),
        (arrow.to.y - arrow.from.y).abs(),
    )
}

pub fn contains(kind: &ShapeKind, position: Point, point: Point) -> bool {
    match *kind {
        ShapeKind::Rectangle { width, height } => {
            point.x >= position.x
                && point.x <= position.x + width
                && point.y >= position.y
                && point.y <= position.y + height
        }
        ShapeKind::Circle { radius } => {
            let center = Point::new(position.x + radius, position.y + radius);
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            dx * dx + dy * dy <= radius * radius
        }
    }
}

pub fn anchor_points(kind: &ShapeKind, position: Point) -> [Point; 4] {
    let (w, h) = size(kind);
    Anchor::ALL.map(|anchor| anchor_offset(anchor, w, h) + position)
}

pub fn anchor_point(kind: &ShapeKind, position: Point, anchor: Anchor) -> Point {
    let (w, h) = size(kind);
    anchor_offset(anchor, w, h) + position
}

fn anchor_offset(anchor: Anchor, w: f32, h: f32) -> Point {
    match anchor {
        Anchor::Bottom => Point::new(w * 0.5, h),
        Anchor::Right => Point::new(w, h * 0.5),
        Anchor::Top => Point::new(w * 0.5, 0.0),
        Anchor::Left => Point::new(0.0, h * 0.5),
    }
}

/// Whether `point` lies within `padding` of the arrow's segment.
pub fn arrow_contains(arrow: &Arrow, point: Point, padding: f32) -> bool {
    distance_to_segment(point, arrow.from, arrow.to) <= padding
}

pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let ab_len2 = ab.x * ab.x + ab.y * ab.y;
    if ab_len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((ap.x * ab.x + ap.y * ab.y) / ab_len2).clamp(0.0, 1.0);
    let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
    p.distance(closest)
}
