//! Per-frame painting of the diagram onto a [`Surface`](crate::surface::Surface).

use crate::editor::Editor;
use crate::interaction::DragState;
use crate::model::{Arrow, Node, NodeKind, Point, Rgba, Shape, ShapeKind};
use crate::settings::Settings;
use crate::shape;
use crate::surface::{LineStroke, Surface};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

const ARROW_WIDTH: f32 = 2.0;
const ARROW_HEAD_SIZE: f32 = 10.0;
const RUBBER_BAND_DASH: f32 = 10.0;
const RUBBER_BAND_GAP: f32 = 5.0;

/// Clears the surface and draws every node, its anchors, and any in-progress connector.
pub fn render_frame(surface: &mut dyn Surface, editor: &Editor) {
    let settings = editor.settings();
    let (w, h) = surface.size();
    surface.clear(Point::new(0.0, 0.0), Point::new(w, h), settings.background);

    for node in editor.diagram().nodes() {
        draw_node(surface, node);
        draw_anchors(surface, node, settings);
    }

    if let DragState::DrawingConnector {
        source,
        anchor,
        cursor,
    } = editor.drag_state()
    {
        if let Ok(start) = editor.diagram().anchor_position(source, anchor) {
            surface.stroke_line(
                start,
                cursor,
                LineStroke::dashed(
                    ARROW_WIDTH,
                    settings.rubber_band_color,
                    RUBBER_BAND_DASH,
                    RUBBER_BAND_GAP,
                ),
            );
        }
    }
}

pub fn draw_node(surface: &mut dyn Surface, node: &Node) {
    match &node.kind {
        NodeKind::Placed { position, shape } => draw_shape(surface, shape, *position),
        NodeKind::Edge(arrow) => draw_arrow(surface, arrow),
    }
}

fn draw_shape(surface: &mut dyn Surface, shape: &Shape, position: Point) {
    match shape.kind {
        ShapeKind::Rectangle { width, height } => {
            surface.fill_rect(position, width, height, shape.color);
        }
        ShapeKind::Circle { radius } => {
            let center = Point::new(position.x + radius, position.y + radius);
            surface.fill_circle(center, radius, shape.color);
        }
    }
}

fn draw_arrow(surface: &mut dyn Surface, arrow: &Arrow) {
    surface.stroke_line(arrow.from, arrow.to, LineStroke::solid(ARROW_WIDTH, arrow.color));
    if let Some(head) = arrowhead(arrow.from, arrow.to) {
        surface.fill_triangle(head, arrow.color);
    }
}

/// Triangle with its tip on `b`, pointing along `a -> b`.
fn arrowhead(a: Point, b: Point) -> Option<[Point; 3]> {
    let v = b - a;
    let len = a.distance(b);
    if len <= f32::EPSILON {
        return None;
    }
    let dir = Point::new(v.x / len, v.y / len);
    let perp = Point::new(-dir.y, dir.x);
    let base = Point::new(b.x - dir.x * ARROW_HEAD_SIZE, b.y - dir.y * ARROW_HEAD_SIZE);
    let spread = ARROW_HEAD_SIZE * 0.6;
    Some([
        b,
        Point::new(base.x + perp.x * spread, base.y + perp.y * spread),
        Point::new(base.x - perp.x * spread, base.y - perp.y * spread),
    ])
}

/// Small squares on each anchor. Connectors have none.
pub fn draw_anchors(surface: &mut dyn Surface, node: &Node, settings: &Settings) {
    let NodeKind::Placed { position, shape } = &node.kind else {
        return;
    };
    let size = settings.anchor_marker_size;
    for anchor in shape::anchor_points(&shape.kind, *position) {
        let min = Point::new(anchor.x - size * 0.5, anchor.y - size * 0.5);
        surface.fill_rect(min, size, size, anchor_color(settings.anchor_color, shape.color));
    }
}

/// Keeps markers visible on a shape filled with the marker color.
fn anchor_color(marker: Rgba, fill: Rgba) -> Rgba {
    if marker == fill {
        Rgba::rgb(255 - marker.r, 255 - marker.g, 255 - marker.b)
    } else {
        marker
    }
}
