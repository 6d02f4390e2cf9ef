//! Demo scene loaded on startup when `demo_scene` is enabled.

use crate::diagram::DiagramError;
use crate::editor::Editor;
use crate::model::{Anchor, Arrow, Node, Point, Rgba, Shape};

const BLUE: Rgba = Rgba::rgb(0x04, 0x00, 0xff);
const RED: Rgba = Rgba::rgb(0xff, 0x00, 0x00);
const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);

pub fn populate(editor: &mut Editor) -> Result<(), DiagramError> {
    let blue = editor.add_node(Node::placed(
        "blue",
        Point::new(200.0, 50.0),
        Shape::rectangle(100.0, 50.0, BLUE),
    ));
    let red = editor.add_node(Node::placed(
        "red",
        Point::new(50.0, 175.0),
        Shape::square(50.0, RED),
    ));
    let circle = editor.add_node(Node::placed(
        "circle",
        Point::new(150.0, 150.0),
        Shape::circle(50.0, RED),
    ));
    editor.connect(blue, Anchor::Left, red, Anchor::Top)?;

    // Placed by coordinates; binds to blue's bottom and the circle's top.
    let from = editor.diagram().anchor_position(blue, Anchor::Bottom)?;
    let to = editor.diagram().anchor_position(circle, Anchor::Top)?;
    editor.add_node(Node::edge("blue->circle", Arrow::new(from, to, WHITE)));

    tracing::info!(nodes = editor.diagram().len(), "demo scene ready");
    Ok(())
}
