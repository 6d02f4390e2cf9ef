use eframe::egui;
use snapboard::editor::Editor;
use snapboard::interaction::CursorHint;
use snapboard::model::Point;

fn to_surface(rect: egui::Rect, pos: egui::Pos2) -> Point {
    Point::from_pos2((pos - rect.min).to_pos2())
}

/// Feeds this frame's primary-button pointer events to the editor in order.
/// Returns the cursor requested by the last handled event, if any.
pub(super) fn dispatch(ctx: &egui::Context, rect: egui::Rect, editor: &mut Editor) -> Option<CursorHint> {
    let events = ctx.input(|i| i.events.clone());
    let mut cursor = None;
    for event in events {
        let response = match event {
            egui::Event::PointerMoved(pos) => editor.pointer_move(to_surface(rect, pos)),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                ..
            } if rect.contains(pos) => editor.pointer_down(to_surface(rect, pos)),
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                ..
            } => editor.pointer_up(to_surface(rect, pos)),
            _ => continue,
        };
        cursor = Some(response.cursor);
    }
    cursor
}
