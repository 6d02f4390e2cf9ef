use eframe::egui;
use snapboard::editor::Editor;
use snapboard::interaction::CursorHint;
use snapboard::scene;
use snapboard::settings::Settings;
use snapboard::surface::PainterSurface;

mod pointer;

pub struct DiagramApp {
    editor: Editor,
    cursor: CursorHint,
}

impl DiagramApp {
    pub fn new(settings: Settings) -> Self {
        let demo = settings.demo_scene;
        let mut editor = Editor::new(settings);
        if demo {
            if let Err(e) = scene::populate(&mut editor) {
                tracing::warn!(error = %e, "demo scene incomplete");
            }
        }
        Self {
            editor,
            cursor: CursorHint::Default,
        }
    }
}

fn cursor_icon(hint: CursorHint) -> egui::CursorIcon {
    match hint {
        CursorHint::Default => egui::CursorIcon::Default,
        CursorHint::Crosshair => egui::CursorIcon::Crosshair,
        CursorHint::Grab => egui::CursorIcon::Grab,
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
        CursorHint::PointingHand => egui::CursorIcon::PointingHand,
    }
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.cursor = self.editor.cancel().cursor;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                let rect = response.rect;
                if let Some(hint) = pointer::dispatch(ctx, rect, &mut self.editor) {
                    self.cursor = hint;
                }
                let mut surface = PainterSurface::new(&painter, rect);
                self.editor.render_frame(&mut surface);
            });

        ctx.set_cursor_icon(cursor_icon(self.cursor));
        // Redraw every display frame for as long as the window is open.
        ctx.request_repaint();
    }
}
