mod app;

use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = snapboard::settings::load_or_default();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("snapboard")
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    tracing::info!("starting snapboard");
    let result = eframe::run_native(
        "snapboard",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app::DiagramApp::new(settings)))),
    );
    if let Err(e) = &result {
        tracing::error!(error = %e, "could not create drawing surface");
    }
    result
}
