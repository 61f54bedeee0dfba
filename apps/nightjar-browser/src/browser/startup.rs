use super::*;
use nj_core::BrowserError;
use nj_core::BrowserResult;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const WINDOW_FAILED: &str = "ui.window_failed";

pub(crate) fn run() -> BrowserResult<()> {
    init_tracing();
    run_with_config(BrowserConfig::default())
}

/// Validates `config`, then blocks in the window event loop until it closes.
pub(super) fn run_with_config(config: BrowserConfig) -> BrowserResult<()> {
    config.validate()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_maximized(true)
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| {
            theme::apply_dark_palette(&cc.egui_ctx, &config.palette);
            Ok(Box::new(BrowserUiApp::new(&config)))
        }),
    )
    .map_err(|error| BrowserError::new(WINDOW_FAILED, format!("window event loop failed: {error}")))
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
