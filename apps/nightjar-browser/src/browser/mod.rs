use eframe::egui;
use nj_advisory::Advisory;
use nj_browser::BrowserConfig;
use nj_browser::NavigationController;
use nj_browser::NavigationRecord;
use nj_browser::RenderingView;

mod startup;
mod theme;
mod ui;
mod view;

#[cfg(test)]
mod tests;

pub(crate) use startup::run;
use view::SessionView;

const DEFAULT_LOG_FILTER: &str = "info";
const URL_BAR_HINT: &str = "Enter URL and press Enter...";

struct BrowserUiApp {
    controller: NavigationController<SessionView>,
    last_navigation: Option<NavigationRecord>,
    status_line: String,
}
