use super::SessionView;
use super::startup::run_with_config;
use super::theme::color;
use super::theme::dark_visuals;
use eframe::egui;
use nj_browser::BrowserConfig;
use nj_browser::NavigationController;
use nj_browser::RenderingView;
use nj_core::INVALID_CONFIG;

fn session_controller() -> NavigationController<SessionView> {
    let config = BrowserConfig::default().with_classifier_seed(21);
    NavigationController::from_config(SessionView::new(&config.start_url), &config)
}

#[test]
fn session_starts_on_configured_page() {
    let mut view = SessionView::new("http://google.com");
    assert_eq!(view.current_url(), Some("http://google.com"));
    assert_eq!(view.take_url_changes(), vec!["http://google.com"]);
    assert!(view.take_url_changes().is_empty());
    assert!(!view.can_go_back());
    assert!(!view.can_go_forward());
}

#[test]
fn back_and_forward_walk_history() {
    let mut view = SessionView::new("http://a.test");
    view.load_url("http://b.test");
    view.load_url("http://c.test");
    let _ = view.take_url_changes();

    view.back();
    view.back();
    assert_eq!(view.current_url(), Some("http://a.test"));
    assert!(!view.can_go_back());

    view.back();
    assert_eq!(view.current_url(), Some("http://a.test"));

    view.forward();
    assert_eq!(view.current_url(), Some("http://b.test"));
    assert_eq!(view.take_url_changes(), vec!["http://b.test", "http://a.test", "http://b.test"]);
}

#[test]
fn new_load_truncates_forward_history() {
    let mut view = SessionView::new("http://a.test");
    view.load_url("http://b.test");
    view.back();
    view.load_url("http://c.test");
    assert_eq!(view.history_len(), 2);
    assert!(!view.can_go_forward());

    view.forward();
    assert_eq!(view.current_url(), Some("http://c.test"));
}

#[test]
fn repeated_load_does_not_duplicate_entry() {
    let mut view = SessionView::new("http://a.test");
    view.load_url("http://a.test");
    assert_eq!(view.history_len(), 1);
}

#[test]
fn reload_keeps_position_and_counts() {
    let mut view = SessionView::new("http://a.test");
    let _ = view.take_url_changes();
    view.reload();
    view.reload();
    assert_eq!(view.reload_count(), 2);
    assert_eq!(view.current_url(), Some("http://a.test"));
    assert!(view.take_url_changes().is_empty());
}

#[test]
fn home_change_reaches_url_bar_through_view_notifications() {
    let mut controller = session_controller();
    controller.home();
    for url in controller.view_mut().take_url_changes() {
        controller.on_external_url_changed(&url);
    }
    assert_eq!(controller.state().url_bar_text, "http://programming-hero.com");
}

#[test]
fn back_after_navigate_syncs_controller_state() {
    let mut controller = session_controller();
    controller.navigate("example.com");
    controller.back();
    for url in controller.view_mut().take_url_changes() {
        controller.on_external_url_changed(&url);
    }
    assert_eq!(controller.state().current_url, "http://google.com");
    assert_eq!(controller.state().url_bar_text, "http://google.com");
}

#[test]
fn dark_visuals_use_palette_colors() {
    let palette = BrowserConfig::default().palette;
    let visuals = dark_visuals(&palette);
    assert_eq!(visuals.panel_fill, egui::Color32::from_rgb(53, 53, 53));
    assert_eq!(visuals.extreme_bg_color, egui::Color32::from_rgb(25, 25, 25));
    assert_eq!(visuals.override_text_color, Some(egui::Color32::WHITE));
    assert_eq!(visuals.selection.bg_fill, color(palette.highlight));
    assert_eq!(visuals.error_fg_color, egui::Color32::from_rgb(255, 0, 0));
}

#[test]
fn invalid_config_fails_startup_before_opening_a_window() {
    let config = BrowserConfig::default().with_home_url("not a url");
    let error = match run_with_config(config) {
        Ok(()) => panic!("invalid home URL should abort startup"),
        Err(error) => error,
    };
    assert_eq!(error.code, INVALID_CONFIG);
    assert!(error.message.starts_with("home_url:"));
}
