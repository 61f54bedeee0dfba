use super::*;

impl BrowserUiApp {
    pub(super) fn new(config: &BrowserConfig) -> Self {
        let view = SessionView::new(&config.start_url);
        let controller = NavigationController::from_config(view, config);
        tracing::info!(
            start_url = %config.start_url,
            home_url = %config.home_url,
            "browser window ready"
        );

        Self {
            controller,
            last_navigation: None,
            status_line: "Ready".to_owned(),
        }
    }

    /// Forwards URL changes queued by the view into the controller.
    fn sync_view_changes(&mut self) {
        for url in self.controller.view_mut().take_url_changes() {
            self.controller.on_external_url_changed(&url);
            self.status_line = format!("Loaded {url}");
        }
    }

    fn navigate_from_url_bar(&mut self) {
        let input = self.controller.state().url_bar_text.clone();
        let record = self.controller.navigate(&input);
        self.last_navigation = Some(record);
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let view = self.controller.view();
            let (can_go_back, can_go_forward) = (view.can_go_back(), view.can_go_forward());

            if ui
                .add_enabled(can_go_back, egui::Button::new("Back"))
                .clicked()
            {
                self.controller.back();
            }
            if ui
                .add_enabled(can_go_forward, egui::Button::new("Forward"))
                .clicked()
            {
                self.controller.forward();
            }
            if ui.button("Reload").clicked() {
                self.controller.reload();
                self.status_line = format!("Reloaded {}", self.controller.state().current_url);
            }
            if ui.button("Home").clicked() {
                self.controller.home();
            }

            let width = ui.available_width().max(200.0);
            let response = ui.add_sized(
                [width, 28.0],
                egui::TextEdit::singleline(self.controller.url_bar_text_mut())
                    .hint_text(URL_BAR_HINT),
            );

            let pressed_enter =
                response.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
            if pressed_enter {
                self.navigate_from_url_bar();
            }
        });
    }

    fn render_viewport(&self, ui: &mut egui::Ui) {
        let state = self.controller.state();
        if state.current_url.is_empty() {
            ui.label("No page loaded yet.");
            return;
        }

        ui.heading(state.current_url.as_str());
        ui.label(format!(
            "History entries: {}, reloads: {}",
            self.controller.view().history_len(),
            self.controller.view().reload_count()
        ));
        ui.separator();
        if ui.button("Open in system browser").clicked() {
            ui.ctx()
                .open_url(egui::OpenUrl::new_tab(state.current_url.as_str()));
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            ui.label(&self.status_line);
            if let Some(record) = &self.last_navigation {
                ui.separator();
                let text = format!("Advisory for {}: {}", record.url, record.advisory.label());
                match record.advisory {
                    Advisory::Safe => ui.label(text),
                    Advisory::Unsafe => {
                        let warn = ui.visuals().warn_fg_color;
                        ui.colored_label(warn, text)
                    }
                };
            }
        });
    }
}

impl eframe::App for BrowserUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_view_changes();

        egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        // Toolbar actions queue changes on the view; apply them this frame.
        self.sync_view_changes();

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.render_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_viewport(ui);
        });
    }
}
