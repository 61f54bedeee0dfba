use super::*;
use std::collections::VecDeque;

/// In-app rendering view: session history plus queued URL-change notices.
///
/// Page content is not fetched here; the viewport shows the current address.
#[derive(Debug)]
pub(super) struct SessionView {
    history: Vec<String>,
    history_index: Option<usize>,
    reload_count: u64,
    url_changes: VecDeque<String>,
}

impl SessionView {
    pub(super) fn new(start_url: &str) -> Self {
        let mut view = Self {
            history: Vec::new(),
            history_index: None,
            reload_count: 0,
            url_changes: VecDeque::new(),
        };
        view.load_url(start_url);
        view
    }

    fn push_history(&mut self, url: String) {
        if let Some(index) = self.history_index {
            let keep_to = index.saturating_add(1);
            self.history.truncate(keep_to);
        }

        if self.history.last().is_some_and(|existing| existing == &url) {
            self.history_index = Some(self.history.len().saturating_sub(1));
            return;
        }

        self.history.push(url);
        self.history_index = Some(self.history.len().saturating_sub(1));
    }

    fn move_to(&mut self, index: usize) {
        let Some(url) = self.history.get(index).cloned() else {
            return;
        };
        self.history_index = Some(index);
        self.url_changes.push_back(url);
    }

    pub(super) fn can_go_back(&self) -> bool {
        matches!(self.history_index, Some(index) if index > 0)
    }

    pub(super) fn can_go_forward(&self) -> bool {
        matches!(self.history_index, Some(index) if index + 1 < self.history.len())
    }

    pub(super) fn history_len(&self) -> usize {
        self.history.len()
    }

    pub(super) fn reload_count(&self) -> u64 {
        self.reload_count
    }

    /// Drains URL changes the controller has not seen yet, oldest first.
    pub(super) fn take_url_changes(&mut self) -> Vec<String> {
        self.url_changes.drain(..).collect()
    }
}

impl RenderingView for SessionView {
    fn load_url(&mut self, url: &str) {
        self.push_history(url.to_owned());
        self.url_changes.push_back(url.to_owned());
    }

    fn back(&mut self) {
        if let Some(index) = self.history_index.filter(|index| *index > 0) {
            self.move_to(index - 1);
        }
    }

    fn forward(&mut self) {
        if let Some(index) = self.history_index {
            self.move_to(index + 1);
        }
    }

    fn reload(&mut self) {
        self.reload_count = self.reload_count.saturating_add(1);
        tracing::debug!(url = self.current_url().unwrap_or("-"), "reload requested");
    }

    fn current_url(&self) -> Option<&str> {
        self.history_index
            .and_then(|index| self.history.get(index))
            .map(String::as_str)
    }
}
