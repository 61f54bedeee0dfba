//! Startup configuration with in-code defaults.

use nj_core::BrowserError;
use nj_core::BrowserResult;
use nj_core::INVALID_CONFIG;
use nj_net::BrowserUrl;

pub const DEFAULT_WINDOW_TITLE: &str = "My Cool Browser";
pub const DEFAULT_START_URL: &str = "http://google.com";
pub const DEFAULT_HOME_URL: &str = "http://programming-hero.com";

/// 8-bit RGB color, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Process-wide dark color roles, applied once when the window is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DarkPalette {
    pub window: Rgb,
    pub window_text: Rgb,
    pub base: Rgb,
    pub alternate_base: Rgb,
    pub tooltip_base: Rgb,
    pub tooltip_text: Rgb,
    pub text: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub bright_text: Rgb,
    pub highlight: Rgb,
    pub highlighted_text: Rgb,
}

impl Default for DarkPalette {
    fn default() -> Self {
        let charcoal = Rgb(53, 53, 53);
        let white = Rgb(255, 255, 255);

        Self {
            window: charcoal,
            window_text: white,
            base: Rgb(25, 25, 25),
            alternate_base: charcoal,
            tooltip_base: white,
            tooltip_text: white,
            text: white,
            button: charcoal,
            button_text: white,
            bright_text: Rgb(255, 0, 0),
            // Purple (142, 45, 197) with its HSV value scaled to 150% (Qt `lighter()`).
            highlight: Rgb(198, 99, 255),
            highlighted_text: Rgb(0, 0, 0),
        }
    }
}

/// Everything the browser window needs at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    pub window_title: String,
    pub start_url: String,
    pub home_url: String,
    /// Fixes classifier weights and feature noise; `None` draws from OS entropy.
    pub classifier_seed: Option<u64>,
    pub palette: DarkPalette,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            window_title: DEFAULT_WINDOW_TITLE.to_owned(),
            start_url: DEFAULT_START_URL.to_owned(),
            home_url: DEFAULT_HOME_URL.to_owned(),
            classifier_seed: None,
            palette: DarkPalette::default(),
        }
    }
}

impl BrowserConfig {
    pub fn with_classifier_seed(mut self, seed: u64) -> Self {
        self.classifier_seed = Some(seed);
        self
    }

    pub fn with_home_url(mut self, home_url: impl Into<String>) -> Self {
        self.home_url = home_url.into();
        self
    }

    pub fn validate(&self) -> BrowserResult<()> {
        if self.window_title.trim().is_empty() {
            return Err(BrowserError::new(
                INVALID_CONFIG,
                "window title must not be empty",
            ));
        }

        for (field, value) in [("start_url", &self.start_url), ("home_url", &self.home_url)] {
            BrowserUrl::parse(value)
                .map_err(|error| BrowserError::new(INVALID_CONFIG, format!("{field}: {error}")))?;
        }

        Ok(())
    }
}
