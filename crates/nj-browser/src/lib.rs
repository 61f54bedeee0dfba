//! Navigation controller sitting between the toolbar and the rendering view.

use nj_advisory::Advisory;
use nj_advisory::AdvisoryClassifier;
use nj_advisory::FeatureSource;
use nj_advisory::RandomFeatures;
use nj_advisory::UrlClassifier;
use nj_net::BrowserUrl;

pub mod config;

pub use config::BrowserConfig;
pub use config::DarkPalette;
pub use config::Rgb;

const ADVISORY_TARGET: &str = "nightjar::advisory";
const FEATURE_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Embedded page view the controller drives.
///
/// Load failures stay inside the view; nothing is reported back.
pub trait RenderingView {
    fn load_url(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn current_url(&self) -> Option<&str>;
}

/// URL state owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub current_url: String,
    pub url_bar_text: String,
}

/// What a single `navigate` call loaded and what the classifier said about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRecord {
    pub url: String,
    pub advisory: Advisory,
}

pub struct NavigationController<V: RenderingView> {
    state: NavigationState,
    view: V,
    classifier: Box<dyn AdvisoryClassifier>,
    features: Box<dyn FeatureSource>,
    home_url: String,
}

impl<V: RenderingView> NavigationController<V> {
    pub fn new(
        view: V,
        classifier: Box<dyn AdvisoryClassifier>,
        features: Box<dyn FeatureSource>,
        home_url: impl Into<String>,
    ) -> Self {
        let current_url = view.current_url().unwrap_or_default().to_owned();
        Self {
            state: NavigationState {
                url_bar_text: current_url.clone(),
                current_url,
            },
            view,
            classifier,
            features,
            home_url: home_url.into(),
        }
    }

    /// Builds the untrained classifier and noise source described by `config`.
    pub fn from_config(view: V, config: &BrowserConfig) -> Self {
        let (classifier, features) = match config.classifier_seed {
            Some(seed) => (
                UrlClassifier::from_seed(seed),
                RandomFeatures::from_seed(seed ^ FEATURE_SEED_SALT),
            ),
            None => (UrlClassifier::from_entropy(), RandomFeatures::from_entropy()),
        };
        tracing::debug!(
            seeded = config.classifier_seed.is_some(),
            "advisory classifier initialized with untrained weights"
        );

        Self::new(
            view,
            Box::new(classifier),
            Box::new(features),
            config.home_url.clone(),
        )
    }

    pub fn normalize(&self, input: &str) -> String {
        nj_net::normalize_input_url(input)
    }

    /// Scores `url`. The feature vector does not depend on the URL.
    pub fn evaluate(&mut self, url: &str) -> Advisory {
        let features = self.features.features_for(url);
        self.classifier.score(&features)
    }

    /// Normalizes, logs the advisory, then loads the URL whatever the advisory was.
    pub fn navigate(&mut self, input: &str) -> NavigationRecord {
        let url = self.normalize(input);
        let advisory = self.evaluate(&url);
        log_advisory(&url, advisory);

        self.view.load_url(&url);
        self.state.current_url = url.clone();
        self.state.url_bar_text = url.clone();

        NavigationRecord { url, advisory }
    }

    /// Syncs the URL bar with a change that originated inside the view.
    pub fn on_external_url_changed(&mut self, url: &str) {
        if self.state.current_url != url {
            tracing::debug!(url, "view reported url change");
        }
        self.state.current_url = url.to_owned();
        self.state.url_bar_text = url.to_owned();
    }

    /// Loads the configured home URL without normalizing or classifying it.
    pub fn home(&mut self) {
        self.view.load_url(&self.home_url);
        self.state.current_url = self.home_url.clone();
    }

    pub fn back(&mut self) {
        self.view.back();
    }

    pub fn forward(&mut self) {
        self.view.forward();
    }

    pub fn reload(&mut self) {
        self.view.reload();
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn url_bar_text_mut(&mut self) -> &mut String {
        &mut self.state.url_bar_text
    }

    pub fn home_url(&self) -> &str {
        &self.home_url
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

fn log_advisory(url: &str, advisory: Advisory) {
    let host = BrowserUrl::parse(url)
        .map(|parsed| parsed.host().to_owned())
        .unwrap_or_else(|_| "-".to_owned());

    match advisory {
        Advisory::Safe => {
            tracing::info!(target: ADVISORY_TARGET, url, host = %host, "navigating to a safe URL");
        }
        Advisory::Unsafe => {
            tracing::warn!(target: ADVISORY_TARGET, url, host = %host, "the URL may be unsafe");
        }
    }
}
