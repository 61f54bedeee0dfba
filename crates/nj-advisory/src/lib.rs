//! Advisory URL classifier.
//!
//! The classifier is a small fixed-shape network whose verdict is logged before
//! navigation and never consulted afterwards. Its weights are not trained and
//! its input is not derived from the URL, so the label carries no meaning.

use nj_core::BrowserError;
use nj_core::BrowserResult;

mod classifier;
mod features;

pub use classifier::ClassScores;
pub use classifier::ModelWeights;
pub use classifier::UrlClassifier;
pub use features::RandomFeatures;

/// Input width the classifier accepts.
pub const FEATURE_DIMENSIONS: usize = 100;

/// Fixed-length classifier input.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector([f32; FEATURE_DIMENSIONS]);

impl FeatureVector {
    pub fn new(values: [f32; FEATURE_DIMENSIONS]) -> Self {
        Self(values)
    }

    pub fn zeros() -> Self {
        Self([0.0; FEATURE_DIMENSIONS])
    }

    pub fn from_slice(values: &[f32]) -> BrowserResult<Self> {
        let values: [f32; FEATURE_DIMENSIONS] = values.try_into().map_err(|_| {
            BrowserError::classifier_unavailable(format!(
                "feature vector must have {FEATURE_DIMENSIONS} values, got {}",
                values.len()
            ))
        })?;
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Binary verdict shown for a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    Safe,
    Unsafe,
}

impl Advisory {
    /// Maps an output class index to a verdict; class 1 is safe, anything else unsafe.
    pub fn from_class_index(index: usize) -> Self {
        if index == 1 { Self::Safe } else { Self::Unsafe }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Unsafe => "unsafe",
        }
    }
}

/// Anything that can turn a feature vector into an advisory.
pub trait AdvisoryClassifier {
    fn score(&self, features: &FeatureVector) -> Advisory;
}

/// Produces the classifier input for a navigation target.
pub trait FeatureSource {
    fn features_for(&mut self, url: &str) -> FeatureVector;
}

#[cfg(test)]
mod tests {
    use super::Advisory;
    use super::FEATURE_DIMENSIONS;
    use super::FeatureVector;
    use nj_core::CLASSIFIER_UNAVAILABLE;

    #[test]
    fn accepts_exactly_one_hundred_features() {
        let values = vec![0.5_f32; FEATURE_DIMENSIONS];
        let features = match FeatureVector::from_slice(&values) {
            Ok(features) => features,
            Err(error) => panic!("{error}"),
        };
        assert_eq!(features.as_slice().len(), FEATURE_DIMENSIONS);
    }

    #[test]
    fn rejects_short_and_long_feature_slices() {
        for len in [0, 99, 101] {
            let values = vec![0.0_f32; len];
            let error = match FeatureVector::from_slice(&values) {
                Ok(_) => panic!("length {len} should be rejected"),
                Err(error) => error,
            };
            assert_eq!(error.code, CLASSIFIER_UNAVAILABLE);
        }
    }

    #[test]
    fn class_one_is_safe() {
        assert_eq!(Advisory::from_class_index(1), Advisory::Safe);
        assert_eq!(Advisory::from_class_index(0), Advisory::Unsafe);
        assert_eq!(Advisory::Safe.label(), "safe");
    }
}
