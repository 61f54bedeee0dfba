use crate::FEATURE_DIMENSIONS;
use crate::FeatureSource;
use crate::FeatureVector;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

/// Standard-normal noise in place of real URL features.
///
/// The URL is ignored. Each call draws a fresh vector.
#[derive(Debug, Clone)]
pub struct RandomFeatures {
    rng: StdRng,
}

impl RandomFeatures {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn standard_normal(&mut self) -> f32 {
        // Box-Muller; `1.0 - gen()` keeps the log argument in (0, 1].
        let radius = (-2.0 * (1.0 - self.rng.r#gen::<f32>()).ln()).sqrt();
        let angle = TAU * self.rng.r#gen::<f32>();
        radius * angle.cos()
    }
}

impl FeatureSource for RandomFeatures {
    fn features_for(&mut self, _url: &str) -> FeatureVector {
        let mut values = [0.0_f32; FEATURE_DIMENSIONS];
        for value in &mut values {
            *value = self.standard_normal();
        }
        FeatureVector::new(values)
    }
}
