use crate::Advisory;
use crate::AdvisoryClassifier;
use crate::FEATURE_DIMENSIONS;
use crate::FeatureVector;
use nj_core::BrowserError;
use nj_core::BrowserResult;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Width of the single hidden layer.
pub const HIDDEN_UNITS: usize = 50;

/// Number of output classes (`0` unsafe, `1` safe).
pub const OUTPUT_CLASSES: usize = 2;

/// Raw parameters for both layers, stored row-major as `[out][in]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelWeights {
    pub hidden_weights: Vec<f32>,
    pub hidden_bias: Vec<f32>,
    pub output_weights: Vec<f32>,
    pub output_bias: Vec<f32>,
}

/// Softmax output of the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub unsafe_probability: f32,
    pub safe_probability: f32,
}

impl ClassScores {
    /// Index of the highest-probability class; the first maximum wins a tie.
    pub fn argmax(self) -> usize {
        usize::from(self.safe_probability > self.unsafe_probability)
    }

    pub fn advisory(self) -> Advisory {
        Advisory::from_class_index(self.argmax())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Linear {
    inputs: usize,
    outputs: usize,
    weights: Vec<f32>,
    bias: Vec<f32>,
}

impl Linear {
    fn from_parts(
        layer: &str,
        inputs: usize,
        outputs: usize,
        weights: Vec<f32>,
        bias: Vec<f32>,
    ) -> BrowserResult<Self> {
        if weights.len() != inputs * outputs {
            return Err(BrowserError::classifier_unavailable(format!(
                "{layer} weights must hold {} values ({outputs}x{inputs}), got {}",
                inputs * outputs,
                weights.len()
            )));
        }
        if bias.len() != outputs {
            return Err(BrowserError::classifier_unavailable(format!(
                "{layer} bias must hold {outputs} values, got {}",
                bias.len()
            )));
        }

        Ok(Self {
            inputs,
            outputs,
            weights,
            bias,
        })
    }

    /// Uniform in `[-1/sqrt(fan_in), 1/sqrt(fan_in))` for weights and bias alike.
    fn random(inputs: usize, outputs: usize, rng: &mut impl Rng) -> Self {
        let bound = 1.0 / (inputs as f32).sqrt();
        let mut sample = || rng.gen_range(-bound..bound);
        let weights = (0..inputs * outputs).map(|_| sample()).collect();
        let bias = (0..outputs).map(|_| sample()).collect();

        Self {
            inputs,
            outputs,
            weights,
            bias,
        }
    }

    fn forward(&self, input: &[f32]) -> Vec<f32> {
        debug_assert_eq!(input.len(), self.inputs);
        self.weights
            .chunks_exact(self.inputs)
            .zip(&self.bias)
            .map(|(row, bias)| {
                row.iter()
                    .zip(input)
                    .fold(*bias, |acc, (weight, value)| acc + weight * value)
            })
            .collect()
    }
}

/// `Linear(100, 50) -> ReLU -> Linear(50, 2) -> Softmax`.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlClassifier {
    hidden: Linear,
    output: Linear,
}

impl UrlClassifier {
    pub fn with_random_weights(rng: &mut impl Rng) -> Self {
        Self {
            hidden: Linear::random(FEATURE_DIMENSIONS, HIDDEN_UNITS, rng),
            output: Linear::random(HIDDEN_UNITS, OUTPUT_CLASSES, rng),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::with_random_weights(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_random_weights(&mut StdRng::from_entropy())
    }

    pub fn from_weights(weights: ModelWeights) -> BrowserResult<Self> {
        let hidden = Linear::from_parts(
            "hidden",
            FEATURE_DIMENSIONS,
            HIDDEN_UNITS,
            weights.hidden_weights,
            weights.hidden_bias,
        )?;
        let output = Linear::from_parts(
            "output",
            HIDDEN_UNITS,
            OUTPUT_CLASSES,
            weights.output_weights,
            weights.output_bias,
        )?;

        Ok(Self { hidden, output })
    }

    pub fn weights(&self) -> ModelWeights {
        ModelWeights {
            hidden_weights: self.hidden.weights.clone(),
            hidden_bias: self.hidden.bias.clone(),
            output_weights: self.output.weights.clone(),
            output_bias: self.output.bias.clone(),
        }
    }

    pub fn probabilities(&self, features: &FeatureVector) -> ClassScores {
        let mut hidden = self.hidden.forward(features.as_slice());
        for value in &mut hidden {
            *value = value.max(0.0);
        }

        let logits = self.output.forward(&hidden);
        let probabilities = softmax(&logits);
        ClassScores {
            unsafe_probability: probabilities[0],
            safe_probability: probabilities[1],
        }
    }
}

impl AdvisoryClassifier for UrlClassifier {
    fn score(&self, features: &FeatureVector) -> Advisory {
        self.probabilities(features).advisory()
    }
}

fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|logit| (logit - max).exp()).collect();
    let total: f32 = exps.iter().sum();
    exps.into_iter().map(|value| value / total).collect()
}
