//! Leaf failure-probability sampling.

use rand::Rng;

/// Samples basic-event probabilities biased toward small values.
///
/// Draws a uniform `u` in [0, 1) and returns `u^p`. Raising a uniform
/// variate to a high power concentrates mass near 0, modeling that most
/// basic failure events are rare; the exponent is the bias strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafProbabilitySampler {
    exponent: i32,
}

impl LeafProbabilitySampler {
    pub const DEFAULT_EXPONENT: i32 = 10;

    pub fn new(exponent: i32) -> Self {
        Self { exponent }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random::<f64>().powi(self.exponent)
    }
}

impl Default for LeafProbabilitySampler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPONENT)
    }
}
