/// Tolerance below which two projections count as equal.
pub const EPSILON: f64 = 1e-7;

/// Tunables shared by the estimating searches.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Absolute tolerance of the degenerate bracket check.
    pub epsilon: f64,
    /// Smallest stride used when re-bracketing in quadratic binary search.
    pub min_step: usize,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("epsilon must be finite and non-negative, got {0}")]
    Epsilon(f64),
    #[error("min_step must be at least 1")]
    MinStep,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            min_step: 1,
        }
    }
}

impl SearchConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_min_step(mut self, min_step: usize) -> Self {
        self.min_step = min_step;
        self
    }

    /// Rejects settings that would break termination or the division guard.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::Epsilon(self.epsilon));
        }
        if self.min_step == 0 {
            return Err(ConfigError::MinStep);
        }
        Ok(())
    }

    /// Stride for re-bracketing a span of `span` elements.
    pub(crate) fn step(&self, span: usize) -> usize {
        ((span as f64).sqrt() as usize).max(self.min_step).max(1)
    }
}
