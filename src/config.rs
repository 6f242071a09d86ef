use serde::{Deserialize, Serialize};

/// Runtime knobs for vectorization and ranking.
///
/// Deserializes from any serde format; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// number of matches returned by the top-match finder
    pub top_k: usize,
    /// spread row vectorization and matrix columns over the rayon pool
    pub parallel: bool,
    /// score reported when either compared vector has zero norm
    pub degenerate_score: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            parallel: true,
            degenerate_score: 0.0,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_degenerate_score(mut self, score: f64) -> Self {
        self.degenerate_score = score;
        self
    }
}
