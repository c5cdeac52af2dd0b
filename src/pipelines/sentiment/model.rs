use std::path::Path;

use crate::error::Result;

/// Raw output of a scoring capability, before label normalization.
#[derive(Debug, Clone)]
pub struct RawPrediction {
    /// Label as produced by the scorer; may be a diacritic spelling
    /// (`"négatif"`). Normalized by the pipeline before reporting.
    pub label: String,
    /// Probability of the predicted class.
    pub confidence: f32,
    /// Class probabilities in `[negative, neutral, positive]` order.
    /// Non-negative, summing to 1 within floating-point tolerance.
    pub probabilities: [f32; 3],
}

/// A sentiment-scoring capability.
///
/// Implemented by the built-in [`HeuristicModel`](super::HeuristicModel) and
/// by external trained classifiers. Treated as a stateless pure function
/// after construction, so a pipeline may share one instance across entries.
pub trait SentimentModel: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &str;

    /// Score one entry. `image`, when present, is a readable path for the
    /// duration of the call; the scorer must not retain or delete it.
    fn score(&self, text: &str, image: Option<&Path>) -> Result<RawPrediction>;
}
