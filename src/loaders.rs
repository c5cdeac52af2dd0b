//! Loading boundary for the trained scoring capability.
//!
//! The trained multimodal classifier lives outside this crate; deployments
//! implement [`ModelLoader`] for it and hand the loader to
//! [`SentimentPipelineBuilder::from_loader`](crate::sentiment::SentimentPipelineBuilder::from_loader).
//! Loading happens once, at process start: if it fails the pipeline falls
//! back to the heuristic scorer for its whole lifetime, so a batch is never
//! scored by a mix of the two.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::pipelines::sentiment::model::SentimentModel;

/// Environment variable naming the trained model weight file.
pub const MODEL_PATH_ENV: &str = "SENTILENS_MODEL_PATH";

/// Conventional weight locations, checked relative to the working directory.
const CANDIDATE_PATHS: &[&str] = &[
    "models/sentilens_final.safetensors",
    "model/sentilens_final.safetensors",
];

/// Loads a trained scoring capability.
pub trait ModelLoader {
    /// Load the capability. Invoked once at process start; the outcome
    /// selects the scorer for the pipeline's lifetime.
    fn load(&self) -> Result<Arc<dyn SentimentModel>>;
}

/// Resolve the weight file location the way deployments expect:
/// [`MODEL_PATH_ENV`] first (taken as-is, even if the file is missing, so a
/// misconfiguration surfaces as a load error rather than a silent fallback to
/// a different file), then the first existing conventional candidate.
pub fn default_model_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(MODEL_PATH_ENV) {
        return Some(PathBuf::from(path));
    }
    CANDIDATE_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
