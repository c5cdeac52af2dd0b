use std::sync::Arc;

use super::heuristic::HeuristicModel;
use super::model::SentimentModel;
use super::pipeline::SentimentPipeline;
use crate::error::Result;
use crate::loaders::ModelLoader;

/// Builder for creating [`SentimentPipeline`] instances.
///
/// The scoring capability is selected exactly once, here: the trained
/// classifier when available, otherwise the deterministic heuristic. A built
/// pipeline never mixes the two within a batch.
///
/// # Examples
///
/// ```rust
/// use sentilens::sentiment::SentimentPipelineBuilder;
///
/// # fn main() -> sentilens::error::Result<()> {
/// let pipeline = SentimentPipelineBuilder::heuristic().build()?;
/// assert_eq!(pipeline.model_name(), "heuristic");
/// # Ok(())
/// # }
/// ```
pub struct SentimentPipelineBuilder {
    source: ScorerSource,
}

enum ScorerSource {
    Heuristic,
    Model(Arc<dyn SentimentModel>),
    Loader(Box<dyn ModelLoader>),
}

impl SentimentPipelineBuilder {
    /// Use the deterministic heuristic scorer.
    pub fn heuristic() -> Self {
        Self {
            source: ScorerSource::Heuristic,
        }
    }

    /// Use an already-loaded scoring capability.
    pub fn with_model(model: Arc<dyn SentimentModel>) -> Self {
        Self {
            source: ScorerSource::Model(model),
        }
    }

    /// Load the trained capability through `loader` at build time. If loading
    /// fails the pipeline falls back to the heuristic scorer for its whole
    /// lifetime; the failure is logged, not fatal.
    pub fn from_loader(loader: impl ModelLoader + 'static) -> Self {
        Self {
            source: ScorerSource::Loader(Box::new(loader)),
        }
    }

    /// Builds the pipeline with the configured scorer.
    pub fn build(self) -> Result<SentimentPipeline> {
        let model: Arc<dyn SentimentModel> = match self.source {
            ScorerSource::Heuristic => Arc::new(HeuristicModel::new()),
            ScorerSource::Model(model) => model,
            ScorerSource::Loader(loader) => match loader.load() {
                Ok(model) => model,
                Err(err) => {
                    tracing::warn!(error = %err, "model load failed; using heuristic scorer");
                    Arc::new(HeuristicModel::new())
                }
            },
        };
        Ok(SentimentPipeline { model })
    }
}
