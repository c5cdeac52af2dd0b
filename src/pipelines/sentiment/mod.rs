//! Review sentiment pipeline.
//!
//! Scores (text, optional image) review entries as `positive`, `neutral`, or
//! `negative` and aggregates batch results into global statistics. Entries
//! are processed independently: one entry's failure is recorded as an
//! [`EntryError`] and never aborts the rest of the batch.
//!
//! # Quick Start
//!
//! ```rust
//! use sentilens::sentiment::{ReviewEntry, SentimentPipelineBuilder};
//!
//! # fn main() -> sentilens::error::Result<()> {
//! let pipeline = SentimentPipelineBuilder::heuristic().build()?;
//!
//! let output = pipeline.analyze(&ReviewEntry {
//!     image_id: None,
//!     text: "Excellent product, highly recommend!".into(),
//!     image_reference: None,
//!     filename: None,
//! })?;
//! println!("{} ({:.2})", output.report.sentiment, output.report.confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Batch Analysis
//!
//! ```rust
//! # use sentilens::sentiment::{ReviewEntry, SentimentPipelineBuilder};
//! # fn main() -> sentilens::error::Result<()> {
//! # let pipeline = SentimentPipelineBuilder::heuristic().build()?;
//! let entries: Vec<ReviewEntry> = vec![/* ... */];
//! let output = pipeline.analyze_batch(&entries);
//!
//! let global = output.aggregate();
//! for err in &output.errors {
//!     eprintln!("{:?}: {:?}", err.image_id, err.error);
//! }
//! println!("{} reports, avg confidence {:.2}", global.per_image.len(), global.average_confidence);
//! # Ok(())
//! # }
//! ```
//!
//! # Scorer Selection
//!
//! A pipeline scores every entry with exactly one capability, chosen once at
//! build time: the trained classifier when its loader succeeds, otherwise the
//! deterministic [`HeuristicModel`]. See [`SentimentPipelineBuilder`].

// ============ Internal API ============

pub(crate) mod aggregate;
pub(crate) mod builder;
pub(crate) mod heuristic;
pub(crate) mod images;
pub(crate) mod keywords;
pub(crate) mod label;
pub(crate) mod model;
pub(crate) mod pipeline;

// ============ Public API ============

pub use crate::pipelines::stats::PipelineStats;
pub use aggregate::{
    aggregate, AggregateResult, ChartData, ChartSeries, PerImageSentiment, SentimentCounts,
    SentimentPercentages,
};
pub use builder::SentimentPipelineBuilder;
pub use heuristic::HeuristicModel;
pub use images::{resolve_image, ResolvedImage};
pub use keywords::extract_keywords;
pub use label::Label;
pub use model::{RawPrediction, SentimentModel};
pub use pipeline::{
    BatchOutput, EntryError, Output, Probabilities, ReviewEntry, SentimentPipeline,
    SentimentReport,
};
