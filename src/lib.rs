//! Multimodal review sentiment pipelines.
//!
//! Classifies short product-review texts (optionally paired with an image) as
//! `positive`, `neutral`, or `negative`, and reduces batch results into
//! summary statistics: class counts, percentages, average confidence, ranked
//! keywords, and chart-ready series.
//!
//! Scoring is a pluggable capability: a trained multimodal classifier can be
//! injected through [`loaders::ModelLoader`], and a deterministic heuristic
//! scorer is always available as a backstop. A batch is scored by exactly one
//! of the two, chosen once when the pipeline is built.
//!
//! # Quick Start
//!
//! ```rust
//! use sentilens::sentiment::{ReviewEntry, SentimentPipelineBuilder};
//!
//! # fn main() -> sentilens::error::Result<()> {
//! let pipeline = SentimentPipelineBuilder::heuristic().build()?;
//!
//! let entries = vec![ReviewEntry {
//!     image_id: Some("review-1".into()),
//!     text: "Incroyable ce produit, je recommande".into(),
//!     image_reference: None,
//!     filename: None,
//! }];
//!
//! let output = pipeline.analyze_batch(&entries);
//! let global = output.aggregate();
//! println!("positive: {:.1}%", global.percentages.positive);
//! # Ok(())
//! # }
//! ```

// ============ Internal API ============

pub(crate) mod pipelines;

// ============ Public API ============

pub mod error;
pub mod loaders;

pub use pipelines::sentiment;
