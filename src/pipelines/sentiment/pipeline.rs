use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::aggregate::{self, AggregateResult};
use super::images::{self, ResolvedImage};
use super::keywords;
use super::label::Label;
use super::model::SentimentModel;
use crate::error::{ErrorKind, PipelineError, Result};
use crate::pipelines::stats::PipelineStats;

// ============ Input types ============

/// One (text, optional image) unit submitted for scoring within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewEntry {
    /// Caller-supplied identity; echoed back unchanged, not required to be
    /// unique.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Review text.
    pub text: String,
    /// Filesystem path or `data:<mime>;base64,<payload>` blob.
    #[serde(default)]
    pub image_reference: Option<String>,
    /// Original filename, used for the transient file suffix.
    #[serde(default)]
    pub filename: Option<String>,
}

// ============ Output types ============

/// Class probabilities for one entry. Non-negative, summing to 1 within
/// floating-point tolerance.
#[derive(Debug, Clone, Serialize)]
pub struct Probabilities {
    /// Probability of the negative class.
    pub negative: f32,
    /// Probability of the neutral class.
    pub neutral: f32,
    /// Probability of the positive class.
    pub positive: f32,
}

impl Probabilities {
    fn from_raw(raw: [f32; 3]) -> Self {
        Self {
            negative: raw[0],
            neutral: raw[1],
            positive: raw[2],
        }
    }

    /// Probability of the given class.
    pub fn of(&self, label: Label) -> f32 {
        match label {
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
            Label::Positive => self.positive,
        }
    }
}

/// Per-entry scoring result.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentReport {
    /// Identity echoed from the entry.
    pub image_id: Option<String>,
    /// Canonical predicted class.
    pub sentiment: Label,
    /// Probability of the predicted class; equals
    /// `probabilities.of(sentiment)`.
    pub confidence: f32,
    /// Class probabilities.
    pub probabilities: Probabilities,
    /// Up to five significant words from the entry text.
    pub keywords: Vec<String>,
    /// Short human-readable result line.
    pub summary: String,
    /// How the entry was scored (with image, text only, ...).
    pub notes: String,
}

/// Recorded instead of a [`SentimentReport`] when an entry cannot be scored;
/// never aborts the batch.
#[derive(Debug, Clone, Serialize)]
pub struct EntryError {
    /// Identity echoed from the entry, where available.
    pub image_id: Option<String>,
    /// What went wrong.
    pub error: ErrorKind,
}

/// Single-entry output from [`SentimentPipeline::analyze`].
#[derive(Debug)]
pub struct Output {
    /// Scoring result.
    pub report: SentimentReport,
    /// Execution statistics.
    pub stats: PipelineStats,
}

/// Batch output from [`SentimentPipeline::analyze_batch`].
#[derive(Debug)]
pub struct BatchOutput {
    /// One report per successfully scored entry, in input order.
    pub reports: Vec<SentimentReport>,
    /// Per-entry errors, in input order.
    pub errors: Vec<EntryError>,
    /// Execution statistics.
    pub stats: PipelineStats,
}

impl BatchOutput {
    /// Reduce this batch's reports into global statistics.
    pub fn aggregate(&self) -> AggregateResult {
        aggregate::aggregate(&self.reports)
    }
}

// ============ Pipeline ============

/// Scores review entries and collects batch results.
///
/// Construct with [`SentimentPipelineBuilder`](super::SentimentPipelineBuilder).
/// The scoring capability is fixed at build time: every entry of every batch
/// goes through the same scorer.
pub struct SentimentPipeline {
    pub(crate) model: Arc<dyn SentimentModel>,
}

impl SentimentPipeline {
    /// Name of the active scoring capability.
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Score a single entry.
    ///
    /// Failures a batch would record per entry are returned as errors here;
    /// a recoverable image-decode failure still produces a report, with the
    /// fallback noted in [`SentimentReport::notes`].
    pub fn analyze(&self, entry: &ReviewEntry) -> Result<Output> {
        let stats = PipelineStats::start();
        let (report, mut failures) = self.analyze_entry(entry);
        match report {
            Some(report) => Ok(Output {
                report,
                stats: stats.finish(1),
            }),
            None => Err(failures
                .pop()
                .unwrap_or_else(|| PipelineError::Scoring("no report produced".into()))),
        }
    }

    /// Score a batch of entries, in input order.
    ///
    /// Entries are processed independently: a failure on one entry is
    /// recorded in [`BatchOutput::errors`] and never discards results already
    /// produced for others. Any transient image file created for an entry is
    /// removed before the next entry is processed, on every exit path.
    pub fn analyze_batch(&self, entries: &[ReviewEntry]) -> BatchOutput {
        let stats = PipelineStats::start();
        let mut reports = Vec::with_capacity(entries.len());
        let mut errors = Vec::new();

        for entry in entries {
            let (report, failures) = self.analyze_entry(entry);
            for failure in &failures {
                errors.push(EntryError {
                    image_id: entry.image_id.clone(),
                    error: ErrorKind::from(failure),
                });
            }
            if let Some(report) = report {
                reports.push(report);
            }
        }

        tracing::info!(
            entries = entries.len(),
            reports = reports.len(),
            errors = errors.len(),
            scorer = self.model.name(),
            "batch scored"
        );

        BatchOutput {
            reports,
            errors,
            stats: stats.finish(entries.len()),
        }
    }

    /// Score one entry. Returns the report (if one could be produced) plus
    /// any failures encountered; a decode failure is recoverable, so both a
    /// failure and a report can come back together.
    fn analyze_entry(
        &self,
        entry: &ReviewEntry,
    ) -> (Option<SentimentReport>, Vec<PipelineError>) {
        let mut failures = Vec::new();

        if entry.text.trim().is_empty() {
            failures.push(PipelineError::MissingText);
            return (None, failures);
        }

        let mut decode_failed = false;
        let resolved = match images::resolve_image(
            entry.image_reference.as_deref(),
            entry.filename.as_deref(),
        ) {
            Ok(resolved) => resolved,
            Err(err) => {
                tracing::debug!(image_id = ?entry.image_id, error = %err, "scoring text-only");
                failures.push(err);
                decode_failed = true;
                ResolvedImage::None
            }
        };

        let raw = match self.model.score(&entry.text, resolved.path()) {
            Ok(raw) => raw,
            Err(err) => {
                failures.push(err);
                return (None, failures);
            }
        };

        let sentiment = match Label::normalize(&raw.label) {
            Ok(label) => label,
            Err(err) => {
                failures.push(err);
                return (None, failures);
            }
        };

        let probabilities = Probabilities::from_raw(raw.probabilities);
        let confidence = probabilities.of(sentiment);
        let notes = if decode_failed {
            "image decode failed; scored text only"
        } else if resolved.path().is_some() {
            "scored with image"
        } else {
            "text only"
        };

        let report = SentimentReport {
            image_id: entry.image_id.clone(),
            sentiment,
            confidence,
            probabilities,
            keywords: keywords::extract_keywords(&entry.text),
            summary: format!("{sentiment} ({:.1}% confidence)", confidence * 100.0),
            notes: notes.to_string(),
        };

        // `resolved` drops here: an owning transient file is gone before the
        // next entry runs.
        (Some(report), failures)
    }
}
