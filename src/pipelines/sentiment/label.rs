use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Canonical sentiment class.
///
/// Every label string entering the pipeline is normalized into one of these
/// three values before counting or reporting; diacritic spellings (the
/// trained classifier emits `négatif`/`neutre`/`positif`) never leak past
/// [`Label::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Negative sentiment.
    Negative,
    /// Neutral sentiment.
    Neutral,
    /// Positive sentiment.
    Positive,
}

impl Label {
    /// Normalize a raw label string into its canonical class.
    ///
    /// Accepts English and French spellings, with or without diacritics,
    /// ignoring case and surrounding whitespace. Anything else is an
    /// [`UnknownLabel`](PipelineError::UnknownLabel) error, which callers
    /// treat as a per-entry scoring failure rather than a crash.
    pub fn normalize(raw: &str) -> Result<Label> {
        match raw.trim().to_lowercase().as_str() {
            "negative" | "negatif" | "négatif" => Ok(Label::Negative),
            "neutral" | "neutre" => Ok(Label::Neutral),
            "positive" | "positif" => Ok(Label::Positive),
            _ => Err(PipelineError::UnknownLabel(raw.to_string())),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Negative => "negative",
            Label::Neutral => "neutral",
            Label::Positive => "positive",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
