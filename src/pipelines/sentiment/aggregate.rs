//! Reduces a batch's reports into global statistics.
//!
//! Pure function of the report list: no I/O, no mutation of its input,
//! identical output on repeated calls.

use serde::Serialize;

use super::keywords;
use super::label::Label;
use super::pipeline::SentimentReport;

/// Keywords kept in the global ranking.
const GLOBAL_KEYWORD_LIMIT: usize = 8;

/// Fixed series order for both charts.
const CHART_ORDER: [Label; 3] = [Label::Positive, Label::Neutral, Label::Negative];

/// Report count per class.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentCounts {
    /// Negative reports.
    pub negative: u64,
    /// Neutral reports.
    pub neutral: u64,
    /// Positive reports.
    pub positive: u64,
}

impl SentimentCounts {
    fn of(&self, label: Label) -> u64 {
        match label {
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
            Label::Positive => self.positive,
        }
    }
}

/// Share of reports per class, each in `[0, 100]`. The three values sum to
/// 100 unless there are no reports, in which case all are 0.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentPercentages {
    /// Negative share.
    pub negative: f32,
    /// Neutral share.
    pub neutral: f32,
    /// Positive share.
    pub positive: f32,
}

impl SentimentPercentages {
    fn of(&self, label: Label) -> f32 {
        match label {
            Label::Negative => self.negative,
            Label::Neutral => self.neutral,
            Label::Positive => self.positive,
        }
    }
}

/// One entry's sentiment in the batch summary, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct PerImageSentiment {
    /// Identity echoed from the entry.
    pub image_id: Option<String>,
    /// Canonical predicted class.
    pub sentiment: Label,
}

/// A chart-ready series: parallel label and value vectors.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries<T> {
    /// Class names in series order.
    pub labels: Vec<String>,
    /// One value per label.
    pub data: Vec<T>,
}

/// Bar (raw counts) and pie (percentages) series, both in fixed
/// `[positive, neutral, negative]` order.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    /// Raw counts.
    pub bar: ChartSeries<u64>,
    /// Percentages.
    pub pie: ChartSeries<f32>,
}

/// Batch-wide statistics derived from one batch's reports.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateResult {
    /// Report count per class.
    pub counts: SentimentCounts,
    /// Share of reports per class.
    pub percentages: SentimentPercentages,
    /// Arithmetic mean of report confidences; 0 when there are no reports.
    pub average_confidence: f32,
    /// Top 8 keywords across all reports.
    pub keywords: Vec<String>,
    /// Per-entry sentiments in input order.
    pub per_image: Vec<PerImageSentiment>,
    /// Chart-ready series.
    pub chart_data: ChartData,
}

/// Reduce a list of reports into an [`AggregateResult`].
pub fn aggregate(reports: &[SentimentReport]) -> AggregateResult {
    let mut counts = SentimentCounts {
        negative: 0,
        neutral: 0,
        positive: 0,
    };
    for report in reports {
        match report.sentiment {
            Label::Negative => counts.negative += 1,
            Label::Neutral => counts.neutral += 1,
            Label::Positive => counts.positive += 1,
        }
    }

    let total = reports.len() as u64;
    let pct = |count: u64| {
        if total == 0 {
            0.0
        } else {
            count as f32 * 100.0 / total as f32
        }
    };
    let percentages = SentimentPercentages {
        negative: pct(counts.negative),
        neutral: pct(counts.neutral),
        positive: pct(counts.positive),
    };

    let average_confidence = if reports.is_empty() {
        0.0
    } else {
        reports.iter().map(|r| r.confidence).sum::<f32>() / reports.len() as f32
    };

    // Duplicates across entries count toward the global ranking.
    let keywords = keywords::rank_by_frequency(
        reports.iter().flat_map(|r| r.keywords.iter().cloned()),
        GLOBAL_KEYWORD_LIMIT,
    );

    let per_image = reports
        .iter()
        .map(|r| PerImageSentiment {
            image_id: r.image_id.clone(),
            sentiment: r.sentiment,
        })
        .collect();

    let chart_labels: Vec<String> = CHART_ORDER.iter().map(|l| l.as_str().to_string()).collect();
    let chart_data = ChartData {
        bar: ChartSeries {
            labels: chart_labels.clone(),
            data: CHART_ORDER.iter().map(|&l| counts.of(l)).collect(),
        },
        pie: ChartSeries {
            labels: chart_labels,
            data: CHART_ORDER.iter().map(|&l| percentages.of(l)).collect(),
        },
    };

    AggregateResult {
        counts,
        percentages,
        average_confidence,
        keywords,
        per_image,
        chart_data,
    }
}
