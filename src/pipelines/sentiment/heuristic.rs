//! Deterministic fallback scorer.
//!
//! Used whenever the trained classifier is unavailable. Combines keyword
//! polarity counting with a brightness bias from the image, then softmaxes a
//! fixed 3-logit vector. No external state: identical text+image input always
//! yields identical output.

use std::path::Path;

use super::model::{RawPrediction, SentimentModel};
use crate::error::Result;

/// Markers counted as positive polarity (substring containment).
const POSITIVE_MARKERS: &[&str] = &[
    "incroyable",
    "excellent",
    "parfait",
    "super",
    "génial",
    "magnifique",
    "satisfait",
    "recommande",
    "rapide",
    "top",
    "great",
    "love",
    "amazing",
    "perfect",
    "good",
    "awesome",
    "fantastic",
    "recommend",
];

/// Markers counted as negative polarity (substring containment).
const NEGATIVE_MARKERS: &[&str] = &[
    "horrible",
    "mauvais",
    "nul",
    "déçu",
    "décevant",
    "arnaque",
    "défectueux",
    "cassé",
    "pire",
    "bad",
    "terrible",
    "awful",
    "worst",
    "hate",
    "broken",
    "useless",
    "waste",
];

/// Fixed neutral logit. A deliberate weighting, not derived from the input;
/// changing it breaks parity with the reference fallback behavior.
const NEUTRAL_LOGIT: f32 = 0.25;

const BRIGHT_THRESHOLD: f32 = 0.65;
const DARK_THRESHOLD: f32 = 0.35;
const LUMINANCE_BIAS: f32 = 0.5;

/// Deterministic keyword-polarity scorer with image-brightness bias.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicModel;

impl HeuristicModel {
    /// Create the scorer. Always available; never fails.
    pub fn new() -> Self {
        Self
    }
}

impl SentimentModel for HeuristicModel {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn score(&self, text: &str, image: Option<&Path>) -> Result<RawPrediction> {
        let lowered = text.to_lowercase();
        let polarity = marker_hits(&lowered, POSITIVE_MARKERS) as f32
            - marker_hits(&lowered, NEGATIVE_MARKERS) as f32;
        let bias = image.map(luminance_bias).unwrap_or(0.0);

        let logits = [-(polarity + bias), NEUTRAL_LOGIT, polarity + bias];
        let probabilities = softmax(logits);
        let (index, confidence) = argmax(&probabilities);
        let label = ["negative", "neutral", "positive"][index];

        Ok(RawPrediction {
            label: label.to_string(),
            confidence,
            probabilities,
        })
    }
}

fn marker_hits(text: &str, markers: &[&str]) -> usize {
    markers.iter().map(|marker| text.matches(marker).count()).sum()
}

/// Mean luminance bias: bright images (> 0.65) push positive, dark images
/// (< 0.35) push negative. An unreadable image contributes no bias; it never
/// fails the entry.
fn luminance_bias(path: &Path) -> f32 {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(err) => {
            tracing::debug!(error = %err, "image unreadable, no luminance bias");
            return 0.0;
        }
    };
    let gray = img.to_luma8();
    let pixels = gray.as_raw();
    if pixels.is_empty() {
        return 0.0;
    }
    let mean =
        (pixels.iter().map(|&p| p as f64).sum::<f64>() / (pixels.len() as f64 * 255.0)) as f32;

    if mean > BRIGHT_THRESHOLD {
        LUMINANCE_BIAS
    } else if mean < DARK_THRESHOLD {
        -LUMINANCE_BIAS
    } else {
        0.0
    }
}

fn softmax(logits: [f32; 3]) -> [f32; 3] {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exp = logits.map(|l| (l - max).exp());
    let sum: f32 = exp.iter().sum();
    exp.map(|e| e / sum)
}

/// First index wins ties, matching argmax over a fixed label order.
fn argmax(probabilities: &[f32; 3]) -> (usize, f32) {
    let mut best = 0;
    for i in 1..probabilities.len() {
        if probabilities[i] > probabilities[best] {
            best = i;
        }
    }
    (best, probabilities[best])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_markers_outweigh() {
        let raw = HeuristicModel::new()
            .score("Incroyable ce produit, je recommande", None)
            .unwrap();
        assert_eq!(raw.label, "positive");
        assert!(raw.probabilities[2] > raw.probabilities[0]);
        assert!(raw.probabilities[2] > raw.probabilities[1]);
        assert_eq!(raw.confidence, raw.probabilities[2]);
    }

    #[test]
    fn negative_markers_outweigh() {
        let raw = HeuristicModel::new()
            .score("Horrible, produit cassé et mauvais service", None)
            .unwrap();
        assert_eq!(raw.label, "negative");
        assert_eq!(raw.confidence, raw.probabilities[0]);
    }

    #[test]
    fn no_markers_is_neutral_with_fixed_logit() {
        let raw = HeuristicModel::new().score("rien dire", None).unwrap();
        assert_eq!(raw.label, "neutral");

        // Parity check: zero polarity must softmax [0, 0.25, 0] exactly.
        let expected = softmax([0.0, NEUTRAL_LOGIT, 0.0]);
        assert_eq!(raw.probabilities, expected);
    }

    #[test]
    fn probabilities_sum_to_one() {
        for text in ["great product", "worst ever", "ordinary"] {
            let raw = HeuristicModel::new().score(text, None).unwrap();
            let sum: f32 = raw.probabilities.iter().sum();
            assert!((sum - 1.0).abs() < 1e-6, "sum was {sum}");
        }
    }

    #[test]
    fn identical_input_identical_output() {
        let model = HeuristicModel::new();
        let a = model.score("super mais un peu déçu", None).unwrap();
        let b = model.score("super mais un peu déçu", None).unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.probabilities, b.probabilities);
    }

    #[test]
    fn unreadable_image_contributes_no_bias() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"definitely not an image").unwrap();

        let model = HeuristicModel::new();
        let with_bad_image = model.score("ordinary", Some(file.path())).unwrap();
        let text_only = model.score("ordinary", None).unwrap();
        assert_eq!(with_bad_image.probabilities, text_only.probabilities);
    }

    #[test]
    fn bright_image_biases_positive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bright.png");
        image::RgbImage::from_pixel(8, 8, image::Rgb([255, 255, 255]))
            .save(&path)
            .unwrap();

        let raw = HeuristicModel::new()
            .score("rien de particulier", Some(&path))
            .unwrap();
        assert_eq!(raw.label, "positive");
    }

    #[test]
    fn dark_image_biases_negative() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dark.png");
        image::RgbImage::from_pixel(8, 8, image::Rgb([0, 0, 0]))
            .save(&path)
            .unwrap();

        let raw = HeuristicModel::new()
            .score("rien de particulier", Some(&path))
            .unwrap();
        assert_eq!(raw.label, "negative");
    }
}
