use sentilens::sentiment::{aggregate, Label, Probabilities, SentimentReport};

fn report(id: &str, sentiment: Label, confidence: f32, keywords: &[&str]) -> SentimentReport {
    let spread = (1.0 - confidence) / 2.0;
    let probabilities = match sentiment {
        Label::Negative => Probabilities {
            negative: confidence,
            neutral: spread,
            positive: spread,
        },
        Label::Neutral => Probabilities {
            negative: spread,
            neutral: confidence,
            positive: spread,
        },
        Label::Positive => Probabilities {
            negative: spread,
            neutral: spread,
            positive: confidence,
        },
    };
    SentimentReport {
        image_id: Some(id.to_string()),
        sentiment,
        confidence,
        probabilities,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        summary: format!("{sentiment} ({:.1}% confidence)", confidence * 100.0),
        notes: "text only".to_string(),
    }
}

#[test]
fn empty_batch_yields_zeroes() {
    let global = aggregate(&[]);

    assert_eq!(global.counts.negative, 0);
    assert_eq!(global.counts.neutral, 0);
    assert_eq!(global.counts.positive, 0);
    assert_eq!(global.percentages.negative, 0.0);
    assert_eq!(global.percentages.neutral, 0.0);
    assert_eq!(global.percentages.positive, 0.0);
    assert_eq!(global.average_confidence, 0.0);
    assert!(global.keywords.is_empty());
    assert!(global.per_image.is_empty());
    assert_eq!(global.chart_data.bar.data, vec![0, 0, 0]);
    assert_eq!(global.chart_data.pie.data, vec![0.0, 0.0, 0.0]);
}

#[test]
fn counts_and_percentages_are_consistent() {
    let reports = vec![
        report("a", Label::Positive, 0.9, &[]),
        report("b", Label::Positive, 0.7, &[]),
        report("c", Label::Neutral, 0.6, &[]),
        report("d", Label::Negative, 0.8, &[]),
    ];

    let global = aggregate(&reports);

    assert_eq!(global.counts.positive, 2);
    assert_eq!(global.counts.neutral, 1);
    assert_eq!(global.counts.negative, 1);
    assert_eq!(
        global.counts.positive + global.counts.neutral + global.counts.negative,
        reports.len() as u64
    );

    assert_eq!(global.percentages.positive, 50.0);
    assert_eq!(global.percentages.neutral, 25.0);
    assert_eq!(global.percentages.negative, 25.0);
    let sum = global.percentages.positive + global.percentages.neutral + global.percentages.negative;
    assert!((sum - 100.0).abs() < 1e-4, "sum was {sum}");

    let expected_avg = (0.9 + 0.7 + 0.6 + 0.8) / 4.0;
    assert!((global.average_confidence - expected_avg).abs() < 1e-6);
}

#[test]
fn global_keywords_rank_by_frequency_then_first_occurrence() {
    let reports = vec![
        report("a", Label::Positive, 0.9, &["qualité", "prix", "design"]),
        report("b", Label::Neutral, 0.5, &["prix", "livraison"]),
        report("c", Label::Negative, 0.8, &["qualité", "prix", "emballage"]),
    ];

    let global = aggregate(&reports);

    // "prix" appears 3 times, "qualité" 2; singletons keep concatenation order.
    assert_eq!(
        global.keywords,
        vec!["prix", "qualité", "design", "livraison", "emballage"]
    );
}

#[test]
fn global_keywords_are_capped_at_eight() {
    let reports = vec![
        report("a", Label::Positive, 0.9, &["k1", "k2", "k3", "k4", "k5"]),
        report("b", Label::Positive, 0.9, &["k6", "k7", "k8", "k9", "k10"]),
    ];

    let global = aggregate(&reports);
    assert_eq!(global.keywords.len(), 8);
    assert_eq!(global.keywords[0], "k1");
}

#[test]
fn chart_series_use_fixed_label_order() {
    let reports = vec![
        report("a", Label::Negative, 0.9, &[]),
        report("b", Label::Negative, 0.8, &[]),
        report("c", Label::Positive, 0.7, &[]),
        report("d", Label::Neutral, 0.6, &[]),
    ];

    let global = aggregate(&reports);

    let expected_labels = vec!["positive", "neutral", "negative"];
    assert_eq!(global.chart_data.bar.labels, expected_labels);
    assert_eq!(global.chart_data.pie.labels, expected_labels);
    assert_eq!(global.chart_data.bar.data, vec![1, 1, 2]);
    assert_eq!(global.chart_data.pie.data, vec![25.0, 25.0, 50.0]);
}

#[test]
fn per_image_preserves_input_order() {
    let reports = vec![
        report("first", Label::Positive, 0.9, &[]),
        report("second", Label::Negative, 0.8, &[]),
        report("third", Label::Neutral, 0.7, &[]),
    ];

    let global = aggregate(&reports);

    let ids: Vec<_> = global
        .per_image
        .iter()
        .map(|p| p.image_id.as_deref().unwrap())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
    assert_eq!(global.per_image[1].sentiment, Label::Negative);
}

#[test]
fn aggregation_is_idempotent() {
    let reports = vec![
        report("a", Label::Positive, 0.9, &["qualité"]),
        report("b", Label::Negative, 0.6, &["prix"]),
    ];

    let first = serde_json::to_value(aggregate(&reports)).unwrap();
    let second = serde_json::to_value(aggregate(&reports)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn aggregate_wire_shape() {
    let reports = vec![report("a", Label::Positive, 0.9, &["qualité"])];
    let json = serde_json::to_value(aggregate(&reports)).unwrap();

    assert_eq!(json["counts"]["positive"], 1);
    assert_eq!(json["percentages"]["positive"], 100.0);
    assert_eq!(json["per_image"][0]["sentiment"], "positive");
    assert_eq!(json["chart_data"]["bar"]["labels"][2], "negative");
    assert_eq!(json["keywords"][0], "qualité");
}
