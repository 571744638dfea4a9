use serde::Serialize;

/// Confusion-matrix counters over aligned label pairs, with the official
/// label as ground truth and tool-call as the positive class.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    #[serde(rename = "TP")]
    pub true_positives: u64,
    #[serde(rename = "FP")]
    pub false_positives: u64,
    #[serde(rename = "FN")]
    pub false_negatives: u64,
    #[serde(rename = "TN")]
    pub true_negatives: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgreementMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Scores positionally aligned label pairs.
///
/// Pairing truncates to the shorter sequence; trailing unmatched labels are
/// ignored rather than counted as disagreements.
pub fn score_pairs(model: &[bool], official: &[bool]) -> ConfusionCounts {
    let mut counts = ConfusionCounts::default();

    for (&model_tc, &official_tc) in model.iter().zip(official.iter()) {
        match (model_tc, official_tc) {
            (true, true) => counts.true_positives += 1,
            (true, false) => counts.false_positives += 1,
            (false, true) => counts.false_negatives += 1,
            (false, false) => counts.true_negatives += 1,
        }
        counts.total += 1;
    }

    counts
}

impl ConfusionCounts {
    /// Derives precision, recall, and F1 at full f64 precision. Undefined
    /// divisions resolve to 0.0 rather than NaN.
    pub fn metrics(&self) -> AgreementMetrics {
        let true_positives = self.true_positives as f64;
        let predicted_positive = self.true_positives + self.false_positives;
        let actual_positive = self.true_positives + self.false_negatives;

        let precision = if predicted_positive > 0 {
            true_positives / predicted_positive as f64
        } else {
            0.0
        };
        let recall = if actual_positive > 0 {
            true_positives / actual_positive as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        AgreementMetrics {
            precision,
            recall,
            f1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_total() {
        let counts = score_pairs(
            &[true, true, false, false, true],
            &[true, false, true, false, true],
        );
        assert_eq!(
            counts.true_positives
                + counts.false_positives
                + counts.false_negatives
                + counts.true_negatives,
            counts.total
        );
        assert_eq!(counts.total, 5);
    }

    #[test]
    fn quadrants_are_assigned_from_the_official_side() {
        let counts = score_pairs(&[true, true, false, false], &[true, false, true, false]);
        assert_eq!(counts.true_positives, 1);
        assert_eq!(counts.false_positives, 1);
        assert_eq!(counts.false_negatives, 1);
        assert_eq!(counts.true_negatives, 1);
    }

    #[test]
    fn partial_agreement_scenario() {
        // model=[T,F] vs official=[T,T]
        let counts = score_pairs(&[true, false], &[true, true]);
        assert_eq!(counts.true_positives, 1);
        assert_eq!(counts.false_positives, 0);
        assert_eq!(counts.false_negatives, 1);
        assert_eq!(counts.true_negatives, 0);
        assert_eq!(counts.total, 2);

        let metrics = counts.metrics();
        assert_eq!(metrics.precision, 1.0);
        assert_eq!(metrics.recall, 0.5);
        assert!((metrics.f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn unequal_lengths_truncate_to_the_shorter_sequence() {
        let counts = score_pairs(&[true, false, true, true, true], &[true, false]);
        assert_eq!(counts.total, 2);
        assert_eq!(counts.true_positives, 1);
        assert_eq!(counts.true_negatives, 1);
        assert_eq!(counts.false_positives, 0);
        assert_eq!(counts.false_negatives, 0);
    }

    #[test]
    fn empty_sequences_score_to_zero_everywhere() {
        let counts = score_pairs(&[], &[]);
        assert_eq!(counts, ConfusionCounts::default());

        let metrics = counts.metrics();
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn zero_denominators_default_to_zero() {
        // No predicted positives: precision is 0, not NaN.
        let counts = score_pairs(&[false, false], &[true, false]);
        let metrics = counts.metrics();
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);

        // No actual positives: recall is 0, not NaN.
        let counts = score_pairs(&[true, false], &[false, false]);
        let metrics = counts.metrics();
        assert_eq!(metrics.precision, 0.0);
        assert_eq!(metrics.recall, 0.0);
        assert_eq!(metrics.f1, 0.0);
    }

    #[test]
    fn metrics_stay_within_the_unit_interval() {
        let cases = [
            (vec![true; 8], vec![true; 8]),
            (vec![true, false, true, false], vec![false, false, true, true]),
            (vec![false; 4], vec![false; 4]),
        ];
        for (model, official) in cases {
            let metrics = score_pairs(&model, &official).metrics();
            assert!((0.0..=1.0).contains(&metrics.precision));
            assert!((0.0..=1.0).contains(&metrics.recall));
            assert!((0.0..=1.0).contains(&metrics.f1));
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let model = [true, false, true];
        let official = [true, true, false];
        assert_eq!(score_pairs(&model, &official), score_pairs(&model, &official));
    }
}
