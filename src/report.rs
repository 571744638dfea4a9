use serde::Serialize;

use crate::scoring::ConfusionCounts;

#[derive(Debug, Clone, Serialize)]
pub struct AgreementReport {
    pub counts: ConfusionCounts,
    pub metrics: MetricsSection,
    pub definition: DefinitionSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSection {
    pub tool_call_precision: f64,
    pub tool_call_recall: f64,
    pub model_official_similarity: f64,
}

/// Fixed provenance block describing how the labels were derived.
#[derive(Debug, Clone, Serialize)]
pub struct DefinitionSection {
    pub positive_label: &'static str,
    pub ground_truth: &'static str,
    pub source: &'static str,
}

pub fn build_report(counts: ConfusionCounts) -> AgreementReport {
    let metrics = counts.metrics();

    AgreementReport {
        counts,
        metrics: MetricsSection {
            tool_call_precision: round6(metrics.precision),
            tool_call_recall: round6(metrics.recall),
            model_official_similarity: round6(metrics.f1),
        },
        definition: DefinitionSection {
            positive_label: "finish_reason == 'tool_calls'",
            ground_truth: "official_api",
            source: "response.choices[0].finish_reason",
        },
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
