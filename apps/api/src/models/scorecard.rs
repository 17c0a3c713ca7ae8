//! Scorecard — the structured final evaluation, produced exactly once per
//! completed session. Wire form is camelCase to match the front-end.

use serde::{Deserialize, Serialize};

/// The fixed evaluation taxonomy. The evaluator must return one metric per
/// category, in this order.
pub const METRIC_CATEGORIES: [&str; 4] = [
    "Technical",
    "Problem Solving",
    "Communication",
    "Cultural/Behavioral",
];

/// One scored dimension of the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetric {
    pub category: String,
    /// 0 – 10
    pub score: u8,
    pub observation: String,
    pub evidence: String,
}

/// Categorical hiring recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Hire,
    NoHire,
    StrongHire,
    LeanNoHire,
}

/// The full evaluation returned by the collaborator at finish().
/// Exists only when the session is COMPLETED; never built from a failed parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorecard {
    /// 0 – 100
    pub overall_score: u8,
    /// One metric per entry in `METRIC_CATEGORIES`, same order.
    pub metrics: Vec<EvaluationMetric>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub verdict: Verdict,
    /// Ordered; numbered when displayed.
    pub actionable_feedback: Vec<String>,
}
