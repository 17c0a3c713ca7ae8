//! Evaluation Service — produces the final scorecard from the full transcript.
//!
//! One collaborator attempt per invocation; any parse or transport failure
//! surfaces as `AppError::Evaluation` and no partial scorecard ever escapes.

use crate::errors::AppError;
use crate::interview::prompts::{build_evaluator_instruction, EVALUATION_PROMPT_TEMPLATE};
use crate::llm_client::{
    strip_json_fences, Collaborator, CollaboratorRequest, TurnContent, EVALUATION_TEMPERATURE,
};
use crate::models::scorecard::{Scorecard, METRIC_CATEGORIES};
use crate::models::session::ChatMessage;

/// Flattens the transcript into a human-readable block: `ROLE: content`,
/// blank-line separated, in original order. Empty history yields an empty
/// block — evaluating a session with no turns is legal.
fn flatten_transcript(history: &[ChatMessage]) -> String {
    history
        .iter()
        .map(|m| format!("{}: {}", m.role.transcript_label(), m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Requests the end-of-session evaluation from the collaborator.
pub async fn generate_final_scorecard(
    llm: &dyn Collaborator,
    resume: &str,
    role: &str,
    history: &[ChatMessage],
) -> Result<Scorecard, AppError> {
    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{role}", role)
        .replace("{resume}", resume)
        .replace("{transcript}", &flatten_transcript(history));

    let request = CollaboratorRequest {
        system_instruction: build_evaluator_instruction(),
        contents: vec![TurnContent::user(prompt)],
        temperature: EVALUATION_TEMPERATURE,
    };

    let raw = llm
        .generate(request)
        .await
        .map_err(|e| AppError::Evaluation(format!("collaborator call failed: {e}")))?;

    let scorecard: Scorecard = serde_json::from_str(strip_json_fences(&raw))
        .map_err(|e| AppError::Evaluation(format!("unparseable scorecard reply: {e}")))?;

    // The reply is an untrusted boundary value: the metric taxonomy and the
    // score ranges are part of the contract, not a suggestion.
    if scorecard.metrics.len() != METRIC_CATEGORIES.len() {
        return Err(AppError::Evaluation(format!(
            "expected {} metrics, got {}",
            METRIC_CATEGORIES.len(),
            scorecard.metrics.len()
        )));
    }
    if scorecard.overall_score > 100 {
        return Err(AppError::Evaluation(format!(
            "overall score {} outside the 0-100 range",
            scorecard.overall_score
        )));
    }
    if let Some(metric) = scorecard.metrics.iter().find(|m| m.score > 10) {
        return Err(AppError::Evaluation(format!(
            "metric '{}' score {} outside the 0-10 range",
            metric.category, metric.score
        )));
    }

    Ok(scorecard)
}
