//! Turn Service — generates one interviewer turn from the transcript so far.
//!
//! Stateless: the caller owns appending the result to session history.
//! Exactly one collaborator attempt per invocation; every failure is
//! surfaced as `AppError::InterviewerLogic` and is safe to retry.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::build_interviewer_instruction;
use crate::llm_client::{
    strip_json_fences, Collaborator, CollaboratorRequest, TurnContent, TURN_TEMPERATURE,
};
use crate::models::session::{ChatMessage, ChatRole, InterviewMode};

/// The chat protocol requires at least one turn, so an empty history is
/// replaced by this synthetic opener.
const OPENING_PROMPT: &str = "Begin the interview.";

/// Structured reply for a single interviewer turn. All five fields are
/// required — a reply missing any of them is rejected, never defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerTurn {
    pub interviewer_text: String,
    /// Interviewer reasoning. Markdown emphasis is permitted here only.
    pub internal_thought: String,
    pub current_topic: String,
    pub is_follow_up: bool,
    /// 1 – 5: how deep the current topic thread has gone.
    pub depth_level: u8,
}

/// Maps the transcript into the collaborator's role vocabulary,
/// preserving order: interviewer → "model", candidate → "user".
fn map_history(history: &[ChatMessage]) -> Vec<TurnContent> {
    if history.is_empty() {
        return vec![TurnContent::user(OPENING_PROMPT)];
    }
    history
        .iter()
        .map(|msg| match msg.role {
            ChatRole::Interviewer => TurnContent::model(msg.content.clone()),
            ChatRole::Candidate => TurnContent::user(msg.content.clone()),
        })
        .collect()
}

/// Requests the next interviewer turn from the collaborator.
pub async fn get_interviewer_turn(
    llm: &dyn Collaborator,
    mode: InterviewMode,
    resume: &str,
    role: &str,
    history: &[ChatMessage],
) -> Result<InterviewerTurn, AppError> {
    let request = CollaboratorRequest {
        system_instruction: build_interviewer_instruction(mode, resume, role),
        contents: map_history(history),
        temperature: TURN_TEMPERATURE,
    };

    let raw = llm
        .generate(request)
        .await
        .map_err(|e| AppError::InterviewerLogic(format!("collaborator call failed: {e}")))?;

    let turn: InterviewerTurn = serde_json::from_str(strip_json_fences(&raw))
        .map_err(|e| AppError::InterviewerLogic(format!("unparseable turn reply: {e}")))?;

    if !(1..=5).contains(&turn.depth_level) {
        return Err(AppError::InterviewerLogic(format!(
            "depth_level {} outside the 1-5 range",
            turn.depth_level
        )));
    }

    Ok(turn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::test_support::ScriptedCollaborator;

    fn history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::interviewer("Walk me through your caching work."),
            ChatMessage::candidate("I designed a sharded cache using consistent hashing."),
        ]
    }

    fn turn_json() -> &'static str {
        r#"{
            "interviewer_text": "Interesting approach. How did you handle rebalancing?",
            "internal_thought": "Probing for **operational depth** behind the design claim.",
            "current_topic": "distributed caching",
            "is_follow_up": true,
            "depth_level": 2
        }"#
    }

    #[test]
    fn test_map_history_preserves_order_and_roles() {
        let contents = map_history(&history());
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "model");
        assert_eq!(contents[0].text, "Walk me through your caching work.");
        assert_eq!(contents[1].role, "user");
    }

    #[test]
    fn test_empty_history_becomes_synthetic_opener() {
        let contents = map_history(&[]);
        assert_eq!(contents, vec![TurnContent::user("Begin the interview.")]);
    }

    #[tokio::test]
    async fn test_turn_parses_structured_reply() {
        let llm = ScriptedCollaborator::replying(turn_json());
        let turn = get_interviewer_turn(
            &llm,
            InterviewMode::FaangTechnical,
            "5 years backend Go",
            "Staff Engineer",
            &history(),
        )
        .await
        .unwrap();

        assert_eq!(
            turn.interviewer_text,
            "Interesting approach. How did you handle rebalancing?"
        );
        assert!(turn.is_follow_up);
        assert_eq!(turn.depth_level, 2);

        let requests = llm.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, TURN_TEMPERATURE);
        assert!(requests[0].system_instruction.contains("5 years backend Go"));
        assert_eq!(requests[0].contents.len(), 2);
    }

    #[tokio::test]
    async fn test_fenced_reply_still_parses() {
        let fenced = format!("```json\n{}\n```", turn_json());
        let llm = ScriptedCollaborator::replying(&fenced);
        let turn = get_interviewer_turn(
            &llm,
            InterviewMode::StartupChaos,
            "resume",
            "role",
            &[],
        )
        .await
        .unwrap();
        assert_eq!(turn.current_topic, "distributed caching");
    }

    #[tokio::test]
    async fn test_missing_field_is_a_logic_failure() {
        // no interviewer_text
        let llm = ScriptedCollaborator::replying(
            r#"{"internal_thought": "x", "current_topic": "y", "is_follow_up": false, "depth_level": 1}"#,
        );
        let err = get_interviewer_turn(&llm, InterviewMode::AggressiveHr, "resume", "role", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InterviewerLogic(_)));
    }

    #[tokio::test]
    async fn test_out_of_range_depth_level_is_rejected() {
        let llm = ScriptedCollaborator::replying(
            r#"{"interviewer_text": "q", "internal_thought": "t", "current_topic": "c", "is_follow_up": true, "depth_level": 7}"#,
        );
        let err = get_interviewer_turn(&llm, InterviewMode::FaangTechnical, "resume", "role", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InterviewerLogic(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_a_logic_failure() {
        let llm = ScriptedCollaborator::failing();
        let err = get_interviewer_turn(&llm, InterviewMode::FaangTechnical, "resume", "role", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InterviewerLogic(_)));
    }
}
