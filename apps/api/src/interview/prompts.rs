// All LLM prompt constants for the interview module.
// Reuses cross-cutting fragments from llm_client::prompts.
//
// These strings are the entire steering mechanism for the collaborator.
// Field names in the schema blocks are load-bearing — turn.rs and
// evaluation.rs deserialize against them exactly.

use crate::llm_client::prompts::{NO_GENERIC_PRAISE_RULE, PLAIN_TEXT_RULE};
use crate::models::session::InterviewMode;

/// Interviewer system-instruction template.
/// Replace: {mode_name}, {role}, {resume}, {tone}, {pressure}, {plain_text_rule}
const INTERVIEWER_SYSTEM_TEMPLATE: &str = r#"You are a senior AI Interviewer from Vortex AI conducting a {mode_name}.
Target Role: {role}
Candidate Resume Context: {resume}

PRIMARY GOALS:
1. Conduct a realistic, professional, but human-like interview.
2. Ground all questions in the provided resume and the target role.
3. BE CONVERSATIONAL: Use human expressions when appropriate. If the candidate gives a good answer, acknowledge it with phrases like "Wow, what an answer!", "That's a really sharp insight," or "I love that perspective."
4. Ensure questions are clear, approachable, and "answerable." Don't use overly academic or dense language.
5. NEVER repeat a question or return to a topic that has already been sufficiently addressed in the conversation history.

CRITICAL GUIDELINES:
- HUMAN TOUCH: Before diving into a new question, react naturally to the candidate's last response. Use conversational transitions like "Interesting approach," "I see where you're coming from," or "That makes a lot of sense."
- BE UNDERSTANDABLE: Avoid convoluted multiple-part questions. Keep it to one clear, understandable query at a time that a person can actually write a thoughtful response to.
- NO REPETITION: Actively check previous messages to ensure you are moving the interview forward.
- DEPTH: If you need more detail, ask "Can you walk me through the 'how' behind that?" in a friendly but professional way.

CRITICAL FORMATTING:
- For "interviewer_text": {plain_text_rule}
- For "internal_thought": You SHOULD use double asterisks **like this** to highlight critical evidence, metrics, or specific logic you are verifying.

TONE: {tone} (but with a human, conversational layer)
PRESSURE LEVEL: {pressure}

RESPONSE SCHEMA:
{
  "interviewer_text": "A human-sounding response + one clear, singular question or prompt",
  "internal_thought": "Your reasoning. Use **highlighting** for critical observations.",
  "current_topic": "What domain/skill are we exploring?",
  "is_follow_up": boolean,
  "depth_level": 1-5
}"#;

/// Evaluator system-instruction template.
/// Replace: {plain_text_rule}, {no_generic_praise_rule}
const EVALUATOR_SYSTEM_TEMPLATE: &str = r#"You are a high-level hiring committee from Vortex AI. Analyze the provided interview transcript and resume.
Evaluate based on: Technical Correctness, Problem-Solving, Communication, Depth, and Behavioral Signals.

CRITICAL:
- Be brutally honest.
- {no_generic_praise_rule}
- In your observations and feedback: {plain_text_rule}
- Identify specific contradictions or weaknesses.

RESPONSE SCHEMA:
{
  "overallScore": 0-100,
  "metrics": [
    { "category": "Technical", "score": 0-10, "observation": "...", "evidence": "..." },
    { "category": "Problem Solving", "score": 0-10, "observation": "...", "evidence": "..." },
    { "category": "Communication", "score": 0-10, "observation": "...", "evidence": "..." },
    { "category": "Cultural/Behavioral", "score": 0-10, "observation": "...", "evidence": "..." }
  ],
  "strengths": ["string"],
  "weaknesses": ["string"],
  "verdict": "HIRE" | "NO_HIRE" | "STRONG_HIRE" | "LEAN_NO_HIRE",
  "actionableFeedback": ["concrete steps"]
}"#;

/// Evaluation request body template.
/// Replace: {role}, {resume}, {transcript}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"Role: {role}
Resume: {resume}

TRANSCRIPT:
{transcript}"#;

/// Builds the interviewer-turn system instruction. Deterministic — the same
/// inputs always produce the same string.
pub fn build_interviewer_instruction(mode: InterviewMode, resume: &str, role: &str) -> String {
    let config = mode.config();
    INTERVIEWER_SYSTEM_TEMPLATE
        .replace("{mode_name}", config.name)
        .replace("{tone}", config.tone)
        .replace("{pressure}", config.pressure)
        .replace("{plain_text_rule}", PLAIN_TEXT_RULE)
        .replace("{role}", role)
        .replace("{resume}", resume)
}

/// Builds the evaluator system instruction. Fixed — no per-session inputs.
pub fn build_evaluator_instruction() -> String {
    EVALUATOR_SYSTEM_TEMPLATE
        .replace("{no_generic_praise_rule}", NO_GENERIC_PRAISE_RULE)
        .replace("{plain_text_rule}", PLAIN_TEXT_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scorecard::METRIC_CATEGORIES;

    #[test]
    fn test_interviewer_instruction_is_deterministic() {
        let a = build_interviewer_instruction(
            InterviewMode::FaangTechnical,
            "5 years backend Go",
            "Staff Engineer",
        );
        let b = build_interviewer_instruction(
            InterviewMode::FaangTechnical,
            "5 years backend Go",
            "Staff Engineer",
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_interviewer_instruction_embeds_mode_resume_and_role() {
        let instruction = build_interviewer_instruction(
            InterviewMode::AggressiveHr,
            "Led a team of 4 through a migration",
            "Engineering Manager",
        );
        let config = InterviewMode::AggressiveHr.config();
        assert!(instruction.contains(config.name));
        assert!(instruction.contains(config.tone));
        assert!(instruction.contains(config.pressure));
        assert!(instruction.contains("Led a team of 4 through a migration"));
        assert!(instruction.contains("Engineering Manager"));
    }

    #[test]
    fn test_interviewer_instruction_names_all_schema_fields() {
        let instruction =
            build_interviewer_instruction(InterviewMode::StartupChaos, "resume", "role");
        for field in [
            "interviewer_text",
            "internal_thought",
            "current_topic",
            "is_follow_up",
            "depth_level",
        ] {
            assert!(instruction.contains(field), "missing schema field {field}");
        }
    }

    #[test]
    fn test_no_placeholders_survive_interpolation() {
        let instruction =
            build_interviewer_instruction(InterviewMode::FaangTechnical, "resume", "role");
        for placeholder in [
            "{mode_name}",
            "{role}",
            "{resume}",
            "{tone}",
            "{pressure}",
            "{plain_text_rule}",
        ] {
            assert!(!instruction.contains(placeholder));
        }
        let evaluator = build_evaluator_instruction();
        assert!(!evaluator.contains("{plain_text_rule}"));
        assert!(!evaluator.contains("{no_generic_praise_rule}"));
    }

    #[test]
    fn test_evaluator_instruction_covers_fixed_taxonomy_and_verdicts() {
        let instruction = build_evaluator_instruction();
        for category in METRIC_CATEGORIES {
            assert!(instruction.contains(category), "missing category {category}");
        }
        for verdict in ["HIRE", "NO_HIRE", "STRONG_HIRE", "LEAN_NO_HIRE"] {
            assert!(instruction.contains(verdict));
        }
        assert!(instruction.contains("overallScore"));
        assert!(instruction.contains("actionableFeedback"));
    }
}
