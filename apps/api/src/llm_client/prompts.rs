// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Formatting rule applied to every user-facing output field.
/// Downstream rendering shows these strings as-is, so markdown must not leak.
pub const PLAIN_TEXT_RULE: &str = "\
    DO NOT use Markdown symbols like asterisks (*) or hashes (#). Use plain text only.";

/// Fragment that forbids filler praise in evaluation output.
pub const NO_GENERIC_PRAISE_RULE: &str = "\
    Do not use generic praise. Every observation must cite concrete evidence \
    from the transcript.";
