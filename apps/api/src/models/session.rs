//! Session Model — pure data for a mock-interview session.
//!
//! Wire casing matches the browser front-end: camelCase aggregate fields,
//! SCREAMING_SNAKE_CASE enums, lowercase chat roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// The three interview styles a candidate can choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewMode {
    FaangTechnical,
    AggressiveHr,
    StartupChaos,
}

/// Static configuration record for one interview mode.
/// Fixed at compile time; never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ModeConfig {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
    pub pressure: &'static str,
}

static FAANG_TECHNICAL: ModeConfig = ModeConfig {
    name: "FAANG TECHNICAL ROUND",
    subtitle: "SYSTEM DESIGN & SCALE",
    description: "Deep technical probing, architectural trade-offs, and scalability constraints.",
    tone: "Analytical, neutral, and detail-oriented.",
    pressure: "High technical scrutiny.",
};

static AGGRESSIVE_HR: ModeConfig = ModeConfig {
    name: "AGGRESSIVE HR ROUND",
    subtitle: "BEHAVIORAL PRESSURE",
    description: "Behavioral probing designed to test grit, cultural alignment, and integrity.",
    tone: "Skeptical, direct, and slightly adversarial.",
    pressure: "Psychological and behavioral scrutiny.",
};

static STARTUP_CHAOS: ModeConfig = ModeConfig {
    name: "STARTUP CHAOS MODE",
    subtitle: "AGILE CHAOS",
    description: "Fast-paced, ambiguous requirements with heavy constraints and limited resources.",
    tone: "Urgent, chaotic, and result-focused.",
    pressure: "High ambiguity and speed constraints.",
};

impl InterviewMode {
    pub const ALL: [InterviewMode; 3] = [
        InterviewMode::FaangTechnical,
        InterviewMode::AggressiveHr,
        InterviewMode::StartupChaos,
    ];

    pub fn config(self) -> &'static ModeConfig {
        match self {
            InterviewMode::FaangTechnical => &FAANG_TECHNICAL,
            InterviewMode::AggressiveHr => &AGGRESSIVE_HR,
            InterviewMode::StartupChaos => &STARTUP_CHAOS,
        }
    }
}

/// Candidate profile captured at setup. Immutable once a session starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub target_role: String,
    pub resume_text: String,
}

impl UserProfile {
    /// All three fields must be non-empty after trimming.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if self.target_role.trim().is_empty() {
            return Err(AppError::Validation(
                "Target role must not be empty".to_string(),
            ));
        }
        if self.resume_text.trim().is_empty() {
            return Err(AppError::Validation(
                "Resume text must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    Interviewer,
    Candidate,
}

impl ChatRole {
    /// Uppercase label used when flattening the transcript for evaluation.
    pub fn transcript_label(self) -> &'static str {
        match self {
            ChatRole::Interviewer => "INTERVIEWER",
            ChatRole::Candidate => "CANDIDATE",
        }
    }
}

/// One entry in the conversation transcript. Ordered, append-only,
/// never reordered or deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn interviewer(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Interviewer,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn candidate(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Candidate,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Per-question annotation. Reserved — declared in the data model but not
/// populated by the current flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: String,
    pub question: String,
    pub response: String,
    pub intent: String,
    pub follow_up_level: u8,
}

/// Lifecycle status of a session.
/// Transitions are monotonic: SETUP → ACTIVE → EVALUATING → COMPLETED,
/// except the rollback to ACTIVE when evaluation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Setup,
    Active,
    Evaluating,
    Completed,
}

/// Aggregate root for one interview. Exactly one session is live at a time;
/// the controller owns it and discards it wholesale on reset or restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: Uuid,
    pub mode: InterviewMode,
    pub user: UserProfile,
    pub history: Vec<ChatMessage>,
    /// Reserved for per-question annotations; always empty in the current flow.
    pub records: Vec<QuestionRecord>,
    pub status: SessionStatus,
    pub start_time: DateTime<Utc>,
}

impl InterviewSession {
    /// Creates a fresh session from a validated profile. History starts
    /// empty and the session is immediately ACTIVE.
    pub fn new(user: UserProfile, mode: InterviewMode) -> Result<Self, AppError> {
        user.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            mode,
            user,
            history: Vec::new(),
            records: Vec::new(),
            status: SessionStatus::Active,
            start_time: Utc::now(),
        })
    }
}
