//! Session Controller — the state machine driving the interview lifecycle.
//!
//! Flow: start → automatic first turn → submit/turn cycles → finish →
//! evaluation → COMPLETED (or rollback to ACTIVE on evaluation failure).
//!
//! The controller is explicitly owned and injected through `AppState` — it
//! is never module-level global state. Each operation is split into a
//! synchronous guard phase that mutates under the lock and hands back owned
//! inputs, the collaborator call outside the lock, and a completion phase
//! keyed by session id. The call-plus-completion runs in a task detached
//! from the request future: a client disconnect drops the handler, but the
//! task still lands and releases the busy flag. A completion that lands
//! after `reset()` (or after a new `start()`) targets a discarded session
//! and is dropped.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::evaluation::generate_final_scorecard;
use crate::interview::turn::{get_interviewer_turn, InterviewerTurn};
use crate::llm_client::Collaborator;
use crate::models::scorecard::Scorecard;
use crate::models::session::{
    ChatMessage, InterviewMode, InterviewSession, SessionStatus, UserProfile,
};

/// Everything a collaborator call needs, cloned out of the session so the
/// lock is never held across an await.
#[derive(Debug, Clone)]
pub struct CallInputs {
    pub session_id: Uuid,
    pub mode: InterviewMode,
    pub resume: String,
    pub role: String,
    pub history: Vec<ChatMessage>,
}

fn call_inputs(session: &InterviewSession) -> CallInputs {
    CallInputs {
        session_id: session.id,
        mode: session.mode,
        resume: session.user.resume_text.clone(),
        role: session.user.target_role.clone(),
        history: session.history.clone(),
    }
}

/// Read model exposed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub session: Option<InterviewSession>,
    pub scorecard: Option<Scorecard>,
    pub busy: bool,
    /// The interviewer's latest internal_thought — transient UI scratch,
    /// never part of the persisted history.
    pub last_thought: Option<String>,
}

/// Owns the single live session, the scorecard, and the busy flag.
/// At most one collaborator call is outstanding at a time; operations while
/// busy are rejected, never queued.
#[derive(Debug, Default)]
pub struct SessionController {
    session: Option<InterviewSession>,
    scorecard: Option<Scorecard>,
    last_thought: Option<String>,
    busy: bool,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            session: self.session.clone(),
            scorecard: self.scorecard.clone(),
            busy: self.busy,
            last_thought: self.last_thought.clone(),
        }
    }

    fn ensure_idle(&self) -> Result<(), AppError> {
        if self.busy {
            return Err(AppError::Conflict(
                "Another request is already in flight".to_string(),
            ));
        }
        Ok(())
    }

    fn owns(&self, session_id: Uuid) -> bool {
        self.session.as_ref().map(|s| s.id) == Some(session_id)
    }

    /// start(): valid only when no session is active. Creates a fresh
    /// session, discards any prior scorecard, and reserves the busy flag
    /// for the automatic first interviewer turn.
    pub fn begin_session(
        &mut self,
        user: UserProfile,
        mode: InterviewMode,
    ) -> Result<CallInputs, AppError> {
        self.ensure_idle()?;
        if let Some(session) = &self.session {
            if matches!(
                session.status,
                SessionStatus::Active | SessionStatus::Evaluating
            ) {
                return Err(AppError::Conflict(
                    "An interview is already in progress; reset it first".to_string(),
                ));
            }
        }

        let session = InterviewSession::new(user, mode)?;
        info!("Session {} started (mode: {:?})", session.id, mode);

        self.scorecard = None;
        self.last_thought = None;
        let inputs = call_inputs(&session);
        self.session = Some(session);
        self.busy = true;
        Ok(inputs)
    }

    /// submitResponse() guard phase: appends the candidate message verbatim
    /// and reserves the busy flag for the interviewer turn.
    pub fn begin_turn(&mut self, text: &str) -> Result<CallInputs, AppError> {
        self.ensure_idle()?;
        let session = self
            .session
            .as_mut()
            .filter(|s| s.status == SessionStatus::Active)
            .ok_or_else(|| AppError::Conflict("No active interview".to_string()))?;

        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Response text must not be empty".to_string(),
            ));
        }

        session.history.push(ChatMessage::candidate(text));
        let inputs = call_inputs(session);
        self.busy = true;
        Ok(inputs)
    }

    /// Turn completion: appends the interviewer message and stashes the
    /// internal thought. A stale completion for a discarded session is
    /// dropped without touching current state.
    pub fn complete_turn(&mut self, session_id: Uuid, turn: InterviewerTurn) {
        if !self.owns(session_id) {
            warn!("Dropping interviewer turn for discarded session {session_id}");
            return;
        }
        self.busy = false;
        if let Some(session) = self.session.as_mut() {
            session
                .history
                .push(ChatMessage::interviewer(turn.interviewer_text));
        }
        self.last_thought = Some(turn.internal_thought);
    }

    /// Turn failure: the candidate's message stays appended and the session
    /// remains ACTIVE — sending another message is the retry path.
    pub fn fail_turn(&mut self, session_id: Uuid) {
        if !self.owns(session_id) {
            return;
        }
        self.busy = false;
    }

    /// finish() guard phase: valid only from ACTIVE. Moves to EVALUATING
    /// and reserves the busy flag for the evaluation call.
    pub fn begin_evaluation(&mut self) -> Result<CallInputs, AppError> {
        self.ensure_idle()?;
        let session = self
            .session
            .as_mut()
            .filter(|s| s.status == SessionStatus::Active)
            .ok_or_else(|| {
                AppError::Conflict("Finish is only valid during an active interview".to_string())
            })?;

        session.status = SessionStatus::Evaluating;
        let inputs = call_inputs(session);
        self.busy = true;
        Ok(inputs)
    }

    /// Evaluation success: store the scorecard and complete the session.
    pub fn complete_evaluation(&mut self, session_id: Uuid, scorecard: Scorecard) {
        if !self.owns(session_id) {
            warn!("Dropping scorecard for discarded session {session_id}");
            return;
        }
        self.busy = false;
        if let Some(session) = self.session.as_mut() {
            session.status = SessionStatus::Completed;
            info!("Session {} completed (verdict: {:?})", session.id, scorecard.verdict);
        }
        self.scorecard = Some(scorecard);
    }

    /// Evaluation failure: roll back to ACTIVE with the transcript intact.
    /// No partial scorecard is ever stored.
    pub fn fail_evaluation(&mut self, session_id: Uuid) {
        if !self.owns(session_id) {
            return;
        }
        self.busy = false;
        if let Some(session) = self.session.as_mut() {
            session.status = SessionStatus::Active;
        }
    }

    /// reset(): valid from any state. Discards session, scorecard, and
    /// scratch state. An in-flight completion for the discarded session
    /// will be ignored when it lands.
    pub fn reset(&mut self) {
        self.session = None;
        self.scorecard = None;
        self.last_thought = None;
        self.busy = false;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Async orchestration
// ────────────────────────────────────────────────────────────────────────────

pub type SharedController = Arc<Mutex<SessionController>>;

fn lock(controller: &SharedController) -> Result<MutexGuard<'_, SessionController>, AppError> {
    controller
        .lock()
        .map_err(|_| AppError::Internal(anyhow!("session lock poisoned")))
}

/// start(): create the session, then run the automatic first interviewer
/// turn with the (empty) history.
pub async fn start_interview(
    controller: &SharedController,
    llm: Arc<dyn Collaborator>,
    user: UserProfile,
    mode: InterviewMode,
) -> Result<SessionView, AppError> {
    let inputs = lock(controller)?.begin_session(user, mode)?;
    run_turn(controller, llm, inputs).await
}

/// submitResponse(): append the candidate's answer, then request the next
/// interviewer turn.
pub async fn submit_response(
    controller: &SharedController,
    llm: Arc<dyn Collaborator>,
    text: &str,
) -> Result<SessionView, AppError> {
    let inputs = lock(controller)?.begin_turn(text)?;
    run_turn(controller, llm, inputs).await
}

/// Runs the collaborator call and its completion phase in a spawned task,
/// detached from the request future. Once issued, the call runs to
/// completion or failure even if the client disconnects and the handler
/// future is dropped — the busy flag is always released by the task.
async fn run_turn(
    controller: &SharedController,
    llm: Arc<dyn Collaborator>,
    inputs: CallInputs,
) -> Result<SessionView, AppError> {
    let controller = Arc::clone(controller);
    let task = tokio::spawn(async move {
        let outcome = get_interviewer_turn(
            llm.as_ref(),
            inputs.mode,
            &inputs.resume,
            &inputs.role,
            &inputs.history,
        )
        .await;

        let mut ctrl = lock(&controller)?;
        match outcome {
            Ok(turn) => {
                ctrl.complete_turn(inputs.session_id, turn);
                Ok(ctrl.view())
            }
            Err(err) => {
                ctrl.fail_turn(inputs.session_id);
                Err(err)
            }
        }
    });

    task.await
        .map_err(|e| AppError::Internal(anyhow!("turn task panicked: {e}")))?
}

/// finish(): run the end-of-session evaluation over the full transcript.
/// Detached from the request future, same as `run_turn`.
pub async fn finish_interview(
    controller: &SharedController,
    llm: Arc<dyn Collaborator>,
) -> Result<SessionView, AppError> {
    let inputs = lock(controller)?.begin_evaluation()?;

    let controller = Arc::clone(controller);
    let task = tokio::spawn(async move {
        let outcome =
            generate_final_scorecard(llm.as_ref(), &inputs.resume, &inputs.role, &inputs.history)
                .await;

        let mut ctrl = lock(&controller)?;
        match outcome {
            Ok(scorecard) => {
                ctrl.complete_evaluation(inputs.session_id, scorecard);
                Ok(ctrl.view())
            }
            Err(err) => {
                ctrl.fail_evaluation(inputs.session_id);
                Err(err)
            }
        }
    });

    task.await
        .map_err(|e| AppError::Internal(anyhow!("evaluation task panicked: {e}")))?
}

/// reset(): synchronous — nothing to await.
pub fn reset_interview(controller: &SharedController) -> Result<SessionView, AppError> {
    let mut ctrl = lock(controller)?;
    ctrl.reset();
    Ok(ctrl.view())
}

pub fn current_view(controller: &SharedController) -> Result<SessionView, AppError> {
    Ok(lock(controller)?.view())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
