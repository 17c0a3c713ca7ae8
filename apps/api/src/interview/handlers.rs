use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::controller::{
    current_view, finish_interview, reset_interview, start_interview, submit_response, SessionView,
};
use crate::models::session::{InterviewMode, ModeConfig, UserProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartRequest {
    pub mode: InterviewMode,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct ModeEntry {
    pub mode: InterviewMode,
    #[serde(flatten)]
    pub config: &'static ModeConfig,
}

/// GET /api/v1/modes
pub async fn handle_list_modes() -> Json<Vec<ModeEntry>> {
    Json(
        InterviewMode::ALL
            .iter()
            .map(|&mode| ModeEntry {
                mode,
                config: mode.config(),
            })
            .collect(),
    )
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(current_view(&state.controller)?))
}

/// POST /api/v1/session/start
pub async fn handle_start(
    State(state): State<AppState>,
    Json(req): Json<StartRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = start_interview(&state.controller, state.llm.clone(), req.user, req.mode).await?;
    Ok(Json(view))
}

/// POST /api/v1/session/respond
pub async fn handle_respond(
    State(state): State<AppState>,
    Json(req): Json<RespondRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = submit_response(&state.controller, state.llm.clone(), &req.text).await?;
    Ok(Json(view))
}

/// POST /api/v1/session/finish
pub async fn handle_finish(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    let view = finish_interview(&state.controller, state.llm.clone()).await?;
    Ok(Json(view))
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> Result<Json<SessionView>, AppError> {
    Ok(Json(reset_interview(&state.controller)?))
}
