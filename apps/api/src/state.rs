use std::sync::Arc;

use crate::config::Config;
use crate::interview::controller::SharedController;
use crate::llm_client::Collaborator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single live interview session, explicitly owned here rather than
    /// in any module-level global.
    pub controller: SharedController,
    /// Pluggable LLM collaborator. Production: GeminiClient; tests swap in
    /// a scripted double.
    pub llm: Arc<dyn Collaborator>,
    /// Startup configuration, retained for handlers that need it.
    #[allow(dead_code)]
    pub config: Config,
}
