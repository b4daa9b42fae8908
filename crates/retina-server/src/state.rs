use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::controller::Controller;
use crate::error::ApiError;
use crate::session::{Session, SessionRegistry};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Controller>,
    pub sessions: SessionRegistry,
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(controller: Controller, sessions: SessionRegistry, export_dir: PathBuf) -> Self {
        Self {
            controller: Arc::new(controller),
            sessions,
            export_dir,
        }
    }

    /// Look up a live session or answer 404.
    pub async fn session(&self, id: Uuid) -> Result<Arc<Mutex<Session>>, ApiError> {
        self.sessions
            .get(id)
            .await
            .ok_or_else(|| ApiError::NotFound(format!("session not found: {id}")))
    }
}
