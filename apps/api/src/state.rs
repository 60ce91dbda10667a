use crate::board::JobBoard;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Live posting board. Cloning shares the same underlying store.
    pub board: JobBoard,
}

impl AppState {
    pub fn new(config: Config, board: JobBoard) -> Self {
        Self { config, board }
    }
}
