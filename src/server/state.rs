use crate::logic::WalkCheckService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub walk_check: Arc<WalkCheckService>,
}

impl AppState {
    pub fn new(walk_check: WalkCheckService) -> Self {
        Self {
            walk_check: Arc::new(walk_check),
        }
    }
}
