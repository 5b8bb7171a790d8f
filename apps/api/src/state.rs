use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::Evaluator;
use crate::store::InterviewStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `PgStore` in production.
    pub store: Arc<dyn InterviewStore>,
    /// Mock-mode when no provider key was configured at startup.
    pub evaluator: Evaluator,
    pub config: Config,
}
