use std::sync::Arc;

use crate::analysis::ats_scoring::{HeuristicScorer, ResumeScorer};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: HeuristicScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            scorer: Arc::new(HeuristicScorer),
        }
    }
}
