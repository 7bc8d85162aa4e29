use std::sync::Arc;

use crate::analysis::gateway::AnalysisGateway;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no form or page state: clients send their own state with each
/// request and receive the next one back.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn AnalysisGateway>,
}
