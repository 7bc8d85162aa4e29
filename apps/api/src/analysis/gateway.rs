//! The analysis gateway: the boundary between the portal and the model.
//!
//! `AppState` carries an `Arc<dyn AnalysisGateway>` so tests can swap in a
//! stub without touching handlers.

use async_trait::async_trait;

use crate::analysis::prompts::{
    akashic_analysis_prompt, analysis_schema, estimate_positions_prompt, positions_schema,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::{AkashicAnalysis, BirthInfo, ChartPositions, NatalData};

#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Asks the model to estimate geocentric and heliocentric placements.
    async fn estimate_positions(&self, birth: &BirthInfo) -> Result<ChartPositions, LlmError>;

    /// Asks the model for the full reading of a submitted chart.
    async fn akashic_analysis(&self, data: &NatalData) -> Result<AkashicAnalysis, LlmError>;
}

/// Gemini-backed gateway. One request per call.
pub struct GeminiGateway {
    llm: LlmClient,
}

impl GeminiGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AnalysisGateway for GeminiGateway {
    async fn estimate_positions(&self, birth: &BirthInfo) -> Result<ChartPositions, LlmError> {
        let prompt = estimate_positions_prompt(birth);
        self.llm
            .call_json::<ChartPositions>(&prompt, JSON_ONLY_SYSTEM, &positions_schema())
            .await
    }

    async fn akashic_analysis(&self, data: &NatalData) -> Result<AkashicAnalysis, LlmError> {
        let prompt = akashic_analysis_prompt(data);
        self.llm
            .call_json::<AkashicAnalysis>(&prompt, JSON_ONLY_SYSTEM, &analysis_schema())
            .await
    }
}
