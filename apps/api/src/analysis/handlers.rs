//! Axum route handlers exposing the gateway calls directly.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::error;

use crate::display::ResultView;
use crate::errors::AppError;
use crate::intake::state::flag_impossible_date;
use crate::models::{AkashicAnalysis, BirthInfo, ChartPositions, NatalData};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: AkashicAnalysis,
    pub view: ResultView,
}

/// POST /api/v1/positions/estimate
pub async fn handle_estimate_positions(
    State(state): State<AppState>,
    Json(birth): Json<BirthInfo>,
) -> Result<Json<ChartPositions>, AppError> {
    let positions = state
        .gateway
        .estimate_positions(&birth)
        .await
        .map_err(|e| {
            error!("Position estimation failed: {e}");
            AppError::Estimation(e)
        })?;
    Ok(Json(positions))
}

/// POST /api/v1/analysis
///
/// Returns the raw reading alongside its rendered panels.
pub async fn handle_analysis(
    State(state): State<AppState>,
    Json(data): Json<NatalData>,
) -> Result<Json<AnalysisResponse>, AppError> {
    flag_impossible_date(&data);

    let analysis = state.gateway.akashic_analysis(&data).await.map_err(|e| {
        error!("Akashic analysis failed: {e}");
        AppError::Analysis(e)
    })?;
    let view = ResultView::from(&analysis);

    Ok(Json(AnalysisResponse { analysis, view }))
}

/// POST /api/v1/analysis/text
///
/// Renders an existing reading as plain text. Does not call the gateway.
pub async fn handle_analysis_text(Json(analysis): Json<AkashicAnalysis>) -> String {
    ResultView::from(&analysis).to_string()
}
