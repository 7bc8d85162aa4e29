//! Axum route handlers for the portal view selector.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::intake::state::FormState;
use crate::portal::{reduce, screen, submit, PortalAction, PortalState, Screen, View};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    #[serde(default)]
    pub portal: PortalState,
    pub view: View,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub portal: PortalState,
    pub form: FormState,
}

#[derive(Debug, Serialize)]
pub struct PortalResponse {
    pub portal: PortalState,
    pub screen: Screen,
}

impl From<PortalState> for PortalResponse {
    fn from(portal: PortalState) -> Self {
        let screen = screen(&portal);
        PortalResponse { portal, screen }
    }
}

/// POST /api/v1/portal/navigate
pub async fn handle_navigate(Json(req): Json<NavigateRequest>) -> Json<PortalResponse> {
    Json(reduce(req.portal, PortalAction::Navigate(req.view)).into())
}

/// POST /api/v1/portal/submit
///
/// Packages the form, requests the reading, and returns the next portal
/// state. On gateway failure the client keeps its current state.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<PortalResponse>, AppError> {
    if req.portal.loading {
        return Err(AppError::Precondition(
            "An analysis request is already in progress".to_string(),
        ));
    }

    let data = req.form.to_natal_data();
    let (portal, outcome) = submit(req.portal, &data, state.gateway.as_ref()).await;
    outcome?;
    Ok(Json(portal.into()))
}
