//! Axum route handlers for the intake form.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::intake::autofill::autofill;
use crate::intake::state::{flag_impossible_date, reduce, FormAction, FormState};
use crate::models::NatalData;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReduceRequest {
    pub state: FormState,
    pub action: FormAction,
}

#[derive(Debug, Deserialize)]
pub struct FormRequest {
    pub state: FormState,
}

/// POST /api/v1/intake/reduce
///
/// Applies one user edit and returns the next form state.
pub async fn handle_reduce(Json(req): Json<ReduceRequest>) -> Result<Json<FormState>, AppError> {
    req.action.validate()?;
    Ok(Json(reduce(req.state, req.action)))
}

/// POST /api/v1/intake/autofill
///
/// Estimates placements for the form's birth data and replaces both lists.
pub async fn handle_autofill(
    State(state): State<AppState>,
    Json(req): Json<FormRequest>,
) -> Result<Json<FormState>, AppError> {
    let (form, outcome) = autofill(req.state, state.gateway.as_ref()).await;
    outcome?;
    Ok(Json(form))
}

/// POST /api/v1/intake/submit
///
/// Packages the form into the record handed to the analysis call.
pub async fn handle_submit(Json(req): Json<FormRequest>) -> Json<NatalData> {
    let data = req.state.to_natal_data();
    flag_impossible_date(&data);
    Json(data)
}
