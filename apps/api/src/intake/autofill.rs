//! Autofill: asks the gateway to estimate placements and replaces both
//! position lists with the answer.

use tracing::{error, info};

use crate::analysis::gateway::AnalysisGateway;
use crate::errors::{AppError, AUTOFILL_PRECONDITION_MESSAGE};
use crate::intake::state::{reduce_autofill, AutofillEvent, FormState};

/// Runs one autofill request against `state`.
///
/// Always returns the resulting state alongside the outcome. On any failure
/// the returned state equals the input with the busy flag cleared.
pub async fn autofill(
    state: FormState,
    gateway: &dyn AnalysisGateway,
) -> (FormState, Result<(), AppError>) {
    if state.autofilling {
        return (
            state,
            Err(AppError::Precondition(
                "An autofill request is already in progress".to_string(),
            )),
        );
    }

    if !state.autofill_ready() {
        return (
            state,
            Err(AppError::Precondition(AUTOFILL_PRECONDITION_MESSAGE.to_string())),
        );
    }

    let birth = state.birth_info();
    let state = reduce_autofill(state, AutofillEvent::Started);

    match gateway.estimate_positions(&birth).await {
        Ok(positions) => {
            info!(
                "Autofill estimated {} geocentric and {} heliocentric positions for {}",
                positions.geocentric.len(),
                positions.heliocentric.len(),
                birth.city
            );
            (
                reduce_autofill(state, AutofillEvent::Succeeded(positions)),
                Ok(()),
            )
        }
        Err(e) => {
            error!("Autofill failed: {e}");
            (
                reduce_autofill(state, AutofillEvent::Failed),
                Err(AppError::Estimation(e)),
            )
        }
    }
}
