//! Portal: the page-level view selector and the analysis submit flow.
//!
//! Flow: intake form → submit → akashic_analysis → result view.
//! The reference view (seven rays) opens only once a reading exists.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::analysis::gateway::AnalysisGateway;
use crate::display::{RaysView, ResultView};
use crate::errors::AppError;
use crate::intake::state::flag_impossible_date;
use crate::models::{AkashicAnalysis, NatalData};

pub mod handlers;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Intake,
    Result,
    Reference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalState {
    pub view: View,
    pub analysis: Option<AkashicAnalysis>,
    /// Set while the analysis request is in flight.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PortalAction {
    Navigate(View),
    AnalysisStarted,
    AnalysisSucceeded(AkashicAnalysis),
    AnalysisFailed,
}

/// What the client should draw for a given portal state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", content = "data", rename_all = "snake_case")]
pub enum Screen {
    Loading,
    Intake,
    Result(ResultView),
    Reference(RaysView),
    /// Result view selected before any reading exists.
    NoData,
}

pub fn reduce(mut state: PortalState, action: PortalAction) -> PortalState {
    match action {
        PortalAction::Navigate(view) => {
            if view == View::Intake || state.analysis.is_some() {
                state.view = view;
            }
        }
        PortalAction::AnalysisStarted => state.loading = true,
        PortalAction::AnalysisSucceeded(analysis) => {
            state.analysis = Some(analysis);
            state.view = View::Result;
            state.loading = false;
        }
        PortalAction::AnalysisFailed => state.loading = false,
    }
    state
}

pub fn screen(state: &PortalState) -> Screen {
    if state.loading {
        return Screen::Loading;
    }
    match (state.view, &state.analysis) {
        (View::Intake, _) => Screen::Intake,
        (View::Result, Some(analysis)) => Screen::Result(ResultView::from(analysis)),
        (View::Result, None) => Screen::NoData,
        (View::Reference, _) => Screen::Reference(RaysView::new()),
    }
}

/// Sends a submitted chart for analysis.
///
/// On success the portal switches to the result view. On failure it stays
/// where it was with `loading` cleared and no partial data applied.
pub async fn submit(
    state: PortalState,
    data: &NatalData,
    gateway: &dyn AnalysisGateway,
) -> (PortalState, Result<(), AppError>) {
    flag_impossible_date(data);

    let state = reduce(state, PortalAction::AnalysisStarted);

    match gateway.akashic_analysis(data).await {
        Ok(analysis) => {
            info!("Analysis received, primary ray: {}", analysis.primary_ray);
            (
                reduce(state, PortalAction::AnalysisSucceeded(analysis)),
                Ok(()),
            )
        }
        Err(e) => {
            error!("Analysis failed: {e}");
            (
                reduce(state, PortalAction::AnalysisFailed),
                Err(AppError::Analysis(e)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::intake::autofill::tests::StubGateway;
    use crate::intake::state::FormState;

    fn sample_analysis() -> AkashicAnalysis {
        AkashicAnalysis {
            past_life_origin: "Atlántida".into(),
            incarnation_talents: "Música".into(),
            spiritual_dormant_talents: "Sanación".into(),
            starseed_legacy: "Sirio".into(),
            asteroid_insights: "Ceres".into(),
            vocation_alignment: "Terapia".into(),
            esoteric_path: "Discipulado".into(),
            primary_ray: "Sexto Rayo: Idealismo Abstracto o Devoción".into(),
        }
    }

    #[test]
    fn test_navigation_requires_analysis() {
        let state = reduce(PortalState::default(), PortalAction::Navigate(View::Reference));
        assert_eq!(state.view, View::Intake);

        let state = reduce(
            PortalState::default(),
            PortalAction::AnalysisSucceeded(sample_analysis()),
        );
        let state = reduce(state, PortalAction::Navigate(View::Reference));
        assert_eq!(state.view, View::Reference);
        let state = reduce(state, PortalAction::Navigate(View::Intake));
        assert_eq!(state.view, View::Intake);
    }

    #[test]
    fn test_screen_variants() {
        let mut state = PortalState::default();
        assert_eq!(screen(&state), Screen::Intake);

        state.view = View::Result;
        assert_eq!(screen(&state), Screen::NoData);

        state.loading = true;
        assert_eq!(screen(&state), Screen::Loading);

        state.loading = false;
        state.analysis = Some(sample_analysis());
        assert!(matches!(screen(&state), Screen::Result(view) if view.headline.ray.map(|r| r.id) == Some(6)));

        state.view = View::Reference;
        assert!(matches!(screen(&state), Screen::Reference(_)));
    }

    #[tokio::test]
    async fn test_submit_success_shows_result() {
        let gateway = StubGateway {
            analysis: Some(sample_analysis()),
            ..Default::default()
        };
        let data = FormState::default().to_natal_data();

        let (state, outcome) = submit(PortalState::default(), &data, &gateway).await;

        assert!(outcome.is_ok());
        assert_eq!(state.view, View::Result);
        assert_eq!(state.analysis, Some(sample_analysis()));
        assert!(!state.loading);
        assert_eq!(gateway.analysis_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_stays_on_intake() {
        let gateway = StubGateway::default();
        let data = FormState::default().to_natal_data();

        let (state, outcome) = submit(PortalState::default(), &data, &gateway).await;

        assert!(matches!(outcome, Err(AppError::Analysis(_))));
        assert_eq!(state.view, View::Intake);
        assert!(state.analysis.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_submit_with_no_selections_passes_empty_collections() {
        let gateway = StubGateway {
            analysis: Some(sample_analysis()),
            ..Default::default()
        };
        let data = FormState::default().to_natal_data();

        let (_, outcome) = submit(PortalState::default(), &data, &gateway).await;
        assert!(outcome.is_ok());

        let sent = gateway.last_natal.lock().unwrap().clone().unwrap();
        assert_eq!(sent.asteroids, Vec::<String>::new());
        assert_eq!(sent.fixed_stars, Vec::<String>::new());

        let json = serde_json::to_value(&sent).unwrap();
        assert_eq!(json["asteroids"], serde_json::json!([]));
        assert_eq!(json["fixedStars"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_failed_resubmit_keeps_previous_reading() {
        let state = reduce(
            PortalState::default(),
            PortalAction::AnalysisSucceeded(sample_analysis()),
        );
        let state = reduce(state, PortalAction::Navigate(View::Intake));

        let gateway = StubGateway::default();
        let data = FormState::default().to_natal_data();
        let (state, outcome) = submit(state, &data, &gateway).await;

        assert!(outcome.is_err());
        assert_eq!(state.view, View::Intake);
        assert_eq!(state.analysis, Some(sample_analysis()));
    }
}
