use crate::core::error::AuthError;
use crate::core::state::AppState;
use crate::reporting::summary::{agent_summary, portal_summary};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;

/// Office-wide dashboard figures
///
/// GET /summary
pub async fn summary_handler(State(state): State<Arc<AppState>>) -> Response {
    let summary = portal_summary(&state.directory, &state.packages, &state.registrations);
    (StatusCode::OK, Json(summary)).into_response()
}

#[derive(Debug, Deserialize)]
pub struct AgentSummaryQuery {
    #[serde(default)]
    pub agent_id: Option<String>,
}

/// One agent's referral figures
///
/// GET /summary/agent?agent_id=<id>
///
/// Without an explicit agent id the session user is reported on.
pub async fn agent_summary_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AgentSummaryQuery>,
) -> Result<Response, AuthError> {
    let agent_id = match params.agent_id {
        Some(agent_id) => agent_id,
        None => match state.session.current() {
            Some(user) => user.id.clone(),
            None => return Err(AuthError::NotSignedIn),
        },
    };

    let summary = agent_summary(
        &state.registrations,
        &agent_id,
        state.config.referral.commission_rate,
    );

    Ok((StatusCode::OK, Json(summary)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::startup::apply_seed_data;
    use http_body_util::BodyExt;
    use tempfile::TempDir;

    fn create_test_state() -> (Arc<AppState>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config: Config = toml::from_str(&format!(
            r#"
                [server]
                port = 8080

                [auth]
                session_file = "{}"

                [logging]
            "#,
            temp_dir.path().join("session.json").display()
        ))
        .unwrap();

        let state = Arc::new(AppState::new(config));
        apply_seed_data(&state);
        (state, temp_dir)
    }

    #[tokio::test]
    async fn test_summary_over_seed_data() {
        let (state, _dir) = create_test_state();

        let response = summary_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["pilgrims"], 1);
        assert_eq!(body["agents"], 1);
        assert_eq!(body["packages"], 3);
        assert_eq!(body["registrations"], 1);
        assert_eq!(body["down_payment_made"], 1);
        assert_eq!(body["total_revenue"], 5_000_000);
        assert_eq!(body["total_revenue_formatted"], "Rp 5.000.000");
    }

    #[tokio::test]
    async fn test_agent_summary_for_seed_agent() {
        let (state, _dir) = create_test_state();

        let response = agent_summary_handler(
            State(state),
            Query(AgentSummaryQuery {
                agent_id: Some("2".to_string()),
            }),
        )
        .await
        .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["referred_registrations"], 1);
        // 5% of the 5M seeded down payment
        assert_eq!(body["commission"], 250_000);
    }

    #[tokio::test]
    async fn test_agent_summary_defaults_to_session_user() {
        let (state, _dir) = create_test_state();
        let agent = state.directory.get_user("2").unwrap();
        state.session.sign_in(agent);

        let response = agent_summary_handler(
            State(state),
            Query(AgentSummaryQuery { agent_id: None }),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_agent_summary_without_session_or_id() {
        let (state, _dir) = create_test_state();

        let result =
            agent_summary_handler(State(state), Query(AgentSummaryQuery { agent_id: None })).await;
        assert!(result.is_err());
    }
}
