use crate::core::error::RegistrationError;
use crate::core::state::AppState;
use crate::models::api::{
    CreateRegistrationRequest, DocumentRequest, PaymentRequest, RegistrationListQuery,
    RegistrationResponse, RegistrationStatusRequest,
};
use crate::models::registration::Registration;
use crate::utils::ids::registration_id;
use crate::utils::time::{current_timestamp, current_timestamp_millis};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};

/// Registrations, optionally filtered by pilgrim or referring agent
///
/// GET /registrations?pilgrim_id=<id>&agent_id=<id>
pub async fn list_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegistrationListQuery>,
) -> Response {
    let registrations: Vec<Registration> = match (&params.pilgrim_id, &params.agent_id) {
        (Some(pilgrim_id), _) => state.registrations.for_pilgrim(pilgrim_id),
        (None, Some(agent_id)) => state.registrations.for_agent(agent_id),
        (None, None) => state.registrations.list(),
    };

    (StatusCode::OK, Json(registrations)).into_response()
}

/// Open a draft registration against a package
///
/// POST /registration/create {"package_id": ..., "pilgrim_id": ..., "agent_id": ...}
pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateRegistrationRequest>,
) -> Result<Response, RegistrationError> {
    let package = match state.packages.get_package(&request.package_id) {
        Some(package) => package,
        None => {
            warn!(package_id = %request.package_id, "Registration against unknown package");
            return Err(RegistrationError::PackageNotFound(request.package_id));
        }
    };

    let registration = state.registrations.create(
        registration_id(current_timestamp_millis()),
        &package,
        request.pilgrim_id,
        request.agent_id,
        current_timestamp(),
    );

    info!(
        registration_id = %registration.id,
        package_id = %registration.package_id,
        pilgrim_id = %registration.pilgrim_id,
        total_amount = registration.total_amount,
        "Registration created"
    );

    Ok((
        StatusCode::OK,
        Json(RegistrationResponse {
            success: true,
            registration,
        }),
    )
        .into_response())
}

/// Raw status overwrite, used by back-office workflows
///
/// POST /registration/status {"registration_id": ..., "status": ...}
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegistrationStatusRequest>,
) -> Result<Response, RegistrationError> {
    if !state
        .registrations
        .set_status(&request.registration_id, request.status)
    {
        warn!(registration_id = %request.registration_id, "Status update for unknown registration");
        return Err(RegistrationError::RegistrationNotFound(
            request.registration_id,
        ));
    }

    info!(
        registration_id = %request.registration_id,
        status = ?request.status,
        "Registration status set"
    );

    let registration = state
        .registrations
        .get(&request.registration_id)
        .ok_or(RegistrationError::RegistrationNotFound(
            request.registration_id,
        ))?;

    Ok((
        StatusCode::OK,
        Json(RegistrationResponse {
            success: true,
            registration,
        }),
    )
        .into_response())
}

/// Apply an installment payment
///
/// POST /registration/payment {"registration_id": ..., "amount": ...}
pub async fn payment_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PaymentRequest>,
) -> Result<Response, RegistrationError> {
    let registration = match state
        .registrations
        .apply_payment(&request.registration_id, request.amount)
    {
        Some(registration) => registration,
        None => {
            warn!(registration_id = %request.registration_id, "Payment for unknown registration");
            return Err(RegistrationError::RegistrationNotFound(
                request.registration_id,
            ));
        }
    };

    info!(
        registration_id = %registration.id,
        amount = request.amount,
        paid_amount = registration.paid_amount,
        remaining_amount = registration.remaining_amount,
        status = ?registration.status,
        "Payment applied"
    );

    Ok((
        StatusCode::OK,
        Json(RegistrationResponse {
            success: true,
            registration,
        }),
    )
        .into_response())
}

/// Flip one document checklist flag
///
/// POST /registration/document {"registration_id": ..., "document": ..., "verified": ...}
pub async fn document_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, RegistrationError> {
    let registration = match state.registrations.set_document(
        &request.registration_id,
        request.document,
        request.verified,
    ) {
        Some(registration) => registration,
        None => {
            warn!(registration_id = %request.registration_id, "Document update for unknown registration");
            return Err(RegistrationError::RegistrationNotFound(
                request.registration_id,
            ));
        }
    };

    info!(
        registration_id = %registration.id,
        document = ?request.document,
        verified = request.verified,
        "Document flag set"
    );

    Ok((
        StatusCode::OK,
        Json(RegistrationResponse {
            success: true,
            registration,
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::startup::apply_seed_data;
    use crate::models::registration::{DocumentKind, RegistrationStatus};
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
    async fn test_create_success() {
        let (state, _dir) = create_test_state();

        let response = create_handler(
            State(Arc::clone(&state)),
            Json(CreateRegistrationRequest {
                package_id: "P002".to_string(),
                pilgrim_id: "1".to_string(),
                agent_id: Some("2".to_string()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.registrations.len(), 2);

        let created = state
            .registrations
            .for_pilgrim("1")
            .into_iter()
            .find(|r| r.package_id == "P002")
            .unwrap();
        assert_eq!(created.status, RegistrationStatus::Draft);
        assert_eq!(created.total_amount, 45_000_000);
        assert!(created.id.starts_with('R'));
    }

    #[tokio::test]
    async fn test_create_unknown_package() {
        let (state, _dir) = create_test_state();

        let result = create_handler(
            State(Arc::clone(&state)),
            Json(CreateRegistrationRequest {
                package_id: "P999".to_string(),
                pilgrim_id: "1".to_string(),
                agent_id: None,
            }),
        )
        .await;

        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(state.registrations.len(), 1);
    }

    #[tokio::test]
    async fn test_payment_moves_seed_registration_to_paid_in_full() {
        let (state, _dir) = create_test_state();

        // R001 is seeded with a 5M down payment against 25M
        let response = payment_handler(
            State(Arc::clone(&state)),
            Json(PaymentRequest {
                registration_id: "R001".to_string(),
                amount: 20_000_000,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let registration = state.registrations.get("R001").unwrap();
        assert_eq!(registration.status, RegistrationStatus::PaidInFull);
        assert_eq!(registration.paid_amount, 25_000_000);
        assert_eq!(registration.remaining_amount, 0);
        // dp was already fixed by the seeded first payment
        assert_eq!(registration.dp_amount, 5_000_000);
    }

    #[tokio::test]
    async fn test_payment_unknown_registration() {
        let (state, _dir) = create_test_state();

        let result = payment_handler(
            State(state),
            Json(PaymentRequest {
                registration_id: "R999".to_string(),
                amount: 1_000,
            }),
        )
        .await;

        assert!(result.is_err());
        let response = result.unwrap_err().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_status_overwrite() {
        let (state, _dir) = create_test_state();

        let response = status_handler(
            State(Arc::clone(&state)),
            Json(RegistrationStatusRequest {
                registration_id: "R001".to_string(),
                status: RegistrationStatus::TicketIssued,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.registrations.get("R001").unwrap().status,
            RegistrationStatus::TicketIssued
        );
    }

    #[tokio::test]
    async fn test_document_flag() {
        let (state, _dir) = create_test_state();

        document_handler(
            State(Arc::clone(&state)),
            Json(DocumentRequest {
                registration_id: "R001".to_string(),
                document: DocumentKind::Visa,
                verified: true,
            }),
        )
        .await
        .unwrap();

        let registration = state.registrations.get("R001").unwrap();
        assert!(registration.documents.visa);
        assert_eq!(registration.documents.verified_count(), 3);
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (state, _dir) = create_test_state();

        let all = list_handler(
            State(Arc::clone(&state)),
            Query(RegistrationListQuery {
                pilgrim_id: None,
                agent_id: None,
            }),
        )
        .await;
        assert_eq!(all.status(), StatusCode::OK);

        use http_body_util::BodyExt;
        let by_agent = list_handler(
            State(state),
            Query(RegistrationListQuery {
                pilgrim_id: None,
                agent_id: Some("2".to_string()),
            }),
        )
        .await;
        let bytes = by_agent.into_body().collect().await.unwrap().to_bytes();
        let registrations: Vec<Registration> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations[0].id, "R001");
    }
}
