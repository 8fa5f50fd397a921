// Centralized error handling for the portal API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::models::api::ErrorResponse;

fn error_response(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

/// Errors surfaced by login/logout/session handlers
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::NotSignedIn => StatusCode::UNAUTHORIZED,
            AuthError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self.to_string())
    }
}

/// Errors surfaced by registration handlers.
///
/// Ledger operations themselves stay no-op based; these only report to the
/// HTTP caller that nothing happened.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("Registration not found: {0}")]
    RegistrationNotFound(String),
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        error_response(StatusCode::NOT_FOUND, self.to_string())
    }
}

/// Errors surfaced by course handlers
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Course not started: {0}")]
    NotStarted(String),

    #[error("Course is only {progress}% complete")]
    Incomplete { progress: u8 },
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        let status = match &self {
            CourseError::NotSignedIn => StatusCode::UNAUTHORIZED,
            CourseError::CourseNotFound(_) => StatusCode::NOT_FOUND,
            CourseError::NotStarted(_) => StatusCode::NOT_FOUND,
            CourseError::Incomplete { .. } => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}

/// Errors surfaced by the agent-upgrade handlers
#[derive(Error, Debug)]
pub enum UpgradeError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("No pending upgrade for user: {0}")]
    NoPendingUpgrade(String),
}

impl IntoResponse for UpgradeError {
    fn into_response(self) -> Response {
        error_response(StatusCode::NOT_FOUND, self.to_string())
    }
}
