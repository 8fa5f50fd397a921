use crate::models::course::CourseProgress;
use crate::models::registration::{DocumentKind, Registration, RegistrationStatus};
use crate::models::user::{Role, User};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

#[derive(Deserialize)]
pub struct CreateRegistrationRequest {
    pub package_id: String,
    pub pilgrim_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
}

#[derive(Deserialize)]
pub struct RegistrationStatusRequest {
    pub registration_id: String,
    pub status: RegistrationStatus,
}

#[derive(Deserialize)]
pub struct PaymentRequest {
    pub registration_id: String,
    /// Whole rupiah
    pub amount: i64,
}

#[derive(Deserialize)]
pub struct DocumentRequest {
    pub registration_id: String,
    pub document: DocumentKind,
    pub verified: bool,
}

#[derive(Deserialize)]
pub struct RegistrationListQuery {
    #[serde(default)]
    pub pilgrim_id: Option<String>,
    #[serde(default)]
    pub agent_id: Option<String>,
}

#[derive(Serialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub registration: Registration,
}

#[derive(Deserialize)]
pub struct UpgradeRequest {
    pub user_id: String,
}

#[derive(Deserialize)]
pub struct CourseListQuery {
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Deserialize)]
pub struct StartCourseRequest {
    pub course_id: String,
}

#[derive(Deserialize)]
pub struct CompleteLessonRequest {
    pub course_id: String,
    pub lesson_id: String,
    /// Selected option index per question, for quiz lessons
    #[serde(default)]
    pub answers: Option<Vec<usize>>,
}

#[derive(Serialize)]
pub struct CompleteLessonResponse {
    pub success: bool,
    /// Score recorded for this lesson, when the submission was a quiz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    pub progress: CourseProgress,
}

#[derive(Deserialize)]
pub struct CertificateRequest {
    pub course_id: String,
}

#[derive(Deserialize)]
pub struct ProgressQuery {
    pub course_id: String,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    pub progress: Option<CourseProgress>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
