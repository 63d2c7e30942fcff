use serde::{Deserialize, Serialize};

use crate::{AuthUser, ProfileRecord};

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request. `name` and `course` are only sent for student accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

/// Request DTO for creating a student. The password seeds the student's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub course: String,
    pub password: String,
}

/// Request DTO for updating a student. Carries no credential by construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub email: String,
    pub course: String,
}

/// Request DTO for a student editing their own profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub course: String,
}

/// Request DTO for changing the signed-in account's password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Response returned after successful authentication (login or signup).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: AuthUser,
    pub token: String,
}

/// Envelope of `GET /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub profile: ProfileRecord,
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
