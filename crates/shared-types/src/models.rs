use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Console user role controlling which dashboard is reachable.
///
/// - `Admin` manages every student record.
/// - `Student` sees and edits only their own profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Student,
}

impl Role {
    /// Parse the backend's `role` string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "student" => Some(Role::Student),
            _ => None,
        }
    }

    /// Lowercase string as sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

/// Authenticated account as returned by login/signup.
///
/// `role` is kept as the raw string the service sent so that an unknown
/// role survives the round trip; use [`AuthUser::role`] to interpret it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default, rename = "isEmailVerified")]
    pub email_verified: bool,
}

impl AuthUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role_name)
    }
}

/// Account reference embedded in a student document (`userId` in the backend).
#[derive(Debug, Clone, Default, Deserialize)]
struct LinkedAccount {
    #[serde(default, rename = "isEmailVerified")]
    is_email_verified: bool,
}

/// Wire shape of a student document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentDocument {
    #[serde(alias = "_id")]
    id: String,
    name: String,
    email: String,
    course: String,
    #[serde(default)]
    enrollment_date: Option<DateTime<Utc>>,
    #[serde(default, rename = "userId")]
    account: Option<LinkedAccount>,
}

/// A student record as listed on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "StudentDocument")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub enrollment_date: Option<DateTime<Utc>>,
    /// Whether the owning account confirmed its email address.
    pub verified: bool,
}

impl From<StudentDocument> for StudentRecord {
    fn from(doc: StudentDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            course: doc.course,
            enrollment_date: doc.enrollment_date,
            verified: doc.account.map(|a| a.is_email_verified).unwrap_or(false),
        }
    }
}

impl StudentRecord {
    /// Badge label for the verification column.
    pub fn status_label(&self) -> &'static str {
        if self.verified {
            "Verified"
        } else {
            "Pending"
        }
    }
}

/// Student-specific part of the self-service profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    #[serde(alias = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub enrollment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Profile of the signed-in account (`GET /auth/profile`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub email: String,
    #[serde(rename = "role")]
    pub role_name: String,
    #[serde(default, rename = "isEmailVerified")]
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentDetails>,
}

impl ProfileRecord {
    /// A student counts as verified once either the account or the student
    /// document says so.
    pub fn is_verified(&self) -> bool {
        self.email_verified || self.student.as_ref().is_some_and(|s| s.is_verified)
    }
}
