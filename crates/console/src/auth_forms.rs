//! Client-side checks of the login and signup forms.

use shared_types::{LoginRequest, Role, SignupRequest};

use crate::error::ConsoleError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ConsoleError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(ConsoleError::Validation("Please fill in all fields".into()));
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub name: String,
    pub course: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Student,
            name: String::new(),
            course: String::new(),
        }
    }
}

impl SignupForm {
    /// Checks run in order and the first failure wins.
    pub fn validate(&self, min_password_len: usize) -> Result<SignupRequest, ConsoleError> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(invalid("Please fill in all required fields"));
        }
        if self.password != self.confirm_password {
            return Err(invalid("Passwords do not match"));
        }
        if self.password.chars().count() < min_password_len {
            return Err(ConsoleError::Validation(format!(
                "Password must be at least {min_password_len} characters long"
            )));
        }
        let (name, course) = match self.role {
            Role::Student => {
                let name = self.name.trim();
                let course = self.course.trim();
                if name.is_empty() || course.is_empty() {
                    return Err(invalid(
                        "Name and course are required for student registration",
                    ));
                }
                (Some(name.to_string()), Some(course.to_string()))
            }
            Role::Admin => (None, None),
        };
        Ok(SignupRequest {
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role.as_str().to_string(),
            name,
            course,
        })
    }
}

fn invalid(message: &str) -> ConsoleError {
    ConsoleError::Validation(message.to_string())
}

/// The message an auth form shows: the session's error first, then its own.
pub fn display_error<'a>(session_error: Option<&'a str>, local: Option<&'a str>) -> Option<&'a str> {
    session_error.or(local)
}
