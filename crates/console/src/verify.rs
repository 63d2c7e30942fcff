use shared_types::{AppError, MessageResponse};

use crate::service::AuthService;

/// Progress of the email-verification landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStatus {
    Verifying,
    Success(String),
    Failed(String),
}

impl VerifyStatus {
    /// Whether the page should send the user to login after a delay.
    pub fn redirects(&self) -> bool {
        matches!(self, VerifyStatus::Success(_))
    }
}

/// Drives `/verify-student?token=...`.
#[derive(Debug, Clone)]
pub struct VerifyAccountController {
    token: Option<String>,
    status: VerifyStatus,
}

impl VerifyAccountController {
    /// A missing or blank token fails immediately without a remote call.
    pub fn new(token: Option<&str>) -> Self {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        let status = match token {
            Some(_) => VerifyStatus::Verifying,
            None => VerifyStatus::Failed("Invalid verification link. No token found.".into()),
        };
        Self {
            token: token.map(str::to_string),
            status,
        }
    }

    pub fn status(&self) -> &VerifyStatus {
        &self.status
    }

    /// Token to send, if a call is still due.
    pub fn pending_token(&self) -> Option<&str> {
        match self.status {
            VerifyStatus::Verifying => self.token.as_deref(),
            _ => None,
        }
    }

    pub fn finish(&mut self, result: Result<MessageResponse, AppError>) -> &VerifyStatus {
        self.status = match result {
            Ok(resp) if resp.success => {
                tracing::info!("account verified");
                VerifyStatus::Success("Your student account has been verified successfully!".into())
            }
            Ok(resp) => VerifyStatus::Failed(
                resp.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Verification failed".into()),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "verification failed");
                VerifyStatus::Failed(e.message_or("Verification failed. Please try again."))
            }
        };
        &self.status
    }

    pub async fn run<A: AuthService + ?Sized>(&mut self, auth: &A) -> &VerifyStatus {
        if let Some(token) = self.pending_token().map(str::to_string) {
            let result = auth.verify_account(&token).await;
            self.finish(result);
        }
        &self.status
    }
}
