use async_trait::async_trait;
use console::AuthService;
use reqwest::Method;
use shared_types::{
    AppError, AuthResponse, ChangePasswordRequest, LoginRequest, MessageResponse, ProfileRecord,
    ProfileResponse, SignupRequest, UpdateProfileRequest,
};

use crate::client::ApiClient;

#[async_trait(?Send)]
impl AuthService for ApiClient {
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let resp: AuthResponse = self
            .fetch(self.json(Method::POST, "/auth/login", &request))
            .await?;
        self.set_token(Some(resp.token.clone()));
        Ok(resp)
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email, role = %request.role))]
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError> {
        let resp: AuthResponse = self
            .fetch(self.json(Method::POST, "/auth/register", &request))
            .await?;
        self.set_token(Some(resp.token.clone()));
        Ok(resp)
    }

    #[tracing::instrument(skip(self))]
    async fn logout(&self) -> Result<(), AppError> {
        let result = self.execute(self.request(Method::POST, "/auth/logout")).await;
        self.set_token(None);
        result
    }

    #[tracing::instrument(skip(self))]
    async fn get_profile(&self) -> Result<ProfileRecord, AppError> {
        let resp: ProfileResponse = self.fetch(self.request(Method::GET, "/auth/profile")).await?;
        Ok(resp.profile)
    }

    #[tracing::instrument(skip(self, request))]
    async fn update_profile(
        &self,
        request: UpdateProfileRequest,
    ) -> Result<MessageResponse, AppError> {
        self.fetch(self.json(Method::PUT, "/auth/profile", &request))
            .await
    }

    #[tracing::instrument(skip(self, request))]
    async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        self.fetch(self.json(Method::PUT, "/auth/change-password", &request))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn send_verification_email(&self) -> Result<MessageResponse, AppError> {
        self.fetch(self.request(Method::POST, "/auth/send-verification"))
            .await
    }

    #[tracing::instrument(skip(self, token))]
    async fn verify_account(&self, token: &str) -> Result<MessageResponse, AppError> {
        self.fetch(
            self.request(Method::GET, "/auth/verify-student")
                .query(&[("token", token)]),
        )
        .await
    }
}
