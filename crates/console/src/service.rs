//! Collaborator interfaces consumed by the console.
//!
//! Both services report failures as [`AppError`]. Futures are not required to
//! be `Send`: the console runs on a single-threaded UI executor and the
//! browser transport is not `Send` either.

use async_trait::async_trait;
use shared_types::{
    AppError, AuthResponse, ChangePasswordRequest, CreateStudentRequest, LoginRequest,
    MessageResponse, ProfileRecord, SignupRequest, StudentPage, StudentRecord,
    UpdateProfileRequest, UpdateStudentRequest,
};

#[async_trait(?Send)]
pub trait AuthService {
    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError>;
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, AppError>;
    async fn logout(&self) -> Result<(), AppError>;
    async fn get_profile(&self) -> Result<ProfileRecord, AppError>;
    async fn update_profile(&self, request: UpdateProfileRequest)
        -> Result<MessageResponse, AppError>;
    async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, AppError>;
    async fn send_verification_email(&self) -> Result<MessageResponse, AppError>;
    async fn verify_account(&self, token: &str) -> Result<MessageResponse, AppError>;
}

#[async_trait(?Send)]
pub trait StudentsService {
    async fn list(&self, page: u32, page_size: u32) -> Result<StudentPage, AppError>;
    async fn create(&self, request: CreateStudentRequest) -> Result<StudentRecord, AppError>;
    async fn update(
        &self,
        id: &str,
        request: UpdateStudentRequest,
    ) -> Result<StudentRecord, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
