//! The student's own dashboard: profile edit, password change and the
//! verification-email request.

use shared_types::{
    AppError, ChangePasswordRequest, ConsoleSettings, MessageResponse, ProfileRecord,
    UpdateProfileRequest,
};

use crate::error::ConsoleError;
use crate::notice::{NoticeBoard, NoticeTicket};
use crate::service::AuthService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub course: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

pub struct StudentProfileController {
    profile: Option<ProfileRecord>,
    draft: ProfileDraft,
    password: PasswordDraft,
    editing: bool,
    changing_password: bool,
    loading: bool,
    notices: NoticeBoard,
    settings: ConsoleSettings,
    needs_reauth: bool,
}

impl StudentProfileController {
    pub fn new(settings: ConsoleSettings) -> Self {
        Self {
            profile: None,
            draft: ProfileDraft::default(),
            password: PasswordDraft::default(),
            editing: false,
            changing_password: false,
            loading: false,
            notices: NoticeBoard::default(),
            settings,
            needs_reauth: false,
        }
    }

    pub fn profile(&self) -> Option<&ProfileRecord> {
        self.profile.as_ref()
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProfileDraft {
        &mut self.draft
    }

    pub fn password_draft(&self) -> &PasswordDraft {
        &self.password
    }

    pub fn password_draft_mut(&mut self) -> &mut PasswordDraft {
        &mut self.password
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_changing_password(&self) -> bool {
        self.changing_password
    }

    pub fn needs_reauth(&self) -> bool {
        self.needs_reauth
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn is_verified(&self) -> bool {
        self.profile.as_ref().is_some_and(ProfileRecord::is_verified)
    }

    /// Student name, falling back to the account email.
    pub fn display_name(&self) -> Option<&str> {
        let profile = self.profile.as_ref()?;
        match profile.student.as_ref().map(|s| s.name.as_str()) {
            Some(name) if !name.is_empty() => Some(name),
            _ => Some(profile.email.as_str()),
        }
    }

    pub fn initials(&self) -> String {
        let name = self
            .profile
            .as_ref()
            .and_then(|p| p.student.as_ref())
            .map(|s| s.name.as_str())
            .unwrap_or_default();
        initials(name)
    }

    /// Short reference shown on the student card: the last eight id characters.
    pub fn student_reference(&self) -> Option<String> {
        let id = &self.profile.as_ref()?.student.as_ref()?.id;
        if id.is_empty() {
            return None;
        }
        let skip = id.chars().count().saturating_sub(8);
        Some(id.chars().skip(skip).collect::<String>().to_uppercase())
    }

    fn report(&mut self, err: ConsoleError) {
        match err {
            ConsoleError::Auth => self.needs_reauth = true,
            ConsoleError::Busy => {}
            other => {
                if let Some(message) = other.banner() {
                    self.notices.show_error(message);
                }
            }
        }
    }

    fn reset_draft(&mut self) {
        let student = self.profile.as_ref().and_then(|p| p.student.as_ref());
        self.draft = ProfileDraft {
            name: student.map(|s| s.name.clone()).unwrap_or_default(),
            course: student.map(|s| s.course.clone()).unwrap_or_default(),
        };
    }

    // -- profile --

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<ProfileRecord, AppError>) {
        self.loading = false;
        match result {
            Ok(profile) => {
                self.profile = Some(profile);
                self.reset_draft();
                self.notices.dismiss_error();
            }
            Err(e) if e.is_auth_failure() => self.report(ConsoleError::Auth),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load profile");
                self.report(ConsoleError::Remote("Failed to load student data".into()));
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.notices.dismiss_error();
    }

    pub fn dismiss_success(&mut self) {
        self.notices.dismiss_success();
    }

    pub fn expire_notice(&mut self, ticket: NoticeTicket) {
        self.notices.expire(ticket);
    }

    pub fn start_edit(&mut self) {
        self.editing = true;
    }

    /// Leave edit mode and put the draft back to the loaded values.
    pub fn cancel_edit(&mut self) {
        self.reset_draft();
        self.editing = false;
        self.notices.dismiss_error();
    }

    pub fn begin_update(&mut self) -> Option<UpdateProfileRequest> {
        self.notices.dismiss_error();
        let name = self.draft.name.trim();
        let course = self.draft.course.trim();
        if name.is_empty() || course.is_empty() {
            self.report(ConsoleError::Validation(
                "Please fill in all required fields".into(),
            ));
            return None;
        }
        Some(UpdateProfileRequest {
            name: name.to_string(),
            course: course.to_string(),
        })
    }

    /// On success the caller reloads the profile.
    pub fn finish_update(&mut self, result: Result<MessageResponse, AppError>) -> Option<NoticeTicket> {
        match result {
            Ok(_) => {
                self.editing = false;
                let ttl = self.settings.notice_ttl();
                Some(self.notices.show_success("Profile updated successfully", ttl))
            }
            Err(e) => {
                self.report(ConsoleError::from_remote(&e, "Update failed"));
                None
            }
        }
    }

    // -- password --

    pub fn start_password_change(&mut self) {
        self.changing_password = true;
    }

    pub fn cancel_password_change(&mut self) {
        self.password = PasswordDraft::default();
        self.changing_password = false;
        self.notices.dismiss_error();
    }

    pub fn begin_password_change(&mut self) -> Option<ChangePasswordRequest> {
        self.notices.dismiss_error();
        let draft = &self.password;
        let min_len = self.settings.min_password_len;
        let failure = if draft.current.is_empty() || draft.new.is_empty() || draft.confirm.is_empty()
        {
            Some("Please fill in all password fields".to_string())
        } else if draft.new != draft.confirm {
            Some("New passwords do not match".to_string())
        } else if draft.new.chars().count() < min_len {
            Some(format!("New password must be at least {min_len} characters long"))
        } else {
            None
        };
        if let Some(message) = failure {
            self.report(ConsoleError::Validation(message));
            return None;
        }
        Some(ChangePasswordRequest {
            current_password: self.password.current.clone(),
            new_password: self.password.new.clone(),
        })
    }

    pub fn finish_password_change(
        &mut self,
        result: Result<MessageResponse, AppError>,
    ) -> Option<NoticeTicket> {
        match result {
            Ok(_) => {
                tracing::info!("password changed");
                self.password = PasswordDraft::default();
                self.changing_password = false;
                let ttl = self.settings.notice_ttl();
                Some(self.notices.show_success("Password updated successfully", ttl))
            }
            Err(e) => {
                self.report(ConsoleError::from_remote(&e, "Password update failed"));
                None
            }
        }
    }

    // -- verification email --

    pub fn begin_send_verification(&mut self) {
        self.loading = true;
        self.notices.dismiss_error();
    }

    pub fn finish_send_verification(
        &mut self,
        result: Result<MessageResponse, AppError>,
    ) -> Option<NoticeTicket> {
        self.loading = false;
        match result {
            Ok(_) => {
                let ttl = self.settings.verification_notice_ttl();
                Some(self.notices.show_success(
                    "Verification email sent successfully! Please check your inbox.",
                    ttl,
                ))
            }
            Err(e) => {
                self.report(ConsoleError::from_remote(
                    &e,
                    "Failed to send verification email",
                ));
                None
            }
        }
    }

    // -- async drivers --

    pub async fn load<A: AuthService + ?Sized>(&mut self, auth: &A) {
        self.begin_load();
        let result = auth.get_profile().await;
        self.finish_load(result);
    }

    pub async fn update<A: AuthService + ?Sized>(&mut self, auth: &A) -> Option<NoticeTicket> {
        let request = self.begin_update()?;
        let result = auth.update_profile(request).await;
        let ticket = self.finish_update(result)?;
        self.load(auth).await;
        Some(ticket)
    }

    pub async fn change_password<A: AuthService + ?Sized>(
        &mut self,
        auth: &A,
    ) -> Option<NoticeTicket> {
        let request = self.begin_password_change()?;
        let result = auth.change_password(request).await;
        self.finish_password_change(result)
    }

    pub async fn send_verification<A: AuthService + ?Sized>(
        &mut self,
        auth: &A,
    ) -> Option<NoticeTicket> {
        self.begin_send_verification();
        let result = auth.send_verification_email().await;
        self.finish_send_verification(result)
    }
}

/// Up to two uppercase initials of `name`, or "ST" when there are none.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    if letters.is_empty() {
        "ST".to_string()
    } else {
        letters
    }
}
