use console::{StudentProfileController, VerifyAccountController, VerifyStatus};
use pretty_assertions::assert_eq;
use shared_types::{AppError, ConsoleSettings, MessageResponse};

use crate::common::FakeAuth;

async fn loaded(auth: &FakeAuth) -> StudentProfileController {
    let mut ctrl = StudentProfileController::new(ConsoleSettings::default());
    ctrl.load(auth).await;
    ctrl
}

#[tokio::test]
async fn test_loaded_profile_fills_card() {
    let auth = FakeAuth::new("student");
    let ctrl = loaded(&auth).await;

    assert_eq!(ctrl.display_name(), Some("Ada Lovelace"));
    assert_eq!(ctrl.initials(), "AL");
    assert_eq!(ctrl.student_reference().as_deref(), Some("A5B4C3D2"));
    assert!(!ctrl.is_verified());
    assert_eq!(ctrl.draft().course, "Mathematics");
}

#[tokio::test]
async fn test_failed_load_shows_banner() {
    let auth = FakeAuth::new("student");
    *auth.profile_result.borrow_mut() = Err(AppError::internal("boom"));
    let ctrl = loaded(&auth).await;

    assert_eq!(ctrl.notices().error(), Some("Failed to load student data"));
    assert!(!ctrl.is_loading());
    assert!(!ctrl.needs_reauth());
}

#[tokio::test]
async fn test_rejected_load_requests_reauth() {
    let auth = FakeAuth::new("student");
    *auth.profile_result.borrow_mut() = Err(AppError::unauthorized("Token expired"));
    let ctrl = loaded(&auth).await;

    assert!(ctrl.needs_reauth());
    assert_eq!(ctrl.notices().error(), None);
}

#[tokio::test]
async fn test_profile_update_reloads_profile() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;

    ctrl.start_edit();
    ctrl.draft_mut().course = "  Astronomy ".into();
    let ticket = ctrl.update(&auth).await;

    assert!(ticket.is_some());
    assert_eq!(auth.profile_updates.borrow()[0].course, "Astronomy");
    assert_eq!(auth.profile_calls.get(), 2);
    assert!(!ctrl.is_editing());
    assert_eq!(ctrl.notices().success(), Some("Profile updated successfully"));
}

#[tokio::test]
async fn test_cancel_edit_restores_loaded_values() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;

    ctrl.start_edit();
    ctrl.draft_mut().name = String::new();
    assert_eq!(ctrl.update(&auth).await, None);
    assert_eq!(ctrl.notices().error(), Some("Please fill in all required fields"));
    assert!(auth.profile_updates.borrow().is_empty());

    ctrl.cancel_edit();
    assert_eq!(ctrl.draft().name, "Ada Lovelace");
    assert_eq!(ctrl.notices().error(), None);
}

#[tokio::test]
async fn test_password_checks_run_before_service() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;
    ctrl.start_password_change();

    let cases = [
        (("old", "", ""), "Please fill in all password fields"),
        (("old", "abcdef", "abcdeg"), "New passwords do not match"),
        (("old", "abc", "abc"), "New password must be at least 6 characters long"),
    ];
    for ((current, new, confirm), expected) in cases {
        let draft = ctrl.password_draft_mut();
        draft.current = current.into();
        draft.new = new.into();
        draft.confirm = confirm.into();
        assert_eq!(ctrl.change_password(&auth).await, None);
        assert_eq!(ctrl.notices().error(), Some(expected));
    }
    assert!(auth.password_changes.borrow().is_empty());
}

#[tokio::test]
async fn test_password_change_clears_draft() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;
    ctrl.start_password_change();
    let draft = ctrl.password_draft_mut();
    draft.current = "old-secret".into();
    draft.new = "new-secret".into();
    draft.confirm = "new-secret".into();

    assert!(ctrl.change_password(&auth).await.is_some());

    let sent = auth.password_changes.borrow();
    assert_eq!(sent[0].current_password, "old-secret");
    assert_eq!(sent[0].new_password, "new-secret");
    assert!(!ctrl.is_changing_password());
    assert_eq!(ctrl.password_draft().new, "");
    assert_eq!(ctrl.notices().success(), Some("Password updated successfully"));
}

#[tokio::test]
async fn test_password_change_failure_shows_message() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;
    ctrl.start_password_change();
    let draft = ctrl.password_draft_mut();
    draft.current = "bad".into();
    draft.new = "new-secret".into();
    draft.confirm = "new-secret".into();
    *auth.mutation_result.borrow_mut() = Err(AppError::bad_request("Current password is incorrect"));

    assert_eq!(ctrl.change_password(&auth).await, None);
    assert_eq!(ctrl.notices().error(), Some("Current password is incorrect"));
    assert!(ctrl.is_changing_password());
}

#[tokio::test(start_paused = true)]
async fn test_verification_notice_lasts_longer() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;

    let ticket = ctrl.send_verification(&auth).await.unwrap();
    assert_eq!(ticket.ttl, std::time::Duration::from_secs(5));
    assert_eq!(
        ctrl.notices().success(),
        Some("Verification email sent successfully! Please check your inbox.")
    );

    console::timer::sleep(ticket.ttl).await;
    ctrl.expire_notice(ticket);
    assert_eq!(ctrl.notices().success(), None);
}

#[tokio::test]
async fn test_verification_email_failure_uses_fallback() {
    let auth = FakeAuth::new("student");
    let mut ctrl = loaded(&auth).await;
    *auth.mutation_result.borrow_mut() = Err(AppError::internal(""));

    assert_eq!(ctrl.send_verification(&auth).await, None);
    assert_eq!(ctrl.notices().error(), Some("Failed to send verification email"));
    assert!(!ctrl.is_loading());
}

#[tokio::test]
async fn test_verify_link_calls_service_once() {
    let auth = FakeAuth::new("student");
    let mut ctrl = VerifyAccountController::new(Some("tok-123"));

    let status = ctrl.run(&auth).await.clone();
    assert_eq!(
        status,
        VerifyStatus::Success("Your student account has been verified successfully!".into())
    );
    assert!(status.redirects());

    ctrl.run(&auth).await;
    assert_eq!(auth.verify_calls.get(), 1);
}

#[tokio::test]
async fn test_verify_without_token_skips_service() {
    let auth = FakeAuth::new("student");
    let mut ctrl = VerifyAccountController::new(None);

    let status = ctrl.run(&auth).await;
    assert!(!status.redirects());
    assert_eq!(auth.verify_calls.get(), 0);
}

#[tokio::test]
async fn test_unsuccessful_verify_reports_service_message() {
    let auth = FakeAuth::new("student");
    *auth.verify_result.borrow_mut() = Ok(MessageResponse {
        success: false,
        message: Some("Token expired".into()),
    });
    let mut ctrl = VerifyAccountController::new(Some("old"));

    assert_eq!(ctrl.run(&auth).await, &VerifyStatus::Failed("Token expired".into()));
}
