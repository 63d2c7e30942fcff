use std::time::Duration;

use console::{AdminConsole, FormField, FormMode};
use pretty_assertions::assert_eq;
use shared_types::{AppError, ConsoleSettings};

use crate::common::{student, FakeStudents};

async fn console_with(svc: &FakeStudents) -> AdminConsole {
    let mut console = AdminConsole::new(ConsoleSettings::default());
    console.load_initial(svc).await;
    console
}

fn fill(console: &mut AdminConsole, name: &str, email: &str, course: &str) {
    console.set_field(FormField::Name, name);
    console.set_field(FormField::Email, email);
    console.set_field(FormField::Course, course);
}

#[tokio::test]
async fn test_add_without_password_never_reaches_service() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_add();
    fill(&mut console, "Grace Hopper", "grace@school.edu", "Physics");
    assert_eq!(console.submit(&svc).await, None);

    assert_eq!(svc.created.borrow().len(), 0);
    assert_eq!(console.notices().error(), Some("Password is required for new students"));
    assert!(console.form().is_open());
    assert_eq!(svc.list_call_count(), 1);
}

#[tokio::test]
async fn test_blank_fields_are_rejected() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_add();
    fill(&mut console, "   ", "grace@school.edu", "Physics");
    console.set_field(FormField::Credential, "secret1");
    assert_eq!(console.submit(&svc).await, None);

    assert_eq!(svc.mutation_count(), 0);
    assert_eq!(console.notices().error(), Some("Please fill in all required fields"));
}

#[tokio::test]
async fn test_edit_payload_never_carries_password() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_add();
    console.set_field(FormField::Credential, "leftover");
    console.open_edit(student(2));
    console.set_field(FormField::Credential, "typed-anyway");
    console.set_field(FormField::Course, "History");

    assert!(matches!(console.form().mode(), Some(FormMode::Edit(_))));
    assert!(!console.form().collects_credential());
    assert!(console.submit(&svc).await.is_some());

    let updated = svc.updated.borrow();
    assert_eq!(updated.len(), 1);
    assert_eq!(updated[0].0, "s2");
    let payload = serde_json::to_value(&updated[0].1).unwrap();
    assert!(payload.get("password").is_none());
    assert_eq!(payload["course"], "History");
}

#[tokio::test]
async fn test_successful_add_reloads_current_page_once() {
    let svc = FakeStudents::with_records(25);
    let mut console = console_with(&svc).await;
    console.go_to_page(&svc, 2).await;

    console.open_add();
    fill(&mut console, "Grace Hopper", "grace@school.edu", "Physics");
    console.set_field(FormField::Credential, "secret1");
    assert!(console.submit(&svc).await.is_some());

    assert_eq!(*svc.list_calls.borrow(), vec![1, 2, 2]);
    assert_eq!(svc.created.borrow()[0].password, "secret1");
    assert!(!console.form().is_open());
    assert_eq!(console.notices().success(), Some("Student added successfully"));
    assert_eq!(console.list().page_state().total_count, 26);
}

#[tokio::test(start_paused = true)]
async fn test_success_notice_clears_after_ttl() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_edit(student(1));
    console.set_field(FormField::Name, "Renamed");
    let ticket = console.submit(&svc).await.unwrap();
    assert_eq!(ticket.ttl, Duration::from_secs(3));
    assert_eq!(console.notices().success(), Some("Student updated successfully"));

    console::timer::sleep(ticket.ttl).await;
    console.expire_notice(ticket);
    assert_eq!(console.notices().success(), None);
}

#[tokio::test]
async fn test_expired_ticket_leaves_newer_notice() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_edit(student(1));
    let first = console.submit(&svc).await.unwrap();
    console.open_edit(student(2));
    let second = console.submit(&svc).await.unwrap();

    console.expire_notice(first);
    assert_eq!(console.notices().success(), Some("Student updated successfully"));
    console.expire_notice(second);
    assert_eq!(console.notices().success(), None);
}

#[tokio::test]
async fn test_failed_save_keeps_form_open_without_reload() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_add();
    fill(&mut console, "Grace Hopper", "taken@school.edu", "Physics");
    console.set_field(FormField::Credential, "secret1");
    svc.fail_next_mutation(AppError::conflict("Email already exists"));
    assert_eq!(console.submit(&svc).await, None);

    assert_eq!(svc.list_call_count(), 1);
    assert!(console.form().is_open());
    assert!(!console.form().is_submitting());
    assert_eq!(console.form().draft().unwrap().email, "taken@school.edu");
    assert_eq!(console.notices().error(), Some("Email already exists"));
    assert_eq!(console.notices().success(), None);
}

#[tokio::test]
async fn test_blank_service_message_uses_fallback() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;

    console.open_edit(student(1));
    svc.fail_next_mutation(AppError::internal(""));
    assert_eq!(console.submit(&svc).await, None);
    assert_eq!(console.notices().error(), Some("Operation failed"));
}

#[tokio::test]
async fn test_rejected_credential_flags_reauth() {
    let svc = FakeStudents::with_records(3);
    let mut console = console_with(&svc).await;
    let mut events = console.subscribe();

    console.open_edit(student(1));
    svc.fail_next_mutation(AppError::unauthorized("Token expired"));
    assert_eq!(console.submit(&svc).await, None);

    assert!(console.needs_reauth());
    assert_eq!(console.notices().error(), None);
    let mut saw_expiry = false;
    while let Ok(event) = events.try_recv() {
        saw_expiry |= event == console::ConsoleEvent::SessionExpired;
    }
    assert!(saw_expiry);
}
