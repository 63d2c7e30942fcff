use console::AdminConsole;
use pretty_assertions::assert_eq;
use shared_types::{AppError, ConsoleSettings};

use crate::common::{student, FakeStudents};

async fn console_with(svc: &FakeStudents) -> AdminConsole {
    let mut console = AdminConsole::new(ConsoleSettings::default());
    console.load_initial(svc).await;
    console
}

#[tokio::test]
async fn test_failed_delete_closes_prompt_without_reload() {
    let svc = FakeStudents::with_records(5);
    let mut console = console_with(&svc).await;

    console.request_delete(student(3));
    svc.fail_next_mutation(AppError::internal(""));
    assert_eq!(console.confirm_delete(&svc).await, None);

    assert!(!console.deletion().is_open());
    assert_eq!(console.notices().error(), Some("Delete failed"));
    assert_eq!(svc.list_call_count(), 1);
    assert_eq!(console.list().items().len(), 5);
}

#[tokio::test]
async fn test_failed_delete_shows_service_message() {
    let svc = FakeStudents::with_records(5);
    let mut console = console_with(&svc).await;

    console.request_delete(student(3));
    svc.fail_next_mutation(AppError::not_found("Student not found"));
    console.confirm_delete(&svc).await;

    assert!(!console.deletion().is_open());
    assert_eq!(console.notices().error(), Some("Student not found"));
}

#[tokio::test]
async fn test_successful_delete_reloads_once() {
    let svc = FakeStudents::with_records(5);
    let mut console = console_with(&svc).await;

    console.request_delete(student(3));
    assert!(console.confirm_delete(&svc).await.is_some());

    assert_eq!(*svc.deleted.borrow(), vec!["s3".to_string()]);
    assert_eq!(svc.list_call_count(), 2);
    assert_eq!(console.list().items().len(), 4);
    assert_eq!(console.notices().success(), Some("Student deleted successfully"));
    assert!(!console.deletion().is_open());
}

#[tokio::test]
async fn test_cancel_never_calls_service() {
    let svc = FakeStudents::with_records(5);
    let mut console = console_with(&svc).await;

    console.request_delete(student(3));
    console.cancel_delete();
    assert_eq!(console.confirm_delete(&svc).await, None);

    assert_eq!(svc.mutation_count(), 0);
    assert_eq!(svc.list_call_count(), 1);
}

#[tokio::test]
async fn test_second_request_replaces_first() {
    let svc = FakeStudents::with_records(5);
    let mut console = console_with(&svc).await;

    console.request_delete(student(2));
    console.request_delete(student(4));
    console.confirm_delete(&svc).await;

    assert_eq!(*svc.deleted.borrow(), vec!["s4".to_string()]);
}

#[tokio::test]
async fn test_deleting_last_row_moves_to_new_last_page() {
    let svc = FakeStudents::with_records(21);
    let mut console = console_with(&svc).await;
    console.go_to_page(&svc, 3).await;
    assert_eq!(console.list().items().len(), 1);

    console.request_delete(student(21));
    assert!(console.confirm_delete(&svc).await.is_some());

    assert_eq!(*svc.list_calls.borrow(), vec![1, 3, 3, 2]);
    let state = console.list().page_state();
    assert_eq!(state.current_page, 2);
    assert_eq!(state.total_pages, 2);
    assert_eq!(console.list().items()[0].id, "s11");
}
