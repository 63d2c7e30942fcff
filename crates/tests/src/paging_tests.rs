use console::pagination::page_window;
use console::{AdminConsole, LoadOutcome, PagedListController};
use pretty_assertions::assert_eq;
use shared_types::{AppError, ConsoleSettings};

use crate::common::FakeStudents;

#[test]
fn test_window_over_twenty_pages() {
    assert_eq!(page_window(1, 20, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(20, 20, 5), vec![16, 17, 18, 19, 20]);
    assert_eq!(page_window(10, 20, 5), vec![8, 9, 10, 11, 12]);
}

#[test]
fn test_window_length_is_bounded_by_page_count() {
    for total in 1..=12 {
        for current in 1..=total {
            let window = page_window(current, total, 5);
            assert_eq!(window.len() as u32, total.min(5), "current {current} of {total}");
            assert!(window.contains(&current));
            assert!(window.windows(2).all(|w| w[1] == w[0] + 1));
        }
    }
}

#[tokio::test]
async fn test_twenty_five_records_make_three_pages() {
    let svc = FakeStudents::with_records(25);
    let mut list = PagedListController::new(10);

    list.load(&svc, 1).await.unwrap();
    assert_eq!(list.page_state().total_pages, 3);
    assert_eq!(list.page_state().total_count, 25);
    assert_eq!(list.items().len(), 10);

    assert_eq!(list.request_page(4), None);
    assert_eq!(list.request_page(0), None);
    assert_eq!(list.page_state().current_page, 1);
    assert_eq!(svc.list_call_count(), 1);

    let ticket = list.request_page(3).unwrap();
    let page = svc_list(&svc, ticket.page).await;
    assert_eq!(list.finish_load(ticket, page), LoadOutcome::Applied);
    let ids: Vec<_> = list.items().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s21", "s22", "s23", "s24", "s25"]);
    assert_eq!(list.page_state().summary(), "Showing 21 to 25 of 25 results");
}

async fn svc_list(
    svc: &FakeStudents,
    page: u32,
) -> Result<shared_types::StudentPage, AppError> {
    use console::StudentsService;
    svc.list(page, 10).await
}

#[tokio::test]
async fn test_out_of_range_page_is_a_no_op_on_console() {
    let svc = FakeStudents::with_records(25);
    let mut console = AdminConsole::new(ConsoleSettings::default());
    console.load_initial(&svc).await;

    console.go_to_page(&svc, 4).await;
    console.go_to_page(&svc, 0).await;

    assert_eq!(svc.list_call_count(), 1);
    assert_eq!(console.list().page_state().current_page, 1);
}

#[tokio::test]
async fn test_superseded_load_is_discarded() {
    let svc = FakeStudents::with_records(25);
    let mut list = PagedListController::new(10);
    list.load(&svc, 1).await.unwrap();

    let slow = list.request_page(2).unwrap();
    let fast = list.request_page(3).unwrap();
    let fast_page = svc_list(&svc, fast.page).await;
    let slow_page = svc_list(&svc, slow.page).await;

    assert_eq!(list.finish_load(fast, fast_page), LoadOutcome::Applied);
    assert_eq!(list.finish_load(slow, slow_page), LoadOutcome::Stale);
    assert_eq!(list.page_state().current_page, 3);
    assert_eq!(list.items()[0].id, "s21");
}

#[tokio::test]
async fn test_failed_load_keeps_previous_page_visible() {
    let svc = FakeStudents::with_records(25);
    let mut console = AdminConsole::new(ConsoleSettings::default());
    console.load_initial(&svc).await;

    svc.fail_next_list(AppError::unavailable(""));
    console.go_to_page(&svc, 2).await;

    assert_eq!(console.list().items()[0].id, "s1");
    assert_eq!(console.list().page_state().current_page, 1);
    assert_eq!(console.notices().error(), Some("Failed to load students"));
    assert!(!console.list().is_loading());
}

#[tokio::test]
async fn test_service_message_is_shown_verbatim() {
    let svc = FakeStudents::with_records(3);
    svc.fail_next_list(AppError::forbidden("Admins only"));
    let mut console = AdminConsole::new(ConsoleSettings::default());
    console.load_initial(&svc).await;
    assert_eq!(console.notices().error(), Some("Admins only"));
}

#[tokio::test]
async fn test_empty_collection_has_one_page() {
    let svc = FakeStudents::default();
    let mut console = AdminConsole::new(ConsoleSettings::default());
    console.load_initial(&svc).await;

    let state = console.list().page_state();
    assert_eq!(state.total_pages, 1);
    assert!(!state.is_paged());
    assert_eq!(state.summary(), "Showing 0 to 0 of 0 results");
    assert!(console.list().items().is_empty());
}
