mod delete_dialog;
mod form_dialog;

use api::ApiClient;
use console::{AdminConsole, AfterMutation, ConsoleEvent, LoadTicket, StudentsService};
use dioxus::prelude::*;
use shared_types::StudentRecord;

use crate::auth::{use_api, use_session_store, use_settings};
use crate::components::{DashboardHeader, NoticeBanners, Pagination};
use crate::format_helpers::format_date_short;
use crate::notify;
use delete_dialog::DeleteDialog;
use form_dialog::StudentFormDialog;

/// View-side counterpart of `AdminConsole::run_load`: the write borrow is
/// taken per step so none is held while the request is in flight.
async fn run_load(mut console: Signal<AdminConsole>, api: ApiClient, ticket: LoadTicket) {
    let mut next = Some(ticket);
    while let Some(ticket) = next {
        let page_size = console.read().list().page_size();
        let result = api.list(ticket.page, page_size).await;
        next = console.write().apply_load(ticket, result);
    }
}

/// Schedule the notice expiry, then reload the list.
async fn after_mutation(mut console: Signal<AdminConsole>, api: ApiClient, after: AfterMutation) {
    notify::expire_later(after.notice, move |ticket| console.write().expire_notice(ticket));
    run_load(console, api, after.reload).await;
}

/// Admin dashboard: paged student table with add, edit and delete.
#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let store = use_session_store();
    let settings = use_settings();
    let max_visible = settings.max_visible_pages;
    let mut console = use_signal(move || AdminConsole::new(settings));

    // A rejected credential ends the session; the guard then redirects.
    use_future(move || {
        let store = store.clone();
        async move {
            let mut events = console.write().subscribe();
            while let Some(event) = events.recv().await {
                if event == ConsoleEvent::SessionExpired {
                    store.expire();
                }
            }
        }
    });

    let load_api = api.clone();
    use_future(move || {
        let api = load_api.clone();
        async move {
            let ticket = console.write().start();
            run_load(console, api, ticket).await;
        }
    });

    let page_api = api.clone();
    let change_page = move |page: u32| {
        let api = page_api.clone();
        spawn(async move {
            let ticket = console.write().change_page(page);
            if let Some(ticket) = ticket {
                run_load(console, api, ticket).await;
            }
        });
    };

    let submit_api = api.clone();
    let submit = move |_: ()| {
        let api = submit_api.clone();
        spawn(async move {
            let submission = console.write().begin_submit();
            let Some(submission) = submission else {
                return;
            };
            let result = submission.send(&api).await;
            let after = console.write().finish_submit(result);
            if let Some(after) = after {
                after_mutation(console, api, after).await;
            }
        });
    };

    let confirm_delete = move |_: ()| {
        let api = api.clone();
        spawn(async move {
            let target = console.write().begin_delete();
            let Some(target) = target else {
                return;
            };
            let result = api.delete(&target.id).await;
            let after = console.write().finish_delete(target, result);
            if let Some(after) = after {
                after_mutation(console, api, after).await;
            }
        });
    };

    let view = console.read();
    let items = view.list().items().to_vec();
    let page_state = *view.list().page_state();
    let loading = view.list().is_loading();
    let error = view.notices().error().map(str::to_string);
    let success = view.notices().success().map(str::to_string);
    let form_open = view.form().is_open();
    let pending_delete = view.deletion().pending().cloned();
    let deleting = view.deletion().is_deleting();
    drop(view);

    rsx! {
        div { class: "dashboard",
            DashboardHeader {
                title: "Admin Dashboard",
                subtitle: Some("Manage student records".to_string()),
            }

            main { class: "dashboard-main",
                NoticeBanners {
                    error,
                    success,
                    on_dismiss_error: move |_| console.write().dismiss_error(),
                    on_dismiss_success: move |_| console.write().dismiss_success(),
                }

                div { class: "card",
                    div { class: "card-header",
                        div {
                            h2 { class: "card-title", "Students" }
                            p { class: "card-subtitle", "{page_state.total_count} total students" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| console.write().open_add(),
                            "Add Student"
                        }
                    }

                    if loading && items.is_empty() {
                        div { class: "page-loading", div { class: "spinner" } }
                    } else if items.is_empty() {
                        div { class: "empty-state",
                            h3 { "No students found" }
                            p { "Get started by adding your first student." }
                        }
                    } else {
                        table { class: "table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Course" }
                                    th { "Enrollment Date" }
                                    th { "Status" }
                                    th { class: "table-actions", "Actions" }
                                }
                            }
                            tbody {
                                for student in items {
                                    StudentRow { key: "{student.id}", student, console }
                                }
                            }
                        }
                    }

                    div { class: "card-footer",
                        p { class: "result-summary", "{page_state.summary()}" }
                        Pagination { state: page_state, max_visible, on_change: change_page }
                    }
                }
            }

            if form_open {
                StudentFormDialog { console, on_submit: submit }
            }
            if let Some(request) = pending_delete {
                DeleteDialog {
                    target: request.target,
                    deleting,
                    on_confirm: confirm_delete,
                    on_cancel: move |_| console.write().cancel_delete(),
                }
            }
        }
    }
}

#[component]
fn StudentRow(student: StudentRecord, mut console: Signal<AdminConsole>) -> Element {
    let badge = if student.verified {
        "badge badge-verified"
    } else {
        "badge badge-pending"
    };
    let enrolled = format_date_short(student.enrollment_date.as_ref());
    let edit_target = student.clone();
    let delete_target = student.clone();

    rsx! {
        tr {
            td { class: "cell-strong", "{student.name}" }
            td { "{student.email}" }
            td { "{student.course}" }
            td { "{enrolled}" }
            td { span { class: badge, "{student.status_label()}" } }
            td { class: "table-actions",
                button {
                    class: "btn btn-link",
                    onclick: move |_| console.write().open_edit(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-link btn-danger",
                    onclick: move |_| console.write().request_delete(delete_target.clone()),
                    "Delete"
                }
            }
        }
    }
}
