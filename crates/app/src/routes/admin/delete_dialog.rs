use dioxus::prelude::*;
use shared_types::StudentRecord;

#[component]
pub fn DeleteDialog(
    target: StudentRecord,
    deleting: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal modal-small", role: "alertdialog", aria_modal: "true",
                div { class: "modal-header",
                    h3 { "Delete Student" }
                }
                div { class: "modal-body",
                    p {
                        "Are you sure you want to delete "
                        strong { "{target.name}" }
                        "? This action cannot be undone."
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| on_confirm.call(()),
                        if deleting { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
