use console::{AdminConsole, FormField};
use dioxus::prelude::*;

/// Add/edit dialog bound to the console's record form.
#[component]
pub fn StudentFormDialog(mut console: Signal<AdminConsole>, on_submit: EventHandler<()>) -> Element {
    let view = console.read();
    let form = view.form();
    let title = form.title();
    let with_credential = form.collects_credential();
    let submitting = form.is_submitting();
    let draft = form.draft().cloned().unwrap_or_default();
    drop(view);

    let submit_label = match (submitting, with_credential) {
        (true, _) => "Saving...",
        (false, true) => "Add Student",
        (false, false) => "Update Student",
    };

    let mut set = move |field: FormField, value: String| console.write().set_field(field, value);

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog", aria_modal: "true",
                div { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "alert-dismiss",
                        aria_label: "Close",
                        onclick: move |_| console.write().cancel_form(),
                        "\u{00d7}"
                    }
                }
                form {
                    class: "modal-body",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        on_submit.call(());
                    },
                    label { r#for: "student-name", "Name" }
                    input {
                        id: "student-name",
                        placeholder: "Enter student name",
                        value: "{draft.name}",
                        oninput: move |evt| set(FormField::Name, evt.value()),
                    }
                    label { r#for: "student-email", "Email" }
                    input {
                        id: "student-email",
                        r#type: "email",
                        placeholder: "Enter email address",
                        value: "{draft.email}",
                        oninput: move |evt| set(FormField::Email, evt.value()),
                    }
                    label { r#for: "student-course", "Course" }
                    input {
                        id: "student-course",
                        placeholder: "Enter course name",
                        value: "{draft.course}",
                        oninput: move |evt| set(FormField::Course, evt.value()),
                    }
                    if with_credential {
                        label { r#for: "student-password", "Password" }
                        input {
                            id: "student-password",
                            r#type: "password",
                            placeholder: "Enter initial password",
                            value: "{draft.credential}",
                            oninput: move |evt| set(FormField::Credential, evt.value()),
                        }
                    }
                    div { class: "modal-footer",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| console.write().cancel_form(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting,
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
