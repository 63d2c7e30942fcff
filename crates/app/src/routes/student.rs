use api::ApiClient;
use console::profile::StudentProfileController;
use console::{AuthService, NoticeTicket, SessionStore};
use dioxus::prelude::*;

use crate::auth::{use_api, use_session_store, use_settings};
use crate::components::{DashboardHeader, NoticeBanners};
use crate::format_helpers::{format_date_long, or_placeholder};
use crate::notify;
use crate::routes::Spinner;

type Profile = Signal<StudentProfileController>;

async fn load_profile(mut ctrl: Profile, api: &ApiClient, store: &SessionStore) {
    ctrl.write().begin_load();
    let result = api.get_profile().await;
    ctrl.write().finish_load(result);
    end_session_if_rejected(ctrl, store);
}

fn end_session_if_rejected(ctrl: Profile, store: &SessionStore) {
    if ctrl.read().needs_reauth() {
        store.expire();
    }
}

fn expire_later(mut ctrl: Profile, ticket: Option<NoticeTicket>) {
    if let Some(ticket) = ticket {
        notify::expire_later(ticket, move |ticket| ctrl.write().expire_notice(ticket));
    }
}

/// The signed-in student's own profile.
#[component]
pub fn StudentDashboard() -> Element {
    let api = use_api();
    let store = use_session_store();
    let settings = use_settings();
    let mut ctrl: Profile = use_signal(move || StudentProfileController::new(settings));

    let load_api = api.clone();
    let load_store = store.clone();
    use_future(move || {
        let api = load_api.clone();
        let store = load_store.clone();
        async move { load_profile(ctrl, &api, &store).await }
    });

    let update_api = api.clone();
    let update_store = store.clone();
    let save_profile = move |evt: FormEvent| {
        let api = update_api.clone();
        let store = update_store.clone();
        async move {
            evt.prevent_default();
            let request = ctrl.write().begin_update();
            let Some(request) = request else {
                return;
            };
            let result = api.update_profile(request).await;
            let ticket = ctrl.write().finish_update(result);
            let saved = ticket.is_some();
            expire_later(ctrl, ticket);
            end_session_if_rejected(ctrl, &store);
            if saved {
                load_profile(ctrl, &api, &store).await;
            }
        }
    };

    let password_api = api.clone();
    let password_store = store.clone();
    let save_password = move |evt: FormEvent| {
        let api = password_api.clone();
        let store = password_store.clone();
        async move {
            evt.prevent_default();
            let request = ctrl.write().begin_password_change();
            let Some(request) = request else {
                return;
            };
            let result = api.change_password(request).await;
            let ticket = ctrl.write().finish_password_change(result);
            expire_later(ctrl, ticket);
            end_session_if_rejected(ctrl, &store);
        }
    };

    let send_verification = move |_: MouseEvent| {
        let api = api.clone();
        let store = store.clone();
        async move {
            ctrl.write().begin_send_verification();
            let result = api.send_verification_email().await;
            let ticket = ctrl.write().finish_send_verification(result);
            expire_later(ctrl, ticket);
            end_session_if_rejected(ctrl, &store);
        }
    };

    let view = ctrl.read();
    if view.profile().is_none() && view.is_loading() {
        return rsx! { Spinner {} };
    }
    let welcome = view.display_name().map(|name| format!("Welcome back, {name}"));
    let initials = view.initials();
    let reference = view.student_reference().unwrap_or_else(|| "N/A".to_string());
    let verified = view.is_verified();
    let busy = view.is_loading();
    let editing = view.is_editing();
    let changing_password = view.is_changing_password();
    let draft = view.draft().clone();
    let password = view.password_draft().clone();
    let error = view.notices().error().map(str::to_string);
    let success = view.notices().success().map(str::to_string);
    let email = view.profile().map(|p| p.email.clone()).unwrap_or_default();
    let student = view.profile().and_then(|p| p.student.clone());
    drop(view);

    let name = student.as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let course = student.as_ref().map(|s| s.course.clone()).unwrap_or_default();
    let name_shown = or_placeholder(&name, "Not provided").to_string();
    let course_shown = or_placeholder(&course, "Not assigned").to_string();
    let enrolled = format_date_long(student.as_ref().and_then(|s| s.enrollment_date.as_ref()));

    rsx! {
        div { class: "dashboard",
            DashboardHeader { title: "Student Dashboard", subtitle: welcome }

            main { class: "dashboard-main",
                NoticeBanners {
                    error,
                    success,
                    on_dismiss_error: move |_| ctrl.write().dismiss_error(),
                    on_dismiss_success: move |_| ctrl.write().dismiss_success(),
                }

                div { class: "profile-grid",
                    div { class: "card",
                        div { class: "card-header",
                            div { class: "avatar", "{initials}" }
                            h2 { class: "card-title", "Profile Information" }
                            if !editing {
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| ctrl.write().start_edit(),
                                    "Edit Profile"
                                }
                            }
                        }

                        if editing {
                            form { class: "card-body", onsubmit: save_profile,
                                label { r#for: "profile-name", "Full Name" }
                                input {
                                    id: "profile-name",
                                    value: "{draft.name}",
                                    oninput: move |evt| ctrl.write().draft_mut().name = evt.value(),
                                }
                                label { r#for: "profile-course", "Course" }
                                input {
                                    id: "profile-course",
                                    value: "{draft.course}",
                                    oninput: move |evt| ctrl.write().draft_mut().course = evt.value(),
                                }
                                div { class: "form-actions",
                                    button { class: "btn btn-primary", r#type: "submit", "Save Changes" }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: move |_| ctrl.write().cancel_edit(),
                                        "Cancel"
                                    }
                                }
                            }
                        } else {
                            dl { class: "card-body details",
                                dt { "Full Name" }
                                dd { "{name_shown}" }
                                dt { "Email Address" }
                                dd { "{email}" }
                                dt { "Course" }
                                dd { "{course_shown}" }
                                dt { "Enrollment Date" }
                                dd { "{enrolled}" }
                                dt { "Verification Status" }
                                dd {
                                    if verified {
                                        span { class: "badge badge-verified", "Verified" }
                                    } else {
                                        span { class: "badge badge-pending", "Not Verified" }
                                        button {
                                            class: "btn btn-link",
                                            disabled: busy,
                                            onclick: send_verification,
                                            if busy { "Sending..." } else { "Send Verification Email" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Security" }
                            if !changing_password {
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| ctrl.write().start_password_change(),
                                    "Change Password"
                                }
                            }
                        }
                        if changing_password {
                            form { class: "card-body", onsubmit: save_password,
                                label { r#for: "current-password", "Current Password" }
                                input {
                                    id: "current-password",
                                    r#type: "password",
                                    value: "{password.current}",
                                    oninput: move |evt| ctrl.write().password_draft_mut().current = evt.value(),
                                }
                                label { r#for: "new-password", "New Password" }
                                input {
                                    id: "new-password",
                                    r#type: "password",
                                    value: "{password.new}",
                                    oninput: move |evt| ctrl.write().password_draft_mut().new = evt.value(),
                                }
                                label { r#for: "confirm-password", "Confirm New Password" }
                                input {
                                    id: "confirm-password",
                                    r#type: "password",
                                    value: "{password.confirm}",
                                    oninput: move |evt| ctrl.write().password_draft_mut().confirm = evt.value(),
                                }
                                div { class: "form-actions",
                                    button { class: "btn btn-primary", r#type: "submit", "Update Password" }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: move |_| ctrl.write().cancel_password_change(),
                                        "Cancel"
                                    }
                                }
                            }
                        } else {
                            p { class: "card-body muted", "Keep your account secure with a strong password." }
                        }
                    }

                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Academic Summary" }
                        }
                        dl { class: "card-body details",
                            dt { "Course" }
                            dd { "{course_shown}" }
                            dt { "Enrolled" }
                            dd { "{enrolled}" }
                            dt { "Student ID" }
                            dd { code { "{reference}" } }
                        }
                    }
                }
            }
        }
    }
}
