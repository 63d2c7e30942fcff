use crate::auth::{use_api, use_auth, use_session_store, use_settings};
use crate::routes::login::clear_errors;
use crate::routes::Route;
use console::auth_forms::{display_error, SignupForm};
use dioxus::prelude::*;
use shared_types::Role;

#[derive(Clone, Copy, PartialEq)]
enum SignupField {
    Email,
    Password,
    Confirm,
    Name,
    Course,
}

/// Account registration. Students also provide their name and course.
#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let store = use_session_store();
    let api = use_api();
    let settings = use_settings();
    let mut form = use_signal(SignupForm::default);
    let mut local_error = use_signal(|| Option::<String>::None);

    let mount_store = store.clone();
    use_hook(move || mount_store.clear_error());

    if auth.is_authenticated() {
        navigator().replace(Route::DashboardRedirect {});
    }

    let session = auth.session.read();
    let is_loading = session.is_loading;
    let error = display_error(session.last_error.as_deref(), local_error.read().as_deref())
        .map(str::to_string);
    drop(session);

    let is_student = form.read().role == Role::Student;
    let min_len = settings.min_password_len;

    let signup_store = store.clone();
    let handle_signup = move |evt: FormEvent| {
        let store = signup_store.clone();
        let api = api.clone();
        async move {
            evt.prevent_default();
            local_error.set(None);
            let request = match form.read().validate(min_len) {
                Ok(request) => request,
                Err(e) => {
                    local_error.set(e.banner());
                    return;
                }
            };
            if store.signup(&api, request).await.is_ok() {
                navigator().push(Route::DashboardRedirect {});
            }
        }
    };

    let field_input = move |field: SignupField| {
        let store = store.clone();
        move |evt: FormEvent| {
            let value = evt.value();
            {
                let mut form = form.write();
                match field {
                    SignupField::Email => form.email = value,
                    SignupField::Password => form.password = value,
                    SignupField::Confirm => form.confirm_password = value,
                    SignupField::Name => form.name = value,
                    SignupField::Course => form.course = value,
                }
            }
            clear_errors(auth, &store, local_error);
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Join Us Today" }
                p { class: "auth-subtitle", "Create your account to get started" }

                if let Some(err) = error {
                    div { class: "alert alert-error", "{err}" }
                }

                form { class: "auth-form", onsubmit: handle_signup,
                    label { r#for: "role", "Account Type" }
                    select {
                        id: "role",
                        value: form.read().role.as_str(),
                        onchange: move |evt| {
                            if let Some(role) = Role::parse(&evt.value()) {
                                form.write().role = role;
                            }
                        },
                        option { value: "student", "Student" }
                        option { value: "admin", "Admin" }
                    }

                    if is_student {
                        label { r#for: "name", "Full Name" }
                        input {
                            id: "name",
                            placeholder: "Enter your full name",
                            value: "{form.read().name}",
                            oninput: field_input(SignupField::Name),
                        }
                        label { r#for: "course", "Course" }
                        input {
                            id: "course",
                            placeholder: "Enter your course",
                            value: "{form.read().course}",
                            oninput: field_input(SignupField::Course),
                        }
                    }

                    label { r#for: "email", "Email address" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: "{form.read().email}",
                        oninput: field_input(SignupField::Email),
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "At least {min_len} characters",
                        value: "{form.read().password}",
                        oninput: field_input(SignupField::Password),
                    }
                    label { r#for: "confirm", "Confirm Password" }
                    input {
                        id: "confirm",
                        r#type: "password",
                        placeholder: "Repeat your password",
                        value: "{form.read().confirm_password}",
                        oninput: field_input(SignupField::Confirm),
                    }

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: is_loading,
                        if is_loading { "Creating account..." } else { "Create account" }
                    }
                }

                p { class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login { redirect: None }, "Sign in here" }
                }
            }
        }
    }
}
