use crate::auth::{use_api, use_auth, use_session_store, AuthState};
use crate::routes::Route;
use console::auth_forms::{display_error, LoginForm};
use console::SessionStore;
use dioxus::prelude::*;

/// Login page. After signing in, navigates to `redirect` when one was
/// carried over from a guarded route, otherwise to `/dashboard`.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let auth = use_auth();
    let store = use_session_store();
    let api = use_api();
    let mut form = use_signal(LoginForm::default);
    let mut local_error = use_signal(|| Option::<String>::None);

    // Stale errors from an earlier attempt are not shown on arrival.
    let mount_store = store.clone();
    use_hook(move || mount_store.clear_error());

    let redirect_target = use_signal(move || redirect);
    let go_to_destination = move || match redirect_target.read().clone() {
        Some(path) => {
            navigator().push(path.parse::<Route>().unwrap_or(Route::DashboardRedirect {}));
        }
        None => {
            navigator().push(Route::DashboardRedirect {});
        }
    };

    if auth.is_authenticated() {
        navigator().replace(Route::DashboardRedirect {});
    }

    let session = auth.session.read();
    let is_loading = session.is_loading;
    let error = display_error(session.last_error.as_deref(), local_error.read().as_deref())
        .map(str::to_string);
    drop(session);

    let login_store = store.clone();
    let handle_login = move |evt: FormEvent| {
        let store = login_store.clone();
        let api = api.clone();
        async move {
            evt.prevent_default();
            local_error.set(None);
            let request = match form.read().validate() {
                Ok(request) => request,
                Err(e) => {
                    local_error.set(e.banner());
                    return;
                }
            };
            if store.login(&api, request).await.is_ok() {
                go_to_destination();
            }
        }
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h2 { class: "auth-title", "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to your account" }

                if let Some(err) = error {
                    div { class: "alert alert-error", "{err}" }
                }

                form { class: "auth-form", onsubmit: handle_login,
                    label { r#for: "email", "Email address" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: "{form.read().email}",
                        oninput: {
                            let store = store.clone();
                            move |evt: FormEvent| {
                                form.write().email = evt.value();
                                clear_errors(auth, &store, local_error);
                            }
                        },
                    }
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: "{form.read().password}",
                        oninput: {
                            let store = store.clone();
                            move |evt: FormEvent| {
                                form.write().password = evt.value();
                                clear_errors(auth, &store, local_error);
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: is_loading,
                        if is_loading { "Signing in..." } else { "Sign in" }
                    }
                }

                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up here" }
                }
            }
        }
    }
}

/// Typing into an auth form clears both the session error and the local one.
pub(crate) fn clear_errors(
    auth: AuthState,
    store: &SessionStore,
    mut local_error: Signal<Option<String>>,
) {
    if auth.session.read().last_error.is_some() {
        store.clear_error();
    }
    if local_error.read().is_some() {
        local_error.set(None);
    }
}
