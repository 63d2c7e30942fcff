use crate::auth::{use_api, use_settings};
use crate::routes::Route;
use console::verify::{VerifyAccountController, VerifyStatus};
use console::AuthService;
use dioxus::prelude::*;

/// Landing page of the verification link sent by email.
#[component]
pub fn VerifyStudent(token: Option<String>) -> Element {
    let api = use_api();
    let settings = use_settings();
    let mut verifier = use_signal(|| VerifyAccountController::new(token.as_deref()));

    use_future(move || {
        let api = api.clone();
        let delay = settings.verify_redirect_delay();
        async move {
            let Some(token) = verifier.read().pending_token().map(str::to_string) else {
                return;
            };
            let result = api.verify_account(&token).await;
            let redirects = verifier.write().finish(result).redirects();
            if redirects {
                console::timer::sleep(delay).await;
                navigator().push(Route::Login { redirect: None });
            }
        }
    });

    let status = verifier.read().status().clone();

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card verify-card",
                match status {
                    VerifyStatus::Verifying => rsx! {
                        div { class: "spinner" }
                        h2 { class: "auth-title", "Verifying your account..." }
                        p { class: "auth-subtitle", "Please wait while we verify your student account." }
                    },
                    VerifyStatus::Success(message) => rsx! {
                        div { class: "verify-icon verify-ok", "\u{2713}" }
                        h2 { class: "auth-title", "Verification Successful!" }
                        p { class: "auth-subtitle", "{message}" }
                        p { class: "verify-hint", "Redirecting to login page..." }
                        Link { class: "btn btn-primary", to: Route::Login { redirect: None }, "Go to Login" }
                    },
                    VerifyStatus::Failed(message) => rsx! {
                        div { class: "verify-icon verify-failed", "\u{2717}" }
                        h2 { class: "auth-title", "Verification Failed" }
                        p { class: "auth-subtitle", "{message}" }
                        Link { class: "btn btn-primary", to: Route::Login { redirect: None }, "Go to Login" }
                        Link { class: "btn btn-secondary", to: Route::Signup {}, "Create New Account" }
                    },
                }
            }
        }
    }
}
