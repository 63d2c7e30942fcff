use crate::auth::{use_api, use_auth, use_session_store};
use crate::routes::Route;
use dioxus::prelude::*;

/// Top bar of both dashboards with the signed-in email and a logout button.
#[component]
pub fn DashboardHeader(title: String, subtitle: Option<String>) -> Element {
    let auth = use_auth();
    let store = use_session_store();
    let api = use_api();
    let email = auth.email().unwrap_or_default();

    let handle_logout = move |_: MouseEvent| {
        let store = store.clone();
        let api = api.clone();
        async move {
            store.logout(&api).await;
            navigator().push(Route::Login { redirect: None });
        }
    };

    rsx! {
        header { class: "dashboard-header",
            div {
                h1 { class: "dashboard-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "dashboard-subtitle", "{subtitle}" }
                }
            }
            div { class: "dashboard-user",
                span { class: "dashboard-email", "{email}" }
                button { class: "btn btn-secondary", onclick: handle_logout, "Logout" }
            }
        }
    }
}
