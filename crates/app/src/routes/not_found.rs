use dioxus::prelude::*;

use crate::routes::Route;

/// Fallback for any path the console does not serve.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let requested = format!("/{}", route.join("/"));

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card not-found-card",
                div { class: "not-found-code", "404" }
                h2 { class: "auth-title", "Nothing here" }
                p { class: "auth-subtitle",
                    "There is no console page at "
                    code { "{requested}" }
                    "."
                }
                Link { class: "btn btn-primary", to: Route::DashboardRedirect {}, "Go to my dashboard" }
                Link { class: "btn btn-secondary", to: Route::Login { redirect: None }, "Sign in as someone else" }
            }
        }
    }
}
