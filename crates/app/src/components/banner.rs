use dioxus::prelude::*;

/// Error and success banners, each with a dismiss button.
#[component]
pub fn NoticeBanners(
    error: Option<String>,
    success: Option<String>,
    on_dismiss_error: EventHandler<()>,
    on_dismiss_success: EventHandler<()>,
) -> Element {
    rsx! {
        if let Some(message) = error {
            div { class: "alert alert-error", role: "alert",
                span { "{message}" }
                button {
                    class: "alert-dismiss",
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss_error.call(()),
                    "\u{00d7}"
                }
            }
        }
        if let Some(message) = success {
            div { class: "alert alert-success", role: "status",
                span { "{message}" }
                button {
                    class: "alert-dismiss",
                    aria_label: "Dismiss",
                    onclick: move |_| on_dismiss_success.call(()),
                    "\u{00d7}"
                }
            }
        }
    }
}
