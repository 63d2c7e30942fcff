use console::PageState;
use dioxus::prelude::*;

/// Previous/next buttons around a sliding window of page numbers.
/// Renders nothing for a single page.
#[component]
pub fn Pagination(state: PageState, max_visible: u32, on_change: EventHandler<u32>) -> Element {
    if !state.is_paged() {
        return rsx! {};
    }
    let current = state.current_page;
    let pages = state.window(max_visible);

    rsx! {
        nav { class: "pagination", aria_label: "Pagination",
            button {
                class: "page-btn",
                disabled: !state.has_previous(),
                onclick: move |_| on_change.call(current - 1),
                "Previous"
            }
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current { "page-btn page-active" } else { "page-btn" },
                    onclick: move |_| on_change.call(page),
                    "{page}"
                }
            }
            button {
                class: "page-btn",
                disabled: !state.has_next(),
                onclick: move |_| on_change.call(current + 1),
                "Next"
            }
        }
    }
}
