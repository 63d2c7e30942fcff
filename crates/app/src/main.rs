use api::ApiClient;
use console::{Session, SessionStore};
use dioxus::prelude::*;

mod auth;
mod components;
pub mod format_helpers;
pub mod notify;
mod routes;
use auth::AuthState;
use routes::Route;

const CONSOLE_CSS: Asset = asset!("/assets/console.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = api::config::load_config().clone();
        tracing::info!(base_url = %config.api.base_url, "student console starting");
        config
    });

    let settings = config.console.clone();
    use_context_provider(|| settings);
    use_context_provider(|| ApiClient::from_config(&config));

    let store = use_context_provider(|| SessionStore::new(Session::restoring()));
    let mut auth = use_context_provider(|| AuthState::new(store.snapshot()));

    // Mirror every session change into the reactive signal the views read.
    let bridge = store.clone();
    use_future(move || {
        let store = bridge.clone();
        async move {
            let mut rx = store.subscribe();
            loop {
                let session = rx.borrow_and_update().clone();
                auth.session.set(session);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    // No credential survives a reload, so there is nothing to restore.
    use_hook(|| store.finish_restore());

    rsx! {
        document::Link { rel: "stylesheet", href: CONSOLE_CSS }
        Router::<Route> {}
    }
}
