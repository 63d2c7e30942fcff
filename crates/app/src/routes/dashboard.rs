use crate::auth::use_auth;
use crate::routes::{route_for, Route, Spinner};
use console::router;
use dioxus::prelude::*;

/// `/dashboard`: send the visitor to the home of their role.
#[component]
pub fn DashboardRedirect() -> Element {
    let auth = use_auth();
    let session = auth.session.read();

    if session.is_loading {
        return rsx! { Spinner {} };
    }
    let target: Route = route_for(router::dashboard_for(&session));
    navigator().replace(target);
    rsx! { Spinner {} }
}
