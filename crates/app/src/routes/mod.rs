pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod student;
pub mod verify;

use crate::auth::use_auth;
use console::guard::{self, Decision};
use console::Destination;
use dioxus::prelude::*;
use shared_types::Role;

use admin::AdminDashboard;
use dashboard::DashboardRedirect;
use login::Login;
use not_found::NotFound;
use signup::Signup;
use student::StudentDashboard;
use verify::VerifyStudent;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::DashboardRedirect {})]
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/signup")]
    Signup {},
    #[route("/verify-student?:token")]
    VerifyStudent { token: Option<String> },
    #[route("/dashboard")]
    DashboardRedirect {},
    #[layout(AdminOnly)]
        #[route("/admin-dashboard")]
        AdminDashboard {},
    #[end_layout]
    #[layout(StudentOnly)]
        #[route("/student-dashboard")]
        StudentDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Route of a role-router destination.
pub fn route_for(destination: Destination) -> Route {
    match destination {
        Destination::Login => Route::Login { redirect: None },
        Destination::AdminHome => Route::AdminDashboard {},
        Destination::StudentHome => Route::StudentDashboard {},
    }
}

#[component]
fn AdminOnly() -> Element {
    rsx! { ProtectedRoute { allowed: vec![Role::Admin] } }
}

#[component]
fn StudentOnly() -> Element {
    rsx! { ProtectedRoute { allowed: vec![Role::Student] } }
}

/// Auth guard layout. Re-evaluated whenever the session signal changes.
#[component]
fn ProtectedRoute(allowed: Vec<Role>) -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let decision = guard::evaluate_at(&auth.session.read(), &allowed, &route.to_string());

    match decision {
        Decision::ShowLoading => rsx! { Spinner {} },
        Decision::RedirectToLogin { from } => {
            tracing::debug!(from = ?from, "not signed in, redirecting to login");
            navigator().replace(Route::Login { redirect: from });
            rsx! { Spinner {} }
        }
        Decision::RedirectToRoleHome(destination) => {
            tracing::debug!(to = destination.path(), "role not admitted, redirecting");
            navigator().replace(route_for(destination));
            rsx! { Spinner {} }
        }
        Decision::Render => rsx! { Outlet::<Route> {} },
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "page-loading",
            div { class: "spinner" }
        }
    }
}
