use shared_types::Role;

use crate::router::{self, Destination};
use crate::session::Session;

/// What a protected view should do for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The session is still settling; render a spinner and re-evaluate later.
    ShowLoading,
    /// Not signed in. `from` is the location to return to after login.
    RedirectToLogin { from: Option<String> },
    /// Signed in with a role this view does not admit.
    RedirectToRoleHome(Destination),
    Render,
}

/// Decide whether a view admitting `allowed_roles` may render.
///
/// An empty `allowed_roles` admits any signed-in user. Pure and cheap; call
/// it again on every session change.
pub fn evaluate(session: &Session, allowed_roles: &[Role]) -> Decision {
    if session.is_loading {
        return Decision::ShowLoading;
    }
    if !session.is_authenticated() {
        return Decision::RedirectToLogin { from: None };
    }
    match session.role() {
        Some(role) if allowed_roles.is_empty() || allowed_roles.contains(&role) => Decision::Render,
        None if allowed_roles.is_empty() => Decision::Render,
        role => Decision::RedirectToRoleHome(router::resolve(role)),
    }
}

/// Like [`evaluate`], remembering the requested location on a login redirect.
pub fn evaluate_at(session: &Session, allowed_roles: &[Role], location: &str) -> Decision {
    match evaluate(session, allowed_roles) {
        Decision::RedirectToLogin { .. } => Decision::RedirectToLogin {
            from: Some(location.to_string()),
        },
        other => other,
    }
}
