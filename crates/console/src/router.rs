//! Single source of truth for "which dashboard does this user land on".
//!
//! Both the `/dashboard` alias and the access guard's wrong-role fallback
//! go through [`resolve`], so the two can never disagree.

use shared_types::Role;

use crate::session::Session;

/// Landing destination for a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    AdminHome,
    StudentHome,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::AdminHome => "/admin-dashboard",
            Destination::StudentHome => "/student-dashboard",
        }
    }
}

/// Map a role to its dashboard. Unset or unrecognized roles go to login.
pub fn resolve(role: Option<Role>) -> Destination {
    match role {
        Some(Role::Admin) => Destination::AdminHome,
        Some(Role::Student) => Destination::StudentHome,
        None => Destination::Login,
    }
}

/// Resolve a raw role string as sent by the service.
pub fn resolve_name(role: &str) -> Destination {
    resolve(Role::parse(role))
}

/// Destination of the `/dashboard` alias for the given session.
pub fn dashboard_for(session: &Session) -> Destination {
    if !session.is_authenticated() {
        return Destination::Login;
    }
    resolve(session.role())
}
