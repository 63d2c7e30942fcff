use std::sync::Arc;

use shared_types::{AuthResponse, AuthUser, LoginRequest, ProfileRecord, Role, SignupRequest};
use tokio::sync::watch;

use crate::error::ConsoleError;
use crate::service::AuthService;

/// Who is signed in. Only exists while a credential is held.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    /// `None` when the service sent a role this console does not know.
    pub role: Option<Role>,
    credential: String,
}

impl Identity {
    fn from_user(user: &AuthUser, credential: String) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role(),
            credential,
        }
    }
}

/// Process-wide record of the current user and auth-flow status.
///
/// `is_authenticated()` holds exactly when an [`Identity`] (and with it the
/// credential) is present, so a role can never outlive a logout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    identity: Option<Identity>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session while a stored credential is still being checked.
    pub fn restoring() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn authenticated(user: &AuthUser, credential: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity::from_user(user, credential.into())),
            is_loading: false,
            last_error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().and_then(|i| i.role)
    }

    pub fn credential(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.credential.as_str())
    }
}

/// Owner of the [`Session`]. Cheap to clone; every clone shares one state.
///
/// Observers call [`SessionStore::subscribe`] and are woken on every change.
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Session::anonymous())
    }
}

impl SessionStore {
    pub fn new(initial: Session) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    fn update(&self, f: impl FnOnce(&mut Session)) {
        self.tx.send_modify(f);
    }

    /// Install a credential recovered from storage.
    pub fn restore(&self, user: &AuthUser, credential: impl Into<String>) {
        tracing::info!(user_id = %user.id, "session restored");
        let session = Session::authenticated(user, credential);
        self.update(|s| *s = session);
    }

    /// Mark the restore attempt as finished with nothing to restore.
    pub fn finish_restore(&self) {
        self.update(|s| s.is_loading = false);
    }

    /// Drop the session because the service rejected the credential.
    pub fn expire(&self) {
        tracing::warn!("credential rejected, clearing session");
        self.update(|s| *s = Session::anonymous());
    }

    pub fn clear_error(&self) {
        self.update(|s| s.last_error = None);
    }

    fn begin_auth(&self) {
        self.update(|s| {
            s.is_loading = true;
            s.last_error = None;
        });
    }

    fn finish_auth(
        &self,
        result: Result<AuthResponse, shared_types::AppError>,
        fallback: &str,
    ) -> Result<AuthUser, ConsoleError> {
        match result {
            Ok(resp) => {
                tracing::info!(user_id = %resp.user.id, role = %resp.user.role_name, "signed in");
                let session = Session::authenticated(&resp.user, resp.token);
                self.update(|s| *s = session);
                Ok(resp.user)
            }
            Err(e) => {
                let message = e.message_or(fallback);
                tracing::warn!(error = %e, "authentication failed");
                self.update(|s| {
                    *s = Session::anonymous();
                    s.last_error = Some(message.clone());
                });
                Err(ConsoleError::Remote(message))
            }
        }
    }

    pub async fn login<A: AuthService + ?Sized>(
        &self,
        auth: &A,
        request: LoginRequest,
    ) -> Result<AuthUser, ConsoleError> {
        self.begin_auth();
        let result = auth.login(request).await;
        self.finish_auth(result, "Login failed")
    }

    pub async fn signup<A: AuthService + ?Sized>(
        &self,
        auth: &A,
        request: SignupRequest,
    ) -> Result<AuthUser, ConsoleError> {
        self.begin_auth();
        let result = auth.signup(request).await;
        self.finish_auth(result, "Registration failed")
    }

    /// Sign out. Local state is cleared even when the remote call fails.
    pub async fn logout<A: AuthService + ?Sized>(&self, auth: &A) {
        if let Err(e) = auth.logout().await {
            tracing::warn!(error = %e, "logout request failed, clearing session anyway");
        }
        tracing::info!("signed out");
        self.update(|s| *s = Session::anonymous());
    }

    /// Re-read the profile of the signed-in account and refresh the held identity.
    pub async fn refresh_profile<A: AuthService + ?Sized>(
        &self,
        auth: &A,
    ) -> Result<ProfileRecord, ConsoleError> {
        if !self.snapshot().is_authenticated() {
            return Err(ConsoleError::Auth);
        }
        match auth.get_profile().await {
            Ok(profile) => {
                let role = Role::parse(&profile.role_name);
                let email = profile.email.clone();
                self.update(|s| {
                    if let Some(identity) = s.identity.as_mut() {
                        identity.email = email;
                        identity.role = role;
                    }
                });
                Ok(profile)
            }
            Err(e) if e.is_auth_failure() => {
                self.expire();
                Err(ConsoleError::Auth)
            }
            Err(e) => Err(ConsoleError::Remote(e.message_or("Failed to load profile"))),
        }
    }
}
