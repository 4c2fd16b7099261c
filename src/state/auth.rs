//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`SessionManager`] owns every transition of [`SessionState`]; the route
//! guard and layout components only ever observe the state through the
//! [`SessionContext`] signal provided at the application root. Operations
//! are last-write-wins on the exposed state; callers must not overlap login
//! attempts for the same session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use leptos::prelude::*;

use crate::net::api::{ApiError, AuthApi, HttpAuthApi, resolve_error_message};
use crate::net::types::{Credentials, LoginData, UserProfile};
use crate::util::credentials::{BrowserCredentials, CredentialStore};

/// Cookie lifetime for a fresh session token.
const SESSION_TTL_SECS: u32 = 7 * 24 * 60 * 60;

/// Authentication state exposed to the UI tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Not yet resolved; layouts render a loading state.
    #[default]
    Unknown,
    Unauthenticated,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SessionState::Unknown)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Login or profile failure with a message fit for the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthError {
    message: String,
}

impl AuthError {
    fn from_api(error: &ApiError) -> Self {
        Self {
            message: resolve_error_message(error),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for AuthError {}

/// Owns the session state and the operations that may change it.
///
/// Generic over the auth endpoint and the credential store so the full
/// lifecycle is exercisable against in-memory doubles.
pub struct SessionManager<A, S> {
    api: A,
    store: S,
    state: SessionState,
}

impl<A: AuthApi, S: CredentialStore> SessionManager<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self::resume(api, store, SessionState::Unknown)
    }

    /// Rebuild a manager around previously observed state.
    pub fn resume(api: A, store: S, state: SessionState) -> Self {
        Self { api, store, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Resolve the initial state from the credential store.
    ///
    /// A present token plus a cached profile authenticates optimistically;
    /// no token resolves to `Unauthenticated`. A token without a cached
    /// profile leaves the state `Unknown` so the caller can follow up with
    /// [`Self::refresh_profile`]. Idempotent.
    pub fn check_auth(&mut self) {
        match self.store.read() {
            Some(_) => {
                if let Some(user) = self.store.cached_user() {
                    self.state = SessionState::Authenticated(user);
                }
            }
            None => self.state = SessionState::Unauthenticated,
        }
    }

    /// Attempt a login. Success persists the token and profile; failure
    /// leaves the session unauthenticated and surfaces the resolved
    /// message. Never retries.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<LoginData, AuthError> {
        match self.api.login(credentials).await {
            Ok(data) => {
                self.store.save(&data.token, SESSION_TTL_SECS);
                self.store.cache_user(&data.user);
                self.state = SessionState::Authenticated(data.user.clone());
                Ok(data)
            }
            Err(error) => {
                self.state = SessionState::Unauthenticated;
                Err(AuthError::from_api(&error))
            }
        }
    }

    /// End the session. The remote call is best-effort; local credentials
    /// are cleared and the state transitions regardless of its outcome.
    pub async fn logout(&mut self) {
        if let Err(_error) = self.api.logout().await {
            #[cfg(feature = "hydrate")]
            log::warn!("logout request failed, clearing session anyway: {_error}");
        }
        self.store.clear();
        self.state = SessionState::Unauthenticated;
    }

    /// Re-fetch the profile for the current token.
    ///
    /// A failure means the cached token cannot be trusted: the session is
    /// logged out before the resolved error is returned. This is the only
    /// operation where a fetch failure forces de-authentication.
    pub async fn refresh_profile(&mut self) -> Result<UserProfile, AuthError> {
        match self.api.fetch_profile().await {
            Ok(user) => {
                self.store.cache_user(&user);
                self.state = SessionState::Authenticated(user.clone());
                Ok(user)
            }
            Err(error) => {
                self.logout().await;
                Err(AuthError::from_api(&error))
            }
        }
    }
}

/// Session signal provided at the application root.
///
/// Operations rebuild a short-lived [`SessionManager`] around the browser
/// collaborators, run it, and publish the resulting state.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
}

impl SessionContext {
    /// Creates the context, registers it with Leptos, and resolves the
    /// initial state from stored credentials.
    pub fn provide() -> Self {
        let context = Self {
            state: RwSignal::new(SessionState::Unknown),
        };
        provide_context(context);
        context.bootstrap();
        context
    }

    fn manager(self) -> SessionManager<HttpAuthApi, BrowserCredentials> {
        SessionManager::resume(
            HttpAuthApi,
            BrowserCredentials,
            self.state.get_untracked(),
        )
    }

    /// Read the current state reactively.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Display name of the signed-in user, if any.
    pub fn display_name(&self) -> Option<String> {
        self.state
            .with(|state| state.user().map(|user| user.display_name.clone()))
    }

    fn bootstrap(self) {
        let mut manager = self.manager();
        manager.check_auth();
        let resolved = manager.into_state();
        self.state.set(resolved.clone());

        // Token present but no cached profile: resolve it remotely. A
        // failure inside refresh_profile already downgrades the session.
        #[cfg(feature = "hydrate")]
        if resolved.is_unknown() && BrowserCredentials.read().is_some() {
            leptos::task::spawn_local(async move {
                let _ = self.refresh_profile().await;
            });
        }
    }

    pub async fn login(self, credentials: &Credentials) -> Result<LoginData, AuthError> {
        let mut manager = self.manager();
        let result = manager.login(credentials).await;
        self.state.set(manager.into_state());
        result
    }

    pub async fn logout(self) {
        let mut manager = self.manager();
        manager.logout().await;
        self.state.set(manager.into_state());
    }

    pub async fn refresh_profile(self) -> Result<UserProfile, AuthError> {
        let mut manager = self.manager();
        let result = manager.refresh_profile().await;
        self.state.set(manager.into_state());
        result
    }
}

/// Returns the session context provided by the application root.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
