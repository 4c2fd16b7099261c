//! Durable client-side storage for the session token and cached profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the route guard and the session manager read the same cookie key, so
//! this module is the single source of truth for "a token is present". The
//! token lives in `document.cookie`; the last-known profile is cached in
//! `localStorage` so a reload can restore the session optimistically before
//! the profile endpoint is consulted.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort browser-only behavior; SSR paths safely no-op.
//! Token presence is never verified here, that is the backend's job on every
//! authenticated request.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::UserProfile;

/// Cookie key holding the opaque session token.
pub const TOKEN_COOKIE: &str = "hr_session_token";

/// `localStorage` key holding the cached profile JSON.
#[cfg(feature = "hydrate")]
const USER_CACHE_KEY: &str = "hr_console_user";

/// Storage contract for session credentials.
///
/// `save`/`read`/`clear` manage the token; the profile-cache pair carries
/// the minimal user snapshot restored on reload. Implementations perform no
/// network calls and no side effects beyond storage I/O.
pub trait CredentialStore {
    fn save(&self, token: &str, ttl_secs: u32);
    fn read(&self) -> Option<String>;
    /// Removes the token and the cached profile.
    fn clear(&self);
    fn cache_user(&self, user: &UserProfile);
    fn cached_user(&self) -> Option<UserProfile>;
}

impl<S: CredentialStore> CredentialStore for &S {
    fn save(&self, token: &str, ttl_secs: u32) {
        (*self).save(token, ttl_secs);
    }

    fn read(&self) -> Option<String> {
        (*self).read()
    }

    fn clear(&self) {
        (*self).clear();
    }

    fn cache_user(&self, user: &UserProfile) {
        (*self).cache_user(user);
    }

    fn cached_user(&self) -> Option<UserProfile> {
        (*self).cached_user()
    }
}

/// Extracts the value of `name` from a raw `Cookie`-style header string.
pub(crate) fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// Serializes a session cookie with a relative expiry.
pub(crate) fn session_cookie(name: &str, value: &str, ttl_secs: u32) -> String {
    format!("{name}={value}; path=/; max-age={ttl_secs}; samesite=lax")
}

/// Serializes a cookie that expires immediately.
pub(crate) fn expired_cookie(name: &str) -> String {
    format!("{name}=; path=/; max-age=0")
}

/// Production [`CredentialStore`] backed by `document.cookie` and
/// `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn save(&self, token: &str, ttl_secs: u32) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(document) = html_document() {
                let _ = document.set_cookie(&session_cookie(TOKEN_COOKIE, token, ttl_secs));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, ttl_secs);
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            cookie_value(&raw, TOKEN_COOKIE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(document) = html_document() {
                let _ = document.set_cookie(&expired_cookie(TOKEN_COOKIE));
            }
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(USER_CACHE_KEY);
            }
        }
    }

    fn cache_user(&self, user: &UserProfile) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            let Ok(raw) = serde_json::to_string(user) else {
                return;
            };
            let _ = storage.set_item(USER_CACHE_KEY, &raw);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    }

    fn cached_user(&self) -> Option<UserProfile> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            let raw = storage.get_item(USER_CACHE_KEY).ok().flatten()?;
            serde_json::from_str(&raw).ok()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
