//! Session
//!
//! Reads the signed-in user from persisted storage and decides whether the
//! dashboard may load.

/// Display name; its presence marks a signed-in user
pub const USERNAME_KEY: &str = "loggedInUser";
pub const USER_ID_KEY: &str = "userId";
pub const TOKEN_KEY: &str = "token";

/// Key-value storage holding the session (browser `localStorage` in the app)
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

impl SessionStorage for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.remove_item(key) {
            log::warn!("[SESSION] failed to remove {}: {:?}", key, e);
        }
    }
}

/// The browser's `localStorage`, if available
pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Signed-in user, passed to the dashboard through context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub auth_token: String,
}

impl Session {
    /// `None` when the session marker is missing or empty
    pub fn load(storage: &impl SessionStorage) -> Option<Self> {
        let username = storage.get(USERNAME_KEY).filter(|name| !name.is_empty())?;
        Some(Self {
            user_id: storage.get(USER_ID_KEY).unwrap_or_default(),
            username,
            auth_token: storage.get(TOKEN_KEY).unwrap_or_default(),
        })
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.auth_token)
    }

    /// Forget the token and display name. The user id is left in place.
    pub fn clear(storage: &impl SessionStorage) {
        storage.remove(TOKEN_KEY);
        storage.remove(USERNAME_KEY);
    }
}

/// Outcome of the mount-time session check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    RedirectToLogin,
    Proceed(Session),
}

/// One decision per mount: either navigate away or load the dashboard
pub fn check_session(storage: &impl SessionStorage) -> GateDecision {
    match Session::load(storage) {
        Some(session) => GateDecision::Proceed(session),
        None => GateDecision::RedirectToLogin,
    }
}
