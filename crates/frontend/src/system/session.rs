//! Browser session: the bearer token and the signed-in user's profile.
//!
//! Every read or write of session data goes through [`SessionStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use contracts::system::auth::UserProfile;
use web_sys::window;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Stored bearer token; blank values count as absent
    fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn user(&self) -> Option<UserProfile> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("stored user profile is unreadable: {}", e);
                None
            }
        }
    }

    fn save(&self, token: &str, user: &UserProfile) {
        self.write(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.write(USER_KEY, &json),
            Err(e) => log::error!("failed to store user profile: {}", e),
        }
    }

    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }
}

/// `localStorage`-backed session
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl SessionStore for BrowserSession {
    fn read(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory session for tests
#[derive(Debug, Default)]
pub struct MemorySession {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session.write(TOKEN_KEY, token);
        session
    }
}

impl SessionStore for MemorySession {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: Some(7),
            nombre: "Ana Ruiz".into(),
            usuario: "aruiz".into(),
            id_rol: Some(2),
            rol: None,
            id_subregion: Some(1),
        }
    }

    #[test]
    fn test_save_and_read_back() {
        let session = MemorySession::default();
        session.save("abc.def", &profile());

        assert_eq!(session.token().as_deref(), Some("abc.def"));
        assert_eq!(session.user(), Some(profile()));
    }

    #[test]
    fn test_clear_removes_everything() {
        let session = MemorySession::default();
        session.save("abc.def", &profile());
        session.clear();

        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_blank_token_is_absent() {
        assert_eq!(MemorySession::with_token("   ").token(), None);
    }

    #[test]
    fn test_corrupt_profile_is_ignored() {
        let session = MemorySession::default();
        session.write(USER_KEY, "{not json");
        assert_eq!(session.user(), None);
    }
}
