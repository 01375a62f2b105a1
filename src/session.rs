use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Supplies the acting user's identity to the data services.
///
/// Absence of a signed-in user is a valid, representable state, not an
/// error.
pub trait Session: Send + Sync {
    /// Opaque identifier of the acting user, if any
    fn current_user_id(&self) -> Option<String>;
}

/// Profile and session flags for the signed-in user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Option<String>,
    pub user_name: String,
    pub email: String,
    pub member_since: String,
    pub avatar: String,
    pub two_factor_enabled: bool,
}

/// Thin client-side store holding the current user's profile.
///
/// State sits behind a synchronous lock; it never crosses an await point.
#[derive(Debug, Default)]
pub struct ProfileStore {
    state: RwLock<Profile>,
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            state: RwLock::new(profile),
        }
    }

    /// Signed-out store; `current_user_id` reports `None`
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Current profile snapshot
    pub fn snapshot(&self) -> Profile {
        self.state.read().expect("profile lock poisoned").clone()
    }

    pub fn sign_in(&self, user_id: impl Into<String>) {
        self.state.write().expect("profile lock poisoned").user_id = Some(user_id.into());
    }

    pub fn sign_out(&self) {
        self.state.write().expect("profile lock poisoned").user_id = None;
    }

    /// Flip the two-factor flag and return the new value
    pub fn toggle_two_factor(&self) -> bool {
        let mut state = self.state.write().expect("profile lock poisoned");
        state.two_factor_enabled = !state.two_factor_enabled;
        state.two_factor_enabled
    }

    pub fn set_user_name(&self, user_name: impl Into<String>) {
        self.state.write().expect("profile lock poisoned").user_name = user_name.into();
    }
}

impl Session for ProfileStore {
    fn current_user_id(&self) -> Option<String> {
        self.state
            .read()
            .expect("profile lock poisoned")
            .user_id
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_has_no_user() {
        let store = ProfileStore::anonymous();
        assert_eq!(store.current_user_id(), None);
    }

    #[test]
    fn test_sign_in_and_out() {
        let store = ProfileStore::anonymous();

        store.sign_in("user-1");
        assert_eq!(store.current_user_id(), Some("user-1".to_string()));

        store.sign_out();
        assert_eq!(store.current_user_id(), None);
    }

    #[test]
    fn test_toggle_two_factor() {
        let store = ProfileStore::new(Profile {
            two_factor_enabled: true,
            ..Profile::default()
        });

        assert!(!store.toggle_two_factor());
        assert!(store.toggle_two_factor());
        assert!(store.snapshot().two_factor_enabled);
    }

    #[test]
    fn test_set_user_name() {
        let store = ProfileStore::anonymous();
        store.set_user_name("New Name");
        assert_eq!(store.snapshot().user_name, "New Name");
    }
}
