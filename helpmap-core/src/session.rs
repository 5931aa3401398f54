//! Logged-in user as remembered by the browser.

use crate::api::types::{AuthSession, RecordId};
use crate::storage::KeyValueStore;

pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "userRole";
pub const USER_ID_KEY: &str = "userId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRole {
    Volunteer,
    Help,
    Other(String),
}

impl UserRole {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "volunteer" => Self::Volunteer,
            "help" => Self::Help,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Help => "help",
            Self::Other(raw) => raw,
        }
    }

    /// Human label shown next to the username; unknown roles have none.
    #[must_use]
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::Volunteer => Some("Volunteer"),
            Self::Help => Some("In need"),
            Self::Other(_) => None,
        }
    }
}

/// Navigation target with its visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

pub const PROFILE_CTA: CallToAction = CallToAction {
    label: "Go to your profile",
    href: "/profile",
};

pub const REGISTER_CTA: CallToAction = CallToAction {
    label: "Register as a volunteer",
    href: "/register",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub username: String,
    pub role: Option<UserRole>,
    pub user_id: Option<RecordId>,
}

impl UserSession {
    /// Read the session; present only when a username is stored.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Option<Self> {
        let username = store.get(USERNAME_KEY).filter(|name| !name.is_empty())?;
        Some(Self {
            username,
            role: store.get(ROLE_KEY).map(|role| UserRole::parse(&role)),
            user_id: store.get(USER_ID_KEY).and_then(|id| id.trim().parse().ok()),
        })
    }

    #[must_use]
    pub fn from_auth(auth: &AuthSession) -> Self {
        Self {
            username: auth.user.username.clone(),
            role: Some(UserRole::parse(&auth.user.role)),
            user_id: Some(auth.user.id),
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(USERNAME_KEY, &self.username);
        match &self.role {
            Some(role) => store.set(ROLE_KEY, role.as_str()),
            None => store.remove(ROLE_KEY),
        }
        match self.user_id {
            Some(id) => store.set(USER_ID_KEY, &id.to_string()),
            None => store.remove(USER_ID_KEY),
        }
    }

    pub fn clear(store: &mut impl KeyValueStore) {
        store.remove(USERNAME_KEY);
        store.remove(ROLE_KEY);
        store.remove(USER_ID_KEY);
    }

    /// Text of the profile link, e.g. `aigerim (Volunteer)`.
    #[must_use]
    pub fn profile_label(&self) -> String {
        let role = self.role.as_ref().and_then(UserRole::label).unwrap_or("");
        format!("{} ({role})", self.username)
    }

    /// Hero button target for this visitor.
    #[must_use]
    pub const fn call_to_action(session: Option<&Self>) -> CallToAction {
        if session.is_some() { PROFILE_CTA } else { REGISTER_CTA }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::User;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_username_means_logged_out() {
        let store = MemoryStore::with_entries([(ROLE_KEY, "volunteer")]);
        assert_eq!(UserSession::load(&store), None);
        assert_eq!(UserSession::call_to_action(None), REGISTER_CTA);
    }

    #[test]
    fn loads_role_label_and_id() {
        let store = MemoryStore::with_entries([
            (USERNAME_KEY, "aigerim"),
            (ROLE_KEY, "help"),
            (USER_ID_KEY, "7"),
        ]);
        let session = UserSession::load(&store).unwrap();
        assert_eq!(session.user_id, Some(7));
        assert_eq!(session.profile_label(), "aigerim (In need)");
        assert_eq!(UserSession::call_to_action(Some(&session)), PROFILE_CTA);
    }

    #[test]
    fn unknown_role_renders_empty_label() {
        let store = MemoryStore::with_entries([(USERNAME_KEY, "sam"), (ROLE_KEY, "admin")]);
        let session = UserSession::load(&store).unwrap();
        assert_eq!(session.profile_label(), "sam ()");
    }

    #[test]
    fn auth_response_round_trips_through_store() {
        let auth = AuthSession {
            user: User {
                id: 3,
                username: "john_doe".into(),
                role: "volunteer".into(),
                created_at: None,
            },
            token: "token_3".into(),
            message: None,
        };
        let mut store = MemoryStore::new();
        UserSession::from_auth(&auth).save(&mut store);
        assert_eq!(store.get(USER_ID_KEY).as_deref(), Some("3"));
        let loaded = UserSession::load(&store).unwrap();
        assert_eq!(loaded.role, Some(UserRole::Volunteer));
        UserSession::clear(&mut store);
        assert!(store.is_empty());
    }
}
