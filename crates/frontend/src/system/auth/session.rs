//! The signed-in session as an explicit value.
//!
//! Loaded once from storage when the app starts, replaced on login and
//! reset on logout. Components read it through `SessionContext` instead of
//! touching storage themselves.

use contracts::system::auth::{LoginResponse, Role, SignupResponse};

use super::storage::{
    KeyValueStore, IS_LOGGED_IN_KEY, REMEMBER_ME_KEY, ROLE_KEY, SESSION_KEYS, TOKEN_KEY,
    USERNAME_KEY,
};
use crate::shared::api_utils::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub is_logged_in: bool,
    pub username: Option<String>,
    pub role: Option<String>,
    pub remember_me: bool,
}

impl Session {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            token: store.get(TOKEN_KEY).filter(|t| !t.is_empty()),
            is_logged_in: store.get(IS_LOGGED_IN_KEY).as_deref() == Some("true"),
            username: store.get(USERNAME_KEY),
            role: store.get(ROLE_KEY),
            remember_me: store.get(REMEMBER_ME_KEY).as_deref() == Some("true"),
        }
    }

    pub fn persist(&self, store: &impl KeyValueStore) {
        Self::clear(store);
        if let Some(token) = &self.token {
            store.set(TOKEN_KEY, token);
        }
        if self.is_logged_in {
            store.set(IS_LOGGED_IN_KEY, "true");
        }
        if let Some(username) = &self.username {
            store.set(USERNAME_KEY, username);
        }
        if let Some(role) = &self.role {
            store.set(ROLE_KEY, role);
        }
        if self.remember_me {
            store.set(REMEMBER_ME_KEY, "true");
        }
    }

    pub fn clear(store: &impl KeyValueStore) {
        for key in SESSION_KEYS {
            store.remove(key);
        }
    }

    /// Builds the session from a login response.
    ///
    /// A response without a token is a failed login even when the HTTP status
    /// was successful.
    pub fn from_login(
        response: LoginResponse,
        username: &str,
        remember_me: bool,
    ) -> Result<Self, ApiError> {
        let token = response
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApiError::InvalidResponse("missing token"))?;
        let username = response
            .user
            .and_then(|u| u.username)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| username.to_string());

        Ok(Self {
            token: Some(token),
            is_logged_in: true,
            username: Some(username),
            role: response.role_name,
            remember_me,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_logged_in && self.token.is_some()
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role.as_deref().is_some_and(|r| role.matches(r))
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.has_role(Role::Admin)
    }
}

/// Signup succeeds only when the server returns the new user's id.
pub fn signup_user_id(response: SignupResponse) -> Result<String, ApiError> {
    response
        .id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::InvalidResponse("missing id"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::storage::memory::MemoryStore;
    use contracts::system::auth::LoginUser;

    fn login_response(token: Option<&str>, role: Option<&str>) -> LoginResponse {
        LoginResponse {
            token: token.map(str::to_string),
            user: Some(LoginUser {
                id: Some("7".to_string()),
                username: Some("mona".to_string()),
            }),
            role_name: role.map(str::to_string),
        }
    }

    #[test]
    fn test_login_without_token_is_rejected() {
        let result = Session::from_login(login_response(None, Some("admin")), "mona", false);
        assert_eq!(result, Err(ApiError::InvalidResponse("missing token")));
    }

    #[test]
    fn test_blank_token_is_rejected() {
        let result = Session::from_login(login_response(Some("  "), None), "mona", false);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_persists_and_reloads() {
        let store = MemoryStore::default();
        let session =
            Session::from_login(login_response(Some("jwt"), Some("Admin")), "typed", true).unwrap();
        session.persist(&store);

        let restored = Session::load(&store);
        assert_eq!(restored, session);
        assert!(restored.is_authenticated());
        assert!(restored.is_admin());
        assert_eq!(restored.username.as_deref(), Some("mona"));
        assert_eq!(store.get(IS_LOGGED_IN_KEY).as_deref(), Some("true"));
        assert_eq!(store.get(ROLE_KEY).as_deref(), Some("Admin"));
    }

    #[test]
    fn test_username_falls_back_to_typed_value() {
        let mut response = login_response(Some("jwt"), Some("user"));
        response.user = None;
        let session = Session::from_login(response, "typed", false).unwrap();
        assert_eq!(session.username.as_deref(), Some("typed"));
        assert!(!session.remember_me);
        assert!(session.has_role(Role::User));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_clear_removes_every_key() {
        let store = MemoryStore::default();
        Session::from_login(login_response(Some("jwt"), Some("admin")), "x", true)
            .unwrap()
            .persist(&store);
        assert_eq!(store.len(), 5);
        Session::clear(&store);
        assert_eq!(store.len(), 0);
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn test_login_flag_without_token_is_not_authenticated() {
        let store = MemoryStore::default();
        store.set(IS_LOGGED_IN_KEY, "true");
        assert!(!Session::load(&store).is_authenticated());
    }

    #[test]
    fn test_signup_requires_id() {
        assert_eq!(
            signup_user_id(SignupResponse {
                id: Some("u-1".to_string())
            })
            .as_deref(),
            Ok("u-1")
        );
        assert!(signup_user_id(SignupResponse { id: None }).is_err());
        assert!(signup_user_id(SignupResponse {
            id: Some(String::new())
        })
        .is_err());
    }
}
