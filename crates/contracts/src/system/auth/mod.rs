use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
///
/// Every field is optional on purpose: a 200 response without a token is
/// still a failed login and must be detectable after decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    pub token: Option<String>,
    pub user: Option<LoginUser>,
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginUser {
    pub id: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupResponse {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Case-insensitive match against a stored role string
    pub fn matches(self, role: &str) -> bool {
        role.trim().eq_ignore_ascii_case(self.as_str())
    }

    pub fn parse(role: &str) -> Option<Role> {
        [Role::Admin, Role::User].into_iter().find(|r| r.matches(role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_token_decodes() {
        let response: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(response.token.is_none());
        assert!(response.user.is_none());
    }

    #[test]
    fn test_login_response_fields() {
        let body = r#"{"token":"abc","user":{"id":"1","username":"root"},"roleName":"Admin"}"#;
        let response: LoginResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token.as_deref(), Some("abc"));
        assert_eq!(response.role_name.as_deref(), Some("Admin"));
        assert_eq!(
            response.user.and_then(|u| u.username).as_deref(),
            Some("root")
        );
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("User"), Some(Role::User));
        assert_eq!(Role::parse("guest"), None);
        assert!(Role::Admin.matches(" admin "));
    }
}
