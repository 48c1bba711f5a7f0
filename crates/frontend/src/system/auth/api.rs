use contracts::system::auth::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

use super::session::{signup_user_id, Session};
use crate::shared::api_utils::{execute_json, read_json, ApiClient, ApiError};

/// Login with username and password
///
/// Succeeds only if the response carries a token; the returned session is not
/// persisted yet.
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
    remember_me: bool,
) -> Result<Session, ApiError> {
    let request = LoginRequest {
        username: username.clone(),
        password,
    };
    let response = execute_json(client.post("/auth/login"), &request).await?;
    let body: LoginResponse = read_json(response).await?;
    Session::from_login(body, &username, remember_me)
}

/// Create an account; returns the new user id
pub async fn signup(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<String, ApiError> {
    let request = SignupRequest { username, password };
    let response = execute_json(client.post("/users"), &request).await?;
    let body: SignupResponse = read_json(response).await?;
    signup_user_id(body)
}

pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::InvalidResponse(_) => "Login failed: Invalid response from server.".to_string(),
        other => other.message_or("Invalid username or password."),
    }
}

pub fn signup_error_message(error: &ApiError) -> String {
    error.message_or("Signup failed. Try again.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_messages() {
        assert_eq!(
            login_error_message(&ApiError::InvalidResponse("missing token")),
            "Login failed: Invalid response from server."
        );
        assert_eq!(
            login_error_message(&ApiError::from_status(401, "")),
            "Invalid username or password."
        );
        assert_eq!(
            login_error_message(&ApiError::from_status(401, r#"{"message":"Account locked"}"#)),
            "Account locked"
        );
    }

    #[test]
    fn test_signup_error_messages() {
        assert_eq!(
            signup_error_message(&ApiError::from_status(400, r#"{"message":"Username taken"}"#)),
            "Username taken"
        );
        assert_eq!(
            signup_error_message(&ApiError::InvalidResponse("missing id")),
            "Signup failed. Try again."
        );
    }
}
