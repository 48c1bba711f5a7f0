//! Client-side checks for the login and signup forms

pub const LOGIN_PASSWORD_MIN: usize = 5;
pub const SIGNUP_PASSWORD_MIN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

pub fn validate_credentials(
    username: &str,
    password: &str,
    password_min: usize,
) -> CredentialErrors {
    let username_error = username
        .trim()
        .is_empty()
        .then(|| "Username is required".to_string());

    let password_error = if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < password_min {
        Some(format!(
            "Password must be at least {} characters",
            password_min
        ))
    } else {
        None
    };

    CredentialErrors {
        username: username_error,
        password: password_error,
    }
}
