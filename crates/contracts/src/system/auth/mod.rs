use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter both email and password.")]
    MissingCredentials,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Any non-empty pair is accepted; there is no credential store
    pub fn authenticate(&self) -> Result<UserInfo, AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(UserInfo::admin(self.email.trim()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub full_name: String,
    pub email: String,
    pub is_admin: bool,
}

impl UserInfo {
    pub const DEFAULT_NAME: &'static str = "Admin User";
    pub const DEFAULT_EMAIL: &'static str = "admin@example.com";

    pub fn admin(email: &str) -> Self {
        Self {
            full_name: Self::DEFAULT_NAME.to_string(),
            email: email.to_string(),
            is_admin: true,
        }
    }

    /// Two-letter avatar text, e.g. "AD" for "Admin User"
    pub fn initials(&self) -> String {
        self.full_name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for UserInfo {
    fn default() -> Self {
        Self::admin(Self::DEFAULT_EMAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credentials_rejected() {
        let cases = [("", "secret"), ("admin@example.com", ""), ("  ", "x")];
        for (email, password) in cases {
            let req = LoginRequest {
                email: email.into(),
                password: password.into(),
            };
            assert_eq!(req.authenticate(), Err(AuthError::MissingCredentials));
        }
    }

    #[test]
    fn test_any_pair_accepted() {
        let req = LoginRequest {
            email: " someone@site.org ".into(),
            password: "1".into(),
        };
        let user = req.authenticate().unwrap();
        assert_eq!(user.email, "someone@site.org");
        assert!(user.is_admin);
    }

    #[test]
    fn test_initials() {
        assert_eq!(UserInfo::default().initials(), "AD");
    }
}
