//! # User-facing account models
//!
//! The API exposes users in two shapes: the compact [`Author`] embedded in
//! posts and comments, and the fuller record echoed back by registration.
//! Neither is managed client-side — accounts live entirely on the server.
//!
//! [`TokenPair`] is the login response: a JWT access/refresh pair the
//! client persists verbatim (see `store`). The tokens are opaque; the
//! client never decodes their claims.

use serde::{Deserialize, Serialize};

/// Compact user projection embedded in posts and comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Author {
    /// "First Last" when the profile has names, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// JWT pair returned by `POST /auth/login/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Payload for `POST /auth/register/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl NewUser {
    /// Mirror of the server's required-field checks, run before any
    /// request is made so empty submissions never leave the client.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("Username is required");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err("A valid email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        Ok(())
    }
}

/// Response body of a successful registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub message: String,
    pub user: RegisteredUserInfo,
}

/// The created account as echoed back by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let author = Author {
            id: 1,
            username: "jdoe".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        };
        assert_eq!(author.display_name(), "Jane Doe");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let author = Author {
            id: 1,
            username: "jdoe".into(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(author.display_name(), "jdoe");
    }

    #[test]
    fn test_validate_rejects_blank_username() {
        let user = NewUser {
            username: "   ".into(),
            email: "a@b.c".into(),
            password: "secret".into(),
            ..Default::default()
        };
        assert_eq!(user.validate(), Err("Username is required"));
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let user = NewUser {
            username: "jdoe".into(),
            email: "not-an-email".into(),
            password: "secret".into(),
            ..Default::default()
        };
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_password() {
        let user = NewUser {
            username: "jdoe".into(),
            email: "a@b.c".into(),
            password: String::new(),
            ..Default::default()
        };
        assert_eq!(user.validate(), Err("Password is required"));
    }

    #[test]
    fn test_validate_accepts_complete_user() {
        let user = NewUser {
            username: "jdoe".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
        };
        assert!(user.validate().is_ok());
    }
}
