//! Session
//!
//! In-memory user record created by a login or signup attempt. Nothing is
//! checked against a credential store: any non-empty input is accepted.

use serde::Serialize;

use super::error::AuthError;

/// The signed-in visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub email: String,
    pub name: Option<String>,
}

impl Session {
    /// Name to greet the visitor with
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Accept a login when both fields are filled in
pub fn login(email: &str, password: &str) -> Result<Session, AuthError> {
    let missing = missing_fields(&[("email", email), ("password", password)]);
    if !missing.is_empty() {
        return Err(AuthError { missing });
    }

    Ok(Session {
        email: email.trim().to_string(),
        name: None,
    })
}

/// Accept a signup when name, email and password are filled in
pub fn signup(full_name: &str, email: &str, password: &str) -> Result<Session, AuthError> {
    let missing = missing_fields(&[
        ("full_name", full_name),
        ("email", email),
        ("password", password),
    ]);
    if !missing.is_empty() {
        return Err(AuthError { missing });
    }

    Ok(Session {
        email: email.trim().to_string(),
        name: Some(full_name.trim().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_accepts_any_filled_fields() {
        let session = login("ada@example.com", "x").unwrap();
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.display_name(), "ada@example.com");
    }

    #[test]
    fn test_login_rejects_blank_fields() {
        let err = login("", "secret").unwrap_err();
        assert_eq!(err.missing, vec!["email"]);

        let err = login("a@b.c", "   ").unwrap_err();
        assert_eq!(err.missing, vec!["password"]);
    }

    #[test]
    fn test_signup_keeps_name() {
        let session = signup("Ada Lovelace", "ada@example.com", "pw").unwrap();
        assert_eq!(session.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_signup_reports_every_missing_field() {
        let err = signup("", "", "").unwrap_err();
        assert_eq!(err.missing, vec!["full_name", "email", "password"]);
    }
}
