//! Login validation and session identity.

use thiserror::Error;

use crate::models::Handle;

/// Rejected login input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("display name must not be empty")]
    EmptyName,
    #[error("phone number must be exactly 10 digits, got {0:?}")]
    InvalidHandle(String),
}

/// Identity of a logged-in participant.
///
/// Built once at login and handed by value to the components that need
/// it; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Display name entered at login.
    pub name: String,
    /// Validated handle entered at login.
    pub handle: Handle,
}

/// Validate login input and build the session identity.
///
/// The name is trimmed and must be non-empty; the number must parse as a
/// [`Handle`] after trimming.
pub fn login(name: &str, number: &str) -> Result<SessionContext, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    let handle =
        Handle::parse(number).ok_or_else(|| ValidationError::InvalidHandle(number.to_string()))?;
    Ok(SessionContext {
        name: name.to_string(),
        handle,
    })
}

/// Process-local login state.
#[derive(Default)]
pub struct Session {
    current: Option<SessionContext>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, ctx: SessionContext) {
        self.current = Some(ctx);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&SessionContext> {
        self.current.as_ref()
    }

    pub fn current_handle(&self) -> Option<&Handle> {
        self.current.as_ref().map(|ctx| &ctx.handle)
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current.as_ref().map(|ctx| ctx.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_name_and_ten_digits() {
        let ctx = login("Alice", "1234567890").unwrap();
        assert_eq!(ctx.name, "Alice");
        assert_eq!(ctx.handle.as_str(), "1234567890");
    }

    #[test]
    fn trims_both_fields() {
        let ctx = login("  Alice  ", " 1234567890 ").unwrap();
        assert_eq!(ctx.name, "Alice");
        assert_eq!(ctx.handle.as_str(), "1234567890");
    }

    #[test]
    fn rejects_an_empty_name() {
        assert_eq!(login("", "1234567890").unwrap_err(), ValidationError::EmptyName);
        assert_eq!(login("   ", "1234567890").unwrap_err(), ValidationError::EmptyName);
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert_eq!(
            login("Bob", "12345").unwrap_err(),
            ValidationError::InvalidHandle("12345".to_string())
        );
        assert_eq!(
            login("Bob", "123456789a").unwrap_err(),
            ValidationError::InvalidHandle("123456789a".to_string())
        );
    }

    #[test]
    fn session_tracks_login_state() {
        let mut session = Session::new();
        assert!(!session.is_logged_in());
        assert!(session.current_handle().is_none());

        session.login(login("Alice", "1234567890").unwrap());
        assert!(session.is_logged_in());
        assert_eq!(session.current_name(), Some("Alice"));
        assert_eq!(
            session.current_handle().map(Handle::as_str),
            Some("1234567890")
        );

        session.logout();
        assert!(!session.is_logged_in());
        assert!(session.current().is_none());
    }
}
