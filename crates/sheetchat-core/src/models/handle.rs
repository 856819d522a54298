use std::fmt;

use crate::constants::HANDLE_LEN;

/// A participant's unique identifier: exactly ten ASCII digits.
///
/// Handles are stored and compared as strings; leading zeros are
/// significant, so they never pass through an integer type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(String);

impl Handle {
    /// Parse a handle from user or store input.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` unless the
    /// remainder is exactly [`HANDLE_LEN`] ASCII digits.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.len() == HANDLE_LEN && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
