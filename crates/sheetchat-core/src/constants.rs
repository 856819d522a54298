//! Shared constants for the sync engine.

use std::time::Duration;

/// How often the refresh loop re-reads the shared store.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Lower bound applied to user-supplied poll intervals so a typo cannot
/// turn the loop into a busy spin against the store.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Number of ASCII digits in a registered handle.
pub const HANDLE_LEN: usize = 10;

/// Timestamp format stamped on every message at send time.
///
/// Fixed-width, so lexicographic order over the stored strings matches
/// chronological order and messages can be sorted without re-parsing.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Logical name of the participant directory table.
pub const DIRECTORY_TABLE: &str = "Users";

/// Logical name of the message log table.
pub const MESSAGES_TABLE: &str = "ChatData";

/// Column order of the participant directory table.
pub const DIRECTORY_COLUMNS: [&str; 2] = ["User Name", "Phone Number"];

/// Column order of the message log table.
pub const MESSAGE_COLUMNS: [&str; 5] = [
    "timestamp",
    "sender_num",
    "receiver_num",
    "sender_name",
    "message_text",
];
