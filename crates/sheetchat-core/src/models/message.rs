use chrono::Local;
use tracing::warn;

use crate::constants::{MESSAGE_COLUMNS, TIMESTAMP_FORMAT};
use crate::models::Handle;
use crate::store::Row;

/// One entry in the shared message log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Send time as `YYYY-MM-DD HH:MM:SS`, stamped by the sender.
    ///
    /// Kept as the stored string: the format is fixed-width, so
    /// lexicographic order is chronological order.
    pub timestamp: String,
    /// Handle of the sender.
    pub sender: Handle,
    /// Handle of the receiver.
    pub receiver: Handle,
    /// Display name the sender carried at send time.
    pub sender_name: String,
    /// Body as typed.
    pub body: String,
}

impl Message {
    /// Compose a new message stamped with the current local time.
    pub fn compose(sender: Handle, sender_name: &str, receiver: Handle, body: &str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            sender,
            receiver,
            sender_name: sender_name.to_string(),
            body: body.to_string(),
        }
    }

    /// Parse a message log row.
    ///
    /// Returns `None` for filler rows and rows without two valid handles.
    pub fn from_row(row: &Row) -> Option<Self> {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            return None;
        }
        if row.len() != MESSAGE_COLUMNS.len() {
            return None;
        }
        let sender = Handle::parse(&row[1])?;
        let receiver = Handle::parse(&row[2])?;
        Some(Self {
            timestamp: row[0].clone(),
            sender,
            receiver,
            sender_name: row[3].clone(),
            body: row[4].clone(),
        })
    }

    pub fn to_row(&self) -> Row {
        vec![
            self.timestamp.clone(),
            self.sender.to_string(),
            self.receiver.to_string(),
            self.sender_name.clone(),
            self.body.clone(),
        ]
    }

    /// Whether this message belongs to the conversation between `a` and `b`,
    /// in either direction.
    pub fn is_between(&self, a: &Handle, b: &Handle) -> bool {
        (self.sender == *a && self.receiver == *b) || (self.sender == *b && self.receiver == *a)
    }
}

/// Parse a message log snapshot.
///
/// Filler rows are skipped silently; malformed rows are skipped with a
/// warning.
pub fn parse_messages(rows: &[Row]) -> Vec<Message> {
    let mut messages = Vec::with_capacity(rows.len());
    for row in rows {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match Message::from_row(row) {
            Some(message) => messages.push(message),
            None => warn!("skipping malformed message row: {:?}", row),
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(digits: &str) -> Handle {
        Handle::parse(digits).unwrap()
    }

    #[test]
    fn compose_stamps_the_expected_format() {
        let message = Message::compose(handle("1111111111"), "Alice", handle("2222222222"), "hi");
        // 19 chars: "YYYY-MM-DD HH:MM:SS"
        assert_eq!(message.timestamp.len(), 19);
        assert_eq!(message.timestamp.as_bytes()[4], b'-');
        assert_eq!(message.timestamp.as_bytes()[10], b' ');
        assert_eq!(message.timestamp.as_bytes()[13], b':');
        assert_eq!(message.sender_name, "Alice");
        assert_eq!(message.body, "hi");
    }

    #[test]
    fn round_trips_through_a_row() {
        let message = Message {
            timestamp: "2024-05-01 12:00:00".to_string(),
            sender: handle("1111111111"),
            receiver: handle("2222222222"),
            sender_name: "Alice".to_string(),
            body: "hello there".to_string(),
        };
        let parsed = Message::from_row(&message.to_row()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn rejects_blank_and_malformed_rows() {
        let blank: Row = vec![String::new(); 5];
        assert!(Message::from_row(&blank).is_none());

        let bad_sender = vec![
            "2024-05-01 12:00:00".to_string(),
            "abc".to_string(),
            "2222222222".to_string(),
            "Alice".to_string(),
            "hi".to_string(),
        ];
        assert!(Message::from_row(&bad_sender).is_none());

        let short = vec!["2024-05-01 12:00:00".to_string()];
        assert!(Message::from_row(&short).is_none());
    }

    #[test]
    fn is_between_matches_both_directions_only() {
        let a = handle("1111111111");
        let b = handle("2222222222");
        let c = handle("3333333333");
        let message = Message {
            timestamp: "2024-05-01 12:00:00".to_string(),
            sender: a.clone(),
            receiver: b.clone(),
            sender_name: "Alice".to_string(),
            body: "hi".to_string(),
        };
        assert!(message.is_between(&a, &b));
        assert!(message.is_between(&b, &a));
        assert!(!message.is_between(&a, &c));
        assert!(!message.is_between(&b, &c));
    }

    #[test]
    fn parse_messages_skips_junk() {
        let rows = vec![
            vec![
                "2024-05-01 12:00:00".to_string(),
                "1111111111".to_string(),
                "2222222222".to_string(),
                "Alice".to_string(),
                "hi".to_string(),
            ],
            vec![String::new(); 5],
            vec!["garbage".to_string()],
        ];
        let messages = parse_messages(&rows);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body, "hi");
    }
}
