use tracing::warn;

use crate::constants::DIRECTORY_COLUMNS;
use crate::models::Handle;
use crate::store::Row;

/// A registered chat participant: one directory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Display name. Not unique; collisions between participants are legal.
    pub name: String,
    /// Unique identifier within the directory.
    pub handle: Handle,
}

impl Participant {
    /// Parse a directory row.
    ///
    /// Returns `None` for filler rows (every cell blank) and for rows
    /// without a usable name and handle.
    pub fn from_row(row: &Row) -> Option<Self> {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            return None;
        }
        if row.len() != DIRECTORY_COLUMNS.len() {
            return None;
        }
        let name = row[0].trim();
        if name.is_empty() {
            return None;
        }
        let handle = Handle::parse(&row[1])?;
        Some(Self {
            name: name.to_string(),
            handle,
        })
    }

    pub fn to_row(&self) -> Row {
        vec![self.name.clone(), self.handle.to_string()]
    }
}

/// Parse a directory snapshot.
///
/// Filler rows are skipped silently; malformed rows are skipped with a
/// warning. The shared medium is hand-editable, so neither may poison the
/// whole view.
pub fn parse_directory(rows: &[Row]) -> Vec<Participant> {
    let mut directory = Vec::with_capacity(rows.len());
    for row in rows {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        match Participant::from_row(row) {
            Some(participant) => directory.push(participant),
            None => warn!("skipping malformed directory row: {:?}", row),
        }
    }
    directory
}
