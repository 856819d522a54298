//! Record store adapter: the seam between the engine and whatever medium
//! holds the shared tables.
//!
//! The engine only ever reads a whole table or appends one row. There is
//! no update and no delete; every view is derived by re-reading.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use thiserror::Error;

use crate::constants::{DIRECTORY_COLUMNS, DIRECTORY_TABLE, MESSAGES_TABLE, MESSAGE_COLUMNS};

/// One record: cell values in the column order of its table.
pub type Row = Vec<String>;

/// The two logical tables every backend provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Participant directory.
    Directory,
    /// Append-only message log.
    Messages,
}

impl Table {
    /// Logical worksheet name in the shared medium.
    pub fn name(self) -> &'static str {
        match self {
            Table::Directory => DIRECTORY_TABLE,
            Table::Messages => MESSAGES_TABLE,
        }
    }

    /// Fixed column order for rows of this table.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Directory => &DIRECTORY_COLUMNS,
            Table::Messages => &MESSAGE_COLUMNS,
        }
    }
}

/// Errors surfaced by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("row has {got} cells, table {table:?} expects {want}")]
    Shape {
        table: &'static str,
        got: usize,
        want: usize,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only tabular storage shared between sessions.
///
/// `read` returns a full snapshot of one table, rows already in that
/// table's column order. `append` adds one row at the end. Backends are
/// called from the sync worker's thread only, but must be shareable so
/// several sessions can sit on one store.
pub trait TableStore: Send + Sync {
    fn read(&self, table: Table) -> Result<Vec<Row>, StoreError>;
    fn append(&self, table: Table, row: Row) -> Result<(), StoreError>;
}

pub(crate) fn check_shape(table: Table, row: &Row) -> Result<(), StoreError> {
    let want = table.columns().len();
    if row.len() != want {
        return Err(StoreError::Shape {
            table: table.name(),
            got: row.len(),
            want,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_match_the_shared_medium() {
        assert_eq!(Table::Directory.name(), "Users");
        assert_eq!(Table::Messages.name(), "ChatData");
    }

    #[test]
    fn column_orders_are_fixed() {
        assert_eq!(Table::Directory.columns(), ["User Name", "Phone Number"]);
        assert_eq!(
            Table::Messages.columns(),
            [
                "timestamp",
                "sender_num",
                "receiver_num",
                "sender_name",
                "message_text"
            ]
        );
    }
}
