//! In-memory backend.
//!
//! Shared as an `Arc`, several runtimes act as independent sessions over
//! one store, which is how the cross-session tests run.

use parking_lot::Mutex;

use crate::store::{check_shape, Row, StoreError, Table, TableStore};

#[derive(Default)]
pub struct MemoryStore {
    directory: Mutex<Vec<Row>>,
    messages: Mutex<Vec<Row>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, table: Table) -> &Mutex<Vec<Row>> {
        match table {
            Table::Directory => &self.directory,
            Table::Messages => &self.messages,
        }
    }
}

impl TableStore for MemoryStore {
    fn read(&self, table: Table) -> Result<Vec<Row>, StoreError> {
        Ok(self.table(table).lock().clone())
    }

    fn append(&self, table: Table, row: Row) -> Result<(), StoreError> {
        check_shape(table, &row)?;
        self.table(table).lock().push(row);
        Ok(())
    }
}
