//! SQLite backend: the database file is the shared medium.
//!
//! Every session opens the same path; an append from one session is
//! visible to the others on their next read.

use std::path::Path;

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::store::{check_shape, Row, StoreError, Table, TableStore};

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open the store at `path`, creating the tables if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref())?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS users (
                user_name    TEXT NOT NULL,
                phone_number TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS chat_data (
                timestamp    TEXT NOT NULL,
                sender_num   TEXT NOT NULL,
                receiver_num TEXT NOT NULL,
                sender_name  TEXT NOT NULL,
                message_text TEXT NOT NULL
            );",
        )?;
        debug!("opened sqlite store at {}", path.as_ref().display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl TableStore for SqliteStore {
    fn read(&self, table: Table) -> Result<Vec<Row>, StoreError> {
        let conn = self.conn.lock();
        // rowid order == insertion order; consumers re-sort by timestamp
        let sql = match table {
            Table::Directory => "SELECT user_name, phone_number FROM users ORDER BY rowid",
            Table::Messages => {
                "SELECT timestamp, sender_num, receiver_num, sender_name, message_text \
                 FROM chat_data ORDER BY rowid"
            }
        };
        let cell_count = table.columns().len();
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map([], |sql_row| {
                let mut cells = Vec::with_capacity(cell_count);
                for index in 0..cell_count {
                    cells.push(sql_row.get::<_, String>(index)?);
                }
                Ok(cells)
            })?
            .collect::<Result<Vec<Row>, rusqlite::Error>>()?;
        Ok(rows)
    }

    fn append(&self, table: Table, row: Row) -> Result<(), StoreError> {
        check_shape(table, &row)?;
        let conn = self.conn.lock();
        match table {
            Table::Directory => {
                conn.execute(
                    "INSERT INTO users (user_name, phone_number) VALUES (?1, ?2)",
                    params![row[0], row[1]],
                )?;
            }
            Table::Messages => {
                conn.execute(
                    "INSERT INTO chat_data \
                     (timestamp, sender_num, receiver_num, sender_name, message_text) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![row[0], row[1], row[2], row[3], row[4]],
                )?;
            }
        }
        Ok(())
    }
}
