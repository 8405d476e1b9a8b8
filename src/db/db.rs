use crate::libs::error::{Result, TodoError};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// How long a write waits on another process holding the database lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// The single storage connection used by one invocation.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> Result<Db> {
        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(path).map_err(TodoError::Connection)?;
        Self::prepare(conn)
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory().map_err(TodoError::Connection)?;
        Self::prepare(conn)
    }

    fn prepare(conn: Connection) -> Result<Db> {
        conn.busy_timeout(BUSY_TIMEOUT).map_err(TodoError::Connection)?;
        Ok(Db { conn })
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        debug!("closing database");
        self.conn.close().map_err(|(_, err)| TodoError::Storage(err))
    }
}
