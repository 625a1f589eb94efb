use crate::libs::error::EmsResult;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn open(path: &Path) -> EmsResult<Db> {
        let conn = Connection::open(path)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> EmsResult<Db> {
        let conn = Connection::open_in_memory()?;

        Ok(Db { conn })
    }
}
