// used for persistence
use rusqlite::{params, Connection};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::edition::{Edition, EditionFields};
use crate::error::{BibliaError, Result};

/// Where the store keeps its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceMode {
    /// Rows vanish with the process, used by tests and benchmarks.
    InMemory,
    /// Rows live in the given SQLite file, created on first use.
    File(String),
}

// ------------- Persistence -------------
/// The record store. One SQLite connection, shared by every handler; the
/// mutex serializes statements, so each request runs exactly one of them
/// without interleaving.
pub struct Persistor {
    db: Mutex<Connection>,
}

impl Persistor {
    pub fn new(mode: PersistenceMode) -> Result<Self> {
        let connection = match &mode {
            PersistenceMode::InMemory => Connection::open_in_memory()?,
            PersistenceMode::File(path) => Connection::open(path)?,
        };
        let persistor = Persistor { db: Mutex::new(connection) };
        persistor.ensure_schema()?;
        debug!(?mode, "record store ready");
        Ok(persistor)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.db.lock().map_err(|e| BibliaError::Lock(e.to_string()))
    }

    /// Creates the table when absent. Running it again changes nothing.
    pub fn ensure_schema(&self) -> Result<()> {
        self.lock()?.execute_batch(
            "
            create table if not exists biblias (
                id integer primary key autoincrement,
                nome text,
                versao text,
                idioma text
            );
            ",
        )?;
        Ok(())
    }

    /// All editions in insertion order. NULL columns, which only other
    /// tools can write, come back as empty strings.
    pub fn list_all(&self) -> Result<Vec<Edition>> {
        let db = self.lock()?;
        let mut statement = db.prepare_cached(
            "
            select id, nome, versao, idioma
                from biblias
                order by id
            ",
        )?;
        let rows = statement.query_map([], |row| {
            Ok(Edition {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                version: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                language: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            })
        })?;
        let mut editions = Vec::new();
        for edition in rows {
            editions.push(edition?);
        }
        Ok(editions)
    }

    /// Appends a row and returns the id the store assigned to it.
    pub fn insert(&self, fields: &EditionFields) -> Result<i64> {
        let db = self.lock()?;
        db.prepare_cached(
            "
            insert into biblias (
                nome,
                versao,
                idioma
            ) values (?, ?, ?)
            ",
        )?
        .execute(params![fields.name, fields.version, fields.language])?;
        let id = db.last_insert_rowid();
        debug!(id, "edition inserted");
        Ok(id)
    }

    /// Overwrites the mutable fields of row `id`. Returns the number of rows
    /// touched, which is zero when no such row exists.
    pub fn update(&self, id: i64, fields: &EditionFields) -> Result<usize> {
        let affected = self
            .lock()?
            .prepare_cached(
                "
                update biblias
                    set nome = ?, versao = ?, idioma = ?
                    where id = ?
                ",
            )?
            .execute(params![fields.name, fields.version, fields.language, id])?;
        debug!(id, affected, "edition updated");
        Ok(affected)
    }

    /// Deletes row `id`. Returns the number of rows removed, zero or one.
    pub fn remove(&self, id: i64) -> Result<usize> {
        let affected = self
            .lock()?
            .prepare_cached("delete from biblias where id = ?")?
            .execute(params![id])?;
        debug!(id, affected, "edition removed");
        Ok(affected)
    }
}
