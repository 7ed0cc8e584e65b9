//! Connection factory
//!
//! Every store operation borrows a fresh connection through
//! [`Database::with_connection`] and drops it before returning, whether the
//! operation succeeded or not. In-memory databases are opened as named
//! shared-cache URIs so those short-lived connections all see the same data;
//! an anchor connection keeps the in-memory database alive until `close()`.

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use rusqlite::Connection;

use super::schema;
use crate::{Error, Result};

static NEXT_MEMORY_DB: AtomicU64 = AtomicU64::new(1);

/// Handle to an SQLite database with the reviewdb schema applied.
pub struct Database {
    target: PathBuf,
    anchor: RefCell<Option<Connection>>,
    closed: Cell<bool>,
}

impl Database {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        Self::initialize(path.to_path_buf(), false)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let n = NEXT_MEMORY_DB.fetch_add(1, Ordering::Relaxed);
        let uri = format!(
            "file:reviewdb-mem-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            n
        );
        Self::initialize(PathBuf::from(uri), true)
    }

    fn initialize(target: PathBuf, keep_anchor: bool) -> Result<Self> {
        let conn = Connection::open(&target)?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        tracing::info!("Opened database {}", target.display());

        Ok(Self {
            target,
            anchor: RefCell::new(keep_anchor.then_some(conn)),
            closed: Cell::new(false),
        })
    }

    /// Run `f` on a connection acquired for this call only.
    ///
    /// The connection is released when `f` returns, on every path.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        if self.closed.get() {
            tracing::warn!("Rejected access to closed database {}", self.target.display());
            return Err(Error::Closed);
        }
        let conn = Connection::open(&self.target)?;
        f(&conn)
    }

    /// Close the database. Later operations fail with `Error::Closed`.
    ///
    /// Closing an in-memory database discards its contents.
    pub fn close(&self) {
        if self.closed.replace(true) {
            return;
        }
        self.anchor.borrow_mut().take();
        tracing::info!("Closed database {}", self.target.display());
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        self.with_connection(|conn| {
            let restaurants: i64 =
                conn.query_row("SELECT COUNT(*) FROM restaurants", [], |row| row.get(0))?;
            let reviews: i64 = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
            Ok(DbStats {
                restaurants: restaurants as usize,
                reviews: reviews as usize,
            })
        })
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("target", &self.target)
            .field("closed", &self.closed.get())
            .finish()
    }
}

/// Database statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbStats {
    pub restaurants: usize,
    pub reviews: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Restaurants: {}", self.restaurants)?;
        writeln!(f, "  Reviews: {}", self.reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert_restaurant(db: &Database, name: &str) {
        db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO restaurants (name, address, zip, phone, website, email) VALUES (?1, '', '', '', '', '')",
                [name],
            )?;
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_schema_creation() {
        let db = Database::open_in_memory().unwrap();

        let tables: Vec<String> = db
            .with_connection(|conn| {
                let mut stmt =
                    conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")?;
                let names: Vec<String> = stmt
                    .query_map([], |row| row.get(0))?
                    .collect::<rusqlite::Result<_>>()?;
                Ok(names)
            })
            .unwrap();

        assert!(tables.contains(&"restaurants".to_string()));
        assert!(tables.contains(&"reviews".to_string()));
    }

    #[test]
    fn test_in_memory_databases_are_isolated() {
        let first = Database::open_in_memory().unwrap();
        let second = Database::open_in_memory().unwrap();

        insert_restaurant(&first, "Fish Witch");

        assert_eq!(first.stats().unwrap().restaurants, 1);
        assert_eq!(second.stats().unwrap().restaurants, 0);
    }

    #[test]
    fn test_data_survives_between_connections() {
        let db = Database::open_in_memory().unwrap();
        insert_restaurant(&db, "Fish Witch");
        insert_restaurant(&db, "Pok Pok");

        let stats = db.stats().unwrap();
        assert_eq!(stats, DbStats { restaurants: 2, reviews: 0 });
        assert!(stats.to_string().contains("Restaurants: 2"));
    }

    #[test]
    fn test_closed_database_rejects_operations() {
        let db = Database::open_in_memory().unwrap();
        db.close();
        assert!(db.is_closed());

        assert!(matches!(db.stats(), Err(Error::Closed)));
        // closing twice is a no-op
        db.close();
        assert!(matches!(db.stats(), Err(Error::Closed)));
    }

    #[test]
    fn test_closure_error_propagates() {
        let db = Database::open_in_memory().unwrap();
        let result: Result<()> = db.with_connection(|conn| {
            conn.execute("INSERT INTO no_such_table VALUES (1)", [])?;
            Ok(())
        });
        assert!(matches!(result, Err(Error::Storage(_))));

        // a failed operation leaves the database usable
        insert_restaurant(&db, "Fish Witch");
        assert_eq!(db.stats().unwrap().restaurants, 1);
    }

    #[test]
    fn test_file_database_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reviews.db");

        {
            let db = Database::open(&path).unwrap();
            insert_restaurant(&db, "Fish Witch");
        }

        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.stats().unwrap().restaurants, 1);
    }
}
