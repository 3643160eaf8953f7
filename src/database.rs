use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::items::ItemDefinition;

/// Terminal failures of the load step. Both abort the run; nothing is
/// retried.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database file {0} not found")]
    DatabaseMissing(PathBuf),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("failed to serialize item properties: {0}")]
    Properties(#[from] serde_json::Error),
}

/// Handle on the game's SQLite database. The game owns the schema; this
/// tool only rewrites the `items` table and refuses to create the file.
#[derive(Debug)]
pub struct ItemStore {
    conn: Connection,
}

impl ItemStore {
    /// Open an existing database. Fails up front when the file is missing
    /// so a typoed path never silently creates an empty database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::DatabaseMissing(path.to_path_buf()));
        }

        let conn = Connection::open(path)?;
        log::debug!("Opened item database at {}", path.display());
        Ok(Self { conn })
    }

    /// Replace the full contents of the `items` table with the given
    /// catalog: delete everything, insert one row per entry, commit once.
    /// Idempotent for a fixed catalog.
    pub fn replace_items(&mut self, items: &[ItemDefinition]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;

        let removed = tx.execute("DELETE FROM items", [])?;
        log::debug!("Cleared {} existing item rows", removed);

        {
            let mut stmt = tx.prepare(
                "INSERT INTO items (id, name, description, item_type, properties)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for item in items {
                let properties = item.properties_json()?;
                stmt.execute(params![
                    item.id,
                    item.name,
                    item.description,
                    item.item_type.as_str(),
                    properties,
                ])?;
            }
        }

        tx.commit()?;
        log::info!("Inserted {} item definitions", items.len());
        Ok(items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items_database;
    use tempfile::TempDir;

    fn game_database(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("database.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "CREATE TABLE items (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                item_type TEXT NOT NULL,
                properties TEXT NOT NULL
            )",
            [],
        )
        .unwrap();
        path
    }

    fn row_count(path: &Path) -> i64 {
        let conn = Connection::open(path).unwrap();
        conn.query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
            .unwrap()
    }

    #[test]
    fn replace_items_loads_the_whole_catalog() {
        let dir = TempDir::new().unwrap();
        let path = game_database(&dir);
        let catalog = items_database::get_faction_item_definitions();

        let mut store = ItemStore::open(&path).unwrap();
        let inserted = store.replace_items(&catalog).unwrap();

        assert_eq!(inserted, catalog.len());
        assert_eq!(row_count(&path), catalog.len() as i64);
    }

    #[test]
    fn replace_items_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = game_database(&dir);
        let catalog = items_database::get_faction_item_definitions();

        let mut store = ItemStore::open(&path).unwrap();
        store.replace_items(&catalog).unwrap();
        store.replace_items(&catalog).unwrap();

        assert_eq!(row_count(&path), catalog.len() as i64);
    }

    #[test]
    fn replace_items_overwrites_stale_rows() {
        let dir = TempDir::new().unwrap();
        let path = game_database(&dir);
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute(
                "INSERT INTO items (id, name, description, item_type, properties)
                 VALUES ('stale_item', 'Stale', 'Left over from a previous design.', 'Tool', '{}')",
                [],
            )
            .unwrap();
        }

        let catalog = items_database::get_faction_item_definitions();
        let mut store = ItemStore::open(&path).unwrap();
        store.replace_items(&catalog).unwrap();

        let conn = Connection::open(&path).unwrap();
        let stale: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM items WHERE id = 'stale_item'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stale, 0);
        assert_eq!(row_count(&path), catalog.len() as i64);
    }

    #[test]
    fn stored_properties_are_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = game_database(&dir);
        let catalog = items_database::get_faction_item_definitions();

        let mut store = ItemStore::open(&path).unwrap();
        store.replace_items(&catalog).unwrap();

        let conn = Connection::open(&path).unwrap();
        let properties: String = conn
            .query_row(
                "SELECT properties FROM items WHERE id = 'council_scholars_circlet'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&properties).unwrap();
        assert_eq!(doc["rarity"], "Rare");
        assert_eq!(doc["bonuses"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn open_fails_when_database_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.db");

        let err = ItemStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::DatabaseMissing(_)));
        // Refusing before Connection::open means no empty file appears.
        assert!(!path.exists());
    }
}
