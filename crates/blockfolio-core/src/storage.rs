//! Durable settings using redb.
//!
//! The portfolio persists exactly one thing across sessions: the dimension
//! theme. Everything else (grid, progression, toasts, chat position) is
//! session state and dies with the window.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortfolioResult;
use crate::types::Dimension;

const SETTINGS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("settings");
const DIMENSION_KEY: &str = "dimension";

/// Settings store backed by redb.
#[derive(Clone)]
pub struct Settings {
    db: Arc<RwLock<Database>>,
}

impl Settings {
    /// Open (or create) the settings database at `path`, creating parent
    /// directories and the settings table as needed.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SETTINGS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Persist the dimension theme. Written on every change.
    pub fn save_dimension(&self, dimension: Dimension) -> PortfolioResult<()> {
        let data = serde_json::to_vec(&dimension)?;
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SETTINGS_TABLE)?;
            table.insert(DIMENSION_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        tracing::debug!(%dimension, "dimension saved");
        Ok(())
    }

    /// Read the persisted dimension, falling back to the default when the
    /// value is absent, unreadable or unrecognized. Never fails: a broken
    /// settings file must not take the page down.
    pub fn load_dimension(&self) -> Dimension {
        match self.read_dimension() {
            Ok(Some(dimension)) => dimension,
            Ok(None) => Dimension::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read settings, using default dimension");
                Dimension::default()
            }
        }
    }

    fn read_dimension(&self) -> PortfolioResult<Option<Dimension>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SETTINGS_TABLE)?;
        let Some(raw) = table.get(DIMENSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_slice::<Dimension>(raw.value()) {
            Ok(dimension) => Ok(Some(dimension)),
            Err(e) => {
                tracing::warn!(error = %e, "stored dimension is invalid, using default");
                Ok(None)
            }
        }
    }
}
