use crate::storage::Database;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Value of `database` that selects an in-memory database
pub const IN_MEMORY: &str = ":memory:";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ReviewDbConfig {
    /// Database file path, or `:memory:` (the default when unset)
    pub database: Option<String>,
}

impl ReviewDbConfig {
    pub fn in_memory() -> Self {
        Self {
            database: Some(IN_MEMORY.to_string()),
        }
    }

    pub fn with_database(path: impl Into<String>) -> Self {
        Self {
            database: Some(path.into()),
        }
    }

    /// Resolved database file, or `None` for an in-memory database
    pub fn database_path(&self) -> Option<PathBuf> {
        match self.database.as_deref() {
            None | Some(IN_MEMORY) => None,
            Some(path) => Some(PathBuf::from(path)),
        }
    }

    /// Open the database this config points at
    pub fn open_database(&self) -> anyhow::Result<Database> {
        let db = match self.database_path() {
            Some(path) => {
                ensure_db_dir(&path)?;
                Database::open(&path)?
            }
            None => Database::open_in_memory()?,
        };
        Ok(db)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("reviewdb.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<ReviewDbConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: ReviewDbConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &ReviewDbConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
