use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{
    core::utils::{app_data_dir, ensure_dir},
    currency::CurrencyFormat,
    errors::LedgerError,
    storage::json_backend::{tmp_path, write_atomic},
};

const CONFIG_FILE: &str = "config.json";
const DEFAULT_RECENT_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Snapshot file name, relative to the data directory.
    pub snapshot_file: String,
    /// CSV export file name, relative to the data directory.
    pub export_file: String,
    /// How many entries the "recent transactions" view shows.
    pub recent_count: usize,
    pub currency: CurrencyFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_file: "saldo.json".into(),
            export_file: "transactions.csv".into(),
            recent_count: DEFAULT_RECENT_COUNT,
            currency: CurrencyFormat::default(),
        }
    }
}

/// Loads and saves [`Config`] inside the application data directory.
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, LedgerError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, LedgerError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
            base,
        })
    }

    /// Returns defaults when the file is missing or unreadable.
    pub fn load(&self) -> Config {
        if !self.path.exists() {
            return Config::default();
        }
        let parsed = fs::read_to_string(&self.path)
            .map_err(LedgerError::from)
            .and_then(|data| serde_json::from_str(&data).map_err(LedgerError::from));
        match parsed {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable config");
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// Resolves a configured file name against the data directory.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        self.base.join(file_name)
    }
}
