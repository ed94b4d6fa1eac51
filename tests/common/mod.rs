#![allow(dead_code)]

use pocket_ledger::{
    config::ConfigManager, core::ledger_manager::LedgerManager, storage::JsonStorage,
};
use tempfile::TempDir;

pub const SNAPSHOT_FILE: &str = "saldo.json";

/// Creates a manager over an isolated data directory. Keep the returned
/// guard alive for as long as the directory is needed.
pub fn setup_test_env() -> (LedgerManager, ConfigManager, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let config_manager =
        ConfigManager::with_base_dir(temp.path().to_path_buf()).expect("create config manager");
    let manager = open_manager(&config_manager);
    (manager, config_manager, temp)
}

pub fn open_manager(config_manager: &ConfigManager) -> LedgerManager {
    let storage = JsonStorage::new(config_manager.resolve(SNAPSHOT_FILE));
    LedgerManager::open(Box::new(storage))
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
