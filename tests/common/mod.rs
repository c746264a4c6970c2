use std::sync::Mutex;

use gasto_core::{config::ConfigManager, core::RecordStore, storage::JsonFileStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated record store and config manager backed by unique directories.
pub fn setup_test_env() -> (RecordStore, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage =
        JsonFileStore::new(Some(base.join("records"))).expect("create json store backend");
    let store = RecordStore::open(Box::new(storage));
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");

    (store, config_manager)
}
