use std::path::{Path, PathBuf};

use crate::intelligence::reference::INTERACTIONS_FILE;

/// Application-level constants
pub const APP_NAME: &str = "Pillars";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of the dosing calendar window.
pub const WEEK_LENGTH_DAYS: usize = 7;

/// Overrides the resources directory (interaction table, etc.).
pub const RESOURCES_DIR_ENV: &str = "PILLARS_RESOURCES_DIR";

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "pillars=info"
}

/// Resolve the resources directory:
/// `$PILLARS_RESOURCES_DIR`, else `<data dir>/Pillars/resources`, else `./resources`.
pub fn resources_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(RESOURCES_DIR_ENV).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join(APP_NAME).join("resources"))
        .unwrap_or_else(|| PathBuf::from("resources"))
}

/// Location of the interaction table inside a resources directory.
pub fn interactions_path(resources_dir: &Path) -> PathBuf {
    resources_dir.join(INTERACTIONS_FILE)
}
