pub mod config_io;
pub mod recovery;
pub mod repository;
pub mod state;

use std::path::PathBuf;

/// Resolve the data directory: explicit `-C` flag, then `$UNITRACK_DIR`,
/// then `~/.unitrack`.
pub fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    if let Some(dir) = std::env::var_os("UNITRACK_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".unitrack")
}
