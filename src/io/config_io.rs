use std::fs;
use std::path::Path;

use crate::io::recovery::log_recovery;
use crate::model::config::AppConfig;

/// Read `config.toml` from the data directory. A missing file means
/// defaults; a malformed file is logged and also means defaults, so config
/// problems must never block the dashboard.
pub fn read_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join("config.toml");
    let Ok(text) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log_recovery(data_dir, "config.toml", &format!("parse failure: {e}"));
            AppConfig::default()
        }
    }
}
