pub mod config;
pub mod dataset;
pub mod export;
pub mod glyph;
pub mod hue;
pub mod scale;
pub mod selection;
pub mod session;
pub mod tooltip;
pub mod tween;

pub use config::{Config, Theme};
pub use dataset::{Dataset, Record, RecordId};
pub use hue::Hue;
pub use session::Session;

use std::path::PathBuf;

pub const APP_DIR: &str = "periscope";

/// Directory the app reads its config from and writes its log into.
pub fn data_path(path_name: Option<&str>) -> PathBuf {
    let base = match std::env::var("PERISCOPE_DATA_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR),
    };

    match path_name {
        Some(path_name) => base.join(path_name),
        None => base,
    }
}
