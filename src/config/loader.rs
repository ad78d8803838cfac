use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::FailmapConfig;
use crate::core::{Error, Result};

/// Config file name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".failmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML document and check that every custom rule converts.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<FailmapConfig, String> {
    let config = toml::from_str::<FailmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    for custom in config.custom_rules() {
        custom.to_rule().map_err(|e| e.to_string())?;
    }

    if let Some(format) = config.output_format() {
        if crate::io::output::OutputFormat::from_config(format).is_none() {
            return Err(format!("Unknown output format '{}'", format));
        }
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FailmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its parents, nearest first, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search upward from the working directory. Never fails: missing or
/// invalid files fall back to defaults.
pub fn load_config() -> FailmapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            FailmapConfig::default()
        }
    }
}

pub fn load_config_from(start: PathBuf) -> FailmapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FailmapConfig::default()
        })
}

/// Load an explicitly named file. Unlike discovery, every problem is an error.
pub fn load_config_from_path(path: &Path) -> Result<FailmapConfig> {
    let contents =
        read_config_file(path).map_err(|e| Error::file_system("Cannot read config file", path, e))?;
    parse_and_validate_config(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
}
