use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;

use super::credentials::GmailCredentials;
use crate::{CONFIG_FILE_NAME, GMAIL_APP_PASSWORD_KEY, GMAIL_USER_KEY};

/// Custom error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    MissingKey(&'static str),
    IoError(io::Error),
}

// Implement conversion from io::Error to ConfigError
impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

// Implementation of Display trait for ConfigError
impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::MissingKey(key) => {
                write!(f, "Missing or empty config key: {}", key)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

/// Resolve the config file path, adjacent to the executable
pub fn config_file_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
}

/// Parse a KEY=VALUE config file into a map
///
/// Lines are split on the first `=`, so values may themselves contain `=`.
/// Lines without `=` are ignored.
pub fn parse_config_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(ConfigError::IoError(e)),
    };

    let mut values = HashMap::new();
    for line in BufReader::new(file).lines() {
        let line = line?;
        let line = line.trim();

        match line.split_once('=') {
            Some((key, value)) => {
                values.insert(key.to_string(), value.to_string());
            }
            None if line.is_empty() => {}
            None => {
                warn!("Ignoring malformed config line without '='");
            }
        }
    }

    Ok(values)
}

/// Load Gmail credentials, requiring both keys to be present and non-empty
pub fn load_credentials(path: &Path) -> Result<GmailCredentials, ConfigError> {
    let values = parse_config_file(path)?;

    let username = required_value(&values, GMAIL_USER_KEY)?;
    let password = required_value(&values, GMAIL_APP_PASSWORD_KEY)?;

    Ok(GmailCredentials { username, password })
}

// Look up a required key, treating an empty value the same as an absent one
fn required_value(
    values: &HashMap<String, String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    match values.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ConfigError::MissingKey(key)),
    }
}
