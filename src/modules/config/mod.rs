mod credentials;
mod loader;

pub use credentials::GmailCredentials;
pub use loader::{config_file_path, load_credentials, parse_config_file, ConfigError};
