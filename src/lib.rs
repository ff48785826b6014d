// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{
    config,
    email,
    utils,
};

// Re-export commonly used types
pub use modules::config::GmailCredentials;

// Constants
pub const CONFIG_FILE_NAME: &str = ".gmail-config";
pub const GMAIL_USER_KEY: &str = "GMAIL_USER";
pub const GMAIL_APP_PASSWORD_KEY: &str = "GMAIL_APP_PASSWORD";
pub const GMAIL_SMTP_HOST: &str = "smtp.gmail.com";
pub const GMAIL_SMTP_PORT: u16 = 587;
pub const SMTP_TIMEOUT_SECS: u64 = 10;
