/// Structure to hold Gmail credentials loaded from the config file
pub struct GmailCredentials {
    // The Gmail address, used both for login and as the sender address
    pub username: String,
    // The app-specific password for SMTP authentication
    pub password: String,
}

impl GmailCredentials {
    // Both fields must be non-empty before an SMTP session is attempted
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }
}
