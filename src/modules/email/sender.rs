use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Message, SmtpTransport, Transport};

use crate::config::GmailCredentials;
use crate::utils::logging::log_send_event;
use crate::{GMAIL_SMTP_HOST, GMAIL_SMTP_PORT, SMTP_TIMEOUT_SECS};

/// Build the plain-text message for a single delivery
pub fn build_message(
    from: &str,
    to_email: &str,
    subject: &str,
    body: &str,
) -> Result<Message, String> {
    Message::builder()
        .from(
            from.parse()
                .map_err(|e| format!("Invalid sender address: {}", e))?,
        )
        .to(to_email
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
        .map_err(|e| format!("Failed to build email: {}", e))
}

/// Send one message through Gmail's SMTP submission endpoint
///
/// Strictly sequential: connect, STARTTLS, authenticate, submit, close.
/// There is exactly one delivery attempt; any failure is reported to the
/// caller as a diagnostic string.
pub fn send_email(
    creds: &GmailCredentials,
    to_email: &str,
    subject: &str,
    body: &str,
) -> Result<(), String> {
    if !creds.is_complete() {
        return Err("Gmail credentials incomplete".to_string());
    }

    let email = build_message(&creds.username, to_email, subject, body)?;

    println!("Connecting to Gmail SMTP...");

    // Configure TLS parameters for the STARTTLS upgrade
    let tls_parameters = TlsParameters::builder(GMAIL_SMTP_HOST.to_string())
        .build()
        .map_err(|e| format!("Failed to build TLS parameters: {}", e))?;

    // Set up SMTP transport on the submission port with required STARTTLS
    let mailer = SmtpTransport::relay(GMAIL_SMTP_HOST)
        .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
        .credentials(Credentials::new(
            creds.username.clone(),
            creds.password.clone(),
        ))
        .port(GMAIL_SMTP_PORT)
        .tls(Tls::Required(tls_parameters))
        .timeout(Some(std::time::Duration::from_secs(SMTP_TIMEOUT_SECS)))
        .build();

    println!("Logging in as {}...", creds.username);
    println!("Sending email to {}...", to_email);

    match mailer.send(&email) {
        Ok(_) => {
            log_send_event(to_email, &creds.username, true, None);
            Ok(())
        }
        Err(e) => {
            log_send_event(to_email, &creds.username, false, Some(&e.to_string()));
            Err(format!("Failed to send email: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_message() {
        let message = build_message(
            "sender@gmail.com",
            "recipient@example.com",
            "Test subject",
            "Test body line",
        )
        .unwrap();

        let formatted = String::from_utf8(message.formatted()).unwrap();
        assert!(formatted.contains("From: sender@gmail.com"));
        assert!(formatted.contains("To: recipient@example.com"));
        assert!(formatted.contains("Subject: Test subject"));
        assert!(formatted.contains("Test body line"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let result = build_message(
            "sender@gmail.com",
            "not-an-address",
            "Test subject",
            "Test body",
        );

        let err = result.err().unwrap();
        assert!(err.contains("Invalid recipient address"));
    }

    #[test]
    fn test_build_message_rejects_bad_sender() {
        let result = build_message("not-an-address", "recipient@example.com", "Subject", "Body");

        let err = result.err().unwrap();
        assert!(err.contains("Invalid sender address"));
    }

    #[test]
    fn test_incomplete_credentials_refused_before_any_network() {
        let creds = GmailCredentials {
            username: "user@gmail.com".to_string(),
            password: String::new(),
        };

        let result = send_email(&creds, "recipient@example.com", "Subject", "Body");
        assert_eq!(result.err().unwrap(), "Gmail credentials incomplete");
    }

    #[test]
    /// Test the delivery call path with a mock in place of the SMTP transport
    fn test_mock_email_sending() {
        struct MockSender {
            last_email: Option<(String, String, String)>,
        }

        impl MockSender {
            fn new() -> Self {
                Self { last_email: None }
            }

            fn send_email(&mut self, to: &str, subject: &str, body: &str) -> Result<(), String> {
                self.last_email = Some((to.to_string(), subject.to_string(), body.to_string()));
                Ok(())
            }
        }

        let mut sender = MockSender::new();

        let result = sender.send_email("recipient@example.com", "Hello", "Plain-text body");
        assert!(result.is_ok());

        let (to, subject, body) = sender.last_email.unwrap();
        assert_eq!(to, "recipient@example.com");
        assert_eq!(subject, "Hello");
        assert_eq!(body, "Plain-text body");
    }
}
