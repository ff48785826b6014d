mod sender;

pub use sender::{build_message, send_email};
