use clap::error::ErrorKind;
use clap::{Arg, Command}; // Import necessary modules from clap for command-line argument parsing
use std::process;

use send_gmail::config::{config_file_path, load_credentials, ConfigError};
use send_gmail::email::send_email;
use send_gmail::utils::io::is_valid_email;
use send_gmail::utils::logging::initialize_logging;
use send_gmail::{CONFIG_FILE_NAME, GMAIL_APP_PASSWORD_KEY, GMAIL_USER_KEY};

const USAGE: &str = "Usage: send-gmail <to_email> <subject> <body>";

// Define the command-line interface using clap
fn build_cli() -> Command {
    Command::new("send-gmail")
        .about("Send a single plain-text email through Gmail SMTP")
        .arg(
            Arg::new("to_email")
                .help("The recipient email address")
                .required(true),
        )
        .arg(Arg::new("subject").help("The subject line").required(true))
        .arg(
            Arg::new("body")
                .help("The plain-text message body")
                .required(true),
        )
}

// Printed whenever the config file is absent or incomplete
fn print_setup_instructions() {
    println!();
    println!(
        "Create a {} file next to the executable containing:",
        CONFIG_FILE_NAME
    );
    println!();
    println!("  {}=you@gmail.com", GMAIL_USER_KEY);
    println!("  {}=your-app-password", GMAIL_APP_PASSWORD_KEY);
    println!();
    println!("The password must be an App Password generated from Google Account");
    println!("settings, which requires 2-Step Verification to be enabled.");
}

fn print_troubleshooting_hints() {
    println!();
    println!("Common issues:");
    println!("  1. The Gmail App Password may be incorrect");
    println!("  2. 2-Step Verification must be enabled on the Google account");
    println!("  3. Check your internet connection");
}

fn main() {
    // A failed logging setup is reported but never blocks the send
    if let Err(e) = initialize_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(_) => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };

    // All three arguments are required, so the lookups cannot fail
    let to_email = matches.get_one::<String>("to_email").unwrap();
    let subject = matches.get_one::<String>("subject").unwrap();
    let body = matches.get_one::<String>("body").unwrap();

    // Load credentials before anything touches the network
    let config_path = config_file_path();
    let creds = match load_credentials(&config_path) {
        Ok(creds) => creds,
        Err(ConfigError::NotFound(_)) => {
            println!("ERROR: Gmail not configured yet!");
            print_setup_instructions();
            process::exit(1);
        }
        Err(ConfigError::MissingKey(_)) => {
            println!("ERROR: Gmail credentials incomplete!");
            print_setup_instructions();
            process::exit(1);
        }
        Err(e) => {
            println!("ERROR: Failed to read config file: {}", e);
            process::exit(1);
        }
    };

    if !is_valid_email(to_email) {
        println!("ERROR: Invalid recipient address: {}", to_email);
        process::exit(1);
    }

    match send_email(&creds, to_email, subject, body) {
        Ok(()) => {
            println!("Email sent successfully!");
        }
        Err(e) => {
            println!("{}", e);
            print_troubleshooting_hints();
            process::exit(1);
        }
    }
}
