//! Contact Book - Main entry point
//!
//! Reads commands from stdin, one per line, and prints replies to stdout.
//! Logs go to stderr.

use anyhow::Result;
use contact_book::{
    CommandHandler, Config, ContactBookServiceImpl, ContactDirectory, Reply, SystemClock,
};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only to keep stdout for the session)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        page_size = config.page_size,
        duplicate_policy = %config.duplicate_policy,
        "Starting contact book"
    );

    let directory = ContactDirectory::with_policy(config.duplicate_policy);
    let service = ContactBookServiceImpl::new(
        directory,
        Box::new(SystemClock),
        config.max_suggestions,
    );
    let mut handler = CommandHandler::new(Box::new(service), config.page_size);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "Welcome to the contact book! Type 'help' for commands.")?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match handler.handle_line(&line) {
            Reply::Text(text) => writeln!(stdout, "{}", text)?,
            Reply::Pages(pages) => {
                let total = pages.len();
                for (index, page) in pages.iter().enumerate() {
                    writeln!(stdout, "{}", page)?;
                    if index + 1 == total {
                        break;
                    }

                    write!(stdout, "Press Enter for the next page, 'q' to stop: ")?;
                    stdout.flush()?;
                    match read_line(&mut input)? {
                        Some(answer) if answer.trim().eq_ignore_ascii_case("q") => break,
                        Some(_) => {}
                        None => break,
                    }
                }
            }
            Reply::Exit(farewell) => {
                writeln!(stdout, "{}", farewell)?;
                break;
            }
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}

/// Read one line without its terminator; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
