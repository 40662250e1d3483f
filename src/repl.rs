//! Interactive session loop.
//!
//! This module provides the read-eval loop that exposes the address book
//! through the line-oriented session protocol. It communicates via
//! stdin/stdout; logs stay on stderr.

use crate::commands::{self, Command};
use crate::config::Config;
use crate::repositories::BookRepository;
use anyhow::Result;
use chrono::Local;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Run an interactive session over the given input and output.
///
/// The book is loaded from the repository up front (a corrupt persisted
/// file is the one fatal error) and saved back exactly once, when the
/// session ends via `close`/`exit` or end of input. Every per-command
/// failure is rendered as a message and the loop continues.
///
/// # Arguments
/// * `repository` - Where the book is loaded from and saved to
/// * `config` - Session settings (birthday window)
/// * `input` / `output` - The session transcript streams
///
/// # Returns
/// An error if loading or saving the book fails, or if the transcript
/// streams fail.
pub fn run<S, R, W>(repository: &S, config: &Config, mut input: R, mut output: W) -> Result<()>
where
    S: BookRepository,
    R: BufRead,
    W: Write,
{
    let mut book = repository.load()?;
    info!("session started with {} record(s)", book.len());

    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        line.clear();
        let eof = input.read_line(&mut line)? == 0;

        let command = if eof {
            // End of input behaves like an explicit exit
            debug!("end of input, closing session");
            Ok(Command::Exit)
        } else {
            Command::parse(&line)
        };

        match command {
            Ok(Command::Exit) => {
                repository.save(&book)?;
                writeln!(output, "Good bye!")?;
                break;
            }
            Ok(command) => {
                let today = Local::now().date_naive();
                match commands::dispatch(command, &mut book, today, config.birthday_window_days) {
                    Ok(reply) => writeln!(output, "{}", reply)?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    info!("session ended with {} record(s)", book.len());
    Ok(())
}
