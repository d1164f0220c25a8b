//! Line-oriented front end for the book core.
//!
//! # Responsibility
//! - Read one JSON request per stdin line and write one JSON response per line.
//! - Keep a tiny health check (`ping`, `--version`) for wiring checks.

mod config;
mod router;

use bookshelf_core::{init_logging, BookHandler, BookService, InMemoryBookRepository};
use config::CliConfig;
use log::{error, info};
use router::Router;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match std::env::args().nth(1).as_deref() {
        Some("ping") => {
            println!("bookshelf_core ping={}", bookshelf_core::ping());
            return ExitCode::SUCCESS;
        }
        Some("--version") => {
            println!("bookshelf_core version={}", bookshelf_core::core_version());
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bookshelf: {err}");
            return ExitCode::from(2);
        }
    };
    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("bookshelf: {err}");
            return ExitCode::from(2);
        }
    }

    match serve(io::stdin().lock(), io::stdout().lock()) {
        Ok(handled) => {
            info!("event=cli_exit module=cli status=ok handled={handled}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error kind={:?}", err.kind());
            eprintln!("bookshelf: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Serves requests until EOF and returns how many lines were handled.
fn serve(input: impl BufRead, mut output: impl Write) -> io::Result<usize> {
    let handler = BookHandler::new(BookService::new(InMemoryBookRepository::new()));
    let mut router = Router::new(handler);
    let mut handled = 0;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = router.handle_line(&line);
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
        handled += 1;
    }

    Ok(handled)
}
