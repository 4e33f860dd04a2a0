// echosh/src/main.rs
//! echosh entry point.
//!
//! Resolves the message (argument or piped stdin), validates the requested
//! colors, and routes everything through the core printing pipeline.

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Parser;
use echosh::cli::Cli;
use echosh::logger;
use echosh_core::{print, Value};
use is_terminal::IsTerminal;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.verbose {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(Some(log::LevelFilter::Off));
    }

    let value = resolve_message(&args)?;
    let options = args.print_options()?;
    print(value, &options)
}

fn resolve_message(args: &Cli) -> Result<Value> {
    if let Some(message) = &args.message {
        if args.json {
            let parsed: serde_json::Value = serde_json::from_str(message)
                .context("Failed to parse the message as JSON")?;
            return Ok(parsed.into());
        }
        return Ok(Value::from(message.as_str()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No message given and stdin is a terminal; pass a message or pipe input");
    }
    let mut buffer = Vec::new();
    stdin
        .read_to_end(&mut buffer)
        .context("Failed to read the message from stdin")?;

    // A pipe's final newline is the pipe's, not the message's.
    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    if args.json {
        let parsed: serde_json::Value = serde_json::from_slice(&buffer)
            .context("Failed to parse stdin as JSON")?;
        return Ok(parsed.into());
    }
    // Bytes, not text: piped input may be arbitrarily malformed, and the
    // sanitizer owns the repair.
    Ok(Value::from(buffer))
}
