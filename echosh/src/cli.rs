// echosh/src/cli.rs
//! Command-line argument definitions and their mapping onto print options.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use echosh_core::{color_from_name, Decoration, PrefixSpec, PrintOptions, DEFAULT_FILE_LINES_LIMIT};

#[derive(Debug, Parser)]
#[command(name = "echosh", author, version, about)]
pub struct Cli {
    /// The message to print; read from piped stdin when omitted
    pub message: Option<String>,

    /// Parse the message as JSON and pretty-print the structure
    #[arg(long)]
    pub json: bool,

    /// Foreground color for the message text
    #[arg(long, short = 'c')]
    pub color: Option<String>,

    /// Highlight the message: black text on a bright-yellow background
    #[arg(long)]
    pub highlight: bool,

    /// Secondary highlight: bright-yellow text on a black background
    #[arg(long)]
    pub secondary_highlight: bool,

    /// Bracketed label shown before the message
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Color for the bracketed label
    #[arg(long, default_value = "GREEN")]
    pub prefix_color: String,

    /// Child-process tag shown before the message
    #[arg(long)]
    pub child: Option<String>,

    /// Color for the child-process tag
    #[arg(long, default_value = "RED")]
    pub child_color: String,

    /// Append a color-free copy of the output to this file
    #[arg(long, short = 'f', env = "ECHOSH_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Maximum number of lines kept in the log file
    #[arg(long, default_value_t = DEFAULT_FILE_LINES_LIMIT)]
    pub log_lines: usize,

    /// Leave the timestamp out of the prefix
    #[arg(long)]
    pub no_time: bool,

    /// Render the message in the error color
    #[arg(long, short = 'e')]
    pub error: bool,

    /// Enable internal diagnostics on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the flag set into print options, failing fast on an
    /// unrecognized color name before anything is printed.
    pub fn print_options(&self) -> Result<PrintOptions> {
        let text_color = match &self.color {
            Some(name) => Some(color_from_name(name)?),
            None => None,
        };
        Ok(PrintOptions {
            prefix: PrefixSpec {
                show_time: !self.no_time,
                child_process_label: self.child.clone(),
                label_color: color_from_name(&self.child_color)?,
                prefix: self.prefix.clone(),
                prefix_color: color_from_name(&self.prefix_color)?,
            },
            decoration: Decoration {
                text_color,
                highlight: self.highlight,
                secondary_highlight: self.secondary_highlight,
                error: self.error,
            },
            file_path: self.log_file.clone(),
            file_lines_limit: self.log_lines,
        })
    }
}
