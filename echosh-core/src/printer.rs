// echosh-core/src/printer.rs
//! Construction and emission of decorated console output.
//!
//! A print call runs the whole pipeline: sanitize the value, serialize it to
//! text, wrap it per the decoration spec, put the composed prefix in front,
//! write the line to the console, and optionally append a color-free copy to
//! the rotating log file. Encoding faults never raise past this boundary;
//! filesystem faults from the log file are the one class that does.
//!
//! License: MIT OR Apache-2.0

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use owo_colors::AnsiColors;

use crate::color::{paint, Decoration};
use crate::logfile;
use crate::sanitize;
use crate::value::Value;

/// Lines kept in the log file when the caller does not say otherwise.
pub const DEFAULT_FILE_LINES_LIMIT: usize = 10_000;

/// Locale-independent `H:MM AM/PM - MM/DD/YYYY`, no leading zero on the hour.
const TIMESTAMP_FORMAT: &str = "%-I:%M %p - %m/%d/%Y";

/// The optional, ordered leading segments of a printed line.
///
/// Segments always compose in the fixed order timestamp, child-process tag,
/// custom label, joined by single spaces; each is left out entirely when its
/// input is absent or false.
#[derive(Debug, Clone)]
pub struct PrefixSpec {
    pub show_time: bool,
    pub child_process_label: Option<String>,
    pub label_color: AnsiColors,
    pub prefix: Option<String>,
    pub prefix_color: AnsiColors,
}

impl Default for PrefixSpec {
    fn default() -> Self {
        PrefixSpec {
            show_time: true,
            child_process_label: None,
            label_color: AnsiColors::Red,
            prefix: None,
            prefix_color: AnsiColors::Green,
        }
    }
}

impl PrefixSpec {
    /// Renders the composed prefix, including its trailing separator space,
    /// or an empty string when every segment is absent.
    pub fn render(&self, now: DateTime<Local>) -> String {
        let mut segments: Vec<String> = Vec::new();
        if self.show_time {
            let stamp = now.format(TIMESTAMP_FORMAT).to_string();
            segments.push(paint(&format!("[{stamp}]"), AnsiColors::Green));
        }
        if let Some(label) = &self.child_process_label {
            segments.push(paint(&format!("[Child {label} Process]"), self.label_color));
        }
        if let Some(label) = &self.prefix {
            segments.push(paint(&format!("[{label}]"), self.prefix_color));
        }
        if segments.is_empty() {
            return String::new();
        }
        let mut rendered = segments.join(" ");
        rendered.push(' ');
        rendered
    }
}

/// Everything a print call can be configured with.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    pub prefix: PrefixSpec,
    pub decoration: Decoration,
    /// When set, a color-free copy of each printed line is inserted at the
    /// front of this file.
    pub file_path: Option<PathBuf>,
    pub file_lines_limit: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions {
            prefix: PrefixSpec::default(),
            decoration: Decoration::default(),
            file_path: None,
            file_lines_limit: DEFAULT_FILE_LINES_LIMIT,
        }
    }
}

/// Prints `value` to standard output.
///
/// The value is sanitized first, so malformed text can never make this call
/// fail; the console line always ends with exactly one newline. Filesystem
/// faults from the optional log file propagate to the caller.
pub fn print(value: Value, options: &PrintOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_to(&mut out, value, options)
}

/// Prints `value` to an arbitrary byte sink.
///
/// This is the sink-generic core that [`print`] binds to locked stdout.
/// Captured environments (tests, pipes to in-memory buffers) pass their own
/// writer here.
pub fn print_to<W: Write>(out: &mut W, value: Value, options: &PrintOptions) -> Result<()> {
    let sanitized = sanitize::sanitize(value);
    let rendered = render(&sanitized)?;
    let decorated = options.decoration.apply(&rendered);
    let composed = format!("{}{}", options.prefix.render(Local::now()), decorated);

    out.write_all(composed.as_bytes())
        .context("Failed to write to the console stream")?;
    out.write_all(b"\n")
        .context("Failed to write to the console stream")?;
    out.flush().context("Failed to flush the console stream")?;

    if let Some(path) = &options.file_path {
        let plain = strip_ansi_escapes::strip_str(&composed);
        logfile::append_line(path, &plain, options.file_lines_limit)?;
    }
    Ok(())
}

// Structured values render as indented JSON; everything else uses its
// natural text form.
fn render(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Seq(_) | Value::Set(_) | Value::Map(_) => value.to_pretty_json()?,
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Int(number) => number.to_string(),
        Value::Float(number) => number.to_string(),
        Value::Text(text) => text.clone(),
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Value::Opaque(display) => display.clone(),
    })
}
