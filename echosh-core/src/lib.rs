// echosh-core/src/lib.rs
//! # echosh Core Library
//!
//! `echosh-core` converts arbitrary, possibly malformed, possibly deeply
//! nested program data into safely printable, optionally colorized,
//! optionally persisted text, without ever crashing the calling process over
//! an encoding error.
//!
//! Three components compose top-down: the sanitizer recursively repairs
//! invalid text encoding anywhere inside a value graph; the printer
//! serializes, decorates, prefixes, and emits a line to the console and
//! optionally to a bounded newest-first log file; the error reporter routes
//! a formatted report for the active error context through the printer.
//!
//! ## Modules
//!
//! * `value`: The closed `Value` union every pipeline input is expressed in.
//! * `sanitize`: Recursive UTF-8 repair with an explicit clean/degraded outcome.
//! * `color`: Color-name resolution and per-call escape/reset decoration.
//! * `printer`: Line composition, console emission, and log-file routing.
//! * `logfile`: The bounded, newest-first, rewrite-on-append log file.
//! * `report`: Thread-scoped error contexts and formatted error reports.
//! * `errors`: The library's structured error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use echosh_core::{print_to, PrefixSpec, PrintOptions, Value};
//!
//! fn main() -> anyhow::Result<()> {
//!     let options = PrintOptions {
//!         prefix: PrefixSpec { show_time: false, ..PrefixSpec::default() },
//!         ..PrintOptions::default()
//!     };
//!
//!     let mut out = Vec::new();
//!     print_to(&mut out, Value::from("Hello, World!"), &options)?;
//!     assert_eq!(out, b"Hello, World!\n");
//!
//!     // Malformed bytes are repaired, never fatal.
//!     let mut out = Vec::new();
//!     print_to(&mut out, Value::from(&b"bro\xFFken"[..]), &options)?;
//!     assert_eq!(out, b"bro ken\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Encoding faults are absorbed by the sanitizer and reported, never raised.
//! Unknown color names fail fast when resolved. Filesystem faults from the
//! log file propagate as `anyhow::Error` with path context.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod color;
pub mod errors;
pub mod logfile;
pub mod printer;
pub mod report;
pub mod sanitize;
pub mod value;

/// Re-exports the universal pipeline input type.
pub use value::Value;

/// Re-exports the sanitizer entry points and outcome type.
pub use sanitize::{
    repair_bytes, repair_text, sanitize, sanitize_with, try_sanitize, Sanitized,
    DEFAULT_REPLACEMENT, MAX_NESTING_DEPTH,
};

/// Re-exports color-name resolution and the decoration spec.
pub use color::{color_from_name, paint, Decoration};

/// Re-exports the printer surface.
pub use printer::{print, print_to, PrefixSpec, PrintOptions, DEFAULT_FILE_LINES_LIMIT};

/// Re-exports the rotating log-file primitive.
pub use logfile::append_line;

/// Re-exports error reporting and the thread-scoped error context.
pub use report::{
    report_error, report_error_to, ErrorContext, ErrorScope, NO_ACTIVE_CONTEXT_DIAGNOSTIC,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::EchoshError;
