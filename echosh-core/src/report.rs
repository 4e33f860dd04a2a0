// echosh-core/src/report.rs
//! Formatted error reports, routed through the printer.
//!
//! An error-handling scope installs an [`ErrorContext`] (failing line and
//! captured trace) for the current thread; [`report_error`] reads whatever
//! context is active at the moment of invocation and prints an error-colored
//! report. Calling it outside any scope is a defined branch, not a fault: a
//! fixed diagnostic is printed instead.
//!
//! This module is a thin adapter over the printer. It performs no
//! sanitization of its own and introduces no new failure modes.

use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;

use anyhow::Result;

use crate::color::Decoration;
use crate::printer::{print_to, PrintOptions};
use crate::value::Value;

/// Printed when no error-handling scope is active.
pub const NO_ACTIVE_CONTEXT_DIAGNOSTIC: &str = "No active exception to retrieve context from. \
     This function should be called within an error-handling scope.";

thread_local! {
    static ACTIVE_CONTEXT: RefCell<Option<ErrorContext>> = RefCell::new(None);
}

/// The failing line and trace text of an error-handling scope.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub line: u32,
    pub trace: String,
}

impl ErrorContext {
    /// Captures the caller's source line and the current backtrace.
    #[track_caller]
    pub fn capture() -> Self {
        ErrorContext {
            line: Location::caller().line(),
            trace: Backtrace::force_capture().to_string(),
        }
    }

    pub fn new(line: u32, trace: impl Into<String>) -> Self {
        ErrorContext {
            line,
            trace: trace.into(),
        }
    }
}

/// RAII guard that makes an [`ErrorContext`] the calling thread's active
/// context for as long as it lives. Nested scopes restore the outer context
/// when dropped.
#[derive(Debug)]
pub struct ErrorScope {
    previous: Option<ErrorContext>,
}

impl ErrorScope {
    pub fn enter(context: ErrorContext) -> Self {
        let previous = ACTIVE_CONTEXT.with(|slot| slot.borrow_mut().replace(context));
        ErrorScope { previous }
    }

    /// The context active on this thread, if any.
    pub fn current() -> Option<ErrorContext> {
        ACTIVE_CONTEXT.with(|slot| slot.borrow().clone())
    }
}

impl Drop for ErrorScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        ACTIVE_CONTEXT.with(|slot| *slot.borrow_mut() = previous);
    }
}

/// Prints an error-colored report for `error` to standard output, using the
/// thread's active error context when one exists.
///
/// With a log path, the color-free report is also appended to the rotating
/// log file; filesystem faults from that append propagate.
pub fn report_error<E>(
    error: &E,
    file_path: Option<&Path>,
    file_lines_limit: usize,
) -> Result<()>
where
    E: fmt::Display + ?Sized,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report_error_to(&mut out, error, file_path, file_lines_limit)
}

/// Sink-generic form of [`report_error`].
pub fn report_error_to<W, E>(
    out: &mut W,
    error: &E,
    file_path: Option<&Path>,
    file_lines_limit: usize,
) -> Result<()>
where
    W: Write,
    E: fmt::Display + ?Sized,
{
    let message = match ErrorScope::current() {
        Some(context) => format!(
            "Line #: {} causes the error. Error message: {}\nTraceback:\n{}",
            context.line, error, context.trace
        ),
        None => NO_ACTIVE_CONTEXT_DIAGNOSTIC.to_string(),
    };
    let options = PrintOptions {
        decoration: Decoration {
            error: true,
            ..Decoration::default()
        },
        file_path: file_path.map(Path::to_path_buf),
        file_lines_limit,
        ..PrintOptions::default()
    };
    print_to(out, Value::Text(message), &options)
}
