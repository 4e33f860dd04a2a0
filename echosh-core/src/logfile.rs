// echosh-core/src/logfile.rs
//! The bounded, newest-first log file.
//!
//! A log file is nothing more than its path-addressed line sequence: every
//! append re-reads the file, puts the new line(s) in front, trims to the
//! line limit, and rewrites the whole file. There is no cross-call cache, no
//! locking, and no atomic-rename step; concurrent writers to the same path
//! can race and lose updates, and callers needing multi-writer safety must
//! serialize externally.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

/// Inserts `line` at the front of the file at `path`, keeping at most
/// `lines_limit` file-lines.
///
/// The file and its parent directories are created lazily on first write.
/// A `line` containing embedded newlines is preserved literally and counts
/// one file-line per line, so the limit holds at all times. Filesystem
/// faults propagate; losing the log silently would defeat its purpose.
pub fn append_line(path: &Path, line: &str, lines_limit: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create log directory {}", parent.display())
            })?;
        }
    }

    let existing = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to read log file {}", path.display()))
        }
    };

    let mut lines: Vec<&str> = line.split('\n').collect();
    lines.extend(existing.lines());
    lines.truncate(lines_limit);

    let mut contents = lines.join("\n");
    if !lines.is_empty() {
        contents.push('\n');
    }

    fs::write(path, &contents)
        .with_context(|| format!("Failed to write log file {}", path.display()))?;
    debug!("log file {} now holds {} line(s)", path.display(), lines.len());
    Ok(())
}
