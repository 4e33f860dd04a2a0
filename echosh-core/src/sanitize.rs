// echosh-core/src/sanitize.rs
//! Recursive repair of invalid text encoding anywhere inside a value graph.
//!
//! Text enters this library either as `String` (valid UTF-8 by construction,
//! but possibly carrying U+FFFD artifacts from an earlier lossy decode) or as
//! raw `Bytes`. Sanitization guarantees that after it runs, every text-bearing
//! leaf is valid Unicode with the caller's replacement text substituted for
//! each minimal invalid span, and no byte sequence survives into output.
//!
//! The entry points are total: an internal fault is reported through the
//! error-reporting pathway and the original value is handed back unrepaired
//! rather than raised to the caller. The [`Sanitized`] outcome makes that
//! degraded branch explicit instead of hiding it.
//!
//! License: MIT OR APACHE 2.0

use log::warn;

use crate::errors::EchoshError;
use crate::printer::DEFAULT_FILE_LINES_LIMIT;
use crate::report::{self, ErrorContext, ErrorScope};
use crate::value::Value;

/// Replacement text substituted for each invalid span when none is given.
pub const DEFAULT_REPLACEMENT: &str = " ";

/// Deepest value nesting the recursive walk will accept.
pub const MAX_NESTING_DEPTH: usize = 128;

/// What the lossy UTF-8 decoder leaves behind for an undecodable span.
const REPLACEMENT_ARTIFACT: char = '\u{FFFD}';

/// Outcome of a sanitization pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Sanitized {
    /// Every text-bearing leaf was repaired.
    Clean(Value),
    /// Sanitization failed internally; this is the original value, unrepaired.
    Degraded(Value),
}

impl Sanitized {
    pub fn into_value(self) -> Value {
        match self {
            Sanitized::Clean(value) | Sanitized::Degraded(value) => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Sanitized::Degraded(_))
    }
}

/// Sanitizes a value with the default single-space replacement.
///
/// Total function: never fails past its own boundary. See [`try_sanitize`]
/// for the variant that reports whether the pass degraded.
pub fn sanitize(value: Value) -> Value {
    sanitize_with(value, DEFAULT_REPLACEMENT)
}

/// Sanitizes a value, substituting `replacement` for each invalid span.
pub fn sanitize_with(value: Value, replacement: &str) -> Value {
    try_sanitize(value, replacement).into_value()
}

/// Sanitizes a value and exposes the clean/degraded outcome.
///
/// The only internal fault is the nesting-depth guard. When it trips, the
/// fault is reported on the console through the error reporter (error-colored)
/// and the original value comes back as [`Sanitized::Degraded`] so the
/// calling print still produces output.
pub fn try_sanitize(value: Value, replacement: &str) -> Sanitized {
    if nesting_depth(&value) > MAX_NESTING_DEPTH {
        let fault = EchoshError::NestingTooDeep(MAX_NESTING_DEPTH);
        warn!("sanitization degraded, returning the value unrepaired: {fault}");
        let _scope = ErrorScope::enter(ErrorContext::capture());
        // Console reporting is best-effort here; sanitize stays total.
        let _ = report::report_error(&fault, None, DEFAULT_FILE_LINES_LIMIT);
        return Sanitized::Degraded(value);
    }
    Sanitized::Clean(sanitize_value(value, replacement))
}

/// Replaces every U+FFFD artifact in already-valid text.
///
/// A `&str` cannot hold invalid UTF-8, so artifacts of an earlier lossy
/// decode are the only trace an invalid span can leave in text; each one is
/// treated as the minimal invalid span and substituted.
pub fn repair_text(text: &str, replacement: &str) -> String {
    if text.contains(REPLACEMENT_ARTIFACT) {
        text.replace(REPLACEMENT_ARTIFACT, replacement)
    } else {
        text.to_string()
    }
}

/// Decodes raw bytes as UTF-8, substituting `replacement` for each minimal
/// invalid span and preserving every valid span.
pub fn repair_bytes(bytes: &[u8], replacement: &str) -> String {
    repair_text(&String::from_utf8_lossy(bytes), replacement)
}

// Depth is measured iteratively so a pathological graph cannot blow the
// stack before the guard in try_sanitize has a chance to trip.
fn nesting_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(&Value, usize)> = vec![(value, 1)];
    while let Some((node, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        match node {
            Value::Seq(items) | Value::Set(items) => {
                for item in items {
                    pending.push((item, depth + 1));
                }
            }
            Value::Map(entries) => {
                for (_, nested) in entries {
                    pending.push((nested, depth + 1));
                }
            }
            _ => {}
        }
    }
    deepest
}

// Structural recursion over the union. Depth is pre-checked, so the
// recursion here is bounded by MAX_NESTING_DEPTH.
fn sanitize_value(value: Value, replacement: &str) -> Value {
    match value {
        Value::Text(text) => Value::Text(repair_text(&text, replacement)),
        Value::Bytes(bytes) => Value::Text(repair_bytes(&bytes, replacement)),
        Value::Seq(items) => Value::Seq(
            items
                .into_iter()
                .map(|item| sanitize_value(item, replacement))
                .collect(),
        ),
        Value::Set(items) => {
            // Repair may make two elements equal; set semantics coalesce them.
            let mut unique: Vec<Value> = Vec::with_capacity(items.len());
            for item in items {
                let repaired = sanitize_value(item, replacement);
                if !unique.contains(&repaired) {
                    unique.push(repaired);
                }
            }
            Value::Set(unique)
        }
        Value::Map(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, nested)| (key, sanitize_value(nested, replacement)))
                .collect(),
        ),
        // Null, Bool, Int, Float, and Opaque carry no inspectable text.
        passthrough => passthrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_become_repaired_text() {
        let value = Value::from(&b"fo\xFFo"[..]);
        assert_eq!(sanitize(value), Value::from("fo o"));
    }

    #[test]
    fn valid_spans_around_invalid_bytes_are_preserved() {
        let value = Value::from(&b"caf\xC3\xA9 \xF0\x28 ok"[..]);
        // The é decodes; the truncated four-byte lead is one invalid span.
        assert_eq!(sanitize(value), Value::from("café  ( ok"));
    }

    #[test]
    fn artifacts_in_text_use_the_chosen_replacement() {
        let value = Value::from("bad\u{FFFD}span");
        assert_eq!(sanitize_with(value, "_"), Value::from("bad_span"));
    }

    #[test]
    fn recursion_reaches_every_container_kind() {
        let value = Value::map(vec![(
            "outer".to_string(),
            Value::Seq(vec![
                Value::from(&b"\xFF"[..]),
                Value::set(vec![Value::from("x\u{FFFD}")]),
            ]),
        )]);
        let expected = Value::map(vec![(
            "outer".to_string(),
            Value::Seq(vec![
                Value::from(" "),
                Value::Set(vec![Value::from("x ")]),
            ]),
        )]);
        assert_eq!(sanitize(value), expected);
    }

    #[test]
    fn set_elements_that_repair_equal_coalesce() {
        let value = Value::set(vec![Value::from("a\u{FFFD}"), Value::from("a ")]);
        let Value::Set(items) = sanitize(value) else {
            panic!("expected a set");
        };
        assert_eq!(items, vec![Value::from("a ")]);
    }

    #[test]
    fn scalars_and_opaque_pass_through() {
        assert_eq!(sanitize(Value::Null), Value::Null);
        assert_eq!(sanitize(Value::from(false)), Value::from(false));
        assert_eq!(sanitize(Value::from(42i64)), Value::from(42i64));
        // Opaque interiors are not inspected, even when they carry artifacts.
        let opaque = Value::opaque("kept\u{FFFD}as-is");
        assert_eq!(sanitize(opaque.clone()), opaque);
    }

    #[test]
    fn empty_text_and_containers_sanitize_to_themselves() {
        assert_eq!(sanitize(Value::from("")), Value::from(""));
        assert_eq!(sanitize(Value::Seq(vec![])), Value::Seq(vec![]));
        assert_eq!(sanitize(Value::Map(vec![])), Value::Map(vec![]));
    }

    #[test]
    fn sanitize_is_idempotent() {
        let value = Value::map(vec![
            ("k".to_string(), Value::from(&b"a\xFFb"[..])),
            ("s".to_string(), Value::set(vec![Value::from("x\u{FFFD}"), Value::from("x ")])),
        ]);
        let once = sanitize(value);
        assert_eq!(sanitize(once.clone()), once);
    }

    #[test]
    fn nesting_within_the_limit_stays_clean() {
        let mut value = Value::from("leaf");
        for _ in 0..(MAX_NESTING_DEPTH - 1) {
            value = Value::Seq(vec![value]);
        }
        assert!(!try_sanitize(value, DEFAULT_REPLACEMENT).is_degraded());
    }

    #[test_log::test]
    fn nesting_past_the_limit_degrades_to_the_original() {
        let mut value = Value::from(&b"\xFF"[..]);
        for _ in 0..(MAX_NESTING_DEPTH + 10) {
            value = Value::Seq(vec![value]);
        }
        let outcome = try_sanitize(value.clone(), DEFAULT_REPLACEMENT);
        assert!(outcome.is_degraded());
        // Degraded means untouched: the bytes are still bytes.
        assert_eq!(outcome.into_value(), value);
    }
}
