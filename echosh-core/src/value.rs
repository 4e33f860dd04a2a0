// echosh-core/src/value.rs
//! The universal input type accepted by the printing pipeline.
//!
//! `Value` is a closed tagged union over everything the pipeline knows how to
//! carry: scalars, raw byte sequences, ordered sequences, sets, keyed
//! mappings, and an opaque arm for values whose interior this library does
//! not inspect. All data is value-typed and copied through the pipeline; no
//! component retains a reference to caller-owned data after a call returns.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A single value flowing through the sanitize/print pipeline.
///
/// Containers own their elements. `Set` keeps unique elements in insertion
/// order; `Map` preserves key insertion order for display. `Opaque` holds a
/// caller-prerendered display form that is passed through untouched by the
/// sanitizer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A raw byte sequence, possibly containing invalid UTF-8. Sanitization
    /// turns this into repaired `Text`; it never survives into output.
    Bytes(Vec<u8>),
    Seq(Vec<Value>),
    /// Unique elements, insertion order kept. Uniqueness is by equality and
    /// is re-enforced whenever the set is reconstructed.
    Set(Vec<Value>),
    /// Text-keyed entries, insertion order kept.
    Map(Vec<(String, Value)>),
    Opaque(String),
}

impl Value {
    /// Builds a `Set`, dropping elements equal to an earlier one.
    pub fn set(items: impl IntoIterator<Item = Value>) -> Value {
        let mut unique: Vec<Value> = Vec::new();
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Value::Set(unique)
    }

    /// Builds a `Map` from key/value pairs, keeping the given order.
    pub fn map(entries: impl IntoIterator<Item = (String, Value)>) -> Value {
        Value::Map(entries.into_iter().collect())
    }

    /// Wraps a prerendered display form as an opaque value. The sanitizer
    /// passes opaque values through byte-for-byte.
    pub fn opaque(display: impl Into<String>) -> Value {
        Value::Opaque(display.into())
    }

    /// True for the structured variants that render as indented JSON.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Seq(_) | Value::Set(_) | Value::Map(_))
    }

    /// Renders the value as human-readable JSON with a fixed 4-space indent,
    /// keys in the order they were inserted. Sets render as arrays.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)
            .context("Failed to render structured value")?;
        Ok(String::from_utf8(buf)?)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(flag) => serializer.serialize_bool(*flag),
            Value::Int(number) => serializer.serialize_i64(*number),
            Value::Float(number) => serializer.serialize_f64(*number),
            Value::Text(text) => serializer.serialize_str(text),
            Value::Bytes(bytes) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
            Value::Seq(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Opaque(display) => serializer.serialize_str(display),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Value {
        Value::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Value {
        Value::Int(number.into())
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Value {
        Value::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Value {
        Value::Float(number)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Value {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Value {
        Value::Bytes(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Seq(items)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => match (number.as_i64(), number.as_f64()) {
                (Some(int), _) => Value::Int(int),
                (None, Some(float)) => Value::Float(float),
                (None, None) => Value::Opaque(number.to_string()),
            },
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
