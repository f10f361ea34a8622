/// In-memory representation of a parsed dictionary literal.
///
/// `Dictionary` keeps entries in source order; serialization walks that order
/// rather than sorting keys, so the JSON output mirrors the input.
use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single value inside a dictionary literal.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    /// Quoted strings and bare tokens that are not numeric.
    String(String),
    /// A bare token made only of digits.
    Integer(u64),
    /// A bare `digits.digits` token.
    Float(f64),
    /// `( a, b )`
    Array(Vec<PlistValue>),
    /// `{ k = v; }`
    Dict(Dictionary),
    /// `<0fbd 7777>`
    Data(Vec<u8>),
}

impl PlistValue {
    /// Type an unquoted token.
    ///
    /// Digit-only tokens become integers and `\d+\.\d+` becomes a float;
    /// anything else stays a string. Tokens whose integer digits carry a
    /// leading zero (`007`, `00.5`) stay strings so the digits survive, as do
    /// integers beyond `u64`. Floats are rounded to the nearest `f64`, and
    /// those that overflow to infinity stay strings.
    #[must_use]
    pub fn from_bare(token: &str) -> Self {
        if is_digits(token) {
            if !has_leading_zero(token) {
                if let Ok(n) = token.parse::<u64>() {
                    return Self::Integer(n);
                }
            }
        } else if let Some((int, frac)) = token.split_once('.') {
            if is_digits(int) && is_digits(frac) && !has_leading_zero(int) {
                if let Ok(f) = token.parse::<f64>() {
                    if f.is_finite() {
                        return Self::Float(f);
                    }
                }
            }
        }
        Self::String(token.to_owned())
    }
}

/// Nested values are released through a work list instead of recursive drop
/// glue, so arbitrarily deep literals cannot exhaust the call stack.
impl Drop for PlistValue {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::Array(items) if !items.is_empty() => std::mem::take(items),
            Self::Dict(dict) if !dict.is_empty() => dict.take_values(),
            _ => return,
        };
        while let Some(mut value) = pending.pop() {
            match &mut value {
                Self::Array(items) => pending.append(items),
                Self::Dict(dict) => pending.extend(dict.take_values()),
                _ => {}
            }
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

/// Lowercase hex encoding used for `Data` values.
#[must_use]
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut acc, b| {
            let _ = write!(acc, "{b:02x}");
            acc
        })
}

/// An insertion-ordered string-keyed mapping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary {
    entries: IndexMap<String, PlistValue>,
}

impl Dictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: String, value: PlistValue) {
        self.entries.insert(key, value);
    }

    #[cfg(test)]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlistValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Empty the dictionary, handing back its values.
    fn take_values(&mut self) -> Vec<PlistValue> {
        std::mem::take(&mut self.entries).into_values().collect()
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Recurses once per nesting level; wrap the serializer in
/// `serde_stacker::Serializer` for untrusted depth (see `render_json`).
impl Serialize for PlistValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_u64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Dict(dict) => dict.serialize(serializer),
            Self::Data(bytes) => serializer.serialize_str(&hex_string(bytes)),
        }
    }
}
