//! # Decoded documents and the structural merge
//!
//! Every configuration file is decoded into a [`Document`] before the include tree is
//! folded into a single value. The document is an explicit tagged union so the merge and
//! the conversions below match exhaustively instead of probing dynamic values.
//!
//! ## Merge rule
//!
//! [`Document::merge`] combines `other` (B) into `self` (A), key by key on B:
//!
//! | A                | B                | Result                        |
//! |------------------|------------------|-------------------------------|
//! | key absent       | any              | B's value is inserted         |
//! | mapping          | mapping          | merged recursively            |
//! | sequence         | sequence         | A's items followed by B's     |
//! | anything else    | anything else    | B overwrites A                |
//!
//! Sequences are concatenated without deduplication, so merging a document with itself
//! doubles every list while leaving mappings and scalars untouched.

use std::collections::BTreeMap;

use serde_yaml::{Mapping as YamlMapping, Number, Value};

use crate::error::DecodeError;

/// Mapping node of a [`Document`].
pub type Mapping = BTreeMap<String, Document>;

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// A decoded structural document.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Scalar(Scalar),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

impl Default for Document {
    fn default() -> Self {
        Document::Mapping(Mapping::new())
    }
}

impl Document {
    /// Decode one file's text. An empty (or comment-only) file is an empty mapping; any
    /// other non-mapping top-level value is rejected.
    pub fn from_yaml_str(text: &str) -> Result<Document, DecodeError> {
        let value: Value = serde_yaml::from_str(text)?;
        match Document::try_from(value)? {
            Document::Scalar(Scalar::Null) => Ok(Document::default()),
            doc @ Document::Mapping(_) => Ok(doc),
            other => Err(DecodeError::NotAMapping(other.kind())),
        }
    }

    /// Render back to YAML text.
    pub fn to_yaml_string(&self) -> Result<String, DecodeError> {
        Ok(serde_yaml::to_string(&Value::from(self.clone()))?)
    }

    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Document::Scalar(Scalar::Null) => "null",
            Document::Scalar(_) => "scalar",
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
        }
    }

    /// Merge `other` into `self` following the rule in the module docs.
    pub fn merge(&mut self, other: Document) {
        match (self, other) {
            (Document::Mapping(acc), Document::Mapping(incoming)) => {
                merge_mappings(acc, incoming);
            }
            (Document::Sequence(acc), Document::Sequence(incoming)) => {
                acc.extend(incoming);
            }
            (slot, incoming) => *slot = incoming,
        }
    }
}

fn merge_mappings(acc: &mut Mapping, incoming: Mapping) {
    for (key, value) in incoming {
        match acc.get_mut(&key) {
            Some(existing) => existing.merge(value),
            None => {
                acc.insert(key, value);
            }
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Document::Scalar(Scalar::Null),
            Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Document::Scalar(Scalar::Number(n)),
            Value::String(s) => Document::Scalar(Scalar::String(s)),
            Value::Sequence(items) => Document::Sequence(
                items
                    .into_iter()
                    .map(Document::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(map) => {
                let mut out = Mapping::new();
                for (key, value) in map {
                    let key = key_to_string(key)?;
                    if out.contains_key(&key) {
                        return Err(DecodeError::DuplicateKey(key));
                    }
                    out.insert(key, Document::try_from(value)?);
                }
                Document::Mapping(out)
            }
            Value::Tagged(tagged) => Document::try_from(tagged.value)?,
        })
    }
}

fn key_to_string(key: Value) -> Result<String, DecodeError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Tagged(tagged) => key_to_string(tagged.value),
        Value::Sequence(_) => Err(DecodeError::NonStringKey("sequence")),
        Value::Mapping(_) => Err(DecodeError::NonStringKey("mapping")),
    }
}

impl Document {
    /// Convert to a [`Value`] in which every non-null scalar is replaced by its text.
    ///
    /// Configuration leaves are identifiers or Rust expressions held as text, so
    /// `retries: 3` loads as `"3"`.
    #[must_use]
    pub fn into_text_value(self) -> Value {
        match self {
            Document::Scalar(Scalar::Null) => Value::Null,
            Document::Scalar(Scalar::Bool(b)) => Value::String(b.to_string()),
            Document::Scalar(Scalar::Number(n)) => Value::String(n.to_string()),
            Document::Scalar(Scalar::String(s)) => Value::String(s),
            Document::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Document::into_text_value).collect())
            }
            Document::Mapping(map) => Value::Mapping(
                map.into_iter()
                    .map(|(key, value)| (Value::String(key), value.into_text_value()))
                    .collect(),
            ),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Scalar(Scalar::Null) => Value::Null,
            Document::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Document::Scalar(Scalar::Number(n)) => Value::Number(n),
            Document::Scalar(Scalar::String(s)) => Value::String(s),
            Document::Sequence(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            Document::Mapping(map) => {
                let mut out = YamlMapping::with_capacity(map.len());
                for (key, value) in map {
                    out.insert(Value::String(key), Value::from(value));
                }
                Value::Mapping(out)
            }
        }
    }
}
