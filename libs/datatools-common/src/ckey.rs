//! Composite keys: several typed values packed into one dotted string
//!
//! A [`CompositeKey`] is a schema of field names and types. Keys such as
//! `"42.north.1"` are split on [`KEY_DELIMITER`] and each segment is converted
//! to its field's type; an empty segment stands for a missing value.
//!
//! ```
//! use datatools_common::{CompositeKey, KeyType, KeyValue};
//!
//! let schema = CompositeKey::new([("id", KeyType::Int), ("region", KeyType::Text)]);
//! let values = schema.unpack("42.north", &["region"]).unwrap();
//! assert_eq!(values, vec![Some(KeyValue::Text("north".to_string()))]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bools::try_bool;
use crate::constants::KEY_DELIMITER;
use crate::error::{CommonError, Result};

/// Type of one composite key segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Int,
    Float,
    Text,
    Bool,
}

impl KeyType {
    fn convert(self, segment: &str) -> Result<KeyValue> {
        let failed = |reason: &str| CommonError::parse(segment, reason);
        match self {
            Self::Int => segment
                .parse()
                .map(KeyValue::Int)
                .map_err(|_| failed("expected an integer")),
            Self::Float => segment
                .parse()
                .map(KeyValue::Float)
                .map_err(|_| failed("expected a number")),
            Self::Text => Ok(KeyValue::Text(segment.to_string())),
            Self::Bool => try_bool(segment)
                .map(KeyValue::Bool)
                .ok_or_else(|| failed("expected a boolean")),
        }
    }
}

/// Typed value of one composite key segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// Ordered schema of named, typed key segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeKey {
    fields: Vec<(String, KeyType)>,
}

impl CompositeKey {
    /// Build a schema from `(name, type)` pairs in segment order
    pub fn new<N: Into<String>>(fields: impl IntoIterator<Item = (N, KeyType)>) -> Self {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, kind)| (name.into(), kind))
                .collect(),
        }
    }

    /// Field names in segment order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Split a key into a map of field name to converted value
    ///
    /// Segments beyond the schema are ignored.
    ///
    /// # Errors
    /// Returns `CommonError::MissingSegment` if the key has fewer segments than
    /// the schema, or `CommonError::Parse` if a segment does not convert
    pub fn unpack_map(&self, key: &str) -> Result<BTreeMap<String, Option<KeyValue>>> {
        let mut segments = key.split(KEY_DELIMITER);
        let mut values = BTreeMap::new();
        for (name, kind) in &self.fields {
            let segment = segments.next().ok_or_else(|| CommonError::MissingSegment {
                key: key.to_string(),
                name: name.clone(),
            })?;
            let value = if segment.is_empty() {
                None
            } else {
                Some(kind.convert(segment)?)
            };
            values.insert(name.clone(), value);
        }
        Ok(values)
    }

    /// Values of the requested fields, in the requested order
    ///
    /// # Errors
    /// Returns `CommonError::UnknownKey` for a name outside the schema, plus
    /// the errors of [`unpack_map`](Self::unpack_map)
    pub fn unpack(&self, key: &str, names: &[&str]) -> Result<Vec<Option<KeyValue>>> {
        let values = self.unpack_map(key)?;
        names
            .iter()
            .map(|name| {
                values
                    .get(*name)
                    .cloned()
                    .ok_or_else(|| CommonError::UnknownKey {
                        name: (*name).to_string(),
                    })
            })
            .collect()
    }

    /// [`unpack`](Self::unpack) every non-empty key of a list
    ///
    /// # Errors
    /// Returns the first error raised by [`unpack`](Self::unpack)
    pub fn unpack_list<S: AsRef<str>>(
        &self,
        keys: &[S],
        names: &[&str],
    ) -> Result<Vec<Vec<Option<KeyValue>>>> {
        keys.iter()
            .map(AsRef::<str>::as_ref)
            .filter(|key| !key.is_empty())
            .map(|key| self.unpack(key, names))
            .collect()
    }

    /// Join values into a key in schema order; absent values leave an empty segment
    ///
    /// # Errors
    /// Returns `CommonError::InvalidArgument` if a value's text contains the
    /// delimiter, since the key could not be split back
    pub fn pack(&self, values: &BTreeMap<String, Option<KeyValue>>) -> Result<String> {
        let mut segments = Vec::with_capacity(self.fields.len());
        for (name, _) in &self.fields {
            let segment = match values.get(name) {
                Some(Some(value)) => value.to_string(),
                _ => String::new(),
            };
            if segment.contains(KEY_DELIMITER) {
                return Err(CommonError::invalid_argument(format!(
                    "value '{segment}' of '{name}' contains the key delimiter"
                )));
            }
            segments.push(segment);
        }
        let delimiter = KEY_DELIMITER.to_string();
        Ok(segments.join(delimiter.as_str()))
    }
}
