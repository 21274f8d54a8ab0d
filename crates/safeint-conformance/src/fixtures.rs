//! Fixture loading and the encoded input model.

use std::collections::BTreeMap;

use safeint::{Object, Value};
use serde::{Deserialize, Serialize};

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Operation being tested.
    pub operation: Operation,
    /// Input value (encoded).
    pub input: EncodedValue,
    /// Radix for parse cases; absent means "not provided".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radix: Option<u32>,
    /// Expected output in canonical rendering (`true`/`false` for the
    /// predicate, the integer in decimal or `null` for the rest).
    pub expect: String,
}

/// A collection of fixture cases for an operation family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Suite name.
    pub suite: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

/// The four library operations a fixture can exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    IsSafeInteger,
    AsSafeInteger,
    ParseSafeInteger,
    ToSafeInteger,
}

impl Operation {
    /// Canonical name, as written in fixture files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Operation::IsSafeInteger => "is_safe_integer",
            Operation::AsSafeInteger => "as_safe_integer",
            Operation::ParseSafeInteger => "parse_safe_integer",
            Operation::ToSafeInteger => "to_safe_integer",
        }
    }
}

/// JSON encoding of a dynamic input value.
///
/// JSON itself cannot carry NaN, infinities, `undefined`, or callables, so
/// the encoding is tagged and spells those categories out. Objects carry a
/// plain member map plus an optional `value_of` behavior; a non-callable
/// member named `valueOf` is expressed through the map directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EncodedValue {
    Number {
        value: f64,
    },
    Nan,
    Infinity {
        #[serde(default)]
        negative: bool,
    },
    String {
        value: String,
    },
    Bool {
        value: bool,
    },
    Null,
    Undefined,
    Array {
        items: Vec<EncodedValue>,
    },
    Object {
        #[serde(default)]
        members: BTreeMap<String, EncodedValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value_of: Option<ValueOfSpec>,
    },
    Function,
}

/// Behavior of an object's callable `valueOf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueOfSpec {
    /// Return the named member of the receiver (undefined when missing).
    Member { name: String },
    /// Return a fixed value.
    Constant { value: Box<EncodedValue> },
}

impl EncodedValue {
    /// Decodes into a runtime [`Value`], building real callables for
    /// `value_of` specs.
    #[must_use]
    pub fn decode(&self) -> Value {
        match self {
            EncodedValue::Number { value } => Value::Number(*value),
            EncodedValue::Nan => Value::Number(f64::NAN),
            EncodedValue::Infinity { negative } => Value::Number(if *negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
            EncodedValue::String { value } => Value::String(value.clone()),
            EncodedValue::Bool { value } => Value::Bool(*value),
            EncodedValue::Null => Value::Null,
            EncodedValue::Undefined => Value::Undefined,
            EncodedValue::Array { items } => {
                Value::Array(items.iter().map(EncodedValue::decode).collect())
            }
            EncodedValue::Object { members, value_of } => {
                let mut object = Object::new();
                for (name, member) in members {
                    object.insert(name.clone(), member.decode());
                }
                if let Some(spec) = value_of {
                    object.insert(Object::VALUE_OF, spec.build());
                }
                Value::Object(object)
            }
            EncodedValue::Function => Value::function(|_| Value::Undefined),
        }
    }

    /// Category name used in diagnostics.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            EncodedValue::Number { .. } | EncodedValue::Nan | EncodedValue::Infinity { .. } => {
                "number"
            }
            EncodedValue::String { .. } => "string",
            EncodedValue::Bool { .. } => "bool",
            EncodedValue::Null => "null",
            EncodedValue::Undefined => "undefined",
            EncodedValue::Array { .. } => "array",
            EncodedValue::Object { .. } => "object",
            EncodedValue::Function => "function",
        }
    }
}

impl ValueOfSpec {
    /// Builds the callable stored under the `valueOf` member name.
    fn build(&self) -> Value {
        match self {
            ValueOfSpec::Member { name } => {
                let name = name.clone();
                Value::function(move |receiver: &Object| {
                    receiver.get(&name).cloned().unwrap_or(Value::Undefined)
                })
            }
            ValueOfSpec::Constant { value } => {
                let constant = value.decode();
                Value::function(move |_| constant.clone())
            }
        }
    }
}
