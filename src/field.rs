use std::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// one caller supplied value, before validation
// JSON numbers land in Int or Real, anything else (strings, null, lists) in Other
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    Int(i64),
    Real(f64),
    Other(Value),
}

impl Field {
    // None unless the value is an integer or a finite real
    pub fn as_f64(&self) -> Option<f64> {
	match self {
	    Field::Int(value) => Some(*value as f64),
	    Field::Real(value) if value.is_finite() => Some(*value),
	    _ => None,
	}
    }

    pub fn is_numeric(&self) -> bool {
	self.as_f64().is_some()
    }
}

// one layer as supplied; a layer that is not a list is kept so validation can report it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLayer {
    Fields(Vec<Field>),
    Other(Value),
}

impl RawLayer {
    // a bare value counts as a single field, null as none
    pub fn len(&self) -> usize {
	match self {
	    RawLayer::Fields(fields) => fields.len(),
	    RawLayer::Other(Value::Null) => 0,
	    RawLayer::Other(_) => 1,
	}
    }

    pub fn is_empty(&self) -> bool {
	self.len() == 0
    }

    pub fn fields(&self) -> &[Field] {
	match self {
	    RawLayer::Fields(fields) => fields,
	    RawLayer::Other(_) => &[],
	}
    }
}

impl From<Vec<Field>> for RawLayer {
    fn from(fields: Vec<Field>) -> Self {
	RawLayer::Fields(fields)
    }
}

impl From<i64> for Field {
    fn from(value: i64) -> Self {
	Field::Int(value)
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
	Field::Int(value.into())
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
	Field::Real(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
	Field::Other(Value::String(value.to_owned()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	match self {
	    Field::Int(value) => write!(f, "{}", value),
	    Field::Real(value) => write!(f, "{}", value),
	    Field::Other(value) => write!(f, "{}", value),
	}
    }
}
