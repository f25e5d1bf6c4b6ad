//! Argument checks applied before a request is built.
//!
//! Every check takes a dynamic JSON value. `null` always passes and means
//! "omit this field"; any other value must be exactly of the expected kind.

use chrono::NaiveDate;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// Date layout accepted by the server for every date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expected shape of a single argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
    /// A floating point number; integers are rejected
    Float,
    Bool,
    /// A `YYYY-MM-DD` string
    Date,
    /// A string from a fixed, case-sensitive set
    Enum(&'static [&'static str]),
    /// A list. Elements are only checked when an element kind is given.
    List(Option<&'static FieldKind>),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Str => write!(f, "a string"),
            FieldKind::Int => write!(f, "an integer"),
            FieldKind::Float => write!(f, "a float"),
            FieldKind::Bool => write!(f, "a boolean"),
            FieldKind::Date => write!(f, "a date"),
            FieldKind::Enum(allowed) => write!(f, "one of {:?}", allowed),
            FieldKind::List(None) => write!(f, "a list"),
            FieldKind::List(Some(item)) => write!(f, "a list of {}", item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: {value} is not {expected}!")]
    WrongKind {
        field: String,
        value: Value,
        expected: FieldKind,
    },
    #[error("{field}: {value} is not in the accepted values list: {allowed:?}!")]
    NotAllowed {
        field: String,
        value: Value,
        allowed: &'static [&'static str],
    },
    #[error("{field}: {value} is not a date!")]
    InvalidDate { field: String, value: Value },
    #[error("missing value for required field {field:?}")]
    MissingField { field: String },
    #[error("{operation} does not accept a field named {field:?}")]
    UnknownField { operation: String, field: String },
}

/// Check `value` against `kind`, naming `field` in any error.
pub fn check(field: &str, kind: FieldKind, value: &Value) -> Result<(), ValidationError> {
    if value.is_null() {
        return Ok(());
    }
    trace!("Checking {} against {}...", field, kind);

    let matches = match kind {
        FieldKind::Str => value.is_string(),
        FieldKind::Int => value.is_i64() || value.is_u64(),
        FieldKind::Float => value.is_f64(),
        FieldKind::Bool => value.is_boolean(),
        FieldKind::Date => return check_date(field, value),
        FieldKind::Enum(allowed) => return check_enum(field, allowed, value),
        FieldKind::List(item) => return check_list(field, item, value),
    };

    if matches {
        Ok(())
    } else {
        Err(ValidationError::WrongKind {
            field: field.to_string(),
            value: value.clone(),
            expected: kind,
        })
    }
}

fn check_date(field: &str, value: &Value) -> Result<(), ValidationError> {
    match value.as_str() {
        Some(text) if NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok() => Ok(()),
        _ => Err(ValidationError::InvalidDate {
            field: field.to_string(),
            value: value.clone(),
        }),
    }
}

fn check_enum(
    field: &str,
    allowed: &'static [&'static str],
    value: &Value,
) -> Result<(), ValidationError> {
    match value.as_str() {
        Some(text) if allowed.contains(&text) => Ok(()),
        _ => Err(ValidationError::NotAllowed {
            field: field.to_string(),
            value: value.clone(),
            allowed,
        }),
    }
}

fn check_list(
    field: &str,
    item: Option<&'static FieldKind>,
    value: &Value,
) -> Result<(), ValidationError> {
    let items = value.as_array().ok_or_else(|| ValidationError::WrongKind {
        field: field.to_string(),
        value: value.clone(),
        expected: FieldKind::List(item),
    })?;

    if let Some(kind) = item {
        for element in items {
            check(field, *kind, element)?;
        }
    }
    Ok(())
}
