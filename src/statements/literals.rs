//! Literal serialization for INSERT value lists and query constants.

use crate::ast::KsqlValue;
use crate::error::{SquallError, SquallResult};
use rust_decimal::Decimal;

/// Fixed text formats for temporal literals.
pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Optional per-type formatters, applied before the default numeric text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueFormatters {
    pub format_decimal: Option<fn(Decimal) -> String>,
    pub format_double: Option<fn(f64) -> String>,
}

/// Serialize a runtime value into QL literal syntax.
///
/// String literals are single-quoted with no escaping of embedded quotes;
/// callers that need a quote inside a string must pre-process it themselves.
pub fn serialize_value(value: &KsqlValue, formatters: &ValueFormatters) -> SquallResult<String> {
    let literal = match value {
        KsqlValue::Null => "NULL".to_string(),
        KsqlValue::Decimal(d) => match formatters.format_decimal {
            Some(format) => format(*d),
            None => d.to_string(),
        },
        KsqlValue::Time(t) => format!("'{}'", t.format(TIME_FORMAT)),
        KsqlValue::Date(d) => format!("'{}'", d.format(DATE_FORMAT)),
        KsqlValue::Timestamp(ts) => format!("'{}'", ts.format(TIMESTAMP_FORMAT)),
        KsqlValue::Uuid(u) => format!("'{u}'"),
        KsqlValue::Double(x) => match formatters.format_double {
            Some(format) => format(*x),
            None => x.to_string(),
        },
        KsqlValue::String(s) => format!("'{s}'"),
        KsqlValue::Bool(b) => b.to_string(),
        KsqlValue::Int(n) => n.to_string(),
        KsqlValue::BigInt(n) => n.to_string(),
        KsqlValue::Map(entries) => {
            let mut parts = Vec::with_capacity(entries.len());
            for (key, entry) in entries {
                parts.push(format!(
                    "{} := {}",
                    serialize_value(key, formatters)?,
                    serialize_value(entry, formatters)?
                ));
            }
            format!("MAP({})", parts.join(", "))
        }
        KsqlValue::Array(items) => {
            if items.is_empty() {
                // The grammar has no empty-array literal.
                "ARRAY_REMOVE(ARRAY[0], 0)".to_string()
            } else {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    parts.push(serialize_value(item, formatters)?);
                }
                format!("ARRAY[{}]", parts.join(", "))
            }
        }
        KsqlValue::Struct(fields) => {
            let mut parts = Vec::with_capacity(fields.len());
            for (name, field) in fields {
                parts.push(format!("{} := {}", name, serialize_value(field, formatters)?));
            }
            format!("STRUCT({})", parts.join(", "))
        }
        KsqlValue::Bytes(_) => {
            return Err(SquallError::unsupported_type("bytes literal"));
        }
    };

    Ok(literal)
}
