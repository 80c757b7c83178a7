//! Declared shape to QL column-type translation.

use crate::error::{SquallError, SquallResult};
use crate::schema::KsqlType;

/// Translate a declared shape into a standalone QL type token.
///
/// Nested records only exist as column types inside DDL; translating one here
/// fails with an unsupported-type error.
pub fn ksql_type(ty: &KsqlType) -> SquallResult<String> {
    translate(ty, false)
}

/// Translate a declared shape into a DDL column type, where nested records
/// expand recursively into STRUCT<...>.
pub fn ksql_column_type(ty: &KsqlType) -> SquallResult<String> {
    translate(ty, true)
}

fn translate(ty: &KsqlType, allow_struct: bool) -> SquallResult<String> {
    let token = match ty {
        KsqlType::Varchar => "VARCHAR".to_string(),
        KsqlType::Int => "INT".to_string(),
        KsqlType::BigInt => "BIGINT".to_string(),
        KsqlType::Double => "DOUBLE".to_string(),
        KsqlType::Bool => "BOOLEAN".to_string(),
        KsqlType::Bytes => "BYTES".to_string(),
        KsqlType::Decimal(None) => "DECIMAL".to_string(),
        KsqlType::Decimal(Some((precision, scale))) => format!("DECIMAL({precision},{scale})"),
        KsqlType::Date => "DATE".to_string(),
        KsqlType::Time => "TIME".to_string(),
        KsqlType::Timestamp => "TIMESTAMP".to_string(),
        KsqlType::Uuid => "VARCHAR".to_string(),
        KsqlType::Enum(_) => "VARCHAR".to_string(),
        KsqlType::Array(inner) => format!("ARRAY<{}>", translate(inner, allow_struct)?),
        KsqlType::Map(key, value) => format!(
            "MAP<{}, {}>",
            translate(key, allow_struct)?,
            translate(value, allow_struct)?
        ),
        KsqlType::Struct(fields) => {
            if !allow_struct {
                return Err(SquallError::unsupported_type(ty.describe()));
            }
            let mut parts = Vec::with_capacity(fields.len());
            for (name, field_ty) in fields {
                parts.push(format!("{} {}", name, translate(field_ty, allow_struct)?));
            }
            format!("STRUCT<{}>", parts.join(", "))
        }
    };

    Ok(token)
}
