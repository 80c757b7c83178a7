//! Row-parsing companion: decodes query-stream rows against a schema.
//!
//! The executing collaborator receives a header naming the result columns
//! and their types, then one JSON array per row. This module validates the
//! header pair and turns each row into typed values, sharing the schema
//! model of the statement generators.

use crate::ast::KsqlValue;
use crate::error::{SquallError, SquallResult};
use crate::schema::KsqlType;
use serde::Deserialize;

/// Header of a query-stream response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryStreamHeader {
    #[serde(rename = "queryId")]
    pub query_id: String,
    #[serde(rename = "columnNames")]
    pub column_names: Vec<String>,
    #[serde(rename = "columnTypes")]
    pub column_types: Vec<String>,
}

/// Validated (column names, column types) pair for row decoding.
#[derive(Debug, Clone)]
pub struct RowSchema {
    column_names: Vec<String>,
    column_types: Vec<KsqlType>,
}

impl RowSchema {
    /// Pair up column names and types; the lists must have equal length.
    pub fn new(column_names: Vec<String>, column_types: Vec<KsqlType>) -> SquallResult<Self> {
        if column_names.len() != column_types.len() {
            return Err(SquallError::schema_mismatch(
                column_names.len(),
                column_types.len(),
            ));
        }

        Ok(Self {
            column_names,
            column_types,
        })
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Decode one row (a JSON array of column values) into named values.
    pub fn deserialize_row(&self, row: &str) -> SquallResult<Vec<(String, KsqlValue)>> {
        let columns: Vec<serde_json::Value> =
            serde_json::from_str(row).map_err(|e| SquallError::MalformedRow(e.to_string()))?;

        if columns.len() != self.column_names.len() {
            return Err(SquallError::schema_mismatch(
                self.column_names.len(),
                columns.len(),
            ));
        }

        self.column_names
            .iter()
            .zip(&self.column_types)
            .zip(&columns)
            .map(|((name, ty), column)| Ok((name.clone(), decode_column(ty, column)?)))
            .collect()
    }
}

fn decode_column(ty: &KsqlType, column: &serde_json::Value) -> SquallResult<KsqlValue> {
    use serde_json::Value;

    if column.is_null() {
        return Ok(KsqlValue::Null);
    }

    let mismatch = || SquallError::MalformedRow(format!("expected {} value, got {column}", ty.describe()));

    let value = match ty {
        KsqlType::Varchar | KsqlType::Enum(_) => {
            KsqlValue::String(column.as_str().ok_or_else(mismatch)?.to_string())
        }
        KsqlType::Int => {
            let n = column.as_i64().ok_or_else(mismatch)?;
            KsqlValue::Int(i32::try_from(n).map_err(|_| mismatch())?)
        }
        KsqlType::BigInt => KsqlValue::BigInt(column.as_i64().ok_or_else(mismatch)?),
        KsqlType::Double => KsqlValue::Double(column.as_f64().ok_or_else(mismatch)?),
        KsqlType::Bool => KsqlValue::Bool(column.as_bool().ok_or_else(mismatch)?),
        KsqlType::Decimal(_) => {
            // Decimals arrive either as JSON numbers or quoted strings.
            let text = match column {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => return Err(mismatch()),
            };
            KsqlValue::Decimal(text.parse().map_err(|_| mismatch())?)
        }
        KsqlType::Date => {
            let text = column.as_str().ok_or_else(mismatch)?;
            KsqlValue::Date(
                chrono::NaiveDate::parse_from_str(text, crate::statements::literals::DATE_FORMAT)
                    .map_err(|_| mismatch())?,
            )
        }
        KsqlType::Time => {
            let text = column.as_str().ok_or_else(mismatch)?;
            KsqlValue::Time(
                chrono::NaiveTime::parse_from_str(text, crate::statements::literals::TIME_FORMAT)
                    .map_err(|_| mismatch())?,
            )
        }
        KsqlType::Timestamp => {
            let text = column.as_str().ok_or_else(mismatch)?;
            KsqlValue::Timestamp(
                chrono::DateTime::parse_from_rfc3339(text).map_err(|_| mismatch())?,
            )
        }
        KsqlType::Uuid => {
            let text = column.as_str().ok_or_else(mismatch)?;
            KsqlValue::Uuid(text.parse().map_err(|_| mismatch())?)
        }
        KsqlType::Array(inner) => {
            let items = column.as_array().ok_or_else(mismatch)?;
            KsqlValue::Array(
                items
                    .iter()
                    .map(|item| decode_column(inner, item))
                    .collect::<SquallResult<_>>()?,
            )
        }
        KsqlType::Map(_, value_ty) => {
            let entries = column.as_object().ok_or_else(mismatch)?;
            KsqlValue::Map(
                entries
                    .iter()
                    .map(|(key, entry)| {
                        Ok((
                            KsqlValue::String(key.clone()),
                            decode_column(value_ty, entry)?,
                        ))
                    })
                    .collect::<SquallResult<_>>()?,
            )
        }
        KsqlType::Struct(fields) => {
            let object = column.as_object().ok_or_else(mismatch)?;
            KsqlValue::Struct(
                fields
                    .iter()
                    .map(|(name, field_ty)| {
                        let field = object.get(name).unwrap_or(&Value::Null);
                        Ok((name.clone(), decode_column(field_ty, field)?))
                    })
                    .collect::<SquallResult<_>>()?,
            )
        }
        KsqlType::Bytes => {
            return Err(SquallError::unsupported_type("bytes column"));
        }
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_schema_lists_are_rejected() {
        let err = RowSchema::new(
            vec!["Id".into(), "Title".into()],
            vec![KsqlType::Int],
        )
        .unwrap_err();

        assert!(matches!(err, SquallError::SchemaMismatch { names: 2, types: 1 }));
    }

    #[test]
    fn test_deserialize_row() {
        let schema = RowSchema::new(
            vec!["SensorId".into(), "AvgValue".into(), "Count".into()],
            vec![KsqlType::Varchar, KsqlType::Double, KsqlType::BigInt],
        )
        .unwrap();

        let row = schema
            .deserialize_row(r#"["sensor-1",11.0,42]"#)
            .unwrap();

        assert_eq!(
            row,
            vec![
                ("SensorId".to_string(), KsqlValue::String("sensor-1".into())),
                ("AvgValue".to_string(), KsqlValue::Double(11.0)),
                ("Count".to_string(), KsqlValue::BigInt(42)),
            ]
        );
    }

    #[test]
    fn test_row_width_must_match_schema() {
        let schema = RowSchema::new(vec!["Id".into()], vec![KsqlType::Int]).unwrap();

        let err = schema.deserialize_row(r#"[1,2]"#).unwrap_err();
        assert!(matches!(err, SquallError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_nested_columns() {
        let schema = RowSchema::new(
            vec!["Tags".into()],
            vec![KsqlType::Array(Box::new(KsqlType::Varchar))],
        )
        .unwrap();

        let row = schema.deserialize_row(r#"[["a","b"]]"#).unwrap();

        assert_eq!(
            row[0].1,
            KsqlValue::Array(vec![
                KsqlValue::String("a".into()),
                KsqlValue::String("b".into())
            ])
        );
    }

    #[test]
    fn test_header_decoding() {
        let header: QueryStreamHeader = serde_json::from_str(
            r#"{"queryId":"query_1","columnNames":["ID"],"columnTypes":["INTEGER"]}"#,
        )
        .unwrap();

        assert_eq!(header.query_id, "query_1");
        assert_eq!(header.column_names, vec!["ID"]);
        assert_eq!(header.column_types, vec!["INTEGER"]);
    }
}
