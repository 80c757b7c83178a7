//! Entity schema descriptions.
//!
//! Every entity that can back a stream, table, or insert statement declares
//! an explicit [`EntitySchema`]: an ordered field list with the annotations
//! the statement generators need (key role, rename, read-only, header key).
//! Field order is declaration order and is stable across compilations.

use crate::ast::KsqlValue;
use serde::{Deserialize, Serialize};

/// The declared shape of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KsqlType {
    Varchar,
    Int,
    BigInt,
    Double,
    Bool,
    Bytes,
    /// Optional precision/scale taken from an explicit annotation.
    Decimal(Option<(u8, u8)>),
    Date,
    Time,
    Timestamp,
    Uuid,
    /// Enum types carry their name but serialize as VARCHAR.
    Enum(String),
    Array(Box<KsqlType>),
    Map(Box<KsqlType>, Box<KsqlType>),
    /// Nested record, expanded field by field inside DDL.
    Struct(Vec<(String, KsqlType)>),
}

impl KsqlType {
    /// Human-readable name used in error messages.
    pub fn describe(&self) -> String {
        match self {
            KsqlType::Varchar => "string".into(),
            KsqlType::Int => "i32".into(),
            KsqlType::BigInt => "i64".into(),
            KsqlType::Double => "f64".into(),
            KsqlType::Bool => "bool".into(),
            KsqlType::Bytes => "bytes".into(),
            KsqlType::Decimal(_) => "decimal".into(),
            KsqlType::Date => "date".into(),
            KsqlType::Time => "time".into(),
            KsqlType::Timestamp => "timestamp".into(),
            KsqlType::Uuid => "uuid".into(),
            KsqlType::Enum(name) => format!("enum {name}"),
            KsqlType::Array(inner) => format!("array<{}>", inner.describe()),
            KsqlType::Map(key, value) => {
                format!("map<{}, {}>", key.describe(), value.describe())
            }
            KsqlType::Struct(_) => "struct".into(),
        }
    }
}

/// One declared field of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub ty: KsqlType,
    /// Rename override used verbatim in generated statements.
    #[serde(default)]
    pub rename: Option<String>,
    /// Key column; rendered KEY or PRIMARY KEY depending on the entity kind.
    #[serde(default)]
    pub key: bool,
    #[serde(default)]
    pub read_only: bool,
    /// Header column key, rendered as a HEADER('...') suffix in DDL.
    #[serde(default)]
    pub header: Option<String>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, ty: KsqlType) -> Self {
        Self {
            name: name.into(),
            ty,
            rename: None,
            key: false,
            read_only: false,
            header: None,
        }
    }

    /// Mark this field as the key column.
    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    /// Exclude this field from generated statements by default.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Override the column name used in generated statements.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.rename = Some(name.into());
        self
    }

    /// Bind this field to a record header key.
    pub fn header(mut self, key: impl Into<String>) -> Self {
        self.header = Some(key.into());
        self
    }

    /// The column name to render: the rename override when present.
    pub fn column_name(&self) -> &str {
        self.rename.as_deref().unwrap_or(&self.name)
    }
}

/// A named entity shape with an ordered field list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub name: String,
    pub fields: Vec<FieldSchema>,
}

impl EntitySchema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Look a field up by its declared name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A typed entity that can be compiled into statements.
///
/// `row` must return one value per declared field, in declaration order.
pub trait KsqlEntity {
    fn schema() -> EntitySchema;

    fn row(&self) -> Vec<KsqlValue>;
}
