//! Statement generators: DDL, inserts, literals, and type translation.

pub mod create;
pub mod insert;
pub mod literals;
pub mod translate;

use crate::pluralize::pluralize;
use crate::schema::EntitySchema;
use crate::statements::literals::ValueFormatters;
use serde::{Deserialize, Serialize};

/// Creation kind of a DDL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreationType {
    Create,
    CreateOrReplace,
}

/// Entity kind of a DDL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KsqlEntityType {
    Stream,
    Table,
}

impl std::fmt::Display for KsqlEntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KsqlEntityType::Stream => write!(f, "STREAM"),
            KsqlEntityType::Table => write!(f, "TABLE"),
        }
    }
}

/// Context of one DDL statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementContext {
    pub creation_type: CreationType,
    pub entity_type: KsqlEntityType,
}

/// Value serialization format declared in the WITH clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SerializationFormat {
    #[default]
    Json,
    Avro,
    Protobuf,
    Delimited,
}

impl std::fmt::Display for SerializationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerializationFormat::Json => write!(f, "Json"),
            SerializationFormat::Avro => write!(f, "Avro"),
            SerializationFormat::Protobuf => write!(f, "Protobuf"),
            SerializationFormat::Delimited => write!(f, "Delimited"),
        }
    }
}

/// Entity creation options for DDL statements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCreationMetadata {
    pub kafka_topic: String,
    pub partitions: u16,
    pub replicas: Option<u16>,
    pub value_format: SerializationFormat,
    /// Overrides the entity's own name when set.
    pub entity_name: Option<String>,
    pub should_pluralize_entity_name: bool,
    pub include_read_only_fields: bool,
}

impl EntityCreationMetadata {
    pub fn new(kafka_topic: impl Into<String>) -> Self {
        Self {
            kafka_topic: kafka_topic.into(),
            partitions: 1,
            replicas: None,
            value_format: SerializationFormat::default(),
            entity_name: None,
            should_pluralize_entity_name: true,
            include_read_only_fields: false,
        }
    }
}

/// Options for insert statement generation.
#[derive(Debug, Clone)]
pub struct InsertProperties {
    /// Overrides the entity's own name when set.
    pub entity_name: Option<String>,
    pub should_pluralize_entity_name: bool,
    /// When false and `declared_fields` is set, only that declared subset is
    /// serialized, in the declared order. When true the instance's own schema
    /// decides.
    pub use_instance_type: bool,
    pub declared_fields: Option<Vec<String>>,
    pub include_read_only_fields: bool,
    pub formatters: ValueFormatters,
}

impl Default for InsertProperties {
    fn default() -> Self {
        Self {
            entity_name: None,
            should_pluralize_entity_name: true,
            use_instance_type: false,
            declared_fields: None,
            include_read_only_fields: false,
            formatters: ValueFormatters::default(),
        }
    }
}

/// Resolve the statement target name: explicit override else the entity's own
/// name, pluralized unless disabled.
fn resolve_entity_name(
    schema: &EntitySchema,
    override_name: Option<&str>,
    should_pluralize: bool,
) -> String {
    let name = override_name.unwrap_or(&schema.name);

    if should_pluralize {
        pluralize(name)
    } else {
        name.to_string()
    }
}
