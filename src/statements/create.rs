//! CREATE STREAM / CREATE TABLE statement generation.

use crate::error::{SquallError, SquallResult};
use crate::schema::EntitySchema;
use crate::statements::translate::ksql_column_type;
use crate::statements::{
    CreationType, EntityCreationMetadata, KsqlEntityType, StatementContext, resolve_entity_name,
};
use tracing::trace;

/// Generate a `CREATE STREAM` statement.
pub fn create_stream(
    schema: &EntitySchema,
    metadata: &EntityCreationMetadata,
    if_not_exists: bool,
) -> SquallResult<String> {
    let context = StatementContext {
        creation_type: CreationType::Create,
        entity_type: KsqlEntityType::Stream,
    };

    create_statement(schema, &context, metadata, if_not_exists)
}

/// Generate a `CREATE OR REPLACE STREAM` statement.
pub fn create_or_replace_stream(
    schema: &EntitySchema,
    metadata: &EntityCreationMetadata,
) -> SquallResult<String> {
    let context = StatementContext {
        creation_type: CreationType::CreateOrReplace,
        entity_type: KsqlEntityType::Stream,
    };

    create_statement(schema, &context, metadata, false)
}

/// Generate a `CREATE TABLE` statement.
pub fn create_table(
    schema: &EntitySchema,
    metadata: &EntityCreationMetadata,
    if_not_exists: bool,
) -> SquallResult<String> {
    let context = StatementContext {
        creation_type: CreationType::Create,
        entity_type: KsqlEntityType::Table,
    };

    create_statement(schema, &context, metadata, if_not_exists)
}

/// Generate a `CREATE OR REPLACE TABLE` statement.
pub fn create_or_replace_table(
    schema: &EntitySchema,
    metadata: &EntityCreationMetadata,
) -> SquallResult<String> {
    let context = StatementContext {
        creation_type: CreationType::CreateOrReplace,
        entity_type: KsqlEntityType::Table,
    };

    create_statement(schema, &context, metadata, false)
}

/// Generate a DDL statement for the given context.
///
/// `if_not_exists` only applies to plain CREATE; the OR REPLACE form has no
/// IF NOT EXISTS clause.
pub fn create_statement(
    schema: &EntitySchema,
    context: &StatementContext,
    metadata: &EntityCreationMetadata,
    if_not_exists: bool,
) -> SquallResult<String> {
    if schema.fields.is_empty() {
        return Err(SquallError::invalid_argument(format!(
            "entity '{}' declares no fields",
            schema.name
        )));
    }

    let name = resolve_entity_name(
        schema,
        metadata.entity_name.as_deref(),
        metadata.should_pluralize_entity_name,
    );

    let mut stmt = String::new();

    match context.creation_type {
        CreationType::Create => {
            stmt.push_str("CREATE ");
            stmt.push_str(&context.entity_type.to_string());
            if if_not_exists {
                stmt.push_str(" IF NOT EXISTS");
            }
        }
        CreationType::CreateOrReplace => {
            stmt.push_str("CREATE OR REPLACE ");
            stmt.push_str(&context.entity_type.to_string());
        }
    }

    stmt.push(' ');
    stmt.push_str(&name);
    stmt.push_str(" (\n\t");

    let mut columns = vec![];

    for field in &schema.fields {
        if field.read_only && !metadata.include_read_only_fields {
            continue;
        }

        let mut column = format!("{} {}", field.column_name(), ksql_column_type(&field.ty)?);

        if field.key {
            column.push_str(match context.entity_type {
                KsqlEntityType::Table => " PRIMARY KEY",
                KsqlEntityType::Stream => " KEY",
            });
        }

        if let Some(header_key) = &field.header {
            column.push_str(&format!(" HEADER('{header_key}')"));
        }

        columns.push(column);
    }

    stmt.push_str(&columns.join(",\n\t"));

    stmt.push_str("\n) WITH ( ");
    stmt.push_str(&format!(
        "KAFKA_TOPIC='{}', VALUE_FORMAT='{}', PARTITIONS='{}'",
        metadata.kafka_topic, metadata.value_format, metadata.partitions
    ));

    if let Some(replicas) = metadata.replicas {
        stmt.push_str(&format!(", REPLICAS='{replicas}'"));
    }

    stmt.push_str(" );");

    trace!(statement = %stmt, "generated create statement");

    Ok(stmt)
}
