//! INSERT INTO statement generation.

use crate::ast::KsqlValue;
use crate::error::{SquallError, SquallResult};
use crate::schema::KsqlEntity;
use crate::statements::literals::serialize_value;
use crate::statements::{InsertProperties, resolve_entity_name};
use tracing::trace;

/// Generate an `INSERT INTO <name> (<fields>) VALUES (<literals>);` statement
/// from an entity instance.
///
/// Fields serialize in declaration order. With `use_instance_type` unset and
/// `declared_fields` supplied, only that declared subset is serialized, in
/// the declared order; otherwise the instance's own schema decides.
pub fn insert_statement<T: KsqlEntity>(
    entity: &T,
    properties: &InsertProperties,
) -> SquallResult<String> {
    let schema = T::schema();
    let values = entity.row();

    if values.len() != schema.fields.len() {
        return Err(SquallError::schema_mismatch(schema.fields.len(), values.len()));
    }

    let name = resolve_entity_name(
        &schema,
        properties.entity_name.as_deref(),
        properties.should_pluralize_entity_name,
    );

    let selected = select_fields(&schema, &values, properties)?;

    let mut columns = Vec::with_capacity(selected.len());
    let mut literals = Vec::with_capacity(selected.len());

    for (column_name, value) in selected {
        columns.push(column_name);
        literals.push(serialize_value(value, &properties.formatters)?);
    }

    if columns.is_empty() {
        return Err(SquallError::invalid_argument(format!(
            "no insertable fields on entity '{}'",
            schema.name
        )));
    }

    let stmt = format!(
        "INSERT INTO {} ({}) VALUES ({});",
        name,
        columns.join(", "),
        literals.join(", ")
    );

    trace!(statement = %stmt, "generated insert statement");

    Ok(stmt)
}

fn select_fields<'a>(
    schema: &'a crate::schema::EntitySchema,
    values: &'a [KsqlValue],
    properties: &InsertProperties,
) -> SquallResult<Vec<(String, &'a KsqlValue)>> {
    let mut selected = vec![];

    if !properties.use_instance_type
        && let Some(declared) = &properties.declared_fields
    {
        for declared_name in declared {
            let position = schema
                .fields
                .iter()
                .position(|f| &f.name == declared_name)
                .ok_or_else(|| {
                    SquallError::invalid_argument(format!(
                        "declared field '{declared_name}' is not part of entity '{}'",
                        schema.name
                    ))
                })?;

            let field = &schema.fields[position];

            if field.read_only && !properties.include_read_only_fields {
                continue;
            }

            selected.push((field.column_name().to_string(), &values[position]));
        }
    } else {
        for (field, value) in schema.fields.iter().zip(values) {
            if field.read_only && !properties.include_read_only_fields {
                continue;
            }

            selected.push((field.column_name().to_string(), value));
        }
    }

    Ok(selected)
}
