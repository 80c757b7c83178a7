//! Join-path rendering: FROM item linearization and JOIN ... ON clauses.

use crate::ast::FromItem;
use crate::error::SquallResult;
use crate::render::query::{CompilerOptions, QueryMetadata};
use crate::render::visitor::KsqlVisitor;

/// Render the SELECT ... FROM ... JOIN ... ON ... prefix of a join query.
///
/// The joined sources are linearized first and the primary source is
/// appended as the final FROM item; its alias comes from the first recorded
/// join. The rendered prefix ends with a newline so the caller can append
/// WHERE or EMIT directly.
pub(crate) fn visit_join_table(
    buffer: &mut String,
    metadata: &QueryMetadata,
    final_from_item_name: &str,
    options: &CompilerOptions,
) -> SquallResult<()> {
    let Some(first_join) = metadata.joins.first() else {
        return Ok(());
    };

    let mut from_items: Vec<FromItem> = metadata
        .joins
        .iter()
        .map(|join| FromItem {
            source: options.intercept_from_item_name(&join.source),
            alias: join.alias.clone(),
        })
        .collect();

    from_items.push(FromItem {
        source: final_from_item_name.to_string(),
        alias: first_join.primary_alias.clone(),
    });

    let Some((primary, joined)) = from_items.split_last() else {
        return Ok(());
    };

    buffer.push_str("SELECT ");

    match &metadata.select {
        Some(projection) => KsqlVisitor::new(buffer).visit_projection(projection)?,
        None => buffer.push('*'),
    }

    buffer.push_str(&format!(" FROM {} AS {}\n", primary.source, primary.alias));

    for (item, join) in joined.iter().zip(&metadata.joins) {
        buffer.push_str(&format!("{} {} AS {}", join.join_type, item.source, item.alias));

        if let Some(within) = join.within {
            buffer.push_str(&format!(" WITHIN {within}"));
        }

        buffer.push_str("\nON ");

        let mut visitor = KsqlVisitor::new(buffer);
        visitor.visit(&join.left_key)?;
        visitor.append(" = ");
        visitor.visit(&join.right_key)?;

        buffer.push('\n');
    }

    Ok(())
}
