//! Query generation: chain interpretation and statement assembly.

use crate::ast::{
    AutoOffsetReset, Expr, JoinClause, OutputRefinement, QueryOp, TimeWindows,
};
use crate::error::SquallResult;
use crate::pluralize::pluralize;
use crate::render::visitor::KsqlVisitor;
use crate::render::{joins, windows};
use tracing::debug;

/// Compiler-level options shared by every query compiled through one
/// generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerOptions {
    pub should_pluralize_from_item_name: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            should_pluralize_from_item_name: true,
        }
    }
}

impl CompilerOptions {
    /// Apply the pluralization toggle to a source item name.
    pub(crate) fn intercept_from_item_name(&self, name: &str) -> String {
        if self.should_pluralize_from_item_name {
            pluralize(name)
        } else {
            name.to_string()
        }
    }
}

/// Per-compilation context: an optional from-item override going in, the
/// offset-reset policy coming out.
#[derive(Debug, Clone, Default)]
pub struct QueryContext {
    pub from_item_name: Option<String>,
    pub auto_offset_reset: Option<AutoOffsetReset>,
}

/// Scratch state accumulated while interpreting one operation chain.
/// Created fresh per compilation and discarded with it.
#[derive(Debug, Default)]
pub(crate) struct QueryMetadata {
    pub select: Option<Vec<Expr>>,
    pub wheres: Vec<Expr>,
    pub group_by: Option<Vec<Expr>>,
    pub having: Option<Expr>,
    pub windowed_by: Option<TimeWindows>,
    pub partition_by: Option<Vec<Expr>>,
    pub limit: Option<usize>,
    pub auto_offset_reset: Option<AutoOffsetReset>,
    pub joins: Vec<JoinClause>,
}

impl QueryMetadata {
    /// Interpret a recorded chain. The first occurrence wins for every
    /// singleton operation; where-predicates queue in encounter order.
    fn interpret(ops: &[QueryOp]) -> Self {
        let mut metadata = QueryMetadata::default();

        for op in ops {
            match op {
                QueryOp::Select(projection) => {
                    if metadata.select.is_none() {
                        metadata.select = Some(projection.clone());
                    }
                }
                QueryOp::Where(predicate) => metadata.wheres.push(predicate.clone()),
                QueryOp::GroupBy(keys) => {
                    if metadata.group_by.is_none() {
                        metadata.group_by = Some(keys.clone());
                    }
                }
                QueryOp::Having(predicate) => {
                    if metadata.having.is_none() {
                        metadata.having = Some(predicate.clone());
                    }
                }
                QueryOp::WindowedBy(spec) => {
                    if metadata.windowed_by.is_none() {
                        metadata.windowed_by = Some(spec.clone());
                    }
                }
                QueryOp::PartitionBy(keys) => {
                    if metadata.partition_by.is_none() {
                        metadata.partition_by = Some(keys.clone());
                    }
                }
                QueryOp::Take(n) => {
                    if metadata.limit.is_none() {
                        metadata.limit = Some(*n);
                    }
                }
                QueryOp::WithOffsetResetPolicy(policy) => {
                    if metadata.auto_offset_reset.is_none() {
                        metadata.auto_offset_reset = Some(*policy);
                    }
                }
                QueryOp::Join(join) => metadata.joins.push(join.clone()),
            }
        }

        metadata
    }
}

/// Compiles a recorded operation chain into one QL statement.
pub struct KsqlQueryGenerator {
    options: CompilerOptions,
    should_emit_changes: bool,
}

impl KsqlQueryGenerator {
    /// Generator for push queries (EMIT CHANGES / EMIT FINAL).
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            should_emit_changes: true,
        }
    }

    /// Generator for pull queries against materialized state: no EMIT clause.
    pub fn pull_query(options: CompilerOptions) -> Self {
        Self {
            options,
            should_emit_changes: false,
        }
    }

    /// Compile the chain rooted at `source_name` into a statement. The
    /// context's `from_item_name` overrides the inferred source name; the
    /// recorded offset-reset policy is written back onto the context.
    pub fn build_ksql(
        &self,
        source_name: &str,
        ops: &[QueryOp],
        context: &mut QueryContext,
    ) -> SquallResult<String> {
        let metadata = QueryMetadata::interpret(ops);

        let final_from_item_name = self.options.intercept_from_item_name(
            context.from_item_name.as_deref().unwrap_or(source_name),
        );

        context.auto_offset_reset = metadata.auto_offset_reset;

        let mut ksql = String::new();
        let has_joins = !metadata.joins.is_empty();

        if has_joins {
            joins::visit_join_table(&mut ksql, &metadata, &final_from_item_name, &self.options)?;
        } else {
            ksql.push_str("SELECT ");

            match &metadata.select {
                Some(projection) => KsqlVisitor::new(&mut ksql).visit_projection(projection)?,
                None => ksql.push('*'),
            }

            ksql.push_str(&format!(" FROM {final_from_item_name}"));
        }

        let mut is_first = true;

        for predicate in &metadata.wheres {
            if is_first {
                if !has_joins {
                    ksql.push('\n');
                }
                ksql.push_str("WHERE ");
                is_first = false;
            } else {
                ksql.push_str(" AND ");
            }

            KsqlVisitor::new(&mut ksql).visit(predicate)?;
        }

        if let Some(window_spec) = &metadata.windowed_by {
            windows::append_window_clause(&mut ksql, window_spec);
        }

        if let Some(keys) = &metadata.group_by {
            ksql.push_str(" GROUP BY ");
            KsqlVisitor::new(&mut ksql).visit_projection(keys)?;
        }

        if let Some(predicate) = &metadata.having {
            ksql.push_str(" HAVING ");
            KsqlVisitor::new(&mut ksql).visit(predicate)?;
        }

        if let Some(keys) = &metadata.partition_by {
            ksql.push_str(" PARTITION BY ");
            KsqlVisitor::new(&mut ksql).visit_projection(keys)?;
        }

        if self.should_emit_changes {
            let separator = if has_joins && metadata.wheres.is_empty() {
                ""
            } else {
                " "
            };

            let output_refinement = match &metadata.windowed_by {
                Some(spec) if spec.output_refinement == OutputRefinement::Final => "FINAL",
                _ => "CHANGES",
            };

            ksql.push_str(&format!("{separator}EMIT {output_refinement}"));
        }

        if let Some(limit) = metadata.limit {
            ksql.push_str(&format!(" LIMIT {limit}"));
        }

        ksql.push(';');

        debug!(statement = %ksql, "compiled query");

        Ok(ksql)
    }
}
