//! The recorded query-operation chain.

use crate::ast::{AutoOffsetReset, Duration, Expr, JoinType, TimeWindows};
use crate::schema::KsqlEntity;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// One recorded operation of a query definition.
///
/// Operations are appended in fluent order; clause emission order is fixed by
/// the QL grammar, not by append order. The first occurrence wins for every
/// singleton operation, while `Where` may repeat and conjoins with AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryOp {
    Select(Vec<Expr>),
    Where(Expr),
    GroupBy(Vec<Expr>),
    Having(Expr),
    WindowedBy(TimeWindows),
    PartitionBy(Vec<Expr>),
    Take(usize),
    WithOffsetResetPolicy(AutoOffsetReset),
    Join(JoinClause),
}

/// A recorded join against another source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JoinClause {
    pub join_type: JoinType,
    /// Item name of the joined source, pre-pluralization.
    pub source: String,
    /// Alias of the primary source; the first recorded join wins.
    pub primary_alias: String,
    pub alias: String,
    /// Primary-side key expression.
    pub left_key: Expr,
    /// Joined-side key expression.
    pub right_key: Expr,
    /// Optional WITHIN constraint for stream-stream joins.
    #[serde(default)]
    pub within: Option<Duration>,
}

/// A (source, alias) pair in the linearized FROM item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromItem {
    pub source: String,
    pub alias: String,
}

/// A typed, fluently-built query definition over a named source.
///
/// The builder only records operations; nothing is interpreted until the
/// query generator walks the chain. See the builder methods in
/// [`crate::ast::builders`].
#[derive(Debug, Clone)]
pub struct StreamQuery<T: KsqlEntity> {
    pub(crate) ops: Vec<QueryOp>,
    _entity: PhantomData<T>,
}

impl<T: KsqlEntity> StreamQuery<T> {
    pub fn new() -> Self {
        Self {
            ops: vec![],
            _entity: PhantomData,
        }
    }

    /// The recorded operation chain, in append order.
    pub fn ops(&self) -> &[QueryOp] {
        &self.ops
    }

    /// Item name inferred from the source entity.
    pub fn source_name(&self) -> String {
        T::schema().name
    }
}

impl<T: KsqlEntity> Default for StreamQuery<T> {
    fn default() -> Self {
        Self::new()
    }
}
