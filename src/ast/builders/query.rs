//! Query builder methods for StreamQuery.
//!
//! Each method records one operation; nothing is interpreted until the chain
//! is compiled.

use crate::ast::{
    AutoOffsetReset, Duration, Expr, JoinClause, JoinType, QueryOp, StreamQuery, TimeWindows,
};
use crate::error::SquallResult;
use crate::render::{CompilerOptions, KsqlQueryGenerator, QueryContext};
use crate::schema::KsqlEntity;

impl<T: KsqlEntity> StreamQuery<T> {
    /// Project the given expressions. The first recorded projection wins.
    pub fn select<I, E>(mut self, projection: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.ops
            .push(QueryOp::Select(projection.into_iter().map(Into::into).collect()));
        self
    }

    /// Filter rows. May be called repeatedly; predicates conjoin with AND.
    pub fn where_(mut self, predicate: impl Into<Expr>) -> Self {
        self.ops.push(QueryOp::Where(predicate.into()));
        self
    }

    pub fn group_by<I, E>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.ops
            .push(QueryOp::GroupBy(keys.into_iter().map(Into::into).collect()));
        self
    }

    pub fn having(mut self, predicate: impl Into<Expr>) -> Self {
        self.ops.push(QueryOp::Having(predicate.into()));
        self
    }

    pub fn windowed_by(mut self, windows: TimeWindows) -> Self {
        self.ops.push(QueryOp::WindowedBy(windows));
        self
    }

    pub fn partition_by<I, E>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.ops
            .push(QueryOp::PartitionBy(keys.into_iter().map(Into::into).collect()));
        self
    }

    /// Limit the number of emitted rows (LIMIT n).
    pub fn take(mut self, n: usize) -> Self {
        self.ops.push(QueryOp::Take(n));
        self
    }

    pub fn with_offset_reset_policy(mut self, policy: AutoOffsetReset) -> Self {
        self.ops.push(QueryOp::WithOffsetResetPolicy(policy));
        self
    }

    /// Record a join against another source. The primary alias of the first
    /// recorded join names the FROM item.
    pub fn join<U: KsqlEntity>(
        self,
        primary_alias: &str,
        alias: &str,
        left_key: Expr,
        right_key: Expr,
    ) -> Self {
        self.push_join::<U>(JoinType::Inner, primary_alias, alias, left_key, right_key)
    }

    pub fn left_join<U: KsqlEntity>(
        self,
        primary_alias: &str,
        alias: &str,
        left_key: Expr,
        right_key: Expr,
    ) -> Self {
        self.push_join::<U>(JoinType::Left, primary_alias, alias, left_key, right_key)
    }

    pub fn right_join<U: KsqlEntity>(
        self,
        primary_alias: &str,
        alias: &str,
        left_key: Expr,
        right_key: Expr,
    ) -> Self {
        self.push_join::<U>(JoinType::Right, primary_alias, alias, left_key, right_key)
    }

    pub fn full_outer_join<U: KsqlEntity>(
        self,
        primary_alias: &str,
        alias: &str,
        left_key: Expr,
        right_key: Expr,
    ) -> Self {
        self.push_join::<U>(JoinType::FullOuter, primary_alias, alias, left_key, right_key)
    }

    /// Group join: joins the other source and groups matches, which the QL
    /// grammar expresses as a left join.
    pub fn group_join<U: KsqlEntity>(
        self,
        primary_alias: &str,
        alias: &str,
        left_key: Expr,
        right_key: Expr,
    ) -> Self {
        self.push_join::<U>(JoinType::Left, primary_alias, alias, left_key, right_key)
    }

    /// Constrain the most recently recorded join to a time window
    /// (`WITHIN <duration>`). No-op when no join was recorded.
    pub fn within(mut self, duration: Duration) -> Self {
        if let Some(QueryOp::Join(join)) = self
            .ops
            .iter_mut()
            .rev()
            .find(|op| matches!(op, QueryOp::Join(_)))
        {
            join.within = Some(duration);
        }
        self
    }

    fn push_join<U: KsqlEntity>(
        mut self,
        join_type: JoinType,
        primary_alias: &str,
        alias: &str,
        left_key: Expr,
        right_key: Expr,
    ) -> Self {
        self.ops.push(QueryOp::Join(JoinClause {
            join_type,
            source: U::schema().name,
            primary_alias: primary_alias.to_string(),
            alias: alias.to_string(),
            left_key,
            right_key,
            within: None,
        }));
        self
    }

    /// Compile this definition into a push query with default options.
    pub fn to_query_string(&self) -> SquallResult<String> {
        let generator = KsqlQueryGenerator::new(CompilerOptions::default());

        generator.build_ksql(&self.source_name(), self.ops(), &mut QueryContext::default())
    }

    /// Compile this definition into a pull query: no EMIT clause and, like
    /// pull queries against materialized views, no source pluralization.
    pub fn to_pull_query_string(&self) -> SquallResult<String> {
        let options = CompilerOptions {
            should_pluralize_from_item_name: false,
        };
        let generator = KsqlQueryGenerator::pull_query(options);

        generator.build_ksql(&self.source_name(), self.ops(), &mut QueryContext::default())
    }
}
