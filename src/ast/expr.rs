//! Expression AST for projections, predicates, and key selectors.

use crate::ast::{BinaryOp, KsqlValue};
use serde::{Deserialize, Serialize};

/// The two reserved markers of a windowed aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowBound {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// All columns (*)
    Star,
    /// A column of the source item.
    Column(String),
    /// An alias-qualified column, used in join projections and conditions.
    Qualified { alias: String, name: String },
    /// A literal value.
    Constant(KsqlValue),
    /// An aliased expression (expr AS alias).
    Alias { expr: Box<Expr>, alias: String },
    /// Binary expression (left op right).
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Aggregation or scalar function call, e.g. COUNT(Message).
    Call { function: String, args: Vec<Expr> },
    /// WINDOWSTART / WINDOWEND.
    Bound(WindowBound),
}

impl Expr {
    /// Whether this node belongs to the binary-operator set. Operands that
    /// are themselves binary nodes get wrapped in parentheses when rendered.
    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary { .. })
    }

    /// Whether this node is a literal null.
    pub fn is_null_constant(&self) -> bool {
        matches!(self, Expr::Constant(value) if value.is_null())
    }

    /// Wrap this expression with an alias (expr AS alias).
    pub fn aliased(self, alias: impl Into<String>) -> Expr {
        Expr::Alias {
            expr: Box::new(self),
            alias: alias.into(),
        }
    }
}

impl From<&str> for Expr {
    /// Convert a string reference to a column expression.
    fn from(name: &str) -> Self {
        Expr::Column(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Column(name)
    }
}
