//! Operator and option enums used by the query AST.

use serde::{Deserialize, Serialize};

/// The fixed binary-operator set.
///
/// Array indexing is part of the set so that operand parenthesization treats
/// it like any other binary node, but it renders as `left[right]` instead of
/// an infix token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // arithmetic
    Add,
    Subtract,
    Divide,
    Multiply,
    Modulo,
    // logical
    And,
    Or,
    // comparison
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    ArrayIndex,
}

/// Join kinds supported by the join-rendering path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    FullOuter,
}

impl std::fmt::Display for JoinType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinType::Inner => write!(f, "INNER JOIN"),
            JoinType::Left => write!(f, "LEFT JOIN"),
            JoinType::Right => write!(f, "RIGHT JOIN"),
            JoinType::FullOuter => write!(f, "FULL OUTER JOIN"),
        }
    }
}

/// Consumer offset reset policy attached to a compiled query.
///
/// Not rendered into the statement text; surfaced on the query context so the
/// executing collaborator can pass it along as a query property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoOffsetReset {
    Earliest,
    Latest,
}

impl std::fmt::Display for AutoOffsetReset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AutoOffsetReset::Earliest => write!(f, "earliest"),
            AutoOffsetReset::Latest => write!(f, "latest"),
        }
    }
}
