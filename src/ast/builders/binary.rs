//! Binary expression combinators.
//!
//! Small consuming methods so predicates read close to the statement they
//! produce: `col("Latitude").eq(lit("1")).or(col("Latitude").ne(lit("2")))`.

use crate::ast::{BinaryOp, Expr};

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

impl Expr {
    pub fn add(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Add, other.into())
    }

    pub fn sub(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Subtract, other.into())
    }

    pub fn mul(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Multiply, other.into())
    }

    pub fn div(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Divide, other.into())
    }

    pub fn rem(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Modulo, other.into())
    }

    pub fn and(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::And, other.into())
    }

    pub fn or(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Or, other.into())
    }

    pub fn eq(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::Equal, other.into())
    }

    pub fn ne(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::NotEqual, other.into())
    }

    pub fn lt(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::LessThan, other.into())
    }

    pub fn le(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::LessThanOrEqual, other.into())
    }

    pub fn gt(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::GreaterThan, other.into())
    }

    pub fn ge(self, other: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::GreaterThanOrEqual, other.into())
    }

    /// Array index access, rendered as `self[index]`.
    pub fn index(self, index: impl Into<Expr>) -> Expr {
        binary(self, BinaryOp::ArrayIndex, index.into())
    }
}
