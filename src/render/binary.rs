//! Binary-operator rendering.
//!
//! Precedence is made explicit in the text: an operand is wrapped in
//! parentheses iff that operand is itself a binary node. The generator never
//! assumes the target engine's precedence matches the builder's.

use crate::ast::{BinaryOp, Expr};
use crate::error::{SquallError, SquallResult};
use crate::render::visitor::KsqlVisitor;

impl KsqlVisitor<'_> {
    pub(crate) fn visit_binary(&mut self, expr: &Expr) -> SquallResult<()> {
        let Expr::Binary { op, left, right } = expr else {
            return self.visit(expr);
        };

        let wrap_left = left.is_binary();

        if wrap_left {
            self.append("(");
        }
        self.visit(left)?;
        if wrap_left {
            self.append(")");
        }

        if *op == BinaryOp::ArrayIndex {
            self.append("[");
            self.visit(right)?;
            self.append("]");

            return Ok(());
        }

        let token = infix_token(*op, right)?;
        self.append(" ");
        self.append(token);
        self.append(" ");

        let wrap_right = right.is_binary();

        if wrap_right {
            self.append("(");
        }
        self.visit(right)?;
        if wrap_right {
            self.append(")");
        }

        Ok(())
    }
}

/// Infix token for a binary operator. Null comparisons rewrite to IS / IS
/// NOT. Array indexing has no infix token; reaching it here is an error.
fn infix_token(op: BinaryOp, right: &Expr) -> SquallResult<&'static str> {
    let token = match op {
        BinaryOp::Add => "+",
        BinaryOp::Subtract => "-",
        BinaryOp::Divide => "/",
        BinaryOp::Multiply => "*",
        BinaryOp::Modulo => "%",
        BinaryOp::And => "AND",
        BinaryOp::Or => "OR",
        BinaryOp::Equal if right.is_null_constant() => "IS",
        BinaryOp::Equal => "=",
        BinaryOp::NotEqual if right.is_null_constant() => "IS NOT",
        BinaryOp::NotEqual => "!=",
        BinaryOp::LessThan => "<",
        BinaryOp::LessThanOrEqual => "<=",
        BinaryOp::GreaterThan => ">",
        BinaryOp::GreaterThanOrEqual => ">=",
        BinaryOp::ArrayIndex => {
            return Err(SquallError::unsupported_operator("[]", "infix position"));
        }
    };

    Ok(token)
}
