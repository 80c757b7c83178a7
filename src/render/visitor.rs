//! Generic expression visitor: renders AST nodes into QL tokens.

use crate::ast::Expr;
use crate::error::SquallResult;
use crate::render::windows::bound_token;
use crate::statements::literals::{ValueFormatters, serialize_value};

/// Walks one expression tree at a time and appends QL fragments to a shared
/// buffer. Binary-operator rendering lives in [`crate::render::binary`].
pub(crate) struct KsqlVisitor<'a> {
    buffer: &'a mut String,
}

impl<'a> KsqlVisitor<'a> {
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }

    pub fn append(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
    }

    pub fn visit(&mut self, expr: &Expr) -> SquallResult<()> {
        match expr {
            Expr::Star => self.append("*"),
            Expr::Column(name) => self.append(name),
            Expr::Qualified { alias, name } => {
                self.append(alias);
                self.append(".");
                self.append(name);
            }
            Expr::Constant(value) => {
                let literal = serialize_value(value, &ValueFormatters::default())?;
                self.append(&literal);
            }
            Expr::Alias { expr, alias } => {
                self.visit(expr)?;
                self.append(" AS ");
                self.append(alias);
            }
            Expr::Binary { .. } => self.visit_binary(expr)?,
            Expr::Call { function, args } => {
                self.append(&function.to_uppercase());
                self.append("(");
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.append(", ");
                    }
                    self.visit_function_arg(arg)?;
                }
                self.append(")");
            }
            Expr::Bound(bound) => self.append(bound_token(*bound)),
        }

        Ok(())
    }

    /// Render a comma-separated projection list.
    pub fn visit_projection(&mut self, exprs: &[Expr]) -> SquallResult<()> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.append(", ");
            }
            self.visit(expr)?;
        }

        Ok(())
    }

    /// Lambda-scoped rendering for aggregation and function arguments:
    /// member access resolves against the lambda parameter, so the member
    /// name renders on its own.
    fn visit_function_arg(&mut self, expr: &Expr) -> SquallResult<()> {
        match expr {
            Expr::Column(name) => {
                self.append(name);
                Ok(())
            }
            other => self.visit(other),
        }
    }
}
