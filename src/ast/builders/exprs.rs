//! Expression builders.

use crate::ast::{Expr, KsqlValue, WindowBound};

/// Reference a column of the source item.
pub fn col(name: impl Into<String>) -> Expr {
    Expr::Column(name.into())
}

/// Reference an alias-qualified column, e.g. `qual("M", "Title")` for M.Title.
pub fn qual(alias: impl Into<String>, name: impl Into<String>) -> Expr {
    Expr::Qualified {
        alias: alias.into(),
        name: name.into(),
    }
}

/// Create a literal expression from any supported value.
pub fn lit(value: impl Into<KsqlValue>) -> Expr {
    Expr::Constant(value.into())
}

/// Create a NULL literal.
pub fn null() -> Expr {
    Expr::Constant(KsqlValue::Null)
}

/// Create a function call expression, e.g. `call("COUNT", [col("Message")])`.
pub fn call(function: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Call {
        function: function.into(),
        args: args.into_iter().collect(),
    }
}

/// The reserved WINDOWSTART marker.
pub fn window_start() -> Expr {
    Expr::Bound(WindowBound::Start)
}

/// The reserved WINDOWEND marker.
pub fn window_end() -> Expr {
    Expr::Bound(WindowBound::End)
}
