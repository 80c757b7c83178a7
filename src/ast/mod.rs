//! Query AST: operation chain, expressions, values, and window specs.

pub mod builders;
mod expr;
mod operators;
mod ops;
mod values;
mod windows;

pub use expr::{Expr, WindowBound};
pub use operators::{AutoOffsetReset, BinaryOp, JoinType};
pub use ops::{FromItem, JoinClause, QueryOp, StreamQuery};
pub use values::KsqlValue;
pub use windows::{Duration, OutputRefinement, TimeUnit, TimeWindows, WindowType};
