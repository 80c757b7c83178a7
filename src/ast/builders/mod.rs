//! Fluent builders over the query AST.

mod binary;
mod exprs;
mod query;

pub use exprs::{call, col, lit, null, qual, window_end, window_start};
