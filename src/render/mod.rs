//! Expression visitor framework and query generation.

mod binary;
mod joins;
mod query;
mod visitor;
mod windows;

#[cfg(test)]
mod tests;

pub use query::{CompilerOptions, KsqlQueryGenerator, QueryContext};
