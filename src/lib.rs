//! Statement compiler for SQL-like streaming queries.
//!
//! Build queries as typed AST, not strings, and compile them to statement
//! text. Entity schemas compile to CREATE STREAM/TABLE statements, instances
//! to INSERT statements.
//!
//! ```ignore
//! use squall::ast::builders::{col, lit};
//! use squall::ast::StreamQuery;
//!
//! let ksql = StreamQuery::<Location>::new()
//!     .where_(col("Latitude").eq(lit("1")))
//!     .take(2)
//!     .to_query_string()?;
//! ```

pub mod ast;
pub mod error;
pub mod pluralize;
pub mod render;
pub mod row;
pub mod schema;
pub mod statements;

pub use ast::StreamQuery;
pub use error::{SquallError, SquallResult};
pub use render::{CompilerOptions, KsqlQueryGenerator, QueryContext};

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::render::{CompilerOptions, KsqlQueryGenerator, QueryContext};
    pub use crate::schema::{EntitySchema, FieldSchema, KsqlEntity, KsqlType};
    pub use crate::statements::{
        CreationType, EntityCreationMetadata, InsertProperties, KsqlEntityType,
        SerializationFormat, StatementContext,
    };
}
