//! Expression AST definitions.

mod expr;

pub use expr::{BinaryOp, ColumnRef, Expr, SortDirection};
