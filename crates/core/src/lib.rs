//! Oryx Core - Core types and schema definitions for Oryx database.
//!
//! This crate provides the foundational types for the Oryx in-memory database:
//!
//! - `DataType`: Supported data types (Boolean, Int32, Int64, Float64, String)
//! - `Value`: Runtime values that can be stored in the database
//! - `schema`: Schema definitions (Column, Schema)
//! - `Error`: Error types for database operations
//!
//! # Example
//!
//! ```rust
//! use oryx_core::DataType;
//! use oryx_core::schema::{Column, Schema};
//!
//! let schema = Schema::new(vec![
//!     Column::new("id", DataType::Int64),
//!     Column::new("name", DataType::String),
//! ]);
//!
//! assert_eq!(schema.len(), 2);
//! assert_eq!(schema.column_index("name"), Some(1));
//! ```

#![no_std]

extern crate alloc;

mod error;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use types::DataType;
pub use value::Value;
