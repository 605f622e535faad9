//! Data type definitions for Oryx database.
//!
//! This module defines the supported data types that can be stored in the database.

/// Supported data types in Oryx database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// UTF-8 string
    String,
}

impl DataType {
    /// Returns whether this type can be used as an index key.
    pub fn is_indexable(&self) -> bool {
        matches!(
            self,
            DataType::Boolean
                | DataType::Int32
                | DataType::Int64
                | DataType::Float64
                | DataType::String
        )
    }
}
