//! Oryx Query - Query planning layer for Oryx in-memory database.
//!
//! This crate provides the query planning infrastructure:
//!
//! - `ast`: Expression AST definitions
//! - `catalog`: Table and index metadata
//! - `plan`: Query plan node model
//! - `optimizer`: Plan rewrite passes

#![no_std]

extern crate alloc;

pub mod ast;
pub mod catalog;
pub mod optimizer;
pub mod plan;
