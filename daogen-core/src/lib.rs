//! Core types and utilities for the daogen DAO generator.
//!
//! This crate holds the pieces shared by every stage of a generation run:
//! the column model, the name transformer, the output file writer and the
//! error taxonomy.

mod column;
mod date;
mod error;
mod file;
mod naming;

pub use column::{ColumnDescriptor, GenerationRequest, OutputFragments, RawColumn};
pub use date::{format_date, today};
pub use error::{Error, Result, Stage};
pub use file::{File, WriteResult};
pub use naming::{table_alias, to_camel_case};
