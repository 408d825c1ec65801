//! TypeScript DAO generation for daogen.
//!
//! Turns the columns of one MySQL table into a TypeScript data access
//! object: types are mapped with [`TypeScriptTypeMapper`], SQL and interface
//! fragments are built by [`assemble`], and the result is rendered through a
//! [`Template`].
//!
//! # Usage
//!
//! ```ignore
//! use daogen_codegen::{Generator, Template};
//! use daogen_core::{GenerationRequest, RawColumn};
//! use std::path::Path;
//!
//! let request = GenerationRequest::new("Users", "Jane Doe");
//! let generator = Generator::new(request, Template::builtin()?);
//! let columns = vec![RawColumn::new("ID", "int"), RawColumn::new("NAME", "varchar(50)")];
//!
//! // Render without writing
//! let preview = generator.preview(&columns)?;
//!
//! // Write output/Users.ts
//! let result = generator.generate(&columns, Path::new("output"))?;
//! ```

mod assembler;
mod generator;
mod template;
mod type_mapper;

pub use assembler::assemble;
pub use generator::{GenerateResult, Generator, PLACEHOLDERS, PreviewFile, UnmappedColumn};
pub use template::{BUILTIN_TEMPLATE, BUILTIN_TEMPLATE_NAME, Template, TemplateValues};
pub use type_mapper::{
    ColumnType, MYSQL_TO_TS, TypeMapper, TypeScriptTypeMapper, map_type, parse_column_type,
};
