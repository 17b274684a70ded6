//! Core data model for the tabular cleaning-and-conversion toolkit.
//!
//! This crate defines the types shared by every other crate in the
//! workspace:
//!
//! - [`Table`]: an immutable, in-memory table with `Numeric`/`Text` columns
//!   and explicit missing cells
//! - [`Format`]: the closed set of supported file formats, validated at the
//!   boundary
//! - [`ConversionRequest`] and [`Operation`]: the request-scoped parameters
//!   of a single conversion

mod format;
mod request;
mod table;
mod value;

pub use format::{Format, UnsupportedFormat};
pub use request::{ConversionRequest, Operation};
pub use table::{ColumnKind, ColumnSpec, Table, TableError};
pub use value::{any_to_f64, any_to_string, format_numeric, parse_f64};
