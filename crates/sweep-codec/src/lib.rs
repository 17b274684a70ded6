//! Tabular codecs: translate between byte buffers and [`Table`] values.
//!
//! Both directions go through the closed [`Format`] set; the cleaning and
//! conversion layers never touch file bytes directly.
//!
//! [`Table`]: sweep_model::Table
//! [`Format`]: sweep_model::Format

mod csv;
mod error;
mod xlsx;

pub use error::CodecError;

use sweep_model::{Format, Table};

/// Decode a byte buffer of the declared format into a table.
pub fn decode(bytes: &[u8], format: Format) -> Result<Table, CodecError> {
    match format {
        Format::Csv => csv::decode(bytes),
        Format::Xlsx => xlsx::decode(bytes),
    }
}

/// Encode a table into a byte buffer of the declared format.
pub fn encode(table: &Table, format: Format) -> Result<Vec<u8>, CodecError> {
    match format {
        Format::Csv => csv::encode(table),
        Format::Xlsx => xlsx::encode(table),
    }
}
