//! Decode -> clean -> project -> encode orchestration.

use std::collections::BTreeSet;

use tracing::{debug, info};

use sweep_clean::{fill_missing_with_mean, project_columns, remove_duplicates};
use sweep_model::{ConversionRequest, Operation};

use crate::error::ConvertError;

/// The encoded result of one conversion, ready for download or writing.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub bytes: Vec<u8>,
    /// Suffix the output filename should carry (`.csv` or `.xlsx`).
    pub filename_suffix: &'static str,
    /// MIME type for download offering.
    pub content_type: &'static str,
    /// Row count of the encoded table.
    pub rows: usize,
    /// Column count of the encoded table.
    pub columns: usize,
}

/// Convert one file according to a validated request.
///
/// Operations run in request order; imputed values participate in duplicate
/// equality, so the order is observable. Projection applies only when
/// `keep_columns` is non-empty.
pub fn convert(bytes: &[u8], request: &ConversionRequest) -> Result<ConversionOutput, ConvertError> {
    let mut table = sweep_codec::decode(bytes, request.source_format)?;
    debug!(
        rows = table.height(),
        columns = table.width(),
        source = %request.source_format,
        "decoded input"
    );

    for operation in &request.operations {
        table = match operation {
            Operation::RemoveDuplicates => remove_duplicates(&table)?,
            Operation::FillMissingWithMean => fill_missing_with_mean(&table)?,
        };
    }
    if !request.keep_columns.is_empty() {
        table = project_columns(&table, &request.keep_columns)?;
    }

    let rows = table.height();
    let columns = table.width();
    let encoded = sweep_codec::encode(&table, request.target_format)?;
    info!(
        rows,
        columns,
        target = %request.target_format,
        bytes = encoded.len(),
        "converted table"
    );
    Ok(ConversionOutput {
        bytes: encoded,
        filename_suffix: request.target_format.suffix(),
        content_type: request.target_format.content_type(),
        rows,
        columns,
    })
}

/// String-tag boundary of [`convert`].
///
/// Unknown tags fail with `UnsupportedFormat` naming the offending value,
/// before the input bytes are touched.
pub fn convert_between(
    bytes: &[u8],
    source_tag: &str,
    target_tag: &str,
    operations: Vec<Operation>,
    keep_columns: BTreeSet<String>,
) -> Result<ConversionOutput, ConvertError> {
    let request = ConversionRequest::from_tags(source_tag, target_tag)?
        .with_operations(operations)
        .with_keep_columns(keep_columns);
    convert(bytes, &request)
}
