//! Request-scoped parameters of a single conversion.
//!
//! Everything that shapes one conversion travels as an explicit value
//! passed into the pipeline; nothing is shared across files or invocations.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::format::{Format, UnsupportedFormat};

/// A cleaning operation, applied in caller-supplied order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Keep only the first occurrence of each distinct row.
    RemoveDuplicates,
    /// Replace missing numeric cells with the column mean.
    FillMissingWithMean,
}

/// Everything the pipeline needs to convert one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub source_format: Format,
    pub target_format: Format,
    /// Operations in application order. Order matters: imputed values
    /// participate in duplicate equality.
    pub operations: Vec<Operation>,
    /// Columns to keep after cleaning; empty means keep all.
    pub keep_columns: BTreeSet<String>,
}

impl ConversionRequest {
    pub fn new(source_format: Format, target_format: Format) -> Self {
        Self {
            source_format,
            target_format,
            operations: Vec::new(),
            keep_columns: BTreeSet::new(),
        }
    }

    /// Validated boundary for string format tags.
    pub fn from_tags(source_tag: &str, target_tag: &str) -> Result<Self, UnsupportedFormat> {
        Ok(Self::new(source_tag.parse()?, target_tag.parse()?))
    }

    pub fn with_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    pub fn with_keep_columns(
        mut self,
        keep_columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.keep_columns
            .extend(keep_columns.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tags() {
        let request = ConversionRequest::from_tags("csv", "excel").unwrap();
        assert_eq!(request.source_format, Format::Csv);
        assert_eq!(request.target_format, Format::Xlsx);
        assert!(request.operations.is_empty());
        assert!(request.keep_columns.is_empty());
    }

    #[test]
    fn test_from_tags_rejects_unknown_source() {
        let err = ConversionRequest::from_tags("json", "csv").unwrap_err();
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn test_from_tags_rejects_unknown_target() {
        let err = ConversionRequest::from_tags("csv", "parquet").unwrap_err();
        assert!(err.to_string().contains("parquet"));
    }

    #[test]
    fn test_builders() {
        let request = ConversionRequest::new(Format::Csv, Format::Csv)
            .with_operations([Operation::FillMissingWithMean, Operation::RemoveDuplicates])
            .with_keep_columns(["b", "a"]);
        assert_eq!(
            request.operations,
            vec![Operation::FillMissingWithMean, Operation::RemoveDuplicates]
        );
        assert_eq!(
            request.keep_columns,
            BTreeSet::from(["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let request = ConversionRequest::new(Format::Csv, Format::Xlsx)
            .with_operations([Operation::RemoveDuplicates]);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("remove-duplicates"));
        let back: ConversionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
