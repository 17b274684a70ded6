//! Supported file formats and boundary validation.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A format tag that is not one of the supported formats.
///
/// Carries the offending value so callers can surface it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported format: '{0}'")]
pub struct UnsupportedFormat(pub String);

/// The closed set of tabular file formats the toolkit understands.
///
/// Unknown tags are rejected with [`UnsupportedFormat`] when parsing rather
/// than dispatched on dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Comma-delimited text with a header row of column names.
    Csv,
    /// Single-sheet OOXML spreadsheet with a header row of column names.
    Xlsx,
}

impl Format {
    /// All supported formats, in display order.
    pub const ALL: [Self; 2] = [Self::Csv, Self::Xlsx];

    /// Filename suffix for outputs of this format.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Csv => ".csv",
            Self::Xlsx => ".xlsx",
        }
    }

    /// MIME content type for outputs of this format.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Map a file's extension to its source format.
    ///
    /// This is the shell-side counterpart of tag parsing: input files
    /// declare their format through their extension.
    pub fn from_extension(path: &Path) -> Result<Self, UnsupportedFormat> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl FromStr for Format {
    type Err = UnsupportedFormat;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" | "excel" => Ok(Self::Xlsx),
            _ => Err(UnsupportedFormat(tag.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Xlsx => write!(f, "xlsx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("csv".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("CSV".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("xlsx".parse::<Format>().unwrap(), Format::Xlsx);
        assert_eq!("Excel".parse::<Format>().unwrap(), Format::Xlsx);
    }

    #[test]
    fn test_parse_unknown_tag_names_value() {
        let err = "json".parse::<Format>().unwrap_err();
        assert_eq!(err, UnsupportedFormat("json".to_string()));
        assert!(err.to_string().contains("json"));
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(
            Format::from_extension(&PathBuf::from("data.csv")).unwrap(),
            Format::Csv
        );
        assert_eq!(
            Format::from_extension(&PathBuf::from("report.XLSX")).unwrap(),
            Format::Xlsx
        );
        assert!(Format::from_extension(&PathBuf::from("notes.txt")).is_err());
        assert!(Format::from_extension(&PathBuf::from("noextension")).is_err());
    }

    #[test]
    fn test_suffix_and_content_type() {
        assert_eq!(Format::Csv.suffix(), ".csv");
        assert_eq!(Format::Xlsx.suffix(), ".xlsx");
        assert_eq!(Format::Csv.content_type(), "text/csv");
        assert!(Format::Xlsx.content_type().contains("spreadsheetml"));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Format::Xlsx).unwrap();
        assert_eq!(json, "\"xlsx\"");
        let back: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Format::Xlsx);
    }
}
