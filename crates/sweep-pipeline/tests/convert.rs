//! End-to-end conversion tests.

use std::collections::BTreeSet;

use sweep_pipeline::{ConvertError, convert, convert_between};
use sweep_model::{ConversionRequest, Format, Operation};

const INPUT: &[u8] = b"name,age\nAlice,30\nBob,\nAlice,30\n";

fn keep(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn test_dedupe_then_mean_fill() {
    let request = ConversionRequest::new(Format::Csv, Format::Csv)
        .with_operations([Operation::RemoveDuplicates, Operation::FillMissingWithMean]);
    let output = convert(INPUT, &request).unwrap();
    assert_eq!(output.rows, 2);
    assert_eq!(output.filename_suffix, ".csv");
    assert_eq!(output.content_type, "text/csv");

    // The duplicate Alice row goes first, so the only remaining age is 30
    // and Bob's missing age is filled with it.
    let table = sweep_codec::decode(&output.bytes, Format::Csv).unwrap();
    assert_eq!(table.cell_text("name", 0), "Alice");
    assert_eq!(table.cell_number("age", 0), Some(30.0));
    assert_eq!(table.cell_text("name", 1), "Bob");
    assert_eq!(table.cell_number("age", 1), Some(30.0));
}

#[test]
fn test_operation_order_is_observable() {
    // Filling first makes the two Alice rows identical either way here, but
    // dedupe-then-fill and fill-then-dedupe disagree on an input where the
    // imputed mean changes: with rows (a,1), (a,missing), (a,1), filling
    // first turns row 2 into (a,1) and dedupe keeps one row; deduping first
    // keeps (a,1) and (a,missing) and then fills the latter with 1.
    let input: &[u8] = b"name,age\na,1\na,\na,1\n";

    let fill_first = ConversionRequest::new(Format::Csv, Format::Csv)
        .with_operations([Operation::FillMissingWithMean, Operation::RemoveDuplicates]);
    let output = convert(input, &fill_first).unwrap();
    assert_eq!(output.rows, 1);

    let dedupe_first = ConversionRequest::new(Format::Csv, Format::Csv)
        .with_operations([Operation::RemoveDuplicates, Operation::FillMissingWithMean]);
    let output = convert(input, &dedupe_first).unwrap();
    assert_eq!(output.rows, 2);
}

#[test]
fn test_keep_columns_projects_after_cleaning() {
    let request =
        ConversionRequest::new(Format::Csv, Format::Csv).with_keep_columns(["age", "name"]);
    let output = convert(INPUT, &request).unwrap();
    assert_eq!(output.columns, 2);

    let request = ConversionRequest::new(Format::Csv, Format::Csv).with_keep_columns(["name"]);
    let output = convert(INPUT, &request).unwrap();
    assert_eq!(output.columns, 1);
    let table = sweep_codec::decode(&output.bytes, Format::Csv).unwrap();
    assert_eq!(table.column_names(), vec!["name"]);
}

#[test]
fn test_csv_to_xlsx() {
    let request = ConversionRequest::new(Format::Csv, Format::Xlsx);
    let output = convert(INPUT, &request).unwrap();
    assert_eq!(output.filename_suffix, ".xlsx");
    assert!(output.content_type.contains("spreadsheetml"));

    let table = sweep_codec::decode(&output.bytes, Format::Xlsx).unwrap();
    assert_eq!(table.height(), 3);
    assert_eq!(table.cell_number("age", 1), None);
}

#[test]
fn test_unsupported_source_format_names_the_tag() {
    let err = convert_between(INPUT, "json", "csv", Vec::new(), BTreeSet::new()).unwrap_err();
    match err {
        ConvertError::UnsupportedFormat(inner) => assert!(inner.to_string().contains("json")),
        other => panic!("expected UnsupportedFormat, got {other}"),
    }
}

#[test]
fn test_malformed_input_is_a_decode_error() {
    let err = convert_between(b"", "csv", "csv", Vec::new(), BTreeSet::new()).unwrap_err();
    assert!(matches!(err, ConvertError::Codec(_)));
}

#[test]
fn test_projection_keeps_unknown_names_silent() {
    let output = convert_between(
        INPUT,
        "csv",
        "csv",
        Vec::new(),
        keep(&["name", "not_a_column"]),
    )
    .unwrap();
    assert_eq!(output.columns, 1);
}
