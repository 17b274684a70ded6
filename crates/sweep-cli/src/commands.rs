//! Subcommand implementations.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use sweep_model::{ConversionRequest, Format, Operation};
use sweep_pipeline::{chart_input, preview};

use crate::cli::{ConvertArgs, PreviewArgs};
use crate::render::{print_chart, print_formats, print_preview};
use crate::types::{BatchResult, FileSummary};

/// Process each file independently; a failure on one file is recorded and
/// the batch continues.
pub fn run_convert(args: &ConvertArgs) -> BatchResult {
    let mut batch = BatchResult::default();
    let mut outputs = BTreeSet::new();
    for path in &args.files {
        match convert_file(path, args) {
            Ok(summary) => {
                if let Some(out_path) = &summary.output
                    && !outputs.insert(out_path.clone())
                {
                    warn!(
                        file = %out_path.display(),
                        "multiple inputs map to the same output path"
                    );
                }
                batch.files.push(summary);
            }
            Err(error) => {
                warn!(file = %path.display(), %error, "conversion failed");
                batch.files.push(FileSummary::failed(path.clone(), format!("{error:#}")));
            }
        }
    }
    batch
}

fn convert_file(path: &Path, args: &ConvertArgs) -> Result<FileSummary> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let source = match args.from {
        Some(format) => format.into(),
        None => Format::from_extension(path)?,
    };
    let request = ConversionRequest::new(source, args.to.into())
        .with_operations(args.apply.iter().copied().map(Operation::from))
        .with_keep_columns(args.keep_columns.iter().cloned());

    let output = sweep_pipeline::convert(&bytes, &request)?;
    let out_path = output_path(path, args.output_dir.as_deref(), output.filename_suffix);
    if out_path.as_path() == path {
        bail!(
            "output path {} would overwrite the input; use --output-dir",
            out_path.display()
        );
    }
    if !args.dry_run {
        if let Some(dir) = args.output_dir.as_deref() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        fs::write(&out_path, &output.bytes)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        info!(file = %out_path.display(), bytes = output.bytes.len(), "wrote output");
    }
    Ok(FileSummary {
        input: path.to_path_buf(),
        output: Some(out_path),
        rows: output.rows,
        columns: output.columns,
        written: !args.dry_run,
        error: None,
    })
}

/// Replace the input's extension with the target suffix, optionally moving
/// the file into the output directory.
fn output_path(input: &Path, output_dir: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(OsStr::to_str).unwrap_or("output");
    let file_name = format!("{stem}{suffix}");
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let source = match args.from {
        Some(format) => format.into(),
        None => Format::from_extension(&args.file)?,
    };
    let table = sweep_codec::decode(&bytes, source)?;
    print_preview(&args.file, bytes.len(), &preview(&table, args.rows));
    if args.chart {
        match chart_input(&table) {
            Some(chart) => print_chart(&chart),
            None => println!("No numeric columns to chart."),
        }
    }
    Ok(())
}

pub fn run_formats() {
    print_formats();
}
