//! The conversion pipeline and the services a presentation shell consumes.
//!
//! One call converts one file: decode the input bytes, apply the requested
//! cleaning operations in order, project columns, and encode into the target
//! format. Nothing is shared between invocations; errors are terminal for
//! the file being processed and never abort a batch.

mod convert;
mod error;
mod preview;

pub use convert::{ConversionOutput, convert, convert_between};
pub use error::ConvertError;
pub use preview::{ChartInput, ChartSeries, Preview, chart_input, preview};
