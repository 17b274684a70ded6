//! The cleaning engine: pure, stateless transformations over a [`Table`].
//!
//! Every operation takes a table by reference and returns a new table; no
//! table is mutated in place. On well-formed tables the operations do not
//! fail; frame-level failures surface as [`CleanError`].
//!
//! [`Table`]: sweep_model::Table

mod dedupe;
mod error;
mod impute;
mod project;

pub use dedupe::remove_duplicates;
pub use error::CleanError;
pub use impute::fill_missing_with_mean;
pub use project::project_columns;
