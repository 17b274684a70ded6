//! Shared infrastructure for the sweeper CLI binary.

pub mod logging;
