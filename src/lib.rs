//! Per-author line ownership statistics from `git blame`.
//!
//! The pipeline is a single sequential pass: discover files, blame each one,
//! fold the per-file tallies into a total, render tables and a pie chart.

pub mod blame;
pub mod cli;
pub mod render;
pub mod scan;
pub mod stats;
