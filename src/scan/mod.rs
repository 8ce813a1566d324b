//! File discovery under the repository root.

pub mod walker;

pub use walker::discover_files;
