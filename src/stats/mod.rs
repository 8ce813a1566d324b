//! Authorship tallies and aggregation.

pub mod tally;

pub use tally::{percentage, AuthorTally, FileRecord, Totals};
