//! Terminal report tables and the ownership pie chart.

pub mod palette;
pub mod pie;
pub mod report;

pub use palette::{palette_color, PALETTE};
pub use report::{print_file_header, print_file_report, print_totals};
