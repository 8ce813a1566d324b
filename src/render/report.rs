//! Colored ownership tables for per-file and whole-run results.

use crate::render::palette::palette_color;
use crate::render::pie;
use crate::stats::{percentage, FileRecord, Totals};
use anyhow::Result;
use console::{style, Style, Term};

/// Swatch printed next to each author in the totals table.
const BLOCK: &str = "██";

/// Width of the author column.
const AUTHOR_WIDTH: usize = 20;

/// Dim `:: <path>` header, printed before the file is blamed so it is visible
/// even when blame fails on that file.
pub fn print_file_header(path: &std::path::Path) {
    println!("{}", style(format!(":: {}", path.display())).dim());
}

/// One row per author: identifier, share of this file's lines, line count.
/// A file with zero attributed lines prints no rows at all.
pub fn print_file_report(record: &FileRecord) {
    let total = record.line_count();
    for (author, count) in record.tally.sorted_entries() {
        println!("{}", author_row(author, percentage(count, total), count));
    }
}

/// Totals table plus the pie chart.
///
/// Each author row carries a swatch in its palette color, assigned by
/// descending-contribution rank (wrapping when authors outnumber colors).
/// When nothing was attributed at all, a notice replaces table and chart.
pub fn print_totals(term: &Term, totals: &Totals) -> Result<()> {
    println!();
    if totals.is_empty() {
        println!("No attributable lines found.");
        return Ok(());
    }

    println!("Total Contributions:");
    let grand_total = totals.total_lines();
    for (rank, (author, count)) in totals.tally().sorted_entries().into_iter().enumerate() {
        let color = palette_color(rank);
        println!(
            "{}\t{}",
            author_row(author, percentage(count, grand_total), count),
            Style::new().fg(color).bg(color).apply_to(BLOCK)
        );
    }

    pie::draw(term, &fractions_of(totals), pie::DEFAULT_RADIUS)
}

fn author_row(author: &str, percent: f64, count: u64) -> String {
    format!(
        "{}: {}\t{}",
        style(format!("{author:>AUTHOR_WIDTH$}")).cyan(),
        style(format!("{percent:>6.2}%")).green(),
        style(format!("{:>10}", format!("{count} line(s)"))).red()
    )
}

fn fractions_of(totals: &Totals) -> Vec<f64> {
    totals.proportions().into_iter().map(|(_, fraction)| fraction).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AuthorTally;
    use std::path::PathBuf;

    #[test]
    fn fractions_follow_contribution_rank() {
        let mut tally = AuthorTally::default();
        tally.add("alice", 3);
        tally.add("bob", 1);
        let mut totals = Totals::default();
        totals.absorb(&FileRecord::new(PathBuf::from("f"), tally));

        let fractions = fractions_of(&totals);
        assert_eq!(fractions, vec![0.75, 0.25]);
    }

    #[test]
    fn empty_totals_skip_table_and_pie() {
        let term = Term::stdout();
        let totals = Totals::default();
        // Must not attempt cursor math against an empty proportion vector.
        print_totals(&term, &totals).unwrap();
    }
}
