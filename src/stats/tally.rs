//! Per-author line counts, per-file records, and the whole-run accumulator.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Mapping from author identifier to attributed line count.
///
/// The total line count is tracked alongside the per-author counts so it never
/// drifts from the sum of the entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AuthorTally {
    counts: BTreeMap<String, u64>,
    total: u64,
}

impl AuthorTally {
    /// Attribute one line to `author`. Empty or malformed identifiers are
    /// accepted as-is; blame output is not validated.
    pub fn record(&mut self, author: &str) {
        self.add(author, 1);
    }

    /// Attribute `lines` lines to `author`.
    pub fn add(&mut self, author: &str, lines: u64) {
        *self.counts.entry(author.to_string()).or_insert(0) += lines;
        self.total += lines;
    }

    /// Total attributed line count (the sum of all entries).
    pub fn total_lines(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn author_count(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(author, count)| (author.as_str(), *count))
    }

    /// Entries sorted by descending line count, ties broken by author name so
    /// reports are deterministic.
    pub fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// A fully-blamed file: its path and its author tally. Immutable once built;
/// folded into [`Totals`], printed, and discarded.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub tally: AuthorTally,
}

impl FileRecord {
    pub fn new(path: PathBuf, tally: AuthorTally) -> Self {
        Self { path, tally }
    }

    pub fn line_count(&self) -> u64 {
        self.tally.total_lines()
    }
}

/// Whole-run accumulator. This is an explicit value threaded through the
/// per-file loop and returned, never shared mutable state, so aggregation is
/// a plain fold: order of absorption does not affect the result.
#[derive(Debug, Default, Clone)]
pub struct Totals {
    tally: AuthorTally,
}

impl Totals {
    /// Fold one file's tally into the running totals.
    pub fn absorb(&mut self, record: &FileRecord) {
        for (author, count) in record.tally.iter() {
            self.tally.add(author, count);
        }
    }

    pub fn tally(&self) -> &AuthorTally {
        &self.tally
    }

    pub fn total_lines(&self) -> u64 {
        self.tally.total_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.tally.is_empty()
    }

    /// Proportion vector: (author, fraction-of-total) pairs in descending
    /// contribution order. Empty when no lines were attributed, so callers
    /// never divide by zero.
    pub fn proportions(&self) -> Vec<(String, f64)> {
        let total = self.tally.total_lines();
        if total == 0 {
            return Vec::new();
        }
        self.tally
            .sorted_entries()
            .into_iter()
            .map(|(author, count)| (author.to_string(), count as f64 / total as f64))
            .collect()
    }
}

/// Percentage of `count` out of `total`, with a zero denominator yielding
/// 0.0 instead of NaN (files with no attributed lines).
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(path: &str, entries: &[(&str, u64)]) -> FileRecord {
        let mut tally = AuthorTally::default();
        for (author, count) in entries {
            tally.add(author, *count);
        }
        FileRecord::new(PathBuf::from(path), tally)
    }

    #[test]
    fn tally_total_equals_sum_of_entries() {
        let mut tally = AuthorTally::default();
        for _ in 0..3 {
            tally.record("alice");
        }
        tally.record("bob");
        tally.record("");

        let sum: u64 = tally.iter().map(|(_, count)| count).sum();
        assert_eq!(tally.total_lines(), sum);
        assert_eq!(tally.total_lines(), 5);
        assert_eq!(tally.author_count(), 3);
    }

    #[test]
    fn single_file_percentages() {
        let rec = record("src/lib.rs", &[("alice", 3), ("bob", 1)]);
        assert_eq!(rec.line_count(), 4);

        let entries = rec.tally.sorted_entries();
        assert_eq!(entries, vec![("alice", 3), ("bob", 1)]);
        assert_eq!(percentage(entries[0].1, rec.line_count()), 75.0);
        assert_eq!(percentage(entries[1].1, rec.line_count()), 25.0);
    }

    #[test]
    fn sorted_entries_descend_by_count() {
        let rec = record("f", &[("carol", 2), ("alice", 7), ("bob", 2), ("dave", 9)]);
        let entries = rec.tally.sorted_entries();
        for pair in entries.windows(2) {
            assert!(pair[0].1 >= pair[1].1, "out of order: {:?}", entries);
        }
        // Ties resolve by name.
        assert_eq!(entries[2], ("bob", 2));
        assert_eq!(entries[3], ("carol", 2));
    }

    #[test]
    fn totals_fold_two_files() {
        let file1 = record("file1", &[("alice", 2)]);
        let file2 = record("file2", &[("bob", 2), ("alice", 1)]);

        let mut totals = Totals::default();
        totals.absorb(&file1);
        totals.absorb(&file2);

        assert_eq!(totals.total_lines(), 5);
        assert_eq!(totals.tally().sorted_entries(), vec![("alice", 3), ("bob", 2)]);
        assert_eq!(percentage(3, totals.total_lines()), 60.0);
        assert_eq!(percentage(2, totals.total_lines()), 40.0);
    }

    #[test]
    fn totals_independent_of_fold_order() {
        let records = [
            record("a", &[("alice", 4), ("bob", 1)]),
            record("b", &[("bob", 6)]),
            record("c", &[("carol", 2), ("alice", 2)]),
        ];

        let mut forward = Totals::default();
        for rec in &records {
            forward.absorb(rec);
        }
        let mut reverse = Totals::default();
        for rec in records.iter().rev() {
            reverse.absorb(rec);
        }

        assert_eq!(forward.tally(), reverse.tally());
    }

    #[test]
    fn file_percentages_sum_to_one_hundred() {
        let rec = record("f", &[("alice", 3), ("bob", 2), ("carol", 2)]);
        let total = rec.line_count();
        let sum: f64 = rec.tally.iter().map(|(_, count)| percentage(count, total)).sum();
        assert!((sum - 100.0).abs() < 1e-9, "got {sum}");
    }

    #[test]
    fn proportions_descend_and_sum_to_one() {
        let mut totals = Totals::default();
        totals.absorb(&record("f", &[("alice", 6), ("bob", 3), ("carol", 1)]));

        let proportions = totals.proportions();
        assert_eq!(proportions.len(), 3);
        assert_eq!(proportions[0].0, "alice");
        for pair in proportions.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        let sum: f64 = proportions.iter().map(|(_, f)| f).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_line_denominator_is_guarded() {
        assert_eq!(percentage(0, 0), 0.0);
        let totals = Totals::default();
        assert!(totals.proportions().is_empty());
    }
}
