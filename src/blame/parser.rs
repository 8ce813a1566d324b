//! Streaming parser for `git blame --line-porcelain` output.

use crate::stats::AuthorTally;
use std::io::BufRead;

/// Porcelain marker for the author header of an attributed line. The trailing
/// space matters: it keeps `author-mail`, `author-time` and `author-tz`
/// headers from matching.
const AUTHOR_PREFIX: &str = "author ";

/// One-pass scan of a porcelain stream into an author tally.
///
/// Every line starting with `author ` attributes one source line to whatever
/// follows the prefix, taken verbatim (an empty identifier is counted too).
/// All other lines, including file content and the rest of the commit
/// metadata, are ignored.
pub fn parse_porcelain(reader: impl BufRead) -> std::io::Result<AuthorTally> {
    let mut tally = AuthorTally::default();
    for line in reader.lines() {
        let line = line?;
        if let Some(author) = line.strip_prefix(AUTHOR_PREFIX) {
            tally.record(author);
        }
    }
    Ok(tally)
}
