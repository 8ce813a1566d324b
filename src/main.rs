//! git-ownership: per-author line ownership reports for git repositories
//!
//! Runs `git blame` across a source tree, aggregates authorship line counts,
//! and renders per-file tables, overall totals, and an ASCII pie chart.

use anyhow::Result;

fn main() -> Result<()> {
    git_ownership::cli::run()
}
