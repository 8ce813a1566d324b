//! Running `git blame` and parsing its porcelain output.

pub mod invoker;
pub mod parser;

pub use invoker::{blame_file, BlameError};
pub use parser::parse_porcelain;
