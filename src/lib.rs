//! Merge line-oriented rule lists.
//!
//! A target list and a merge-source list are read, their trimmed non-empty
//! lines are unioned, and the target is rewritten sorted with duplicates
//! removed. The binary wires this up to the default install layout; the
//! library exposes the pieces for integration tests.

pub mod cli_args;
pub mod config;
pub mod error;
pub mod merger;
pub mod rules;

pub use cli_args::MergeArgs;
pub use config::RulePaths;
pub use error::MergeError;
pub use merger::{MergeSummary, merge};
pub use rules::RuleSet;
