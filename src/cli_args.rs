//! Command-line argument structures.
//!
//! `MergeArgs` doubles as the configuration schema: the same fields are read
//! from configuration files and `RULE_MERGE_*` variables by
//! [`crate::config::load`], so every field is optional and unset fields are
//! left out when serialised.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Optional overrides for the rule list locations.
///
/// With nothing set the default layout beneath the install root is used.
#[derive(Parser, Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "rule-merge",
    about = "Merge a secondary rule list into the target rule list"
)]
pub struct MergeArgs {
    /// Directory holding the `rule/` folder; defaults to the install root
    #[arg(long, value_name = "DIR")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Target list, rewritten with the merged rules
    #[arg(long, value_name = "FILE")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<PathBuf>,
    /// Merge-source list, read only
    #[arg(long, value_name = "FILE")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge: Option<PathBuf>,
}
