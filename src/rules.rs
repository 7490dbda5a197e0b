//! Rule list parsing and serialisation.
//!
//! A rule list is a UTF-8 text file holding one rule per line. Rules are
//! opaque strings: the only normalisation applied is trimming surrounding
//! whitespace, and blank lines are discarded. Lines end at `\n`, `\r` or
//! `\r\n`; the ASCII separator controls `\x1c`..=`\x1f` count as
//! whitespace alongside Unicode `White_Space`. The in-memory [`RuleSet`] keeps
//! rules unique and in code point order so rendering is deterministic.

use crate::error::MergeError;
use log::debug;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Unique rules ordered by code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: BTreeSet<String>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from the lines of `text`.
    ///
    /// Each line is trimmed; lines that are empty afterwards are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_merge::RuleSet;
    ///
    /// let rules = RuleSet::parse("b\n  a \n\n a\n");
    /// assert_eq!(rules.iter().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        // `\r\n` yields an empty piece between the two, dropped as blank.
        text.split(['\n', '\r']).collect()
    }

    /// Read and parse the rule list at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Read`] when the file cannot be opened, read, or
    /// is not valid UTF-8.
    pub fn read(path: &Path) -> Result<Self, MergeError> {
        let text = fs::read_to_string(path).map_err(|source| MergeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::parse(&text);
        debug!("read {} rules from {}", rules.len(), path.display());
        Ok(rules)
    }

    /// Insert a single rule, returning `true` if it was not present.
    ///
    /// The value is trimmed first; blank values are ignored.
    pub fn insert(&mut self, rule: &str) -> bool {
        let rule = rule.trim_matches(is_padding);
        if rule.is_empty() {
            return false;
        }
        self.rules.insert(rule.to_owned())
    }

    /// Set union of `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            rules: self.rules.union(&other.rules).cloned().collect(),
        }
    }

    /// Number of rules in `self` that are absent from `other`.
    #[must_use]
    pub fn difference_len(&self, other: &Self) -> usize {
        self.rules.difference(&other.rules).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over the rules in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(String::as_str)
    }

    /// Serialise the rules to `out`, one per line.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the writer.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for rule in &self.rules {
            writeln!(out, "{rule}")?;
        }
        out.flush()
    }

    /// Truncate `path` and write the rules into it.
    ///
    /// The write happens in place; a failure part way through leaves the file
    /// truncated.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Write`] when the file cannot be created or
    /// written.
    pub fn write(&self, path: &Path) -> Result<(), MergeError> {
        let to_err = |source| MergeError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(to_err)?;
        self.write_to(BufWriter::new(file)).map_err(to_err)?;
        debug!("wrote {} rules to {}", self.len(), path.display());
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for RuleSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> Extend<&'a str> for RuleSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for rule in iter {
            self.insert(rule);
        }
    }
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
