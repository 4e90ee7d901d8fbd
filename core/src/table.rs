//! Caller-level matching loop.
//!
//! A [`FlagTable`] is an ordered list of [`FlagSpec`]s that the caller is
//! willing to accept. It runs the usual "try each flag in turn, complain if
//! none fits" loop on top of [`ArgScanner::try_match`] and collects the
//! results into [`ParsedArgs`]. Specs are not validated up front; they are
//! tried in order, one at a time, exactly as a hand-written loop would.
//!
//! Results are keyed by canonical name. If two specs share a name, the
//! first one to match fixes the entry's kind: a later boolean match adds
//! nothing to a valued entry, and a later valued match only bumps the count
//! of a boolean entry (its value is not kept).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, UsageError};
use crate::scanner::ArgScanner;
use crate::types::{FlagSpec, MatchOutcome};

/// Ordered set of flags accepted by a command.
///
/// # Examples
///
/// ```
/// use argscan_core::{ArgScanner, FlagSpec, FlagTable};
///
/// let table = FlagTable::new()
///     .with_flag(FlagSpec::with_value("foo").with_short('f').with_alias("foozie"))
///     .with_flag(FlagSpec::boolean("bar").with_short('b'));
///
/// let argv = ["exe", "--foozie", "foot", "-b", "file.txt"];
/// let parsed = table.parse(&mut ArgScanner::new(&argv))?;
/// assert_eq!(parsed.value("foo"), Some("foot"));
/// assert!(parsed.is_set("bar"));
/// assert_eq!(parsed.positionals(), ["file.txt"]);
/// # Ok::<(), argscan_core::UsageError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTable {
    /// Flags in the order they are tried.
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl FlagTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a flag.
    pub fn with_flag(mut self, spec: FlagSpec) -> Self {
        self.flags.push(spec);
        self
    }

    /// Finds a flag by its canonical name.
    pub fn find(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|spec| spec.name == name)
    }

    /// Matches the current token against every flag in order.
    ///
    /// Returns the first flag that matched along with its captured value, or
    /// `None` once the scanner has left flag mode.
    ///
    /// # Errors
    ///
    /// Propagates [`ArgScanner::try_match`] errors. A `-name` token is
    /// [`UsageError::MalformedShortFlag`] even when the table is empty.
    /// Returns [`UsageError::UnrecognizedToken`] if the current token is
    /// still flag-shaped but no flag accepted it. In both cases the token is
    /// left unconsumed.
    pub fn match_next<'a, S: AsRef<str>>(
        &self,
        scanner: &mut ArgScanner<'a, S>,
    ) -> Result<Option<(&FlagSpec, Option<&'a str>)>> {
        for spec in &self.flags {
            if let MatchOutcome::Matched { value } = scanner.try_match(spec)? {
                return Ok(Some((spec, value)));
            }
        }
        if !scanner.could_be_flag() {
            return Ok(None);
        }
        scanner.reject_malformed()?;
        let Some(token) = scanner.current_token() else {
            return Ok(None);
        };
        Err(UsageError::UnrecognizedToken {
            token: token.to_string(),
        })
    }

    /// Scans all flags and then every positional into `parsed`.
    ///
    /// Flags recorded before an error stay in `parsed`; scanning stops at the
    /// error.
    ///
    /// # Errors
    ///
    /// See [`match_next`](Self::match_next).
    pub fn parse_into<'a, S: AsRef<str>>(
        &self,
        scanner: &mut ArgScanner<'a, S>,
        parsed: &mut ParsedArgs<'a>,
    ) -> Result<()> {
        while let Some((spec, value)) = self.match_next(scanner)? {
            parsed.record(spec, value);
        }
        parsed.positionals.extend(scanner.positionals());
        Ok(())
    }

    /// Convenience wrapper around [`parse_into`](Self::parse_into).
    ///
    /// # Errors
    ///
    /// See [`match_next`](Self::match_next).
    pub fn parse<'a, S: AsRef<str>>(
        &self,
        scanner: &mut ArgScanner<'a, S>,
    ) -> Result<ParsedArgs<'a>> {
        let mut parsed = ParsedArgs::default();
        self.parse_into(scanner, &mut parsed)?;
        Ok(parsed)
    }
}

/// Occurrences of one flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FlagOccurrences<'a> {
    /// A boolean flag, with the number of times it appeared.
    Switch(usize),
    /// A valued flag, with every value in order.
    Values(Vec<&'a str>),
}

/// Everything a [`FlagTable`] scan produced.
///
/// Flags are keyed by canonical name, whichever alias or short name was
/// used on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArgs<'a> {
    flags: BTreeMap<String, FlagOccurrences<'a>>,
    positionals: Vec<&'a str>,
}

impl<'a> ParsedArgs<'a> {
    fn record(&mut self, spec: &FlagSpec, value: Option<&'a str>) {
        let entry = self
            .flags
            .entry(spec.name.clone())
            .or_insert_with(|| match value {
                Some(_) => FlagOccurrences::Values(Vec::new()),
                None => FlagOccurrences::Switch(0),
            });
        match (entry, value) {
            (FlagOccurrences::Switch(count), None) => *count += 1,
            (FlagOccurrences::Values(values), Some(value)) => values.push(value),
            // Two specs share a name but not a kind; the first kind wins.
            (FlagOccurrences::Switch(count), Some(_)) => *count += 1,
            (FlagOccurrences::Values(_), None) => {}
        }
    }

    /// Returns `true` if the flag appeared at least once.
    pub fn is_set(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Number of times the flag appeared.
    pub fn count(&self, name: &str) -> usize {
        match self.flags.get(name) {
            Some(FlagOccurrences::Switch(count)) => *count,
            Some(FlagOccurrences::Values(values)) => values.len(),
            None => 0,
        }
    }

    /// Last value given for the flag.
    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.values(name).last().copied()
    }

    /// Every value given for the flag, in order.
    pub fn values(&self, name: &str) -> &[&'a str] {
        match self.flags.get(name) {
            Some(FlagOccurrences::Values(values)) => values,
            _ => &[],
        }
    }

    /// Positional tokens, in order.
    pub fn positionals(&self) -> &[&'a str] {
        &self.positionals
    }

    /// Iterates over matched flags by canonical name.
    pub fn flags(&self) -> impl Iterator<Item = (&str, &FlagOccurrences<'a>)> {
        self.flags.iter().map(|(name, occurrences)| (name.as_str(), occurrences))
    }
}
