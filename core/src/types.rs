//! Flag descriptors and match results.
//!
//! A [`FlagSpec`] is an immutable value describing one flag the caller is
//! willing to accept right now. Specs are plain data and can be built in code
//! or deserialized from a configuration file.

use serde::{Deserialize, Serialize};

/// Description of a single flag.
///
/// `name` and every entry of `aliases` are long names, matched against
/// tokens of the form `--name`. `short`, when present, is matched against
/// tokens of the form `-c`.
///
/// # Examples
///
/// ```
/// use argscan_core::FlagSpec;
///
/// let foo = FlagSpec::with_value("foo").with_short('f').with_alias("foozie");
/// assert!(foo.takes_value());
/// assert!(foo.matches_long("foozie"));
/// assert!(foo.matches_short('f'));
///
/// let bar = FlagSpec::boolean("bar").with_short('b');
/// assert!(!bar.takes_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Canonical long name, without the leading `--`.
    pub name: String,
    /// Optional single-character short name, without the leading `-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// Additional long names, tried in order after `name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// `true` if the flag carries no value.
    #[serde(default)]
    pub boolean: bool,
}

impl FlagSpec {
    /// Creates a flag that carries no value.
    pub fn boolean(name: &str) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            aliases: Vec::new(),
            boolean: true,
        }
    }

    /// Creates a flag whose value is the token that follows it.
    pub fn with_value(name: &str) -> Self {
        Self {
            name: name.to_string(),
            short: None,
            aliases: Vec::new(),
            boolean: false,
        }
    }

    /// Sets the short name.
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Appends a long alias.
    pub fn with_alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.to_string());
        self
    }

    /// Returns `true` if a value token must follow this flag.
    pub fn takes_value(&self) -> bool {
        !self.boolean
    }

    /// Checks a long name (without `--`) against the canonical name, then
    /// the aliases in order.
    pub fn matches_long(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|alias| alias == name)
    }

    /// Checks a short name (without `-`).
    pub fn matches_short(&self, short: char) -> bool {
        self.short == Some(short)
    }
}

/// Result of a single [`try_match`](crate::ArgScanner::try_match) attempt.
///
/// Fatal conditions are reported through [`UsageError`](crate::UsageError)
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// The flag matched and was consumed. `value` is set iff the flag takes
    /// a value, and borrows from the scanned token sequence.
    Matched { value: Option<&'a str> },
    /// The current token is not this flag. Nothing was consumed.
    NotMatched,
}

impl<'a> MatchOutcome<'a> {
    /// Returns `true` for [`MatchOutcome::Matched`].
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Returns the captured value, if any.
    pub fn value(&self) -> Option<&'a str> {
        match self {
            Self::Matched { value } => *value,
            Self::NotMatched => None,
        }
    }
}
