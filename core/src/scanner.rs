//! The argument scanner.
//!
//! [`ArgScanner`] holds a cursor into a borrowed token sequence and a latch
//! recording whether flag scanning has ended. Callers alternate between
//! [`could_be_flag`](ArgScanner::could_be_flag) and
//! [`try_match`](ArgScanner::try_match), then drain what is left with
//! [`consume`](ArgScanner::consume) or [`positionals`](ArgScanner::positionals).
//!
//! Classification looks only at the shape of the current token:
//!
//! | Token            | Shape           | Effect                         |
//! |------------------|-----------------|--------------------------------|
//! | `""`, `-`, `x`   | bare            | latch set, token kept          |
//! | `--`             | separator       | latch set, token consumed      |
//! | `-c`             | short flag      | none                           |
//! | `--name`         | long flag       | none                           |
//! | `-name`          | malformed flag  | none (matching rejects it)     |
//! | anything else    | positional      | latch set, token kept          |
//!
//! Once the latch is set it never clears, and every later token is
//! positional no matter how it looks.

use tracing::{debug, trace};

use crate::error::{Result, UsageError};
use crate::types::{FlagSpec, MatchOutcome};

/// What [`ArgScanner::classify`] decided about the current token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The current token is flag-shaped and still eligible for matching.
    StillFlagLike,
    /// Flag scanning is over. The current token (if any) is positional.
    EndOfFlags,
    /// The current token was `--`. It has been consumed and flag scanning
    /// is over.
    ConsumedSeparator,
    /// No tokens remain.
    Exhausted,
}

/// Shape of a single token, independent of any flag spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenShape<'t> {
    /// Zero or one characters, including a lone `-`.
    Bare,
    /// Exactly `--`.
    Separator,
    /// `-c`.
    Short(char),
    /// `--name`; carries `name`.
    Long(&'t str),
    /// `-name`: one dash followed by two or more characters.
    SingleDashLong,
    /// Two or more characters not starting with `-`.
    Positional,
}

impl<'t> TokenShape<'t> {
    fn of(token: &'t str) -> Self {
        let mut chars = token.chars();
        let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
            return Self::Bare;
        };
        let longer = chars.next().is_some();
        match (first, second, longer) {
            ('-', '-', false) => Self::Separator,
            ('-', short, false) => Self::Short(short),
            ('-', '-', true) => Self::Long(&token[2..]),
            ('-', _, true) => Self::SingleDashLong,
            _ => Self::Positional,
        }
    }
}

/// Incremental scanner over a borrowed argument list.
///
/// The scanner never copies tokens: captured values and positionals borrow
/// from the slice it was created with.
///
/// # Examples
///
/// ```
/// use argscan_core::{ArgScanner, FlagSpec};
///
/// let argv = ["exe", "-v", "--out", "a.txt", "input"];
/// let verbose = FlagSpec::boolean("verbose").with_short('v');
/// let out = FlagSpec::with_value("out");
///
/// let mut scanner = ArgScanner::new(&argv);
/// let mut is_verbose = false;
/// let mut out_path = None;
/// while scanner.could_be_flag() {
///     if scanner.try_match(&verbose)?.is_matched() {
///         is_verbose = true;
///     } else if let Some(path) = scanner.try_match(&out)?.value() {
///         out_path = Some(path);
///     } else {
///         panic!("unknown flag {:?}", scanner.current_token());
///     }
/// }
/// let rest: Vec<&str> = scanner.positionals().collect();
///
/// assert!(is_verbose);
/// assert_eq!(out_path, Some("a.txt"));
/// assert_eq!(rest, ["input"]);
/// # Ok::<(), argscan_core::UsageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArgScanner<'a, S = String> {
    tokens: &'a [S],
    cursor: usize,
    flags_finished: bool,
}

impl<'a, S: AsRef<str>> ArgScanner<'a, S> {
    /// Creates a scanner over a full argument vector. Index 0 is the program
    /// name and is skipped.
    pub fn new(argv: &'a [S]) -> Self {
        Self::from_tokens(argv.get(1..).unwrap_or_default())
    }

    /// Creates a scanner over tokens that already exclude the program name.
    pub fn from_tokens(tokens: &'a [S]) -> Self {
        Self {
            tokens,
            cursor: 0,
            flags_finished: false,
        }
    }

    /// Returns `true` while unconsumed tokens remain.
    pub fn has_remaining(&self) -> bool {
        self.cursor < self.tokens.len()
    }

    /// Returns `true` once flag scanning has ended.
    pub fn flags_finished(&self) -> bool {
        self.flags_finished
    }

    /// Index of the current token within the scanned sequence.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Returns the current token without consuming it.
    pub fn current_token(&self) -> Option<&'a str> {
        let tokens = self.tokens;
        tokens.get(self.cursor).map(|token| token.as_ref())
    }

    /// Consumes and returns the current token unconditionally.
    ///
    /// Intended for positionals the caller has already confirmed.
    pub fn consume(&mut self) -> Option<&'a str> {
        let token = self.current_token()?;
        self.cursor += 1;
        Some(token)
    }

    /// Drains every remaining token in order.
    pub fn positionals(&mut self) -> Positionals<'_, 'a, S> {
        Positionals { scanner: self }
    }

    /// Classifies the current token by shape.
    ///
    /// May set the flags-finished latch, and consumes the token if it is the
    /// `--` separator. Calling it again on an unchanged flag-shaped token is
    /// side-effect free.
    pub fn classify(&mut self) -> Classification {
        if self.flags_finished {
            return Classification::EndOfFlags;
        }
        let Some(token) = self.current_token() else {
            return Classification::Exhausted;
        };
        match TokenShape::of(token) {
            TokenShape::Short(_) | TokenShape::Long(_) | TokenShape::SingleDashLong => {
                Classification::StillFlagLike
            }
            TokenShape::Separator => {
                self.cursor += 1;
                self.finish_flags("separator");
                Classification::ConsumedSeparator
            }
            TokenShape::Bare | TokenShape::Positional => {
                self.finish_flags("positional");
                Classification::EndOfFlags
            }
        }
    }

    /// Returns `true` if the current token is still eligible for flag
    /// matching. See [`classify`](Self::classify) for side effects.
    pub fn could_be_flag(&mut self) -> bool {
        self.classify() == Classification::StillFlagLike
    }

    /// Tries to match `spec` against the current token.
    ///
    /// On a match the flag token is consumed, and for a valued flag the next
    /// token is consumed as its value. A miss consumes nothing and leaves the
    /// latch alone, so the caller can try another spec.
    ///
    /// # Errors
    ///
    /// - [`UsageError::MalformedShortFlag`] if the current token is `-name`.
    ///   Nothing is consumed.
    /// - [`UsageError::MissingValue`] if `spec` takes a value and the flag
    ///   was the last token. The flag token stays consumed.
    pub fn try_match(&mut self, spec: &FlagSpec) -> Result<MatchOutcome<'a>> {
        if !self.could_be_flag() {
            return Ok(MatchOutcome::NotMatched);
        }
        let Some(token) = self.current_token() else {
            return Ok(MatchOutcome::NotMatched);
        };

        self.reject_malformed()?;

        let matched = match TokenShape::of(token) {
            TokenShape::Short(short) => spec.matches_short(short),
            TokenShape::Long(name) => spec.matches_long(name),
            // Rejected above; classification never reports the rest as flag-like.
            TokenShape::SingleDashLong
            | TokenShape::Bare
            | TokenShape::Separator
            | TokenShape::Positional => false,
        };
        if !matched {
            return Ok(MatchOutcome::NotMatched);
        }
        self.cursor += 1;

        if spec.boolean {
            debug!(flag = %spec.name, token, "Matched flag");
            return Ok(MatchOutcome::Matched { value: None });
        }
        match self.consume() {
            Some(value) => {
                debug!(flag = %spec.name, token, value, "Matched flag with value");
                Ok(MatchOutcome::Matched { value: Some(value) })
            }
            None => Err(UsageError::MissingValue {
                flag: spec.name.clone(),
            }),
        }
    }

    /// Fails with [`UsageError::MalformedShortFlag`] if the current token is
    /// `-name`. Consumes nothing.
    pub(crate) fn reject_malformed(&self) -> Result<()> {
        match self.current_token() {
            Some(token) if TokenShape::of(token) == TokenShape::SingleDashLong => {
                Err(UsageError::MalformedShortFlag {
                    token: token.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn finish_flags(&mut self, reason: &'static str) {
        trace!(reason, position = self.cursor, "Flag scanning finished");
        self.flags_finished = true;
    }
}

/// Iterator returned by [`ArgScanner::positionals`].
#[derive(Debug)]
pub struct Positionals<'s, 'a, S> {
    scanner: &'s mut ArgScanner<'a, S>,
}

impl<'a, S: AsRef<str>> Iterator for Positionals<'_, 'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.consume()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.scanner.tokens.len() - self.scanner.cursor;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shapes() {
        assert_eq!(TokenShape::of(""), TokenShape::Bare);
        assert_eq!(TokenShape::of("-"), TokenShape::Bare);
        assert_eq!(TokenShape::of("x"), TokenShape::Bare);
        assert_eq!(TokenShape::of("--"), TokenShape::Separator);
        assert_eq!(TokenShape::of("-b"), TokenShape::Short('b'));
        assert_eq!(TokenShape::of("-é"), TokenShape::Short('é'));
        assert_eq!(TokenShape::of("--foo"), TokenShape::Long("foo"));
        assert_eq!(TokenShape::of("---"), TokenShape::Long("-"));
        assert_eq!(TokenShape::of("-17"), TokenShape::SingleDashLong);
        assert_eq!(TokenShape::of("ab"), TokenShape::Positional);
        assert_eq!(TokenShape::of("going"), TokenShape::Positional);
    }

    #[test]
    fn test_new_skips_program_name() {
        let argv = ["exe", "a"];
        let mut scanner = ArgScanner::new(&argv);
        assert_eq!(scanner.current_token(), Some("a"));
        assert_eq!(scanner.consume(), Some("a"));
        assert_eq!(scanner.consume(), None);
    }

    #[test]
    fn test_new_on_empty_argv() {
        let argv: [&str; 0] = [];
        let mut scanner = ArgScanner::new(&argv);
        assert!(!scanner.has_remaining());
        assert_eq!(scanner.classify(), Classification::Exhausted);
        assert!(!scanner.flags_finished());
    }

    #[test]
    fn test_classify_is_idempotent_on_flag_shapes() {
        let tokens = ["--foo"];
        let mut scanner = ArgScanner::from_tokens(&tokens);
        assert_eq!(scanner.classify(), Classification::StillFlagLike);
        assert_eq!(scanner.classify(), Classification::StillFlagLike);
        assert_eq!(scanner.position(), 0);
        assert!(!scanner.flags_finished());
    }

    #[test]
    fn test_separator_is_consumed_once() {
        let tokens = ["--", "--"];
        let mut scanner = ArgScanner::from_tokens(&tokens);
        assert_eq!(scanner.classify(), Classification::ConsumedSeparator);
        assert_eq!(scanner.classify(), Classification::EndOfFlags);
        assert_eq!(scanner.positionals().collect::<Vec<_>>(), ["--"]);
    }

    #[test]
    fn test_malformed_token_is_flag_like_but_rejected() {
        let tokens = ["-longname"];
        let mut scanner = ArgScanner::from_tokens(&tokens);
        assert!(scanner.could_be_flag());
        let err = scanner.try_match(&FlagSpec::boolean("longname")).unwrap_err();
        assert_eq!(
            err,
            UsageError::MalformedShortFlag {
                token: "-longname".to_string()
            }
        );
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_short_miss_keeps_latch_open() {
        let tokens = ["-x"];
        let mut scanner = ArgScanner::from_tokens(&tokens);
        let outcome = scanner.try_match(&FlagSpec::boolean("bar").with_short('b')).unwrap();
        assert_eq!(outcome, MatchOutcome::NotMatched);
        assert!(!scanner.flags_finished());
        assert_eq!(scanner.current_token(), Some("-x"));
    }

    #[test]
    fn test_value_is_taken_raw() {
        let tokens = ["--foo", "--"];
        let mut scanner = ArgScanner::from_tokens(&tokens);
        let outcome = scanner.try_match(&FlagSpec::with_value("foo")).unwrap();
        assert_eq!(outcome.value(), Some("--"));
        assert!(!scanner.has_remaining());
        assert!(!scanner.flags_finished());
    }

    #[test]
    fn test_positionals_size_hint() {
        let tokens = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut scanner = ArgScanner::from_tokens(&tokens);
        scanner.consume();
        let positionals = scanner.positionals();
        assert_eq!(positionals.size_hint(), (2, Some(2)));
    }
}
