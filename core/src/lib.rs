//! Incremental command-line token scanner.
//!
//! This crate classifies and consumes process arguments one token at a time:
//!
//! - [`ArgScanner`] — cursor over a borrowed argument list with a
//!   flags-finished latch. Decides by shape whether the current token could
//!   still be a flag, and matches it against one [`FlagSpec`] at a time.
//! - [`FlagSpec`] — a long name, optional short name, long aliases, and
//!   whether the flag takes a value.
//! - [`FlagTable`] — the caller-level loop that tries a list of specs in
//!   order and collects [`ParsedArgs`].
//! - [`UsageError`] — fatal usage errors. Nothing in this crate exits the
//!   process; that decision belongs to the application.
//!
//! Supported syntax is deliberately small: `-c`, `--name`, `--name value`,
//! and `--` to end flags. There is no `-abc` bundling and no `--name=value`.
//!
//! # Example
//!
//! ```
//! use argscan_core::*;
//!
//! let argv = ["exe", "--foo", "foot", "--baz", "-b", "--", "-x"];
//! let table = FlagTable::new()
//!     .with_flag(FlagSpec::with_value("foo").with_short('f').with_alias("foozie"))
//!     .with_flag(FlagSpec::boolean("bar").with_short('b'))
//!     .with_flag(FlagSpec::boolean("baz").with_alias("bazzie"));
//!
//! let mut scanner = ArgScanner::new(&argv);
//! let parsed = table.parse(&mut scanner)?;
//! assert_eq!(parsed.value("foo"), Some("foot"));
//! assert!(parsed.is_set("bar") && parsed.is_set("baz"));
//! assert_eq!(parsed.positionals(), ["-x"]);
//! assert!(!scanner.has_remaining());
//! # Ok::<(), UsageError>(())
//! ```

mod error;
mod scanner;
mod table;
mod types;

pub use error::{Result, UsageError};
pub use scanner::{ArgScanner, Classification, Positionals};
pub use table::{FlagOccurrences, FlagTable, ParsedArgs};
pub use types::{FlagSpec, MatchOutcome};
