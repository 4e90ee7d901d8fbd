//! Property tests over random token sequences and call sequences.

use argscan_core::{ArgScanner, FlagSpec, MatchOutcome};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Tokens covering every shape the scanner distinguishes.
const POOL: &[&str] = &[
    "", "-", "x", "--", "-a", "-b", "-é", "--alpha", "--beta", "--al", "-alpha", "file", "-17",
];

#[derive(Debug, Clone)]
struct Tokens(Vec<String>);

impl Arbitrary for Tokens {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 8;
        let tokens = (0..len)
            .map(|_| g.choose(POOL).copied().unwrap_or("x").to_string())
            .collect();
        Self(tokens)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Classify,
    Consume,
    Match(usize),
}

impl Arbitrary for Step {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => Self::Classify,
            1 => Self::Consume,
            _ => Self::Match(usize::arbitrary(g) % specs().len()),
        }
    }
}

fn specs() -> Vec<FlagSpec> {
    vec![
        FlagSpec::boolean("alpha").with_short('a').with_alias("al"),
        FlagSpec::with_value("beta").with_short('b'),
        FlagSpec::boolean("gamma"),
    ]
}

#[quickcheck]
fn latch_is_monotonic_and_cursor_never_rewinds(tokens: Tokens, steps: Vec<Step>) -> bool {
    let specs = specs();
    let mut scanner = ArgScanner::from_tokens(&tokens.0);
    let mut finished = false;
    let mut position = 0;

    for step in steps {
        match step {
            Step::Classify => {
                scanner.could_be_flag();
            }
            Step::Consume => {
                scanner.consume();
            }
            Step::Match(idx) => {
                let _ = scanner.try_match(&specs[idx]);
            }
        }
        if finished && (!scanner.flags_finished() || scanner.could_be_flag()) {
            return false;
        }
        if scanner.position() < position {
            return false;
        }
        finished = scanner.flags_finished();
        position = scanner.position();
    }
    true
}

#[quickcheck]
fn non_matching_specs_commute(tokens: Tokens) -> bool {
    let gamma = FlagSpec::boolean("gamma");
    let delta = FlagSpec::with_value("delta").with_short('d');

    let mut forward = ArgScanner::from_tokens(&tokens.0);
    let f1 = forward.try_match(&gamma);
    let f2 = forward.try_match(&delta);

    let mut backward = ArgScanner::from_tokens(&tokens.0);
    let b1 = backward.try_match(&delta);
    let b2 = backward.try_match(&gamma);

    // Neither spec matches any pooled token.
    [&f1, &f2, &b1, &b2]
        .iter()
        .all(|r| !matches!(r, Ok(MatchOutcome::Matched { .. })))
        && forward.position() == backward.position()
        && forward.flags_finished() == backward.flags_finished()
        && f1.is_err() == b1.is_err()
}

#[quickcheck]
fn matches_consume_one_or_two_tokens(tokens: Tokens) -> bool {
    specs().iter().all(|spec| {
        let mut scanner = ArgScanner::from_tokens(&tokens.0);
        scanner.could_be_flag();
        let before = scanner.position();
        match scanner.try_match(spec) {
            Ok(MatchOutcome::Matched { value: None }) => {
                !spec.takes_value() && scanner.position() == before + 1
            }
            Ok(MatchOutcome::Matched { value: Some(_) }) => {
                spec.takes_value() && scanner.position() == before + 2
            }
            Ok(MatchOutcome::NotMatched) => scanner.position() == before,
            Err(_) => true,
        }
    })
}

#[quickcheck]
fn separator_that_ends_flags_is_never_surfaced(tokens: Tokens) -> bool {
    let tokens = tokens.0;
    let mut scanner = ArgScanner::from_tokens(&tokens);
    while scanner.could_be_flag() {
        scanner.consume();
    }
    let start = scanner.position();
    let swallowed = start > 0 && tokens[start - 1] == "--";
    let rest: Vec<&str> = scanner.positionals().collect();

    let first_separator = tokens.iter().position(|t| t == "--");
    let first_non_flag = tokens
        .iter()
        .position(|t| t.chars().count() < 2 || !t.starts_with('-'));
    let rest_matches = rest.iter().copied().eq(tokens[start..].iter().map(String::as_str));

    rest_matches
        && match first_separator {
            Some(sep) if first_non_flag.is_none_or(|idx| idx > sep) => swallowed && start == sep + 1,
            _ => !swallowed,
        }
}
