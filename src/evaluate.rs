//! Tier-by-tier comparison of two [`NormalizedVersion`]s.

use crate::{NormalizedVersion, Op, parsers};
use itertools::EitherOrBoth::{Both, Left, Right};
use itertools::Itertools;
use std::cmp::Ordering;
use std::cmp::Ordering::{Equal, Greater, Less};

/// The outcome of comparing two versions, one tier at a time.
///
/// Each tier is judged on its own, so a `Comparison` of `1.0.1-alpha` against
/// `1.0.0-beta` has a `Greater` numeric core but a `Less` pre-release. It's up
/// to the [`Op`] to decide which tiers matter, and in which order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Comparison {
    /// The numeric cores, zero-padded to equal length.
    pub version: Ordering,
    /// The pre-release identifiers.
    pub release: Ordering,
    /// The build metadata. Left `Equal` when the operator didn't ask for it.
    pub metadata: Ordering,
}

impl Default for Comparison {
    fn default() -> Self {
        Comparison {
            version: Equal,
            release: Equal,
            metadata: Equal,
        }
    }
}

impl Comparison {
    /// Numeric core first, pre-release second.
    pub fn loose(&self) -> Ordering {
        self.version.then(self.release)
    }

    /// Like [`Comparison::loose`], with metadata breaking any remaining tie.
    pub fn strict(&self) -> Ordering {
        self.loose().then(self.metadata)
    }
}

/// Compare each tier of `a` against `b`. Metadata is only examined for the
/// strict operators `===` and `!==`.
pub fn evaluate(a: &NormalizedVersion, b: &NormalizedVersion, op: Op) -> Comparison {
    let metadata = if op.is_strict() {
        cmp_meta(a.metadata.as_deref(), b.metadata.as_deref())
    } else {
        Equal
    };

    Comparison {
        version: cmp_numbers(&a.numbers, &b.numbers),
        release: cmp_release(a.release.as_deref(), b.release.as_deref()),
        metadata,
    }
}

/// Missing components count as `0`, so `1.0` and `1.0.0` are equal.
pub fn cmp_numbers<S: AsRef<str>>(a: &[S], b: &[S]) -> Ordering {
    a.iter()
        .zip_longest(b)
        .map(|eob| match eob {
            Both(x, y) => cmp_digits(x.as_ref(), y.as_ref()),
            Left(x) => cmp_digits(x.as_ref(), "0"),
            Right(y) => cmp_digits("0", y.as_ref()),
        })
        .find(|o| o.is_ne())
        .unwrap_or(Equal)
}

/// Pre-releases have *lower* precedence than normal versions, so an absent
/// pre-release is the greater one.
pub fn cmp_release(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Equal,
        (None, Some(_)) => Greater,
        (Some(_), None) => Less,
        (Some(x), Some(y)) => x
            .split('.')
            .zip_longest(y.split('.'))
            .find_map(|eob| match eob {
                Both(s, t) => match cmp_segment(s, t) {
                    Equal => None,
                    o => Some(o),
                },
                // A larger set of pre-release fields has a higher precedence
                // than a smaller set, if all the preceding identifiers are
                // equal.
                Left(_) => Some(Greater),
                Right(_) => Some(Less),
            })
            .unwrap_or(Equal),
    }
}

fn cmp_segment(a: &str, b: &str) -> Ordering {
    match (parsers::is_numeric(a), parsers::is_numeric(b)) {
        (true, true) => cmp_digits(a, b),
        (true, false) => Less,
        (false, true) => Greater,
        (false, false) => a.cmp(b),
    }
}

/// Compare two strings of ASCII digits by their integer value, without
/// limiting their size.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Build metadata has no precedence of its own. When it's asked for, a
/// missing value is the lesser one, and present values compare as text.
pub fn cmp_meta(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.cmp(&b)
}
