//! A library for comparing software version numbers with operators.
//!
//! Version numbers come to us as strings like `v1.2.3-rc.1+build.7`, or even as
//! plain numbers like `2` or `1.5`. This library breaks any of these into a
//! numeric core (`1.2.3`), a pre-release (`rc.1`), and build metadata
//! (`build.7`), and then answers a single question: does the first version
//! relate to the second by the given operator?
//!
//! ```
//! use compare_versions::compare;
//!
//! assert!(compare("1.0.0-alpha", "1.0.0", "<").unwrap());
//! assert!(compare("1.0.0-beta.11", "1.0.0-beta.2", ">").unwrap());
//! assert!(compare("1.0", "1.0.0", "=").unwrap());
//! assert!(compare(2, 1, "gt").unwrap());
//! ```
//!
//! # Loose and Strict Comparison
//!
//! [`compare`] ignores build metadata, unless the operator is `===` or `!==`.
//! [`compare_strict`] always uses metadata as the final tiebreaker.
//!
//! ```
//! use compare_versions::{compare, compare_strict};
//!
//! assert!(compare("1.0.0+alpha", "1.0.0+beta", "=").unwrap());
//! assert!(!compare_strict("1.0.0+alpha", "1.0.0+beta", "=").unwrap());
//! assert!(!compare("1.0.0+alpha", "1.0.0+beta", "===").unwrap());
//! ```
//!
//! # Precedence
//!
//! Versions are compared tier by tier, and a later tier only matters when
//! every earlier tier was equal:
//!
//! 1. The numeric core, component by component. Missing components count as
//!    `0`, so `1` and `1.0.0` are equal.
//! 2. The pre-release. A version without one is *greater* than a version
//!    with one, so `1.0.0-rc.1 < 1.0.0`. Dot-separated segments are compared
//!    in order: numbers as numbers, text as text, and numbers below text.
//! 3. The metadata, when asked for. A version without metadata is *less*
//!    than a version with it, and otherwise they compare as text.
//!
//! # Operators
//!
//! See [`Op`] for the full set of accepted tokens, like `>=`, `ge`, `<>`, and
//! `!==`. Anything else fails with [`Error::UnsupportedOperator`].
//!
//! # Features
//!
//! You can enable [`Serde`](https://serde.rs/) support for serialization and
//! deserialization with the `serde` feature.
//!
//! By default [`NormalizedVersion`] is serialized/deserialized as-is. If
//! instead you'd like to deserialize directly from a raw version string like
//! `1.2.3`, see [`NormalizedVersion::deserialize_pretty`].

#![warn(missing_docs)]

mod evaluate;
mod op;
mod parsers;
mod version;

pub use evaluate::Comparison;
pub use op::{DEFAULT_OP, Op};
pub use version::{NormalizedVersion, Version};

/// Errors from comparing version numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An operator token wasn't one of those understood by [`Op`].
    UnsupportedOperator(String),
    /// Some input failed to normalize into a [`NormalizedVersion`], either
    /// because it was absent or because its numeric core was malformed.
    InvalidFormat(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedOperator(s) => {
                write!(f, "Unsupported operator for comparison: {s}")
            }
            Error::InvalidFormat(s) => write!(f, "Invalid version format: {s}"),
        }
    }
}

/// Compare two versions by the given operator token, ignoring build metadata.
///
/// `===` and `!==` are the exception: they are handed to [`compare_strict`]
/// as-is. The operator is checked before either version is looked at. Pass
/// [`DEFAULT_OP`] (`>`) when there is no particular operator in mind.
///
/// ```
/// use compare_versions::{compare, Error};
///
/// assert!(compare("1.1.0", "1.0.0", ">").unwrap());
/// assert!(compare("1.0.0", "1.0.0", "le").unwrap());
/// assert!(compare(1, "1.0.0", "==").unwrap());
///
/// assert!(matches!(compare("1.0.0", "2.0.0", "?"), Err(Error::UnsupportedOperator(_))));
/// assert!(matches!(compare("not.a.version", "2.0.0", ">"), Err(Error::InvalidFormat(_))));
/// ```
pub fn compare<'a, 'b, A, B>(v1: A, v2: B, op: &str) -> Result<bool, Error>
where
    A: Into<Version<'a>>,
    B: Into<Version<'b>>,
{
    let op: Op = op.parse()?;

    compare_with(v1, v2, op)
}

/// Like [`compare`], but with an already-parsed [`Op`].
pub fn compare_with<'a, 'b, A, B>(v1: A, v2: B, op: Op) -> Result<bool, Error>
where
    A: Into<Version<'a>>,
    B: Into<Version<'b>>,
{
    if op.is_strict() {
        return compare_strict_with(v1, v2, op);
    }

    let a = NormalizedVersion::normalize(v1)?;
    let b = NormalizedVersion::normalize(v2)?;
    let res = a.compare(&b, op);

    log::trace!("{a} {op} {b}: {res}");

    Ok(res)
}

/// Compare two versions by the given operator token, always taking build
/// metadata into account.
///
/// Here `=`, `==` and `eq` all mean `===`, and likewise `!=`, `<>` and `ne`
/// all mean `!==`. As with [`compare`], [`DEFAULT_OP`] is `>`.
///
/// ```
/// use compare_versions::compare_strict;
///
/// assert!(compare_strict("1.0.1+alpha", "1.0.0+beta", ">").unwrap());
/// assert!(compare_strict("1.0.0-beta+build.1", "1.0.0-alpha+build.2", ">").unwrap());
/// assert!(compare_strict("1.0.0+build.2", "1.0.0+build.1", ">").unwrap());
/// assert!(compare_strict("1.0.0+build", "1.0.0", ">").unwrap());
/// ```
pub fn compare_strict<'a, 'b, A, B>(v1: A, v2: B, op: &str) -> Result<bool, Error>
where
    A: Into<Version<'a>>,
    B: Into<Version<'b>>,
{
    let op: Op = op.parse()?;

    compare_strict_with(v1, v2, op)
}

/// Like [`compare_strict`], but with an already-parsed [`Op`].
pub fn compare_strict_with<'a, 'b, A, B>(v1: A, v2: B, op: Op) -> Result<bool, Error>
where
    A: Into<Version<'a>>,
    B: Into<Version<'b>>,
{
    let a = NormalizedVersion::normalize(v1)?;
    let b = NormalizedVersion::normalize(v2)?;
    let res = a.compare_strict(&b, op);

    log::trace!("{a} {op} {b} (strict): {res}");

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPS: [&str; 16] = [
        ">", "gt", ">=", "ge", "<", "lt", "<=", "le", "=", "==", "eq", "!=", "<>", "ne", "===",
        "!==",
    ];

    /// Strictly ascending.
    const LADDER: [&str; 14] = [
        "0.9.0",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
        "1.0.0+build.1",
        "1.0.1",
        "1.1",
        "1.10.0",
        "2",
    ];

    fn ok(v1: &str, v2: &str, op: &str) -> bool {
        compare(v1, v2, op).unwrap()
    }

    fn strict(v1: &str, v2: &str, op: &str) -> bool {
        compare_strict(v1, v2, op).unwrap()
    }

    #[test]
    fn unsupported_operator() {
        let e = compare("1.0.0", "2.0.0", "?").unwrap_err();
        assert_eq!(Error::UnsupportedOperator("?".to_string()), e);
        assert_eq!("Unsupported operator for comparison: ?", e.to_string());

        let e = compare_strict("1.0.0", "2.0.0", "=>").unwrap_err();
        assert_eq!(Error::UnsupportedOperator("=>".to_string()), e);
    }

    #[test]
    fn operator_checked_first() {
        assert_eq!(
            Err(Error::UnsupportedOperator("?".to_string())),
            compare("garbage", None::<&str>, "?")
        );
    }

    #[test]
    fn absent_versions() {
        for op in [">", "===", "="] {
            assert!(matches!(
                compare(None::<&str>, "2.0.0", op),
                Err(Error::InvalidFormat(_))
            ));
            assert!(matches!(
                compare("1.0.0", None::<&str>, op),
                Err(Error::InvalidFormat(_))
            ));
            assert!(matches!(
                compare_strict(None::<String>, "2.0.0", op),
                Err(Error::InvalidFormat(_))
            ));
        }
    }

    #[test]
    fn invalid_versions() {
        let bads = vec!["not.a.version", "invalid-version", "1.0.0.a", "", "1..0", "x1.0"];

        for v in bads {
            assert!(matches!(compare(v, "2.0.0", ">"), Err(Error::InvalidFormat(_))));
            assert!(matches!(compare("2.0.0", v, "<"), Err(Error::InvalidFormat(_))));
            assert!(matches!(
                compare_strict(v, "2.0.0", "!=="),
                Err(Error::InvalidFormat(_))
            ));
        }

        let e = compare("1.0.0.a", "2.0.0", ">").unwrap_err();
        assert!(e.to_string().starts_with("Invalid version format"));
    }

    #[test]
    fn default_operator() {
        assert!(ok("2.0.0", "1.0.0", DEFAULT_OP));
        assert!(ok("1.1.0", "1.0.0", DEFAULT_OP));
        assert!(!ok("1.0.0", "1.0.0", DEFAULT_OP));
        assert!(!ok("0.9.0", "1.0.0", DEFAULT_OP));
    }

    #[test]
    fn symbolic_operators() {
        assert!(ok("2.0.0", "1.0.0", ">"));
        assert!(!ok("1.0.0", "1.0.0", ">"));
        assert!(ok("1.0.0", "1.0.0", ">="));
        assert!(!ok("0.9.0", "1.0.0", ">="));
        assert!(ok("1.0.0", "1.1.0", "<"));
        assert!(!ok("1.0.0", "0.9.0", "<"));
        assert!(ok("1.0.0", "1.0.0", "<="));
        assert!(!ok("1.0.0", "0.9.0", "<="));
        assert!(ok("1.0.0", "1.0.0", "="));
        assert!(!ok("1.0.0", "1.0.1", "=="));
        assert!(ok("1.0.0", "1.0.1", "!="));
        assert!(!ok("1.0.0", "1.0.0", "<>"));
    }

    #[test]
    fn text_operators() {
        assert!(ok("2.0.0", "1.0.0", "gt"));
        assert!(!ok("1.0.0", "1.0.0", "gt"));
        assert!(ok("1.0.0", "1.0.0", "ge"));
        assert!(!ok("0.9.0", "1.0.0", "ge"));
        assert!(ok("1.0.0", "2.0.0", "lt"));
        assert!(!ok("1.0.0", "1.0.0", "lt"));
        assert!(ok("1.0.0", "1.0.0", "le"));
        assert!(!ok("2.0.0", "1.0.0", "le"));
        assert!(ok("1.0.0", "1.0.0", "eq"));
        assert!(!ok("1.0.0", "1.0.1", "eq"));
        assert!(ok("1.0.0", "1.0.1", "ne"));
        assert!(!ok("1.0.0", "1.0.0", "ne"));
    }

    #[test]
    fn pre_releases() {
        assert!(ok("1.0.0-alpha", "1.0.0", "<"));
        assert!(ok("1.0.0-alpha", "1.0.0-beta", "<"));
        assert!(ok("1.0.0-beta.11", "1.0.0-beta.2", ">"));
        assert!(ok("1.0.0-rc.1", "1.0.0-rc.1", "="));
        assert!(ok("1.0.1-alpha", "1.0.0", ">"));
        assert!(ok("1.0.0-", "1.0.0", "="));
    }

    #[test]
    fn zero_padding() {
        assert!(ok("1.0", "1.0.0", "="));
        assert!(ok("1", "1.0.0", "="));
        assert!(ok("1.0.0.0", "1.0.0", "="));
        assert!(ok("1.0.0.1", "1.0.0", ">"));
        assert!(ok("v1.2", "1.2.0", "=="));
        assert!(ok("01.002", "1.2.0", "="));
    }

    #[test]
    fn huge_components() {
        assert!(ok("18446744073709551616.0.0", "1.0.0", ">"));
        assert!(ok("18446744073709551616.0.0", "18446744073709551615.9.9", ">"));
        assert!(ok("1.18446744073709551616", "1.18446744073709551616.0", "="));
        assert!(strict("99999999999999999999999999", "100000000000000000000000000", "<"));
    }

    #[test]
    fn numeric_inputs() {
        assert!(compare(2, 1, ">").unwrap());
        assert!(compare(1.1, 1.0, ">").unwrap());
        assert!(compare(1, 1, ">=").unwrap());
        assert!(compare(1.0, 2.0, "<").unwrap());
        assert!(compare(-0.0, "0", "=").unwrap());
        assert!(compare(-0.0, 0.0, "===").unwrap());
    }

    #[test]
    fn mixed_inputs() {
        assert!(compare("2.0.0", 1, ">").unwrap());
        assert!(compare(1, "1.0.0", "=").unwrap());
        assert!(compare(1.5, "1.5.0", "==").unwrap());
        assert!(compare("2.0", 2.5, "<").unwrap());
        assert!(compare(String::from("1.2.3"), &String::from("1.2.3"), "eq").unwrap());
        assert!(compare(Some("1.2.4"), "1.2.3", "gt").unwrap());
    }

    #[test]
    fn loose_ignores_metadata() {
        assert!(ok("1.0.0+alpha", "1.0.0+beta", "="));
        assert!(ok("1.0.0+alpha", "1.0.0+beta", "=="));
        assert!(!ok("1.0.0+alpha", "1.0.0+beta", "!="));
        assert!(!ok("1.0.0+beta", "1.0.0+alpha", ">"));
        assert!(ok("1.0.0+beta", "1.0.0+alpha", ">="));
        assert!(ok("1.0.0", "1.0.0+build", "<="));
    }

    #[test]
    fn strict_identity_in_loose() {
        assert!(!ok("1.0.0+alpha", "1.0.0+beta", "==="));
        assert!(ok("1.0.0+alpha", "1.0.0+beta", "!=="));
        assert!(ok("1.0.0+alpha", "1.0.0+alpha", "==="));
        assert!(!ok("1.0.0", "1.0.0+alpha", "==="));
        assert!(ok("1.0.0", "1.0.0.0", "==="));

        for a in LADDER {
            for b in LADDER {
                for op in ["===", "!=="] {
                    assert_eq!(strict(a, b, op), ok(a, b, op), "{a} {op} {b}");
                }
            }
        }
    }

    #[test]
    fn strict_metadata() {
        assert!(!strict("1.0.0+alpha", "1.0.0+beta", "="));
        assert!(!strict("1.0.0+alpha", "1.0.0+beta", "eq"));
        assert!(strict("1.0.0+alpha", "1.0.0+beta", "ne"));
        assert!(strict("1.0.0+alpha", "1.0.0+beta", "<>"));
        assert!(strict("1.0.0+alpha", "1.0.0+beta", "<"));
        assert!(strict("1.0.0+alpha", "1.0.0+alpha", ">="));
        assert!(!strict("1.0.0+alpha", "1.0.0+alpha", ">"));
        assert!(strict("1.0.0", "1.0.0+alpha", "lt"));
        assert!(strict("1.0.0+001", "1.0.0", "gt"));
        assert!(strict("1.0.0+001", "1.0.0+001", "le"));
    }

    #[test]
    fn strict_precedence() {
        assert!(strict("1.0.1+alpha", "1.0.0+beta", ">"));
        assert!(strict("1.0.0-beta+build.1", "1.0.0-alpha+build.2", ">"));
        assert!(strict("1.0.0-alpha+build.2", "1.0.0+build.1", "<"));
        assert!(strict("2.0.0+a", "1.9.9+z", ">="));
    }

    #[test]
    fn ladder_order() {
        for (i, a) in LADDER.iter().enumerate() {
            for (j, b) in LADDER.iter().enumerate() {
                let expected = i.cmp(&j);

                assert_eq!(expected.is_lt(), strict(a, b, "<"), "{a} < {b}");
                assert_eq!(expected.is_gt(), strict(a, b, ">"), "{a} > {b}");
                assert_eq!(expected.is_eq(), strict(a, b, "="), "{a} = {b}");
            }
        }
    }

    #[test]
    fn mirrored_operators() {
        for a in LADDER {
            for b in LADDER {
                assert_eq!(ok(a, b, ">"), ok(b, a, "<"), "{a} {b}");
                assert_eq!(ok(a, b, ">="), ok(b, a, "<="), "{a} {b}");
                assert_eq!(strict(a, b, ">"), strict(b, a, "<"), "{a} {b}");
                assert_eq!(strict(a, b, ">="), strict(b, a, "<="), "{a} {b}");
            }
        }
    }

    #[test]
    fn reflexive() {
        for a in LADDER {
            for op in OPS {
                let expected = matches!(op, ">=" | "ge" | "<=" | "le" | "=" | "==" | "eq" | "===");

                assert_eq!(expected, ok(a, a, op), "{a} {op} {a}");
                assert_eq!(expected, strict(a, a, op), "{a} {op} {a}");
            }
        }
    }

    #[test]
    fn typed_operators() {
        assert_eq!(Ok(true), compare_with("1.0.0", "0.1", Op::Greater));
        assert_eq!(Ok(false), compare_with("1.0.0+a", "1.0.0+b", Op::StrictEqual));
        assert_eq!(Ok(true), compare_strict_with("1.0.0+a", "1.0.0+b", Op::Less));
    }
}
