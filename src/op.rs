//! Comparison operators.

use crate::Error;
use crate::evaluate::Comparison;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

/// The token used when a caller doesn't care to choose one.
pub const DEFAULT_OP: &str = ">";

/// Comparison operators: `>`, `>=`, `<`, `<=`, `=`, `!=`, `===`, `!==`.
///
/// Each has textual synonyms which parse to the same variant:
///
/// | Variant            | Tokens              |
/// |--------------------|---------------------|
/// | `Greater`          | `>`, `gt`           |
/// | `GreaterEq`        | `>=`, `ge`          |
/// | `Less`             | `<`, `lt`           |
/// | `LessEq`           | `<=`, `le`          |
/// | `Equal`            | `=`, `==`, `eq`     |
/// | `NotEqual`         | `!=`, `<>`, `ne`    |
/// | `StrictEqual`      | `===`               |
/// | `StrictNotEqual`   | `!==`               |
///
/// ```
/// use compare_versions::{Error, Op};
///
/// assert_eq!(Ok(Op::NotEqual), "<>".parse());
/// assert_eq!(Ok(Op::GreaterEq), "ge".parse());
/// assert_eq!(Err(Error::UnsupportedOperator("?".to_string())), "?".parse::<Op>());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Op {
    /// The left version must be strictly greater.
    #[default]
    Greater,
    /// The left version must be greater than or equal.
    GreaterEq,
    /// The left version must be strictly less.
    Less,
    /// The left version must be less than or equal.
    LessEq,
    /// The versions must be equal. Metadata only counts in strict comparison.
    Equal,
    /// The versions must differ. Metadata only counts in strict comparison.
    NotEqual,
    /// The versions must be equal, metadata included.
    StrictEqual,
    /// The versions must differ, metadata included.
    StrictNotEqual,
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Op::Greater => write!(f, ">"),
            Op::GreaterEq => write!(f, ">="),
            Op::Less => write!(f, "<"),
            Op::LessEq => write!(f, "<="),
            Op::Equal => write!(f, "="),
            Op::NotEqual => write!(f, "!="),
            Op::StrictEqual => write!(f, "==="),
            Op::StrictNotEqual => write!(f, "!=="),
        }
    }
}

impl Op {
    /// Parse a new `Op` from one of its tokens.
    pub fn new(s: &str) -> Option<Op> {
        match s {
            ">" | "gt" => Some(Op::Greater),
            ">=" | "ge" => Some(Op::GreaterEq),
            "<" | "lt" => Some(Op::Less),
            "<=" | "le" => Some(Op::LessEq),
            "=" | "==" | "eq" => Some(Op::Equal),
            "!=" | "<>" | "ne" => Some(Op::NotEqual),
            "===" => Some(Op::StrictEqual),
            "!==" => Some(Op::StrictNotEqual),
            _ => None,
        }
    }

    /// Is this `===` or `!==`? These always take metadata into account.
    pub fn is_strict(&self) -> bool {
        matches!(self, Op::StrictEqual | Op::StrictNotEqual)
    }

    /// Decide a loose comparison. The numeric core dominates, and the
    /// pre-release breaks ties. Metadata is ignored, except by `===` and `!==`
    /// which defer to [`Op::strict`].
    ///
    /// ```
    /// use compare_versions::{NormalizedVersion, Op};
    ///
    /// let a = NormalizedVersion::new("1.0.0-alpha").unwrap();
    /// let b = NormalizedVersion::new("1.0.0").unwrap();
    ///
    /// assert!(Op::Less.loose(&a.evaluate(&b, Op::Less)));
    /// ```
    pub fn loose(&self, c: &Comparison) -> bool {
        let ord = c.loose();

        match self {
            Op::Greater => ord == Greater,
            Op::GreaterEq => ord != Less,
            Op::Less => ord == Less,
            Op::LessEq => ord != Greater,
            Op::Equal => ord == Equal,
            Op::NotEqual => ord != Equal,
            Op::StrictEqual | Op::StrictNotEqual => self.strict(c),
        }
    }

    /// Decide a strict comparison: numeric core, then pre-release, then
    /// metadata. Here `=` means `===`, and `!=` means `!==`.
    pub fn strict(&self, c: &Comparison) -> bool {
        let ord = c.strict();

        match self {
            Op::Greater => ord == Greater,
            Op::GreaterEq => ord != Less,
            Op::Less => ord == Less,
            Op::LessEq => ord != Greater,
            Op::Equal | Op::StrictEqual => ord == Equal,
            Op::NotEqual | Op::StrictNotEqual => ord != Equal,
        }
    }

    #[cfg(feature = "serde")]
    /// Function suitable for use as a serde deserializer for `Op` where `Op`
    /// is the type of a field in a struct.
    ///
    /// ```rust
    /// use compare_versions::Op;
    /// use serde::Deserialize;
    /// use serde_json::from_str;
    ///
    /// #[derive(Deserialize)]
    /// struct Foo {
    ///    #[serde(deserialize_with = "Op::deserialize")]
    ///    op: Op,
    ///    // ...
    /// }
    ///
    /// let foo: Foo = from_str(r#"{"op": "ge"}"#).unwrap();
    /// assert_eq!(Op::GreaterEq, foo.op);
    /// ```
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Op, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;

        s.parse().map_err(D::Error::custom)
    }

    #[cfg(feature = "serde")]
    /// Function suitable for use as a custom serde serializer for the `Op`
    /// type. Writes the symbolic token.
    ///
    /// ```rust
    /// use compare_versions::Op;
    /// use serde::Serialize;
    /// use serde_json::to_string;
    ///
    /// #[derive(Serialize)]
    /// struct Foo {
    ///    #[serde(serialize_with = "Op::serialize")]
    ///    op: Op,
    ///    // ...
    /// }
    ///
    /// let foo = Foo { op: Op::LessEq };
    /// assert_eq!(r#"{"op":"<="}"#, to_string(&foo).unwrap());
    /// ```
    pub fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s: String = self.to_string();
        serializer.serialize_str(&s)
    }
}

impl FromStr for Op {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::new(s).ok_or_else(|| Error::UnsupportedOperator(s.to_string()))
    }
}

impl TryFrom<&str> for Op {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Op::from_str(value)
    }
}
