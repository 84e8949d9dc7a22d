//! Types and logic for turning raw input into a [`NormalizedVersion`].

use crate::evaluate::{Comparison, evaluate};
use crate::{Error, Op, parsers};
use itertools::Itertools;
use std::borrow::Cow;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// A raw version, as handed to us by a caller.
///
/// Anything string-like or numeric converts into a `Version`, so the top-level
/// functions like [`crate::compare`] accept `"1.2.3"`, `String`s, `2` and `1.5`
/// alike. An `Option` converts too, with `None` becoming [`Version::Absent`],
/// which always fails to normalize.
///
/// ```
/// use compare_versions::Version;
///
/// assert_eq!(Version::from("1.2.3").to_text().unwrap(), "1.2.3");
/// assert_eq!(Version::from(1.0).to_text().unwrap(), "1");
/// assert_eq!(Version::from(1.5).to_text().unwrap(), "1.5");
/// assert!(Version::from(None::<&str>).to_text().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Version<'a> {
    /// A textual version like `v1.2.3-rc.1+build.7`.
    Text(Cow<'a, str>),
    /// A bare number like `2` or `1.5`.
    Number(f64),
    /// No version was given at all.
    Absent,
}

impl Version<'_> {
    /// The canonical text of this `Version`, if there is any. Numbers are
    /// rendered in their shortest decimal form.
    pub fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Version::Text(s) => Some(Cow::Borrowed(s.as_ref())),
            // `-0.0` would otherwise render as `-0`.
            Version::Number(n) if *n == 0.0 => Some(Cow::Borrowed("0")),
            Version::Number(n) => Some(Cow::Owned(n.to_string())),
            Version::Absent => None,
        }
    }
}

impl<'a> From<&'a str> for Version<'a> {
    fn from(s: &'a str) -> Self {
        Version::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Version<'a> {
    fn from(s: &'a String) -> Self {
        Version::Text(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Version<'_> {
    fn from(s: String) -> Self {
        Version::Text(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Version<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Version::Text(s)
    }
}

impl From<f64> for Version<'_> {
    fn from(n: f64) -> Self {
        Version::Number(n)
    }
}

impl From<f32> for Version<'_> {
    fn from(n: f32) -> Self {
        Version::Number(f64::from(n))
    }
}

// Integers keep their exact text, which an `f64` could not promise for the
// wider types.
macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Version<'_> {
                fn from(n: $t) -> Self {
                    Version::Text(Cow::Owned(n.to_string()))
                }
            }
        )*
    };
}

from_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<'a, T> From<Option<T>> for Version<'a>
where
    T: Into<Version<'a>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Version::Absent, Into::into)
    }
}

/// A version broken into its numeric core, pre-release identifier, and build
/// metadata.
///
/// - Simple Sample: `1.2.3`
/// - Full Sample: `1.2.3-alpha.2+a1b2c3.1`
///
/// The numeric core may have any number of components, but at least one. A
/// leading `v` on the input is dropped.
///
/// ```
/// use compare_versions::NormalizedVersion;
///
/// let v = NormalizedVersion::new("v1.2-rc.1+git.abc").unwrap();
///
/// assert_eq!(vec!["1", "2"], v.numbers);
/// assert_eq!(Some("rc.1"), v.release.as_deref());
/// assert_eq!(Some("git.abc"), v.metadata.as_deref());
/// assert_eq!("1.2-rc.1+git.abc", v.to_string());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct NormalizedVersion {
    /// The dot-separated numeric core, most significant first. Never empty.
    /// Each component is a string of digits of any length, without leading
    /// zeroes.
    pub numbers: Vec<String>,
    /// Everything after the first `-`. `Some` implies that the inner `String`
    /// is not empty.
    pub release: Option<String>,
    /// Everything after the first `+`. `Some` implies that the inner `String`
    /// is not empty.
    pub metadata: Option<String>,
}

impl NormalizedVersion {
    /// Parse a `NormalizedVersion` from some input.
    pub fn new<S>(s: S) -> Option<NormalizedVersion>
    where
        S: AsRef<str>,
    {
        NormalizedVersion::parse(s.as_ref()).ok()
    }

    /// Normalize any raw [`Version`].
    ///
    /// ```
    /// use compare_versions::{Error, NormalizedVersion};
    ///
    /// let v = NormalizedVersion::normalize(2).unwrap();
    /// assert_eq!(vec!["2"], v.numbers);
    ///
    /// let bad = NormalizedVersion::normalize(None::<&str>);
    /// assert!(matches!(bad, Err(Error::InvalidFormat(_))));
    /// ```
    pub fn normalize<'a, V>(version: V) -> Result<NormalizedVersion, Error>
    where
        V: Into<Version<'a>>,
    {
        let version = version.into();
        let text = version.to_text();

        match text {
            Some(s) => NormalizedVersion::parse(&s),
            None => {
                log::trace!("Rejected an absent version");
                Err(Error::InvalidFormat("version cannot be absent".to_string()))
            }
        }
    }

    /// Parse the text form of a version.
    ///
    /// Metadata is split off at the first `+`, and then the pre-release at the
    /// first `-`. What remains must be dot-separated digits.
    pub fn parse(s: &str) -> Result<NormalizedVersion, Error> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let (rest, metadata) = split_at_first(trimmed, '+');
        let (core, release) = split_at_first(rest, '-');

        match parsers::numbers(core) {
            Ok((_, numbers)) => Ok(NormalizedVersion {
                numbers: numbers.into_iter().map(String::from).collect(),
                release,
                metadata,
            }),
            Err(_) => {
                log::trace!("Rejected version {s:?}: bad numeric core {core:?}");
                Err(Error::InvalidFormat(s.to_string()))
            }
        }
    }

    /// Compare against another `NormalizedVersion`, ignoring metadata unless
    /// the operator is `===` or `!==`.
    ///
    /// ```
    /// use compare_versions::{NormalizedVersion, Op};
    ///
    /// let a = NormalizedVersion::new("1.0.0+alpha").unwrap();
    /// let b = NormalizedVersion::new("1.0.0+beta").unwrap();
    ///
    /// assert!(a.compare(&b, Op::Equal));
    /// assert!(!a.compare(&b, Op::StrictEqual));
    /// ```
    pub fn compare(&self, other: &NormalizedVersion, op: Op) -> bool {
        if op.is_strict() {
            self.compare_strict(other, op)
        } else {
            op.loose(&self.evaluate(other, op))
        }
    }

    /// Compare against another `NormalizedVersion`, always including metadata
    /// as the final tiebreaker.
    pub fn compare_strict(&self, other: &NormalizedVersion, op: Op) -> bool {
        op.strict(&self.evaluate(other, Op::StrictEqual))
    }

    /// Evaluate each tier of the two versions separately.
    pub fn evaluate(&self, other: &NormalizedVersion, op: Op) -> Comparison {
        evaluate(self, other, op)
    }

    #[cfg(feature = "serde")]
    /// Function suitable for use as a serde deserializer for
    /// `NormalizedVersion` where `NormalizedVersion` is the type of a field in
    /// a struct, and the raw input is a version string.
    ///
    /// ```rust
    /// use compare_versions::NormalizedVersion;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Foo {
    ///    #[serde(deserialize_with = "NormalizedVersion::deserialize_pretty")]
    ///    version: NormalizedVersion,
    ///    // ...
    /// }
    ///
    /// let foo: Foo = serde_json::from_str(r#"{"version": "1.0.0-rc.1"}"#).unwrap();
    /// assert_eq!(Some("rc.1"), foo.version.release.as_deref());
    /// ```
    pub fn deserialize_pretty<'de, D>(deserializer: D) -> Result<NormalizedVersion, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;

        NormalizedVersion::parse(&s).map_err(D::Error::custom)
    }
}

/// Split at the first occurrence of `sep`. An empty right-hand side counts as
/// no split at all.
fn split_at_first(s: &str, sep: char) -> (&str, Option<String>) {
    match s.split_once(sep) {
        None => (s, None),
        Some((l, "")) => (l, None),
        Some((l, r)) => (l, Some(r.to_string())),
    }
}

impl std::fmt::Display for NormalizedVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.numbers.iter().join("."))?;

        if let Some(r) = &self.release {
            write!(f, "-{}", r)?;
        }

        if let Some(m) = &self.metadata {
            write!(f, "+{}", m)?;
        }

        Ok(())
    }
}

impl FromStr for NormalizedVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalizedVersion::parse(s)
    }
}

impl TryFrom<&str> for NormalizedVersion {
    type Error = Error;

    /// ```
    /// use compare_versions::NormalizedVersion;
    ///
    /// let orig = "1.2.3";
    /// let prsd: NormalizedVersion = orig.try_into().unwrap();
    /// assert_eq!(orig, prsd.to_string());
    /// ```
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        NormalizedVersion::from_str(value)
    }
}
