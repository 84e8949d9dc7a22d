//! Reusable parsers for the `compare-versions` library.

use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map};
use nom::multi::separated_list1;
use nom::{IResult, Parser};

/// Parse an unsigned integer of any size, as its digits with leading zeroes
/// dropped. Zero itself is `"0"`.
pub fn unsigned(i: &str) -> IResult<&str, &str> {
    map(digit1, without_leading_zeroes).parse(i)
}

fn without_leading_zeroes(s: &str) -> &str {
    match s.trim_start_matches('0') {
        "" => "0",
        n => n,
    }
}

/// Parse the numeric core of a version, like `1.2.3`. The entire input must
/// be consumed.
pub fn numbers(i: &str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char('.'), unsigned)).parse(i)
}

/// Is this pre-release segment made up of ASCII digits alone?
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
