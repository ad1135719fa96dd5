use std::fmt;
use std::ops::RangeInclusive;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::status::StatusCode;

/// The five status code classes, keyed by hundreds digit.
///
/// Serialized as its label (`"4xx"`), which is also how it is written in a
/// [`MatcherConfig`](crate::config::MatcherConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatusClass {
    #[serde(rename = "1xx")]
    Informational,
    #[serde(rename = "2xx")]
    Successful,
    #[serde(rename = "3xx")]
    Redirection,
    #[serde(rename = "4xx")]
    ClientError,
    #[serde(rename = "5xx")]
    ServerError,
}

impl StatusClass {
    pub const ALL: [StatusClass; 5] = [
        StatusClass::Informational,
        StatusClass::Successful,
        StatusClass::Redirection,
        StatusClass::ClientError,
        StatusClass::ServerError,
    ];

    pub const fn digit(self) -> u16 {
        match self {
            StatusClass::Informational => 1,
            StatusClass::Successful => 2,
            StatusClass::Redirection => 3,
            StatusClass::ClientError => 4,
            StatusClass::ServerError => 5,
        }
    }

    pub const fn from_digit(digit: u16) -> Option<StatusClass> {
        match digit {
            1 => Some(StatusClass::Informational),
            2 => Some(StatusClass::Successful),
            3 => Some(StatusClass::Redirection),
            4 => Some(StatusClass::ClientError),
            5 => Some(StatusClass::ServerError),
            _ => None,
        }
    }

    /// The class whose decade contains `code`, registered or not.
    pub const fn of(code: u16) -> Option<StatusClass> {
        StatusClass::from_digit(code / 100)
    }

    /// The inclusive decade, e.g. `500..=599`.
    pub const fn range(self) -> RangeInclusive<u16> {
        let start = self.digit() * 100;
        RangeInclusive::new(start, start + 99)
    }

    pub const fn label(self) -> &'static str {
        match self {
            StatusClass::Informational => "1xx",
            StatusClass::Successful => "2xx",
            StatusClass::Redirection => "3xx",
            StatusClass::ClientError => "4xx",
            StatusClass::ServerError => "5xx",
        }
    }

    /// Registered codes of this class, ascending.
    pub fn codes(self) -> impl Iterator<Item = StatusCode> {
        StatusCode::ALL
            .iter()
            .copied()
            .filter(move |code| code.class() == self)
    }

    /// Name to code table for this class.
    pub fn codes_table(self) -> IndexMap<&'static str, u16> {
        self.codes().map(|code| (code.name(), code.as_u16())).collect()
    }

    /// Code to name table for this class.
    pub fn statuses_table(self) -> IndexMap<u16, &'static str> {
        self.codes().map(|code| (code.as_u16(), code.name())).collect()
    }

    /// Strict membership: `value` is exactly one of this class's registered codes.
    pub fn is_strict<C: Candidate + ?Sized>(self, value: &C) -> bool {
        StatusCode::from_candidate(value).is_some_and(|code| code.class() == self)
    }

    /// Loose membership: `value` is an integer inside this class's decade.
    pub fn is_loose<C: Candidate + ?Sized>(self, value: &C) -> bool {
        let range = self.range();
        value
            .numeric()
            .and_then(|n| n.as_integer())
            .is_some_and(|i| i >= i128::from(*range.start()) && i <= i128::from(*range.end()))
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
