//! The combined registry: all five class tables merged.
//!
//! Codes are disjoint across classes, so the unions below never collide.
//! Iteration order is class order, then ascending code.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::candidate::Candidate;
use crate::status::client_error::{CODES_4XX, STATUSES_4XX};
use crate::status::informational::{CODES_1XX, STATUSES_1XX};
use crate::status::redirection::{CODES_3XX, STATUSES_3XX};
use crate::status::server_error::{CODES_5XX, STATUSES_5XX};
use crate::status::successful::{CODES_2XX, STATUSES_2XX};
use crate::status::{LooseCode, StatusClass, StatusCode};

/// Name to code for every registered status code.
pub static HTTP_CODES: Lazy<IndexMap<&'static str, u16>> = Lazy::new(|| {
    [&CODES_1XX, &CODES_2XX, &CODES_3XX, &CODES_4XX, &CODES_5XX]
        .into_iter()
        .flat_map(|table| table.iter().map(|(name, code)| (*name, *code)))
        .collect()
});

/// Code to name for every registered status code.
pub static HTTP_STATUSES: Lazy<IndexMap<u16, &'static str>> = Lazy::new(|| {
    [&STATUSES_1XX, &STATUSES_2XX, &STATUSES_3XX, &STATUSES_4XX, &STATUSES_5XX]
        .into_iter()
        .flat_map(|table| table.iter().map(|(code, name)| (*code, *name)))
        .collect()
});

/// `true` when `value` is any registered status code.
pub fn is_strict<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::ALL.iter().any(|class| class.is_strict(value))
}

/// `true` when `value` is any integer in `100..=599`.
pub fn is_loose<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::ALL.iter().any(|class| class.is_loose(value))
}

pub fn lookup<C: Candidate + ?Sized>(value: &C) -> Option<StatusCode> {
    StatusCode::from_candidate(value)
}

/// The class whose decade holds `value`, registered or not.
pub fn classify<C: Candidate + ?Sized>(value: &C) -> Option<StatusClass> {
    LooseCode::from_candidate(value).map(LooseCode::class)
}
