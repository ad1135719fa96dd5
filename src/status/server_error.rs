//! 5xx Server Error.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::candidate::Candidate;
use crate::status::StatusClass;

pub static CODES_5XX: Lazy<IndexMap<&'static str, u16>> =
    Lazy::new(|| StatusClass::ServerError.codes_table());

pub static STATUSES_5XX: Lazy<IndexMap<u16, &'static str>> =
    Lazy::new(|| StatusClass::ServerError.statuses_table());

/// `true` only for a registered 5xx code.
pub fn is_strict_5xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::ServerError.is_strict(value)
}

/// `true` for any integer in `500..=599`, e.g. a vendor specific 520 relayed
/// by a proxy.
pub fn is_loose_5xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::ServerError.is_loose(value)
}
