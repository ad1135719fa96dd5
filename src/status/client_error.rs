//! 4xx Client Error.
//!
//! Only the codes registered by RFC 9110 are strict members. Codes from
//! other documents (423 Locked, 429 Too Many Requests, ...) are loose
//! members only.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::candidate::Candidate;
use crate::status::StatusClass;

/// Name to code.
pub static CODES_4XX: Lazy<IndexMap<&'static str, u16>> =
    Lazy::new(|| StatusClass::ClientError.codes_table());

/// Code to name, the inverse of [`CODES_4XX`].
pub static STATUSES_4XX: Lazy<IndexMap<u16, &'static str>> =
    Lazy::new(|| StatusClass::ClientError.statuses_table());

/// `true` only for a registered 4xx code. 418 is reserved but registered, so
/// it counts.
pub fn is_strict_4xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::ClientError.is_strict(value)
}

/// `true` for any integer in `400..=499`.
pub fn is_loose_4xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::ClientError.is_loose(value)
}
