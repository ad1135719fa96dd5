//! 3xx Redirection.
//!
//! 306 is reserved (it was "Switch Proxy" in earlier drafts) and 305 is
//! deprecated; both stay registered so strict checks recognise them.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::candidate::Candidate;
use crate::status::StatusClass;

/// Name to code.
pub static CODES_3XX: Lazy<IndexMap<&'static str, u16>> =
    Lazy::new(|| StatusClass::Redirection.codes_table());

/// Code to name.
pub static STATUSES_3XX: Lazy<IndexMap<u16, &'static str>> =
    Lazy::new(|| StatusClass::Redirection.statuses_table());

pub fn is_strict_3xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::Redirection.is_strict(value)
}

pub fn is_loose_3xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::Redirection.is_loose(value)
}
