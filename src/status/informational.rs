//! 1xx Informational.
//!
//! Interim responses sent before the final one; they end with the header
//! section and carry no content.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::candidate::Candidate;
use crate::status::StatusClass;

/// Name to code.
pub static CODES_1XX: Lazy<IndexMap<&'static str, u16>> =
    Lazy::new(|| StatusClass::Informational.codes_table());

/// Code to name, the inverse of [`CODES_1XX`].
pub static STATUSES_1XX: Lazy<IndexMap<u16, &'static str>> =
    Lazy::new(|| StatusClass::Informational.statuses_table());

/// `true` only for a registered 1xx code.
pub fn is_strict_1xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::Informational.is_strict(value)
}

/// `true` for any integer in `100..=199`.
pub fn is_loose_1xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::Informational.is_loose(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table() {
        assert_eq!(
            CODES_1XX.iter().map(|(n, c)| (*n, *c)).collect::<Vec<_>>(),
            vec![("CONTINUE", 100), ("SWITCHING_PROTOCOLS", 101)]
        );
        assert_eq!(STATUSES_1XX.get(&101u16), Some(&"SWITCHING_PROTOCOLS"));
    }

    #[test]
    fn strict() {
        for code in CODES_1XX.values() {
            assert!(is_strict_1xx(code));
        }
        assert!(!is_strict_1xx(&102));
        assert!(!is_strict_1xx(&150));
        assert!(!is_strict_1xx(&300));
    }

    #[test]
    fn loose() {
        assert!(!is_loose_1xx(&99));
        assert!(is_loose_1xx(&100));
        assert!(is_loose_1xx(&199));
        assert!(!is_loose_1xx(&200));
        assert!(!is_loose_1xx(&100.1));
    }
}
