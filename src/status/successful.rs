//! 2xx Successful.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::candidate::Candidate;
use crate::status::StatusClass;

pub static CODES_2XX: Lazy<IndexMap<&'static str, u16>> =
    Lazy::new(|| StatusClass::Successful.codes_table());

pub static STATUSES_2XX: Lazy<IndexMap<u16, &'static str>> =
    Lazy::new(|| StatusClass::Successful.statuses_table());

pub fn is_strict_2xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::Successful.is_strict(value)
}

pub fn is_loose_2xx<C: Candidate + ?Sized>(value: &C) -> bool {
    StatusClass::Successful.is_loose(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table() {
        assert_eq!(
            CODES_2XX.values().copied().collect::<Vec<_>>(),
            vec![200, 201, 202, 203, 204, 205, 206]
        );
        assert_eq!(CODES_2XX.get("NON_AUTHORITATIVE_INFORMATION"), Some(&203));
    }

    #[test]
    fn strict() {
        for code in CODES_2XX.values() {
            assert!(is_strict_2xx(code));
        }
        assert!(!is_strict_2xx(&250));
        assert!(!is_strict_2xx(&300));
    }

    #[test]
    fn loose() {
        assert!(!is_loose_2xx(&199));
        assert!(is_loose_2xx(&250));
        assert!(!is_loose_2xx(&300));
        assert!(!is_loose_2xx(&200.1));
    }
}
