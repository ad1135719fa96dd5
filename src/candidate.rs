//! Probing arbitrary runtime values for a numeric status code.
//!
//! The classification predicates accept "a value of unknown type". In Rust
//! that is anything implementing [`Candidate`]: the primitive numbers, the
//! common non-numeric primitives (which always answer `None`), dynamic values
//! such as [`toml::Value`] or `dyn Any`, and this crate's own code types.
//!
//! A candidate only reports *whether it is a number and which one*. Range and
//! registry checks live with the predicates.

use std::any::Any;

use crate::status::{LooseCode, StatusCode};

/// A number extracted from a [`Candidate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i128),
    Float(f64),
}

impl Numeric {
    /// The integral value, if there is one.
    ///
    /// Floats count only when they are finite and carry no fractional part,
    /// so `404.0` is `404` while `404.5`, `NaN` and infinities are not
    /// integers at all.
    pub fn as_integer(self) -> Option<i128> {
        match self {
            Numeric::Integer(i) => Some(i),
            Numeric::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i128),
            Numeric::Float(_) => None,
        }
    }
}

/// A value that can be offered to the status code predicates.
///
/// Behind `dyn Any` a value answers the same as when statically typed, as long
/// as it is one of the supported types: a primitive number, one of this
/// crate's codes, a [`toml::Value`], an `Option` of any of those, or another
/// boxed `dyn Any` holding one.
pub trait Candidate {
    /// `Some` when the value is a number, `None` for every other kind of value.
    fn numeric(&self) -> Option<Numeric>;
}

macro_rules! integer_candidates {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate for $ty {
                fn numeric(&self) -> Option<Numeric> {
                    Some(Numeric::Integer(i128::from(*self)))
                }
            }
        )*
    };
}

integer_candidates!(u8, u16, u32, u64, i8, i16, i32, i64, i128);

impl Candidate for u128 {
    fn numeric(&self) -> Option<Numeric> {
        // Anything past i128::MAX is far outside every class anyway.
        Some(i128::try_from(*self).map_or(Numeric::Float(*self as f64), Numeric::Integer))
    }
}

impl Candidate for usize {
    fn numeric(&self) -> Option<Numeric> {
        Some(i128::try_from(*self).map_or(Numeric::Float(*self as f64), Numeric::Integer))
    }
}

impl Candidate for isize {
    fn numeric(&self) -> Option<Numeric> {
        Some(i128::try_from(*self).map_or(Numeric::Float(*self as f64), Numeric::Integer))
    }
}

impl Candidate for f32 {
    fn numeric(&self) -> Option<Numeric> {
        Some(Numeric::Float(f64::from(*self)))
    }
}

impl Candidate for f64 {
    fn numeric(&self) -> Option<Numeric> {
        Some(Numeric::Float(*self))
    }
}

macro_rules! non_numeric_candidates {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Candidate for $ty {
                fn numeric(&self) -> Option<Numeric> {
                    None
                }
            }
        )*
    };
}

// Digit strings stay strings: "404" is not a status code.
non_numeric_candidates!(bool, char, str, String, ());

impl<T: Candidate> Candidate for Option<T> {
    fn numeric(&self) -> Option<Numeric> {
        self.as_ref().and_then(Candidate::numeric)
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    fn numeric(&self) -> Option<Numeric> {
        (**self).numeric()
    }
}

impl<T: Candidate + ?Sized> Candidate for Box<T> {
    fn numeric(&self) -> Option<Numeric> {
        (**self).numeric()
    }
}

impl Candidate for toml::Value {
    fn numeric(&self) -> Option<Numeric> {
        match self {
            toml::Value::Integer(i) => Some(Numeric::Integer(i128::from(*i))),
            toml::Value::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }
}

impl Candidate for StatusCode {
    fn numeric(&self) -> Option<Numeric> {
        Some(Numeric::Integer(i128::from(self.as_u16())))
    }
}

impl Candidate for LooseCode {
    fn numeric(&self) -> Option<Numeric> {
        Some(Numeric::Integer(i128::from(self.as_u16())))
    }
}

macro_rules! downcast_numeric {
    ($value:expr; $($ty:ty),* $(,)?) => {{
        $(
            if let Some(v) = $value.downcast_ref::<$ty>() {
                return v.numeric();
            }
        )*
        None
    }};
}

macro_rules! any_candidates {
    ($($any:ty),* $(,)?) => {
        $(
            impl Candidate for $any {
                fn numeric(&self) -> Option<Numeric> {
                    downcast_numeric!(
                        self;
                        u8, u16, u32, u64, u128, usize,
                        i8, i16, i32, i64, i128, isize,
                        f32, f64,
                        StatusCode, LooseCode, toml::Value,
                        Option<u8>, Option<u16>, Option<u32>, Option<u64>, Option<u128>, Option<usize>,
                        Option<i8>, Option<i16>, Option<i32>, Option<i64>, Option<i128>, Option<isize>,
                        Option<f32>, Option<f64>,
                        Option<StatusCode>, Option<LooseCode>, Option<toml::Value>,
                        Box<dyn Any>, Box<dyn Any + Send>, Box<dyn Any + Send + Sync>,
                    )
                }
            }
        )*
    };
}

any_candidates!(dyn Any, dyn Any + Send, dyn Any + Send + Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integers_report_themselves() {
        assert_eq!(404u16.numeric(), Some(Numeric::Integer(404)));
        assert_eq!((-1i8).numeric(), Some(Numeric::Integer(-1)));
        assert_eq!(u128::MAX.numeric().and_then(Numeric::as_integer), Some(i128::MAX));
    }

    #[test]
    fn floats_are_integral_only_without_fraction() {
        assert_eq!(Numeric::Float(404.0).as_integer(), Some(404));
        assert_eq!(Numeric::Float(404.5).as_integer(), None);
        assert_eq!(Numeric::Float(f64::NAN).as_integer(), None);
        assert_eq!(Numeric::Float(f64::INFINITY).as_integer(), None);
    }

    #[test]
    fn non_numbers_report_none() {
        assert_eq!("404".numeric(), None);
        assert_eq!(String::from("500").numeric(), None);
        assert_eq!(true.numeric(), None);
        assert_eq!('4'.numeric(), None);
        assert_eq!(().numeric(), None);
        assert_eq!(None::<u16>.numeric(), None);
    }

    #[test]
    fn wrappers_delegate() {
        assert_eq!(Some(200u16).numeric(), Some(Numeric::Integer(200)));
        assert_eq!((&&301i64).numeric(), Some(Numeric::Integer(301)));
        let boxed: Box<dyn Any> = Box::new(502u32);
        assert_eq!(boxed.numeric(), Some(Numeric::Integer(502)));
    }

    #[test]
    fn any_downcasts_known_numbers_only() {
        let n: &dyn Any = &418i32;
        assert_eq!(n.numeric(), Some(Numeric::Integer(418)));

        let s: &dyn Any = &"418";
        assert_eq!(s.numeric(), None);

        let v: &(dyn Any + Send + Sync) = &vec![1, 2, 3];
        assert_eq!(v.numeric(), None);
    }

    #[test]
    fn any_matches_static_typing_for_options_and_boxes() {
        let some: &dyn Any = &Some(404u16);
        assert_eq!(some.numeric(), Some(404u16).numeric());

        let none: &dyn Any = &None::<u16>;
        assert_eq!(none.numeric(), None);

        let inner: Box<dyn Any> = Box::new(503.0f64);
        let outer: Box<dyn Any> = Box::new(inner);
        assert_eq!(outer.numeric(), Some(Numeric::Float(503.0)));

        let sendable: Box<dyn Any + Send> = Box::new(Some(418i64));
        let nested: &dyn Any = &sendable;
        assert_eq!(nested.numeric(), Some(Numeric::Integer(418)));
    }

    #[test]
    fn toml_values() {
        assert_eq!(toml::Value::Integer(503).numeric(), Some(Numeric::Integer(503)));
        assert_eq!(toml::Value::Float(503.5).numeric(), Some(Numeric::Float(503.5)));
        assert_eq!(toml::Value::String("503".into()).numeric(), None);
        assert_eq!(toml::Value::Boolean(false).numeric(), None);
    }
}
