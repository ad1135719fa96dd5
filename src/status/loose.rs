use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::StatusError;
use crate::status::{MAX_CODE, MIN_CODE, StatusClass, StatusCode, parse_three_digits};

/// Any integer in `100..=599`, whether or not a code is registered for it.
///
/// This is the permissive counterpart to [`StatusCode`]: a proxy relaying an
/// unknown 5xx still has a well formed `LooseCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct LooseCode(u16);

impl LooseCode {
    pub fn new(code: u16) -> Result<LooseCode, StatusError> {
        if (MIN_CODE..=MAX_CODE).contains(&code) {
            Ok(LooseCode(code))
        } else {
            Err(StatusError::OutOfRange(code))
        }
    }

    pub fn from_candidate<C: Candidate + ?Sized>(value: &C) -> Option<LooseCode> {
        let code = value.numeric()?.as_integer()?;
        LooseCode::new(u16::try_from(code).ok()?).ok()
    }

    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    pub const fn class(self) -> StatusClass {
        match self.0 / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Successful,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    /// The registered code with this number, if there is one.
    pub fn registered(self) -> Option<StatusCode> {
        StatusCode::from_u16(self.0)
    }
}

impl TryFrom<u16> for LooseCode {
    type Error = StatusError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        LooseCode::new(code)
    }
}

impl From<LooseCode> for u16 {
    fn from(code: LooseCode) -> u16 {
        code.0
    }
}

impl From<StatusCode> for LooseCode {
    fn from(code: StatusCode) -> LooseCode {
        LooseCode(code.as_u16())
    }
}

impl FromStr for LooseCode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LooseCode::new(parse_three_digits(s)?)
    }
}

impl fmt::Display for LooseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bounds() {
        assert!(LooseCode::new(100).is_ok());
        assert!(LooseCode::new(599).is_ok());
        assert_eq!(LooseCode::new(99), Err(StatusError::OutOfRange(99)));
        assert_eq!(LooseCode::new(600), Err(StatusError::OutOfRange(600)));
    }

    #[test]
    fn unregistered_codes_are_still_loose() {
        let code = LooseCode::new(419).unwrap();
        assert_eq!(code.class(), StatusClass::ClientError);
        assert_eq!(code.registered(), None);

        let code = LooseCode::from(StatusCode::Unused418);
        assert_eq!(code.registered(), Some(StatusCode::Unused418));
    }

    #[test]
    fn parse() {
        assert_eq!("599".parse::<LooseCode>().map(LooseCode::as_u16), Ok(599));
        assert_eq!(
            "5xx".parse::<LooseCode>(),
            Err(StatusError::Malformed("5xx".to_string()))
        );
        assert_eq!("700".parse::<LooseCode>(), Err(StatusError::OutOfRange(700)));
        assert_eq!(
            "+404".parse::<LooseCode>(),
            Err(StatusError::Malformed("+404".to_string()))
        );
        assert_eq!(
            "0404".parse::<LooseCode>(),
            Err(StatusError::Malformed("0404".to_string()))
        );
    }

    #[test]
    fn class_of_every_value() {
        for x in MIN_CODE..=MAX_CODE {
            let code = LooseCode::new(x).unwrap();
            assert_eq!(Some(code.class()), StatusClass::of(x));
        }
    }

    #[test]
    fn serde_as_number() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Wrapper {
            c: LooseCode,
        }

        let parsed: Wrapper = toml::from_str("c = 419").unwrap();
        assert_eq!(parsed.c, LooseCode::new(419).unwrap());
        assert_eq!(toml::to_string(&parsed).unwrap().trim(), "c = 419");
        assert_eq!(toml::from_str::<Wrapper>(&toml::to_string(&parsed).unwrap()).unwrap(), parsed);

        assert!(toml::from_str::<Wrapper>("c = 600").is_err());
        assert!(toml::from_str::<Wrapper>("c = 99").is_err());
    }

    #[test]
    fn from_candidate() {
        assert_eq!(LooseCode::from_candidate(&599u64).map(u16::from), Some(599));
        assert_eq!(LooseCode::from_candidate(&599.5), None);
        assert_eq!(LooseCode::from_candidate(&Some(600)), None);
        assert_eq!(LooseCode::from_candidate(&'5'), None);
    }
}
