//! The registered HTTP status codes.
//!
//! Every code registered by [RFC 9110 section 15](https://httpwg.org/specs/rfc9110.html#overview.of.status.codes)
//! is a variant of [`StatusCode`]. The per-class tables in the submodules
//! ([`informational`], [`successful`], [`redirection`], [`client_error`],
//! [`server_error`]) are all derived from that single list, so a code can
//! never be registered twice or land in the wrong class.
//!
//! Two typed domains are exposed:
//! - [`StatusCode`], the exact domain: only registered codes,
//! - [`LooseCode`], the permissive domain: any integer in `100..=599`.

mod class;
mod loose;

pub mod client_error;
pub mod informational;
pub mod redirection;
pub mod server_error;
pub mod successful;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::error::StatusError;

pub use class::StatusClass;
pub use loose::LooseCode;

/// Smallest value any class accepts.
pub const MIN_CODE: u16 = 100;
/// Largest value any class accepts.
pub const MAX_CODE: u16 = 599;

macro_rules! status_codes {
    ($(
        $(#[$docs:meta])*
        $variant:ident = $code:literal, $name:literal;
    )+) => {
        /// A registered HTTP status code.
        ///
        /// The discriminant is the numeric code, so `StatusCode::NotFound as u16`
        /// is `404`. Serialized as the bare number.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "u16", into = "u16")]
        #[repr(u16)]
        pub enum StatusCode {
            $(
                $(#[$docs])*
                $variant = $code,
            )+
        }

        impl StatusCode {
            /// Every registered code, in ascending order.
            pub const ALL: &'static [StatusCode] = &[$(StatusCode::$variant,)+];

            /// The canonical symbolic name, e.g. `"NOT_FOUND"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(StatusCode::$variant => $name,)+
                }
            }

            /// Look up a registered code by number.
            pub const fn from_u16(code: u16) -> Option<StatusCode> {
                match code {
                    $($code => Some(StatusCode::$variant),)+
                    _ => None,
                }
            }

            /// Look up a registered code by its symbolic name. Names are case sensitive.
            pub fn from_name(name: &str) -> Option<StatusCode> {
                match name {
                    $($name => Some(StatusCode::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    // 1xx Informational
    /// 100 Continue
    Continue = 100, "CONTINUE";
    /// 101 Switching Protocols
    SwitchingProtocols = 101, "SWITCHING_PROTOCOLS";

    // 2xx Successful
    /// 200 OK
    Ok = 200, "OK";
    /// 201 Created
    Created = 201, "CREATED";
    /// 202 Accepted
    Accepted = 202, "ACCEPTED";
    /// 203 Non-Authoritative Information
    NonAuthoritativeInformation = 203, "NON_AUTHORITATIVE_INFORMATION";
    /// 204 No Content
    NoContent = 204, "NO_CONTENT";
    /// 205 Reset Content
    ResetContent = 205, "RESET_CONTENT";
    /// 206 Partial Content
    PartialContent = 206, "PARTIAL_CONTENT";

    // 3xx Redirection
    /// 300 Multiple Choices
    MultipleChoices = 300, "MULTIPLE_CHOICES";
    /// 301 Moved Permanently
    MovedPermanently = 301, "MOVED_PERMANENTLY";
    /// 302 Found
    Found = 302, "FOUND";
    /// 303 See Other
    SeeOther = 303, "SEE_OTHER";
    /// 304 Not Modified
    NotModified = 304, "NOT_MODIFIED";
    /// 305 Use Proxy (deprecated)
    UseProxy = 305, "USE_PROXY";
    /// 306 (Unused), reserved
    Unused306 = 306, "UNUSED_306";
    /// 307 Temporary Redirect
    TemporaryRedirect = 307, "TEMPORARY_REDIRECT";
    /// 308 Permanent Redirect
    PermanentRedirect = 308, "PERMANENT_REDIRECT";

    // 4xx Client Error
    /// 400 Bad Request
    BadRequest = 400, "BAD_REQUEST";
    /// 401 Unauthorized
    Unauthorized = 401, "UNAUTHORIZED";
    /// 402 Payment Required
    PaymentRequired = 402, "PAYMENT_REQUIRED";
    /// 403 Forbidden
    Forbidden = 403, "FORBIDDEN";
    /// 404 Not Found
    NotFound = 404, "NOT_FOUND";
    /// 405 Method Not Allowed
    MethodNotAllowed = 405, "METHOD_NOT_ALLOWED";
    /// 406 Not Acceptable
    NotAcceptable = 406, "NOT_ACCEPTABLE";
    /// 407 Proxy Authentication Required
    ProxyAuthenticationRequired = 407, "PROXY_AUTHENTICATION_REQUIRED";
    /// 408 Request Timeout
    RequestTimeout = 408, "REQUEST_TIMEOUT";
    /// 409 Conflict
    Conflict = 409, "CONFLICT";
    /// 410 Gone
    Gone = 410, "GONE";
    /// 411 Length Required
    LengthRequired = 411, "LENGTH_REQUIRED";
    /// 412 Precondition Failed
    PreconditionFailed = 412, "PRECONDITION_FAILED";
    /// 413 Content Too Large
    ContentTooLarge = 413, "CONTENT_TOO_LARGE";
    /// 414 URI Too Long
    UriTooLong = 414, "URI_TOO_LONG";
    /// 415 Unsupported Media Type
    UnsupportedMediaType = 415, "UNSUPPORTED_MEDIA_TYPE";
    /// 416 Range Not Satisfiable
    RangeNotSatisfiable = 416, "RANGE_NOT_SATISFIABLE";
    /// 417 Expectation Failed
    ExpectationFailed = 417, "EXPECTATION_FAILED";
    /// 418 (Unused), reserved
    Unused418 = 418, "UNUSED_418";
    /// 421 Misdirected Request
    MisdirectedRequest = 421, "MISDIRECTED_REQUEST";
    /// 422 Unprocessable Content
    UnprocessableContent = 422, "UNPROCESSABLE_CONTENT";
    /// 426 Upgrade Required
    UpgradeRequired = 426, "UPGRADE_REQUIRED";

    // 5xx Server Error
    /// 500 Internal Server Error
    InternalServerError = 500, "INTERNAL_SERVER_ERROR";
    /// 501 Not Implemented
    NotImplemented = 501, "NOT_IMPLEMENTED";
    /// 502 Bad Gateway
    BadGateway = 502, "BAD_GATEWAY";
    /// 503 Service Unavailable
    ServiceUnavailable = 503, "SERVICE_UNAVAILABLE";
    /// 504 Gateway Timeout
    GatewayTimeout = 504, "GATEWAY_TIMEOUT";
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported = 505, "HTTP_VERSION_NOT_SUPPORTED";
}

impl StatusCode {
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// The class this code belongs to, from its hundreds digit.
    pub const fn class(self) -> StatusClass {
        match self.as_u16() / 100 {
            1 => StatusClass::Informational,
            2 => StatusClass::Successful,
            3 => StatusClass::Redirection,
            4 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    /// The registered code an arbitrary value stands for, if any.
    ///
    /// The value must be a number with no fractional part that matches a
    /// registered code exactly. Anything else, numbers in range included,
    /// gives `None`.
    pub fn from_candidate<C: Candidate + ?Sized>(value: &C) -> Option<StatusCode> {
        let code = value.numeric()?.as_integer()?;
        StatusCode::from_u16(u16::try_from(code).ok()?)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.name())
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = StatusError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        if !(MIN_CODE..=MAX_CODE).contains(&code) {
            return Err(StatusError::OutOfRange(code));
        }
        StatusCode::from_u16(code).ok_or(StatusError::Unregistered(code))
    }
}

impl From<StatusCode> for u16 {
    fn from(code: StatusCode) -> u16 {
        code.as_u16()
    }
}

/// Accepts either the symbolic name (`"NOT_FOUND"`) or the three digits (`"404"`).
impl FromStr for StatusCode {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return StatusCode::from_name(s).ok_or_else(|| StatusError::UnknownName(s.to_string()));
        }
        StatusCode::try_from(parse_three_digits(s)?)
    }
}

/// Exactly three ASCII digits; no sign, padding or whitespace.
pub(crate) fn parse_three_digits(s: &str) -> Result<u16, StatusError> {
    match s.as_bytes() {
        &[a, b, c] if a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() => {
            Ok(u16::from(a - b'0') * 100 + u16::from(b - b'0') * 10 + u16::from(c - b'0'))
        }
        _ => Err(StatusError::Malformed(s.to_string())),
    }
}
