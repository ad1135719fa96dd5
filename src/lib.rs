//! HTTP status code registry.
//!
//! The registered status codes of RFC 9110, grouped into their five classes,
//! with predicates that classify arbitrary runtime values:
//!
//! - **strict**: the value is exactly one of the registered codes of a class
//!   (`is_strict_4xx(&418)` holds, `is_strict_4xx(&419)` does not),
//! - **loose**: the value is any integer inside the class decade
//!   (`is_loose_4xx(&419)` holds).
//!
//! Each class exposes a name to code table (`CODES_Nxx`), its inverse
//! (`STATUSES_Nxx`) and the two predicates. [`HTTP_CODES`] and
//! [`HTTP_STATUSES`] merge the five classes.
//!
//! Predicates take any [`Candidate`]: numbers of every primitive type, but
//! also strings, `Option`s, [`toml::Value`]s or `dyn Any`. Values that are not
//! numbers are simply rejected; the predicates never panic.
//!
//! ```
//! use http_status_codes::{HTTP_STATUSES, is_loose_5xx, is_strict_4xx};
//!
//! assert!(is_strict_4xx(&404));
//! assert!(!is_strict_4xx(&419));
//! assert!(is_loose_5xx(&599));
//! assert!(!is_loose_5xx(&500.1));
//! assert!(!is_loose_5xx("500"));
//! assert_eq!(HTTP_STATUSES[&404u16], "NOT_FOUND");
//! ```

pub mod candidate;
pub mod config;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod status;

pub use candidate::{Candidate, Numeric};
pub use error::{ConfigError, StatusError};
pub use matcher::{StatusMatcher, Strictness};
pub use registry::{HTTP_CODES, HTTP_STATUSES, classify, is_loose, is_strict, lookup};
pub use status::client_error::{CODES_4XX, STATUSES_4XX, is_loose_4xx, is_strict_4xx};
pub use status::informational::{CODES_1XX, STATUSES_1XX, is_loose_1xx, is_strict_1xx};
pub use status::redirection::{CODES_3XX, STATUSES_3XX, is_loose_3xx, is_strict_3xx};
pub use status::server_error::{CODES_5XX, STATUSES_5XX, is_loose_5xx, is_strict_5xx};
pub use status::successful::{CODES_2XX, STATUSES_2XX, is_loose_2xx, is_strict_2xx};
pub use status::{LooseCode, StatusClass, StatusCode};
