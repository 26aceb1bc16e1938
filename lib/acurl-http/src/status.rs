//! HTTP status code registry.
//!
//! [`Status`] names the registered codes a response may carry and
//! [`StatusClass`] sorts any numeric code into its classification band.
//! The registry is documentation data: the [`Response`](crate::Response)
//! predicates use plain range checks and never consult it.

use std::fmt;

use derive_more::Display;

use crate::Error;

/// Classification band of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum StatusClass {
    /// 1xx - request received, continuing.
    #[display("informational")]
    Informational,
    /// 2xx - request accepted and handled.
    #[display("success")]
    Success,
    /// 3xx - further action needed to complete the request.
    #[display("redirection")]
    Redirection,
    /// 4xx - the request was at fault.
    #[display("client error")]
    ClientError,
    /// 5xx and above - the server was at fault.
    #[display("server error")]
    ServerError,
}

impl StatusClass {
    /// Band for a numeric code, `None` below 100.
    ///
    /// Takes the same `i64` that [`Response::status_code`](crate::Response::status_code)
    /// returns.
    ///
    /// Codes of 600 and above fall in [`StatusClass::ServerError`], the same
    /// way [`Response::is_failure`](crate::Response::is_failure) has no upper
    /// bound.
    #[must_use]
    pub const fn of(code: i64) -> Option<Self> {
        match code {
            100..=199 => Some(Self::Informational),
            200..=299 => Some(Self::Success),
            300..=399 => Some(Self::Redirection),
            400..=499 => Some(Self::ClientError),
            500.. => Some(Self::ServerError),
            _ => None,
        }
    }

    /// Returns `true` for the two error bands.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::ClientError | Self::ServerError)
    }
}

macro_rules! status_registry {
    (
        $(
            ($code:literal, $name:ident, $phrase:literal);
        )+
    ) => {
        /// Registered HTTP status code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum Status {
            $(
                #[doc = concat!("`", stringify!($code), " ", $phrase, "`")]
                $name = $code,
            )+
        }

        impl Status {
            /// Every registered status, ascending by code.
            pub const ALL: &'static [Self] = &[$(Self::$name,)+];

            /// Standard reason phrase.
            #[must_use]
            pub const fn reason_phrase(self) -> &'static str {
                match self {
                    $(Self::$name => $phrase,)+
                }
            }

            /// Registry entry for a numeric code.
            #[must_use]
            pub const fn from_code(code: u16) -> Option<Self> {
                match code {
                    $($code => Some(Self::$name),)+
                    _ => None,
                }
            }
        }
    };
}

status_registry! {
    // 1xx Informational
    (100, Continue, "Continue");
    (101, SwitchingProtocols, "Switching Protocols");
    (102, Processing, "Processing");

    // 2xx Success
    (200, Ok, "OK");
    (201, Created, "Created");
    (202, Accepted, "Accepted");
    (203, NonAuthoritativeInformation, "Non-Authoritative Information");
    (204, NoContent, "No Content");
    (205, ResetContent, "Reset Content");
    (206, PartialContent, "Partial Content");
    (207, MultiStatus, "Multi-Status");
    (208, AlreadyReported, "Already Reported");
    (226, ImUsed, "IM Used");

    // 3xx Redirection
    (300, MultipleChoices, "Multiple Choices");
    (301, MovedPermanently, "Moved Permanently");
    (302, Found, "Found");
    (303, SeeOther, "See Other");
    (304, NotModified, "Not Modified");
    (305, UseProxy, "Use Proxy");
    (307, TemporaryRedirect, "Temporary Redirect");
    (308, PermanentRedirect, "Permanent Redirect");

    // 4xx Client Error
    (400, BadRequest, "Bad Request");
    (401, Unauthorized, "Unauthorized");
    (402, PaymentRequired, "Payment Required");
    (403, Forbidden, "Forbidden");
    (404, NotFound, "Not Found");
    (405, MethodNotAllowed, "Method Not Allowed");
    (406, NotAcceptable, "Not Acceptable");
    (407, ProxyAuthenticationRequired, "Proxy Authentication Required");
    (408, RequestTimeout, "Request Timeout");
    (409, Conflict, "Conflict");
    (410, Gone, "Gone");
    (411, LengthRequired, "Length Required");
    (412, PreconditionFailed, "Precondition Failed");
    (413, RequestEntityTooLarge, "Request Entity Too Large");
    (414, RequestUriTooLong, "Request-URI Too Long");
    (415, UnsupportedMediaType, "Unsupported Media Type");
    (416, RequestedRangeNotSatisfiable, "Requested Range Not Satisfiable");
    (417, ExpectationFailed, "Expectation Failed");
    (418, ImATeapot, "I'm a teapot");

    // 5xx Server Error
    (500, InternalServerError, "Internal Server Error");
    (501, NotImplemented, "Not Implemented");
    (502, BadGateway, "Bad Gateway");
    (503, ServiceUnavailable, "Service Unavailable");
    (504, GatewayTimeout, "Gateway Timeout");
    (505, HttpVersionNotSupported, "HTTP Version Not Supported");
    (509, BandwidthLimitExceeded, "Bandwidth Limit Exceeded");
}

impl Status {
    /// Numeric code.
    #[must_use]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Classification band of this status.
    #[must_use]
    pub fn class(self) -> StatusClass {
        // every registered code is at least 100
        StatusClass::of(i64::from(self.code())).unwrap_or(StatusClass::Informational)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(Error::UnknownStatusCode(code))
    }
}

impl TryFrom<http::StatusCode> for Status {
    type Error = Error;

    fn try_from(status: http::StatusCode) -> Result<Self, Self::Error> {
        Self::try_from(status.as_u16())
    }
}
