//! Status line handoff from the transport to the header store.
//!
//! A transport that has read `HTTP/1.1 404 Not Found` off the wire turns it
//! into a [`StatusLine`] and writes it into its [`Headers`] before building a
//! [`Response`](crate::Response) view.
//!
//! # Example
//!
//! ```
//! use acurl_http::{Headers, PseudoHeaders, Response, StatusLine};
//!
//! let mut headers = Headers::new();
//! StatusLine::parse("HTTP/1.1 404 Not Found\r\n")?
//!     .write_to(&mut headers, &PseudoHeaders::default());
//!
//! let response = Response::new(&headers);
//! assert_eq!(response.status_code(), 404);
//! assert!(response.is_failure());
//! # Ok::<(), acurl_http::Error>(())
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::{Error, Headers, PseudoHeaders, Result, Status};

/// Protocol version, numeric code and reason phrase of a response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusLine {
    version: String,
    code: u16,
    reason: String,
}

impl StatusLine {
    /// Creates a status line from its parts.
    #[must_use]
    pub fn new(version: impl Into<String>, code: u16, reason: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            code,
            reason: reason.into(),
        }
    }

    /// Creates a status line carrying a registered status and its standard
    /// reason phrase.
    #[must_use]
    pub fn from_status(version: impl Into<String>, status: Status) -> Self {
        Self::new(version, status.code(), status.reason_phrase())
    }

    /// Parses `HTTP-version SP status-code SP [reason-phrase]`.
    ///
    /// A trailing CR/LF is ignored. The reason phrase may be empty or absent.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);

        let (version, rest) = line
            .split_once(' ')
            .ok_or_else(|| Error::invalid_status_line(format!("missing status code in `{line}`")))?;

        if !version.starts_with("HTTP/") {
            return Err(Error::invalid_status_line(format!(
                "unsupported protocol `{version}`"
            )));
        }

        let (code, reason) = rest.split_once(' ').unwrap_or((rest, ""));
        if code.len() != 3 || !code.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Error::invalid_status_line(format!(
                "status code must be three digits, got `{code}`"
            )));
        }
        let code = code
            .parse()
            .map_err(|_| Error::invalid_status_line(format!("invalid status code `{code}`")))?;

        Ok(Self::new(version, code, reason))
    }

    /// Protocol version, e.g. `HTTP/1.1`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Numeric status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Reason phrase, possibly empty.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Writes the three status pseudo-headers into `headers`.
    ///
    /// Previous values under those names are replaced.
    pub fn write_to(&self, headers: &mut Headers, names: &PseudoHeaders) {
        debug!(
            version = %self.version,
            code = self.code,
            reason = %self.reason,
            "storing status line"
        );

        headers.insert(&*names.status, self.to_string());
        headers.insert(&*names.status_code, self.code.to_string());
        headers.insert(&*names.status_text, self.reason.as_str());
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:03}", self.version, self.code)?;
        if !self.reason.is_empty() {
            write!(f, " {}", self.reason)?;
        }
        Ok(())
    }
}

impl FromStr for StatusLine {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        Self::parse(line)
    }
}
