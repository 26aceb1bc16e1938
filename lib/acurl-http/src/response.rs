//! HTTP response status view.
//!
//! [`Response`] reads the status line the transport stored in a
//! [`HeaderStore`] and classifies it. It never fails: a missing or malformed
//! value reads as `""` or `0`, which callers should treat as "status
//! unavailable".
//!
//! # Example
//!
//! ```
//! use acurl_http::{Headers, Response};
//!
//! let headers: Headers = [
//!     ("_status", "HTTP/1.1 200 OK"),
//!     ("_status_code", "200"),
//!     ("_status_text", "OK"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let response = Response::new(&headers);
//! assert_eq!(response.status_code(), 200);
//! assert!(response.is_success());
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::config::DEFAULT_PSEUDO_HEADERS;
use crate::{ContainerKind, HeaderStore, Headers, PseudoHeaders, Status, StatusClass};

/// Read-only view over the status pseudo-headers of a populated store.
pub struct Response<'a, S: ?Sized = Headers> {
    store: &'a S,
    names: &'a PseudoHeaders,
}

impl<'a, S: HeaderStore + ?Sized> Response<'a, S> {
    /// Discriminator shared by every response view.
    pub const KIND: ContainerKind = ContainerKind::Response;

    /// Creates a view using the default pseudo-header names.
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self::with_pseudo_headers(store, &DEFAULT_PSEUDO_HEADERS)
    }

    /// Creates a view reading the status from custom pseudo-header names.
    #[must_use]
    pub const fn with_pseudo_headers(store: &'a S, names: &'a PseudoHeaders) -> Self {
        Self { store, names }
    }

    /// Always [`ContainerKind::Response`].
    #[must_use]
    pub const fn kind(&self) -> ContainerKind {
        Self::KIND
    }

    /// Backing header store.
    #[must_use]
    pub const fn store(&self) -> &'a S {
        self.store
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.store.header(name)
    }

    /// Full status line, if the transport stored one.
    #[must_use]
    pub fn raw_status(&self) -> Option<&'a str> {
        self.pseudo_header(&self.names.status)
    }

    /// Numeric status code, if stored and numeric.
    #[must_use]
    pub fn raw_status_code(&self) -> Option<i64> {
        let value = self.pseudo_header(&self.names.status_code)?;
        let code = leading_integer(value);
        if code.is_none() {
            debug!(value, "status code is not numeric");
        }
        code
    }

    /// Reason phrase, if the transport stored one.
    #[must_use]
    pub fn raw_status_text(&self) -> Option<&'a str> {
        self.pseudo_header(&self.names.status_text)
    }

    /// Full status line, or `""` when absent.
    #[must_use]
    pub fn status(&self) -> &'a str {
        self.raw_status().unwrap_or_default()
    }

    /// Numeric status code, or `0` when absent or not numeric.
    ///
    /// Leading whitespace is skipped, then an optional sign and the leading
    /// run of digits are read, so `"301 Moved"` gives `301` and `"+404"`
    /// gives `404`. Values past the `i64` range saturate.
    #[must_use]
    pub fn status_code(&self) -> i64 {
        self.raw_status_code().unwrap_or(0)
    }

    /// Reason phrase, or `""` when absent.
    #[must_use]
    pub fn status_text(&self) -> &'a str {
        self.raw_status_text().unwrap_or_default()
    }

    /// Status is 1xx.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self.status_code(), 100..=199)
    }

    /// Status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status_code(), 200..=299)
    }

    /// Status is 3xx.
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self.status_code(), 300..=399)
    }

    /// Status is 400 or above, with no upper bound.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status_code() >= 400
    }

    /// Status is 4xx.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self.status_code(), 400..=499)
    }

    /// Status is 500 or above.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Classification band, `None` when the code is below 100 or missing.
    #[must_use]
    pub fn status_class(&self) -> Option<StatusClass> {
        StatusClass::of(self.status_code())
    }

    /// Registry entry for the code, if it is a registered one.
    #[must_use]
    pub fn known_status(&self) -> Option<Status> {
        u16::try_from(self.status_code())
            .ok()
            .and_then(Status::from_code)
    }

    /// The code as an [`http::StatusCode`], if it lies in 100-999.
    #[must_use]
    pub fn http_status(&self) -> Option<http::StatusCode> {
        u16::try_from(self.status_code())
            .ok()
            .and_then(|code| http::StatusCode::from_u16(code).ok())
    }

    fn pseudo_header(&self, name: &str) -> Option<&'a str> {
        let value = self.store.header(name);
        if value.is_none() {
            trace!(header = name, "status pseudo-header missing");
        }
        value
    }
}

/// Reads an optionally signed leading run of ASCII digits after optional
/// whitespace, saturating at the `i64` bounds.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..end).filter(|digits| !digits.is_empty())?;

    let code = digits.bytes().fold(0_i64, |code, byte| {
        let digit = i64::from(byte - b'0');
        if negative {
            code.saturating_mul(10).saturating_sub(digit)
        } else {
            code.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(code)
}

impl<S: ?Sized> Clone for Response<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Response<'_, S> {}

impl<S: HeaderStore + ?Sized> fmt::Debug for Response<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Response")
            .field("kind", &self.kind())
            .field("status", &self.status())
            .field("status_code", &self.status_code())
            .field("status_text", &self.status_text())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn status_headers(code: &str, text: &str) -> Headers {
        let mut headers = Headers::new();
        headers.insert("_status", format!("HTTP/1.1 {code} {text}"));
        headers.insert("_status_code", code);
        headers.insert("_status_text", text);
        headers
    }

    #[test]
    fn response_ok() {
        let headers = status_headers("200", "OK");
        let response = Response::new(&headers);

        assert_eq!(response.status(), "HTTP/1.1 200 OK");
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.status_text(), "OK");
        assert!(response.is_success());
        assert!(!response.is_redirect());
        assert!(!response.is_failure());
    }

    #[test]
    fn response_not_found() {
        let headers = status_headers("404", "Not Found");
        let response = Response::new(&headers);

        assert!(response.is_failure());
        assert!(response.is_client_error());
        assert!(!response.is_server_error());
        assert!(!response.is_success());
        assert!(!response.is_redirect());
        assert_eq!(response.known_status(), Some(Status::NotFound));
    }

    #[test]
    fn response_moved_permanently() {
        let headers = status_headers("301", "Moved Permanently");
        let response = Response::new(&headers);

        assert!(response.is_redirect());
        assert!(!response.is_success());
        assert!(!response.is_failure());
        assert_eq!(response.status_class(), Some(StatusClass::Redirection));
    }

    #[test]
    fn response_out_of_range_is_failure() {
        let headers = status_headers("999", "Synthetic");
        let response = Response::new(&headers);

        assert_eq!(response.status_code(), 999);
        assert!(response.is_failure());
        assert!(response.is_server_error());
        assert!(!response.is_success());
        assert!(!response.is_redirect());
        assert_eq!(response.known_status(), None);
    }

    #[test]
    fn response_missing_status() {
        let headers = Headers::new();
        let response = Response::new(&headers);

        assert_eq!(response.status(), "");
        assert_eq!(response.status_code(), 0);
        assert_eq!(response.status_text(), "");
        assert!(!response.is_success());
        assert!(!response.is_redirect());
        assert!(!response.is_failure());
        assert_eq!(response.status_class(), None);
        assert_eq!(response.http_status(), None);
    }

    #[test]
    fn response_raw_accessors() {
        let headers = Headers::new();
        let response = Response::new(&headers);
        assert_eq!(response.raw_status(), None);
        assert_eq!(response.raw_status_code(), None);
        assert_eq!(response.raw_status_text(), None);

        let headers = status_headers("204", "");
        let response = Response::new(&headers);
        assert_eq!(response.raw_status_code(), Some(204));
        assert_eq!(response.raw_status_text(), Some(""));
    }

    #[test]
    fn status_code_coercion() {
        for (stored, expected) in [
            ("200", 200),
            (" 404 ", 404),
            ("301abc", 301),
            ("0042", 42),
            ("abc", 0),
            ("", 0),
            ("-1", -1),
            ("+404", 404),
            ("- 5", 0),
            ("+", 0),
            ("70000", 70_000),
            ("99999999999999999999", i64::MAX),
            ("-99999999999999999999", i64::MIN),
        ] {
            let mut headers = Headers::new();
            headers.insert("_status_code", stored);
            assert_eq!(
                Response::new(&headers).status_code(),
                expected,
                "stored {stored:?}"
            );
        }
    }

    #[test]
    fn large_and_signed_codes_classify_by_value() {
        for stored in ["70000", "100000", "+404", "99999999999999999999"] {
            let headers = status_headers(stored, "");
            let response = Response::new(&headers);

            assert!(response.is_failure(), "stored {stored:?}");
            assert!(!response.is_success(), "stored {stored:?}");
            assert!(!response.is_redirect(), "stored {stored:?}");
        }

        let headers = status_headers("70000", "");
        let response = Response::new(&headers);
        assert_eq!(response.status_class(), Some(StatusClass::ServerError));
        assert_eq!(response.known_status(), None);
        assert_eq!(response.http_status(), None);

        let headers = status_headers("-404", "");
        let response = Response::new(&headers);
        assert_eq!(response.status_code(), -404);
        assert!(!response.is_failure());
        assert_eq!(response.status_class(), None);
        assert_eq!(response.known_status(), None);
    }

    #[test]
    fn custom_pseudo_header_names() {
        let names = PseudoHeaders::builder()
            .status("status")
            .status_code("status_code")
            .status_text("status_text")
            .build();
        let mut map = HashMap::new();
        map.insert("status_code".to_string(), "503".to_string());
        map.insert("status_text".to_string(), "Service Unavailable".to_string());

        let response = Response::with_pseudo_headers(&map, &names);
        assert_eq!(response.status_code(), 503);
        assert_eq!(response.status_text(), "Service Unavailable");
        assert_eq!(response.status(), "");
        assert!(response.is_failure());

        // default names see nothing in this store
        assert_eq!(Response::new(&map).status_code(), 0);
    }

    #[test]
    fn regular_headers_pass_through() {
        let mut headers = status_headers("200", "OK");
        headers.append("Content-Type", "application/json");
        let response = Response::new(&headers);

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("content-type"), None);
        assert_eq!(response.store().len(), 4);
    }

    #[test]
    fn response_kind() {
        let headers = Headers::new();
        assert_eq!(Response::new(&headers).kind(), ContainerKind::Response);
        assert_eq!(Response::<Headers>::KIND, ContainerKind::Response);
    }

    #[test]
    fn response_http_status() {
        let headers = status_headers("429", "Too Many Requests");
        let response = Response::new(&headers);

        assert_eq!(
            response.http_status(),
            Some(http::StatusCode::TOO_MANY_REQUESTS)
        );
        assert_eq!(response.known_status(), None);
        assert_eq!(response.status_class(), Some(StatusClass::ClientError));
    }

    #[test]
    fn response_debug() {
        let headers = status_headers("200", "OK");
        let response = Response::new(&headers);

        insta::assert_snapshot!(
            format!("{response:?}"),
            @r#"Response { kind: Response, status: "HTTP/1.1 200 OK", status_code: 200, status_text: "OK" }"#
        );
    }

    #[test]
    fn response_is_send_sync_copy() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Response<'static, Headers>>();
        assert_send_sync::<Response<'static, HashMap<String, String>>>();
    }
}
