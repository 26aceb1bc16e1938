//! Reserved pseudo-header names.
//!
//! The transport stores the status line under three keys of the header
//! store. The names are an internal convention shared by the transport and
//! the [`Response`](crate::Response) view; they never go on the wire.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Names of the keys carrying status-line data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PseudoHeaders {
    /// Key of the full status line, e.g. `HTTP/1.1 404 Not Found`.
    pub status: Cow<'static, str>,
    /// Key of the numeric status code.
    pub status_code: Cow<'static, str>,
    /// Key of the reason phrase.
    pub status_text: Cow<'static, str>,
}

/// Shared default used by [`Response::new`](crate::Response::new).
pub(crate) static DEFAULT_PSEUDO_HEADERS: PseudoHeaders = PseudoHeaders::DEFAULT;

impl PseudoHeaders {
    /// `_status`, `_status_code` and `_status_text`.
    pub const DEFAULT: Self = Self {
        status: Cow::Borrowed("_status"),
        status_code: Cow::Borrowed("_status_code"),
        status_text: Cow::Borrowed("_status_text"),
    };

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> PseudoHeadersBuilder {
        PseudoHeadersBuilder::default()
    }
}

impl Default for PseudoHeaders {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`PseudoHeaders`].
#[derive(Debug, Clone, Default)]
pub struct PseudoHeadersBuilder {
    status: Option<Cow<'static, str>>,
    status_code: Option<Cow<'static, str>>,
    status_text: Option<Cow<'static, str>>,
}

impl PseudoHeadersBuilder {
    /// Set the key of the full status line.
    #[must_use]
    pub fn status(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.status = Some(name.into());
        self
    }

    /// Set the key of the numeric status code.
    #[must_use]
    pub fn status_code(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.status_code = Some(name.into());
        self
    }

    /// Set the key of the reason phrase.
    #[must_use]
    pub fn status_text(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.status_text = Some(name.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> PseudoHeaders {
        let defaults = PseudoHeaders::default();
        PseudoHeaders {
            status: self.status.unwrap_or(defaults.status),
            status_code: self.status_code.unwrap_or(defaults.status_code),
            status_text: self.status_text.unwrap_or(defaults.status_text),
        }
    }
}
