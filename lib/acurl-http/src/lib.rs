//! Read-only HTTP response status view.
//!
//! A transport layer receives a reply, stores its status line and headers in
//! a header container, then hands callers a [`Response`] view over it. This
//! crate provides:
//! - [`Response`] - status line accessors and success/redirect/failure checks
//! - [`HeaderStore`] and [`Headers`] - the container contract and an ordered
//!   implementation
//! - [`Status`] and [`StatusClass`] - registered status codes and their bands
//! - [`PseudoHeaders`] - reserved keys carrying the status line
//! - [`StatusLine`] - transport-side helper writing those keys
//! - [`Error`] and [`Result`] - error handling
//!
//! Reading bytes off a socket, redirects, retries and connection management
//! belong to the transport.

mod config;
mod error;
mod headers;
pub mod prelude;
mod response;
mod status;
mod status_line;

pub use config::{PseudoHeaders, PseudoHeadersBuilder};
pub use error::{Error, Result};
pub use headers::{ContainerKind, HeaderStore, Headers};
pub use response::Response;
pub use status::{Status, StatusClass};
pub use status_line::StatusLine;

// Re-export http for interop with the wider ecosystem
pub use http;
