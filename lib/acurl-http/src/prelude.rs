//! Prelude module for convenient imports.
//!
//! ```
//! use acurl_http::prelude::*;
//! ```

pub use crate::{
    ContainerKind, Error, HeaderStore, Headers, PseudoHeaders, Response, Result, Status,
    StatusClass, StatusLine,
};
