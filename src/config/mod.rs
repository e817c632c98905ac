//! # Config Module
//!
//! Typed model of a merged route configuration and the loader that builds it.
//!
//! ```yaml
//! package: routes
//! out: gen
//! imports:
//!   - crate::handlers
//! args:
//!   ctrl: "&Controller"
//! vars:
//!   json: "middlewares::json()"
//! routes:
//!   - use: [logger]
//!     base: /api/v1
//!     paths:
//!       - "GET /pet ; handlers::list_pets(ctrl) ; json"
//! ```
//!
//! Loading is all-or-nothing: [`Configuration::from_document`] either parses every
//! route-spec string or fails on the first one that does not parse.

mod load;
mod types;

pub use types::*;
