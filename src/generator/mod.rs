//! # Generator Module
//!
//! Renders a loaded [`Configuration`](crate::config::Configuration) into a single Rust
//! module, `routes.rs`, which registers every route on a router handle.
//!
//! ## Overview
//!
//! The generator never inspects handler or middleware identifiers. It arranges them
//! textually so the consuming crate's compiler does the binding:
//!
//! ```text
//! Configuration → minijinja template (routes.rs.txt) → <config dir>/<out>/routes.rs
//! ```
//!
//! ## Middleware order
//!
//! For each route the handler is wrapped, innermost first, by the route's own
//! middlewares in listed order and then by the group's `use` middlewares. Given
//!
//! ```yaml
//! routes:
//!   - use: [logger, request_id]
//!     base: /api/v1
//!     paths:
//!       - "GET /pet ; handlers::list_pets(ctrl) ; json"
//! ```
//!
//! the generated registration is
//!
//! ```rust,ignore
//! mux.handle(
//!     "GET /api/v1/pet",
//!     request_id(logger(json(handlers::list_pets(ctrl)))),
//! );
//! ```
//!
//! ## Template helpers
//!
//! [`Generator::new`] registers `join`, `reverse`, `append` and `contains` as template
//! functions and `quote` (Rust string literal) as a filter. Undefined template values
//! are errors, so a data mismatch fails generation instead of emitting blanks.
//!
//! ## Determinism
//!
//! The header carries only the generator version and the source file name. Maps are
//! rendered in key order, so regenerating an unchanged configuration is byte-identical.
//!
//! ## Formatting
//!
//! [`format_output`] optionally runs `rustfmt` over the generated file.

mod format;
mod templates;

pub use format::format_output;
pub use templates::*;
