//! Thin wrappers over the backend REST API, one function per capability.
//!
//! Policy: every function performs exactly one gateway call and returns
//! the decoded body verbatim (or propagates the transport error). No
//! validation, normalization, or retries happen here — the calling layer
//! owns all error-to-message translation.

pub mod auth;
pub mod overview;
pub mod portfolio;
pub mod transactions;
pub mod wallet;
