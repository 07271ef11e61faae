//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: input rejected before any request is issued

pub mod error;
