//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod disorder_directory;
pub mod progress;
pub mod scoring_service;
pub mod service_error;
