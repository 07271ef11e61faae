//! Use cases
//!
//! Application-level operations that orchestrate domain logic.
//! The assessment and lookup flows are independent of each other.

pub mod run_assessment;
pub mod search_disorder;
