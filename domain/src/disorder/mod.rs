//! Disorder lookup subdomain.
//!
//! - [`search_term::SearchTerm`]: a validated lookup term
//! - [`record::DisorderRecord`]: description and remedies returned by the directory
//! - [`session::DisorderSearchSession`]: caller-owned state of the last search

pub mod record;
pub mod search_term;
pub mod session;

/// Terms offered as quick searches
pub const EXAMPLE_TERMS: [&str; 3] = ["depression", "anxiety", "bipolar"];

/// Message shown for any failed lookup, whether not found or a transport failure
pub const NOT_FOUND_GUIDANCE: &str = "Disorder not found. Try: depression, anxiety, or bipolar";

/// Hints shown before the first search
pub const SEARCH_TIPS: [&str; 3] = [
    "Be specific with disorder names",
    "Check spelling if no results appear",
    "Try common disorders like anxiety or depression",
];
