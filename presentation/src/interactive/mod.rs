//! Interactive terminal front end
//!
//! - [`reader`]: line input abstraction over rustyline
//! - [`questionnaire`]: walks the five questions
//! - [`shell`]: command loop combining assessment and lookup

pub mod questionnaire;
pub mod reader;
pub mod shell;
