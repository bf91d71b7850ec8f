//! Free-text to structured-data extraction.
//!
//! Every function here is total over arbitrary input: text that does not
//! match yields zero values or fewer records, never an error.

pub mod analysis;
pub mod grammar;
pub mod material;
pub mod mcq;
pub mod modules;
pub mod outline;

pub use analysis::extract_reviews;
pub use grammar::{ChunkGrammar, ChunkRecord, Extraction, Fields};
pub use material::{format_material, Pass, PIPELINE};
pub use mcq::extract_questions;
pub use modules::extract_modules;
pub use outline::extract_outline;
