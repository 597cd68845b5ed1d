//! Schema extraction and reference-file output

pub mod extract;
pub mod writer;

pub use extract::extract_schemas;
pub use writer::{write_reference_file, WriteSummary};
