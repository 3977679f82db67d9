//! Document I/O adapters
//!
//! PDF text extraction on the way in, PDF generation on the way out. Both
//! adapters work on in-memory byte buffers; the core never stages documents
//! in temporary files.

pub mod extract;
pub mod render;

pub use extract::PdfTextExtractor;
pub use render::{PageLayout, PdfSummaryRenderer};
