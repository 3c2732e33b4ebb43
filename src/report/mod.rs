pub mod console;
pub mod csv;

pub use console::render_summary;
pub use csv::{export_records, ExportError};
