mod document;
mod loader;

pub use document::DescriptionDocument;
pub use loader::{LoadError, load_document};
