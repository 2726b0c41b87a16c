pub mod extractor;
pub mod models;
pub mod processing;
pub mod utils;

pub use extractor::{ExtractorConfig, FieldExtractor};
pub use models::ExtractionResult;
