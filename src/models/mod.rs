pub mod data;
pub mod tables;

pub use data::ExtractionResult;
pub use tables::{iso3_to_iso2, month_number, NATIONALITY_KEYWORDS};
