pub mod error;

pub use error::ExtractError;
