pub mod age;
pub mod checksum;
pub mod classifier;
pub mod name;
pub mod nationality;
pub mod normalize;
pub mod number;

pub use age::{extract_age, extract_age_at};
pub use checksum::check_digit;
pub use classifier::is_likely_passport;
pub use name::extract_name;
pub use nationality::extract_nationality;
pub use normalize::{normalize, NormalizedText};
pub use number::extract_number;
