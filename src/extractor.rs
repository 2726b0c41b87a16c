use chrono::{Local, NaiveDate};
use log::debug;

use crate::models::ExtractionResult;
use crate::processing::{
    extract_age_at, extract_name, extract_nationality, extract_number, is_likely_passport,
    normalize,
};

/// Success policy for a run. The relaxed policy (default) reports success
/// on any recovered passport number; the strict policy additionally
/// requires the document classifier to agree.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    pub require_passport_classification: bool,
}

/// Runs the field extractors over one chunk of OCR text and assembles the
/// result record. Stateless apart from its policy; every extraction is a
/// pure pass over the normalized input.
pub struct FieldExtractor {
    config: ExtractorConfig,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        FieldExtractor { config }
    }

    /// Extract identity fields from raw OCR text, with ages computed
    /// against the local date.
    pub fn extract(&self, raw: &str) -> ExtractionResult {
        self.extract_at(raw, Local::now().date_naive())
    }

    /// Same as [`extract`](Self::extract) with an explicit reference date
    /// for age computation.
    pub fn extract_at(&self, raw: &str, today: NaiveDate) -> ExtractionResult {
        let normalized = normalize(raw);

        let passport_number = extract_number(&normalized);
        let is_passport = is_likely_passport(&normalized);
        let full_name = extract_name(&normalized);
        let age = extract_age_at(&normalized, today);
        let (nationality_code, nationality_raw) = extract_nationality(&normalized);

        let success = !passport_number.is_empty()
            && (!self.config.require_passport_classification || is_passport);

        debug!(
            "extraction finished: success={} is_passport={} number={:?}",
            success, is_passport, passport_number
        );

        ExtractionResult {
            success,
            is_passport,
            passport_number,
            full_name,
            age,
            nationality_code,
            nationality_raw,
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
