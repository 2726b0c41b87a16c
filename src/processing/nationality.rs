// Nationality resolution: MRZ code, then keyword adjectives, then a
// labeled field. Unresolvable values keep their raw token so downstream
// consumers can still show something.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{iso3_to_iso2, NATIONALITY_KEYWORDS};

use super::normalize::NormalizedText;

lazy_static! {
    // Nationality position inside the TD3 line 2 structure
    static ref MRZ_NATIONALITY: Regex =
        Regex::new(r"[A-Z0-9<]{9}\d([A-Z]{3})\d{6}\d[MF<]").unwrap();
    static ref LABELED_NATIONALITY: Regex =
        Regex::new(r"\bNATIONALITY\b[^A-Z0-9]{0,8}([A-Z]{3,15})").unwrap();
}

/// Resolve nationality as `(iso2, raw)`; either may be empty. The raw
/// token is preserved even when no ISO mapping exists.
pub fn extract_nationality(normalized: &NormalizedText) -> (String, String) {
    if let Some(caps) = MRZ_NATIONALITY.captures(normalized.compact()) {
        if let Some(iso3) = caps.get(1) {
            let iso3 = iso3.as_str();
            let iso2 = iso3_to_iso2(iso3).unwrap_or("");
            debug!("nationality {} via mrz", iso3);
            return (iso2.to_string(), iso3.to_string());
        }
    }

    for (keyword, iso2) in NATIONALITY_KEYWORDS {
        if normalized.text().contains(keyword) {
            debug!("nationality {} via keyword", keyword);
            return (iso2.to_string(), keyword.to_string());
        }
    }

    if let Some(caps) = LABELED_NATIONALITY.captures(normalized.text()) {
        if let Some(raw) = caps.get(1) {
            let raw = raw.as_str();
            debug!("nationality {} via label", raw);
            if raw.len() == 3 {
                if let Some(iso2) = iso3_to_iso2(raw) {
                    return (iso2.to_string(), raw.to_string());
                }
            }
            if let Some((_, iso2)) = NATIONALITY_KEYWORDS.iter().find(|(k, _)| *k == raw) {
                return (iso2.to_string(), raw.to_string());
            }
            return (String::new(), raw.to_string());
        }
    }

    (String::new(), String::new())
}
