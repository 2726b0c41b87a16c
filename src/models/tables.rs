// Static lookup tables for nationality and date resolution.
// Process-wide immutable data; built once, never mutated.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref ISO3_TO_ISO2: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("CHN", "CN");
        m.insert("JPN", "JP");
        m.insert("KOR", "KR");
        m.insert("USA", "US");
        m.insert("GBR", "GB");
        m.insert("CAN", "CA");
        m.insert("AUS", "AU");
        m.insert("FRA", "FR");
        m.insert("DEU", "DE");
        m.insert("ITA", "IT");
        m.insert("ESP", "ES");
        m.insert("RUS", "RU");
        m.insert("IND", "IN");
        m.insert("PHL", "PH");
        m.insert("VNM", "VN");
        m.insert("MYS", "MY");
        m.insert("THA", "TH");
        m.insert("IDN", "ID");
        m.insert("SGP", "SG");
        m.insert("TWN", "TW");
        m.insert("HKG", "HK");
        m.insert("MAC", "MO");
        m.insert("NLD", "NL");
        m.insert("CHE", "CH");
        m.insert("SWE", "SE");
        m.insert("NOR", "NO");
        m.insert("DNK", "DK");
        m.insert("FIN", "FI");
        m.insert("NZL", "NZ");
        m.insert("BRA", "BR");
        m.insert("MEX", "MX");
        m.insert("ARG", "AR");
        m.insert("TUR", "TR");
        m.insert("SAU", "SA");
        m.insert("ARE", "AE");
        m.insert("ZAF", "ZA");
        m
    };
}

/// Map an MRZ 3-letter nationality code to ISO 3166-1 alpha-2.
pub fn iso3_to_iso2(iso3: &str) -> Option<&'static str> {
    ISO3_TO_ISO2.get(iso3).copied()
}

// Ordered: the keyword scan takes the first adjective found in the text,
// so iteration order is part of the contract.
pub const NATIONALITY_KEYWORDS: &[(&str, &str)] = &[
    ("CHINESE", "CN"),
    ("JAPANESE", "JP"),
    ("KOREAN", "KR"),
    ("AMERICAN", "US"),
    ("BRITISH", "GB"),
    ("CANADIAN", "CA"),
    ("AUSTRALIAN", "AU"),
    ("FRENCH", "FR"),
    ("GERMAN", "DE"),
    ("ITALIAN", "IT"),
    ("SPANISH", "ES"),
    ("RUSSIAN", "RU"),
    ("INDIAN", "IN"),
    ("FILIPINO", "PH"),
    ("VIETNAMESE", "VN"),
    ("MALAYSIAN", "MY"),
    ("THAI", "TH"),
    ("INDONESIAN", "ID"),
    ("SINGAPOREAN", "SG"),
];

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Resolve an uppercase 3-letter month abbreviation to 1..=12.
pub fn month_number(name: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}
