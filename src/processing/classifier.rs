// Heuristic passport-likeness judgment. No checksum, no validation;
// purely a hint for the success policy and for downstream consumers.

use super::normalize::NormalizedText;

const CJK_PASSPORT: [&str; 3] = ["护照", "護照", "旅券"];
const STRUCTURE_HINTS: [&str; 5] = ["NATIONALITY", "SURNAME", "GIVEN", "DATE OF BIRTH", "SEX"];

/// True when the text reads like a passport: the word itself (or a CJK
/// equivalent), an MRZ signature, or at least two structural field labels.
pub fn is_likely_passport(normalized: &NormalizedText) -> bool {
    let text = normalized.text();
    if text.contains("PASSPORT") || CJK_PASSPORT.iter().any(|kw| text.contains(kw)) {
        return true;
    }
    if text.contains("P<") && text.contains('<') {
        return true;
    }
    STRUCTURE_HINTS
        .iter()
        .filter(|hint| text.contains(*hint))
        .count()
        >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalize::normalize;

    #[test]
    fn test_passport_keyword() {
        assert!(is_likely_passport(&normalize("Passport No: AB1234567")));
    }

    #[test]
    fn test_cjk_keyword() {
        assert!(is_likely_passport(&normalize("中华人民共和国 护照")));
    }

    #[test]
    fn test_mrz_signature() {
        let text = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<";
        assert!(is_likely_passport(&normalize(text)));
    }

    #[test]
    fn test_two_structural_hints() {
        assert!(is_likely_passport(&normalize(
            "Surname: DOE\nNationality: CHN"
        )));
    }

    #[test]
    fn test_single_hint_is_not_enough() {
        assert!(!is_likely_passport(&normalize("Nationality: CHN")));
    }

    #[test]
    fn test_unrelated_text() {
        assert!(!is_likely_passport(&normalize(
            "Weekly menu\nCoffee\nTea\nSandwich"
        )));
    }
}
