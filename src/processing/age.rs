// Date-of-birth recovery and age computation.
//
// Calendar construction is a chain of fallible parse attempts: anything
// that fails to form a real date is a silent non-match, never an error.

use chrono::{Datelike, Local, NaiveDate};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::month_number;

use super::normalize::NormalizedText;

lazy_static! {
    // DOB position inside the TD3 line 2 structure
    static ref MRZ_DOB: Regex =
        Regex::new(r"[A-Z0-9<]{9}\d[A-Z]{3}(\d{6})\d[MF<]").unwrap();
    // Date tokens near a BIRTH label; `O` is allowed in digit positions
    // because OCR routinely confuses it with zero
    static ref DATE_TOKEN: Regex = Regex::new(
        r"[0-9O]{2}[A-Z]{3}[0-9O]{4}|[0-9O]{2}[/-][0-9O]{2}[/-][0-9O]{4}|[0-9O]{4}[/-][0-9O]{2}[/-][0-9O]{2}"
    )
    .unwrap();
    static ref DAY_MONTHNAME_YEAR: Regex =
        Regex::new(r"^([0-9O]{2})([A-Z]{3})([0-9O]{4})$").unwrap();
}

const NUMERIC_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y/%m/%d", "%d-%m-%Y", "%Y-%m-%d"];

fn age_on(dob: NaiveDate, today: NaiveDate) -> Option<u32> {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    if (0..=120).contains(&age) {
        Some(age as u32)
    } else {
        None
    }
}

/// Parse one candidate token in the fixed format order: DDMMMYYYY first,
/// then the numeric forms. The `O`→`0` correction is applied to digit
/// positions only, so month names like OCT survive.
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    if let Some(caps) = DAY_MONTHNAME_YEAR.captures(token) {
        let day: u32 = caps.get(1)?.as_str().replace('O', "0").parse().ok()?;
        let month = month_number(caps.get(2)?.as_str())?;
        let year: i32 = caps.get(3)?.as_str().replace('O', "0").parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    let digits_fixed = token.replace('O', "0");
    for format in NUMERIC_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&digits_fixed, format) {
            return Some(date);
        }
    }
    None
}

/// MRZ path: YYMMDD from the TD3 structure. A two-digit year above the
/// current one is taken as 1900s, otherwise 2000s; a birth year cannot sit
/// in the future under a 100-year window. The rule drifts at the century
/// boundary and is kept as-is.
fn mrz_age(normalized: &NormalizedText, today: NaiveDate) -> Option<u32> {
    let caps = MRZ_DOB.captures(normalized.compact())?;
    let digits = caps.get(1)?.as_str();
    let yy: i32 = digits[..2].parse().ok()?;
    let month: u32 = digits[2..4].parse().ok()?;
    let day: u32 = digits[4..6].parse().ok()?;
    let year = if yy > today.year() % 100 {
        1900 + yy
    } else {
        2000 + yy
    };
    let dob = NaiveDate::from_ymd_opt(year, month, day)?;
    age_on(dob, today)
}

/// Label path: a line mentioning BIRTH, inspected together with the two
/// lines after it. The first token forming a real date with an age in
/// range wins.
fn labeled_age(normalized: &NormalizedText, today: NaiveDate) -> Option<u32> {
    let lines = normalized.lines();
    for (i, line) in lines.iter().enumerate() {
        if !line.contains("BIRTH") {
            continue;
        }
        let nearby = lines[i..lines.len().min(i + 3)].join(" ");
        for token in DATE_TOKEN.find_iter(&nearby) {
            if let Some(dob) = parse_date_token(token.as_str()) {
                if let Some(age) = age_on(dob, today) {
                    return Some(age);
                }
            }
        }
    }
    None
}

/// Resolve the holder's age as of `today`. MRZ first, label fallback;
/// `None` when no plausible date of birth is found.
pub fn extract_age_at(normalized: &NormalizedText, today: NaiveDate) -> Option<u32> {
    let age = mrz_age(normalized, today).or_else(|| labeled_age(normalized, today));
    if let Some(age) = age {
        debug!("age resolved to {}", age);
    }
    age
}

/// Resolve the holder's age as of the local date.
pub fn extract_age(normalized: &NormalizedText) -> Option<u32> {
    extract_age_at(normalized, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalize::normalize;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_labeled_month_name_date() {
        let normalized = normalize("DATE OF BIRTH 15JAN1990");
        assert_eq!(extract_age_at(&normalized, today()), Some(34));
    }

    #[test]
    fn test_labeled_month_name_with_letter_o_month() {
        // birthday not yet reached at the pinned date
        let normalized = normalize("DATE OF BIRTH 15OCT1990");
        assert_eq!(extract_age_at(&normalized, today()), Some(33));
    }

    #[test]
    fn test_labeled_slash_date() {
        let normalized = normalize("Birth: 15/01/1990");
        assert_eq!(extract_age_at(&normalized, today()), Some(34));
    }

    #[test]
    fn test_labeled_iso_date_two_lines_below() {
        let normalized = normalize("DATE OF BIRTH\n(see below)\n1990-01-15");
        assert_eq!(extract_age_at(&normalized, today()), Some(34));
    }

    #[test]
    fn test_ocr_letter_o_in_digits() {
        let normalized = normalize("DATE OF BIRTH 15/O1/199O");
        assert_eq!(extract_age_at(&normalized, today()), Some(34));
    }

    #[test]
    fn test_impossible_calendar_date_is_silent() {
        let normalized = normalize("DATE OF BIRTH 31/02/1990");
        assert_eq!(extract_age_at(&normalized, today()), None);
    }

    #[test]
    fn test_first_unparseable_token_falls_to_next() {
        let normalized = normalize("DATE OF BIRTH 99/99/1990 or 15/01/1990");
        assert_eq!(extract_age_at(&normalized, today()), Some(34));
    }

    #[test]
    fn test_date_without_birth_label_ignored() {
        let normalized = normalize("Date of issue 15/01/1990");
        assert_eq!(extract_age_at(&normalized, today()), None);
    }

    #[test]
    fn test_mrz_dob_with_century_in_past() {
        // yy 90 > 24, so 1990
        let text = format!(
            "P<CHNDOE<<JOHN{}\nE123456782CHN9001011M2510206<<<<<<<<<<<<<<00",
            "<".repeat(30)
        );
        assert_eq!(extract_age_at(&normalize(&text), today()), Some(34));
    }

    #[test]
    fn test_mrz_dob_century_disambiguation_recent() {
        // yy 20 <= 24, so 2020
        let normalized = normalize("E123456782CHN2001011F2510206");
        assert_eq!(extract_age_at(&normalized, today()), Some(4));
    }

    #[test]
    fn test_mrz_preferred_over_label() {
        let text = format!(
            "DATE OF BIRTH 15/01/2000\nP<CHNDOE<<JOHN{}\nE123456782CHN9001011M2510206<<<<<<<<<<<<<<00",
            "<".repeat(30)
        );
        assert_eq!(extract_age_at(&normalize(&text), today()), Some(34));
    }

    #[test]
    fn test_age_above_window_rejected_not_clamped() {
        let normalized = normalize("DATE OF BIRTH 01/01/1850");
        assert_eq!(extract_age_at(&normalized, today()), None);
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let normalized = normalize("DATE OF BIRTH 01/01/2031");
        assert_eq!(extract_age_at(&normalized, today()), None);
    }

    #[test]
    fn test_age_zero_accepted() {
        let normalized = normalize("DATE OF BIRTH 01/01/2024");
        assert_eq!(extract_age_at(&normalized, today()), Some(0));
    }
}
