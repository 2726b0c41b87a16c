// Passport-number extraction cascade.
//
// Strategies are ordered by confidence: the checksum-backed MRZ parses
// (1-3) cannot false-positive on unrelated numeric strings; the label and
// shape strategies (4-6) exist because many OCR captures miss or corrupt
// the MRZ entirely, and an unchecked candidate still helps downstream.
// First strategy to produce a value wins.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::checksum::check_digit;
use super::normalize::NormalizedText;

lazy_static! {
    // TD3 line 2 layout: document number + check, nationality, DOB + check,
    // sex, expiry + check
    static ref MRZ_COMPACT: Regex =
        Regex::new(r"([A-Z0-9<]{9})(\d)([A-Z]{3})(\d{6})(\d)[MF<](\d{6})(\d)").unwrap();
    static ref LABELED: Regex =
        Regex::new(r"PASSPORT\s*(NO|NUMBER)?[\s:#/\\.-]*([A-Z0-9]{6,10})").unwrap();
    static ref MARKER: Regex = Regex::new(r"PASSPORT\s*(NO|NUMBER)?").unwrap();
    static ref NUMBER_SHAPE: Regex = Regex::new(r"\b[A-Z]{1,2}[0-9]{6,8}\b").unwrap();
}

// A 9-char MRZ field is a document number once fillers are dropped and the
// remainder has a plausible length.
fn accept_field(field: &str) -> Option<String> {
    let number: String = field.chars().filter(|c| *c != '<').collect();
    if (6..=9).contains(&number.len()) {
        Some(number)
    } else {
        None
    }
}

fn field_checks_out(field: &str, check: char) -> bool {
    check.is_ascii_digit() && check_digit(field) == check
}

/// Strategy 1: structured two-line MRZ parse. The first line of a TD3 pair
/// starts with `P<`; the second carries the document number in positions
/// 0-8 with its check digit at position 9.
fn two_line_mrz(normalized: &NormalizedText) -> Option<String> {
    let lines = normalized.mrz_lines();
    for pair in lines.windows(2) {
        let (l1, l2) = (&pair[0], &pair[1]);
        if !l1.starts_with("P<") || l2.len() < 10 {
            continue;
        }
        let field = &l2[..9];
        let check = l2.as_bytes()[9] as char;
        if field_checks_out(field, check) {
            if let Some(number) = accept_field(field) {
                return Some(number);
            }
        }
    }
    None
}

/// Strategy 2: TD3 line-2 pattern in the whitespace-stripped text, for
/// captures where the OCR engine merged or re-split the MRZ lines.
fn compact_mrz(normalized: &NormalizedText) -> Option<String> {
    let caps = MRZ_COMPACT.captures(normalized.compact())?;
    let field = caps.get(1)?.as_str();
    let check = caps.get(2)?.as_str().chars().next()?;
    if field_checks_out(field, check) {
        return accept_field(field);
    }
    None
}

/// Strategy 3: sliding 9-char window over MRZ-looking lines, keeping the
/// first window whose trailing character matches its check digit. Recovers
/// numbers when line segmentation misaligns the `P<` prefix. Restricted to
/// lines carrying the double-filler signature; without that gate a 9-char
/// window over ordinary prose matches its follower about once in ten.
fn sliding_window_mrz(normalized: &NormalizedText) -> Option<String> {
    for line in normalized.mrz_lines() {
        if line.len() < 10 || !line.contains("<<") {
            continue;
        }
        for start in 0..=line.len() - 10 {
            let field = &line[start..start + 9];
            let check = line.as_bytes()[start + 9] as char;
            if field_checks_out(field, check) {
                if let Some(number) = accept_field(field) {
                    return Some(number);
                }
            }
        }
    }
    None
}

/// Strategy 4: labeled field ("PASSPORT NO: ..."), tolerating noisy
/// separators. No checksum backing at this tier.
fn labeled_field(normalized: &NormalizedText) -> Option<String> {
    LABELED
        .captures(normalized.text())
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Strategy 5: a number-shaped token within 120 characters after a
/// "PASSPORT" marker, for captures where the label and the value ended up
/// on separate noisy lines.
fn marker_tail(normalized: &NormalizedText) -> Option<String> {
    let m = MARKER.find(normalized.text())?;
    let tail: String = normalized.text()[m.end()..].chars().take(120).collect();
    NUMBER_SHAPE.find(&tail).map(|m| m.as_str().to_string())
}

/// Strategy 6: first standalone token shaped like a passport number
/// (1-2 letters then 6-8 digits) anywhere in the text. Lowest confidence.
fn generic_shape(normalized: &NormalizedText) -> Option<String> {
    NUMBER_SHAPE
        .find(normalized.text())
        .map(|m| m.as_str().to_string())
}

const STRATEGIES: &[(&str, fn(&NormalizedText) -> Option<String>)] = &[
    ("two-line-mrz", two_line_mrz),
    ("compact-mrz", compact_mrz),
    ("sliding-window-mrz", sliding_window_mrz),
    ("labeled-field", labeled_field),
    ("marker-tail", marker_tail),
    ("generic-shape", generic_shape),
];

/// Run the cascade; empty string when no strategy matches.
pub fn extract_number(normalized: &NormalizedText) -> String {
    for (strategy, run) in STRATEGIES {
        if let Some(number) = run(normalized) {
            debug!("passport number {} via {}", number, strategy);
            return number;
        }
    }
    String::new()
}
