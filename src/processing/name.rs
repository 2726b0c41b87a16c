// Name extraction: MRZ name block first, labeled lines as fallback.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::normalize::NormalizedText;

lazy_static! {
    // TD3 line 1: P, filler, 3-char issuing field, then the name field
    static ref MRZ_NAME_LINE: Regex = Regex::new(r"^P<[A-Z<]{3}([A-Z<]+)$").unwrap();
}

fn fillers_to_spaces(field: &str) -> String {
    field
        .split('<')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// MRZ strategy: surname and given names separated by the double filler,
/// emitted in "given surname" order.
fn mrz_name(normalized: &NormalizedText) -> Option<String> {
    for line in normalized.mrz_lines() {
        let caps = match MRZ_NAME_LINE.captures(line) {
            Some(caps) => caps,
            None => continue,
        };
        let field = caps.get(1)?.as_str();
        let (surname_field, given_field) = match field.split_once("<<") {
            Some(split) => split,
            None => continue,
        };
        let surname = fillers_to_spaces(surname_field);
        let given = fillers_to_spaces(given_field);
        if !surname.is_empty() && !given.is_empty() {
            return Some(format!("{} {}", given, surname));
        }
    }
    None
}

/// Clean a candidate name line down to letters, commas and spaces, and
/// fold a "SURNAME, GIVEN" form into "GIVEN SURNAME".
fn normalize_name(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == ',' || *c == ' ')
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == ' ' || c == ',');
    if cleaned.is_empty() {
        return String::new();
    }
    if cleaned.contains(',') {
        let parts: Vec<&str> = cleaned
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() >= 2 {
            return format!("{} {}", parts[1], parts[0]);
        }
    }
    cleaned
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Label strategy: the line after one mentioning NAME.
fn labeled_name(normalized: &NormalizedText) -> Option<String> {
    let lines = normalized.lines();
    for (i, line) in lines.iter().enumerate() {
        if !line.contains("NAME") || i + 1 >= lines.len() {
            continue;
        }
        let candidate = normalize_name(&lines[i + 1]);
        if !candidate.is_empty() {
            return Some(candidate);
        }
    }
    None
}

/// Extract the holder's full name; empty string when nothing matches.
pub fn extract_name(normalized: &NormalizedText) -> String {
    if let Some(name) = mrz_name(normalized) {
        debug!("name {} via mrz", name);
        return name;
    }
    if let Some(name) = labeled_name(normalized) {
        debug!("name {} via label", name);
        return name;
    }
    String::new()
}
