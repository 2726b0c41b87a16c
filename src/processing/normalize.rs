// OCR text normalization
// Best-effort denoising kept separate from the extractors that consume it

/// Normalized views over one chunk of OCR output.
///
/// Every extractor reads the same immutable views:
/// - `lines` / `text`: uppercased lines with collapsed whitespace,
///   punctuation retained (labeled-field scans need it)
/// - `mrz_lines`: lines reduced to the MRZ alphabet `[A-Z0-9<]`
/// - `compact`: the full text with all whitespace removed, so MRZ
///   patterns survive OCR-introduced line breaks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    lines: Vec<String>,
    mrz_lines: Vec<String>,
    text: String,
    compact: String,
}

impl NormalizedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn mrz_lines(&self) -> &[String] {
        &self.mrz_lines
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn compact(&self) -> &str {
        &self.compact
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// Glyphs OCR engines commonly emit in place of the MRZ filler
fn map_confusable(c: char) -> char {
    match c {
        '(' | '{' | '[' | '«' | '»' | '‹' | '›' => '<',
        _ => c,
    }
}

fn clean_line(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.trim().chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for upper in map_confusable(c).to_uppercase() {
            out.push(upper);
        }
    }
    out
}

/// Normalize raw OCR text. Never fails; empty input yields empty views.
pub fn normalize(raw: &str) -> NormalizedText {
    let lines: Vec<String> = raw
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect();

    let mrz_lines: Vec<String> = lines
        .iter()
        .map(|line| {
            line.chars()
                .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '<')
                .collect::<String>()
        })
        .filter(|line| !line.is_empty())
        .collect();

    let text = lines.join("\n");
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    NormalizedText {
        lines,
        mrz_lines,
        text,
        compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_and_collapses_whitespace() {
        let n = normalize("passport  no:   ab123\n\n  Name  ");
        assert_eq!(n.lines(), ["PASSPORT NO: AB123", "NAME"]);
        assert_eq!(n.text(), "PASSPORT NO: AB123\nNAME");
        assert_eq!(n.compact(), "PASSPORTNO:AB123NAME");
    }

    #[test]
    fn test_maps_bracket_glyphs_to_filler() {
        let n = normalize("P(CHNDOE{{JOHN[«");
        assert_eq!(n.lines(), ["P<CHNDOE<<JOHN<<"]);
    }

    #[test]
    fn test_mrz_lines_strip_to_mrz_alphabet() {
        let n = normalize("P<CHN DOE.<<JOHN!\nno mrz chars: ,,,");
        assert_eq!(n.mrz_lines(), ["P<CHNDOE<<JOHN", "NOMRZCHARS"]);
    }

    #[test]
    fn test_empty_input() {
        let n = normalize("");
        assert!(n.is_empty());
        assert_eq!(n.text(), "");
        assert_eq!(n.compact(), "");
        assert!(n.mrz_lines().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let first = normalize("  Passport (No: ab-123\nsecond   LINE ");
        let second = normalize(first.text());
        assert_eq!(first, second);
    }
}
