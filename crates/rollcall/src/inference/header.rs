//! Header-text hints for column roles.

use once_cell::sync::Lazy;
use regex::Regex;

/// What a header suggests about its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderHint {
    /// Likely holds a person's name.
    Name,
    /// Timestamps and grading output, never a required answer.
    Metadata,
}

/// A header token match. Lower `rank` is a stronger signal within a hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub hint: HeaderHint,
    pub token: &'static str,
    pub rank: usize,
}

/// Name-like tokens, strongest first.
pub const NAME_TOKENS: &[&str] = &["name", "student", "participant", "respondent", "attendee"];

/// Tokens marking form metadata and auto-graded columns.
pub const METADATA_TOKENS: &[&str] = &["timestamp", "score", "total", "points"];

static HEADER_PATTERNS: Lazy<Vec<(Regex, HeaderMatch)>> = Lazy::new(|| {
    // Metadata is checked first so "Student Score" is never a name column.
    let metadata = METADATA_TOKENS.iter().enumerate().map(|(rank, token)| {
        (*token, HeaderMatch { hint: HeaderHint::Metadata, token: *token, rank })
    });
    let names = NAME_TOKENS.iter().enumerate().map(|(rank, token)| {
        (*token, HeaderMatch { hint: HeaderHint::Name, token: *token, rank })
    });

    metadata
        .map(|(token, m)| (Regex::new(&metadata_pattern(token)).unwrap(), m))
        .chain(names.map(|(token, m)| {
            let pattern = format!("(?i){}", regex::escape(token));
            (Regex::new(&pattern).unwrap(), m)
        }))
        .collect()
});

/// Single-field lines that are a name column label rather than a person.
static NAME_LABEL: Lazy<Regex> = Lazy::new(|| {
    let tokens: Vec<String> = NAME_TOKENS.iter().map(|t| regex::escape(t)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})s?\b", tokens.join("|"))).unwrap()
});

/// Metadata tokens match as a whole word in title or upper case ("Total
/// score", "POINTS"), or as the entire header in any case. Lowercase words
/// inside a question ("the key points") do not match.
fn metadata_pattern(token: &str) -> String {
    let lower = regex::escape(token);
    let mut title = token[..1].to_uppercase();
    title.push_str(&token[1..]);
    let upper = token.to_uppercase();
    format!(
        r"^\s*(?i:{lower})\s*$|\b(?:{}|{})\b",
        regex::escape(&title),
        regex::escape(&upper)
    )
}

/// Classify a header by the first token it contains.
pub fn classify_header(header: &str) -> Option<HeaderMatch> {
    HEADER_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(header))
        .map(|(_, m)| m.clone())
}

/// Whether a header looks like it names a person column.
pub fn header_has_name_token(header: &str) -> bool {
    matches!(
        classify_header(header),
        Some(HeaderMatch { hint: HeaderHint::Name, .. })
    )
}

/// Whether a lone field reads as a name column label ("Name", "Student
/// Names") rather than a person. Tokens must stand as whole words, so
/// "Nameeta Rao" is a person.
pub fn is_name_label(field: &str) -> bool {
    header_has_name_token(field) && NAME_LABEL.is_match(field)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_headers() {
        let m = classify_header("Full Name").unwrap();
        assert_eq!(m.hint, HeaderHint::Name);
        assert_eq!(m.token, "name");
        assert_eq!(m.rank, 0);

        let m = classify_header("STUDENT").unwrap();
        assert_eq!(m.token, "student");
        assert_eq!(m.rank, 1);
    }

    #[test]
    fn test_metadata_headers_take_precedence() {
        let m = classify_header("Student Score").unwrap();
        assert_eq!(m.hint, HeaderHint::Metadata);
        assert_eq!(m.token, "score");
        assert!(!header_has_name_token("Timestamp"));
    }

    #[test]
    fn test_plain_question_has_no_hint() {
        assert!(classify_header("What is your favourite colour?").is_none());
    }

    #[test]
    fn test_metadata_words_inside_questions_have_no_hint() {
        assert!(classify_header("What were the key points of today's lecture?").is_none());
        assert!(classify_header("Totally new to Rust? (yes/no)").is_none());
        assert!(classify_header("How would you score the pacing?").is_none());
    }

    #[test]
    fn test_metadata_header_forms() {
        for header in ["Timestamp", "timestamp", "Total score", "Score", "POINTS", " points "] {
            let m = classify_header(header).unwrap();
            assert_eq!(m.hint, HeaderHint::Metadata, "{header}");
        }
    }

    #[test]
    fn test_name_labels() {
        assert!(is_name_label("Name"));
        assert!(is_name_label("Student Names"));
        assert!(is_name_label("participant"));
        assert!(!is_name_label("Nameeta Rao"));
        assert!(!is_name_label("Alice"));
    }
}
