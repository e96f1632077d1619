//! Designator-driven field extraction.
//!
//! Every data element in the subfile body is a line starting with a 2-3
//! character designator immediately followed by its value. Extraction is
//! a regex search for the designator token followed by a greedy run of
//! non-line-terminator characters up to the last word boundary; the
//! character class excludes line terminators, which is what keeps
//! consecutive designator-prefixed lines apart without a line-oriented
//! parser. Only the first match is used.

use regex::Regex;

/// Outcome of looking one designator up in the raw text.
///
/// Decoders need all three states: free-text fields collapse `Empty` and
/// `Absent` to "no value", but coded fields decode `Empty` to their
/// sentinel variant rather than to absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The designator is not defined for the active version, or does not
    /// occur in the text.
    Absent,
    /// The designator occurs but its captured value is zero-length.
    Empty,
    /// The designator occurs with a non-empty value.
    Value(String),
}

impl Extraction {
    /// The captured string, dropping the `Absent`/`Empty` distinction.
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The captured token, with `Absent` and `Empty` both as `""`.
    pub fn token(&self) -> &str {
        match self {
            Self::Value(value) => value,
            _ => "",
        }
    }
}

/// Compiled search patterns for one designator code.
#[derive(Debug)]
pub(crate) struct FieldPattern {
    code: &'static str,
    value: Regex,
    word: Regex,
}

impl FieldPattern {
    pub(crate) fn new(code: &'static str) -> Self {
        // Designator codes are uppercase alphanumerics, never regex
        // metacharacters.
        Self {
            code,
            value: Regex::new(&format!(r"{code}([^\r\n]*)\b")).unwrap(),
            word: Regex::new(&format!(r"{code}(\w*)\b")).unwrap(),
        }
    }

    pub(crate) fn code(&self) -> &'static str {
        self.code
    }

    /// First match of the designator, with its full line-bounded value.
    pub(crate) fn extract(&self, data: &str) -> Extraction {
        Self::capture(&self.value, data)
    }

    /// First match of the designator, capture restricted to a contiguous
    /// run of word characters.
    pub(crate) fn extract_word(&self, data: &str) -> Extraction {
        Self::capture(&self.word, data)
    }

    fn capture(regex: &Regex, data: &str) -> Extraction {
        match regex.captures(data).and_then(|c| c.get(1)) {
            None => Extraction::Absent,
            Some(m) if m.as_str().is_empty() => Extraction::Empty,
            Some(m) => Extraction::Value(m.as_str().to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_when_designator_not_in_text() {
        let pattern = FieldPattern::new("DAZ");
        assert_eq!(pattern.extract("DAYGRN\n"), Extraction::Absent);
        assert_eq!(pattern.extract(""), Extraction::Absent);
    }

    #[test]
    fn empty_when_value_is_zero_length() {
        let pattern = FieldPattern::new("DAZ");
        assert_eq!(pattern.extract("DAZ\n"), Extraction::Empty);
        assert_eq!(pattern.extract("DAZ"), Extraction::Empty);
    }

    #[test]
    fn captures_value_up_to_end_of_line() {
        let pattern = FieldPattern::new("DAG");
        assert_eq!(
            pattern.extract("DAG789 E OAK ST\nDAIANYTOWN\n"),
            Extraction::Value("789 E OAK ST".into())
        );
    }

    #[test]
    fn trailing_whitespace_is_dropped_by_word_boundary() {
        let pattern = FieldPattern::new("DAK");
        assert_eq!(
            pattern.extract("DAK902230000  \n"),
            Extraction::Value("902230000".into())
        );
    }

    #[test]
    fn only_the_first_match_is_used() {
        let pattern = FieldPattern::new("DAZ");
        assert_eq!(pattern.extract("DAZ\nDAZBRO\n"), Extraction::Empty);
        assert_eq!(
            pattern.extract("DAZBLN\nDAZBRO\n"),
            Extraction::Value("BLN".into())
        );
    }

    #[test]
    fn value_does_not_cross_a_segment_terminator() {
        let pattern = FieldPattern::new("DDG");
        assert_eq!(pattern.extract("DDGN\rDCKXYZ"), Extraction::Value("N".into()));
    }

    #[test]
    fn word_capture_stops_at_non_word_characters() {
        let pattern = FieldPattern::new("DAU");
        assert_eq!(
            pattern.extract_word("DAU076 IN\n"),
            Extraction::Value("076".into())
        );
        assert_eq!(pattern.extract_word("DAU\n"), Extraction::Empty);
    }
}
