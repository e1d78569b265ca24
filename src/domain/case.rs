use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// ─── Case ──────────────────────────────────────────────────────────────────

/// A letter-case style the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// snake_case
    Snake,
    /// kebab-case
    Kebab,
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// UPPER_CASE
    Upper,
}

impl Case {
    /// Every supported case, in canonical order.
    pub const ALL: [Case; 5] = [Case::Snake, Case::Kebab, Case::Camel, Case::Pascal, Case::Upper];

    /// Canonical (uppercase) name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Case::Snake => "SNAKE",
            Case::Kebab => "KEBAB",
            Case::Camel => "CAMEL",
            Case::Pascal => "PASCAL",
            Case::Upper => "UPPER",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = UnknownCase;

    /// Case-insensitive: `snake`, `Snake` and `SNAKE` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCase(s.to_string()))
    }
}

impl Serialize for Case {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Returned when a case name is not one of [`Case::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCase(pub String);

impl fmt::Display for UnknownCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown case: {}", self.0)
    }
}

impl std::error::Error for UnknownCase {}

// ─── Conversion ────────────────────────────────────────────────────────────

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Best-effort guess at the style the input was already written in.
    pub original_case: Option<Case>,
    pub converted_text: String,
}

/// Convert `text` into `target` case.
///
/// Fails only when the text contains no words at all (e.g. `"---"`).
pub fn convert(text: &str, target: Case) -> Result<ConversionResult> {
    let words = tokenize(text);
    if words.is_empty() {
        bail!("no words found in {text:?}");
    }

    let converted_text = match target {
        Case::Snake => join_mapped(&words, str::to_lowercase, "_"),
        Case::Kebab => join_mapped(&words, str::to_lowercase, "-"),
        Case::Upper => join_mapped(&words, str::to_uppercase, "_"),
        Case::Pascal => join_mapped(&words, capitalize, ""),
        Case::Camel => {
            let mut out = words[0].to_lowercase();
            for word in &words[1..] {
                out.push_str(&capitalize(word));
            }
            out
        }
    };

    Ok(ConversionResult {
        original_case: detect_case(text),
        converted_text,
    })
}

fn join_mapped(words: &[String], f: impl Fn(&str) -> String, sep: &str) -> String {
    words.iter().map(|w| f(w.as_str())).collect::<Vec<_>>().join(sep)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split text into words on non-alphanumeric separators and on case
/// boundaries inside camel/pascal runs.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|run| !run.is_empty())
        .flat_map(split_run)
        .collect()
}

/// Split a separator-free run at case transitions. `HTMLParser` yields
/// `HTML` and `Parser`; `version2Alpha` yields `version2` and `Alpha`.
fn split_run(run: &str) -> Vec<String> {
    let chars: Vec<char> = run.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let after_lower = prev.is_lowercase() || prev.is_numeric();
            let acronym_end =
                prev.is_uppercase() && chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            if (after_lower || acronym_end) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

// ─── Detection ─────────────────────────────────────────────────────────────

/// Classify the style `text` is already written in, if any.
pub fn detect_case(text: &str) -> Option<Case> {
    let lower_word = |w: &str| {
        !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    };
    let upper_word = |w: &str| {
        !w.is_empty() && w.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    };
    let has_letter = text.chars().any(|c| c.is_ascii_alphabetic());

    if !has_letter {
        return None;
    }

    if text.contains('_') && text.split('_').all(lower_word) {
        return Some(Case::Snake);
    }
    if text.contains('-') && text.split('-').all(lower_word) {
        return Some(Case::Kebab);
    }
    if text.split('_').all(upper_word) {
        return Some(Case::Upper);
    }

    let mut chars = text.chars();
    let first = chars.next()?;
    if !text.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if first.is_ascii_lowercase() {
        return Some(Case::Camel);
    }
    if first.is_ascii_uppercase() && chars.any(|c| c.is_ascii_lowercase()) {
        return Some(Case::Pascal);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(text: &str, case: Case) -> String {
        convert(text, case).unwrap().converted_text
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("snake".parse::<Case>(), Ok(Case::Snake));
        assert_eq!("Pascal".parse::<Case>(), Ok(Case::Pascal));
        assert_eq!("UPPER".parse::<Case>(), Ok(Case::Upper));
        assert!("FOO".parse::<Case>().is_err());
        assert!("".parse::<Case>().is_err());
    }

    #[test]
    fn test_serializes_canonical_name() {
        assert_eq!(serde_json::to_string(&Case::Kebab).unwrap(), "\"KEBAB\"");
        assert_eq!(Case::Camel.to_string(), "CAMEL");
    }

    #[test]
    fn test_tokenize_separators() {
        assert_eq!(tokenize("hello_world-foo bar"), vec!["hello", "world", "foo", "bar"]);
        assert_eq!(tokenize("  spaced   out "), vec!["spaced", "out"]);
        assert!(tokenize("--__ ").is_empty());
    }

    #[test]
    fn test_tokenize_case_boundaries() {
        assert_eq!(tokenize("helloWorld"), vec!["hello", "World"]);
        assert_eq!(tokenize("HelloWorld"), vec!["Hello", "World"]);
        assert_eq!(tokenize("HTMLParser"), vec!["HTML", "Parser"]);
        assert_eq!(tokenize("getHTTPResponse"), vec!["get", "HTTP", "Response"]);
        assert_eq!(tokenize("HELLO_WORLD"), vec!["HELLO", "WORLD"]);
        assert_eq!(tokenize("version2Alpha"), vec!["version2", "Alpha"]);
    }

    #[test]
    fn test_convert_between_styles() {
        assert_eq!(converted("helloWorld", Case::Snake), "hello_world");
        assert_eq!(converted("hello_world", Case::Camel), "helloWorld");
        assert_eq!(converted("hello-world", Case::Pascal), "HelloWorld");
        assert_eq!(converted("HelloWorld", Case::Kebab), "hello-world");
        assert_eq!(converted("hello world", Case::Upper), "HELLO_WORLD");
        assert_eq!(converted("HELLO_WORLD", Case::Camel), "helloWorld");
        assert_eq!(converted("HTMLParser", Case::Snake), "html_parser");
    }

    #[test]
    fn test_convert_is_idempotent_on_canonical_forms() {
        for (text, case) in [
            ("hello_world", Case::Snake),
            ("hello-world", Case::Kebab),
            ("helloWorld", Case::Camel),
            ("HelloWorld", Case::Pascal),
            ("HELLO_WORLD", Case::Upper),
        ] {
            assert_eq!(converted(text, case), text, "{case} should keep {text}");
        }
    }

    #[test]
    fn test_convert_single_word() {
        assert_eq!(converted("hello", Case::Pascal), "Hello");
        assert_eq!(converted("Hello", Case::Camel), "hello");
        assert_eq!(converted("hello", Case::Upper), "HELLO");
    }

    #[test]
    fn test_convert_without_words_fails() {
        assert!(convert("---", Case::Snake).is_err());
        assert!(convert("_", Case::Camel).is_err());
    }

    #[test]
    fn test_convert_reports_original_case() {
        let result = convert("helloWorld", Case::Snake).unwrap();
        assert_eq!(result.original_case, Some(Case::Camel));
        assert_eq!(result.converted_text, "hello_world");
    }

    #[test]
    fn test_detect_case() {
        assert_eq!(detect_case("hello_world"), Some(Case::Snake));
        assert_eq!(detect_case("hello-world"), Some(Case::Kebab));
        assert_eq!(detect_case("helloWorld"), Some(Case::Camel));
        assert_eq!(detect_case("hello"), Some(Case::Camel));
        assert_eq!(detect_case("HelloWorld"), Some(Case::Pascal));
        assert_eq!(detect_case("HELLO_WORLD"), Some(Case::Upper));
        assert_eq!(detect_case("HELLO"), Some(Case::Upper));
    }

    #[test]
    fn test_detect_case_unknown() {
        assert_eq!(detect_case("hello world"), None);
        assert_eq!(detect_case("Hello_World"), None);
        assert_eq!(detect_case("hello__world"), None);
        assert_eq!(detect_case("hello-world_foo"), None);
        assert_eq!(detect_case("123"), None);
        assert_eq!(detect_case("---"), None);
    }
}
