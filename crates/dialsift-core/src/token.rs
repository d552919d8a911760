use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_TOKEN_LENGTH: usize = 8;
pub const MAX_TOKEN_LENGTH: usize = 32;

/// How a raw input blob is cut into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Newline or comma; spaces inside a segment are kept and later stripped.
    #[default]
    Lines,
    /// Any run of whitespace, or a comma.
    Whitespace,
}

/// Which end of a number identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    /// Keeps the trailing digits, so country codes and trunk prefixes drop out.
    #[default]
    Phone,
    /// Keeps the leading digits.
    Payment,
}

impl NumberKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NumberKind::Phone => "phone",
            NumberKind::Payment => "payment",
        }
    }

    /// Keeps `len` characters from the identifying end. Input shorter than
    /// `len` is returned whole.
    pub fn slice(self, digits: &str, len: usize) -> &str {
        let count = digits.chars().count();
        if count <= len {
            return digits;
        }
        match self {
            NumberKind::Phone => digits
                .char_indices()
                .nth(count - len)
                .map_or(digits, |(start, _)| &digits[start..]),
            NumberKind::Payment => digits
                .char_indices()
                .nth(len)
                .map_or(digits, |(end, _)| &digits[..end]),
        }
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A digit-only number of the configured length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn validate_token_length(len: usize) -> Result<usize, CoreError> {
    if len == 0 || len > MAX_TOKEN_LENGTH {
        return Err(CoreError::InvalidTokenLength(len));
    }
    Ok(len)
}

pub fn split_segments(raw: &str, mode: SplitMode) -> Vec<&str> {
    let is_delimiter = |ch: char| match mode {
        SplitMode::Lines => ch == '\n' || ch == ',',
        SplitMode::Whitespace => ch.is_whitespace() || ch == ',',
    };
    raw.split(is_delimiter)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub fn digits_only(segment: &str) -> String {
    segment.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    kind: NumberKind,
    split: SplitMode,
    token_length: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            kind: NumberKind::Phone,
            split: SplitMode::Lines,
            token_length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl Normalizer {
    pub fn new(kind: NumberKind, split: SplitMode, token_length: usize) -> Result<Self, CoreError> {
        Ok(Self {
            kind,
            split,
            token_length: validate_token_length(token_length)?,
        })
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn token_length(&self) -> usize {
        self.token_length
    }

    /// Either every segment yields a valid token or nothing is returned and
    /// the error lists each segment that failed.
    pub fn normalize(&self, raw: &str) -> Result<Vec<Token>, CoreError> {
        let mut tokens = Vec::new();
        let mut offending = Vec::new();

        for segment in split_segments(raw, self.split) {
            let digits = digits_only(segment);
            if digits.is_empty() {
                continue;
            }
            let sliced = self.kind.slice(&digits, self.token_length);
            if sliced.len() == self.token_length {
                tokens.push(Token(sliced.to_string()));
            } else {
                offending.push(segment.to_string());
            }
        }

        if !offending.is_empty() {
            return Err(CoreError::InvalidTokens {
                expected: self.token_length,
                offending,
            });
        }

        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::{digits_only, split_segments, Normalizer, NumberKind, SplitMode};
    use crate::error::CoreError;

    fn tokens(normalizer: &Normalizer, raw: &str) -> Vec<String> {
        normalizer
            .normalize(raw)
            .expect("normalize")
            .into_iter()
            .map(|token| token.into_string())
            .collect()
    }

    #[test]
    fn split_lines_keeps_spaces_within_a_segment() {
        let raw = "010 1234 5678\n010-2222-3333, 01044445555\n\n";
        let segments = split_segments(raw, SplitMode::Lines);
        assert_eq!(
            segments,
            vec!["010 1234 5678", "010-2222-3333", "01044445555"]
        );
    }

    #[test]
    fn split_whitespace_breaks_on_any_space() {
        let segments = split_segments("010 1234\t5678,,9", SplitMode::Whitespace);
        assert_eq!(segments, vec!["010", "1234", "5678", "9"]);
    }

    #[test]
    fn digits_only_strips_formatting() {
        assert_eq!(digits_only("+82 (10) 1234-5678"), "821012345678");
    }

    #[test]
    fn phone_keeps_last_digits() {
        let normalizer = Normalizer::default();
        assert_eq!(
            tokens(&normalizer, "010-1234-5678\n+82 10 2222 3333"),
            vec!["12345678", "22223333"]
        );
    }

    #[test]
    fn payment_keeps_first_digits() {
        let normalizer = Normalizer::new(NumberKind::Payment, SplitMode::Lines, 8).unwrap();
        assert_eq!(tokens(&normalizer, "1234-5678-9012"), vec!["12345678"]);
    }

    #[test]
    fn digitless_segments_are_ignored() {
        let normalizer = Normalizer::default();
        assert_eq!(tokens(&normalizer, "n/a\n01012345678\n--"), vec!["12345678"]);
    }

    #[test]
    fn short_tokens_are_reported_together() {
        let normalizer = Normalizer::default();
        let err = normalizer
            .normalize("01012345678\n1234\n010-99")
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTokens {
                expected: 8,
                offending: vec!["1234".to_string(), "010-99".to_string()],
            }
        );
        assert_eq!(err.to_string(), "expected 8-digit numbers, got: 1234, 010-99");
    }

    #[test]
    fn slice_respects_char_boundaries() {
        assert_eq!(NumberKind::Phone.slice("١٢٣45", 2), "45");
        assert_eq!(NumberKind::Phone.slice("1٢345", 4), "٢345");
        assert_eq!(NumberKind::Payment.slice("١٢٣45", 2), "١٢");
        assert_eq!(NumberKind::Payment.slice("12", 4), "12");
    }

    #[test]
    fn token_length_must_be_in_range() {
        assert!(Normalizer::new(NumberKind::Phone, SplitMode::Lines, 0).is_err());
        assert!(Normalizer::new(NumberKind::Phone, SplitMode::Lines, 33).is_err());
        assert!(Normalizer::new(NumberKind::Phone, SplitMode::Lines, 4).is_ok());
    }
}
