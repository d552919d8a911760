use crate::error::CoreError;
use crate::token::{NumberKind, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_PHONE_PREFIX: &str = "010";

/// How a target token is turned back into a full number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruct {
    Prefix(String),
    Bare,
}

impl Reconstruct {
    /// Phone tokens get the dialing prefix back; payment tokens are emitted as-is.
    pub fn for_kind(kind: NumberKind, phone_prefix: &str) -> Result<Self, CoreError> {
        match kind {
            NumberKind::Phone => {
                if phone_prefix.is_empty() || !phone_prefix.chars().all(|ch| ch.is_ascii_digit()) {
                    return Err(CoreError::InvalidPrefix(phone_prefix.to_string()));
                }
                Ok(Reconstruct::Prefix(phone_prefix.to_string()))
            }
            NumberKind::Payment => Ok(Reconstruct::Bare),
        }
    }

    pub fn apply(&self, token: &Token) -> String {
        match self {
            Reconstruct::Prefix(prefix) => format!("{prefix}{token}"),
            Reconstruct::Bare => token.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub sender: usize,
    pub response: usize,
    pub duplicates: usize,
    pub targets: usize,
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sender {}, response {}, duplicates {}, targets {}",
            self.sender, self.response, self.duplicates, self.targets
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    sender_count: usize,
    response_count: usize,
    duplicates: Vec<Token>,
    targets: Vec<String>,
}

impl Comparison {
    /// Tokens present in both inputs, in sender order.
    pub fn duplicates(&self) -> &[Token] {
        &self.duplicates
    }

    /// Reconstructed sender numbers missing from the response input.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            sender: self.sender_count,
            response: self.response_count,
            duplicates: self.duplicates.len(),
            targets: self.targets.len(),
        }
    }

    pub fn into_parts(self) -> (Vec<Token>, Vec<String>) {
        (self.duplicates, self.targets)
    }
}

/// Splits the distinct sender tokens into those also present in `response`
/// and those that are not. Each distinct sender token lands in exactly one
/// side.
pub fn compare(sender: &[Token], response: &[Token], reconstruct: &Reconstruct) -> Comparison {
    let responded: HashSet<&Token> = response.iter().collect();
    let mut seen: HashSet<&Token> = HashSet::with_capacity(sender.len());
    let mut duplicates = Vec::new();
    let mut targets = Vec::new();

    for token in sender {
        if !seen.insert(token) {
            continue;
        }
        if responded.contains(token) {
            duplicates.push(token.clone());
        } else {
            targets.push(reconstruct.apply(token));
        }
    }

    Comparison {
        sender_count: sender.len(),
        response_count: response.len(),
        duplicates,
        targets,
    }
}
