use crate::compare::{Comparison, ComparisonSummary};
use crate::token::NumberKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOutputDto {
    pub kind: NumberKind,
    pub summary: ComparisonSummary,
    pub duplicates: Vec<String>,
    pub targets: Vec<String>,
}

impl ComparisonOutputDto {
    pub fn from_comparison(kind: NumberKind, comparison: Comparison) -> Self {
        let summary = comparison.summary();
        let (duplicates, targets) = comparison.into_parts();
        Self {
            kind,
            summary,
            duplicates: duplicates
                .into_iter()
                .map(|token| token.into_string())
                .collect(),
            targets,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleOutputDto {
    pub available: usize,
    pub requested: usize,
    pub numbers: Vec<String>,
}
