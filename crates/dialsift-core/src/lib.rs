pub mod compare;
pub mod dto;
pub mod error;
pub mod sample;
pub mod token;

pub use compare::{compare, Comparison, ComparisonSummary, Reconstruct};
pub use dto::{ComparisonOutputDto, SampleOutputDto};
pub use error::CoreError;
pub use sample::{sample, validate_sample_count, SampleRules};
pub use token::{
    digits_only, split_segments, validate_token_length, Normalizer, NumberKind, SplitMode, Token,
    DEFAULT_TOKEN_LENGTH, MAX_TOKEN_LENGTH,
};
