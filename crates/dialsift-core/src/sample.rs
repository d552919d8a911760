use crate::error::CoreError;
use crate::token::{digits_only, split_segments, SplitMode};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

pub const DEFAULT_DOMESTIC_PREFIX: &str = "010";
pub const DEFAULT_DOMESTIC_LENGTH: usize = 11;
pub const DEFAULT_INTERNATIONAL_PREFIX: &str = "82";
pub const DEFAULT_INTERNATIONAL_LENGTH: usize = 12;

/// Which numbers are eligible for sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRules {
    pub domestic_prefix: String,
    pub domestic_length: usize,
    pub international_prefix: String,
    pub international_length: usize,
}

impl Default for SampleRules {
    fn default() -> Self {
        Self {
            domestic_prefix: DEFAULT_DOMESTIC_PREFIX.to_string(),
            domestic_length: DEFAULT_DOMESTIC_LENGTH,
            international_prefix: DEFAULT_INTERNATIONAL_PREFIX.to_string(),
            international_length: DEFAULT_INTERNATIONAL_LENGTH,
        }
    }
}

impl SampleRules {
    /// `821012345678` becomes `01012345678` under the default rules.
    pub fn to_domestic(&self, digits: &str) -> Option<String> {
        if digits.len() == self.international_length {
            if let Some(rest) = digits.strip_prefix(self.international_prefix.as_str()) {
                return Some(format!("0{rest}"));
            }
        }
        None
    }

    pub fn is_eligible(&self, digits: &str) -> bool {
        digits.len() == self.domestic_length && digits.starts_with(self.domestic_prefix.as_str())
    }

    /// Distinct eligible numbers in first-seen order. Ineligible segments are
    /// dropped silently.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut population = Vec::new();

        for segment in split_segments(raw, SplitMode::Lines) {
            let digits = digits_only(segment);
            let digits = self.to_domestic(&digits).unwrap_or(digits);
            if self.is_eligible(&digits) && seen.insert(digits.clone()) {
                population.push(digits);
            }
        }

        population
    }
}

pub fn validate_sample_count(count: i64, available: usize) -> Result<usize, CoreError> {
    if count <= 0 {
        return Err(CoreError::InvalidSampleCount(count));
    }
    let requested = usize::try_from(count).map_err(|_| CoreError::SampleTooLarge {
        requested: count,
        available,
    })?;
    if requested > available {
        return Err(CoreError::SampleTooLarge {
            requested: count,
            available,
        });
    }
    Ok(requested)
}

/// Uniformly shuffles the population and keeps the first `count` entries.
pub fn sample<R: Rng + ?Sized>(
    population: &[String],
    count: i64,
    rng: &mut R,
) -> Result<Vec<String>, CoreError> {
    let requested = validate_sample_count(count, population.len())?;
    let mut shuffled = population.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(requested);
    Ok(shuffled)
}

#[cfg(test)]
mod tests {
    use super::{sample, validate_sample_count, SampleRules};
    use crate::error::CoreError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn population(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("010{:08}", i)).collect()
    }

    #[test]
    fn normalize_converts_international_and_filters() {
        let rules = SampleRules::default();
        let raw = "+82 10-1234-5678\n010-1111-2222, 02-123-4567\n010 9999 8888\n010-1111-2222";
        let numbers = rules.normalize(raw);
        assert_eq!(numbers, vec!["01012345678", "01011112222", "01099998888"]);
    }

    #[test]
    fn normalize_rejects_wrong_lengths() {
        let rules = SampleRules::default();
        assert!(rules.normalize("0101234567\n010123456789\n8210123456").is_empty());
    }

    #[test]
    fn count_must_be_positive() {
        assert_eq!(
            validate_sample_count(0, 5),
            Err(CoreError::InvalidSampleCount(0))
        );
        assert_eq!(
            validate_sample_count(-3, 5),
            Err(CoreError::InvalidSampleCount(-3))
        );
    }

    #[test]
    fn count_cannot_exceed_population() {
        assert_eq!(
            validate_sample_count(6, 5),
            Err(CoreError::SampleTooLarge {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(validate_sample_count(5, 5), Ok(5));
    }

    #[test]
    fn sample_returns_distinct_members() {
        let items = population(20);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample(&items, 5, &mut rng).expect("sample");
        assert_eq!(picked.len(), 5);
        let distinct: HashSet<&String> = picked.iter().collect();
        assert_eq!(distinct.len(), 5);
        assert!(picked.iter().all(|item| items.contains(item)));
    }

    #[test]
    fn sample_order_depends_on_rng() {
        let items = population(50);
        let first = sample(&items, 50, &mut StdRng::seed_from_u64(1)).unwrap();
        let second = sample(&items, 50, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_ne!(first, second);
        assert_ne!(first, items);
    }

    #[test]
    fn sample_is_reproducible_with_seed() {
        let items = population(30);
        let first = sample(&items, 10, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = sample(&items, 10, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }
}
