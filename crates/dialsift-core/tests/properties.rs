use dialsift_core::{
    compare, sample, CoreError, Normalizer, NumberKind, Reconstruct, SampleRules, SplitMode,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn phone_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("010-[0-9]{4}-[0-9]{4}", 0..30)
}

fn number_kind() -> impl Strategy<Value = NumberKind> {
    prop_oneof![Just(NumberKind::Phone), Just(NumberKind::Payment)]
}

fn number_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[0-9]{4}-[0-9]{4}(-[0-9]{1,4})?", 0..30)
}

fn reconstruct_for(kind: NumberKind) -> Reconstruct {
    Reconstruct::for_kind(kind, "010").unwrap()
}

/// Segments that carry digits but cannot yield `len` of them.
fn expected_offenders(raw: &str, len: usize) -> Vec<String> {
    raw.split(['\n', ','])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            let digits = segment.chars().filter(char::is_ascii_digit).count();
            digits > 0 && digits < len
        })
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn normalized_tokens_have_configured_length(
        raw in "[0-9 ,\\n-]{0,200}",
        len in 1usize..12,
        kind in number_kind()
    ) {
        let normalizer = Normalizer::new(kind, SplitMode::Lines, len).unwrap();
        let expected = expected_offenders(&raw, len);
        match normalizer.normalize(&raw) {
            Ok(tokens) => {
                prop_assert!(expected.is_empty());
                prop_assert!(tokens.iter().all(|t| t.as_str().len() == len));
            }
            Err(CoreError::InvalidTokens { expected: want, offending }) => {
                prop_assert_eq!(want, len);
                prop_assert_eq!(offending, expected);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicates_and_targets_partition_sender(
        sender in number_list(),
        response in number_list(),
        kind in number_kind()
    ) {
        let normalizer = Normalizer::new(kind, SplitMode::Lines, 8).unwrap();
        let a = normalizer.normalize(&sender.join("\n")).unwrap();
        let b = normalizer.normalize(&response.join(", ")).unwrap();
        let reconstruct = reconstruct_for(kind);
        let result = compare(&a, &b, &reconstruct);

        let duplicates: HashSet<String> =
            result.duplicates().iter().map(|t| reconstruct.apply(t)).collect();
        let targets: HashSet<String> = result.targets().iter().cloned().collect();
        prop_assert!(duplicates.is_disjoint(&targets));

        let distinct_a: HashSet<_> = a.iter().collect();
        let summary = result.summary();
        prop_assert_eq!(summary.duplicates + summary.targets, distinct_a.len());
        prop_assert_eq!(summary.sender, a.len());
    }

    #[test]
    fn sample_never_exceeds_request(
        numbers in phone_list(),
        count in 1i64..40,
        seed in any::<u64>()
    ) {
        let rules = SampleRules::default();
        let population = rules.normalize(&numbers.join("\n"));
        let mut rng = StdRng::seed_from_u64(seed);
        match sample(&population, count, &mut rng) {
            Ok(picked) => {
                prop_assert_eq!(picked.len() as i64, count);
                let distinct: HashSet<&String> = picked.iter().collect();
                prop_assert_eq!(distinct.len(), picked.len());
                prop_assert!(picked.iter().all(|n| population.contains(n)));
            }
            Err(CoreError::SampleTooLarge { requested, available }) => {
                prop_assert_eq!(requested, count);
                prop_assert_eq!(available, population.len());
                prop_assert!((count as usize) > population.len());
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
