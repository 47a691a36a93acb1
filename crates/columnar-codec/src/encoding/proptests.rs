//! Property-based tests for the column encodings.

use std::collections::HashSet;

use proptest::prelude::*;

use super::*;
use crate::error::Error;

/// Small alphabets make long runs and repeated dictionary hits likely.
fn clustered_values() -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(0i32..4, 0..200)
}

fn string_values() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-c]{0,2}", 0..100)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: RLE decode(encode(S)) == S
    #[test]
    fn prop_rle_round_trip(values in clustered_values()) {
        let rle = RleColumn::encode(&values).expect("encode");
        prop_assert_eq!(rle.decode(), values);
    }

    /// Property: RLE round-trips arbitrary 64-bit values
    #[test]
    fn prop_rle_round_trip_any_i64(values in proptest::collection::vec(any::<i64>(), 0..100)) {
        let rle = RleColumn::encode(&values).expect("encode");
        prop_assert_eq!(rle.decode(), values);
    }

    /// Property: adjacent runs never hold equal values
    #[test]
    fn prop_rle_runs_are_maximal(values in clustered_values()) {
        let rle = RleColumn::encode(&values).expect("encode");
        for pair in rle.values().windows(2) {
            prop_assert_ne!(pair[0], pair[1]);
        }
        prop_assert!(rle.lengths().iter().all(|&len| len >= 1));
    }

    /// Property: decoded_size() == len(S)
    #[test]
    fn prop_rle_conserves_length(values in clustered_values()) {
        let rle = RleColumn::encode(&values).expect("encode");
        prop_assert_eq!(rle.decoded_size(), values.len());
        prop_assert_eq!(rle.iter().len(), values.len());
    }

    /// Property: lazy iteration yields the same sequence as decode()
    #[test]
    fn prop_rle_iter_matches_decode(values in string_values()) {
        let rle = RleColumn::encode(&values).expect("encode");
        let iterated: Vec<String> = rle.iter().cloned().collect();
        prop_assert_eq!(iterated, rle.decode());
    }

    /// Property: encoder output is accepted by from_parts
    #[test]
    fn prop_rle_parts_round_trip(values in clustered_values()) {
        let rle = RleColumn::encode(&values).expect("encode");
        let (run_values, lengths) = rle.clone().into_parts();
        let rebuilt = RleColumn::from_parts(run_values, lengths).expect("valid runs");
        prop_assert_eq!(rebuilt, rle);
    }

    /// Property: dictionary decode(encode(S)) == S
    #[test]
    fn prop_dictionary_round_trip(values in clustered_values()) {
        let dict = DictionaryColumn::encode(&values).expect("encode");
        prop_assert_eq!(dict.decode().expect("decode"), values);
    }

    /// Property: dictionary round-trips variable-width values
    #[test]
    fn prop_dictionary_round_trip_strings(values in string_values()) {
        let dict = DictionaryColumn::encode(&values).expect("encode");
        prop_assert_eq!(dict.size(), values.len());
        prop_assert_eq!(dict.decode().expect("decode"), values);
    }

    /// Property: dictionary entries are pairwise distinct
    #[test]
    fn prop_dictionary_entries_unique(values in string_values()) {
        let dict = DictionaryColumn::encode(&values).expect("encode");
        let distinct: HashSet<&String> = dict.dictionary().iter().collect();
        prop_assert_eq!(distinct.len(), dict.cardinality());
    }

    /// Property: dictionary lists values in first-occurrence order
    #[test]
    fn prop_dictionary_first_occurrence_order(values in clustered_values()) {
        let dict = DictionaryColumn::encode(&values).expect("encode");

        let mut seen = HashSet::new();
        let expected: Vec<i32> = values.iter().copied().filter(|v| seen.insert(*v)).collect();

        prop_assert_eq!(dict.dictionary(), expected.as_slice());
    }

    /// Property: every index addresses the dictionary
    #[test]
    fn prop_dictionary_indices_valid(values in clustered_values()) {
        let dict = DictionaryColumn::encode(&values).expect("encode");
        let len = dict.cardinality();
        prop_assert!(dict.indices().iter().all(|&index| (index as usize) < len));
    }

    /// Property: any index >= dictionary length is reported on decode
    #[test]
    fn prop_dictionary_detects_corruption(
        values in proptest::collection::vec(0i32..4, 1..50),
        offset in 0u32..100,
        slot in any::<prop::sample::Index>(),
    ) {
        let dict = DictionaryColumn::encode(&values).expect("encode");
        let (dictionary, mut indices) = dict.into_parts();

        let bad_position = slot.index(indices.len());
        let bad_index = dictionary.len() as u32 + offset;
        indices[bad_position] = bad_index;

        let corrupt = DictionaryColumn::from_parts(dictionary, indices);
        let is_expected_error = matches!(
            corrupt.decode(),
            Err(Error::IndexOutOfRange { index, position, .. })
                if index == bad_index && position == bad_position
        );
        prop_assert!(is_expected_error);
    }
}
