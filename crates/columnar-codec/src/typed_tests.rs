//! Tests for `typed` module

use super::config::EncodeLimits;
use super::error::Error;
use super::physical_type::PhysicalType;
use super::typed::*;

fn sample_columns() -> Vec<ColumnValues> {
    vec![
        ColumnValues::Int8(vec![1, 1, 1, 2, 2, 3]),
        ColumnValues::Int16(vec![100, 100, 200, 200, 200]),
        ColumnValues::Int32(vec![1000, 1000, 2000, 3000, 3000]),
        ColumnValues::Int64(vec![1_000_000, 1_000_000, 2_000_000]),
        ColumnValues::FixedWidthArray {
            width: 2,
            values: vec![vec![0, 1], vec![0, 1], vec![9, 9]],
        },
        ColumnValues::VariableWidth(
            ["Jan", "Feb", "Mar", "Jan", "Feb", "Mar", "Jan"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        ),
    ]
}

#[test]
fn test_physical_type_of_each_variant() {
    let types: Vec<PhysicalType> = sample_columns()
        .iter()
        .map(ColumnValues::physical_type)
        .collect();

    assert_eq!(types, PhysicalType::ALL.to_vec());
}

#[test]
fn test_rle_round_trip_every_type() {
    for column in sample_columns() {
        let encoded = column.rle_encode().expect("encode");

        assert_eq!(encoded.physical_type(), column.physical_type());
        assert_eq!(encoded.decoded_size(), column.len());
        assert_eq!(encoded.decode(), column);
    }
}

#[test]
fn test_dictionary_round_trip_every_type() {
    for column in sample_columns() {
        let encoded = column.dictionary_encode().expect("encode");

        assert_eq!(encoded.physical_type(), column.physical_type());
        assert_eq!(encoded.size(), column.len());
        assert_eq!(encoded.decode().expect("decode"), column);
    }
}

#[test]
fn test_rle_int16_runs() {
    let column = ColumnValues::Int16(vec![100, 100, 200, 200, 200]);

    let encoded = column.rle_encode().expect("encode");

    assert_eq!(encoded.num_runs(), 2);
    match encoded {
        TypedRleColumn::Int16(rle) => {
            assert_eq!(rle.values(), &[100, 200]);
            assert_eq!(rle.lengths(), &[2, 3]);
        }
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_dictionary_strings_cardinality() {
    let column = ColumnValues::VariableWidth(
        ["Jan", "Feb", "Mar", "Jan"]
            .iter()
            .map(ToString::to_string)
            .collect(),
    );

    let encoded = column.dictionary_encode().expect("encode");

    assert_eq!(encoded.cardinality(), 3);
    match encoded {
        TypedDictionaryColumn::VariableWidth(dict) => {
            assert_eq!(dict.indices(), &[0, 1, 2, 0]);
        }
        other => panic!("unexpected variant {other:?}"),
    }
}

#[test]
fn test_fixed_width_mismatch_rejected() {
    let column = ColumnValues::FixedWidthArray {
        width: 4,
        values: vec![vec![1, 2, 3, 4], vec![1, 2, 3]],
    };

    let expected = Error::WidthMismatch {
        expected: 4,
        actual: 3,
        position: 1,
    };
    assert_eq!(column.rle_encode().unwrap_err(), expected);
    assert_eq!(column.dictionary_encode().unwrap_err(), expected);
}

#[test]
fn test_empty_columns() {
    let column = ColumnValues::Int32(Vec::new());

    assert!(column.is_empty());
    assert_eq!(column.rle_encode().expect("encode").num_runs(), 0);
    assert_eq!(column.dictionary_encode().expect("encode").cardinality(), 0);
}

#[test]
fn test_limits_apply_through_dispatch() {
    let limits = EncodeLimits {
        max_values: 2,
        ..EncodeLimits::default()
    };
    let column = ColumnValues::Int64(vec![1, 2, 3]);

    assert!(matches!(
        column.rle_encode_with_limits(&limits),
        Err(Error::TooManyValues { len: 3, max: 2 })
    ));
    assert!(matches!(
        column.dictionary_encode_with_limits(&limits),
        Err(Error::TooManyValues { len: 3, max: 2 })
    ));
}

#[test]
fn test_corrupt_typed_dictionary() {
    let corrupt = TypedDictionaryColumn::Int32(crate::DictionaryColumn::from_parts(
        vec![1, 2, 3],
        vec![0, 1, 5],
    ));

    let err = corrupt.decode().unwrap_err();

    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_typed_stats() {
    let column = ColumnValues::Int32(vec![7; 64]);

    let stats = column.rle_encode().expect("encode").stats();

    assert_eq!(stats.total_values, 64);
    assert_eq!(stats.encoded_entries, 1);
}

#[test]
fn test_typed_stats_use_payload_bytes() {
    let strings = ColumnValues::VariableWidth(
        ["Jan", "Feb", "Jan"].iter().map(ToString::to_string).collect(),
    );
    let arrays = ColumnValues::FixedWidthArray {
        width: 8,
        values: vec![vec![7; 8]; 10],
    };

    let string_stats = strings.dictionary_encode().expect("encode").stats();
    let array_stats = arrays.rle_encode().expect("encode").stats();

    assert_eq!(string_stats.raw_size_bytes, 9);
    assert_eq!(string_stats.encoded_size_bytes, 6 + 3 * 4);
    assert_eq!(array_stats.raw_size_bytes, 80);
    assert_eq!(array_stats.encoded_size_bytes, 8 + 4);
}
