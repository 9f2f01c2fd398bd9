//! Encoding tests: binary lookup, others-bucket precedence, the domain
//! guard, and continuous discretization.

use std::collections::{BTreeMap, BTreeSet};

use arules_model::{CodeRange, ColumnSpan, FieldKind, FieldSpec};
use arules_preprocess::{EncodeError, encode};

fn values(pairs: &[(i64, &str)]) -> BTreeMap<i64, String> {
    pairs
        .iter()
        .map(|(code, label)| (*code, (*label).to_string()))
        .collect()
}

fn sex_spec() -> FieldSpec {
    FieldSpec {
        column: "SEX".to_string(),
        span: ColumnSpan::new(1, 1),
        kind: FieldKind::Binary {
            values: values(&[(1, "MALE"), (2, "FEMALE")]),
        },
    }
}

fn race_spec(others: Option<BTreeSet<i64>>) -> FieldSpec {
    FieldSpec {
        column: "RACE".to_string(),
        span: ColumnSpan::new(2, 2),
        kind: FieldKind::Categorical {
            values: values(&[
                (1, "AMER"),
                (2, "ASIA"),
                (3, "BLACK"),
                (4, "HISP_NR"),
                (5, "HISP_RC"),
                (6, "MULT"),
                (7, "WHITE"),
            ]),
            others,
            code_range: CodeRange::default(),
        },
    }
}

fn score_spec() -> FieldSpec {
    FieldSpec {
        column: "SCORE".to_string(),
        span: ColumnSpan::new(3, 7),
        kind: FieldKind::Continuous {
            min: 20.91,
            max: 81.04,
            intervals: 5,
        },
    }
}

#[test]
fn binary_maps_every_valid_code() {
    assert_eq!(encode("1", &sex_spec()).unwrap().as_str(), "SEX_IS_MALE");
    assert_eq!(encode("2", &sex_spec()).unwrap().as_str(), "SEX_IS_FEMALE");
}

#[test]
fn binary_rejects_unmapped_code() {
    assert_eq!(
        encode("3", &sex_spec()),
        Err(EncodeError::UnmappedCode {
            column: "SEX".to_string(),
            code: 3,
        })
    );
}

#[test]
fn whitespace_padded_values_parse() {
    assert_eq!(encode(" 1 ", &sex_spec()).unwrap().as_str(), "SEX_IS_MALE");
}

#[test]
fn non_numeric_value_is_rejected() {
    assert!(matches!(
        encode("x", &sex_spec()),
        Err(EncodeError::InvalidNumber { .. })
    ));
}

#[test]
fn others_bucket_wins_over_direct_mapping() {
    // Code 3 maps to BLACK but sits in the bucket: the bucket wins.
    let spec = race_spec(Some(BTreeSet::from([3, 4, 5])));
    assert_eq!(encode("3", &spec).unwrap().as_str(), "RACE_IS_OTHERS");
    assert_eq!(encode("4", &spec).unwrap().as_str(), "RACE_IS_OTHERS");
}

#[test]
fn codes_outside_the_bucket_map_standalone() {
    let spec = race_spec(Some(BTreeSet::from([3, 4, 5])));
    assert_eq!(encode("7", &spec).unwrap().as_str(), "RACE_IS_WHITE");
}

#[test]
fn no_bucket_degenerates_to_plain_lookup() {
    let spec = race_spec(None);
    assert_eq!(encode("3", &spec).unwrap().as_str(), "RACE_IS_BLACK");
}

#[test]
fn bucket_only_code_still_encodes_as_others() {
    let spec = FieldSpec {
        column: "RACE".to_string(),
        span: ColumnSpan::new(2, 2),
        kind: FieldKind::Categorical {
            values: values(&[(1, "AMER")]),
            others: Some(BTreeSet::from([9])),
            code_range: CodeRange::default(),
        },
    };
    assert_eq!(encode("9", &spec).unwrap().as_str(), "RACE_IS_OTHERS");
}

#[test]
fn categorical_rejects_unmapped_code() {
    let spec = race_spec(Some(BTreeSet::from([3, 4, 5])));
    assert_eq!(
        encode("8", &spec),
        Err(EncodeError::UnmappedCode {
            column: "RACE".to_string(),
            code: 8,
        })
    );
}

#[test]
fn domain_guard_rejects_out_of_range_codes() {
    let spec = race_spec(None);
    assert_eq!(
        encode("-10", &spec),
        Err(EncodeError::OutOfRange {
            column: "RACE".to_string(),
            code: -10,
            min: -9,
            max: 25,
        })
    );
    assert!(matches!(
        encode("26", &spec),
        Err(EncodeError::OutOfRange { code: 26, .. })
    ));
}

#[test]
fn domain_guard_beats_the_value_map() {
    // A mapped code outside the configured range still fails the guard.
    let spec = FieldSpec {
        column: "GRADE".to_string(),
        span: ColumnSpan::new(1, 2),
        kind: FieldKind::Categorical {
            values: values(&[(12, "SENIOR")]),
            others: None,
            code_range: CodeRange { min: 0, max: 9 },
        },
    };
    assert!(matches!(
        encode("12", &spec),
        Err(EncodeError::OutOfRange { code: 12, .. })
    ));
}

#[test]
fn continuous_value_lands_in_its_interval() {
    // step = (82 - 20) / 5 = 12.4; first bin (20.00, 32.40).
    assert_eq!(
        encode("25.50", &score_spec()).unwrap().as_str(),
        "SCORE_IS_[20-32]"
    );
    assert_eq!(
        encode("79.99", &score_spec()).unwrap().as_str(),
        "SCORE_IS_[69-82]"
    );
}

#[test]
fn boundary_value_fails_with_no_matching_interval() {
    assert_eq!(
        encode("32.40", &score_spec()),
        Err(EncodeError::NoMatchingInterval {
            column: "SCORE".to_string(),
            value: 32.4,
        })
    );
}

#[test]
fn value_far_outside_the_bounds_fails() {
    assert!(matches!(
        encode("99.99", &score_spec()),
        Err(EncodeError::NoMatchingInterval { .. })
    ));
    assert!(matches!(
        encode("10.00", &score_spec()),
        Err(EncodeError::NoMatchingInterval { .. })
    ));
}
