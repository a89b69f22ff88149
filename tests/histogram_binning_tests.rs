// Copyright 2025 Cowboy AI, LLC.

use cim_monoid::{Histogram, Monoid, MonoidError, DEFAULT_BUCKETS};
use test_case::test_case;

fn empty() -> Histogram {
    Histogram::empty(DEFAULT_BUCKETS).unwrap()
}

#[test_case(0.0, 0 ; "lower bound")]
#[test_case(9.999, 0 ; "just below first edge")]
#[test_case(10.0, 1 ; "first edge")]
#[test_case(21.0, 2 ; "inside third bucket")]
#[test_case(29.99, 2 ; "end of third bucket")]
#[test_case(41.01, 4 ; "start of fifth bucket")]
#[test_case(49.99, 4 ; "end of fifth bucket")]
#[test_case(99.99, 9 ; "just below upper bound")]
#[test_case(100.0, 9 ; "upper bound lands in last bucket")]
fn point_lands_in_bucket(value: f64, expected: usize) {
    assert_eq!(empty().bucket_for(value).unwrap(), expected);
    let h = empty().with_points(&[value]).unwrap();
    assert_eq!(h.buckets()[expected], 1);
    assert_eq!(h.count(), 1);
}

#[test_case(-0.01 ; "below lower bound")]
#[test_case(100.001 ; "above upper bound")]
#[test_case(f64::NAN ; "not a number")]
#[test_case(f64::INFINITY ; "infinite")]
fn point_out_of_range(value: f64) {
    let err = empty().with_points(&[12.0, value]).unwrap_err();
    assert!(err.is_range_error());
    assert!(matches!(err, MonoidError::OutOfRange { .. }));
}

#[test_case(1 ; "single bucket")]
#[test_case(4 ; "quartiles")]
#[test_case(10 ; "deciles")]
#[test_case(100 ; "percentiles")]
fn upper_bound_is_last_bucket_for_any_size(size: usize) {
    let h = Histogram::empty(size).unwrap().with_points(&[100.0]).unwrap();
    assert_eq!(h.buckets()[size - 1], 1);
}

#[test]
fn twenty_nine_and_twenty_one_share_a_bucket() {
    assert_eq!(
        empty().with_points(&[29.99]).unwrap(),
        empty().with_points(&[21.0]).unwrap()
    );
}

#[test]
fn merged_histograms_match_direct_binning() {
    let merged = empty()
        .with_points(&[49.99])
        .unwrap()
        .append(&empty().with_points(&[41.01]).unwrap())
        .unwrap();
    assert_eq!(merged, empty().with_points(&[42.0, 45.0]).unwrap());
    assert_eq!(merged.frequency_in_bin(4).unwrap(), 100.0);
    assert_eq!(merged.frequency_in_bin(5).unwrap(), 0.0);
}

#[test]
fn concat_all_over_many_samples() {
    let samples = [5.0, 15.0, 15.0, 95.0, 100.0];
    let partials = samples
        .iter()
        .map(|&v| empty().with_points(&[v]).unwrap());
    let total = Histogram::concat_all(partials).unwrap();
    assert_eq!(total, empty().with_points(&samples).unwrap());
    assert_eq!(total.frequency_in_bin(1).unwrap(), 40.0);
}

#[test]
fn mismatched_sizes_cannot_merge() {
    let err = empty()
        .append(&Histogram::empty(20).unwrap())
        .unwrap_err();
    assert!(err.is_mismatch());
}
