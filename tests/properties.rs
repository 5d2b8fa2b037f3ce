//! Property-based tests for range normalization
//!
//! These pin down the normalization guarantee across a wide range of
//! samples, bin counts and ranges.

use proptest::prelude::*;
use rangehist::{hist_on, range_normalization, BinSpec, DisplayRange, HistConfig, Surface};

proptest! {
    // Property: with at least one in-range point, normalized heights sum to 1
    #[test]
    fn prop_in_range_heights_sum_to_one(
        values in proptest::collection::vec(-1.0f64..2.0, 1..200),
        bins in 1usize..40,
    ) {
        prop_assume!(values.iter().any(|v| (0.0..=1.0).contains(v)));

        let config = HistConfig::new()
            .with_bins(BinSpec::Count(bins))
            .with_range(DisplayRange::new(0.0, 1.0).unwrap())
            .normalized(true);
        let mut surface = Surface::new();
        let plot = hist_on(&mut surface, &values, &config).unwrap();

        let total: f64 = plot.heights.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total = {total}");
    }

    // Property: the uniform weight is exactly 1 / in_range for every point
    #[test]
    fn prop_weights_are_uniform(
        values in proptest::collection::vec(-1.0f64..2.0, 1..200),
    ) {
        prop_assume!(values.iter().any(|v| (0.0..=1.0).contains(v)));

        let range = DisplayRange::new(0.0, 1.0).unwrap();
        let norm = range_normalization(&values, &BinSpec::Count(10), Some(range)).unwrap();

        prop_assert_eq!(norm.weights.len(), values.len());
        let expected = 1.0 / norm.in_range as f64;
        for i in 0..values.len() {
            prop_assert_eq!(norm.weights[i], expected);
        }
    }

    // Property: in-range and out-of-range counts partition the sample when
    // every value is finite
    #[test]
    fn prop_in_and_out_partition_sample(
        values in proptest::collection::vec(-1.0f64..2.0, 1..200),
    ) {
        prop_assume!(values.iter().any(|v| (0.0..=1.0).contains(v)));

        let range = DisplayRange::new(0.0, 1.0).unwrap();
        let norm = range_normalization(&values, &BinSpec::Count(10), Some(range)).unwrap();

        prop_assert_eq!(norm.in_range + norm.out_of_range, values.len());
    }

    // Property: normalization never changes which bin a value lands in
    #[test]
    fn prop_normalization_keeps_bin_occupancy(
        values in proptest::collection::vec(0.0f64..1.0, 1..100),
        bins in 1usize..20,
    ) {
        let range = DisplayRange::new(0.0, 1.0).unwrap();
        let config = HistConfig::new()
            .with_bins(BinSpec::Count(bins))
            .with_range(range);

        let mut surface = Surface::new();
        let plain = hist_on(&mut surface, &values, &config).unwrap();
        let normalized = hist_on(&mut surface, &values, &config.clone().normalized(true)).unwrap();

        prop_assert_eq!(&plain.edges, &normalized.edges);
        // Every occupied bin stays occupied and vice versa
        for (p, n) in plain.heights.iter().zip(normalized.heights.iter()) {
            prop_assert_eq!(*p > 0.0, *n > 0.0);
        }
    }
}
