//! Histogram construction with weighted counts and range normalization
//!
//! This crate builds histograms from `&[f64]` samples and computes the
//! uniform weight vectors that normalize plotted bin heights to the number
//! of samples *within* a display range. It offers multiple strategies for
//! deriving bin edges, from a fixed bin count to automatic bin-width rules.
//!
//! # Key Features
//!
//! - **Multiple binning strategies**: fixed count, explicit edges, Scott's
//!   rule, Freedman-Diaconis rule
//! - **Display ranges**: restrict binning to a region of interest; values
//!   outside the range land in no bin
//! - **Weighted counts**: bin heights as sums of per-sample weights
//! - **Range normalization**: weights that make in-range heights sum to 1
//!
//! # Examples
//!
//! ## Basic Usage with Fixed-Width Bins
//!
//! ```rust
//! use rangehist_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let builder = FixedWidthBuilder::new(5); // 5 bins
//! let histogram = builder.build(&data).unwrap();
//!
//! assert_eq!(histogram.len(), 5);
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```
//!
//! ## Range Normalization
//!
//! ```rust
//! use rangehist_histogram::{range_normalization, BinSpec, DisplayRange, HistogramBuilder};
//!
//! let sample = vec![0.1, 0.2, 0.5, 0.9];
//! let range = DisplayRange::new(0.0, 0.6).unwrap();
//! let norm = range_normalization(&sample, &BinSpec::Count(3), Some(range)).unwrap();
//!
//! // 3 of 4 points fall inside the range, so each point weighs 1/3
//! assert_eq!(norm.in_range, 3);
//! assert_eq!(norm.out_of_range, 1);
//!
//! // A weighted build with those weights sums to 1 over the range
//! let hist = BinSpec::Count(3)
//!     .to_builder(Some(range))
//!     .unwrap()
//!     .build_weighted(&sample, Some(&norm.weights))
//!     .unwrap();
//! assert!((hist.height_sum() - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Explicit Bin Edges
//!
//! ```rust
//! use rangehist_histogram::{EdgesBuilder, HistogramBuilder};
//!
//! let builder = EdgesBuilder::new(vec![0.0, 1.0, 2.5, 4.0]).unwrap();
//! let hist = builder.build(&[0.5, 1.5, 3.0]).unwrap();
//! assert_eq!(hist.edges(), vec![0.0, 1.0, 2.5, 4.0]);
//! ```

pub mod builders;
pub mod normalize;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{BinSpec, EdgesBuilder, FixedWidthBuilder, FreedmanDiaconisRule, ScottsRule};
pub use normalize::{range_normalization, RangeNormalization};
pub use traits::HistogramBuilder;
pub use types::{DisplayRange, Histogram, HistogramBin};

pub use rangehist_core::{Error, Result, WeightVector};

// Convenience functions
/// Create a histogram with a fixed number of equal-width bins
pub fn fixed_histogram(data: &[f64], num_bins: usize) -> Result<Histogram> {
    FixedWidthBuilder::new(num_bins).build(data)
}

/// Create a histogram from an explicit edge sequence
pub fn edges_histogram(data: &[f64], edges: Vec<f64>) -> Result<Histogram> {
    EdgesBuilder::new(edges)?.build(data)
}

/// Create a histogram using Scott's rule for bin width
pub fn scott_histogram(data: &[f64]) -> Result<Histogram> {
    ScottsRule::new().build(data)
}
