//! Core traits for histogram building

use crate::types::Histogram;
use rangehist_core::{Result, WeightVector};

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build an unweighted histogram from the given sample
    ///
    /// Default implementation calls `build_weighted` with no weights.
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        self.build_weighted(sample, None)
    }

    /// Build a histogram where each bin height is the sum of sample weights
    ///
    /// With no weights every point contributes 1.0, so heights equal counts.
    /// The weight vector must have the same length as the sample.
    fn build_weighted(&self, sample: &[f64], weights: Option<&WeightVector>) -> Result<Histogram>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
