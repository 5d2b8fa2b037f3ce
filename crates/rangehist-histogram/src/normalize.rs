//! Range normalization weights
//!
//! Normalizing a histogram "to the range" divides every bin height by the
//! number of samples that fall *within* the display range. This is different
//! from density normalization (integral over the whole histogram is 1) and
//! from dividing by the total sample size, which would include points
//! outside the range. With these weights the plotted heights are relative
//! frequencies over the range's population, so they sum to 1 across the
//! range.

use crate::builders::BinSpec;
use crate::traits::HistogramBuilder;
use crate::types::DisplayRange;
use rangehist_core::{Error, Result, WeightVector};
use tracing::{debug, warn};

/// The weighting computed for a range-normalized histogram build
#[derive(Debug, Clone, PartialEq)]
pub struct RangeNormalization {
    /// Uniform per-sample weights, one entry per sample point
    pub weights: WeightVector,
    /// Number of samples inside the range (the normalization divisor)
    pub in_range: usize,
    /// Number of samples strictly outside the range
    pub out_of_range: usize,
}

/// Compute range-normalization weights for a sample
///
/// Builds a preliminary unweighted histogram with the given bin
/// specification and range, takes the number of points that landed in it as
/// the in-range count, and returns the uniform weight vector `1 / in_range`.
///
/// The scalar weight applies to every sample point, including out-of-range
/// ones; since out-of-range points are never counted into a bin, the
/// in-range bin heights still sum to 1. Out-of-range points are reported
/// through a warning and the returned [`RangeNormalization::out_of_range`]
/// field.
///
/// Fails with [`Error::EmptyRange`] when no sample falls inside the range.
pub fn range_normalization(
    sample: &[f64],
    bins: &BinSpec,
    range: Option<DisplayRange>,
) -> Result<RangeNormalization> {
    let builder = bins.to_builder(range)?;
    let preliminary = builder.build(sample)?;
    let in_range = preliminary.counted();
    debug!(
        in_range,
        bins = preliminary.len(),
        "preliminary histogram for range normalization"
    );

    if in_range == 0 {
        return Err(match range {
            Some(r) => Error::EmptyRange {
                low: r.low(),
                high: r.high(),
            },
            None => Error::empty_input("range normalization"),
        });
    }

    let weights = WeightVector::uniform(sample.len(), 1.0 / in_range as f64)?;

    // The effective range falls back to the preliminary histogram's span
    // when no display range was given.
    let (low, high) = match (range, preliminary.span()) {
        (Some(r), _) => (r.low(), r.high()),
        (None, Some(span)) => span,
        (None, None) => (0.0, 0.0),
    };
    let out_of_range = sample.iter().filter(|&&v| v < low || v > high).count();
    if out_of_range > 0 {
        warn!(out_of_range, "sample points outside display range");
    }

    Ok(RangeNormalization {
        weights,
        in_range,
        out_of_range,
    })
}
