//! Core types for histogram representation

use rangehist_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed display interval `[low, high]` bounding the region of interest
///
/// Values compare against the range with plain float semantics: a value is
/// outside the range iff `v < low || v > high`, so NaN is never outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct DisplayRange {
    low: f64,
    high: f64,
}

impl DisplayRange {
    /// Create a display range
    ///
    /// Both bounds must be finite and `low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(Error::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    /// Lower bound (inclusive)
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound (inclusive)
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Width of the range
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Check if a value falls inside the range (both ends inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    /// Check if a value falls strictly outside the range
    pub fn excludes(&self, value: f64) -> bool {
        value < self.low || value > self.high
    }
}

impl TryFrom<(f64, f64)> for DisplayRange {
    type Error = Error;

    fn try_from((low, high): (f64, f64)) -> Result<Self> {
        Self::new(low, high)
    }
}

impl From<DisplayRange> for (f64, f64) {
    fn from(range: DisplayRange) -> (f64, f64) {
        (range.low, range.high)
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.low, self.high)
    }
}

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Sum of sample weights in this bin; equals `count` when unweighted
    pub height: f64,
}

impl HistogramBin {
    /// Create an empty bin over `[left, right)`
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            count: 0,
            height: 0.0,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Check if a value falls within this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.left && value < self.right
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, height={:.3}",
            self.left, self.right, self.count, self.height
        )
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Total number of data points offered to the builder
    total_count: usize,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize) -> Self {
        Self { bins, total_count }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points offered to the builder
    ///
    /// Points outside the histogram span are included here but counted in
    /// no bin.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of points that actually landed in a bin
    pub fn counted(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Sum of all bin heights
    pub fn height_sum(&self) -> f64 {
        self.bins.iter().map(|bin| bin.height).sum()
    }

    /// Get the span covered by the bins, if any
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => Some((first.left, last.right)),
            _ => None,
        }
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get the maximum bin height
    pub fn max_height(&self) -> f64 {
        self.bins
            .iter()
            .map(|bin| bin.height)
            .fold(0.0, |acc, h| if h > acc { h } else { acc })
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Handle last bin specially (includes right boundary)
        if !self.bins.is_empty() {
            let last_idx = self.bins.len() - 1;
            if value == self.bins[last_idx].right {
                return Some(last_idx);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get heights as a vector
    pub fn heights(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.height).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        if self.bins.is_empty() {
            return vec![];
        }

        let mut edges = Vec::with_capacity(self.bins.len() + 1);
        for bin in &self.bins {
            edges.push(bin.left);
        }
        edges.push(self.bins[self.bins.len() - 1].right);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = self.span().unwrap_or((0.0, 0.0));
        write!(
            f,
            "Histogram({} bins, n={}, span=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            lo,
            hi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_display_range() {
        let range = DisplayRange::new(0.0, 1.0).unwrap();
        assert_eq!(range.low(), 0.0);
        assert_eq!(range.high(), 1.0);
        assert_eq!(range.width(), 1.0);
        assert!(range.contains(0.0));
        assert!(range.contains(1.0)); // Both ends inclusive
        assert!(range.excludes(1.5));
        assert!(range.excludes(-0.1));
        assert!(!range.excludes(f64::NAN)); // NaN is never outside
    }

    #[test]
    fn test_display_range_rejects_bad_intervals() {
        assert!(DisplayRange::new(1.0, 0.0).is_err());
        assert!(DisplayRange::new(1.0, 1.0).is_err());
        assert!(DisplayRange::new(f64::NAN, 1.0).is_err());
        assert!(DisplayRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_display_range_serde() {
        let range = DisplayRange::new(0.4, 0.6).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "[0.4,0.6]");

        let back: DisplayRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);

        // Deserializing an inverted interval must fail
        assert!(serde_json::from_str::<DisplayRange>("[0.6,0.4]").is_err());
    }

    #[test]
    fn test_histogram_bin() {
        let mut bin = HistogramBin::new(0.0, 1.0);
        bin.count = 5;
        bin.height = 5.0;
        assert_eq!(bin.center(), 0.5);
        assert_eq!(bin.width(), 1.0);
        assert!(bin.contains(0.5));
        assert!(!bin.contains(1.0)); // Right edge is exclusive
        assert_eq!(bin.frequency(10), 0.5);
    }

    #[test]
    fn test_histogram() {
        let mut bins = vec![
            HistogramBin::new(0.0, 1.0),
            HistogramBin::new(1.0, 2.0),
            HistogramBin::new(2.0, 3.0),
        ];
        bins[0].count = 2;
        bins[0].height = 2.0;
        bins[1].count = 5;
        bins[1].height = 5.0;
        bins[2].count = 3;
        bins[2].height = 3.0;
        let hist = Histogram::new(bins, 10);

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 10);
        assert_eq!(hist.counted(), 10);
        assert_eq!(hist.max_count(), 5);
        assert_eq!(hist.max_height(), 5.0);
        assert_relative_eq!(hist.height_sum(), 10.0);
        assert_eq!(hist.find_bin(1.5), Some(1));
        assert_eq!(hist.find_bin(3.0), Some(2)); // Last bin includes right edge
        assert_eq!(hist.counts(), vec![2, 5, 3]);
        assert_eq!(hist.span(), Some((0.0, 3.0)));

        let edges = hist.edges();
        assert_eq!(edges, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::new(vec![], 0);
        assert!(hist.is_empty());
        assert_eq!(hist.span(), None);
        assert_eq!(hist.edges(), Vec::<f64>::new());
        assert_eq!(hist.counted(), 0);
    }
}
