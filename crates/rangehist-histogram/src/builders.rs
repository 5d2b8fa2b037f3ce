//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{DisplayRange, Histogram, HistogramBin};
use rangehist_core::{Error, Result, WeightVector};
use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-10;

/// Bin specification: how bin edges are derived from the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinSpec {
    /// A fixed number of equal-width bins
    Count(usize),
    /// Explicit bin edges, used exactly as given
    Edges(Vec<f64>),
    /// Bin width from Scott's rule
    Scott,
    /// Bin width from the Freedman-Diaconis rule
    FreedmanDiaconis,
}

impl Default for BinSpec {
    fn default() -> Self {
        BinSpec::Count(10)
    }
}

impl BinSpec {
    /// Resolve this specification to a builder
    ///
    /// The display range restricts which values are counted and, for
    /// width-based specifications, the span the bins cover. Explicit edges
    /// define their own span, so a range is ignored for binning there.
    pub fn to_builder(&self, range: Option<DisplayRange>) -> Result<Box<dyn HistogramBuilder>> {
        Ok(match self {
            BinSpec::Count(n) => {
                let builder = FixedWidthBuilder::new(*n);
                Box::new(match range {
                    Some(r) => builder.with_range(r),
                    None => builder,
                })
            }
            BinSpec::Edges(edges) => Box::new(EdgesBuilder::new(edges.clone())?),
            BinSpec::Scott => {
                let rule = ScottsRule::new();
                Box::new(match range {
                    Some(r) => rule.with_range(r),
                    None => rule,
                })
            }
            BinSpec::FreedmanDiaconis => {
                let rule = FreedmanDiaconisRule::new();
                Box::new(match range {
                    Some(r) => rule.with_range(r),
                    None => rule,
                })
            }
        })
    }
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins over the
/// display range, or over the finite data extent when no range is set.
/// Values outside the span land in no bin.
#[derive(Debug, Clone)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    range: Option<DisplayRange>,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
            range: None,
        }
    }

    /// Restrict the histogram to a display range
    pub fn with_range(mut self, range: DisplayRange) -> Self {
        self.range = Some(range);
        self
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build_weighted(&self, sample: &[f64], weights: Option<&WeightVector>) -> Result<Histogram> {
        if let Some(w) = weights {
            w.check_len(sample.len(), "sample weights")?;
        }

        let (lo, hi) = match self.range {
            Some(r) => (r.low(), r.high()),
            None => match finite_extent(sample) {
                Some(extent) => extent,
                None => return Ok(Histogram::new(vec![], sample.len())),
            },
        };

        if (hi - lo).abs() < EPSILON {
            // All values are the same
            let mut bins = vec![HistogramBin::new(lo, hi)];
            fill_bins(&mut bins, sample, weights, lo, hi);
            return Ok(Histogram::new(bins, sample.len()));
        }

        let width = (hi - lo) / self.num_bins as f64;
        let mut bins = Vec::with_capacity(self.num_bins);
        for i in 0..self.num_bins {
            let left = lo + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                hi // Ensure last bin includes the upper bound
            } else {
                lo + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right));
        }

        fill_bins(&mut bins, sample, weights, lo, hi);
        Ok(Histogram::new(bins, sample.len()))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Histogram builder using an explicit edge sequence
///
/// Bin edges in the output are exactly the edges given here.
#[derive(Debug, Clone)]
pub struct EdgesBuilder {
    edges: Vec<f64>,
}

impl EdgesBuilder {
    /// Create a builder from explicit edges
    ///
    /// Requires at least two finite, strictly increasing edges.
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InvalidParameter(
                "bin edges require at least 2 values".to_string(),
            ));
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::non_finite("bin edges"));
        }
        if edges.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvalidParameter(
                "bin edges must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { edges })
    }

    /// The edge sequence this builder uses
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }
}

impl HistogramBuilder for EdgesBuilder {
    fn build_weighted(&self, sample: &[f64], weights: Option<&WeightVector>) -> Result<Histogram> {
        if let Some(w) = weights {
            w.check_len(sample.len(), "sample weights")?;
        }

        let mut bins = Vec::with_capacity(self.edges.len() - 1);
        for pair in self.edges.windows(2) {
            bins.push(HistogramBin::new(pair[0], pair[1]));
        }

        let lo = self.edges[0];
        let hi = self.edges[self.edges.len() - 1];
        fill_bins(&mut bins, sample, weights, lo, hi);
        Ok(Histogram::new(bins, sample.len()))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.edges.len() - 1)
    }
}

/// Scott's rule for optimal bin width
///
/// Uses the formula: h = 3.5 * σ * n^(-1/3)
/// where σ is the standard deviation and n is the sample size.
#[derive(Debug, Clone, Default)]
pub struct ScottsRule {
    range: Option<DisplayRange>,
}

impl ScottsRule {
    /// Create a new Scott's rule builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the histogram to a display range
    pub fn with_range(mut self, range: DisplayRange) -> Self {
        self.range = Some(range);
        self
    }

    fn fixed(&self, num_bins: usize) -> FixedWidthBuilder {
        match self.range {
            Some(r) => FixedWidthBuilder::new(num_bins).with_range(r),
            None => FixedWidthBuilder::new(num_bins),
        }
    }
}

impl HistogramBuilder for ScottsRule {
    fn build_weighted(&self, sample: &[f64], weights: Option<&WeightVector>) -> Result<Histogram> {
        let selected = select_values(sample, self.range);
        if selected.is_empty() {
            return self.fixed(1).build_weighted(sample, weights);
        }

        let n = selected.len() as f64;
        let mean = selected.iter().sum::<f64>() / n;
        let variance = selected.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        // Scott's rule
        let bin_width = 3.5 * std_dev * n.powf(-1.0 / 3.0);

        let num_bins = bins_for_width(bin_width, self.range, &selected);
        self.fixed(num_bins).build_weighted(sample, weights)
    }
}

/// Freedman-Diaconis rule for optimal bin width
///
/// Uses the formula: h = 2 * IQR * n^(-1/3)
/// where IQR is the interquartile range.
#[derive(Debug, Clone, Default)]
pub struct FreedmanDiaconisRule {
    range: Option<DisplayRange>,
}

impl FreedmanDiaconisRule {
    /// Create a new Freedman-Diaconis builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the histogram to a display range
    pub fn with_range(mut self, range: DisplayRange) -> Self {
        self.range = Some(range);
        self
    }

    fn fixed(&self, num_bins: usize) -> FixedWidthBuilder {
        match self.range {
            Some(r) => FixedWidthBuilder::new(num_bins).with_range(r),
            None => FixedWidthBuilder::new(num_bins),
        }
    }
}

impl HistogramBuilder for FreedmanDiaconisRule {
    fn build_weighted(&self, sample: &[f64], weights: Option<&WeightVector>) -> Result<Histogram> {
        let mut selected = select_values(sample, self.range);
        if selected.is_empty() {
            return self.fixed(1).build_weighted(sample, weights);
        }
        selected.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = selected.len();
        let q1 = selected[n / 4];
        let q3 = selected[(3 * n) / 4];
        let iqr = q3 - q1;

        // Freedman-Diaconis rule
        let bin_width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);

        let num_bins = bins_for_width(bin_width, self.range, &selected);
        self.fixed(num_bins).build_weighted(sample, weights)
    }
}

/// Finite values the histogram will actually count
fn select_values(sample: &[f64], range: Option<DisplayRange>) -> Vec<f64> {
    sample
        .iter()
        .copied()
        .filter(|v| {
            v.is_finite()
                && match range {
                    Some(r) => r.contains(*v),
                    None => true,
                }
        })
        .collect()
}

fn bins_for_width(bin_width: f64, range: Option<DisplayRange>, selected: &[f64]) -> usize {
    let (lo, hi) = match range {
        Some(r) => (r.low(), r.high()),
        None => finite_extent(selected).unwrap_or((0.0, 0.0)),
    };
    let span = hi - lo;
    if bin_width > EPSILON {
        ((span / bin_width).ceil() as usize).max(1)
    } else {
        1
    }
}

/// Min and max over the finite values of a sample
fn finite_extent(sample: &[f64]) -> Option<(f64, f64)> {
    let mut iter = sample.iter().copied().filter(|v| v.is_finite());
    let first = iter.next()?;
    let (mut min, mut max) = (first, first);
    for v in iter {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}

/// Count values into bins with a single pass over sorted data
///
/// Values outside `[lo, hi]` and non-finite values land in no bin. The last
/// bin includes its right edge.
fn fill_bins(
    bins: &mut [HistogramBin],
    sample: &[f64],
    weights: Option<&WeightVector>,
    lo: f64,
    hi: f64,
) {
    if bins.is_empty() {
        return;
    }

    let mut values: Vec<(f64, f64)> = sample
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite() && **v >= lo && **v <= hi)
        .map(|(i, &v)| (v, weights.map_or(1.0, |w| w[i])))
        .collect();
    values.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    let last = bins.len() - 1;
    let mut current_bin = 0;
    for (value, weight) in values {
        while current_bin < last && value >= bins[current_bin].right {
            current_bin += 1;
        }
        bins[current_bin].count += 1;
        bins[current_bin].height += weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_width_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let hist = FixedWidthBuilder::new(5).build(&data).unwrap();

        assert_eq!(hist.len(), 5);
        assert_eq!(hist.counts(), vec![2, 2, 2, 2, 2]);
        assert_eq!(hist.total_count(), 10);
        assert_eq!(hist.span(), Some((1.0, 10.0)));
        // Heights mirror counts when unweighted
        assert_eq!(hist.heights(), vec![2.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_fixed_width_with_range() {
        let data = vec![0.1, 0.2, 0.5, 0.9];
        let range = DisplayRange::new(0.0, 0.6).unwrap();
        let hist = FixedWidthBuilder::new(3)
            .with_range(range)
            .build(&data)
            .unwrap();

        assert_eq!(hist.len(), 3);
        assert_eq!(hist.counted(), 3); // 0.9 is outside the range
        assert_eq!(hist.total_count(), 4);
        assert_eq!(hist.counts(), vec![1, 1, 1]);
        let (lo, hi) = hist.span().unwrap();
        assert_relative_eq!(lo, 0.0);
        assert_relative_eq!(hi, 0.6);
    }

    #[test]
    fn test_fixed_width_weighted() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let weights = WeightVector::uniform(4, 0.25).unwrap();
        let hist = FixedWidthBuilder::new(2)
            .build_weighted(&data, Some(&weights))
            .unwrap();

        assert_eq!(hist.counts(), vec![2, 2]);
        assert_relative_eq!(hist.height_sum(), 1.0);
        assert_relative_eq!(hist.heights()[0], 0.5);
    }

    #[test]
    fn test_weight_length_mismatch() {
        let data = vec![1.0, 2.0, 3.0];
        let weights = WeightVector::ones(2);
        let result = FixedWidthBuilder::new(2).build_weighted(&data, Some(&weights));
        assert!(result.is_err());
    }

    #[test]
    fn test_all_values_equal() {
        let data = vec![3.0; 7];
        let hist = FixedWidthBuilder::new(5).build(&data).unwrap();

        assert_eq!(hist.len(), 1);
        assert_eq!(hist.counts(), vec![7]);
    }

    #[test]
    fn test_empty_sample() {
        let hist = FixedWidthBuilder::new(5).build(&[]).unwrap();
        assert!(hist.is_empty());
        assert_eq!(hist.total_count(), 0);
    }

    #[test]
    fn test_empty_sample_with_range() {
        // With a range the bins exist even when nothing lands in them
        let range = DisplayRange::new(0.0, 1.0).unwrap();
        let hist = FixedWidthBuilder::new(4)
            .with_range(range)
            .build(&[])
            .unwrap();
        assert_eq!(hist.len(), 4);
        assert_eq!(hist.counted(), 0);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let data = vec![1.0, f64::NAN, 2.0, f64::INFINITY, 3.0];
        let hist = FixedWidthBuilder::new(2).build(&data).unwrap();
        assert_eq!(hist.counted(), 3);
        assert_eq!(hist.span(), Some((1.0, 3.0)));
    }

    #[test]
    fn test_edges_builder_roundtrip() {
        let edges = vec![0.0, 1.0, 2.5, 4.0];
        let builder = EdgesBuilder::new(edges.clone()).unwrap();
        let data = vec![0.5, 1.5, 1.7, 3.0, 4.0, 5.0];
        let hist = builder.build(&data).unwrap();

        // Output edges are exactly the input edges
        assert_eq!(hist.edges(), edges);
        // 4.0 lands in the last bin, 5.0 in none
        assert_eq!(hist.counts(), vec![1, 2, 2]);
        assert_eq!(hist.counted(), 5);
    }

    #[test]
    fn test_edges_builder_validation() {
        assert!(EdgesBuilder::new(vec![1.0]).is_err());
        assert!(EdgesBuilder::new(vec![1.0, 1.0]).is_err());
        assert!(EdgesBuilder::new(vec![2.0, 1.0]).is_err());
        assert!(EdgesBuilder::new(vec![0.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_scotts_rule() {
        let data: Vec<f64> = (0..100).map(|i| i as f64 / 10.0).collect();
        let hist = ScottsRule::new().build(&data).unwrap();
        assert!(!hist.is_empty());
        assert_eq!(hist.counted(), 100);
    }

    #[test]
    fn test_scotts_rule_constant_data() {
        let data = vec![2.0; 50];
        let hist = ScottsRule::new().build(&data).unwrap();
        assert_eq!(hist.len(), 1);
        assert_eq!(hist.counted(), 50);
    }

    #[test]
    fn test_freedman_diaconis_rule() {
        let data: Vec<f64> = (0..100).map(|i| (i as f64).sqrt()).collect();
        let hist = FreedmanDiaconisRule::new().build(&data).unwrap();
        assert!(!hist.is_empty());
        assert_eq!(hist.counted(), 100);
    }

    #[test]
    fn test_rule_with_range_counts_only_in_range() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let range = DisplayRange::new(10.0, 20.0).unwrap();
        let hist = ScottsRule::new().with_range(range).build(&data).unwrap();
        assert_eq!(hist.counted(), 11); // 10..=20
        let (lo, hi) = hist.span().unwrap();
        assert_relative_eq!(lo, 10.0);
        assert_relative_eq!(hi, 20.0);
    }

    #[test]
    fn test_bin_spec_dispatch() {
        let data = vec![1.0, 2.0, 3.0, 4.0];

        let hist = BinSpec::Count(2).to_builder(None).unwrap().build(&data).unwrap();
        assert_eq!(hist.len(), 2);

        let hist = BinSpec::Edges(vec![0.0, 2.0, 4.0])
            .to_builder(None)
            .unwrap()
            .build(&data)
            .unwrap();
        assert_eq!(hist.edges(), vec![0.0, 2.0, 4.0]);

        assert!(BinSpec::Edges(vec![1.0]).to_builder(None).is_err());

        let hist = BinSpec::Scott.to_builder(None).unwrap().build(&data).unwrap();
        assert_eq!(hist.counted(), 4);
    }

    #[test]
    fn test_bin_spec_default() {
        assert_eq!(BinSpec::default(), BinSpec::Count(10));
    }

    #[test]
    fn test_bin_spec_serde() {
        let spec = BinSpec::Edges(vec![0.0, 1.0]);
        let json = serde_json::to_string(&spec).unwrap();
        assert_eq!(json, r#"{"edges":[0.0,1.0]}"#);
        let back: BinSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);

        let back: BinSpec = serde_json::from_str(r#"{"count":10}"#).unwrap();
        assert_eq!(back, BinSpec::Count(10));
    }
}
