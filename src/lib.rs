//! Histograms normalized to the counts within a display range
//!
//! This facade crate re-exports the rangehist workspace:
//!
//! - [`rangehist_core`]: error type and sample weights
//! - [`rangehist_histogram`]: histogram construction and range
//!   normalization
//! - [`rangehist_plot`]: SVG plotting and the [`hist`] / [`hist_on`] entry
//!   points
//!
//! # Example
//!
//! ```rust
//! use rangehist::{hist_on, BinSpec, DisplayRange, HistConfig, Surface};
//!
//! let x = vec![0.1, 0.2, 0.5, 0.9];
//! let config = HistConfig::new()
//!     .with_bins(BinSpec::Count(3))
//!     .with_range(DisplayRange::new(0.0, 0.6).unwrap())
//!     .normalized(true);
//!
//! let mut surface = Surface::new();
//! let plot = hist_on(&mut surface, &x, &config).unwrap();
//!
//! // Three of the four points fall inside [0, 0.6], so each bin holds 1/3
//! let total: f64 = plot.heights.iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```

pub use rangehist_core::{Error, Result, WeightVector};

pub use rangehist_histogram::{
    edges_histogram, fixed_histogram, range_normalization, scott_histogram, BinSpec, DisplayRange,
    EdgesBuilder, FixedWidthBuilder, FreedmanDiaconisRule, Histogram, HistogramBin,
    HistogramBuilder, RangeNormalization, ScottsRule,
};

pub use rangehist_plot::{
    hist, hist_on, render_histogram, with_current_surface, HistConfig, HistPlot, HistStyle,
    Patch, PatchKind, PlotOptions, Surface,
};
