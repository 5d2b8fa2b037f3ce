//! Plot 1D histograms, optionally normalized to counts within a display range
//!
//! The entry points are [`hist`] and [`hist_on`], which combine histogram
//! construction from `rangehist-histogram` with an SVG renderer:
//!
//! * `range_normalize` off: plain counts at each bin.
//! * `range_normalize` on: counts divided by the number of elements
//!   **within** the display range. This is effectively the fraction of
//!   in-range elements at each bin, so the plotted fractions sum to 1 over
//!   the range. This is different from density normalization, where the
//!   integral of the histogram is 1, and from dividing by the total sample
//!   size, which would include elements outside the range.
//!
//! # Basic Usage
//!
//! ```rust
//! use rangehist_histogram::{BinSpec, DisplayRange};
//! use rangehist_plot::{hist, HistConfig};
//!
//! let x = vec![0.42, 0.48, 0.51, 0.55, 0.61, 0.97];
//!
//! // Histogram normalized to sum 1 within a custom range
//! let config = HistConfig::new()
//!     .with_bins(BinSpec::Count(4))
//!     .with_range(DisplayRange::new(0.4, 0.6).unwrap())
//!     .normalized(true);
//! let plot = hist(&x, &config).unwrap();
//!
//! let total: f64 = plot.heights.iter().sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```
//!
//! Plots land on the process-wide current [`Surface`] unless an explicit
//! surface is passed to [`hist_on`]; [`Surface::save`] writes the most
//! recent document to a file.

pub mod hist;
pub mod options;
pub mod render;
pub mod surface;

pub use hist::{hist, hist_on};
pub use options::{HistConfig, HistStyle, PlotOptions};
pub use render::{render_histogram, HistPlot, Patch, PatchKind};
pub use surface::{with_current_surface, Surface};

pub use rangehist_core::{Error, Result};
