//! Plot configuration
//!
//! [`PlotOptions`] is the explicit, typed stand-in for ad hoc styling
//! keywords: every field is forwarded verbatim to the renderer.

use rangehist_histogram::{BinSpec, DisplayRange};
use serde::{Deserialize, Serialize};

/// How the histogram body is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistStyle {
    /// Unfilled outline following the bin tops
    #[default]
    Step,
    /// One filled rectangle per bin
    Bar,
    /// Filled outline
    StepFilled,
}

/// Styling options forwarded to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    /// Chart caption
    pub title: Option<String>,
    /// Horizontal axis label
    pub x_label: Option<String>,
    /// Vertical axis label
    pub y_label: Option<String>,
    /// Series color as an RGB hex string, e.g. "#3366cc"
    pub color: String,
    /// Stroke width for outlines, in pixels
    pub line_width: u32,
    /// Opacity of filled areas, in [0, 1]
    pub fill_alpha: f64,
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            color: "#3366cc".to_string(),
            line_width: 2,
            fill_alpha: 0.6,
            width: 640,
            height: 480,
        }
    }
}

/// Arguments for a histogram plot call
///
/// The defaults match the plain call: 10 equal-width bins, no display
/// range, step style, normalization off.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HistConfig {
    /// Bin specification, passed through to the histogram builder
    pub bins: BinSpec,
    /// Display range bounding the region of interest
    pub range: Option<DisplayRange>,
    /// Histogram display style
    pub style: HistStyle,
    /// Normalize bin heights by the count of samples within the range
    pub range_normalize: bool,
    /// Styling options forwarded to the renderer
    pub options: PlotOptions,
}

impl HistConfig {
    /// Create a config with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bin specification
    pub fn with_bins(mut self, bins: BinSpec) -> Self {
        self.bins = bins;
        self
    }

    /// Set the display range
    pub fn with_range(mut self, range: DisplayRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the display style
    pub fn with_style(mut self, style: HistStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable or disable range normalization
    pub fn normalized(mut self, range_normalize: bool) -> Self {
        self.range_normalize = range_normalize;
        self
    }

    /// Set the styling options
    pub fn with_options(mut self, options: PlotOptions) -> Self {
        self.options = options;
        self
    }
}
