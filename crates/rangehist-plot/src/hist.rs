//! Histogram plot calls, optionally normalized to counts within a range
//!
//! With normalization off this is a plain histogram plot. With it on, the
//! counts are divided by the number of elements **within** the display
//! range before plotting, so the plotted fractions sum to 1 over the range.
//! This is different from density normalization, where the integral of the
//! histogram is 1, and from dividing by the total sample size, which would
//! include elements outside the range.

use crate::options::HistConfig;
use crate::render::{render_histogram, HistPlot};
use crate::surface::{with_current_surface, Surface};
use rangehist_core::Result;
use rangehist_histogram::{range_normalization, HistogramBuilder};
use tracing::debug;

/// Plot a 1D histogram onto the process-wide current surface
///
/// Equivalent to [`hist_on`] with the current surface; see there for the
/// full contract.
pub fn hist(sample: &[f64], config: &HistConfig) -> Result<HistPlot> {
    with_current_surface(|surface| hist_on(surface, sample, config))
}

/// Plot a 1D histogram onto an explicit surface
///
/// Builds the histogram for `config.bins` and `config.range`, renders it in
/// `config.style` with `config.options`, appends the SVG document to the
/// surface, and returns the (heights, edges, patches) triple exactly as the
/// renderer produced it.
///
/// When `config.range_normalize` is set, every sample point is weighted by
/// `1 / in_range_count` first (see
/// [`range_normalization`](rangehist_histogram::range_normalization)), so
/// the in-range bin heights sum to 1. Sample points outside the range are
/// reported through a warning and fail the call only when *nothing* is left
/// inside the range.
pub fn hist_on(surface: &mut Surface, sample: &[f64], config: &HistConfig) -> Result<HistPlot> {
    let builder = config.bins.to_builder(config.range)?;

    let histogram = if config.range_normalize {
        let norm = range_normalization(sample, &config.bins, config.range)?;
        debug!(
            in_range = norm.in_range,
            out_of_range = norm.out_of_range,
            "normalizing counts to the display range"
        );
        builder.build_weighted(sample, Some(&norm.weights))?
    } else {
        builder.build(sample)?
    };

    let (svg, plot) = render_histogram(&histogram, config.style, &config.options)?;
    surface.push_document(svg);
    Ok(plot)
}
