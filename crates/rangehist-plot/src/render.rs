//! SVG rendering for histograms

use crate::options::{HistStyle, PlotOptions};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use rangehist_core::{Error, Result};
use rangehist_histogram::Histogram;

/// Geometry of one rendered element, in data coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// What the vertices describe
    pub kind: PatchKind,
    /// Rectangle corners for bars, polyline vertices for outlines
    pub vertices: Vec<(f64, f64)>,
}

/// The kind of a rendered patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchKind {
    /// A step outline following the bin tops
    Outline,
    /// A single filled bin rectangle
    Rect,
}

/// The (heights, edges, patches) triple returned by a histogram plot
#[derive(Debug, Clone, PartialEq)]
pub struct HistPlot {
    /// Weighted bin heights (equal to counts when unweighted)
    pub heights: Vec<f64>,
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Rendered patch geometry
    pub patches: Vec<Patch>,
}

type Chart2d<'a, 'b> = ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Render a histogram to an SVG document
///
/// Returns the document together with the result triple. An empty
/// histogram produces a blank chart and an empty triple.
pub fn render_histogram(
    hist: &Histogram,
    style: HistStyle,
    options: &PlotOptions,
) -> Result<(String, HistPlot)> {
    let color = parse_color(&options.color)?;

    let mut svg = String::new();
    let plot = {
        let root = SVGBackend::with_string(&mut svg, (options.width, options.height))
            .into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let plot = match hist.span() {
            None => HistPlot {
                heights: vec![],
                edges: vec![],
                patches: vec![],
            },
            Some((lo, hi)) => {
                // Pad a degenerate span so the axis stays well-formed
                let (x_min, x_max) = if hi - lo > 0.0 {
                    (lo, hi)
                } else {
                    (lo - 0.5, hi + 0.5)
                };
                let max_height = hist.max_height();
                let y_max = if max_height > 0.0 {
                    max_height * 1.05
                } else {
                    1.0
                };

                let mut builder = ChartBuilder::on(&root);
                builder.margin(20).x_label_area_size(45).y_label_area_size(45);
                if let Some(title) = &options.title {
                    builder.caption(title, ("sans-serif", 22));
                }
                let mut chart = builder
                    .build_cartesian_2d(x_min..x_max, 0.0..y_max)
                    .map_err(plot_err)?;

                let mut mesh = chart.configure_mesh();
                if let Some(label) = &options.x_label {
                    mesh.x_desc(label.as_str());
                }
                if let Some(label) = &options.y_label {
                    mesh.y_desc(label.as_str());
                }
                mesh.draw().map_err(plot_err)?;

                let patches = match style {
                    HistStyle::Bar => draw_bars(&mut chart, hist, color, options)?,
                    HistStyle::Step => draw_step(&mut chart, hist, color, options, false)?,
                    HistStyle::StepFilled => draw_step(&mut chart, hist, color, options, true)?,
                };

                HistPlot {
                    heights: hist.heights(),
                    edges: hist.edges(),
                    patches,
                }
            }
        };

        root.present().map_err(plot_err)?;
        plot
    };

    Ok((svg, plot))
}

fn draw_bars(
    chart: &mut Chart2d<'_, '_>,
    hist: &Histogram,
    color: RGBColor,
    options: &PlotOptions,
) -> Result<Vec<Patch>> {
    let alpha = options.fill_alpha.clamp(0.0, 1.0);
    chart
        .draw_series(hist.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.left, 0.0), (bin.right, bin.height)],
                color.mix(alpha).filled(),
            )
        }))
        .map_err(plot_err)?;

    Ok(hist
        .bins()
        .iter()
        .map(|bin| Patch {
            kind: PatchKind::Rect,
            vertices: vec![(bin.left, 0.0), (bin.right, bin.height)],
        })
        .collect())
}

fn draw_step(
    chart: &mut Chart2d<'_, '_>,
    hist: &Histogram,
    color: RGBColor,
    options: &PlotOptions,
    filled: bool,
) -> Result<Vec<Patch>> {
    let points = step_points(hist);

    if filled {
        let alpha = options.fill_alpha.clamp(0.0, 1.0);
        chart
            .draw_series(std::iter::once(Polygon::new(
                points.clone(),
                color.mix(alpha).filled(),
            )))
            .map_err(plot_err)?;
    }
    chart
        .draw_series(LineSeries::new(
            points.clone(),
            color.stroke_width(options.line_width),
        ))
        .map_err(plot_err)?;

    Ok(vec![Patch {
        kind: PatchKind::Outline,
        vertices: points,
    }])
}

/// Vertices of the step outline, down to the baseline at both ends
fn step_points(hist: &Histogram) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(hist.len() * 2 + 2);
    if let Some(first) = hist.bins().first() {
        points.push((first.left, 0.0));
    }
    for bin in hist.bins() {
        points.push((bin.left, bin.height));
        points.push((bin.right, bin.height));
    }
    if let Some(last) = hist.bins().last() {
        points.push((last.right, 0.0));
    }
    points
}

fn parse_color(hex: &str) -> Result<RGBColor> {
    let digits = hex.trim_start_matches('#');
    let malformed = || Error::InvalidParameter(format!("malformed color '{hex}', expected #rrggbb"));
    if digits.len() != 6 {
        return Err(malformed());
    }
    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| malformed())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| malformed())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| malformed())?;
    Ok(RGBColor(r, g, b))
}

fn plot_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}
