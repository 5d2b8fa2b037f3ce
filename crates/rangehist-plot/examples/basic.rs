//! Plot a noisy sample twice: normalized over the full extent, then over a
//! narrow display range. Writes two SVG files into the current directory.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rangehist_histogram::{BinSpec, DisplayRange};
use rangehist_plot::{hist_on, HistConfig, HistStyle, PlotOptions, Surface};

fn main() -> rangehist_core::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let normal = Normal::new(0.5, 0.1).expect("valid distribution");
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    let x: Vec<f64> = (0..1000).map(|_| normal.sample(&mut rng)).collect();

    let mut surface = Surface::new();

    // Histogram normalized to sum 1
    let config = HistConfig::new()
        .with_bins(BinSpec::Count(40))
        .with_range(DisplayRange::new(0.0, 1.0)?)
        .normalized(true)
        .with_options(PlotOptions {
            title: Some("fraction per bin over [0, 1]".to_string()),
            x_label: Some("value".to_string()),
            y_label: Some("fraction".to_string()),
            ..Default::default()
        });
    let plot = hist_on(&mut surface, &x, &config)?;
    println!(
        "full range: {} bins, height sum = {:.6}",
        plot.heights.len(),
        plot.heights.iter().sum::<f64>()
    );
    surface.save("rangehist_full.svg")?;

    // Histogram normalized to sum 1 within a custom range; points outside
    // [0.4, 0.6] trigger the out-of-range warning
    let config = HistConfig::new()
        .with_bins(BinSpec::Count(40))
        .with_range(DisplayRange::new(0.4, 0.6)?)
        .with_style(HistStyle::Bar)
        .normalized(true);
    let plot = hist_on(&mut surface, &x, &config)?;
    println!(
        "narrow range: {} bins, height sum = {:.6}",
        plot.heights.len(),
        plot.heights.iter().sum::<f64>()
    );
    surface.save("rangehist_narrow.svg")?;

    Ok(())
}
