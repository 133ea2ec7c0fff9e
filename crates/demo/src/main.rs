// File: crates/demo/src/main.rs
// Summary: Renders the fixed sample series as a white-on-black line chart to graph.jpg.

use anyhow::{Context, Result};
use chart_core::{Chart, RenderOptions};
use log::info;

const OUTPUT: &str = "graph.jpg";

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .format_module_path(false)
        .init();

    let chart = Chart::new("My Title").with_points([(0, 0), (40, 400), (250, 200)]);
    let opts = RenderOptions::default();
    info!(
        "rendering {} points on a {}x{} canvas (margin {}, step {})",
        chart.points.len(),
        opts.width,
        opts.height,
        opts.margin,
        opts.scaling_factor
    );

    chart
        .render_to_jpeg(&opts, OUTPUT)
        .with_context(|| format!("failed to render chart to '{OUTPUT}'"))?;
    println!("Wrote {OUTPUT}");
    Ok(())
}
