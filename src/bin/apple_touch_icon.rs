//! Writes `public/apple-touch-icon.png` (or `.svg` without the `raster` feature).
//!
//! Run from the project root; takes no arguments.

use touch_icon::{IconConfig, IconOutcome, ResvgRasterizer};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = IconConfig::default();
    match touch_icon::write_icon(&config, &ResvgRasterizer)? {
        IconOutcome::Png(path) => println!("Wrote {}", path.display()),
        IconOutcome::SvgFallback { path, reason } => {
            println!(
                "Wrote {} ({reason}; rebuild with `--features raster`, then re-run to get PNG)",
                path.display()
            );
            println!(
                "Or convert manually: resvg -w {w} -h {h} {} {}",
                path.display(),
                config.output_path.display(),
                w = config.canvas.width,
                h = config.canvas.height,
            );
        }
    }
    Ok(())
}
