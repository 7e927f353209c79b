use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wavefill::config::GeneratorParams;
use wavefill::render::{self, Image};
use wavefill::{Click, Color, territory};

/// Generate a territory grid and animate a flood fill across it.
#[derive(Parser, Debug)]
#[command(name = "wavefill", version)]
struct Args {
    #[arg(long, default_value_t = 24)]
    rows: usize,
    #[arg(long, default_value_t = 32)]
    cols: usize,
    /// 0 = per-cell noise, 100 = few large organic regions.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(0..=100))]
    organicness: u32,
    /// RNG seed; drawn from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file overriding generator params.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long, requires = "fill_col", allow_negative_numbers = true)]
    fill_row: Option<isize>,
    #[arg(long, requires = "fill_row", allow_negative_numbers = true)]
    fill_col: Option<isize>,
    /// Fill color as #RRGGBB.
    #[arg(long, default_value = "#FFFFFF")]
    color: Color,

    /// Pixels per cell in PNG output.
    #[arg(long, default_value_t = 12)]
    cell_size: usize,
    /// Write grid.png, per-snapshot frames, and a contact sheet here.
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Print the session as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn load_params(path: Option<&Path>) -> Result<GeneratorParams> {
    let Some(path) = path else {
        return Ok(GeneratorParams::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read params file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid params in {}", path.display()))
}

fn save_png(dir: &Path, name: &str, img: &Image) -> Result<()> {
    let path = dir.join(name);
    if img.w == 0 || img.h == 0 {
        warn!("skipping empty image {}", path.display());
        return Ok(());
    }
    image::save_buffer(
        &path,
        &img.rgba,
        img.w as u32,
        img.h as u32,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("failed to save {}", path.display()))?;
    info!("saved {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let params = load_params(args.params.as_deref())?;
    let click = args.fill_row.zip(args.fill_col).map(|(row, col)| Click {
        row,
        col,
        color: args.color,
    });

    info!(
        rows = args.rows,
        cols = args.cols,
        organicness = args.organicness,
        seed = ?args.seed,
        "generating grid"
    );

    let mut rng = wavefill::rng::seeded(args.seed);
    let (session, timings) =
        wavefill::run(args.rows, args.cols, args.organicness, &params, click, &mut rng)
            .context("invalid generator params")?;

    for t in &timings {
        info!("{:20} {:8.1} ms", t.name, t.ms);
    }
    info!(regions = territory::region_count(&session.grid), "grid ready");
    if let Some(r) = &session.repaint {
        info!(
            levels = r.snapshots.len() - 1,
            direction = r.direction.as_str(),
            "fill at ({}, {}) -> {}",
            r.row,
            r.col,
            r.color
        );
    }

    if let Some(dir) = &args.out_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        save_png(dir, "grid.png", &render::render_grid(&session.grid, args.cell_size))?;
        if let Some(r) = &session.repaint {
            for (i, snap) in r.snapshots.iter().enumerate() {
                let img = render::render_grid(snap, args.cell_size);
                save_png(dir, &format!("frame_{i:04}.png"), &img)?;
            }
            let strip = render::render_strip(&r.snapshots, args.cell_size, args.cell_size / 2);
            save_png(dir, "frames.png", &strip)?;
        }
    }

    if args.json {
        let out = serde_json::to_string(&session).context("failed to encode session")?;
        println!("{out}");
    }

    Ok(())
}
