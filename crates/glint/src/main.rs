//! Command-line front end: builds the demo scene, renders it, and
//! writes a binary PPM image.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use structopt::StructOpt;

use glint_render::{render, render_parallel, write_ppm, Camera, RenderConfig};

mod scene;

#[derive(Debug, StructOpt)]
#[structopt(name = "glint", about = "Monte Carlo path tracer for sphere scenes")]
struct Opt {
    /// Output image width in pixels
    #[structopt(long, default_value = "800")]
    width: u32,

    /// Output image height in pixels
    #[structopt(long, default_value = "600")]
    height: u32,

    /// Camera rays averaged per pixel
    #[structopt(long = "spp", default_value = "100")]
    samples_per_pixel: u32,

    /// Bounce budget per path
    #[structopt(long, default_value = "50")]
    max_depth: u32,

    /// Seed for scene generation and pixel sampling
    #[structopt(long, default_value = "0")]
    seed: u64,

    /// Render on the calling thread instead of the thread pool
    #[structopt(long)]
    serial: bool,

    /// Output PPM file
    #[structopt(short, long, parse(from_os_str), default_value = "render.ppm")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let opt = Opt::from_args();

    let camera = Camera::new(opt.width, opt.height)?;
    let config = RenderConfig {
        samples_per_pixel: opt.samples_per_pixel,
        max_depth: opt.max_depth,
        seed: opt.seed,
        ..RenderConfig::default()
    };

    let world = scene::build_scene(opt.seed)?;
    log::info!(
        "scene ready: {} spheres, {}x{} at {} spp",
        world.len(),
        opt.width,
        opt.height,
        opt.samples_per_pixel
    );

    let start = Instant::now();
    let image = if opt.serial {
        render(&camera, &world, &config)?
    } else {
        render_parallel(&camera, &world, &config)?
    };
    log::info!("rendered in {:.2?}", start.elapsed());

    let file = File::create(&opt.output)
        .with_context(|| format!("creating {}", opt.output.display()))?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, &image).context("writing PPM image")?;
    log::info!("wrote {}", opt.output.display());

    Ok(())
}
