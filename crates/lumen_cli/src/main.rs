//! lumen: render a demo scene to a PPM or PNG file.

mod scenes;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lumen_renderer::{render, Camera, Image, RenderConfig};

use scenes::SceneKind;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(version)]
#[command(about = "Recursive CPU ray tracer")]
#[command(long_about = "
Renders one of the built-in scenes with jittered anti-aliasing, single-bounce
reflection and refraction, and soft point-light shadows.

Example usage:
  lumen out.ppm --scene spheres --samples 16
  lumen cube.png --scene mesh --mesh cube.obj --workers 4
")]
struct Cli {
    /// Output image; written as PNG when the extension is .png, PPM otherwise
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 340)]
    height: u32,

    /// Samples per pixel (a perfect square)
    #[arg(long, default_value_t = 4)]
    samples: u32,

    /// Worker threads [default: all cores]
    #[arg(long)]
    workers: Option<usize>,

    /// World-space size of one pixel
    #[arg(long, default_value_t = 0.01)]
    pixel_size: f64,

    /// Secondary rays per camera ray
    #[arg(long, default_value_t = 1)]
    max_bounces: u32,

    /// Distance from the eye to the image plane
    #[arg(long, default_value_t = 1.0)]
    focal_distance: f64,

    /// Seed for fuzzy reflections
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Scene to render
    #[arg(long, value_enum, default_value_t = SceneKind::Spheres)]
    scene: SceneKind,

    /// OBJ file for the mesh scene [default: built-in cube]
    #[arg(long, value_name = "PATH")]
    mesh: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum, value_name = "LEVEL", default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            pixel_size: self.pixel_size,
            samples_per_pixel: self.samples,
            workers: self.workers,
            max_bounces: self.max_bounces,
            seed: self.seed,
            ..RenderConfig::default()
        }
    }

    fn camera(&self) -> Camera {
        Camera::new().with_focal_distance(self.focal_distance)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level.into())
        .init();

    let start = Instant::now();
    let scene = scenes::build(cli.scene, cli.mesh.as_deref())?;
    log::info!("Built {:?} scene in {:.2?}", cli.scene, start.elapsed());

    let config = cli.render_config();
    let frame = render(&scene, &cli.camera(), &config).context("render failed")?;

    save(frame, &cli.output)?;
    log::info!("Saved {}", cli.output.display());

    Ok(())
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

fn save(frame: Image, path: &Path) -> Result<()> {
    if is_png(path) {
        let (width, height) = (frame.width(), frame.height());
        let buffer = image::RgbImage::from_raw(width, height, frame.into_raw())
            .context("image buffer does not match its dimensions")?;
        buffer
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    } else {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        frame
            .write_ppm(BufWriter::new(file))
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    Ok(())
}
