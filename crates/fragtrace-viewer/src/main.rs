use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use winit::dpi::LogicalSize;

use fragtrace_engine::device::GlInit;
use fragtrace_engine::logging::{LoggingConfig, init_logging};
use fragtrace_engine::window::{Runtime, RuntimeConfig};

mod app;
mod assets;
mod camera;
mod uniforms;

use app::RaytracerApp;

/// Fullscreen fragment-shader raytracer host.
///
/// Opens a window, compiles the shader pair, and draws one fullscreen
/// triangle per frame so the fragment shader computes the image per-pixel.
#[derive(Debug, Parser)]
#[command(name = "fragtrace", version)]
struct Cli {
    /// Vertex shader path.
    #[arg(long, default_value = "shaders/fullscreen.vert")]
    vert: PathBuf,

    /// Fragment shader path.
    #[arg(long, default_value = "shaders/raytrace.frag")]
    frag: PathBuf,

    /// Window title.
    #[arg(long, default_value = "Fragment Raytracer")]
    title: String,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() {
    init_logging(LoggingConfig::default());

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        std::process::exit(-1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Both sources are read before any window exists, so a missing file
    // fails fast instead of tearing down a half-built platform stack.
    let vertex = assets::load_stage_source(&cli.vert)?;
    let fragment = assets::load_stage_source(&cli.frag)?;

    let config = RuntimeConfig {
        title: cli.title,
        initial_size: LogicalSize::new(f64::from(cli.width), f64::from(cli.height)),
    };

    Runtime::run(config, GlInit::default(), RaytracerApp::new(vertex, fragment))
}
