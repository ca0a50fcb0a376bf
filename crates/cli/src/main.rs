#![deny(unsafe_code)]
//! CLI binary for the particle-field simulator.
//!
//! Subcommands:
//! - `render`: run the system N ticks, write a PNG snapshot
//! - `animate`: write a numbered PNG frame sequence
//! - `list`: print available palettes and circle modes

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use particle_field_core::params::param_f64;
use particle_field_core::source::RadialFade;
use particle_field_core::{
    BoundingBox, CircleMode, ColorStyle, LineStyle, Palette, Runner, Scene, System,
    SystemSettings,
};
use particle_field_drift::{Drift, DriftParams};
use particle_field_render::{snapshot, RasterSurface};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "particle-field", about = "2D particle field simulator and renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the system for N ticks and write a PNG snapshot.
    Render {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of simulation ticks before the snapshot.
        #[arg(short, long, default_value_t = 240)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette for particle and line coloring (graphite, ocean, neon,
        /// ember); omit to keep the solid default colors.
        #[arg(short, long)]
        palette: Option<String>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// System parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Scene file; its width/height/seed/ticks/params/palette override
        /// the corresponding flags.
        #[arg(long)]
        scene: Option<PathBuf>,
    },
    /// Run the system and write a numbered PNG frame sequence.
    Animate {
        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of frames to write.
        #[arg(short, long, default_value_t = 120)]
        frames: usize,

        /// Ticks simulated between written frames.
        #[arg(short, long, default_value_t = 1)]
        every: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette for particle and line coloring.
        #[arg(short, long)]
        palette: Option<String>,

        /// Directory receiving frame-NNNN.png files.
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,

        /// System parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Print the rolling phase-timing report to stderr per frame.
        #[arg(long)]
        stats: bool,
    },
    /// List available palettes and circle modes.
    List,
}

/// Builds the drift system for a surface, applying palette styling when
/// requested.
///
/// With a palette, particle colors fade with distance from a focal point
/// (params `focal_x`/`focal_y`, default the surface center, over
/// `fade_range`) and line colors fade with pair distance.
fn build_system(
    width: usize,
    height: usize,
    seed: u64,
    params: &Value,
    palette: Option<&str>,
) -> Result<Drift, CliError> {
    let bounds = BoundingBox::from_rect(0.0, 0.0, width as f64, height as f64)?;
    let mut settings = SystemSettings::from_json(bounds, params)?;

    if let Some(name) = palette {
        let palette = Palette::from_name(name).map_err(|e| CliError::Input(e.to_string()))?;
        let (center_x, center_y) = bounds.center();
        let focal_x = param_f64(params, "focal_x", center_x);
        let focal_y = param_f64(params, "focal_y", center_y);
        let fade_range = param_f64(params, "fade_range", width.min(height) as f64 / 2.0);
        settings.particle_color = ColorStyle::Shaded {
            source: Box::new(RadialFade::new(focal_x, focal_y, fade_range)),
            palette: palette.clone(),
        };
        settings.line_color = LineStyle::DistanceFade(palette);
    }

    Ok(Drift::new(settings, DriftParams::from_json(params), seed)?)
}

fn parse_params(params: &str) -> Result<Value, CliError> {
    serde_json::from_str(params).map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))
}

fn load_scene(path: &Path) -> Result<Scene, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::Io(e.to_string()))?;
    let scene: Scene =
        serde_json::from_str(&text).map_err(|e| CliError::Input(format!("invalid scene file: {e}")))?;
    scene.validate()?;
    Ok(scene)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let palettes = Palette::list_names();
            let circle_modes = CircleMode::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "palettes": palettes,
                    "circle_modes": circle_modes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
                println!("Circle modes:");
                println!("  {}", circle_modes.join(", "));
            }
        }
        Command::Render {
            mut width,
            mut height,
            mut ticks,
            mut seed,
            mut palette,
            output,
            params,
            scene,
        } => {
            let mut params = parse_params(&params)?;
            if let Some(path) = &scene {
                let scene = load_scene(path)?;
                width = scene.width;
                height = scene.height;
                seed = scene.seed;
                ticks = scene.ticks;
                params = scene.params;
                palette = scene.palette.or(palette);
            }

            log::info!("rendering {width}x{height}, {ticks} ticks, seed {seed}");
            let mut drift = build_system(width, height, seed, &params, palette.as_deref())?;
            let mut surface = RasterSurface::new(width, height)?;
            let completed = Runner::new().run(&mut drift, &mut surface, ticks)?;
            snapshot::write_png(&surface, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "ticks": completed,
                    "seed": seed,
                    "palette": palette,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height}, {completed} ticks, seed {seed} -> {}",
                    output.display()
                );
            }
        }
        Command::Animate {
            width,
            height,
            frames,
            every,
            seed,
            palette,
            out_dir,
            params,
            stats,
        } => {
            let params = parse_params(&params)?;
            if every == 0 {
                return Err(CliError::Input("--every must be at least 1".into()));
            }
            fs::create_dir_all(&out_dir).map_err(|e| CliError::Io(e.to_string()))?;

            log::info!("animating {frames} frames of {every} ticks, seed {seed}");
            let mut drift = build_system(width, height, seed, &params, palette.as_deref())?;
            let mut surface = RasterSurface::new(width, height)?;
            let mut runner = Runner::new();

            for frame in 0..frames {
                runner.run(&mut drift, &mut surface, every)?;
                let path = out_dir.join(format!("frame-{frame:04}.png"));
                snapshot::write_png(&surface, &path)?;
                if stats {
                    eprintln!("frame {frame}: {}", drift.report());
                }
            }

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "ticks_per_frame": every,
                    "seed": seed,
                    "palette": palette,
                    "out_dir": out_dir.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote {frames} frames ({every} ticks each, seed {seed}) -> {}",
                    out_dir.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
