#![deny(unsafe_code)]
//! CLI binary for the fixnoise deterministic noise generator.
//!
//! Subcommands:
//! - `sample <x> <y> <z>` — evaluate the sampler at one point
//! - `render` — run the fractal engine N steps and preview the frame
//! - `replay <seed.json>` — re-render a saved seed file
//! - `list` — print available engines
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use fixnoise_core::fixed::to_u8;
use fixnoise_core::{Engine, FixedScalar, FractalSampler, NoiseParams, Seed, SCALE};
use fixnoise_engines::pixel::frame_to_shades;
use fixnoise_engines::{replay, EngineKind};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixnoise", about = "Deterministic fixed-point gradient noise")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate the sampler at a single fixed-point coordinate.
    #[command(allow_negative_numbers = true)]
    Sample {
        x: i32,
        y: i32,
        z: i32,

        /// Noise seed.
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Spatial frequency multiplier.
        #[arg(long, default_value_t = 8)]
        scale: i32,

        /// Number of fractal layers.
        #[arg(long, default_value_t = 1)]
        octaves: u32,

        /// Lower edge of the output window.
        #[arg(long, default_value_t = 0)]
        min: i32,

        /// Upper edge of the output window.
        #[arg(long, default_value_t = SCALE)]
        max: i32,
    },
    /// Run the fractal engine for N steps and preview the last frame.
    Render {
        /// Frame width in pixels.
        #[arg(short = 'W', long, default_value_t = 64)]
        width: usize,

        /// Frame height in pixels.
        #[arg(short = 'H', long, default_value_t = 32)]
        height: usize,

        /// Number of frames to advance.
        #[arg(short, long, default_value_t = 0)]
        steps: usize,

        /// Noise seed.
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Engine parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Keep every Nth row and column in the preview.
        #[arg(long, default_value_t = 1)]
        stride: usize,

        /// Write the run to a seed file for later replay.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Re-render a seed file written by `render --save`.
    Replay {
        /// Path to the seed file.
        path: PathBuf,

        /// Keep every Nth row and column in the preview.
        #[arg(long, default_value_t = 1)]
        stride: usize,
    },
    /// List available engines.
    List,
}

fn report(engine: &EngineKind, seed: &Seed, json: bool, stride: usize) -> Result<(), CliError> {
    let frame = engine.frame();
    let (lo, hi) = frame.min_max();
    let info = engine.compute_info();
    if json {
        let out = serde_json::json!({
            "engine": seed.engine,
            "width": seed.width,
            "height": seed.height,
            "steps": seed.steps,
            "seed": seed.seed,
            "params": engine.params(),
            "frame": {"min": lo, "max": hi, "mean": frame.mean()},
            "compute_info": info,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", frame_to_shades(frame, stride));
        eprintln!(
            "{} {}x{} seed {} step {}: frame [{lo}, {hi}] mean {}, all-time [{}, {}]",
            seed.engine,
            seed.width,
            seed.height,
            seed.seed,
            seed.steps,
            frame.mean(),
            info.min,
            info.max
        );
    }
    Ok(())
}

/// Validates `params` and the point, then evaluates a fresh sampler once.
fn sample_point(
    seed: u32,
    params: NoiseParams,
    (x, y, z): (FixedScalar, FixedScalar, FixedScalar),
) -> Result<FixedScalar, CliError> {
    params.validate()?;
    if !params.fits(x, y, z) {
        return Err(CliError::OutOfRange {
            x,
            y,
            z,
            scale: params.scale,
            octaves: params.octaves,
        });
    }
    Ok(FractalSampler::with_params(seed, params).sample(x, y, z))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let engines = EngineKind::list_engines();
            if cli.json {
                let info = serde_json::json!({ "engines": engines });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Engines:");
                for name in engines {
                    println!("  {name}");
                }
            }
        }
        Command::Sample {
            x,
            y,
            z,
            seed,
            scale,
            octaves,
            min,
            max,
        } => {
            let params = NoiseParams::new(scale, octaves, min, max);
            let value = sample_point(seed, params, (x, y, z))?;
            if cli.json {
                let out = serde_json::json!({
                    "seed": seed,
                    "params": params,
                    "point": [x, y, z],
                    "value": value,
                    "u8": to_u8(value),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{value}");
            }
        }
        Command::Render {
            width,
            height,
            steps,
            seed,
            params,
            stride,
            save,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Params(e.to_string()))?;

            let mut record = Seed::new("fractal", width, height, seed);
            record.params = params;
            record.steps = steps;

            let engine = replay::run(&record)?;
            if let Some(path) = save {
                replay::save_seed(&record, &path)?;
                info!(path = %path.display(), "saved seed file");
            }
            report(&engine, &record, cli.json, stride)?;
        }
        Command::Replay { path, stride } => {
            let record = replay::load_seed(&path)?;
            let engine = replay::run(&record)?;
            report(&engine, &record, cli.json, stride)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
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
