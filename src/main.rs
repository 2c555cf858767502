use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use dance_notation::assembler::frames::FrameSize;
use dance_notation::assembler::{self, AssemblyConfig};
use dance_notation::{parser, viewer};

#[derive(Parser)]
#[command(
    name = "dance",
    version,
    about = "Dance notation interpreter: renders a move script as one looping GIF"
)]
struct Cli {
    /// Dance script file path (exactly one)
    scripts: Vec<PathBuf>,
    /// Directory containing the "<style> gifs" folders
    #[arg(long, env = "DANCE_RESOURCE_ROOT", default_value = ".")]
    resource_root: PathBuf,
    /// Directory the combined GIF is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
    /// Side length in pixels of every output frame
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,
    /// Application to open the result with (platform default if omitted)
    #[arg(long)]
    viewer: Option<String>,
    /// Do not open the result after writing it
    #[arg(long)]
    no_open: bool,
    /// Parse and validate the script without rendering
    #[arg(long)]
    check: bool,
    /// With --check, print the parsed dance as JSON
    #[arg(long, requires = "check")]
    json: bool,
    /// Log every resolved move
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum InvocationArityError {
    #[error("No filename provided to interpreter")]
    MissingScript,
    #[error("Too many arguments inputted into interpreter: expected one script, got {0}")]
    TooManyScripts(usize),
}

fn single_script(mut scripts: Vec<PathBuf>) -> Result<PathBuf, InvocationArityError> {
    match scripts.len() {
        0 => Err(InvocationArityError::MissingScript),
        1 => Ok(scripts.remove(0)),
        n => Err(InvocationArityError::TooManyScripts(n)),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let script = single_script(cli.scripts)?;
    let content = std::fs::read_to_string(&script)
        .with_context(|| format!("failed to read script {}", script.display()))?;
    let program = parser::parse_dance(&content)?;

    if cli.check {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&program)?);
        } else {
            println!(
                "Dance '{}' in {} is valid: {} moves, style {}",
                program.name,
                script.display(),
                program.moves.len(),
                program.style
            );
        }
        return Ok(());
    }

    let config = AssemblyConfig {
        resource_root: cli.resource_root,
        frame_size: FrameSize::square(cli.size),
        ..AssemblyConfig::default()
    };
    let output = assembler::render_dance(&program, &config, &cli.out_dir)?;
    println!("Combined GIF saved as {}", output.display());

    if !cli.no_open {
        if let Err(e) = viewer::launch(&output, cli.viewer.as_deref()) {
            warn!("could not open {}: {e:#}", output.display());
        }
    }
    Ok(())
}
