/// L64 command-line tool: unlock `.l64` script files into plain `.lua`.
///
/// # Command overview
///
/// ```text
/// l64 <COMMAND> [OPTIONS]
///
/// Commands:
///   decode     Decode one .l64 file, or every .l64 file in a folder
///   inspect    Print the detected header scheme of one or more files
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Log every file and the scheme it was decoded with
///   -q, --quiet      Only log warnings and errors
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// # Exit codes
///
/// | Code | Meaning                                               |
/// |------|-------------------------------------------------------|
/// | 0    | Success (folder runs succeed even if files were skipped) |
/// | 1    | Error (unreadable input, bad single file, etc.)       |
///
/// Logs go to stderr; `inspect` output goes to stdout.
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd_decode;
mod cmd_inspect;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Unlock obfuscated `.l64` scripts.
#[derive(Parser)]
#[command(name = "l64", version, about = "L64 script decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log every file and the scheme it was decoded with.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a file, or all `.l64` files in a folder.
    Decode(DecodeArgs),
    /// Print the detected header scheme without writing anything.
    Inspect(InspectArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Arguments for `l64 decode`.
///
/// ```text
/// ┌──────────────────┬──────────────────────────────────────────────────┐
/// │ Flag             │ Effect                                           │
/// ├──────────────────┼──────────────────────────────────────────────────┤
/// │ -r / --recursive │ Also decode `.l64` files in every subfolder      │
/// │ -o / --overwrite │ Replace destination files that already exist     │
/// └──────────────────┴──────────────────────────────────────────────────┘
/// ```
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// The input file or folder. For a folder, every `.l64` file in it is
    /// decoded.
    pub input: PathBuf,

    /// The output file or folder.
    pub output: PathBuf,

    /// Recursively decode `.l64` files in the folder and all subfolders.
    #[arg(short, long)]
    pub recursive: bool,

    /// Overwrite destination files if they already exist.
    #[arg(short, long)]
    pub overwrite: bool,
}

/// Arguments for `l64 inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// Files to inspect.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit one JSON object per line instead of text.
    #[arg(long)]
    pub json: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Decode(args) => cmd_decode::run(&args),
        Commands::Inspect(args) => cmd_inspect::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
