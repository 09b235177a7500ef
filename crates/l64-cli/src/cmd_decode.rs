/// Implementation of `l64 decode`.
///
/// A file input is decoded to the output path (or into the output folder
/// as `<stem>.lua`). Any other input is treated as a folder: every `.l64`
/// entry is decoded into the mirrored output folder, and with `-r` the
/// walk descends into subfolders.
///
/// # Failure handling
///
/// ```text
/// ┌──────────────┬──────────────────────────────────────────────────────┐
/// │ Input        │ A file that cannot be decoded or written             │
/// ├──────────────┼──────────────────────────────────────────────────────┤
/// │ single file  │ error, exit code 1                                   │
/// │ folder       │ logged as a warning, run continues, exit code 0      │
/// └──────────────┴──────────────────────────────────────────────────────┘
/// ```
use anyhow::{Context, Result};
use l64_decoder::DecodeOutcome;
use l64_driver::{DriverConfig, FsDriver, OverwritePolicy};

use crate::DecodeArgs;

/// Run the `l64 decode` command.
///
/// # Errors
///
/// Returns an error if a single input file cannot be read, decoded, or
/// written, or if the input folder cannot be listed.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let driver = FsDriver::new(config_from_args(args));

    if args.input.is_file() {
        let report = driver
            .decode_file(&args.input, &args.output)
            .with_context(|| format!("failed to decode {}", args.input.display()))?;

        if report.outcome == DecodeOutcome::AlreadyDecoded {
            tracing::info!("{} was already unlocked", args.input.display());
        }
        tracing::info!(
            "{} -> {} ({})",
            report.source.display(),
            report.destination.display(),
            report.outcome.scheme()
        );
    } else {
        let report = driver
            .decode_folder(&args.input, &args.output)
            .with_context(|| format!("failed to decode folder {}", args.input.display()))?;

        if !report.is_clean() {
            tracing::warn!(
                "{} of {} files could not be decoded",
                report.failed_count(),
                report.failed_count() + report.files.len()
            );
        }
    }

    tracing::info!("Done!");
    Ok(())
}

fn config_from_args(args: &DecodeArgs) -> DriverConfig {
    DriverConfig {
        overwrite: if args.overwrite {
            OverwritePolicy::Replace
        } else {
            OverwritePolicy::Fail
        },
        recursive: args.recursive,
        ..DriverConfig::default()
    }
}
