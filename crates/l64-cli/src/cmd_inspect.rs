/// Implementation of `l64 inspect`.
///
/// Reads each file, recognizes its header, and prints one line per file.
/// Nothing is decoded or written.
///
/// # Output format
///
/// ```text
/// scripts/main.l64: legacy-v4, 1532 bytes, payload 4..1532
/// scripts/gui.l64: current-b, 88 bytes, payload 2..88
/// scripts/done.l64: plain, 40 bytes
/// scripts/junk.l64: invalid .l64 header
/// ```
///
/// With `--json`, each line is a JSON object instead:
///
/// ```text
/// {"path":"scripts/main.l64","size":1532,"scheme":"legacy-v4","payload_start":4,"error":null}
/// ```
///
/// A file that cannot be read makes the command fail. A file with an
/// unrecognized header is reported, not treated as a failure.
use anyhow::{Context, Result};
use l64_driver::{FileInspection, FsDriver};
use serde::Serialize;

use crate::InspectArgs;

/// One row of `--json` output.
#[derive(Serialize)]
struct InspectRecord {
    path: String,
    size: usize,
    scheme: Option<&'static str>,
    payload_start: Option<usize>,
    error: Option<String>,
}

impl From<&FileInspection> for InspectRecord {
    fn from(inspection: &FileInspection) -> Self {
        let (scheme, payload_start, error) = match &inspection.scheme {
            Ok(scheme) => (Some(scheme.label()), scheme.payload_start(), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        Self {
            path: inspection.path.display().to_string(),
            size: inspection.size,
            scheme,
            payload_start,
            error,
        }
    }
}

/// Run the `l64 inspect` command.
///
/// # Errors
///
/// Returns an error if any file cannot be read, or JSON serialization
/// fails.
pub fn run(args: &InspectArgs) -> Result<()> {
    let driver = FsDriver::default();

    for path in &args.files {
        let inspection = driver
            .inspect_file(path)
            .with_context(|| format!("cannot inspect {}", path.display()))?;

        if args.json {
            let line = serde_json::to_string(&InspectRecord::from(&inspection))
                .context("cannot serialize inspection")?;
            println!("{line}");
        } else {
            println!("{}", describe(&inspection));
        }
    }

    Ok(())
}

fn describe(inspection: &FileInspection) -> String {
    let path = inspection.path.display();
    let size = inspection.size;
    match &inspection.scheme {
        Ok(scheme) => match scheme.payload_start() {
            Some(start) => format!("{path}: {scheme}, {size} bytes, payload {start}..{size}"),
            None => format!("{path}: {scheme}, {size} bytes"),
        },
        Err(e) => format!("{path}: {e}"),
    }
}
