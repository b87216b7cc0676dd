//! Per-directory listing driver.
//!
//! Target directories are processed one after another in command-line order.
//! A directory that cannot be found is reported on the error stream and the
//! run moves on to the next one.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::cli::ScanRequest;
use crate::render::{RenderOptions, render};
use crate::scan::{ScanOptions, ScanResult, scan};
use crate::telemetry::{LogMessage, log_with_context};

/// Lists every target directory of `request`.
///
/// # Arguments
///
/// * `request` - The interpreted command line
/// * `out` - Stream receiving the listing
/// * `err` - Stream receiving per-directory error messages
/// * `render_options` - Grid and color settings shared by all sections
///
/// # Errors
///
/// Returns an error only if writing to `out` or `err` fails, or JSON
/// serialization fails. Missing directories are not errors of the run.
pub fn run<W: Write, E: Write>(
    request: &ScanRequest,
    out: &mut W,
    err: &mut E,
    render_options: &RenderOptions,
) -> Result<()> {
    let scan_options = ScanOptions {
        recurse: request.recurse,
        extension_filter: request.extension_filter.clone(),
    };

    for directory in &request.target_dirs {
        let result = match scan(directory, &scan_options) {
            Ok(result) => result,
            Err(scan_err) => {
                log_with_context(
                    log::Level::Debug,
                    LogMessage {
                        message: "Skipping target directory".to_string(),
                        module: "listing",
                        context: Some(vec![("error", scan_err.to_string())]),
                    },
                );
                writeln!(err, "{}", scan_err)?;
                continue;
            }
        };

        if request.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            continue;
        }

        write_sections(request, directory, &result, out, render_options)?;
    }

    out.flush()?;
    Ok(())
}

/// Writes the header and the requested sections for one directory.
fn write_sections<W: Write>(
    request: &ScanRequest,
    directory: &Path,
    result: &ScanResult,
    out: &mut W,
    render_options: &RenderOptions,
) -> Result<()> {
    writeln!(out, "Directory: {}", directory.display())?;
    writeln!(out)?;

    if request.show_dirs {
        writeln!(out, "Directories:")?;
        render(out, &result.directory_names, directory, render_options)?;
        writeln!(out)?;
    }

    if request.show_files {
        writeln!(out, "Files:")?;
        render(out, &result.file_names, directory, render_options)?;
        writeln!(out)?;
    }

    if request.show_readonly {
        writeln!(out, "Read-Only Files:")?;
        render(out, &result.readonly_file_names, directory, render_options)?;
        writeln!(out)?;
    }

    Ok(())
}
