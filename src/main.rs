use anyhow::Result;
use dircols::cli::parse_args;
use dircols::listing;
use dircols::render::RenderOptions;
use dircols::terminal::{color_enabled, enable_ansi};
use std::io;

fn main() -> Result<()> {
    // Initialize structured logging
    dircols::telemetry::init()?;

    let request = match parse_args(std::env::args_os()) {
        Ok(request) => request,
        Err(err) => err.exit(),
    };

    let ansi = enable_ansi();
    let render_options = RenderOptions {
        live_width: true,
        color: ansi && color_enabled(),
        ..RenderOptions::default()
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    listing::run(
        &request,
        &mut stdout.lock(),
        &mut stderr.lock(),
        &render_options,
    )
}
