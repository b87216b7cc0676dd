//! Logging configuration using env_logger.
//!
//! Diagnostics go to stderr so they never interleave with the listing on
//! stdout. Verbosity is controlled with `RUST_LOG` and defaults to `warn`.

use anyhow::Result;
use log::{Level, debug, error, info, trace, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

/// Initialize env_logger-based logging with stderr output.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init() -> Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| match setup_logger() {
        Ok(_) => debug!("Logging initialized with stderr output"),
        Err(e) => {
            // Cannot use logging yet since it failed to initialize
            eprintln!("Failed to initialize logging: {}", e);
            result = Err(e);
        }
    });

    result
}

/// Log a message with the given level and context
///
/// # Example
///
/// ```
/// use dircols::telemetry::{log_with_context, LogMessage};
/// use log::Level;
///
/// log_with_context(
///     Level::Debug,
///     LogMessage {
///         message: "Skipping unreadable entry".to_string(),
///         module: "scan",
///         context: Some(vec![
///             ("path", "/tmp/locked".to_string()),
///         ]),
///     }
/// );
/// ```
pub fn log_with_context(level: Level, msg: LogMessage) {
    let line = format_context(&msg);
    match level {
        Level::Error => error!(target: msg.module, "{}", line),
        Level::Warn => warn!(target: msg.module, "{}", line),
        Level::Info => info!(target: msg.module, "{}", line),
        Level::Debug => debug!(target: msg.module, "{}", line),
        Level::Trace => trace!(target: msg.module, "{}", line),
    }
}

/// Format a log message with its context for display
pub fn format_context(msg: &LogMessage) -> String {
    if let Some(context) = &msg.context {
        let context_str = context
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");

        format!("{} [{}]", msg.message, context_str)
    } else {
        msg.message.clone()
    }
}

fn setup_logger() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(true)
        .format_module_path(false)
        .try_init()?;

    Ok(())
}
