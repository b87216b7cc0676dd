//! Host terminal capabilities: width, ANSI support and the color policy.

use crossterm::tty::IsTty;

/// Queries the current terminal width in columns.
///
/// Returns `None` when stdout is not attached to a terminal or the size cannot
/// be determined.
pub fn terminal_width() -> Option<usize> {
    match crossterm::terminal::size() {
        Ok((0, _)) => None,
        Ok((columns, _)) => Some(usize::from(columns)),
        Err(err) => {
            log::debug!(target: "terminal", "Terminal size unavailable: {}", err);
            None
        }
    }
}

/// Turns on ANSI escape interpretation where the console needs it.
///
/// Must run once before any colored output. Returns whether escape sequences
/// will be interpreted.
#[cfg(windows)]
pub fn enable_ansi() -> bool {
    // Enables virtual terminal processing as a side effect
    crossterm::ansi_support::supports_ansi()
}

/// Turns on ANSI escape interpretation where the console needs it.
///
/// Must run once before any colored output. Returns whether escape sequences
/// will be interpreted.
#[cfg(not(windows))]
pub fn enable_ansi() -> bool {
    true
}

/// Decides whether output should be colorized.
///
/// A non-empty `NO_COLOR` always disables colors; otherwise colors are used
/// when stdout is a terminal.
pub fn color_enabled() -> bool {
    color_policy(std::env::var_os("NO_COLOR").as_deref(), std::io::stdout().is_tty())
}

/// Pure form of [`color_enabled`].
pub fn color_policy(no_color: Option<&std::ffi::OsStr>, is_tty: bool) -> bool {
    match no_color {
        Some(value) if !value.is_empty() => false,
        _ => is_tty,
    }
}
