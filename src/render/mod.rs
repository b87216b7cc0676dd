//! Column-major grid output for lists of entry names.
//!
//! Names are packed into as many equal-width columns as fit the terminal
//! (capped by `max_columns`) and filled top to bottom, then left to right.
//! Each name is colored by what it currently is on disk; the lookup happens
//! here, at render time, independently of the scan that produced the name.

use crossterm::queue;
use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};
use std::io::{self, Write};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::scan::common::is_hidden;
use crate::terminal::terminal_width;


/// Placeholder written in place of an empty grid.
pub const EMPTY_PLACEHOLDER: &str = "(none)";

/// Extensions colored as executables.
pub const EXECUTABLE_EXTENSIONS: [&str; 3] = ["exe", "bat", "cmd"];

/// Configuration options for rendering a grid.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Spaces added to the widest name to get the column width
    pub column_padding: usize,

    /// Upper bound on the number of columns
    pub max_columns: usize,

    /// Terminal width in columns, `None` when unknown
    pub terminal_width: Option<usize>,

    /// Query the terminal width on every render instead of using
    /// `terminal_width`
    pub live_width: bool,

    /// Whether to emit ANSI color sequences
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            column_padding: 4,
            max_columns: 4,
            terminal_width: None,
            live_width: false,
            color: true,
        }
    }
}

/// Dimensions of a column-major grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub column_width: usize,
    pub columns: usize,
    pub rows: usize,
}

impl ColumnLayout {
    /// Computes the grid dimensions for `names`.
    ///
    /// The column width is the widest name plus the padding. The column count
    /// is how many such columns fit the terminal, clamped to
    /// `1..=max_columns`; an unknown terminal width yields a single column.
    pub fn compute(names: &[String], options: &RenderOptions) -> Self {
        let longest = names.iter().map(|name| name.width()).max().unwrap_or(0);
        let column_width = longest + options.column_padding;

        let fitting = match options.terminal_width {
            Some(width) if column_width > 0 => width / column_width,
            _ => 1,
        };
        let columns = fitting.clamp(1, options.max_columns.max(1));
        let rows = names.len().div_ceil(columns);

        Self {
            column_width,
            columns,
            rows,
        }
    }

    /// Index into the name list for grid position (`row`, `column`).
    pub fn index_at(&self, row: usize, column: usize) -> usize {
        column * self.rows + row
    }
}

/// How a name is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStyle {
    Directory,
    Executable,
    Hidden,
    Plain,
}

impl EntryStyle {
    /// Picks the style for the entry at `path`, first match wins:
    /// directory, executable extension, hidden, plain.
    pub fn classify(path: &Path) -> Self {
        if path.is_dir() {
            return EntryStyle::Directory;
        }

        let executable = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                EXECUTABLE_EXTENSIONS
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(ext))
            });
        if executable {
            return EntryStyle::Executable;
        }

        if is_hidden(path) {
            return EntryStyle::Hidden;
        }

        EntryStyle::Plain
    }

    fn apply<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            EntryStyle::Directory => queue!(
                out,
                SetForegroundColor(Color::Blue),
                SetAttribute(Attribute::Bold)
            ),
            EntryStyle::Executable => queue!(out, SetForegroundColor(Color::Green)),
            EntryStyle::Hidden => queue!(
                out,
                SetForegroundColor(Color::DarkGrey),
                SetAttribute(Attribute::Dim)
            ),
            EntryStyle::Plain => Ok(()),
        }
    }
}

/// Writes `names` as a column-major grid to `out`.
///
/// Each name is resolved against `base_path` to choose its color. An empty
/// list writes only [`EMPTY_PLACEHOLDER`].
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render<W: Write>(
    out: &mut W,
    names: &[String],
    base_path: &Path,
    options: &RenderOptions,
) -> io::Result<()> {
    if names.is_empty() {
        writeln!(out, "{}", EMPTY_PLACEHOLDER)?;
        return Ok(());
    }

    let layout = if options.live_width {
        let current = RenderOptions {
            terminal_width: terminal_width(),
            ..options.clone()
        };
        ColumnLayout::compute(names, &current)
    } else {
        ColumnLayout::compute(names, options)
    };

    for row in 0..layout.rows {
        for column in 0..layout.columns {
            let Some(name) = names.get(layout.index_at(row, column)) else {
                continue;
            };

            if options.color {
                EntryStyle::classify(&base_path.join(name)).apply(out)?;
                write!(out, "{}", name)?;
                queue!(out, SetAttribute(Attribute::Reset))?;
            } else {
                write!(out, "{}", name)?;
            }

            let padding = layout.column_width.saturating_sub(name.width());
            write!(out, "{:padding$}", "")?;
        }
        writeln!(out)?;
    }

    out.flush()
}
