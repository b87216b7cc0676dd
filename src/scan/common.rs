//! Filesystem helpers shared between the scanner and the renderer.
//!
//! Attribute queries are mapped onto whatever the host filesystem offers:
//! on Windows the read-only and hidden attribute bits, elsewhere the write
//! permission bits and the leading-dot naming convention.

use std::cmp::Ordering;
use std::fs::Metadata;
use std::path::Path;

use ignore::WalkBuilder;

/// Builds a walker over `directory` with every ignore filter turned off.
///
/// # Arguments
///
/// * `directory` - The directory path to enumerate
/// * `recurse` - Whether to descend into subdirectories
///
/// # Returns
///
/// An `ignore::Walk` that yields the directory itself at depth 0, followed by
/// its children (and, when recursing, the whole subtree).
pub fn build_walk(directory: &Path, recurse: bool) -> ignore::Walk {
    let mut builder = WalkBuilder::new(directory);
    // A listing shows everything, so none of the search-oriented filters apply
    builder.standard_filters(false);
    builder.hidden(false);
    builder.follow_links(false);
    if !recurse {
        builder.max_depth(Some(1));
    }

    builder.build()
}

/// Orders names by case-insensitive ordinal comparison.
///
/// Both names are upper-cased and then compared code point by code point, so
/// `"Alpha" < "beta" < "Gamma"`. Names that differ only in case compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_uppercase().cmp(&b.to_uppercase())
}

/// Sorts names in place with [`compare_names`]; equal names keep their order.
pub fn sort_names(names: &mut [String]) {
    names.sort_by_cached_key(|name| name.to_uppercase());
}

/// Returns `true` when `name` ends with `suffix`, ignoring case.
///
/// This is a raw suffix test, not an extension comparison: the suffix `"e"`
/// matches both `setup.exe` and `readme`.
pub fn matches_suffix(name: &str, suffix: &str) -> bool {
    name.to_lowercase().ends_with(&suffix.to_lowercase())
}

/// Returns `true` if the entry is marked read-only.
pub fn is_readonly(metadata: &Metadata) -> bool {
    metadata.permissions().readonly()
}

/// Returns `true` if the entry at `path` is hidden.
///
/// On Windows this is the hidden attribute. Elsewhere the file name starting
/// with a dot is the convention.
#[cfg(windows)]
pub fn is_hidden(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

    std::fs::symlink_metadata(path)
        .map(|metadata| metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
        .unwrap_or(false)
}

/// Returns `true` if the entry at `path` is hidden.
///
/// On Windows this is the hidden attribute. Elsewhere the file name starting
/// with a dot is the convention.
#[cfg(not(windows))]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
}
