//! Filesystem probes used by the resolver.
//!
//! These are the host's file-system primitives: an existence predicate
//! and a text read. The resolver is a pure function of what they return.

use std::fs;
use std::io;
use std::path::Path;

/// Check whether a marker file exists.
pub fn probe_exists(path: &Path) -> bool {
    let found = path.exists();
    tracing::trace!(path = %path.display(), found, "marker probe");
    found
}

/// Read a text file. The raw I/O error is preserved for the caller to
/// wrap with path context.
pub fn read_text(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}
