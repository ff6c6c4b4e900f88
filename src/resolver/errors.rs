//! Resolution error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::target::Platform;

/// Error during build plan resolution.
///
/// Every failure is a one-shot deterministic read or computation; there
/// are no retries and no partial plans.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Prebuilt linking requested on a platform without prebuilt
    /// library distribution.
    #[error("module `{module}` requires a prebuilt library, which is not distributed for {platform}")]
    UnsupportedPlatform { module: String, platform: Platform },

    /// A marker file exists but could not be read. The host's I/O error
    /// is propagated unchanged as the source.
    #[error("failed to read marker file: {path}")]
    MarkerRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module config file exists but could not be read.
    #[error("failed to read module config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The module config file exists but is not valid TOML.
    #[error("failed to parse module config: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
