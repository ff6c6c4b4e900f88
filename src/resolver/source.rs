//! Source availability oracle.
//!
//! Read-only probes of the marker files that steer resolution. The
//! decision between source and prebuilt builds is a pure function of
//! file existence, so every probed path is recorded as an external
//! dependency: a cached plan must be invalidated when any of them
//! appears or disappears.

use std::path::PathBuf;

use crate::core::module::ModuleSpec;
use crate::core::plan::Define;
use crate::resolver::errors::ResolveError;
use crate::util::fs;

/// Define added when the strict-verify marker is present.
pub const STRICT_VERIFY_DEFINE: &str = "K_STRICT_VERIFY";

/// Result of probing a module's source and override markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceProbe {
    /// The designated marker source file exists
    pub has_full_source: bool,

    /// The force-prebuilt override marker exists
    pub force_precompiled: bool,

    /// Paths whose existence was consulted
    pub external_dependencies: Vec<PathBuf>,
}

/// Probe a module's source and override markers.
pub fn probe(module: &ModuleSpec) -> SourceProbe {
    SourceProbe {
        has_full_source: fs::probe_exists(&module.source_marker),
        force_precompiled: fs::probe_exists(&module.override_marker),
        external_dependencies: vec![
            module.source_marker.clone(),
            module.override_marker.clone(),
        ],
    }
}

/// Extra defines contributed by the auxiliary marker files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDefines {
    /// Defines to append, in marker order
    pub defines: Vec<Define>,

    /// Paths consulted, whether or not the markers existed
    pub external_dependencies: Vec<PathBuf>,
}

/// Probe the strict-verify and custom-define markers.
///
/// The custom-define marker's trimmed content becomes one define; an
/// empty file contributes nothing. A read failure on an existing file is
/// propagated unchanged.
pub fn marker_defines(module: &ModuleSpec) -> Result<MarkerDefines, ResolveError> {
    let strict_marker = module.strict_verify_marker();
    let custom_marker = module.custom_define_marker();

    let mut defines = Vec::new();

    if fs::probe_exists(&strict_marker) {
        defines.push(Define::flag(STRICT_VERIFY_DEFINE));
    }

    if fs::probe_exists(&custom_marker) {
        let text = fs::read_text(&custom_marker).map_err(|source| ResolveError::MarkerRead {
            path: custom_marker.clone(),
            source,
        })?;
        let text = text.trim();
        if !text.is_empty() {
            defines.push(Define::parse(text));
        }
    }

    Ok(MarkerDefines {
        defines,
        external_dependencies: vec![strict_marker, custom_marker],
    })
}
