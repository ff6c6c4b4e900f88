//! Module dependency resolution.
//!
//! The script-supported module list is declarative, owned by the project
//! embedding Keel. The resolver reads it, appends the modules Keel
//! always needs, and deduplicates preserving first-seen order.

use std::path::{Path, PathBuf};

use crate::core::module::{CORE_MODULE, RUNTIME_MODULE, SCRIPT_MODULE};
use crate::resolver::errors::ResolveError;
use crate::util::config::{self, KeelConfig};
use crate::util::fs;

/// The resolved dependency module list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModules {
    /// Module names, ordered, each exactly once
    pub modules: Vec<String>,

    /// The config path consulted; the result must be re-evaluated when
    /// it changes
    pub external_dependencies: Vec<PathBuf>,
}

/// Resolve the dependency module list for a config root.
///
/// Reads `config/keel.toml` if present (absence of file or key is an
/// empty list), then appends [`CORE_MODULE`] and [`SCRIPT_MODULE`]
/// unconditionally and [`RUNTIME_MODULE`] only if `include_runtime`.
/// The runtime module itself resolves with `include_runtime = false`;
/// hosts resolving on behalf of a project pass `true`.
pub fn resolve_modules(
    config_root: &Path,
    include_runtime: bool,
) -> Result<ResolvedModules, ResolveError> {
    let config_path = config::config_path(config_root);

    let mut modules: Vec<String> = Vec::new();
    if fs::probe_exists(&config_path) {
        let text = fs::read_text(&config_path).map_err(|source| ResolveError::ConfigRead {
            path: config_path.clone(),
            source,
        })?;
        let config = KeelConfig::parse(&text).map_err(|source| ResolveError::ConfigParse {
            path: config_path.clone(),
            source,
        })?;
        modules.extend(config.script_supported().iter().cloned());
    } else {
        tracing::debug!(path = %config_path.display(), "no module config, using mandatory modules only");
    }

    modules.push(CORE_MODULE.to_string());
    modules.push(SCRIPT_MODULE.to_string());
    if include_runtime {
        modules.push(RUNTIME_MODULE.to_string());
    }

    dedup_preserving_order(&mut modules);

    Ok(ResolvedModules {
        modules,
        external_dependencies: vec![config_path],
    })
}

/// Remove duplicates, keeping each name at its first occurrence.
fn dedup_preserving_order(modules: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    modules.retain(|name| seen.insert(name.clone()));
}
