//! Module specification - one buildable native unit.

use std::path::{Path, PathBuf};

/// Shared low-level utility module, linked by everything.
pub const CORE_MODULE: &str = "KeelCore";

/// The script interpreter module.
pub const SCRIPT_MODULE: &str = "KeelScript";

/// The engine-hosting runtime module, which aggregates script-supported
/// module dependencies.
pub const RUNTIME_MODULE: &str = "KeelScriptRuntime";

/// Marker file forcing a prebuilt-library build even when full source is
/// present. Created by the packaging pipeline.
pub const OVERRIDE_MARKER: &str = "force-prebuilt.txt";

/// Marker file enabling the strict verification define.
pub const STRICT_VERIFY_MARKER: &str = "enable-strict-verify.txt";

/// Marker file whose content is injected as one extra define.
pub const CUSTOM_DEFINE_MARKER: &str = "custom-define.txt";

/// Description of one native module: its name, root directory, and the
/// marker files the resolver consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Module name (also the library artifact name stem)
    pub name: String,

    /// Module root directory
    pub root: PathBuf,

    /// File whose existence means full source is present
    pub source_marker: PathBuf,

    /// File whose existence forces a prebuilt-library build
    pub override_marker: PathBuf,
}

impl ModuleSpec {
    /// Create a spec with the conventional Keel module layout: public
    /// headers under `include/`, private source under `src/`, prebuilt
    /// artifacts under `lib/`, and the umbrella translation unit
    /// `src/<Name>.cpp` as the full-source marker.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let root = root.into();
        let source_marker = root.join("src").join(format!("{}.cpp", name));
        let override_marker = root.join(OVERRIDE_MARKER);
        ModuleSpec {
            name,
            root,
            source_marker,
            override_marker,
        }
    }

    /// Override the full-source marker path.
    pub fn with_source_marker(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_marker = path.into();
        self
    }

    /// Override the force-prebuilt marker path.
    pub fn with_override_marker(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_marker = path.into();
        self
    }

    /// Public include directory, exported to dependents.
    pub fn public_include(&self) -> PathBuf {
        self.root.join("include")
    }

    /// Private include directory, used only when building from source.
    pub fn private_include(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Root directory of the per-platform prebuilt artifacts.
    pub fn lib_root(&self) -> PathBuf {
        self.root.join("lib")
    }

    /// Path of the strict-verify marker.
    pub fn strict_verify_marker(&self) -> PathBuf {
        self.root.join(STRICT_VERIFY_MARKER)
    }

    /// Path of the custom-define marker.
    pub fn custom_define_marker(&self) -> PathBuf {
        self.root.join(CUSTOM_DEFINE_MARKER)
    }

    /// Whether this module carries the script-supported dependency list.
    pub fn aggregates_dependencies(&self) -> bool {
        self.name == RUNTIME_MODULE
    }
}

impl ModuleSpec {
    /// Convenience accessor for the root as a path.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_layout() {
        let spec = ModuleSpec::new("KeelScript", "/plugin/KeelScript");

        assert_eq!(
            spec.source_marker,
            PathBuf::from("/plugin/KeelScript/src/KeelScript.cpp")
        );
        assert_eq!(
            spec.override_marker,
            PathBuf::from("/plugin/KeelScript/force-prebuilt.txt")
        );
        assert_eq!(
            spec.public_include(),
            PathBuf::from("/plugin/KeelScript/include")
        );
        assert_eq!(spec.lib_root(), PathBuf::from("/plugin/KeelScript/lib"));
    }

    #[test]
    fn test_marker_overrides() {
        let spec = ModuleSpec::new("KeelCore", "/plugin/KeelCore")
            .with_source_marker("/plugin/KeelScript/src/KeelScript.cpp");

        // The core module's source marker may live in a sibling module.
        assert_eq!(
            spec.source_marker,
            PathBuf::from("/plugin/KeelScript/src/KeelScript.cpp")
        );
        assert_eq!(
            spec.override_marker,
            PathBuf::from("/plugin/KeelCore/force-prebuilt.txt")
        );
    }

    #[test]
    fn test_only_runtime_aggregates_dependencies() {
        assert!(ModuleSpec::new(RUNTIME_MODULE, "/p/rt").aggregates_dependencies());
        assert!(!ModuleSpec::new(SCRIPT_MODULE, "/p/vm").aggregates_dependencies());
        assert!(!ModuleSpec::new("GameCore", "/p/game").aggregates_dependencies());
    }
}
