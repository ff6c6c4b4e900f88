//! Build plan - the resolver's output.
//!
//! A [`BuildPlan`] is a static description of how one module participates
//! in the host build: source vs prebuilt, preprocessor defines, include
//! paths, library directories and references, dependency module names,
//! and the file paths whose changes invalidate the plan.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::target::TargetDescriptor;

/// Whether a module is compiled from in-tree source or linked against a
/// prebuilt library artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleType {
    Source,
    Precompiled,
}

/// A preprocessor define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Define {
    /// Simple flag: -DFOO
    Flag(String),
    /// Key-value: -DFOO=bar
    KeyValue { name: String, value: String },
}

impl Define {
    /// Create a simple flag define.
    pub fn flag(name: impl Into<String>) -> Self {
        Define::Flag(name.into())
    }

    /// Create a key-value define.
    pub fn key_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Define::KeyValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse `NAME` or `NAME=VALUE`, as found in a custom-define marker
    /// file.
    pub fn parse(s: &str) -> Self {
        match s.split_once('=') {
            Some((name, value)) => Define::key_value(name.trim(), value.trim()),
            None => Define::flag(s.trim()),
        }
    }

    /// Get the define name.
    pub fn name(&self) -> &str {
        match self {
            Define::Flag(n) => n,
            Define::KeyValue { name, .. } => name,
        }
    }

    /// Get the define value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Define::Flag(_) => None,
            Define::KeyValue { value, .. } => Some(value),
        }
    }

    /// Convert to compiler flag format.
    pub fn to_flag(&self) -> String {
        match self {
            Define::Flag(name) => format!("-D{}", name),
            Define::KeyValue { name, value } => format!("-D{}={}", name, value),
        }
    }
}

/// A library reference handed to the link step.
///
/// Most platforms reference prebuilt artifacts by full path. On the
/// late-bound platform (Android) the packaging stage resolves the final
/// artifact name itself and receives only a bare name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LibraryRef {
    /// Full path to a library file
    Path { path: PathBuf },

    /// Bare library name stem, no directory, no extension
    Name { name: String },
}

impl LibraryRef {
    /// Create a path library reference.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        LibraryRef::Path { path: path.into() }
    }

    /// Create a bare-name library reference.
    pub fn name(name: impl Into<String>) -> Self {
        LibraryRef::Name { name: name.into() }
    }
}

/// A complete build plan for one module.
///
/// Produced fresh per resolution and fully determined by the target
/// descriptor, the module spec, and the file-system snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    /// Module this plan was resolved for
    pub module: String,

    /// The target the plan applies to
    pub target: TargetDescriptor,

    /// Source build or prebuilt link
    pub module_type: ModuleType,

    /// Preprocessor defines, ordered platform -> configuration -> link
    /// mode -> marker extras, each symbol at most once
    pub defines: Vec<Define>,

    /// Include directories, in search order
    pub include_dirs: Vec<PathBuf>,

    /// Library search directories (empty for source builds)
    pub lib_dirs: Vec<PathBuf>,

    /// Library references (empty for source builds)
    pub libs: Vec<LibraryRef>,

    /// Dependency module names, in link order
    pub dependencies: Vec<String>,

    /// Files consulted during resolution; a change to any of them
    /// invalidates the plan
    pub external_dependencies: Vec<PathBuf>,
}

impl BuildPlan {
    /// Create an empty plan for a module.
    pub fn new(module: impl Into<String>, target: TargetDescriptor, module_type: ModuleType) -> Self {
        BuildPlan {
            module: module.into(),
            target,
            module_type,
            defines: Vec::new(),
            include_dirs: Vec::new(),
            lib_dirs: Vec::new(),
            libs: Vec::new(),
            dependencies: Vec::new(),
            external_dependencies: Vec::new(),
        }
    }

    /// Add a define unless its symbol is already present.
    ///
    /// First occurrence wins; defining the same symbol twice is the real
    /// hazard for downstream compilation.
    pub fn push_define(&mut self, define: Define) {
        if !self.has_define(define.name()) {
            self.defines.push(define);
        }
    }

    /// Check whether a define with the given symbol name is present.
    pub fn has_define(&self, name: &str) -> bool {
        self.defines.iter().any(|d| d.name() == name)
    }
}
