//! Slipway - build plan resolver for the Keel scripting runtime plugin
//!
//! This crate computes static build plans for Keel's native modules:
//! whether a module is compiled from source or linked against a prebuilt
//! library, which preprocessor defines apply, where the per-platform
//! library artifacts live, and which other modules are dependencies.

pub mod core;
pub mod resolver;
pub mod util;

pub use self::core::{
    module::ModuleSpec, plan::BuildPlan, plan::Define, plan::LibraryRef, plan::ModuleType,
    target::BuildConfiguration, target::LinkType, target::Platform, target::TargetDescriptor,
    target::ToolchainVariant,
};

pub use resolver::{assemble, ResolveError};
