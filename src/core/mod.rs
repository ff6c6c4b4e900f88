//! Core data model: targets, modules, and plans.

pub mod module;
pub mod plan;
pub mod target;

pub use module::{ModuleSpec, CORE_MODULE, RUNTIME_MODULE, SCRIPT_MODULE};
pub use plan::{BuildPlan, Define, LibraryRef, ModuleType};
pub use target::{
    BuildConfiguration, LinkType, Platform, TargetDescriptor, ToolchainVariant,
};
