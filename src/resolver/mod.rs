//! Build plan resolution.
//!
//! The resolver turns a target description plus a snapshot of marker-file
//! observations into a static build plan per module. Resolution is
//! synchronous, single-threaded, and free of shared mutable state;
//! independent resolutions may run in parallel with no coordination.

pub mod assemble;
pub mod deps;
pub mod errors;
pub mod link;
pub mod locate;
pub mod mode;
pub mod profile;
pub mod source;

pub use assemble::assemble;
pub use deps::{resolve_modules, ResolvedModules};
pub use errors::ResolveError;
pub use link::SHARED_LIBRARY_DEFINE;
pub use locate::LocatedArtifacts;
pub use mode::BuildMode;
pub use profile::PlatformProfile;
pub use source::{SourceProbe, STRICT_VERIFY_DEFINE};
