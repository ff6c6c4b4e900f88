//! Link mode resolution.
//!
//! The shared-library define controls symbol export/import linkage in
//! the module headers; this resolver is its single source of truth. The
//! Mac prebuilt case also needs it, but that is a named platform
//! exception carried by the profile, applied (and deduplicated) at
//! assembly.

use crate::core::plan::Define;
use crate::core::target::LinkType;

/// Define present when modules are packaged as shared libraries.
pub const SHARED_LIBRARY_DEFINE: &str = "K_IS_DLL";

/// Defines derived from the link mode.
pub fn link_defines(link_type: LinkType) -> Vec<Define> {
    match link_type {
        LinkType::Monolithic => Vec::new(),
        LinkType::Modular => vec![Define::flag(SHARED_LIBRARY_DEFINE)],
    }
}
