//! Build plan assembly - the resolution root.
//!
//! Composes the profile table, source oracle, mode and link resolvers,
//! artifact locator, and dependency resolver into one [`BuildPlan`] per
//! (target, module) pair. Resolution is a pure function of its inputs
//! and the file-system snapshot; no partial plan is ever returned.

use std::path::Path;

use crate::core::module::ModuleSpec;
use crate::core::plan::{BuildPlan, Define, ModuleType};
use crate::core::target::TargetDescriptor;
use crate::resolver::deps;
use crate::resolver::errors::ResolveError;
use crate::resolver::link::{link_defines, SHARED_LIBRARY_DEFINE};
use crate::resolver::locate;
use crate::resolver::mode::BuildMode;
use crate::resolver::profile::PlatformProfile;
use crate::resolver::source;

/// Assemble the build plan for one module.
///
/// `config_root` is the directory holding `config/keel.toml`; it is only
/// consulted for the module that aggregates script-supported
/// dependencies.
pub fn assemble(
    target: &TargetDescriptor,
    module: &ModuleSpec,
    config_root: &Path,
) -> Result<BuildPlan, ResolveError> {
    let profile = PlatformProfile::lookup(target.platform, target.toolchain);

    let probe = source::probe(module);
    let module_type = if probe.has_full_source && !probe.force_precompiled {
        ModuleType::Source
    } else {
        ModuleType::Precompiled
    };

    let use_debug_runtime = profile.forces_debug_runtime || target.debug_runtime;
    let mode = BuildMode::resolve(target.configuration, use_debug_runtime);
    let markers = source::marker_defines(module)?;

    let mut plan = BuildPlan::new(&module.name, target.clone(), module_type);
    plan.external_dependencies = probe.external_dependencies;
    plan.external_dependencies
        .extend(markers.external_dependencies);

    // Defines: platform, then configuration, then link mode, then marker
    // extras. First occurrence of a symbol wins.
    if let Some(define) = profile.platform_define.clone() {
        plan.push_define(define);
    }
    if module_type == ModuleType::Precompiled && profile.shared_define_on_precompiled {
        plan.push_define(Define::flag(SHARED_LIBRARY_DEFINE));
    }
    for define in mode.defines.iter().cloned() {
        plan.push_define(define);
    }
    for define in link_defines(target.link_type) {
        plan.push_define(define);
    }
    for define in markers.defines {
        plan.push_define(define);
    }

    // Public headers are exported whether or not source is present.
    plan.include_dirs.push(module.public_include());

    match module_type {
        ModuleType::Source => {
            plan.include_dirs.push(module.private_include());
        }
        ModuleType::Precompiled => {
            if !profile.precompiled_allowed {
                return Err(ResolveError::UnsupportedPlatform {
                    module: module.name.clone(),
                    platform: target.platform,
                });
            }
            let located = locate::locate(module, &profile, &mode, target.link_type);
            plan.lib_dirs = located.lib_dirs;
            plan.libs = located.libs;
        }
    }

    if module.aggregates_dependencies() {
        // The runtime module does not depend on itself.
        let resolved = deps::resolve_modules(config_root, false)?;
        plan.dependencies = resolved.modules;
        plan.external_dependencies
            .extend(resolved.external_dependencies);
    }

    tracing::debug!(
        module = %module.name,
        platform = %target.platform,
        module_type = ?module_type,
        "assembled build plan"
    );

    Ok(plan)
}
