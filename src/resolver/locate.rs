//! Library artifact location.
//!
//! Composes the platform profile, build mode, link mode, and module name
//! into the library search directories and references the link step
//! consumes. Naming tie-breaks here directly determine whether the link
//! step finds the right artifact.

use crate::core::module::ModuleSpec;
use crate::core::plan::LibraryRef;
use crate::core::target::LinkType;
use crate::resolver::mode::BuildMode;
use crate::resolver::profile::PlatformProfile;

use std::path::PathBuf;

/// Library directories and references for one prebuilt module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArtifacts {
    /// Library search directories, one per profile path suffix
    pub lib_dirs: Vec<PathBuf>,

    /// Library references: one full path per directory, or a single bare
    /// name on the late-bound platform
    pub libs: Vec<LibraryRef>,
}

/// Locate the prebuilt artifacts for a module.
///
/// The file-name stem is `prefix + name + platform tag + suffix`, where
/// the platform tag appears only for per-module shared-library builds on
/// the platform whose import libraries are named per platform (Win64).
/// One directory is emitted per path suffix. On the late-bound platform
/// the references collapse to one bare stem with no directory and no
/// extension; the directories are still emitted for the linker search
/// path.
pub fn locate(
    module: &ModuleSpec,
    profile: &PlatformProfile,
    mode: &BuildMode,
    link_type: LinkType,
) -> LocatedArtifacts {
    let platform_tag = if !link_type.is_monolithic() && profile.import_lib_naming {
        format!("-{}", profile.platform_tag())
    } else {
        String::new()
    };

    let stem = format!(
        "{}{}{}{}",
        profile.lib_prefix, module.name, platform_tag, mode.lib_suffix
    );
    let file_name = format!("{}{}", stem, profile.lib_extension);

    let lib_root = module.lib_root();
    let mut lib_dirs = Vec::with_capacity(profile.path_suffixes.len());
    let mut libs = Vec::new();

    for suffix in &profile.path_suffixes {
        let dir = lib_root.join(suffix);
        if !profile.late_bound_reference {
            libs.push(LibraryRef::path(dir.join(&file_name)));
        }
        lib_dirs.push(dir);
    }

    if profile.late_bound_reference {
        libs.push(LibraryRef::name(format!(
            "{}{}",
            module.name, mode.lib_suffix
        )));
    }

    LocatedArtifacts { lib_dirs, libs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plan::Define;
    use crate::core::target::{BuildConfiguration, Platform, ToolchainVariant};
    use crate::resolver::mode::BuildMode;

    fn module() -> ModuleSpec {
        ModuleSpec::new("KeelScript", "/plugin/KeelScript")
    }

    fn development() -> BuildMode {
        BuildMode::resolve(BuildConfiguration::Development, false)
    }

    fn profile(platform: Platform) -> PlatformProfile {
        PlatformProfile::lookup(platform, ToolchainVariant::Msvc2015)
    }

    #[test]
    fn test_linux_full_path_reference() {
        let located = locate(&module(), &profile(Platform::Linux), &development(), LinkType::Monolithic);

        assert_eq!(located.lib_dirs, [PathBuf::from("/plugin/KeelScript/lib/Linux")]);
        assert_eq!(
            located.libs,
            [LibraryRef::path(
                "/plugin/KeelScript/lib/Linux/libKeelScript-Development.a"
            )]
        );
    }

    #[test]
    fn test_win64_modular_includes_platform_tag() {
        let located = locate(&module(), &profile(Platform::Win64), &development(), LinkType::Modular);

        assert_eq!(
            located.libs,
            [LibraryRef::path(
                "/plugin/KeelScript/lib/Win64/VS2015/KeelScript-Win64-Development.lib"
            )]
        );
    }

    #[test]
    fn test_win64_monolithic_omits_platform_tag() {
        let located = locate(&module(), &profile(Platform::Win64), &development(), LinkType::Monolithic);

        assert_eq!(
            located.libs,
            [LibraryRef::path(
                "/plugin/KeelScript/lib/Win64/VS2015/KeelScript-Development.lib"
            )]
        );
    }

    #[test]
    fn test_non_import_lib_platform_never_tags() {
        // Modular elsewhere still omits the tag; only Win64 import
        // libraries are named per platform.
        let located = locate(&module(), &profile(Platform::Mac), &development(), LinkType::Modular);

        assert_eq!(
            located.libs,
            [LibraryRef::path(
                "/plugin/KeelScript/lib/Mac/libKeelScript-Development.a"
            )]
        );
    }

    #[test]
    fn test_two_suffix_profile_yields_two_pairs_with_shared_stem() {
        let mut profile = profile(Platform::Linux);
        profile.path_suffixes = vec![PathBuf::from("Linux/x64"), PathBuf::from("Linux/arm64")];

        let located = locate(&module(), &profile, &development(), LinkType::Modular);

        assert_eq!(located.lib_dirs.len(), 2);
        assert_eq!(located.libs.len(), 2);
        for lib in &located.libs {
            match lib {
                LibraryRef::Path { path } => {
                    assert_eq!(
                        path.file_name().unwrap().to_str().unwrap(),
                        "libKeelScript-Development.a"
                    );
                }
                LibraryRef::Name { .. } => panic!("expected full-path references"),
            }
        }
    }

    #[test]
    fn test_android_bare_name_reference() {
        let located = locate(&module(), &profile(Platform::Android), &development(), LinkType::Monolithic);

        // Four search directories, but exactly one reference: the bare
        // stem without prefix, directory, or extension.
        assert_eq!(located.lib_dirs.len(), 4);
        assert_eq!(located.libs, [LibraryRef::name("KeelScript-Development")]);
        assert_eq!(
            located.lib_dirs[1],
            PathBuf::from("/plugin/KeelScript/lib/Android/ARM64")
        );
    }

    #[test]
    fn test_debug_crt_suffix_flows_into_file_name() {
        let mode = BuildMode::resolve(BuildConfiguration::Debug, false);
        let located = locate(&module(), &profile(Platform::Win32), &mode, LinkType::Monolithic);

        assert_eq!(
            located.libs,
            [LibraryRef::path(
                "/plugin/KeelScript/lib/Win32/VS2015/KeelScript-DebugCRTOpt.lib"
            )]
        );
        // Sanity: the mode defines are untouched by location.
        assert_eq!(mode.defines[0], Define::key_value("K_EXTRA_CHECK", "1"));
    }
}
