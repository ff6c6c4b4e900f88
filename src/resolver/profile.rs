//! Platform profile table.
//!
//! One profile per supported platform, centralizing every per-platform
//! quirk the rest of the resolver needs: artifact naming, path suffixes,
//! debug-runtime forcing, the platform define, and the handful of named
//! exceptions that would otherwise sprawl through call sites.

use std::path::PathBuf;

use crate::core::plan::Define;
use crate::core::target::{Platform, ToolchainVariant};

/// Static per-platform build facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Platform this profile describes
    pub platform: Platform,

    /// Library file extension, including the dot
    pub lib_extension: &'static str,

    /// Library file name prefix (`lib` on Unix-like platforms)
    pub lib_prefix: &'static str,

    /// Per-variant subdirectories of a module's `lib/` directory.
    /// Multi-architecture platforms carry one entry per architecture.
    pub path_suffixes: Vec<PathBuf>,

    /// Debug builds always use the debug C runtime on this platform,
    /// regardless of the host's policy.
    pub forces_debug_runtime: bool,

    /// Platform identification define, if the platform has one
    pub platform_define: Option<Define>,

    /// Whether prebuilt libraries are distributed for this platform.
    /// Console platforms require full source.
    pub precompiled_allowed: bool,

    /// Import libraries for per-module shared-library builds carry the
    /// platform tag in their name (Win64 editor builds).
    pub import_lib_naming: bool,

    /// The packaging stage resolves the final artifact name itself; the
    /// locator must emit a bare name instead of full paths (Android).
    pub late_bound_reference: bool,

    /// Prebuilt libraries are built shared-library-compatible, so linking
    /// them always needs the shared-library define, independent of link
    /// type (Mac universal libraries).
    pub shared_define_on_precompiled: bool,
}

impl PlatformProfile {
    /// Look up the profile for a platform.
    ///
    /// Total over the closed [`Platform`] enumeration. The toolchain
    /// variant selects the compiler subfolder on Windows and is ignored
    /// elsewhere.
    pub fn lookup(platform: Platform, toolchain: ToolchainVariant) -> PlatformProfile {
        match platform {
            Platform::Win32 | Platform::Win64 => PlatformProfile {
                platform,
                lib_extension: ".lib",
                lib_prefix: "",
                path_suffixes: vec![PathBuf::from(platform.tag()).join(toolchain.vs_folder())],
                forces_debug_runtime: false,
                platform_define: None,
                precompiled_allowed: true,
                import_lib_naming: platform == Platform::Win64,
                late_bound_reference: false,
                shared_define_on_precompiled: false,
            },
            Platform::Mac => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![PathBuf::from("Mac")],
                forces_debug_runtime: true,
                platform_define: Some(Define::flag("K_PLAT_OSX")),
                precompiled_allowed: true,
                import_lib_naming: false,
                late_bound_reference: false,
                shared_define_on_precompiled: true,
            },
            Platform::Linux => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![PathBuf::from("Linux")],
                forces_debug_runtime: true,
                platform_define: Some(Define::flag("K_PLAT_LINUX64")),
                precompiled_allowed: true,
                import_lib_naming: false,
                late_bound_reference: false,
                shared_define_on_precompiled: false,
            },
            Platform::Ios => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![PathBuf::from("IOS")],
                forces_debug_runtime: true,
                platform_define: Some(Define::flag("K_PLAT_IOS")),
                precompiled_allowed: true,
                import_lib_naming: false,
                late_bound_reference: false,
                shared_define_on_precompiled: false,
            },
            Platform::Tvos => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![PathBuf::from("TVOS")],
                forces_debug_runtime: true,
                platform_define: Some(Define::flag("K_PLAT_TVOS")),
                precompiled_allowed: true,
                import_lib_naming: false,
                late_bound_reference: false,
                shared_define_on_precompiled: false,
            },
            Platform::Android => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![
                    PathBuf::from("Android").join("ARM"),
                    PathBuf::from("Android").join("ARM64"),
                    PathBuf::from("Android").join("x86"),
                    PathBuf::from("Android").join("x64"),
                ],
                forces_debug_runtime: true,
                platform_define: Some(Define::flag("K_PLAT_ANDROID")),
                precompiled_allowed: true,
                import_lib_naming: false,
                late_bound_reference: true,
                shared_define_on_precompiled: false,
            },
            Platform::XboxOne => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![PathBuf::from("XOne")],
                forces_debug_runtime: false,
                platform_define: Some(Define::flag("K_PLAT_XONE")),
                precompiled_allowed: false,
                import_lib_naming: false,
                late_bound_reference: false,
                shared_define_on_precompiled: false,
            },
            Platform::Ps4 => PlatformProfile {
                platform,
                lib_extension: ".a",
                lib_prefix: "lib",
                path_suffixes: vec![PathBuf::from("PS4")],
                forces_debug_runtime: false,
                platform_define: Some(Define::flag("K_PLAT_PS4")),
                precompiled_allowed: false,
                import_lib_naming: false,
                late_bound_reference: false,
                shared_define_on_precompiled: false,
            },
        }
    }

    /// The platform tag used in import-library name stems.
    pub fn platform_tag(&self) -> &'static str {
        self.platform.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_total_and_suffixes_non_empty() {
        for platform in Platform::ALL {
            let profile = PlatformProfile::lookup(platform, ToolchainVariant::Msvc2015);
            assert_eq!(profile.platform, platform);
            assert!(!profile.path_suffixes.is_empty());
        }
    }

    #[test]
    fn test_windows_compiler_subfolder() {
        let p2015 = PlatformProfile::lookup(Platform::Win64, ToolchainVariant::Msvc2015);
        assert_eq!(p2015.path_suffixes, [PathBuf::from("Win64/VS2015")]);
        assert_eq!(p2015.lib_extension, ".lib");
        assert_eq!(p2015.lib_prefix, "");

        let p2013 = PlatformProfile::lookup(Platform::Win32, ToolchainVariant::Msvc2013);
        assert_eq!(p2013.path_suffixes, [PathBuf::from("Win32/VS2013")]);
        assert!(!p2013.import_lib_naming);
    }

    #[test]
    fn test_only_win64_uses_import_lib_naming() {
        for platform in Platform::ALL {
            let profile = PlatformProfile::lookup(platform, ToolchainVariant::Msvc2015);
            assert_eq!(profile.import_lib_naming, platform == Platform::Win64);
        }
    }

    #[test]
    fn test_android_is_multi_arch_and_late_bound() {
        let profile = PlatformProfile::lookup(Platform::Android, ToolchainVariant::Msvc2015);
        assert_eq!(profile.path_suffixes.len(), 4);
        assert!(profile.late_bound_reference);
    }

    #[test]
    fn test_consoles_disallow_precompiled() {
        for platform in [Platform::XboxOne, Platform::Ps4] {
            let profile = PlatformProfile::lookup(platform, ToolchainVariant::Msvc2015);
            assert!(!profile.precompiled_allowed);
        }
    }

    #[test]
    fn test_mac_carries_shared_define_exception() {
        for platform in Platform::ALL {
            let profile = PlatformProfile::lookup(platform, ToolchainVariant::Msvc2015);
            assert_eq!(
                profile.shared_define_on_precompiled,
                platform == Platform::Mac
            );
        }
    }

    #[test]
    fn test_desktop_unix_forces_debug_runtime() {
        assert!(PlatformProfile::lookup(Platform::Linux, ToolchainVariant::Msvc2015)
            .forces_debug_runtime);
        assert!(!PlatformProfile::lookup(Platform::Win64, ToolchainVariant::Msvc2015)
            .forces_debug_runtime);
    }
}
