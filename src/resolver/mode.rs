//! Build mode resolution - configuration to defines and library suffix.
//!
//! Every module's assembler consults this one resolver, so defines can
//! never drift between modules built for the same target.

use crate::core::plan::Define;
use crate::core::target::BuildConfiguration;

/// Defines and library-name suffix derived from the build configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMode {
    /// Configuration defines, in emission order
    pub defines: Vec<Define>,

    /// Suffix appended to library artifact name stems
    pub lib_suffix: &'static str,
}

impl BuildMode {
    /// Resolve the build mode for a configuration.
    ///
    /// `use_debug_runtime` is the derived boolean
    /// `profile.forces_debug_runtime || target.debug_runtime`; the caller
    /// computes it from the platform profile before the suffix is chosen.
    /// Debug artifacts built against the optimized C runtime carry the
    /// `-DebugCRTOpt` suffix instead of `-Debug`.
    pub fn resolve(configuration: BuildConfiguration, use_debug_runtime: bool) -> BuildMode {
        match configuration {
            BuildConfiguration::Debug | BuildConfiguration::DebugGame => BuildMode {
                defines: vec![
                    Define::key_value("K_EXTRA_CHECK", "1"),
                    Define::key_value("K_UNOPTIMIZED", "1"),
                ],
                lib_suffix: if use_debug_runtime {
                    "-Debug"
                } else {
                    "-DebugCRTOpt"
                },
            },
            BuildConfiguration::Development | BuildConfiguration::Test => BuildMode {
                defines: vec![Define::key_value("K_EXTRA_CHECK", "1")],
                lib_suffix: "-Development",
            },
            BuildConfiguration::Shipping => BuildMode {
                defines: vec![
                    Define::key_value("K_SYMBOL_DB", "1"),
                    Define::key_value("K_NO_SYMBOL_REF_LINK", "1"),
                ],
                lib_suffix: "-Shipping",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_buckets_share_defines() {
        for configuration in [BuildConfiguration::Debug, BuildConfiguration::DebugGame] {
            let mode = BuildMode::resolve(configuration, true);
            assert_eq!(
                mode.defines,
                vec![
                    Define::key_value("K_EXTRA_CHECK", "1"),
                    Define::key_value("K_UNOPTIMIZED", "1"),
                ]
            );
            assert_eq!(mode.lib_suffix, "-Debug");
        }
    }

    #[test]
    fn test_debug_without_debug_runtime_changes_suffix() {
        let mode = BuildMode::resolve(BuildConfiguration::Debug, false);
        assert_eq!(mode.lib_suffix, "-DebugCRTOpt");
        // Defines are unchanged; only the artifact naming differs.
        assert_eq!(mode.defines.len(), 2);
    }

    #[test]
    fn test_development_and_test_collapse() {
        for configuration in [BuildConfiguration::Development, BuildConfiguration::Test] {
            let mode = BuildMode::resolve(configuration, false);
            assert_eq!(mode.defines, vec![Define::key_value("K_EXTRA_CHECK", "1")]);
            assert_eq!(mode.lib_suffix, "-Development");
        }
    }

    #[test]
    fn test_shipping() {
        let mode = BuildMode::resolve(BuildConfiguration::Shipping, true);
        assert_eq!(
            mode.defines,
            vec![
                Define::key_value("K_SYMBOL_DB", "1"),
                Define::key_value("K_NO_SYMBOL_REF_LINK", "1"),
            ]
        );
        assert_eq!(mode.lib_suffix, "-Shipping");
        // The debug runtime never affects shipping naming.
        assert_eq!(
            BuildMode::resolve(BuildConfiguration::Shipping, false).lib_suffix,
            "-Shipping"
        );
    }
}
