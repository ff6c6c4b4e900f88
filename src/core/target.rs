//! Target description - what environment a module is being built for.
//!
//! A [`TargetDescriptor`] is the immutable input to plan resolution: the
//! platform, the Windows toolchain variant, the build configuration, the
//! link mode, and the debug-runtime policy inherited from the host build.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target platform for a build.
///
/// This is a closed enumeration; every supported platform has an entry in
/// the platform profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Win32,
    Win64,
    Mac,
    Linux,
    Ios,
    Tvos,
    Android,
    #[serde(alias = "xone")]
    XboxOne,
    Ps4,
}

impl Platform {
    /// All supported platforms, in profile-table order.
    pub const ALL: [Platform; 9] = [
        Platform::Win32,
        Platform::Win64,
        Platform::Mac,
        Platform::Linux,
        Platform::Ios,
        Platform::Tvos,
        Platform::Android,
        Platform::XboxOne,
        Platform::Ps4,
    ];

    /// The platform tag used in artifact paths and import-library names
    /// (e.g. `Win64`, `Android`).
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Win32 => "Win32",
            Platform::Win64 => "Win64",
            Platform::Mac => "Mac",
            Platform::Linux => "Linux",
            Platform::Ios => "IOS",
            Platform::Tvos => "TVOS",
            Platform::Android => "Android",
            Platform::XboxOne => "XOne",
            Platform::Ps4 => "PS4",
        }
    }

    /// Get the platform name as a string (the CLI/serde token).
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Win32 => "win32",
            Platform::Win64 => "win64",
            Platform::Mac => "mac",
            Platform::Linux => "linux",
            Platform::Ios => "ios",
            Platform::Tvos => "tvos",
            Platform::Android => "android",
            Platform::XboxOne => "xboxone",
            Platform::Ps4 => "ps4",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "win32" => Ok(Platform::Win32),
            "win64" | "windows" => Ok(Platform::Win64),
            "mac" | "macos" => Ok(Platform::Mac),
            "linux" => Ok(Platform::Linux),
            "ios" => Ok(Platform::Ios),
            "tvos" => Ok(Platform::Tvos),
            "android" => Ok(Platform::Android),
            "xboxone" | "xone" => Ok(Platform::XboxOne),
            "ps4" => Ok(Platform::Ps4),
            _ => Err(PlatformParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid platform string.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid platform '{}', valid values: win32, win64, mac, linux, ios, tvos, android, xboxone, ps4",
            self.0
        )
    }
}

impl std::error::Error for PlatformParseError {}

/// Build configuration requested by the host build.
///
/// Four of the five values collapse into three behavior buckets when
/// resolving defines and the library-name suffix; see
/// [`crate::resolver::mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    Debug,
    #[serde(alias = "debug-game")]
    DebugGame,
    #[default]
    Development,
    Test,
    Shipping,
}

impl BuildConfiguration {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "debug",
            BuildConfiguration::DebugGame => "debuggame",
            BuildConfiguration::Development => "development",
            BuildConfiguration::Test => "test",
            BuildConfiguration::Shipping => "shipping",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildConfiguration {
    type Err = BuildConfigurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "debuggame" | "debug-game" => Ok(BuildConfiguration::DebugGame),
            "development" | "dev" => Ok(BuildConfiguration::Development),
            "test" => Ok(BuildConfiguration::Test),
            "shipping" => Ok(BuildConfiguration::Shipping),
            _ => Err(BuildConfigurationParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid build configuration string.
#[derive(Debug, Clone)]
pub struct BuildConfigurationParseError(pub String);

impl fmt::Display for BuildConfigurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid configuration '{}', valid values: debug, debuggame, development, test, shipping",
            self.0
        )
    }
}

impl std::error::Error for BuildConfigurationParseError {}

/// How modules are packaged into the final image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// All modules combined into one executable image.
    #[default]
    Monolithic,
    /// Shared-library-per-module packaging.
    Modular,
}

impl LinkType {
    pub fn is_monolithic(&self) -> bool {
        matches!(self, LinkType::Monolithic)
    }
}

/// Windows toolchain variant, selecting the compiler subfolder prebuilt
/// artifacts were produced with. Ignored on non-Windows platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolchainVariant {
    Msvc2013,
    #[default]
    Msvc2015,
    Msvc2017,
}

impl ToolchainVariant {
    /// Subfolder name under the platform path suffix.
    ///
    /// MSVC 2015 and 2017 produce link-compatible libraries and share one
    /// folder.
    pub fn vs_folder(&self) -> &'static str {
        match self {
            ToolchainVariant::Msvc2013 => "VS2013",
            ToolchainVariant::Msvc2015 | ToolchainVariant::Msvc2017 => "VS2015",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolchainVariant::Msvc2013 => "msvc2013",
            ToolchainVariant::Msvc2015 => "msvc2015",
            ToolchainVariant::Msvc2017 => "msvc2017",
        }
    }
}

impl fmt::Display for ToolchainVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolchainVariant {
    type Err = ToolchainVariantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "msvc2013" | "2013" => Ok(ToolchainVariant::Msvc2013),
            "msvc2015" | "2015" => Ok(ToolchainVariant::Msvc2015),
            "msvc2017" | "2017" => Ok(ToolchainVariant::Msvc2017),
            _ => Err(ToolchainVariantParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid toolchain variant string.
#[derive(Debug, Clone)]
pub struct ToolchainVariantParseError(pub String);

impl fmt::Display for ToolchainVariantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid toolchain '{}', valid values: msvc2013, msvc2015, msvc2017",
            self.0
        )
    }
}

impl std::error::Error for ToolchainVariantParseError {}

/// Complete description of the build target a plan is resolved for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Target platform
    pub platform: Platform,

    /// Windows toolchain variant (ignored elsewhere)
    #[serde(default)]
    pub toolchain: ToolchainVariant,

    /// Build configuration
    pub configuration: BuildConfiguration,

    /// Link mode
    pub link_type: LinkType,

    /// Host policy: debug builds use the debug C runtime.
    ///
    /// Some platforms force this on regardless; see the platform profile.
    #[serde(default)]
    pub debug_runtime: bool,
}

impl TargetDescriptor {
    /// Create a descriptor with the default toolchain and debug-runtime
    /// policy.
    pub fn new(platform: Platform, configuration: BuildConfiguration, link_type: LinkType) -> Self {
        TargetDescriptor {
            platform,
            toolchain: ToolchainVariant::default(),
            configuration,
            link_type,
            debug_runtime: false,
        }
    }

    /// Set the Windows toolchain variant.
    pub fn with_toolchain(mut self, toolchain: ToolchainVariant) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Set the debug-runtime policy.
    pub fn with_debug_runtime(mut self, debug_runtime: bool) -> Self {
        self.debug_runtime = debug_runtime;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_parsing() {
        assert_eq!("win64".parse::<Platform>().unwrap(), Platform::Win64);
        assert_eq!("Mac".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("xone".parse::<Platform>().unwrap(), Platform::XboxOne);
        assert!("amiga".parse::<Platform>().is_err());
    }

    #[test]
    fn test_platform_tag() {
        assert_eq!(Platform::Win64.tag(), "Win64");
        assert_eq!(Platform::XboxOne.tag(), "XOne");
        assert_eq!(Platform::Ios.tag(), "IOS");
    }

    #[test]
    fn test_configuration_parsing() {
        assert_eq!(
            "debuggame".parse::<BuildConfiguration>().unwrap(),
            BuildConfiguration::DebugGame
        );
        assert_eq!(
            "Shipping".parse::<BuildConfiguration>().unwrap(),
            BuildConfiguration::Shipping
        );
        assert!("profile".parse::<BuildConfiguration>().is_err());
    }

    #[test]
    fn test_toolchain_vs_folder() {
        assert_eq!(ToolchainVariant::Msvc2013.vs_folder(), "VS2013");
        assert_eq!(ToolchainVariant::Msvc2015.vs_folder(), "VS2015");
        assert_eq!(ToolchainVariant::Msvc2017.vs_folder(), "VS2015");
    }

    #[test]
    fn test_descriptor_builder() {
        let target = TargetDescriptor::new(
            Platform::Win64,
            BuildConfiguration::Development,
            LinkType::Modular,
        )
        .with_toolchain(ToolchainVariant::Msvc2017)
        .with_debug_runtime(true);

        assert_eq!(target.toolchain, ToolchainVariant::Msvc2017);
        assert!(target.debug_runtime);
        assert!(!target.link_type.is_monolithic());
    }
}
