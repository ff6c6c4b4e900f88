//! Declarative module configuration.
//!
//! Projects embedding Keel list their script-supported modules in
//! `config/keel.toml` under the plugin or project root:
//!
//! ```toml
//! [modules]
//! script_supported = ["GameCore", "UiWidgets"]
//! ```
//!
//! Absence of the file or the key is not an error; both mean an empty
//! list.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Location of the config file relative to the config root.
pub const CONFIG_REL_PATH: &str = "config/keel.toml";

/// Parsed `keel.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeelConfig {
    /// Module settings
    pub modules: ModulesSection,
}

/// The `[modules]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModulesSection {
    /// Ordered list of script-supported module names
    pub script_supported: Option<Vec<String>>,
}

impl KeelConfig {
    /// Parse config file contents.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The script-supported module list, empty if the key is absent.
    pub fn script_supported(&self) -> &[String] {
        self.modules.script_supported.as_deref().unwrap_or(&[])
    }
}

/// Path of the config file under a config root.
pub fn config_path(config_root: &Path) -> PathBuf {
    config_root.join(CONFIG_REL_PATH)
}
