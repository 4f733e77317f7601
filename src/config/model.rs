use serde::{Deserialize, Serialize};

/// Root of the `.repo-guard.toml` configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub validator: ValidatorConfig,
}

/// Project-level overrides for the structure rules.
///
/// All fields are optional. `allowed_scripts_packages` is the complete set
/// of packages permitted to carry a `scripts/` directory (configuring it
/// replaces the default); the `allowed_*` file and path lists extend the
/// built-in allow-lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Packages permitted to contain a `scripts/` subdirectory.
    #[serde(default = "default_scripts_packages")]
    pub allowed_scripts_packages: Vec<String>,

    /// Package-name patterns (glob syntax) whose packages must not
    /// contain an `examples/` subdirectory.
    #[serde(default)]
    pub no_examples_patterns: Vec<String>,

    /// Additional root-level source filenames exempt from location rules.
    #[serde(default)]
    pub allowed_root_files: Vec<String>,

    /// Additional path patterns (anchored regex syntax) exempt from
    /// location rules.
    #[serde(default)]
    pub allowed_package_paths: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            allowed_scripts_packages: default_scripts_packages(),
            no_examples_patterns: Vec::new(),
            allowed_root_files: Vec::new(),
            allowed_package_paths: Vec::new(),
        }
    }
}

fn default_scripts_packages() -> Vec<String> {
    vec!["dev-tools".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
