//! Configuration file support.
//!
//! A config file is a JSON object; every field is optional:
//!
//! ```json
//! {
//!   "mask_scope": "all_rules",
//!   "disabled_rules": ["trailing-comma"]
//! }
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use strictjson_lint::{MaskScope, RuleRegistry, ValidatorOptions};

/// Settings applied to every file of a validate run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Which rules ignore string contents.
    pub mask_scope: MaskScope,
    /// Rule IDs that are not run.
    pub disabled_rules: Vec<String>,
}

impl LintConfig {
    /// Parse a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Loads the config file if one was given, otherwise the defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, mask_strings: bool, disable_rules: &[String]) -> Self {
        if mask_strings {
            self.mask_scope = MaskScope::AllRules;
        }
        for rule_id in disable_rules {
            if !self.disabled_rules.contains(rule_id) {
                self.disabled_rules.push(rule_id.clone());
            }
        }
        self
    }

    /// Builds the rule registry described by this config.
    ///
    /// Fails on rule IDs that do not name a registered rule.
    pub fn build_registry(&self) -> Result<RuleRegistry> {
        let mut registry = RuleRegistry::default_rules().with_options(ValidatorOptions {
            mask_scope: self.mask_scope,
        });

        for rule_id in &self.disabled_rules {
            if !registry.contains(rule_id) {
                bail!(
                    "unknown rule '{}' (run `strictjson rules` to list rule IDs)",
                    rule_id
                );
            }
            registry.disable_rule(rule_id);
        }

        Ok(registry)
    }
}
