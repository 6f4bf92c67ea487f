//! Rule registry: runs every enabled rule and merges the findings.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::options::ValidatorOptions;
use crate::report::{Severity, ValidationResult};
use crate::rules::{self, Rule};
use crate::source::SourceFile;

/// Registry of the rules applied to each input.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    disabled_rules: HashSet<String>,
    options: ValidatorOptions,
}

impl RuleRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            disabled_rules: HashSet::new(),
            options: ValidatorOptions::default(),
        }
    }

    /// Creates a registry with all built-in rules registered.
    pub fn default_rules() -> Self {
        let mut registry = Self::new();
        for rule in rules::all_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Replaces the options passed to every rule.
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Registers a new rule. Rules run in registration order.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Disables a rule by ID.
    pub fn disable_rule(&mut self, rule_id: &str) {
        self.disabled_rules.insert(rule_id.to_string());
    }

    /// Returns all registered rules.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Returns rule metadata for documentation/introspection.
    pub fn rule_metadata(&self) -> Vec<RuleMetadata> {
        self.rules
            .iter()
            .map(|r| RuleMetadata {
                id: r.id().to_string(),
                description: r.description().to_string(),
                severity: r.default_severity(),
                enabled: self.is_rule_enabled(r.id()),
            })
            .collect()
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns true if `rule_id` names a registered rule.
    pub fn contains(&self, rule_id: &str) -> bool {
        self.rules.iter().any(|r| r.id() == rule_id)
    }

    fn is_rule_enabled(&self, rule_id: &str) -> bool {
        !self.disabled_rules.contains(rule_id)
    }

    /// Runs all enabled rules over the same text.
    ///
    /// Diagnostics keep the order in which rules were registered and, within
    /// a rule, the order in which they occur in the text.
    pub fn validate(&self, source: &str) -> ValidationResult {
        ValidationResult::from_diagnostics(
            self.rules
                .iter()
                .filter(|rule| self.is_rule_enabled(rule.id()))
                .flat_map(|rule| rule.check(source, &self.options)),
        )
    }

    /// Reads and validates a file.
    ///
    /// If the file cannot be read the result holds a single `file-error`
    /// diagnostic and no rule is run.
    pub fn validate_file(&self, path: &Path) -> ValidationResult {
        match SourceFile::load(path) {
            Ok(source) => self.validate(&source.text),
            Err(e) => ValidationResult::file_error(&e),
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::default_rules()
    }
}

/// Metadata about a rule for documentation/introspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    /// Rule identifier.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Severity of the rule's diagnostics.
    pub severity: Severity,
    /// False if the rule was disabled on this registry.
    pub enabled: bool,
}
