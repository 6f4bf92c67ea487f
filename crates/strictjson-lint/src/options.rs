//! Validator configuration.

use serde::{Deserialize, Serialize};

/// Which rules scan string-masked text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskScope {
    /// Only the single-line comment rule ignores string contents. Block
    /// comments and trailing commas are matched on the raw text, so a
    /// `/* */` or `,]` inside a string value is reported.
    #[default]
    SingleLineComments,
    /// Every pattern-based rule runs on string-masked text.
    AllRules,
}

/// Options shared by all rules in a registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    pub mask_scope: MaskScope,
}

impl ValidatorOptions {
    /// Options with string masking enabled for every rule.
    pub fn mask_all() -> Self {
        Self {
            mask_scope: MaskScope::AllRules,
        }
    }

    /// True if block-comment and trailing-comma rules should scan masked text.
    pub fn masks_all_rules(&self) -> bool {
        self.mask_scope == MaskScope::AllRules
    }
}
