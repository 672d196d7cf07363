// Domain rules - category tables and formatting rules for frame properties

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::model::{prop_key_cmp, Category, PropValue};
use crate::error::{FrameLensError, FrameLensResult};

mod builtin;

/// Reserved key holding the sample aspect ratio numerator.
pub const SAR_NUM_KEY: &str = "_SARNum";
/// Reserved key holding the sample aspect ratio denominator.
pub const SAR_DEN_KEY: &str = "_SARDen";
/// Label of the synthetic sample aspect ratio row.
pub const SAR_LABEL: &str = "Sample aspect ratio";

/// Value transform half of a formatting rule.
///
/// A rule either runs a transform function over the value or indexes an
/// enum-style code-to-name table. A `Map` transform returning `Ok(None)`
/// suppresses the row entirely; its error string is attributed to the
/// owning key by [`FormatRule::apply`].
pub enum ValueTransform {
    /// Free-form value transform
    Map(fn(&PropValue) -> Result<Option<String>, String>),
    /// Enum-style lookup table from integer code to display name
    Enum(&'static [(i64, &'static str)]),
}

impl ValueTransform {
    /// Short transform kind name for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            ValueTransform::Map(_) => "map",
            ValueTransform::Enum(_) => "enum",
        }
    }
}

/// Per-key formatting directive: a display title plus a value transform.
pub struct FormatRule {
    /// Display title used as the row label
    pub title: &'static str,
    /// How the raw value becomes display text
    pub transform: ValueTransform,
}

impl FormatRule {
    /// Apply the rule to a property value.
    ///
    /// `Ok(None)` means the row is suppressed. Failures carry the owning
    /// key so they can be reported against the rule that caused them.
    pub fn apply(&self, key: &str, value: &PropValue) -> FrameLensResult<Option<String>> {
        match &self.transform {
            ValueTransform::Map(transform) => {
                transform(value).map_err(|message| FrameLensError::FormatFailed {
                    key: key.to_string(),
                    message,
                })
            }
            ValueTransform::Enum(table) => {
                let code = value.as_code().ok_or_else(|| FrameLensError::FormatFailed {
                    key: key.to_string(),
                    message: format!("expected an integer code, got '{}'", value),
                })?;
                let name = table
                    .iter()
                    .find(|(candidate, _)| *candidate == code)
                    .map(|(_, name)| *name)
                    .ok_or_else(|| FrameLensError::FormatFailed {
                        key: key.to_string(),
                        message: format!("code {} is not in the enum table", code),
                    })?;
                Ok(Some(name.to_string()))
            }
        }
    }
}

/// Summary of one formatting rule, for listings and JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSummary {
    /// Property key the rule applies to
    pub key: String,
    /// Display title
    pub title: String,
    /// Transform kind ("map" or "enum")
    pub kind: &'static str,
    /// Category the key resolves to
    pub category: Category,
}

/// The static lookup tables driving prettified presentation.
///
/// Built once at startup, read-only afterwards. Construction validates the
/// tables and rejects internally inconsistent configurations.
pub struct RuleSet {
    prefix_categories: Vec<(&'static str, Category)>,
    suffix_categories: Vec<(&'static str, Category)>,
    exact_categories: HashMap<&'static str, Category>,
    excluded_keys: HashSet<&'static str>,
    format_rules: HashMap<&'static str, FormatRule>,
}

impl RuleSet {
    /// Build a rule set from its five tables.
    ///
    /// Exact-key membership must be unambiguous: a key claimed by more than
    /// one category is a configuration defect and is rejected here rather
    /// than resolved at presentation time.
    pub fn new(
        prefix_categories: Vec<(&'static str, Category)>,
        suffix_categories: Vec<(&'static str, Category)>,
        exact_members: &[(Category, &[&'static str])],
        excluded_keys: &[&'static str],
        format_rules: Vec<(&'static str, FormatRule)>,
    ) -> FrameLensResult<Self> {
        let mut exact_categories = HashMap::new();
        for (category, keys) in exact_members {
            for key in keys.iter() {
                if let Some(previous) = exact_categories.insert(*key, *category) {
                    return Err(FrameLensError::RuleConfig {
                        message: format!(
                            "exact key '{}' is assigned to both {} and {}",
                            key, previous, category
                        ),
                    });
                }
            }
        }

        let mut rules = HashMap::new();
        for (key, rule) in format_rules {
            if rules.insert(key, rule).is_some() {
                return Err(FrameLensError::RuleConfig {
                    message: format!("duplicate formatting rule for key '{}'", key),
                });
            }
        }

        Ok(Self {
            prefix_categories,
            suffix_categories,
            exact_categories,
            excluded_keys: excluded_keys.iter().copied().collect(),
            format_rules: rules,
        })
    }

    /// The built-in tables covering the standard reserved frame props.
    pub fn builtin() -> FrameLensResult<Self> {
        builtin::rule_set()
    }

    /// Whether a key is hidden from prettified output.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded_keys.contains(key)
    }

    /// Formatting rule for a key, if one is configured.
    pub fn format_rule(&self, key: &str) -> Option<&FormatRule> {
        self.format_rules.get(key)
    }

    /// Resolve the display category for a key.
    ///
    /// Lookup passes run in strict priority order: first matching prefix,
    /// then first matching suffix, then exact membership, then `Other`.
    pub fn resolve_category(&self, key: &str) -> Category {
        for (prefix, category) in &self.prefix_categories {
            if key.starts_with(prefix) {
                return *category;
            }
        }
        for (suffix, category) in &self.suffix_categories {
            if key.ends_with(suffix) {
                return *category;
            }
        }
        if let Some(category) = self.exact_categories.get(key) {
            return *category;
        }
        Category::Other
    }

    /// Summaries of all configured formatting rules, in display key order.
    pub fn rule_summaries(&self) -> Vec<RuleSummary> {
        let mut summaries: Vec<RuleSummary> = self
            .format_rules
            .iter()
            .map(|(key, rule)| RuleSummary {
                key: (*key).to_string(),
                title: rule.title.to_string(),
                kind: rule.transform.kind(),
                category: self.resolve_category(key),
            })
            .collect();
        summaries.sort_by(|a, b| prop_key_cmp(&a.key, &b.key));
        summaries
    }

    /// Number of configured formatting rules.
    pub fn rule_count(&self) -> usize {
        self.format_rules.len()
    }
}
