//! Frame-property presentation pipeline
//!
//! Turns the raw per-frame property mapping into display rows: either one
//! flat list (raw mode) or relabeled, value-transformed rows grouped by
//! category (prettified mode). The pipeline is a pure transformation over
//! the current frame's mapping; it is rerun in full on every frame change.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::model::{
    prop_key_cmp, sorted_keys, Category, DisplayRow, FrameProps, PropValue,
};
use crate::domain::rules::{RuleSet, SAR_DEN_KEY, SAR_LABEL, SAR_NUM_KEY};

/// Value shown for a row whose formatting rule failed.
pub const ERROR_MARKER: &str = "<error>";

/// Presentation mode for frame properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Every key, generic string conversion
    Raw,
    /// Categorized, relabeled, value-transformed
    Prettified,
}

/// Rows belonging to one display category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub rows: Vec<DisplayRow>,
}

/// Presenter output for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Presentation {
    /// Flat list covering every input key
    Raw { rows: Vec<DisplayRow> },
    /// Category groups in display order, empty categories omitted
    Prettified { groups: Vec<CategoryGroup> },
}

impl Presentation {
    /// Total number of rows across the presentation.
    pub fn row_count(&self) -> usize {
        match self {
            Presentation::Raw { rows } => rows.len(),
            Presentation::Prettified { groups } => {
                groups.iter().map(|group| group.rows.len()).sum()
            }
        }
    }
}

/// The frame-property presenter.
///
/// Owns the read-only rule tables; `present` is the single entry point
/// invoked on every frame change.
pub struct Presenter {
    rules: RuleSet,
}

impl Presenter {
    /// Create a presenter over a validated rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule tables backing this presenter.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Present one frame's properties in the requested mode.
    pub fn present(&self, props: &FrameProps, mode: ViewMode) -> Presentation {
        match mode {
            ViewMode::Raw => Self::present_raw(props),
            ViewMode::Prettified => self.present_prettified(props),
        }
    }

    /// Raw mode: one row per key, generic conversion, shared key order.
    fn present_raw(props: &FrameProps) -> Presentation {
        let rows = sorted_keys(props)
            .into_iter()
            .map(|key| DisplayRow::new(key, key, props[key].to_string()))
            .collect();
        Presentation::Raw { rows }
    }

    /// Prettified mode: normalize, exclude, format, categorize, group.
    fn present_prettified(&self, props: &FrameProps) -> Presentation {
        let normalized = normalize(props);

        let mut grouped: BTreeMap<Category, Vec<DisplayRow>> = BTreeMap::new();
        for (key, value) in &normalized {
            if self.rules.is_excluded(key) {
                continue;
            }
            let row = match self.rules.format_rule(key) {
                Some(rule) => match rule.apply(key, value) {
                    Ok(Some(text)) => DisplayRow::new(key.clone(), rule.title, text),
                    Ok(None) => {
                        debug!("Rule for '{}' suppressed the row", key);
                        continue;
                    }
                    Err(err) => {
                        // One hostile value must not blank the display;
                        // keep the row visible and report the rule defect.
                        warn!("{}", err);
                        DisplayRow::new(key.clone(), rule.title, ERROR_MARKER)
                    }
                },
                None => {
                    let label = key.strip_prefix('_').unwrap_or(key);
                    DisplayRow::new(key.clone(), label, value.to_string())
                }
            };
            let category = self.rules.resolve_category(key);
            grouped.entry(category).or_default().push(row);
        }

        for rows in grouped.values_mut() {
            rows.sort_by(|a, b| prop_key_cmp(&a.key, &b.key));
        }

        // Presence is checked against the normalized mapping, so the
        // combined row appears even though the raw num/den keys are
        // excluded. Appended after the sort.
        if let (Some(num), Some(den)) = (normalized.get(SAR_NUM_KEY), normalized.get(SAR_DEN_KEY))
        {
            grouped
                .entry(Category::Video)
                .or_default()
                .push(DisplayRow::new("_SAR", SAR_LABEL, format!("{}/{}", num, den)));
        }

        let groups = grouped
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(category, rows)| CategoryGroup { category, rows })
            .collect();
        Presentation::Prettified { groups }
    }
}

/// Trim string values; every other value shape passes through unchanged.
fn normalize(props: &FrameProps) -> FrameProps {
    props
        .iter()
        .map(|(key, value)| {
            let value = match value {
                PropValue::Str(s) => PropValue::Str(s.trim().to_string()),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests;
