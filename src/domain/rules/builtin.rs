// Built-in tables for the standard reserved frame props.
//
// Enum code tables follow the ITU-T H.273 numbering that decoders attach
// to frames (_Matrix 1 = BT.709, _Transfer 16 = PQ, and so on).

use crate::domain::model::{Category, PropValue};
use crate::error::FrameLensResult;

use super::{FormatRule, RuleSet, ValueTransform};

const MATRIX_NAMES: &[(i64, &str)] = &[
    (0, "RGB"),
    (1, "BT.709"),
    (2, "Unspecified"),
    (4, "FCC"),
    (5, "BT.470bg"),
    (6, "ST 170M"),
    (7, "ST 240M"),
    (8, "YCgCo"),
    (9, "BT.2020 NCL"),
    (10, "BT.2020 CL"),
    (12, "Chromaticity-derived NCL"),
    (13, "Chromaticity-derived CL"),
    (14, "ICtCp"),
];

const TRANSFER_NAMES: &[(i64, &str)] = &[
    (1, "BT.709"),
    (2, "Unspecified"),
    (4, "Gamma 2.2"),
    (5, "Gamma 2.8"),
    (6, "BT.601"),
    (7, "ST 240M"),
    (8, "Linear"),
    (9, "Log 100:1"),
    (10, "Log 316.22777:1"),
    (11, "xvYCC"),
    (13, "sRGB"),
    (14, "BT.2020 (10 bit)"),
    (15, "BT.2020 (12 bit)"),
    (16, "ST 2084 (PQ)"),
    (17, "ST 428"),
    (18, "ARIB std-b67 (HLG)"),
];

const PRIMARIES_NAMES: &[(i64, &str)] = &[
    (1, "BT.709"),
    (2, "Unspecified"),
    (4, "BT.470m"),
    (5, "BT.470bg"),
    (6, "ST 170M"),
    (7, "ST 240M"),
    (8, "Film"),
    (9, "BT.2020"),
    (10, "ST 428 (XYZ)"),
    (11, "ST 431-2 (DCI-P3)"),
    (12, "ST 432-1 (Display-P3)"),
    (22, "EBU 3213-E (JEDEC P22)"),
];

const RANGE_NAMES: &[(i64, &str)] = &[(0, "Full"), (1, "Limited")];

const CHROMA_LOCATION_NAMES: &[(i64, &str)] = &[
    (0, "Left"),
    (1, "Center"),
    (2, "Top left"),
    (3, "Top"),
    (4, "Bottom left"),
    (5, "Bottom"),
];

const FIELD_BASED_NAMES: &[(i64, &str)] = &[
    (0, "Progressive"),
    (1, "Bottom field first"),
    (2, "Top field first"),
];

const YES_NO_NAMES: &[(i64, &str)] = &[(0, "No"), (1, "Yes")];

/// Picture type arrives as a one-character string or byte; empty values
/// suppress the row.
fn picture_type(value: &PropValue) -> Result<Option<String>, String> {
    let text = value
        .as_text()
        .ok_or_else(|| format!("expected a picture type string, got '{}'", value))?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_uppercase()))
}

fn absolute_time(value: &PropValue) -> Result<Option<String>, String> {
    let seconds = value
        .as_f64()
        .ok_or_else(|| format!("expected a numeric timestamp, got '{}'", value))?;
    Ok(Some(format!("{:.3} s", seconds)))
}

fn passthrough(value: &PropValue) -> Result<Option<String>, String> {
    Ok(Some(value.to_string()))
}

fn rule(title: &'static str, transform: ValueTransform) -> FormatRule {
    FormatRule { title, transform }
}

/// Build the process-wide rule set.
pub(super) fn rule_set() -> FrameLensResult<RuleSet> {
    let prefix_categories = vec![
        ("_SceneChange", Category::Video),
        ("_Duration", Category::Video),
        ("_SAR", Category::Video),
        ("_Audio", Category::Audio),
    ];

    let suffix_categories = vec![("Subs", Category::Text), ("Text", Category::Text)];

    let exact_members: &[(Category, &[&'static str])] = &[(
        Category::Video,
        &[
            "_Alpha",
            "_AbsoluteTime",
            "_ChromaLocation",
            "_ColorRange",
            "_Combed",
            "_FieldBased",
            "_Matrix",
            "_PictType",
            "_Primaries",
            "_Transfer",
        ],
    )];

    // _SARNum/_SARDen are replaced by the synthetic combined row; _Alpha is
    // a frame reference with no displayable value.
    let excluded_keys: &[&'static str] = &["_SARNum", "_SARDen", "_Alpha"];

    let format_rules = vec![
        (
            "_AbsoluteTime",
            rule("Absolute time", ValueTransform::Map(absolute_time)),
        ),
        (
            "_ChromaLocation",
            rule(
                "Chroma location",
                ValueTransform::Enum(CHROMA_LOCATION_NAMES),
            ),
        ),
        (
            "_ColorRange",
            rule("Color range", ValueTransform::Enum(RANGE_NAMES)),
        ),
        ("_Combed", rule("Combed", ValueTransform::Enum(YES_NO_NAMES))),
        (
            "_DurationDen",
            rule("Frame duration (denominator)", ValueTransform::Map(passthrough)),
        ),
        (
            "_DurationNum",
            rule("Frame duration (numerator)", ValueTransform::Map(passthrough)),
        ),
        (
            "_FieldBased",
            rule("Field order", ValueTransform::Enum(FIELD_BASED_NAMES)),
        ),
        (
            "_Matrix",
            rule("Matrix coefficients", ValueTransform::Enum(MATRIX_NAMES)),
        ),
        (
            "_PictType",
            rule("Picture type", ValueTransform::Map(picture_type)),
        ),
        (
            "_Primaries",
            rule("Color primaries", ValueTransform::Enum(PRIMARIES_NAMES)),
        ),
        (
            "_SceneChangeNext",
            rule("Scene change (next)", ValueTransform::Enum(YES_NO_NAMES)),
        ),
        (
            "_SceneChangePrev",
            rule("Scene change (previous)", ValueTransform::Enum(YES_NO_NAMES)),
        ),
        (
            "_Transfer",
            rule(
                "Transfer characteristics",
                ValueTransform::Enum(TRANSFER_NAMES),
            ),
        ),
    ];

    RuleSet::new(
        prefix_categories,
        suffix_categories,
        exact_members,
        excluded_keys,
        format_rules,
    )
}
