use serde_json::{Map, Value};
use std::collections::HashSet;

use crate::shared::validation::{field_path, index_path, ValidationIssues};

use super::document::{PortfolioDocument, StoredShape};
use super::layout::{Orientation, SectionLayout, MAX_DIMENSION};
use super::section::{Section, SectionType};
use super::style::{
    is_valid_color, BackgroundDirection, BackgroundMode, BackgroundStyle, FontFamily, PageStyle,
    SectionStyle, TextStyle, MAX_COLOR_LEN,
};

//
// ──────────────────────────────────────────────────────────
// Entry points
// ──────────────────────────────────────────────────────────
//
// Optional nested objects are either absent (missing key or null) or
// structurally valid; there is no partial acceptance.

pub fn parse_section(raw: &Value) -> Result<Section, ValidationIssues> {
    let mut issues = ValidationIssues::new();
    let section = section_at(raw, "", &mut issues);
    issues.finish(section)
}

pub fn parse_sections(raw: &Value) -> Result<Vec<Section>, ValidationIssues> {
    let mut issues = ValidationIssues::new();
    let sections = sections_at(raw, "", &mut issues);
    issues.finish(sections)
}

/// Accepts both stored shapes: a bare section array is read as
/// `{ sections: [...] }` with no page style.
pub fn parse_portfolio_document(raw: &Value) -> Result<PortfolioDocument, ValidationIssues> {
    match StoredShape::detect(raw) {
        StoredShape::Legacy(items) => {
            let mut issues = ValidationIssues::new();
            let sections = sections_at(items, "sections", &mut issues);
            issues.finish(sections.map(|sections| PortfolioDocument {
                page: None,
                sections,
            }))
        }
        StoredShape::Current(_) | StoredShape::Unrecognized => parse_current_document(raw),
    }
}

/// Client writes must already use the `{ page?, sections }` shape.
pub fn parse_current_document(raw: &Value) -> Result<PortfolioDocument, ValidationIssues> {
    let mut issues = ValidationIssues::new();
    let Some(obj) = raw.as_object() else {
        return Err(ValidationIssues::single("", "expected an object"));
    };

    let page = match present(obj, "page") {
        None => Some(None),
        Some(page) => page_style_at(page, "page", &mut issues).map(Some),
    };

    let sections = match obj.get("sections") {
        Some(items) => sections_at(items, "sections", &mut issues),
        None => {
            issues.push("sections", "is required");
            None
        }
    };

    let document = match (page, sections) {
        (Some(page), Some(sections)) => Some(PortfolioDocument { page, sections }),
        _ => None,
    };
    issues.finish(document)
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

fn sections_at(raw: &Value, path: &str, issues: &mut ValidationIssues) -> Option<Vec<Section>> {
    let Some(items) = raw.as_array() else {
        issues.push(path, "expected an array");
        return None;
    };

    let before = issues.len();
    let mut seen = HashSet::new();
    let mut sections = Vec::with_capacity(items.len());

    for (i, item) in items.iter().enumerate() {
        let item_path = index_path(path, i);
        if let Some(section) = section_at(item, &item_path, issues) {
            if !seen.insert(section.id.clone()) {
                issues.push(field_path(&item_path, "id"), "duplicates another section id");
            }
            sections.push(section);
        }
    }

    (issues.len() == before).then_some(sections)
}

fn section_at(raw: &Value, path: &str, issues: &mut ValidationIssues) -> Option<Section> {
    let Some(obj) = raw.as_object() else {
        issues.push(path, "expected an object");
        return None;
    };

    let id = match obj.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        Some(Value::String(_)) => {
            issues.push(field_path(path, "id"), "must not be empty");
            None
        }
        Some(_) => {
            issues.push(field_path(path, "id"), "expected a string");
            None
        }
        None => {
            issues.push(field_path(path, "id"), "is required");
            None
        }
    };

    let section_type = required_enum(
        obj,
        "type",
        path,
        SectionType::parse,
        SectionType::EXPECTED,
        issues,
    );

    let position = match obj.get("position") {
        Some(value) => {
            let position = as_position(value);
            if position.is_none() {
                issues.push(
                    field_path(path, "position"),
                    "expected a non-negative integer",
                );
            }
            position
        }
        None => {
            issues.push(field_path(path, "position"), "is required");
            None
        }
    };

    let content = match obj.get("content") {
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            issues.push(field_path(path, "content"), "expected an object");
            None
        }
        None => {
            issues.push(field_path(path, "content"), "is required");
            None
        }
    };

    let style = optional_at(obj, "style", path, issues, section_style_at);
    let layout = optional_at(obj, "layout", path, issues, section_layout_at);

    Some(Section {
        style: style?,
        layout: layout?,
        ..Section::with_content(id?, position?, section_type?, content?)
    })
}

fn as_position(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    // 2^64 itself is representable as f64 but not as u64
    match value.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Some(f as u64),
        _ => None,
    }
}

//
// ──────────────────────────────────────────────────────────
// Style and layout
// ──────────────────────────────────────────────────────────
//

fn page_style_at(raw: &Value, path: &str, issues: &mut ValidationIssues) -> Option<PageStyle> {
    let obj = object_at(raw, path, issues)?;
    let background = optional_at(obj, "background", path, issues, background_at)?;
    Some(PageStyle { background })
}

fn section_style_at(raw: &Value, path: &str, issues: &mut ValidationIssues) -> Option<SectionStyle> {
    let obj = object_at(raw, path, issues)?;
    let background = optional_at(obj, "background", path, issues, background_at);
    let text = optional_at(obj, "text", path, issues, text_style_at);
    Some(SectionStyle {
        background: background?,
        text: text?,
    })
}

fn background_at(
    raw: &Value,
    path: &str,
    issues: &mut ValidationIssues,
) -> Option<BackgroundStyle> {
    let obj = object_at(raw, path, issues)?;
    let before = issues.len();

    let style = BackgroundStyle {
        mode: optional_enum(
            obj,
            "mode",
            path,
            BackgroundMode::parse,
            BackgroundMode::EXPECTED,
            issues,
        ),
        color: optional_color(obj, "color", path, issues),
        from: optional_color(obj, "from", path, issues),
        to: optional_color(obj, "to", path, issues),
        direction: optional_enum(
            obj,
            "direction",
            path,
            BackgroundDirection::parse,
            BackgroundDirection::EXPECTED,
            issues,
        ),
    };

    (issues.len() == before).then_some(style)
}

fn text_style_at(raw: &Value, path: &str, issues: &mut ValidationIssues) -> Option<TextStyle> {
    let obj = object_at(raw, path, issues)?;
    let before = issues.len();

    let style = TextStyle {
        bold: optional_bool(obj, "bold", path, issues),
        italic: optional_bool(obj, "italic", path, issues),
        color: optional_color(obj, "color", path, issues),
        font: optional_enum(
            obj,
            "font",
            path,
            FontFamily::parse,
            FontFamily::EXPECTED,
            issues,
        ),
    };

    (issues.len() == before).then_some(style)
}

fn section_layout_at(
    raw: &Value,
    path: &str,
    issues: &mut ValidationIssues,
) -> Option<SectionLayout> {
    let obj = object_at(raw, path, issues)?;
    let before = issues.len();

    let layout = SectionLayout {
        x: optional_number(obj, "x", path, issues, |_| None),
        y: optional_number(obj, "y", path, issues, |_| None),
        w: optional_number(obj, "w", path, issues, dimension_problem),
        h: optional_number(obj, "h", path, issues, dimension_problem),
        orientation: optional_enum(
            obj,
            "orientation",
            path,
            Orientation::parse,
            Orientation::EXPECTED,
            issues,
        ),
    };

    (issues.len() == before).then_some(layout)
}

fn dimension_problem(v: f64) -> Option<&'static str> {
    if v <= 0.0 {
        Some("must be greater than 0")
    } else if v > MAX_DIMENSION {
        Some("must be at most 5000")
    } else {
        None
    }
}

//
// ──────────────────────────────────────────────────────────
// Field helpers
// ──────────────────────────────────────────────────────────
//

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn object_at<'a>(
    raw: &'a Value,
    path: &str,
    issues: &mut ValidationIssues,
) -> Option<&'a Map<String, Value>> {
    let obj = raw.as_object();
    if obj.is_none() {
        issues.push(path, "expected an object");
    }
    obj
}

/// `Some(None)` when the key is absent, `None` when it is present but invalid.
fn optional_at<T>(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut ValidationIssues,
    parse: impl FnOnce(&Value, &str, &mut ValidationIssues) -> Option<T>,
) -> Option<Option<T>> {
    match present(obj, key) {
        None => Some(None),
        Some(value) => parse(value, &field_path(parent, key), issues).map(Some),
    }
}

fn required_enum<T>(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    parse: impl Fn(&str) -> Option<T>,
    expected: &str,
    issues: &mut ValidationIssues,
) -> Option<T> {
    let parsed = obj.get(key).and_then(Value::as_str).and_then(parse);
    if parsed.is_none() {
        issues.push(field_path(parent, key), format!("must be one of: {expected}"));
    }
    parsed
}

fn optional_enum<T>(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    parse: impl Fn(&str) -> Option<T>,
    expected: &str,
    issues: &mut ValidationIssues,
) -> Option<T> {
    let value = present(obj, key)?;
    let parsed = value.as_str().and_then(parse);
    if parsed.is_none() {
        issues.push(field_path(parent, key), format!("must be one of: {expected}"));
    }
    parsed
}

fn optional_color(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut ValidationIssues,
) -> Option<String> {
    match present(obj, key)? {
        Value::String(color) if is_valid_color(color) => Some(color.clone()),
        _ => {
            issues.push(
                field_path(parent, key),
                format!("expected a string of 1 to {MAX_COLOR_LEN} characters"),
            );
            None
        }
    }
}

fn optional_bool(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut ValidationIssues,
) -> Option<bool> {
    let value = present(obj, key)?;
    let parsed = value.as_bool();
    if parsed.is_none() {
        issues.push(field_path(parent, key), "expected a boolean");
    }
    parsed
}

fn optional_number(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
    issues: &mut ValidationIssues,
    check: impl Fn(f64) -> Option<&'static str>,
) -> Option<f64> {
    let value = present(obj, key)?;
    let Some(number) = value.as_f64().filter(|n| n.is_finite()) else {
        issues.push(field_path(parent, key), "expected a finite number");
        return None;
    };
    if let Some(problem) = check(number) {
        issues.push(field_path(parent, key), problem);
        return None;
    }
    Some(number)
}
