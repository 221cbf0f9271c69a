use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const MAX_COLOR_LEN: usize = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    #[default]
    Solid,
    Gradient,
}

impl BackgroundMode {
    pub const EXPECTED: &'static str = "solid, gradient";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "solid" => Some(Self::Solid),
            "gradient" => Some(Self::Gradient),
            _ => None,
        }
    }
}

/// Gradient direction, one of the eight compass codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub enum BackgroundDirection {
    #[default]
    #[serde(rename = "to-r")]
    ToRight,
    #[serde(rename = "to-l")]
    ToLeft,
    #[serde(rename = "to-b")]
    ToBottom,
    #[serde(rename = "to-t")]
    ToTop,
    #[serde(rename = "to-br")]
    ToBottomRight,
    #[serde(rename = "to-bl")]
    ToBottomLeft,
    #[serde(rename = "to-tr")]
    ToTopRight,
    #[serde(rename = "to-tl")]
    ToTopLeft,
}

impl BackgroundDirection {
    pub const EXPECTED: &'static str = "to-r, to-l, to-b, to-t, to-br, to-bl, to-tr, to-tl";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "to-r" => Some(Self::ToRight),
            "to-l" => Some(Self::ToLeft),
            "to-b" => Some(Self::ToBottom),
            "to-t" => Some(Self::ToTop),
            "to-br" => Some(Self::ToBottomRight),
            "to-bl" => Some(Self::ToBottomLeft),
            "to-tr" => Some(Self::ToTopRight),
            "to-tl" => Some(Self::ToTopLeft),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToRight => "to-r",
            Self::ToLeft => "to-l",
            Self::ToBottom => "to-b",
            Self::ToTop => "to-t",
            Self::ToBottomRight => "to-br",
            Self::ToBottomLeft => "to-bl",
            Self::ToTopRight => "to-tr",
            Self::ToTopLeft => "to-tl",
        }
    }
}

/// Background as authored: every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BackgroundStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BackgroundMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<BackgroundDirection>,
}

impl BackgroundStyle {
    pub fn solid(color: impl Into<String>) -> Self {
        Self {
            mode: Some(BackgroundMode::Solid),
            color: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn normalized(&self) -> NormalizedBackground {
        NormalizedBackground {
            mode: self.mode.unwrap_or_default(),
            color: color_or_default(self.color.as_deref()),
            from: color_or_default(self.from.as_deref()),
            to: color_or_default(self.to.as_deref()),
            direction: self.direction.unwrap_or_default(),
        }
    }
}

/// Background with every field resolved, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NormalizedBackground {
    pub mode: BackgroundMode,
    #[schema(example = "#ffffff")]
    pub color: String,
    #[schema(example = "#ffffff")]
    pub from: String,
    #[schema(example = "#ffffff")]
    pub to: String,
    pub direction: BackgroundDirection,
}

impl Default for NormalizedBackground {
    fn default() -> Self {
        BackgroundStyle::default().normalized()
    }
}

/// Page-level styling, currently only the canvas background.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStyle>,
}

impl PageStyle {
    pub fn normalized_background(&self) -> NormalizedBackground {
        self.background
            .as_ref()
            .map(BackgroundStyle::normalized)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    pub const EXPECTED: &'static str = "sans, serif, mono";

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "sans" => Some(Self::Sans),
            "serif" => Some(Self::Serif),
            "mono" => Some(Self::Mono),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFamily>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

impl SectionStyle {
    pub fn normalized_background(&self) -> NormalizedBackground {
        self.background
            .as_ref()
            .map(BackgroundStyle::normalized)
            .unwrap_or_default()
    }
}

/// Resolves an arbitrary value into a complete background. Unknown modes,
/// directions and unusable colors fall back silently.
pub fn normalize_background_style(raw: &Value) -> NormalizedBackground {
    let Some(obj) = raw.as_object() else {
        return NormalizedBackground::default();
    };

    let text = |key: &str| obj.get(key).and_then(Value::as_str);

    BackgroundStyle {
        mode: text("mode").and_then(BackgroundMode::parse),
        color: text("color").map(str::to_string),
        from: text("from").map(str::to_string),
        to: text("to").map(str::to_string),
        direction: text("direction").and_then(BackgroundDirection::parse),
    }
    .normalized()
}

pub fn is_valid_color(raw: &str) -> bool {
    let len = raw.chars().count();
    (1..=MAX_COLOR_LEN).contains(&len)
}

fn color_or_default(raw: Option<&str>) -> String {
    raw.filter(|c| is_valid_color(c))
        .unwrap_or(DEFAULT_BACKGROUND_COLOR)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input_yields_full_defaults() {
        let bg = normalize_background_style(&json!({}));
        assert_eq!(bg.mode, BackgroundMode::Solid);
        assert_eq!(bg.color, "#ffffff");
        assert_eq!(bg.from, "#ffffff");
        assert_eq!(bg.to, "#ffffff");
        assert_eq!(bg.direction, BackgroundDirection::ToRight);
    }

    #[test]
    fn test_bogus_direction_falls_back() {
        let bg = normalize_background_style(&json!({"mode": "gradient", "direction": "bogus"}));
        assert_eq!(bg.mode, BackgroundMode::Gradient);
        assert_eq!(bg.direction, BackgroundDirection::ToRight);
        assert_eq!(bg.from, "#ffffff");
        assert_eq!(bg.to, "#ffffff");
    }

    #[test]
    fn test_non_object_input_yields_defaults() {
        assert_eq!(
            normalize_background_style(&json!("red")),
            NormalizedBackground::default()
        );
        assert_eq!(
            normalize_background_style(&Value::Null),
            NormalizedBackground::default()
        );
    }

    #[test]
    fn test_wrong_types_fall_back_per_field() {
        let bg = normalize_background_style(&json!({
            "mode": 3,
            "color": "",
            "from": "#000000",
            "to": ["x"],
            "direction": "to-tl"
        }));
        assert_eq!(bg.mode, BackgroundMode::Solid);
        assert_eq!(bg.color, "#ffffff");
        assert_eq!(bg.from, "#000000");
        assert_eq!(bg.to, "#ffffff");
        assert_eq!(bg.direction, BackgroundDirection::ToTopLeft);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = normalize_background_style(&json!({"mode": "gradient", "from": "#111111"}));
        let again = normalize_background_style(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, again);
    }

    #[test]
    fn test_direction_codes_round_trip_through_parse() {
        for code in ["to-r", "to-l", "to-b", "to-t", "to-br", "to-bl", "to-tr", "to-tl"] {
            let direction = BackgroundDirection::parse(code).unwrap();
            assert_eq!(direction.as_str(), code);
            assert_eq!(serde_json::to_value(direction).unwrap(), json!(code));
        }
    }

    #[test]
    fn test_page_background_defaults_when_absent() {
        let page = PageStyle::default();
        assert_eq!(page.normalized_background(), NormalizedBackground::default());
    }
}
