use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use super::content::SectionContent;
use super::layout::SectionLayout;
use super::style::SectionStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
    Custom,
}

impl SectionType {
    pub const ALL: [SectionType; 6] = [
        SectionType::Hero,
        SectionType::About,
        SectionType::Skills,
        SectionType::Projects,
        SectionType::Contact,
        SectionType::Custom,
    ];

    pub const EXPECTED: &'static str = "hero, about, skills, projects, contact, custom";

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Hero => "hero",
            SectionType::About => "about",
            SectionType::Skills => "skills",
            SectionType::Projects => "projects",
            SectionType::Contact => "contact",
            SectionType::Custom => "custom",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content block of a portfolio. The section type is carried by the
/// content variant so the two can never disagree.
///
/// `content` is the typed reading used for display. `raw_content` is the
/// map as the owner saved it and is what gets written back, so keys and
/// values the typed reading cannot represent are never lost.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub position: u64,
    pub(super) content: SectionContent,
    pub(super) raw_content: Map<String, Value>,
    pub style: Option<SectionStyle>,
    pub layout: Option<SectionLayout>,
}

impl Section {
    /// A new section with a fresh id and the starter content for its type.
    pub fn new(section_type: SectionType, position: u64) -> Self {
        let content = SectionContent::default_for(section_type);
        Self {
            id: Uuid::new_v4().to_string(),
            position,
            raw_content: content.to_map(),
            content,
            style: None,
            layout: None,
        }
    }

    /// Reads a stored content map as `section_type`, keeping the map itself.
    pub(super) fn with_content(
        id: String,
        position: u64,
        section_type: SectionType,
        raw_content: &Map<String, Value>,
    ) -> Self {
        Self {
            id,
            position,
            content: SectionContent::from_map(section_type, raw_content),
            raw_content: raw_content.clone(),
            style: None,
            layout: None,
        }
    }

    pub fn section_type(&self) -> SectionType {
        self.content.section_type()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 4 + usize::from(self.style.is_some()) + usize::from(self.layout.is_some());
        let mut state = serializer.serialize_struct("Section", len)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.section_type())?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("content", &self.raw_content)?;
        if let Some(style) = &self.style {
            state.serialize_field("style", style)?;
        }
        if let Some(layout) = &self.layout {
            state.serialize_field("layout", layout)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_accepts_only_known_types() {
        assert_eq!(SectionType::parse("hero"), Some(SectionType::Hero));
        assert_eq!(SectionType::parse("custom"), Some(SectionType::Custom));
        assert_eq!(SectionType::parse("Hero"), None);
        assert_eq!(SectionType::parse("gallery"), None);
    }

    #[test]
    fn test_new_sections_get_distinct_ids() {
        let a = Section::new(SectionType::About, 0);
        let b = Section::new(SectionType::About, 0);
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn test_new_custom_section_has_default_title() {
        let section = Section::new(SectionType::Custom, 3);
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "custom");
        assert_eq!(value["position"], 3);
        assert_eq!(value["content"], json!({"title": "Custom section", "body": ""}));
    }

    #[test]
    fn test_stored_content_is_written_back_as_given() {
        let raw = json!({
            "name": {"first": "Ada", "last": "Lovelace"},
            "headline": "Engineer",
            "links": [
                {"label": "GitHub", "href": "https://github.com/ada", "icon": "github"},
                "mailto:ada@example.com"
            ],
            "accent": {"hue": 210}
        });
        let Value::Object(map) = raw.clone() else {
            panic!("expected object");
        };
        let section = Section::with_content("h".into(), 0, SectionType::Hero, &map);

        let SectionContent::Hero(hero) = &section.content else {
            panic!("expected hero");
        };
        assert_eq!(hero.name, None);
        assert_eq!(hero.links[0].extra["icon"], "github");

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], "hero");
        assert_eq!(value["content"], raw);
    }

    #[test]
    fn test_malformed_known_fields_are_written_back() {
        let raw = json!({"items": ["Rust", null, {"level": "expert"}], "extra": [1, 2]});
        let Value::Object(map) = raw.clone() else {
            panic!("expected object");
        };
        let section = Section::with_content("s".into(), 0, SectionType::Skills, &map);
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["content"], raw);
    }

    #[test]
    fn test_serialization_omits_absent_style_and_layout() {
        let section = Section::new(SectionType::Contact, 0);
        let value = serde_json::to_value(&section).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("style"));
        assert!(!obj.contains_key("layout"));
    }
}
