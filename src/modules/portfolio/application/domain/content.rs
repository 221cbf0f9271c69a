use serde::Serialize;
use serde_json::{json, Map, Value};

use super::section::SectionType;

pub const DEFAULT_LINK_LABEL: &str = "Link";
pub const DEFAULT_LINK_HREF: &str = "#";
pub const DEFAULT_PROJECT_NAME: &str = "Project";
pub const DEFAULT_CUSTOM_TITLE: &str = "Custom section";

//
// ──────────────────────────────────────────────────────────
// Typed content per section type
// ──────────────────────────────────────────────────────────
//
// Stored content is an open map. It is coerced exactly once, here, into
// the variant matching the section type. Keys a variant does not know
// are kept in `extra`, at the top level and inside list items.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroLink {
    pub label: String,
    pub href: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub headline: String,
    pub links: Vec<HeroLink>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HeroContent {
    /// The name shown on the page, falling back to the account username.
    pub fn display_name<'a>(&'a self, username: &'a str) -> &'a str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => username,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AboutContent {
    pub body: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsContent {
    pub items: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectItem {
    pub name: String,
    pub description: String,
    pub href: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectsContent {
    pub items: Vec<ProjectItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactContent {
    pub email: String,
    pub location: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomContent {
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionContent {
    Hero(HeroContent),
    About(AboutContent),
    Skills(SkillsContent),
    Projects(ProjectsContent),
    Contact(ContactContent),
    Custom(CustomContent),
}

impl SectionContent {
    pub fn section_type(&self) -> SectionType {
        match self {
            Self::Hero(_) => SectionType::Hero,
            Self::About(_) => SectionType::About,
            Self::Skills(_) => SectionType::Skills,
            Self::Projects(_) => SectionType::Projects,
            Self::Contact(_) => SectionType::Contact,
            Self::Custom(_) => SectionType::Custom,
        }
    }

    /// Interprets an untyped content map for `section_type`. Never fails:
    /// missing or mistyped fields take their documented defaults.
    pub fn from_map(section_type: SectionType, map: &Map<String, Value>) -> Self {
        let mut extra = map.clone();
        let mut take = |key: &str| extra.remove(key).unwrap_or(Value::Null);

        match section_type {
            SectionType::Hero => {
                let name = scalar_text(&take("name"));
                let headline = text_or_empty(&take("headline"));
                let links = items_of(&take("links"))
                    .map(|link| HeroLink {
                        label: field_text(link, "label")
                            .unwrap_or_else(|| DEFAULT_LINK_LABEL.to_string()),
                        href: field_text(link, "href")
                            .unwrap_or_else(|| DEFAULT_LINK_HREF.to_string()),
                        extra: rest_of(link, &["label", "href"]),
                    })
                    .collect();
                Self::Hero(HeroContent {
                    name,
                    headline,
                    links,
                    extra,
                })
            }
            SectionType::About => Self::About(AboutContent {
                body: text_or_empty(&take("body")),
                extra,
            }),
            SectionType::Skills => {
                let items = items_of(&take("items")).filter_map(scalar_text).collect();
                Self::Skills(SkillsContent { items, extra })
            }
            SectionType::Projects => {
                let items = items_of(&take("items"))
                    .map(|item| ProjectItem {
                        name: field_text(item, "name")
                            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
                        description: field_text(item, "description").unwrap_or_default(),
                        href: field_text(item, "href").unwrap_or_default(),
                        extra: rest_of(item, &["name", "description", "href"]),
                    })
                    .collect();
                Self::Projects(ProjectsContent { items, extra })
            }
            SectionType::Contact => Self::Contact(ContactContent {
                email: text_or_empty(&take("email")),
                location: text_or_empty(&take("location")),
                extra,
            }),
            SectionType::Custom => Self::Custom(CustomContent {
                title: scalar_text(&take("title"))
                    .unwrap_or_else(|| DEFAULT_CUSTOM_TITLE.to_string()),
                body: text_or_empty(&take("body")),
                extra,
            }),
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Starter content for a freshly added section of `section_type`.
    pub fn default_for(section_type: SectionType) -> Self {
        let raw = match section_type {
            SectionType::Hero => json!({
                "name": "Your Name",
                "headline": "What you do, in one sentence.",
                "links": [{ "label": "Email", "href": "mailto:you@example.com" }],
            }),
            SectionType::About => json!({
                "body": "Write a short bio. Keep it concise and specific.",
            }),
            SectionType::Skills => json!({
                "items": ["TypeScript", "React", "PostgreSQL"],
            }),
            SectionType::Projects => json!({
                "items": [{
                    "name": "Project name",
                    "description": "One or two lines describing it.",
                    "href": "https://example.com",
                }],
            }),
            SectionType::Contact => json!({
                "email": "you@example.com",
                "location": "City, Country",
            }),
            SectionType::Custom => json!({
                "title": DEFAULT_CUSTOM_TITLE,
                "body": "",
            }),
        };

        match raw {
            Value::Object(map) => Self::from_map(section_type, &map),
            _ => Self::from_map(section_type, &Map::new()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Coercion helpers
// ──────────────────────────────────────────────────────────
//

/// Strings as-is, numbers and booleans as their text; anything else is absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn text_or_empty(value: &Value) -> String {
    scalar_text(value).unwrap_or_default()
}

fn field_text(item: &Value, key: &str) -> Option<String> {
    item.get(key).and_then(scalar_text)
}

fn items_of(value: &Value) -> impl Iterator<Item = &Value> {
    value.as_array().into_iter().flatten()
}

/// The keys of an item object other than `known`; empty for non-objects.
fn rest_of(item: &Value, known: &[&str]) -> Map<String, Value> {
    item.as_object()
        .map(|obj| {
            obj.iter()
                .filter(|(key, _)| !known.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}
