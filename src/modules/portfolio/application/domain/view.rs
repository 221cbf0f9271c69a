use serde::Serialize;
use utoipa::ToSchema;

use super::content::SectionContent;
use super::document::{normalize_positions, PortfolioDocument};
use super::layout::NormalizedLayout;
use super::section::{Section, SectionType};
use super::style::{NormalizedBackground, TextStyle};

/// A published portfolio with every style and layout resolved, so the
/// page renderer needs no fallback logic of its own.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PublicPortfolioView {
    #[schema(example = "ada_l")]
    pub username: String,
    #[schema(example = "Ada Lovelace")]
    pub display_name: String,
    pub headline: String,
    pub page_background: NormalizedBackground,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SectionView {
    pub id: String,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    pub position: u64,
    #[schema(value_type = Object)]
    pub content: SectionContent,
    pub background: NormalizedBackground,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<NormalizedLayout>,
}

impl From<&Section> for SectionView {
    fn from(section: &Section) -> Self {
        let style = section.style.clone().unwrap_or_default();
        Self {
            id: section.id.clone(),
            section_type: section.section_type(),
            position: section.position,
            content: section.content.clone(),
            background: style.normalized_background(),
            text: style.text,
            layout: section.layout.map(|layout| layout.normalized()),
        }
    }
}

impl PublicPortfolioView {
    pub fn build(username: &str, document: &PortfolioDocument) -> Self {
        let sections = normalize_positions(&document.sections);

        let hero = sections.iter().find_map(|s| match &s.content {
            SectionContent::Hero(hero) => Some(hero),
            _ => None,
        });

        Self {
            username: username.to_string(),
            display_name: hero
                .map(|h| h.display_name(username))
                .unwrap_or(username)
                .to_string(),
            headline: hero.map(|h| h.headline.clone()).unwrap_or_default(),
            page_background: document
                .page
                .as_ref()
                .map(|page| page.normalized_background())
                .unwrap_or_default(),
            sections: sections.iter().map(SectionView::from).collect(),
        }
    }
}
