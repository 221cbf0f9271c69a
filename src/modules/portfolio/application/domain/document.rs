use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::layout::{SectionLayout, DEFAULT_GAP};
use super::section::{Section, SectionType};
use super::style::PageStyle;
use super::validation::parse_sections;

/// The persisted unit for one user's portfolio. Always written in this
/// `{ page?, sections }` shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PortfolioDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageStyle>,
    pub sections: Vec<Section>,
}

/// How a stored value is laid out before it is validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoredShape<'a> {
    /// A bare array of sections with no page style.
    Legacy(&'a Value),
    Current(&'a Map<String, Value>),
    Unrecognized,
}

impl<'a> StoredShape<'a> {
    pub fn detect(raw: &'a Value) -> Self {
        match raw {
            Value::Array(_) => StoredShape::Legacy(raw),
            Value::Object(obj) => StoredShape::Current(obj),
            _ => StoredShape::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionEditError {
    #[error("section {0} not found")]
    NotFound(String),
    #[error("section {id} cannot change type from {from} to {to}")]
    TypeChanged {
        id: String,
        from: SectionType,
        to: SectionType,
    },
}

//
// ──────────────────────────────────────────────────────────
// Normalization
// ──────────────────────────────────────────────────────────
//

/// Orders by position (ties keep their input order) and renumbers `0..n`.
pub fn normalize_positions(sections: &[Section]) -> Vec<Section> {
    let mut ordered = sections.to_vec();
    ordered.sort_by_key(|s| s.position);
    for (index, section) in ordered.iter_mut().enumerate() {
        section.position = index as u64;
    }
    ordered
}

pub fn normalize_portfolio_data(document: &PortfolioDocument) -> PortfolioDocument {
    PortfolioDocument {
        page: document.page.clone(),
        sections: normalize_positions(&document.sections),
    }
}

/// Starter content for a brand new portfolio: hero, about, skills,
/// projects and contact at positions 0 to 4.
///
/// # Panics
///
/// Panics if the generated sections do not pass section validation,
/// which means the registry defaults and the validator disagree.
pub fn default_sections() -> Vec<Section> {
    let sections: Vec<Section> = [
        SectionType::Hero,
        SectionType::About,
        SectionType::Skills,
        SectionType::Projects,
        SectionType::Contact,
    ]
    .into_iter()
    .enumerate()
    .map(|(position, section_type)| Section::new(section_type, position as u64))
    .collect();

    let raw = serde_json::to_value(&sections).expect("default sections serialize");
    parse_sections(&raw).unwrap_or_else(|issues| panic!("default sections are invalid: {issues}"))
}

/// Stacks every section vertically in position order, each top edge
/// `DEFAULT_GAP` below the previous section's bottom. Only `y` changes.
pub fn apply_default_gap(sections: &[Section]) -> Vec<Section> {
    let mut cursor = 0.0;
    normalize_positions(sections)
        .into_iter()
        .map(|mut section| {
            let mut layout = section.layout.unwrap_or_default();
            layout.y = Some(cursor);
            cursor += layout.normalized().h + DEFAULT_GAP;
            section.layout = Some(layout);
            section
        })
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Editing
// ──────────────────────────────────────────────────────────
//
// Every edit leaves positions contiguous.

impl PortfolioDocument {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            page: None,
            sections: normalize_positions(&sections),
        }
    }

    pub fn normalized(&self) -> Self {
        normalize_portfolio_data(self)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Adds a section with starter content at `index` (end when `None`)
    /// and returns its id.
    pub fn add_section(&mut self, section_type: SectionType, index: Option<usize>) -> String {
        let mut ordered = normalize_positions(&self.sections);
        let index = index.unwrap_or(ordered.len()).min(ordered.len());
        let section = Section::new(section_type, index as u64);
        let id = section.id.clone();
        ordered.insert(index, section);
        self.sections = renumber(ordered);
        id
    }

    pub fn remove_section(&mut self, id: &str) -> Result<Section, SectionEditError> {
        let index = self.index_of(id)?;
        let removed = self.sections.remove(index);
        self.sections = normalize_positions(&self.sections);
        Ok(removed)
    }

    /// Moves a section so it ends up at `to_index` in position order.
    pub fn move_section(&mut self, id: &str, to_index: usize) -> Result<(), SectionEditError> {
        let mut ordered = normalize_positions(&self.sections);
        let from = ordered
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SectionEditError::NotFound(id.to_string()))?;
        let section = ordered.remove(from);
        let to_index = to_index.min(ordered.len());
        ordered.insert(to_index, section);
        self.sections = renumber(ordered);
        Ok(())
    }

    /// Swaps in an edited section with the same id. Content, style and
    /// layout are replaced; the stored position is kept.
    pub fn replace_section(&mut self, section: Section) -> Result<(), SectionEditError> {
        let index = self.index_of(&section.id)?;
        let current = &self.sections[index];
        let (from, to) = (current.section_type(), section.section_type());
        if from != to {
            return Err(SectionEditError::TypeChanged {
                id: section.id,
                from,
                to,
            });
        }
        let position = current.position;
        self.sections[index] = Section {
            position,
            ..section
        };
        self.sections = normalize_positions(&self.sections);
        Ok(())
    }

    pub fn to_stored_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.normalized())
    }

    fn index_of(&self, id: &str) -> Result<usize, SectionEditError> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| SectionEditError::NotFound(id.to_string()))
    }
}

fn renumber(mut sections: Vec<Section>) -> Vec<Section> {
    for (index, section) in sections.iter_mut().enumerate() {
        section.position = index as u64;
    }
    sections
}
