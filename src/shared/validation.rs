use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// One rejected field. `path` uses dotted keys and `[i]` indexes,
/// e.g. `sections[2].layout.w`; an empty path means the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    #[schema(example = "sections[0].type")]
    pub path: String,
    #[schema(example = "must be one of: hero, about, skills, projects, contact, custom")]
    pub message: String,
}

/// Every issue found while parsing user-supplied input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut issues = Self::new();
        issues.push(path, message);
        issues
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.push(ValidationIssue {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: ValidationIssues) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.iter()
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.0.iter().any(|issue| issue.path == path)
    }

    /// Closes a parse: a value is only returned when nothing was rejected.
    pub fn finish<T>(mut self, value: Option<T>) -> Result<T, ValidationIssues> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            Some(_) => Err(self),
            None => {
                if self.is_empty() {
                    self.push("", "invalid value");
                }
                Err(self)
            }
        }
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input")?;
        for (i, issue) in self.0.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            if issue.path.is_empty() {
                write!(f, "{sep}{}", issue.message)?;
            } else {
                write!(f, "{sep}{} {}", issue.path, issue.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationIssues {}

pub fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
