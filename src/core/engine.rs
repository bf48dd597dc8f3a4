/// Rendering engine — title registry, input validation, substitution.

use std::collections::HashMap;
use thiserror::Error;

use crate::core::template::{segments, StoryTemplate, TemplateSegment};

/// Which value-hygiene rule a supplied value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRejection {
    /// The value contains a literal `{` or `}`.
    Brace,
    /// The value contains a control character other than newline or tab.
    Control,
}

impl std::fmt::Display for ValueRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Brace => write!(f, "brace characters are not allowed"),
            Self::Control => write!(f, "control characters are not allowed"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("story not found: {0}")]
    NotFound(String),
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("invalid value for '{field}': {reason}")]
    InvalidCharacters { field: String, reason: ValueRejection },
}

/// Renders stories from registered templates with caller-supplied values.
///
/// The registry is built once at construction and never mutated; concurrent
/// read-only use from multiple threads is safe.
pub struct MadLibEngine {
    templates: HashMap<String, StoryTemplate>,
}

impl MadLibEngine {
    /// Build the title→template registry. Duplicate titles: last one wins.
    pub fn new(templates: impl IntoIterator<Item = StoryTemplate>) -> Self {
        Self {
            templates: templates
                .into_iter()
                .map(|t| (t.title.clone(), t))
                .collect(),
        }
    }

    /// All registered titles, sorted lexicographically.
    pub fn titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.templates.keys().cloned().collect();
        titles.sort();
        titles
    }

    /// Exact-match lookup. No fuzzy matching, no case folding.
    pub fn get(&self, title: &str) -> Result<&StoryTemplate, RenderError> {
        self.templates
            .get(title)
            .ok_or_else(|| RenderError::NotFound(title.to_string()))
    }

    /// Ordered unique placeholder names the titled story requires.
    pub fn required_fields(&self, title: &str) -> Result<Vec<String>, RenderError> {
        Ok(self.get(title)?.fields())
    }

    /// Render a story with the given placeholder → value mapping.
    ///
    /// Every required placeholder must be supplied with a non-empty value;
    /// an absent key and an empty string are treated identically as missing,
    /// and all missing names are reported at once. Every supplied value
    /// (extra keys included) must be free of braces and of control
    /// characters other than newline and tab. Extra keys that match no
    /// placeholder are otherwise ignored.
    pub fn render(
        &self,
        title: &str,
        values: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        let template = self.get(title)?;
        let required = template.fields();

        let missing: Vec<String> = required
            .iter()
            .filter(|f| values.get(*f).map_or(true, |v| v.is_empty()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(RenderError::MissingFields(missing));
        }

        // Scan supplied keys in sorted order so the reported violation is
        // deterministic.
        let mut keys: Vec<&String> = values.keys().collect();
        keys.sort();
        for key in keys {
            let value = &values[key];
            if value.contains(['{', '}']) {
                return Err(RenderError::InvalidCharacters {
                    field: key.clone(),
                    reason: ValueRejection::Brace,
                });
            }
            if value
                .chars()
                .any(|c| (c as u32) < 32 && c != '\n' && c != '\t')
            {
                return Err(RenderError::InvalidCharacters {
                    field: key.clone(),
                    reason: ValueRejection::Control,
                });
            }
        }

        let mut out = String::with_capacity(template.text.len());
        for segment in segments(&template.text) {
            match segment {
                TemplateSegment::Literal(text) => out.push_str(&text),
                TemplateSegment::Field(name) => {
                    // The completeness check above guarantees presence.
                    if let Some(value) = values.get(&name) {
                        out.push_str(value);
                    }
                }
            }
        }
        Ok(out)
    }
}
