/// Story template model — placeholder scanning, field extraction, loading.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// A segment of a scanned template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSegment {
    /// Literal text, emitted as-is. Escaped braces (`{{`, `}}`) land here
    /// as single brace characters.
    Literal(String),
    /// A named blank: `{name}`.
    Field(String),
}

/// Scan template text into segments, left to right.
///
/// Syntax:
/// - `{name}` → `Field` (any non-empty, brace-free name)
/// - `{{` → literal `{`
/// - `}}` → literal `}`
/// - Everything else → `Literal`
///
/// The scan is total: brace runs that don't form a placeholder (an unclosed
/// `{`, a lone `}`, an empty `{}`) degrade to literal text. Extraction and
/// substitution both go through this function, so every extracted field name
/// is substitutable by construction.
pub fn segments(text: &str) -> Vec<TemplateSegment> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = Vec::new();
    let mut literal_buf = String::new();
    let mut i = 0;

    while i < len {
        match chars[i] {
            '{' if i + 1 < len && chars[i + 1] == '{' => {
                literal_buf.push('{');
                i += 2;
            }
            '}' if i + 1 < len && chars[i + 1] == '}' => {
                literal_buf.push('}');
                i += 2;
            }
            '{' => {
                // Find the closing brace; another '{' or end of text means
                // this one never opened a placeholder.
                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' && chars[end] != '{' {
                    end += 1;
                }
                if end < len && chars[end] == '}' && end > start {
                    if !literal_buf.is_empty() {
                        out.push(TemplateSegment::Literal(std::mem::take(&mut literal_buf)));
                    }
                    out.push(TemplateSegment::Field(chars[start..end].iter().collect()));
                    i = end + 1;
                } else {
                    literal_buf.push('{');
                    i += 1;
                }
            }
            c => {
                literal_buf.push(c);
                i += 1;
            }
        }
    }

    if !literal_buf.is_empty() {
        out.push(TemplateSegment::Literal(literal_buf));
    }

    out
}

fn default_difficulty() -> String {
    "beginner".to_string()
}

/// A Mad Lib story template. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryTemplate {
    pub title: String,
    /// Story text with `{placeholder}` blanks; literal braces are doubled.
    pub text: String,
    /// Human-readable descriptions per placeholder. Keys need not cover
    /// every placeholder; keys naming no placeholder are tolerated.
    #[serde(default)]
    pub hints: HashMap<String, String>,
    #[serde(default)]
    pub tags: FxHashSet<String>,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl StoryTemplate {
    /// Ordered unique placeholder names in `text`, first-seen order.
    /// Repeat uses of a name do not add entries.
    pub fn fields(&self) -> Vec<String> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut out = Vec::new();
        for segment in segments(&self.text) {
            if let TemplateSegment::Field(name) = segment {
                if seen.insert(name.clone()) {
                    out.push(name);
                }
            }
        }
        out
    }

    /// Hint for a placeholder, if one was authored.
    pub fn hint(&self, field: &str) -> Option<&str> {
        self.hints.get(field).map(String::as_str)
    }
}

/// Load a template collection from a RON file (a sequence of templates).
pub fn load_templates(path: &Path) -> Result<Vec<StoryTemplate>, TemplateError> {
    let contents = std::fs::read_to_string(path)?;
    parse_templates(&contents)
}

/// Parse a template collection from a RON string.
pub fn parse_templates(input: &str) -> Result<Vec<StoryTemplate>, TemplateError> {
    Ok(ron::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(text: &str) -> StoryTemplate {
        StoryTemplate {
            title: "X".to_string(),
            text: text.to_string(),
            hints: HashMap::new(),
            tags: FxHashSet::default(),
            difficulty: "beginner".to_string(),
        }
    }

    #[test]
    fn scan_literal_only() {
        assert_eq!(
            segments("Hello, world."),
            vec![TemplateSegment::Literal("Hello, world.".to_string())]
        );
    }

    #[test]
    fn scan_single_field() {
        assert_eq!(
            segments("Hello {name}!"),
            vec![
                TemplateSegment::Literal("Hello ".to_string()),
                TemplateSegment::Field("name".to_string()),
                TemplateSegment::Literal("!".to_string()),
            ]
        );
    }

    #[test]
    fn scan_escaped_braces() {
        assert_eq!(
            segments("Use {{braces}} here."),
            vec![TemplateSegment::Literal("Use {braces} here.".to_string())]
        );
    }

    #[test]
    fn scan_unclosed_brace_is_literal() {
        assert_eq!(
            segments("Bad {unclosed here"),
            vec![TemplateSegment::Literal("Bad {unclosed here".to_string())]
        );
    }

    #[test]
    fn scan_lone_close_is_literal() {
        assert_eq!(
            segments("Odd } here"),
            vec![TemplateSegment::Literal("Odd } here".to_string())]
        );
    }

    #[test]
    fn scan_empty_braces_are_literal() {
        assert_eq!(
            segments("Bad {} here"),
            vec![TemplateSegment::Literal("Bad {} here".to_string())]
        );
    }

    #[test]
    fn scan_inner_open_restarts() {
        assert_eq!(
            segments("A {x{y} B"),
            vec![
                TemplateSegment::Literal("A {x".to_string()),
                TemplateSegment::Field("y".to_string()),
                TemplateSegment::Literal(" B".to_string()),
            ]
        );
    }

    #[test]
    fn fields_unique_first_seen_order() {
        let t = template("A {a} B {b} C {a}");
        assert_eq!(t.fields(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn fields_ignore_escaped_braces() {
        let t = template("{{name}} is not a blank, {name} is");
        assert_eq!(t.fields(), vec!["name".to_string()]);
    }

    #[test]
    fn fields_empty_text() {
        let t = template("");
        assert!(t.fields().is_empty());
    }

    #[test]
    fn hint_lookup() {
        let mut t = template("Hello {name}");
        t.hints
            .insert("name".to_string(), "A person's name".to_string());
        assert_eq!(t.hint("name"), Some("A person's name"));
        assert_eq!(t.hint("food"), None);
    }

    #[test]
    fn parse_templates_ron() {
        let input = r#"[
            (
                title: "T",
                text: "Hello {name}.",
                hints: { "name": "person" },
            ),
        ]"#;
        let templates = parse_templates(input).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].title, "T");
        assert_eq!(templates[0].difficulty, "beginner");
        assert_eq!(templates[0].fields(), vec!["name".to_string()]);
    }

    #[test]
    fn parse_templates_bad_ron() {
        assert!(parse_templates("not ron at all [").is_err());
    }
}
