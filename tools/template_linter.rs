/// Template Linter — validates story template collections.
///
/// Usage: template_linter <file.ron | dir> [--include-builtin]

use madlibs::builtin::built_in_templates;
use madlibs::core::template::{load_templates, StoryTemplate};
use std::collections::HashSet;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: template_linter <file.ron | dir> [--include-builtin]");
        process::exit(0);
    }

    let target = &args[1];
    let include_builtin = args.iter().any(|a| a == "--include-builtin");

    let mut templates: Vec<StoryTemplate> = Vec::new();
    if include_builtin {
        templates.extend(built_in_templates());
    }

    let path = Path::new(target);
    let mut load_errors = 0usize;
    if path.is_file() {
        match load_templates(path) {
            Ok(loaded) => templates.extend(loaded),
            Err(e) => {
                eprintln!("ERROR: Failed to load '{}': {}", target, e);
                process::exit(1);
            }
        }
    } else if path.is_dir() {
        load_recursive(path, &mut templates, &mut load_errors);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", target);
        process::exit(1);
    }

    println!("Loaded {} templates", templates.len());

    let (errors, warnings) = lint_templates(&templates);

    println!("\n=== Template Lint Report ===\n");

    if load_errors == 0 && errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len() + load_errors,
        warnings.len()
    );

    if errors.is_empty() && load_errors == 0 {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_recursive(dir: &Path, templates: &mut Vec<StoryTemplate>, load_errors: &mut usize) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                load_recursive(&path, templates, load_errors);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                match load_templates(&path) {
                    Ok(loaded) => {
                        println!("  Loaded: {}", path.display());
                        templates.extend(loaded);
                    }
                    Err(e) => {
                        eprintln!("  ERROR loading {}: {}", path.display(), e);
                        *load_errors += 1;
                    }
                }
            }
        }
    }
}

fn lint_templates(templates: &[StoryTemplate]) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Duplicate titles silently shadow earlier templates in the engine, so
    // surface them here.
    let mut seen_titles: HashSet<&str> = HashSet::new();
    for t in templates {
        if !seen_titles.insert(t.title.as_str()) {
            errors.push(format!("Duplicate title '{}'", t.title));
        }
    }

    for t in templates {
        if t.title.trim().is_empty() {
            errors.push("Template with empty title".to_string());
        }
        if t.text.trim().is_empty() {
            errors.push(format!("Template '{}' has empty text", t.title));
        }

        for issue in brace_issues(&t.text) {
            errors.push(format!("Template '{}': {}", t.title, issue));
        }

        let fields = t.fields();
        if fields.is_empty() && !t.text.trim().is_empty() {
            warnings.push(format!("Template '{}' has no placeholders", t.title));
        }

        for field in &fields {
            if t.hint(field).is_none() {
                warnings.push(format!(
                    "Template '{}': field '{}' has no hint",
                    t.title, field
                ));
            }
        }

        for key in t.hints.keys() {
            if !fields.iter().any(|f| f == key) {
                warnings.push(format!(
                    "Template '{}': hint '{}' names no placeholder",
                    t.title, key
                ));
            }
        }
    }

    (errors, warnings)
}

/// Strict brace check. The engine's scanner degrades malformed brace runs
/// to literal text; authors almost certainly meant a placeholder, so the
/// linter flags them.
fn brace_issues(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut issues = Vec::new();
    let mut i = 0;

    while i < len {
        match chars[i] {
            '{' if i + 1 < len && chars[i + 1] == '{' => i += 2,
            '}' if i + 1 < len && chars[i + 1] == '}' => i += 2,
            '{' => {
                let start = i + 1;
                let mut end = start;
                while end < len && chars[end] != '}' && chars[end] != '{' {
                    end += 1;
                }
                if end >= len {
                    issues.push("unclosed '{'".to_string());
                    i = len;
                } else if chars[end] == '{' {
                    issues.push("'{' inside a placeholder".to_string());
                    i = end;
                } else if end == start {
                    issues.push("empty '{}' placeholder".to_string());
                    i = end + 1;
                } else {
                    i = end + 1;
                }
            }
            '}' => {
                issues.push("unmatched '}'".to_string());
                i += 1;
            }
            _ => i += 1,
        }
    }

    issues
}
