/// Engine rendering and template loading integration tests.

use madlibs::core::engine::{MadLibEngine, RenderError};
use madlibs::core::template::{load_templates, StoryTemplate};
use std::collections::HashMap;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn end_to_end_render() {
    let t = StoryTemplate {
        title: "T".to_string(),
        text: "Hello {name}, eat {food}.".to_string(),
        hints: HashMap::new(),
        tags: Default::default(),
        difficulty: "beginner".to_string(),
    };
    let engine = MadLibEngine::new([t]);
    let out = engine
        .render("T", &values(&[("name", "Mobin"), ("food", "pizza")]))
        .unwrap();
    assert_eq!(out, "Hello Mobin, eat pizza.");
}

#[test]
fn fixture_collection_loads() {
    let path = std::path::Path::new("tests/fixtures/stories.ron");
    let templates = load_templates(path).unwrap();
    assert_eq!(templates.len(), 2);

    let bakery = templates
        .iter()
        .find(|t| t.title == "Haunted Bakery")
        .unwrap();
    assert_eq!(bakery.fields(), vec!["adjective", "verb_past", "food"]);
    assert_eq!(bakery.hint("food"), Some("Something edible"));
    assert!(bakery.tags.contains("spooky"));
}

#[test]
fn fixture_defaults_apply() {
    let path = std::path::Path::new("tests/fixtures/stories.ron");
    let templates = load_templates(path).unwrap();
    let picnic = templates
        .iter()
        .find(|t| t.title == "Space Picnic")
        .unwrap();
    assert_eq!(picnic.difficulty, "beginner");
    assert!(picnic.tags.is_empty());
}

#[test]
fn loaded_collection_overrides_builtins() {
    let path = std::path::Path::new("tests/fixtures/stories.ron");
    let mut templates = madlibs::builtin::built_in_templates();
    templates.extend(load_templates(path).unwrap());
    let engine = MadLibEngine::new(templates);

    // The fixture's "Space Picnic" shadows the built-in one.
    assert_eq!(
        engine.required_fields("Space Picnic").unwrap(),
        vec!["noun".to_string()]
    );
    let out = engine
        .render("Space Picnic", &values(&[("noun", "thermos")]))
        .unwrap();
    assert_eq!(out, "An overriding picnic with just a thermos.");
}

#[test]
fn missing_fields_reported_in_required_order() {
    let t = StoryTemplate {
        title: "Order".to_string(),
        text: "{zebra} then {apple} then {mango}".to_string(),
        hints: HashMap::new(),
        tags: Default::default(),
        difficulty: "beginner".to_string(),
    };
    let engine = MadLibEngine::new([t]);
    let err = engine
        .render("Order", &values(&[("apple", "a")]))
        .unwrap_err();
    match err {
        RenderError::MissingFields(missing) => {
            assert_eq!(missing, vec!["zebra".to_string(), "mango".to_string()]);
        }
        other => panic!("expected MissingFields, got {:?}", other),
    }
}

#[test]
fn load_missing_file_errors() {
    let path = std::path::Path::new("tests/fixtures/no_such_file.ron");
    assert!(load_templates(path).is_err());
}
