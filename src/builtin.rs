//! Built-in story templates shipped with the engine.

use std::collections::HashMap;

use crate::core::template::StoryTemplate;

/// The fixed collection of stories available without loading any files.
/// Constructed fresh per call; callers hand it to the engine once at startup.
pub fn built_in_templates() -> Vec<StoryTemplate> {
    vec![
        StoryTemplate {
            title: "Space Picnic".to_string(),
            difficulty: "beginner".to_string(),
            tags: ["space", "picnic", "funny"]
                .into_iter()
                .map(String::from)
                .collect(),
            hints: HashMap::from([
                (
                    "noun".to_string(),
                    "A thing (e.g., rocket, comet)".to_string(),
                ),
                (
                    "verb".to_string(),
                    "An action (present tense)".to_string(),
                ),
                ("adjective".to_string(), "A describing word".to_string()),
                ("food".to_string(), "Something edible".to_string()),
                (
                    "adverb".to_string(),
                    "How an action happens (e.g., quickly)".to_string(),
                ),
            ]),
            text: "Today I packed my {adjective} {noun} to go on a picnic on the Moon. \
                   First, I will {verb} {adverb} across the craters, then snack on a {food} \
                   while watching Earth rise. If a friendly alien visits, I’ll offer a bite!"
                .to_string(),
        },
        StoryTemplate {
            title: "Dragon Interview".to_string(),
            difficulty: "intermediate".to_string(),
            tags: ["fantasy", "dragon"]
                .into_iter()
                .map(String::from)
                .collect(),
            hints: HashMap::from([
                ("profession".to_string(), "Job title".to_string()),
                ("adjective".to_string(), "A describing word".to_string()),
                ("verb_past".to_string(), "Past-tense verb".to_string()),
                ("creature".to_string(), "A mythical creature".to_string()),
                ("tool".to_string(), "An object used for work".to_string()),
            ]),
            text: "I arrived for my interview as a {profession}, feeling very {adjective}. \
                   Then the door {verb_past} open and a {creature} walked in! \
                   It asked if I knew how to use a {tool}, and I said, 'Absolutely.' The job was mine!"
                .to_string(),
        },
        StoryTemplate {
            title: "Rainy-day Robot".to_string(),
            difficulty: "beginner".to_string(),
            tags: ["robot", "rain"].into_iter().map(String::from).collect(),
            hints: HashMap::from([
                ("name".to_string(), "A person's name".to_string()),
                ("adjective".to_string(), "A describing word".to_string()),
                (
                    "verb_ing".to_string(),
                    "Verb ending in -ing".to_string(),
                ),
                (
                    "plural_noun".to_string(),
                    "A plural thing (e.g., gears)".to_string(),
                ),
            ]),
            text: "{name} built a {adjective} robot for rainy days. \
                   Instead of {verb_ing} outside, they collected {plural_noun} and played board games. \
                   It was the coziest storm ever!"
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_stories() {
        assert_eq!(built_in_templates().len(), 3);
    }

    #[test]
    fn space_picnic_fields_in_order() {
        let templates = built_in_templates();
        let picnic = templates
            .iter()
            .find(|t| t.title == "Space Picnic")
            .unwrap();
        assert_eq!(
            picnic.fields(),
            vec!["adjective", "noun", "verb", "adverb", "food"]
        );
    }
}
