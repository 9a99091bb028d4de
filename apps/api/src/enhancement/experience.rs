//! Rules for the "experience" section.

use crate::enhancement::text::{
    append_sentence, contains_ci, contains_word_ci, insert_after_first_ci, replace_phrase_ci,
};

/// Weak phrase → strong phrase, applied in order. Matching is whole-word and
/// case-insensitive; the replacement is inserted as written.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("worked on", "developed and implemented"),
    ("responsible for", "successfully managed and delivered"),
    ("helped with", "contributed to"),
    ("was involved in", "played a key role in"),
    ("participated in", "actively contributed to"),
    ("used", "leveraged"),
];

const IMPROVED_QUALIFIER: &str = " (by over 30%)";
const FULL_STACK_SENTENCE: &str =
    "Delivered full-stack features spanning React front ends and Node.js services.";
const TEAM_SENTENCE: &str =
    "Collaborated closely with cross-functional teams to ship features on schedule.";

/// Short rule set: two literal, case-sensitive substitutions, each skipped
/// when the text already uses the stronger verb.
pub fn enhance_basic(content: &str) -> String {
    let lowered = content.to_lowercase();
    let mut enhanced = content.to_string();
    if !lowered.contains("developed") {
        enhanced = enhanced.replace("worked on", "developed and implemented");
    }
    if !lowered.contains("improved") {
        enhanced = enhanced.replace("responsible for", "successfully improved");
    }
    enhanced
}

pub fn enhance_extended(content: &str) -> String {
    let mut enhanced = REPLACEMENTS
        .iter()
        .fold(content.to_string(), |text, (weak, strong)| {
            replace_phrase_ci(&text, weak, strong)
        });

    if !enhanced.contains('%') {
        if let Some(qualified) = insert_after_first_ci(&enhanced, "improved", IMPROVED_QUALIFIER) {
            enhanced = qualified;
        }
    }

    if contains_word_ci(&enhanced, "react")
        && contains_word_ci(&enhanced, "node.js")
        && !contains_ci(&enhanced, "full-stack")
    {
        append_sentence(&mut enhanced, FULL_STACK_SENTENCE);
    }

    if !contains_ci(&enhanced, "team") && !contains_ci(&enhanced, "collaborated") {
        append_sentence(&mut enhanced, TEAM_SENTENCE);
    }

    enhanced
}
