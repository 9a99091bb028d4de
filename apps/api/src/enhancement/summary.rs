//! Rules for the "summary" section.

use crate::enhancement::text::{append_sentence, contains_ci};

const BASIC_PREFIX: &str = "Dynamic and results-driven ";
const BASIC_TRACK_RECORD: &str =
    " with a proven track record of delivering exceptional results and driving organizational success.";
const BASIC_MIN_CHARS: usize = 100;

const YEARS_SENTENCE: &str =
    "Brings 5+ years of experience delivering high-quality solutions in fast-paced environments.";
const TRACK_RECORD_SENTENCE: &str =
    "Proven track record of delivering measurable results and driving organizational success.";
const LEADERSHIP_SENTENCE: &str =
    "Skilled at leading cross-functional initiatives and has mentored junior engineers to grow their impact.";
const CLOSING_SENTENCE: &str =
    "Passionate about continuous learning and building products that make a lasting difference.";
/// Below this many characters the closing sentence is added.
const EXTENDED_MIN_CHARS: usize = 150;

/// Short rule set: fixed prefix over the lowercased text, plus a
/// track-record tail when the result is still short.
pub fn enhance_basic(content: &str) -> String {
    let lowered = content.to_lowercase();
    let mut enhanced = format!("{BASIC_PREFIX}{lowered}");
    if !lowered.contains("experienced") {
        enhanced = format!("Experienced {enhanced}");
    }
    if enhanced.chars().count() < BASIC_MIN_CHARS {
        enhanced.push_str(BASIC_TRACK_RECORD);
    }
    enhanced
}

/// Long rule set. Rules run in a fixed order and each checks the text as
/// accumulated so far.
pub fn enhance_extended(content: &str) -> String {
    let mut enhanced = if contains_ci(content, "experienced") {
        content.to_string()
    } else {
        let rest = content.trim_start();
        let lead = &content[..content.len() - rest.len()];
        format!("{lead}Experienced {}", lowercase_leading_word(rest))
    };

    if !enhanced.contains("5+") && !contains_ci(&enhanced, "years") {
        append_sentence(&mut enhanced, YEARS_SENTENCE);
    } else if !contains_ci(&enhanced, "proven track record") {
        append_sentence(&mut enhanced, TRACK_RECORD_SENTENCE);
    }

    if !contains_ci(&enhanced, "leading") && !contains_ci(&enhanced, "mentored") {
        append_sentence(&mut enhanced, LEADERSHIP_SENTENCE);
    }

    if enhanced.chars().count() < EXTENDED_MIN_CHARS {
        append_sentence(&mut enhanced, CLOSING_SENTENCE);
    }

    enhanced
}

/// "Software engineer" reads as "Experienced software engineer"; acronyms
/// and the pronoun "I" keep their casing.
fn lowercase_leading_word(text: &str) -> String {
    let word_len = text.find(char::is_whitespace).unwrap_or(text.len());
    let word = &text[..word_len];
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return text.to_string();
    };
    let rest: String = chars.collect();
    let is_capitalized_word =
        first.is_uppercase() && !rest.is_empty() && !rest.chars().any(char::is_uppercase);
    if !is_capitalized_word {
        return text.to_string();
    }
    format!("{}{}{}", first.to_lowercase(), rest, &text[word_len..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_prefixes_and_lowercases() {
        let out = enhance_basic("Software Engineer");
        assert!(out.starts_with("Experienced Dynamic and results-driven software engineer"));
        assert!(out.ends_with("driving organizational success."));
    }

    #[test]
    fn test_basic_skips_experienced_prefix_when_present() {
        let out = enhance_basic("Experienced developer");
        assert!(out.starts_with("Dynamic and results-driven experienced developer"));
    }

    #[test]
    fn test_basic_long_text_gets_no_tail() {
        let content = "a".repeat(120);
        let out = enhance_basic(&content);
        assert!(!out.contains("proven track record"));
    }

    #[test]
    fn test_extended_prepends_experienced() {
        let out = enhance_extended("Software engineer building web apps");
        assert!(out.starts_with("Experienced software engineer building web apps."));
    }

    #[test]
    fn test_extended_keeps_acronym_and_pronoun_casing() {
        assert!(enhance_extended("AWS architect").starts_with("Experienced AWS architect"));
        assert!(enhance_extended("I build things").starts_with("Experienced I build things"));
    }

    #[test]
    fn test_extended_adds_years_when_missing() {
        let out = enhance_extended("Backend developer");
        assert!(out.contains(YEARS_SENTENCE));
        assert!(!out.contains(TRACK_RECORD_SENTENCE));
    }

    #[test]
    fn test_extended_adds_track_record_when_years_present() {
        let out = enhance_extended("Experienced developer with 8 years in fintech");
        assert!(!out.contains(YEARS_SENTENCE));
        assert!(out.contains(TRACK_RECORD_SENTENCE));
    }

    #[test]
    fn test_extended_skips_leadership_when_mentoring_mentioned() {
        let out = enhance_extended("Experienced developer who mentored interns for 3 years");
        assert!(!out.contains(LEADERSHIP_SENTENCE));
    }

    #[test]
    fn test_extended_closing_only_for_short_text() {
        let short = enhance_extended("Experienced lead, 5+ years. Proven track record leading teams");
        assert!(short.ends_with(CLOSING_SENTENCE));

        let long = format!(
            "Experienced lead, 5+ years. Proven track record leading teams. {}",
            "x".repeat(150)
        );
        assert_eq!(enhance_extended(&long), long);
    }

    #[test]
    fn test_extended_preserves_leading_whitespace() {
        let out = enhance_extended("   Designer");
        assert!(out.starts_with("   Experienced designer"));
    }

    #[test]
    fn test_extended_converges_after_second_pass() {
        let once = enhance_extended("Software engineer building web apps");
        let twice = enhance_extended(&once);
        let thrice = enhance_extended(&twice);
        assert_ne!(once, twice, "second pass adds the track record sentence");
        assert_eq!(twice, thrice);
    }
}
