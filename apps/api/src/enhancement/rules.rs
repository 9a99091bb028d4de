//! Section dispatch for the mock enhancement engine.
//!
//! Two rule sets exist: `Basic` (short) and `Extended` (the
//! longer variant with phrase tables and conditional sentences). The active
//! one is picked at startup from `ENHANCEMENT_RULES`.

use std::fmt;
use std::str::FromStr;

use crate::enhancement::{experience, summary};

const DEFAULT_PREFIX: &str = "Enhanced: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleSet {
    Basic,
    #[default]
    Extended,
}

impl RuleSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSet::Basic => "basic",
            RuleSet::Extended => "extended",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(RuleSet::Basic),
            "extended" => Ok(RuleSet::Extended),
            other => Err(format!(
                "unknown enhancement rule set '{other}' (expected 'basic' or 'extended')"
            )),
        }
    }
}

/// Rewrites `content` for the named section. Deterministic; blank content
/// is returned untouched under every rule set.
pub fn enhance(rule_set: RuleSet, section: &str, content: &str) -> String {
    if content.trim().is_empty() {
        return content.to_string();
    }

    match (rule_set, section) {
        (RuleSet::Basic, "summary") => summary::enhance_basic(content),
        (RuleSet::Basic, "experience") => experience::enhance_basic(content),
        (RuleSet::Basic, "skills") => content.to_string(),
        (RuleSet::Extended, "summary") => summary::enhance_extended(content),
        (RuleSet::Extended, "experience") => experience::enhance_extended(content),
        _ => format!("{DEFAULT_PREFIX}{content}"),
    }
}
