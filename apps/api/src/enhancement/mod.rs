// Mock "AI" enhancement: deterministic, section-specific text rewriting.
// No model calls; every rule is a fixed substitution or conditional append.

pub mod experience;
pub mod handlers;
pub mod rules;
pub mod summary;
pub mod text;

pub use rules::{enhance, RuleSet};
