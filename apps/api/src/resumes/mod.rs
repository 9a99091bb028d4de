// Resume persistence: authoritative in-memory store plus a best-effort
// JSON file mirror.

pub mod handlers;
pub mod mirror;
pub mod store;

pub use mirror::JsonFileMirror;
pub use store::{IdStrategy, ResumeStore};
