use thiserror::Error;

/// Main error type for the planner library.
///
/// The plan text parser itself never fails: malformed input degrades to the
/// documented field defaults. These errors come from the strict auxiliary
/// operations (vibe-category parsing, strict datetime parsing).
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("unrecognized vibe category: {0:?}")]
    UnknownVibe(String),

    #[error("invalid planning datetime {value:?} (expected YYYY-MM-DDTHH:MM)")]
    InvalidDateTime { value: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;
