//! vibe-planner-rs: a lightweight plan-text parsing library for
//! LLM-generated hangout plans
//!
//! The generative service behind a conversational planning UI answers in a
//! loose, colon-delimited markdown micro-format: `---`-separated option
//! segments, `Label: value` field lines, nested checklist and picnic
//! sub-blocks, and an optional trailing recommendation sentence. This
//! library turns those blocks into structured records a UI can render, and
//! handles the "final plan + travel forecast" composite produced once an
//! option is chosen.
//!
//! The parser is pure and synchronous: the same input text always yields
//! the same structured output, derived render ids included, so callers may
//! memoize on the raw text. Malformed or missing fields degrade to
//! documented defaults instead of erroring.
//!
//! # Quick Start
//!
//! ```rust
//! use vibe_planner_rs::{get_recommended_plan_title, parse_plans};
//!
//! let text = "Title: Skybar 25\nLocation: Villaggio, Accra\n---\nRecommendation: Skybar 25";
//! let parsed = parse_plans(text);
//!
//! assert_eq!(parsed.plans.len(), 1);
//! assert_eq!(parsed.plans[0].title, "Skybar 25");
//!
//! let recommended = get_recommended_plan_title(parsed.recommendation.as_deref());
//! assert_eq!(recommended.as_deref(), Some("Skybar 25"));
//! ```

pub mod error;
pub mod planner;
pub mod timing;
pub mod types;

pub use error::{PlannerError, Result};
pub use planner::{
    compose_final_plan, get_destination_from_plan, get_plan_field, get_recommended_plan_title,
    get_title_from_plan, parse_plans, parse_travel_details, split_final_plan,
};
pub use timing::{Timing, TIME_SHORTCUTS};
pub use types::{
    FinalPlanSections, ImageStatus, ParsedPlan, ParsedPlans, ParsedTravelDetails, Vibe,
};

#[cfg(feature = "cli")]
pub mod cli;
