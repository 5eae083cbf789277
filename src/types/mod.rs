pub mod plan;
pub mod vibe;

pub use plan::{FinalPlanSections, ImageStatus, ParsedPlan, ParsedPlans, ParsedTravelDetails};
pub use vibe::Vibe;
