use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::vibe::Vibe;

/// Where a plan card's image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageStatus {
    /// The plan text carried a well-formed external image URL.
    External,
    /// No usable image URL; the UI substitutes its own artwork.
    Fallback,
}

/// One recommended outing option, extracted from a single `---`-delimited
/// segment of generated plan text.
///
/// Every free-text field defaults to `"N/A"` (description to
/// `"No description available."`) when the source segment omits it, so
/// display code never has to null-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedPlan {
    /// Stable render key derived from ordinal, title and location.
    /// Deterministic for a given input text, not globally unique.
    pub id: String,
    /// The exact source substring this record was parsed from. Required for
    /// single-field lookups and for persisting the plan verbatim.
    pub raw_content: String,
    /// Display title of the option
    pub title: String,
    /// External image URL, or empty when missing/malformed
    pub image_url: String,
    /// Whether `image_url` is usable or the UI should fall back
    pub image_status: ImageStatus,
    /// Human-readable notes about fields that had to be degraded
    pub parse_warnings: Vec<String>,
    /// Vibe category, [`Vibe::Unknown`] when unrecognized
    pub category: Vibe,
    /// Venue location text
    pub location: String,
    /// Free-text rating (e.g. "4.5/5 stars")
    pub rating: String,
    /// Free-text opening hours
    pub opening_hours: String,
    /// Longer description of the option
    pub description: String,
    /// Free-text cost estimate
    pub cost: String,
    /// One practical tip for the outing
    pub pro_tip: String,
    /// Dress code from the essentials checklist sub-block
    pub dress_code: String,
    /// Noise level from the essentials checklist sub-block
    pub noise_level: String,
    /// Seating from the essentials checklist sub-block
    pub seating: String,
    /// Items of the picnic sub-block, in source order; absent when the
    /// segment has no picnic block
    pub picnic_essentials: Option<Vec<String>>,
    /// Estimated ride-hailing cost, when the text provides one
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_ride_cost: Option<String>,
    /// Weather note attached to the option, when the text provides one
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
}

/// Result of parsing a multi-option plan text block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedPlans {
    /// Plan options in source order
    pub plans: Vec<ParsedPlan>,
    /// The trailing recommendation sentence, marker included, when present.
    /// Independent of how many options parsed.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Distance/time/traffic/weather forecast for a chosen destination.
///
/// Fields the travel text does not provide are set to
/// `"Could not be determined"`; one missing label never fails the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParsedTravelDetails {
    /// Distance to the destination
    pub distance: String,
    /// Estimated travel time
    pub travel_time: String,
    /// Expected traffic conditions
    pub traffic: String,
    /// Weather forecast for the intended time
    pub weather: String,
}

/// The two halves of a final-plan composite document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FinalPlanSections {
    /// The chosen plan's raw text
    pub plan_section: String,
    /// The travel/weather forecast block, empty when the document has no
    /// separator
    pub travel_section: String,
}
