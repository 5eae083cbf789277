//! Plan text parser.
//!
//! Converts the loose, colon-delimited markdown the generative service
//! produces into structured plan records. There is no fixed schema on the
//! wire: every missing or malformed field degrades to a documented default
//! instead of failing, so the only "error" a caller ever sees is an empty
//! result.

use tracing::debug;

use super::section::{SectionMode, CHECKLIST_HEADER, PICNIC_HEADER};
use crate::types::{
    FinalPlanSections, ImageStatus, ParsedPlan, ParsedPlans, ParsedTravelDetails, Vibe,
};

/// Literal label that opens the trailing recommendation sentence.
const RECOMMENDATION_MARKER: &str = "Recommendation:";
/// Per-option delimiter in multi-option plan text.
const OPTION_DELIMITER: &str = "---";
/// Per-composite-document separator between a chosen plan and its travel
/// block. Deliberately not the same splitting rule as [`OPTION_DELIMITER`]:
/// this one requires the surrounding blank line and newline.
const FINAL_PLAN_SEPARATOR: &str = "\n\n---\n";
/// Marker that distinguishes a travel-details block from arbitrary text.
const TRAVEL_ESTIMATE_MARKER: &str = "Travel Estimate";

const MISSING_FIELD: &str = "N/A";
const MISSING_DESCRIPTION: &str = "No description available.";
const MISSING_TRAVEL_FIELD: &str = "Could not be determined";
const FALLBACK_TITLE: &str = "Vibe Plan";
const IMAGE_URL_WARNING: &str = "Image URL missing or invalid; using fallback image";

/// Parse a multi-option plan text block into structured plan records plus
/// the optional trailing recommendation.
///
/// The recommendation is everything from the first literal
/// `"Recommendation:"` to the end of the input, trimmed; the text before it
/// is split on `---`, and each trimmed non-empty segment becomes one
/// [`ParsedPlan`] in source order. Empty or garbage input yields zero plans,
/// never an error.
pub fn parse_plans(content: &str) -> ParsedPlans {
    let (plans_content, recommendation) = match content.find(RECOMMENDATION_MARKER) {
        Some(idx) => (&content[..idx], Some(content[idx..].trim().to_string())),
        None => (content, None),
    };

    let plans: Vec<ParsedPlan> = plans_content
        .split(OPTION_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .enumerate()
        .map(|(index, segment)| parse_plan_segment(index + 1, segment))
        .collect();

    debug!(
        target: "vibe_planner::parser",
        plan_count = plans.len(),
        has_recommendation = recommendation.is_some(),
        "parsed plan options"
    );

    ParsedPlans {
        plans,
        recommendation,
    }
}

/// Parse a travel/weather forecast block.
///
/// Returns `None` unless the literal `"Travel Estimate"` appears somewhere
/// in the text. Each labeled value is extracted independently; a missing
/// label yields `"Could not be determined"` for that field only.
pub fn parse_travel_details(content: &str) -> Option<ParsedTravelDetails> {
    if !content.contains(TRAVEL_ESTIMATE_MARKER) {
        debug!(
            target: "vibe_planner::parser",
            "text has no Travel Estimate marker"
        );
        return None;
    }

    Some(ParsedTravelDetails {
        distance: labeled_value(content, "Distance"),
        travel_time: labeled_value(content, "Travel Time"),
        traffic: labeled_value(content, "Traffic"),
        weather: labeled_value(content, "Weather Forecast"),
    })
}

/// Split a final-plan composite document into its plan and travel halves.
///
/// The separator is the exact literal `"\n\n---\n"`; text before it is the
/// plan section, text between it and any further separator is the travel
/// section. A document without the separator is all plan section.
pub fn split_final_plan(content: &str) -> FinalPlanSections {
    let mut parts = content.split(FINAL_PLAN_SEPARATOR);
    FinalPlanSections {
        plan_section: parts.next().unwrap_or("").to_string(),
        travel_section: parts.next().unwrap_or("").to_string(),
    }
}

/// Build a final-plan composite document from a chosen plan's raw text and
/// a travel-details block.
///
/// This is the inverse of [`split_final_plan`]: the composite is constructed
/// once per selection, immediately re-split for display, and persisted
/// verbatim as history by the surrounding app.
pub fn compose_final_plan(plan: &str, travel: &str) -> String {
    format!("{plan}{FINAL_PLAN_SEPARATOR}{travel}")
}

/// Extract a single labeled field from raw plan text.
///
/// Scans for the first line whose trimmed content starts with `"{key}:"`
/// and returns the trimmed remainder, or an empty string when no such line
/// exists. Works on both multi-option text and a single selected plan, so
/// it is intentionally independent of [`parse_plans`].
pub fn get_plan_field(raw_plan: &str, key: &str) -> String {
    let prefix = format!("{key}:");
    raw_plan
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}

/// The plan's title, or `"Vibe Plan"` when the text has none.
pub fn get_title_from_plan(plan_text: &str) -> String {
    let title = get_plan_field(plan_text, "Title");
    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

/// The plan's destination, or `None` when the text has no `Location` field.
/// Callers surface their own "no destination" state for `None`.
pub fn get_destination_from_plan(plan_text: &str) -> Option<String> {
    let destination = get_plan_field(plan_text, "Location");
    (!destination.is_empty()).then_some(destination)
}

/// Extract the title a recommendation sentence points at.
///
/// Splits on the first `:` and returns the trimmed remainder, or `None`
/// when there is no recommendation, no colon, or nothing after it.
/// Downstream comparison against plan titles is exact string equality, so a
/// recommendation that rewords the title silently matches nothing.
pub fn get_recommended_plan_title(recommendation: Option<&str>) -> Option<String> {
    let remainder = recommendation?.splitn(2, ':').nth(1)?.trim();
    (!remainder.is_empty()).then(|| remainder.to_string())
}

/// Fields collected while scanning one plan segment. `None` and the empty
/// string are equivalent at assembly time: both take the field default.
#[derive(Default)]
struct SegmentFields {
    title: Option<String>,
    category: Option<String>,
    location: Option<String>,
    rating: Option<String>,
    opening_hours: Option<String>,
    description: Option<String>,
    cost: Option<String>,
    estimated_ride_cost: Option<String>,
    weather: Option<String>,
    pro_tip: Option<String>,
    image_url: Option<String>,
    dress_code: Option<String>,
    noise_level: Option<String>,
    seating: Option<String>,
    picnic_items: Vec<String>,
}

fn parse_plan_segment(ordinal: usize, segment: &str) -> ParsedPlan {
    let mut fields = SegmentFields::default();

    segment
        .lines()
        .filter(|line| !line.trim().is_empty())
        .fold(SectionMode::default(), |mode, line| {
            scan_line(mode, line, &mut fields)
        });

    build_plan(ordinal, segment, fields)
}

/// Process one non-blank line: advance the section mode, then dispatch the
/// cleaned key to the field it names.
fn scan_line(mode: SectionMode, line: &str, fields: &mut SegmentFields) -> SectionMode {
    let (raw_key, raw_value) = match line.split_once(':') {
        Some((key, value)) => (key, value),
        None => (line, ""),
    };

    // "OPTION 1" style headers carry no field data. They are dropped before
    // the mode transition, so a header between sub-items does not end the
    // sub-block.
    if raw_key.trim().to_lowercase().contains("option") {
        return mode;
    }

    let is_list_item = line.trim().starts_with(['-', '*']);
    let key = clean_key(raw_key);
    let value = clean_value(raw_value);
    let mode = mode.next(is_list_item, &key);

    match key.as_str() {
        "Title" => fields.title = Some(value),
        "Category" => fields.category = Some(value),
        "Location" => fields.location = Some(value),
        "Rating" => fields.rating = Some(value),
        "Opening Hours" => fields.opening_hours = Some(value),
        "Description" => fields.description = Some(value),
        "Cost" => fields.cost = Some(value),
        "Estimated Ride Cost" => fields.estimated_ride_cost = Some(value),
        "Weather" => fields.weather = Some(value),
        "Pro-Tip" => fields.pro_tip = Some(value),
        "Image URL" => fields.image_url = Some(value),
        // Sub-block headers switch the mode only.
        CHECKLIST_HEADER | PICNIC_HEADER => {}
        _ => match mode {
            SectionMode::Checklist if is_list_item => match key.as_str() {
                "Dress Code" => fields.dress_code = Some(value),
                "Noise Level" => fields.noise_level = Some(value),
                "Seating" => fields.seating = Some(value),
                _ => {}
            },
            SectionMode::Picnic if is_list_item => {
                fields.picnic_items.push(strip_list_marker(line));
            }
            _ => {}
        },
    }

    mode
}

/// Strip one leading `-`/`*` marker run and all `*` emphasis from a key.
fn clean_key(raw: &str) -> String {
    raw.trim_start_matches(['-', '*'])
        .replace('*', "")
        .trim()
        .to_string()
}

/// Strip `*` emphasis from a value. Values keep their inner colons; the
/// key/value split already happened at the first colon only.
fn clean_value(raw: &str) -> String {
    raw.replace('*', "").trim().to_string()
}

/// Drop the leading marker character of a picnic list item and trim.
fn strip_list_marker(line: &str) -> String {
    let mut chars = line.chars();
    chars.next();
    chars.as_str().trim().to_string()
}

fn build_plan(ordinal: usize, segment: &str, fields: SegmentFields) -> ParsedPlan {
    let mut parse_warnings = Vec::new();

    let title = or_default(fields.title, MISSING_FIELD);
    let location = or_default(fields.location, MISSING_FIELD);

    // Unrecognized categories degrade; the parser never invents a vibe.
    let category = fields
        .category
        .and_then(|value| value.parse::<Vibe>().ok())
        .unwrap_or(Vibe::Unknown);

    let (image_url, image_status) = match fields
        .image_url
        .filter(|url| is_external_image_url(url))
    {
        Some(url) => (url, ImageStatus::External),
        None => {
            parse_warnings.push(IMAGE_URL_WARNING.to_string());
            (String::new(), ImageStatus::Fallback)
        }
    };

    ParsedPlan {
        id: derive_plan_id(ordinal, &title, &location),
        raw_content: segment.to_string(),
        title,
        image_url,
        image_status,
        parse_warnings,
        category,
        location,
        rating: or_default(fields.rating, MISSING_FIELD),
        opening_hours: or_default(fields.opening_hours, MISSING_FIELD),
        description: or_default(fields.description, MISSING_DESCRIPTION),
        cost: or_default(fields.cost, MISSING_FIELD),
        pro_tip: or_default(fields.pro_tip, MISSING_FIELD),
        dress_code: or_default(fields.dress_code, MISSING_FIELD),
        noise_level: or_default(fields.noise_level, MISSING_FIELD),
        seating: or_default(fields.seating, MISSING_FIELD),
        picnic_essentials: (!fields.picnic_items.is_empty()).then_some(fields.picnic_items),
        estimated_ride_cost: fields.estimated_ride_cost,
        weather: fields.weather,
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Accepts `http://` / `https://` URLs (any case) with a non-empty rest.
fn is_external_image_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://"].iter().any(|scheme| {
        value.len() > scheme.len()
            && value
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Stable render key: lowercased `{ordinal}-{title}-{location}` with runs of
/// non-alphanumeric characters collapsed to single hyphens and no hyphens at
/// either end. Deterministic for a given input, not globally unique.
fn derive_plan_id(ordinal: usize, title: &str, location: &str) -> String {
    let raw = format!("{ordinal}-{title}-{location}").to_lowercase();
    let mut id = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            id.push(ch);
        } else if !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }
    if id.ends_with('-') {
        id.pop();
    }
    id
}

/// First `"{label}:"` occurrence anywhere in the text; the value is the rest
/// of that line after any whitespace.
fn labeled_value(content: &str, label: &str) -> String {
    let needle = format!("{label}:");
    match content.find(&needle) {
        Some(idx) => content[idx + needle.len()..]
            .trim_start()
            .split(['\n', '\r'])
            .next()
            .unwrap_or("")
            .trim_end()
            .to_string(),
        None => MISSING_TRAVEL_FIELD.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_OPTION_SAMPLE: &str = "OPTION 1
Title: Skybar 25
Image URL: https://example.com/1.jpg
Category: Food & Nightlife
Location: Skybar 25, Villaggio, Accra
Rating: 4.5/5 stars
Opening Hours: 6:00 PM - 1:00 AM
Essentials Checklist:
- Dress Code: Smart Casual
- Noise Level: Lively
- Seating: Private tables
Description: Rooftop drinks with a city view.
Cost: GH\u{20b5}200
Pro-Tip: Book early.
---
OPTION 2
Title: Sandbox Beach Club
Image URL: https://example.com/2.jpg
Category: Relax & Unwind
Location: Sandbox, Labadi, Accra
Rating: 4.3/5 stars
Opening Hours: 10:00 AM - 10:00 PM
Essentials Checklist:
- Dress Code: Casual
- Noise Level: Moderate
- Seating: Mixed seating
Description: Beachside chill and sunset vibe.
Cost: GH\u{20b5}120
Pro-Tip: Go before sunset.
---
Recommendation: Pick Skybar 25 for a stronger nightlife vibe.";

    #[test]
    fn parses_plan_options_and_recommendation() {
        let parsed = parse_plans(TWO_OPTION_SAMPLE);

        assert_eq!(parsed.plans.len(), 2);
        let first = &parsed.plans[0];
        assert_eq!(first.title, "Skybar 25");
        assert_eq!(first.category, Vibe::FoodNightlife);
        assert!(first.location.contains("Accra"));
        assert_eq!(first.image_url, "https://example.com/1.jpg");
        assert_eq!(first.image_status, ImageStatus::External);
        assert!(first.parse_warnings.is_empty());
        assert_eq!(first.dress_code, "Smart Casual");
        assert_eq!(first.noise_level, "Lively");
        assert_eq!(first.seating, "Private tables");
        // Values keep their inner colons.
        assert_eq!(first.opening_hours, "6:00 PM - 1:00 AM");

        let recommendation = parsed.recommendation.as_deref().unwrap();
        assert!(recommendation.starts_with("Recommendation:"));
    }

    #[test]
    fn segment_count_matches_delimiters_without_recommendation() {
        let text = "Title: A\n---\nTitle: B\n---\nTitle: C";
        let parsed = parse_plans(text);
        assert_eq!(parsed.plans.len(), 3);
        assert_eq!(parsed.recommendation, None);
    }

    #[test]
    fn raw_content_is_the_trimmed_segment() {
        let parsed = parse_plans(TWO_OPTION_SAMPLE);
        assert!(parsed.plans[0].raw_content.starts_with("OPTION 1"));
        assert!(parsed.plans[0].raw_content.ends_with("Book early."));
        assert!(parsed.plans[1].raw_content.starts_with("OPTION 2"));
    }

    #[test]
    fn round_trips_title_through_get_plan_field() {
        let parsed = parse_plans(TWO_OPTION_SAMPLE);
        for plan in &parsed.plans {
            assert_eq!(get_plan_field(&plan.raw_content, "Title"), plan.title);
        }
    }

    #[test]
    fn parsing_is_deterministic() {
        let first = parse_plans(TWO_OPTION_SAMPLE);
        let second = parse_plans(TWO_OPTION_SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn spec_example_two_plans_and_recommendation() {
        let text = "Title: Spot X\nLocation: Osu, Accra\n---\nTitle: Spot Y\nLocation: Labadi, Accra\n---\nRecommendation: Go with Spot X.";
        let parsed = parse_plans(text);

        assert_eq!(parsed.plans.len(), 2);
        assert_eq!(parsed.plans[0].title, "Spot X");
        assert_eq!(parsed.plans[1].title, "Spot Y");
        assert_eq!(
            parsed.recommendation.as_deref(),
            Some("Recommendation: Go with Spot X.")
        );
        assert_eq!(
            get_recommended_plan_title(parsed.recommendation.as_deref()),
            Some("Go with Spot X.".to_string())
        );
    }

    #[test]
    fn unrecognized_fields_degrade_to_defaults() {
        let parsed = parse_plans("Just some prose without any labels");
        assert_eq!(parsed.plans.len(), 1);

        let plan = &parsed.plans[0];
        assert_eq!(plan.title, "N/A");
        assert_eq!(plan.location, "N/A");
        assert_eq!(plan.rating, "N/A");
        assert_eq!(plan.opening_hours, "N/A");
        assert_eq!(plan.description, "No description available.");
        assert_eq!(plan.cost, "N/A");
        assert_eq!(plan.pro_tip, "N/A");
        assert_eq!(plan.dress_code, "N/A");
        assert_eq!(plan.noise_level, "N/A");
        assert_eq!(plan.seating, "N/A");
        assert_eq!(plan.category, Vibe::Unknown);
        assert_eq!(plan.picnic_essentials, None);
        assert_eq!(plan.estimated_ride_cost, None);
        assert_eq!(plan.weather, None);
    }

    #[test]
    fn empty_and_whitespace_input_yield_no_plans() {
        assert!(parse_plans("").plans.is_empty());
        assert!(parse_plans("  \n \n ").plans.is_empty());
        assert!(parse_plans("---\n---").plans.is_empty());
    }

    #[test]
    fn empty_field_values_take_the_default() {
        let parsed = parse_plans("Title:\nLocation:   ");
        assert_eq!(parsed.plans[0].title, "N/A");
        assert_eq!(parsed.plans[0].location, "N/A");
    }

    #[test]
    fn unrecognized_category_degrades_to_unknown() {
        let parsed = parse_plans("Title: Somewhere\nCategory: Underwater Basket Weaving");
        assert_eq!(parsed.plans[0].category, Vibe::Unknown);
    }

    #[test]
    fn markers_and_emphasis_are_stripped() {
        let text = "- **Title**: *Golden Hour*\n* Category: Romantic Date";
        let parsed = parse_plans(text);
        assert_eq!(parsed.plans[0].title, "Golden Hour");
        assert_eq!(parsed.plans[0].category, Vibe::RomanticDate);
    }

    #[test]
    fn checklist_fields_from_spec_example() {
        let text =
            "Essentials Checklist:\n- Dress Code: Casual\n- Noise Level: Quiet\n- Seating: Outdoor";
        let plan = &parse_plans(text).plans[0];
        assert_eq!(plan.dress_code, "Casual");
        assert_eq!(plan.noise_level, "Quiet");
        assert_eq!(plan.seating, "Outdoor");
    }

    #[test]
    fn checklist_ends_at_first_top_level_line() {
        let text = "Essentials Checklist:\n- Dress Code: Casual\nDescription: Back at top level\n- Noise Level: Quiet";
        let plan = &parse_plans(text).plans[0];
        assert_eq!(plan.dress_code, "Casual");
        assert_eq!(plan.description, "Back at top level");
        // The stray list item after the block ended is ignored.
        assert_eq!(plan.noise_level, "N/A");
    }

    #[test]
    fn checklist_keys_inside_picnic_block_are_not_captured() {
        let text = "Picnic Essentials:\n- Dress Code: Casual\n- Blanket";
        let plan = &parse_plans(text).plans[0];
        assert_eq!(plan.dress_code, "N/A");
        // They land in the picnic list instead, marker stripped.
        assert_eq!(
            plan.picnic_essentials,
            Some(vec!["Dress Code: Casual".to_string(), "Blanket".to_string()])
        );
    }

    #[test]
    fn picnic_items_keep_source_order() {
        let text = "Picnic Essentials:\n- Blanket\n- Cooler with drinks\n* Bluetooth speaker";
        let plan = &parse_plans(text).plans[0];
        assert_eq!(
            plan.picnic_essentials,
            Some(vec![
                "Blanket".to_string(),
                "Cooler with drinks".to_string(),
                "Bluetooth speaker".to_string(),
            ])
        );
    }

    #[test]
    fn option_headers_are_skipped() {
        let text = "OPTION 1\nTitle: The Spot";
        let parsed = parse_plans(text);
        assert_eq!(parsed.plans.len(), 1);
        assert_eq!(parsed.plans[0].title, "The Spot");
    }

    #[test]
    fn invalid_image_url_falls_back_with_warning() {
        let text = "Title: Mystery Spot\nImage URL: not-a-url";
        let plan = &parse_plans(text).plans[0];
        assert_eq!(plan.image_url, "");
        assert_eq!(plan.image_status, ImageStatus::Fallback);
        assert!(plan.parse_warnings.join(" ").contains("Image URL"));
    }

    #[test]
    fn missing_image_url_also_warns() {
        let plan = &parse_plans("Title: No Image Here").plans[0];
        assert_eq!(plan.image_status, ImageStatus::Fallback);
        assert!(plan.parse_warnings.join(" ").contains("Image URL"));
    }

    #[test]
    fn image_url_scheme_is_case_insensitive() {
        let plan = &parse_plans("Title: X\nImage URL: HTTPS://example.com/x.jpg").plans[0];
        assert_eq!(plan.image_status, ImageStatus::External);
        assert_eq!(plan.image_url, "HTTPS://example.com/x.jpg");
    }

    #[test]
    fn estimated_ride_cost_and_weather_stay_optional() {
        let text = "Title: A\nEstimated Ride Cost: GH\u{20b5}30 - GH\u{20b5}45\nWeather: Clear skies";
        let plan = &parse_plans(text).plans[0];
        assert_eq!(
            plan.estimated_ride_cost.as_deref(),
            Some("GH\u{20b5}30 - GH\u{20b5}45")
        );
        assert_eq!(plan.weather.as_deref(), Some("Clear skies"));
    }

    #[test]
    fn ids_are_ordinal_title_location_slugs() {
        let parsed = parse_plans(TWO_OPTION_SAMPLE);
        assert_eq!(parsed.plans[0].id, "1-skybar-25-skybar-25-villaggio-accra");
        assert_eq!(
            parsed.plans[1].id,
            "2-sandbox-beach-club-sandbox-labadi-accra"
        );
    }

    #[test]
    fn id_slug_collapses_symbol_runs() {
        assert_eq!(derive_plan_id(3, "Caf\u{e9} -- Nkran!", "Osu"), "3-caf-nkran-osu");
        assert_eq!(derive_plan_id(1, "N/A", "N/A"), "1-n-a-n-a");
    }

    #[test]
    fn recommendation_alone_yields_no_plans() {
        let parsed = parse_plans("Recommendation: Stay home and rest.");
        assert!(parsed.plans.is_empty());
        assert_eq!(
            parsed.recommendation.as_deref(),
            Some("Recommendation: Stay home and rest.")
        );
    }

    #[test]
    fn recommended_title_handles_missing_pieces() {
        assert_eq!(get_recommended_plan_title(None), None);
        assert_eq!(get_recommended_plan_title(Some("no colon here")), None);
        assert_eq!(get_recommended_plan_title(Some("Recommendation:")), None);
        assert_eq!(
            get_recommended_plan_title(Some("Recommendation: Meet at 5:30 PM")),
            Some("Meet at 5:30 PM".to_string())
        );
    }

    #[test]
    fn travel_details_require_the_marker() {
        assert_eq!(parse_travel_details(""), None);
        assert_eq!(
            parse_travel_details("Distance: 4 km\nTravel Time: 20 minutes"),
            None
        );
    }

    #[test]
    fn travel_details_extract_all_labels() {
        let text = "Title: Travel & Weather Forecast\nTravel Estimate:\nDistance: 12.4 km\nTravel Time: 35 minutes\nTraffic: Heavy on Ring Road\nWeather Forecast: Partly cloudy, 29\u{b0}C";
        let details = parse_travel_details(text).unwrap();
        assert_eq!(details.distance, "12.4 km");
        assert_eq!(details.travel_time, "35 minutes");
        assert_eq!(details.traffic, "Heavy on Ring Road");
        assert_eq!(details.weather, "Partly cloudy, 29\u{b0}C");
    }

    #[test]
    fn travel_details_degrade_per_field() {
        let details = parse_travel_details("Travel Estimate:\nDistance: 3 km").unwrap();
        assert_eq!(details.distance, "3 km");
        assert_eq!(details.travel_time, "Could not be determined");
        assert_eq!(details.traffic, "Could not be determined");
        assert_eq!(details.weather, "Could not be determined");
    }

    #[test]
    fn split_final_plan_spec_examples() {
        let split = split_final_plan("A\n\n---\nB");
        assert_eq!(split.plan_section, "A");
        assert_eq!(split.travel_section, "B");

        let split = split_final_plan("just text");
        assert_eq!(split.plan_section, "just text");
        assert_eq!(split.travel_section, "");

        let split = split_final_plan("");
        assert_eq!(split.plan_section, "");
        assert_eq!(split.travel_section, "");
    }

    #[test]
    fn option_delimiter_alone_does_not_split_final_plan() {
        // The composite separator needs the surrounding blank line; a bare
        // option delimiter stays inside the plan section.
        let split = split_final_plan("A\n---\nB");
        assert_eq!(split.plan_section, "A\n---\nB");
        assert_eq!(split.travel_section, "");
    }

    #[test]
    fn compose_and_split_round_trip() {
        let composite = compose_final_plan("Title: Bistro\nLocation: Osu, Accra", "Travel Estimate:\nDistance: 2 km");
        let split = split_final_plan(&composite);
        assert_eq!(split.plan_section, "Title: Bistro\nLocation: Osu, Accra");
        assert_eq!(split.travel_section, "Travel Estimate:\nDistance: 2 km");
    }

    #[test]
    fn get_plan_field_scans_trimmed_lines() {
        let raw = "  Title: Polo Club\nLocation: Airport Residential Area, Accra";
        assert_eq!(get_plan_field(raw, "Title"), "Polo Club");
        assert_eq!(
            get_plan_field(raw, "Location"),
            "Airport Residential Area, Accra"
        );
        assert_eq!(get_plan_field(raw, "Cost"), "");
    }

    #[test]
    fn title_and_destination_wrappers() {
        let raw = "Title: Polo Club\nLocation: Polo Club, Airport Residential Area, Accra";
        assert_eq!(get_title_from_plan(raw), "Polo Club");
        assert_eq!(
            get_destination_from_plan(raw).as_deref(),
            Some("Polo Club, Airport Residential Area, Accra")
        );

        assert_eq!(get_title_from_plan("no labels"), "Vibe Plan");
        assert_eq!(get_destination_from_plan("no labels"), None);
    }
}
