//! The plan text parser: multi-option plan text, travel-details blocks, and
//! final-plan composite documents.

pub mod parser;
mod section;

pub use parser::{
    compose_final_plan, get_destination_from_plan, get_plan_field, get_recommended_plan_title,
    get_title_from_plan, parse_plans, parse_travel_details, split_final_plan,
};
