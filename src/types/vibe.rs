use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Closed set of vibe categories a plan option can carry.
///
/// The generative service is asked to label every option with one of these
/// exact strings. Anything else degrades to [`Vibe::Unknown`], which
/// serializes as the empty string; consumers treat it as "unknown vibe" and
/// pick their own fallback presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Vibe {
    #[serde(rename = "Relax & Unwind")]
    RelaxUnwind,
    #[serde(rename = "Food & Nightlife")]
    FoodNightlife,
    #[serde(rename = "Sports & Games")]
    SportsGames,
    #[serde(rename = "Active & Adventure")]
    ActiveAdventure,
    #[serde(rename = "Movies & Plays")]
    MoviesPlays,
    #[serde(rename = "Romantic Date")]
    RomanticDate,
    #[serde(rename = "Picnic & Parks")]
    PicnicParks,
    /// Unrecognized or absent category.
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Vibe {
    /// Every recognized category, excluding [`Vibe::Unknown`].
    pub const ALL: [Vibe; 7] = [
        Vibe::RelaxUnwind,
        Vibe::FoodNightlife,
        Vibe::SportsGames,
        Vibe::ActiveAdventure,
        Vibe::MoviesPlays,
        Vibe::RomanticDate,
        Vibe::PicnicParks,
    ];

    /// The exact label used in generated plan text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vibe::RelaxUnwind => "Relax & Unwind",
            Vibe::FoodNightlife => "Food & Nightlife",
            Vibe::SportsGames => "Sports & Games",
            Vibe::ActiveAdventure => "Active & Adventure",
            Vibe::MoviesPlays => "Movies & Plays",
            Vibe::RomanticDate => "Romantic Date",
            Vibe::PicnicParks => "Picnic & Parks",
            Vibe::Unknown => "",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vibe {
    type Err = PlannerError;

    /// Exact-match parse. The empty string is a valid member (the "unknown
    /// vibe" sentinel the UI layer round-trips); any other unrecognized
    /// label is an error, which the parser degrades to [`Vibe::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Relax & Unwind" => Ok(Vibe::RelaxUnwind),
            "Food & Nightlife" => Ok(Vibe::FoodNightlife),
            "Sports & Games" => Ok(Vibe::SportsGames),
            "Active & Adventure" => Ok(Vibe::ActiveAdventure),
            "Movies & Plays" => Ok(Vibe::MoviesPlays),
            "Romantic Date" => Ok(Vibe::RomanticDate),
            "Picnic & Parks" => Ok(Vibe::PicnicParks),
            "" => Ok(Vibe::Unknown),
            other => Err(PlannerError::UnknownVibe(other.to_string())),
        }
    }
}
