//! Picks the art and color for the current conditions.

use crate::{art::Art, model::ConditionCode};

/// Terminal colors used by scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneColor {
    Grey,
    Magenta,
    Blue,
    Yellow,
    Cyan,
    White,
}

impl SceneColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            SceneColor::Grey => "grey",
            SceneColor::Magenta => "magenta",
            SceneColor::Blue => "blue",
            SceneColor::Yellow => "yellow",
            SceneColor::Cyan => "cyan",
            SceneColor::White => "white",
        }
    }
}

impl std::fmt::Display for SceneColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub art: Art,
    pub color: SceneColor,
}

/// Inputs the rule table matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub category: u32,
    pub subcategory: u32,
    pub windy: bool,
    pub nighttime: bool,
}

impl Conditions {
    pub fn new(code: ConditionCode, wind_speed_mph: f64, hour: u32, high_wind_speed: f64) -> Self {
        Self {
            category: code.category(),
            subcategory: code.subcategory(),
            windy: wind_speed_mph >= high_wind_speed,
            nighttime: is_nighttime(hour),
        }
    }
}

/// Daytime is 06:00 through 20:59 on the local clock. Sunrise and sunset are ignored.
pub fn is_nighttime(hour: u32) -> bool {
    !(6..=20).contains(&hour)
}

struct Rule {
    matches: fn(&Conditions) -> bool,
    art: Art,
    color: SceneColor,
}

const fn rule(matches: fn(&Conditions) -> bool, art: Art, color: SceneColor) -> Rule {
    Rule { matches, art, color }
}

// Evaluated top to bottom; rules overlap, so order matters.
static RULES: &[Rule] = &[
    rule(|c| matches!(c.category, 2 | 5) && c.windy, Art::Chaos, SceneColor::Grey),
    rule(
        |c| c.category == 8 && c.subcategory == 0 && c.nighttime,
        Art::Night,
        SceneColor::Magenta,
    ),
    rule(|c| c.category == 6 && c.nighttime, Art::Snow, SceneColor::Blue),
    rule(|c| c.windy, Art::Wind, SceneColor::Blue),
    rule(|c| c.category == 8 && c.subcategory == 0, Art::Sunny, SceneColor::Yellow),
    rule(|c| c.category == 2, Art::Thunderstorm, SceneColor::Yellow),
    rule(|c| c.category == 3, Art::Drizzle, SceneColor::Cyan),
    rule(|c| c.category == 5, Art::Rain, SceneColor::Blue),
    rule(|c| c.category == 6, Art::Snow, SceneColor::White),
    rule(
        |c| c.category == 8 && matches!(c.subcategory, 2 | 3),
        Art::PartialClouds,
        SceneColor::Blue,
    ),
    rule(|c| c.category == 8 && c.subcategory == 4, Art::Clouds, SceneColor::Blue),
    rule(|c| c.category == 7, Art::Fog, SceneColor::Grey),
];

const FALLBACK: Scenario = Scenario { art: Art::Unknown, color: SceneColor::White };

pub fn select(conditions: &Conditions) -> Scenario {
    RULES
        .iter()
        .find(|r| (r.matches)(conditions))
        .map(|r| Scenario { art: r.art, color: r.color })
        .unwrap_or(FALLBACK)
}

/// Classifies a condition code, wind speed (mph) and local hour (0-23).
pub fn classify(
    code: ConditionCode,
    wind_speed_mph: f64,
    hour: u32,
    high_wind_speed: f64,
) -> Scenario {
    select(&Conditions::new(code, wind_speed_mph, hour, high_wind_speed))
}
