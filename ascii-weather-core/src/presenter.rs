//! Lays out the text column next to the art and colors the result.

use chrono::{DateTime, TimeZone};
use colored::{Color, ColoredString, Colorize};

use crate::{
    model::WeatherObservation,
    scenario::{SceneColor, Scenario},
};

pub const ATTRIBUTION: &str = "thanks to OpenWeatherMap.org";

/// Rounds half to even, so 72.5 becomes 72 and 73.5 becomes 74.
pub fn round_reading(value: f64) -> i64 {
    value.round_ties_even() as i64
}

pub fn format_temperature(value: f64) -> String {
    format!("{}°F", round_reading(value))
}

pub fn format_wind(value: f64) -> String {
    format!("{} mph", round_reading(value))
}

/// 12-hour clock with AM/PM, e.g. `02:05 PM`.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%I:%M %p").to_string()
}

/// Builds the three text rows: temperature, condition and wind, then time.
pub fn text_rows<Tz: TimeZone>(
    observation: &WeatherObservation,
    now: &DateTime<Tz>,
    width: usize,
) -> [String; 3]
where
    Tz::Offset: std::fmt::Display,
{
    let temperature = format_temperature(observation.temperature_f);
    let feels_like = format_temperature(observation.feels_like_f);
    let wind = format_wind(observation.wind_speed_mph);
    let clock = format_clock(now);

    [
        format!("{temperature:<width$} feels like {feels_like}"),
        format!("{:<width$} wind {wind}", observation.condition),
        format!("{clock:<width$} {ATTRIBUTION}"),
    ]
}

/// Pairs art rows with text rows; the longer side is truncated.
pub fn join_rows<S: AsRef<str>>(art: &[&str], text: &[S], padding: &str) -> Vec<String> {
    art.iter()
        .zip(text)
        .map(|(a, t)| [*a, t.as_ref()].join(padding))
        .collect()
}

fn terminal_color(color: SceneColor) -> Color {
    match color {
        SceneColor::Grey => Color::BrightBlack,
        SceneColor::Magenta => Color::Magenta,
        SceneColor::Blue => Color::Blue,
        SceneColor::Yellow => Color::Yellow,
        SceneColor::Cyan => Color::Cyan,
        SceneColor::White => Color::White,
    }
}

/// Final output: plain lines plus the color they are printed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub lines: Vec<String>,
    pub color: SceneColor,
}

impl Rendered {
    pub fn colored_lines(&self) -> impl Iterator<Item = ColoredString> + '_ {
        let color = terminal_color(self.color);
        self.lines.iter().map(move |l| l.as_str().color(color))
    }
}

pub fn render<Tz: TimeZone>(
    observation: &WeatherObservation,
    scenario: Scenario,
    now: &DateTime<Tz>,
    width: usize,
    padding: &str,
) -> Rendered
where
    Tz::Offset: std::fmt::Display,
{
    let text = text_rows(observation, now, width);

    Rendered {
        lines: join_rows(scenario.art.lines(), &text, padding),
        color: scenario.color,
    }
}
