//! Fixed ASCII art blocks, one per kind of weather.
//!
//! Rows inside a block share the same width so the text column to their
//! right stays aligned.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Art {
    Chaos,
    Night,
    Snow,
    Wind,
    Sunny,
    Thunderstorm,
    Drizzle,
    Rain,
    PartialClouds,
    Clouds,
    Fog,
    /// Shown when no rule matches the condition code.
    Unknown,
}

impl Art {
    pub fn name(self) -> &'static str {
        match self {
            Art::Chaos => "chaos",
            Art::Night => "night",
            Art::Snow => "snow",
            Art::Wind => "wind",
            Art::Sunny => "sunny",
            Art::Thunderstorm => "thunderstorm",
            Art::Drizzle => "drizzle",
            Art::Rain => "rain",
            Art::PartialClouds => "partial clouds",
            Art::Clouds => "clouds",
            Art::Fog => "fog",
            Art::Unknown => "?",
        }
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            Art::Chaos => CHAOS,
            Art::Night => NIGHT,
            Art::Snow => SNOW,
            Art::Wind => WIND,
            Art::Sunny => SUNNY,
            Art::Thunderstorm => THUNDERSTORM,
            Art::Drizzle => DRIZZLE,
            Art::Rain => RAIN,
            Art::PartialClouds => PARTIAL_CLOUDS,
            Art::Clouds => CLOUDS,
            Art::Fog => FOG,
            Art::Unknown => UNKNOWN,
        }
    }

    pub const fn all() -> &'static [Art] {
        &[
            Art::Chaos,
            Art::Night,
            Art::Snow,
            Art::Wind,
            Art::Sunny,
            Art::Thunderstorm,
            Art::Drizzle,
            Art::Rain,
            Art::PartialClouds,
            Art::Clouds,
            Art::Fog,
            Art::Unknown,
        ]
    }
}

impl std::fmt::Display for Art {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

static CHAOS: &[&str] = &[
    r" ~/\/\/~\/~ ",
    r"  ,/  '' ,  ",
    r" '/~ ,'/ ~' ",
];

static NIGHT: &[&str] = &[
    r"   _..   *  ",
    r"  (  (   .  ",
    r" * '--'   * ",
];

static SNOW: &[&str] = &[
    r"    .--.    ",
    r" .-(    ).  ",
    r"  *  *  *   ",
];

static WIND: &[&str] = &[
    r"  ~~~~~~~>  ",
    r" ~~~~~~~~~> ",
    r"   ~~~~~>   ",
];

static SUNNY: &[&str] = &[
    r"   \  |  /  ",
    r"  -- ( ) -- ",
    r"   /  |  \  ",
];

static THUNDERSTORM: &[&str] = &[
    r"    .--.    ",
    r" .-(    ).  ",
    r"   /_ /_    ",
];

static DRIZZLE: &[&str] = &[
    r"    .--.    ",
    r" .-(    ).  ",
    r"  ' ' ' '   ",
];

static RAIN: &[&str] = &[
    r"    .--.    ",
    r" .-(    ).  ",
    r" /// /// // ",
];

static PARTIAL_CLOUDS: &[&str] = &[
    r"  \  /      ",
    r" _ /''.-.   ",
    r"   \_(   ). ",
];

static CLOUDS: &[&str] = &[
    r"    .--.    ",
    r" .-(    ).  ",
    r"(___.__)__) ",
];

static FOG: &[&str] = &[
    r" _ - _ - _  ",
    r"  _ - _ - _ ",
    r" _ - _ - _  ",
];

static UNKNOWN: &[&str] = &["?"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_in_a_block_share_one_width() {
        for art in Art::all() {
            let lines = art.lines();
            assert!(!lines.is_empty(), "{art} has no rows");

            let width = lines[0].chars().count();
            for line in lines {
                assert_eq!(line.chars().count(), width, "ragged row in {art}: {line:?}");
            }
        }
    }

    #[test]
    fn unknown_is_a_single_question_mark() {
        assert_eq!(Art::Unknown.lines(), &["?"]);
        assert_eq!(Art::Unknown.name(), "?");
    }
}
