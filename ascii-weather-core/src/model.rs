use serde::{Deserialize, Serialize};

/// Latitude/longitude pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lon)
    }
}

/// OpenWeatherMap condition id, e.g. `500` for light rain.
///
/// The hundreds digit is the main group, the remaining two digits the subgroup.
/// See <https://openweathermap.org/weather-conditions>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionCode(pub u32);

impl ConditionCode {
    pub fn category(self) -> u32 {
        self.0 / 100
    }

    pub fn subcategory(self) -> u32 {
        self.0 % 100
    }
}

/// Current conditions as reported by the weather provider, in imperial units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location_name: String,
    pub condition_code: ConditionCode,
    pub condition: String,
    pub temperature_f: f64,
    pub feels_like_f: f64,
    pub wind_speed_mph: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_code_splits_into_category_and_subcategory() {
        let code = ConditionCode(803);
        assert_eq!(code.category(), 8);
        assert_eq!(code.subcategory(), 3);

        let code = ConditionCode(200);
        assert_eq!(code.category(), 2);
        assert_eq!(code.subcategory(), 0);
    }

    #[test]
    fn coordinates_range_check() {
        assert!(Coordinates { lat: 47.6, lon: -122.3 }.is_valid());
        assert!(Coordinates { lat: -90.0, lon: 180.0 }.is_valid());
        assert!(!Coordinates { lat: 90.5, lon: 0.0 }.is_valid());
        assert!(!Coordinates { lat: 0.0, lon: -180.1 }.is_valid());
    }
}
