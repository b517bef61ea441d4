use serde::Deserialize;
use std::fmt;

/// A catalog entry. Tracks are created once when the catalog loads and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub tempo: u32, // beats per minute
    pub holiday: Option<Holiday>,
}

impl Track {
    pub fn new(title: &str, artist: &str, tempo: u32, holiday: Option<Holiday>) -> Self {
        Track {
            title: title.to_string(),
            artist: artist.to_string(),
            tempo,
            holiday,
        }
    }

    /// The band this track's tempo falls in first, for display purposes
    pub fn tempo_band(&self) -> TempoBand {
        TempoBand::for_tempo(self.tempo)
    }
}

/// Calendar occasions a track can be associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holiday {
    Christmas,
    Halloween,
    ValentinesDay,
    FourthOfJuly,
}

impl Holiday {
    pub const ALL: [Holiday; 4] = [
        Holiday::Christmas,
        Holiday::Halloween,
        Holiday::ValentinesDay,
        Holiday::FourthOfJuly,
    ];

    /// The literal tag used for this holiday in the catalog file
    pub fn tag(self) -> &'static str {
        match self {
            Holiday::Christmas => "Christmas",
            Holiday::Halloween => "Halloween",
            Holiday::ValentinesDay => "Valentine's Day",
            Holiday::FourthOfJuly => "Fourth of July",
        }
    }

    /// Parse a catalog tag. Whitespace is normalized before the exact comparison,
    /// so " Christmas" and "Fourth  of July" both resolve. Anything else,
    /// including "No Association", means the track has no holiday.
    pub fn from_tag(raw: &str) -> Option<Holiday> {
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        Self::ALL.into_iter().find(|h| h.tag() == normalized)
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tempo bands derived from weather conditions. The energetic and moderate
/// bands share 110 BPM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempoBand {
    Energetic,
    Moderate,
    Calm,
}

impl TempoBand {
    pub fn admits(self, tempo: u32) -> bool {
        match self {
            TempoBand::Energetic => tempo >= 110,
            TempoBand::Moderate => (90..=110).contains(&tempo),
            TempoBand::Calm => tempo <= 89,
        }
    }

    pub fn for_tempo(tempo: u32) -> TempoBand {
        if tempo >= 110 {
            TempoBand::Energetic
        } else if tempo >= 90 {
            TempoBand::Moderate
        } else {
            TempoBand::Calm
        }
    }
}

impl fmt::Display for TempoBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TempoBand::Energetic => "energetic",
            TempoBand::Moderate => "moderate",
            TempoBand::Calm => "calm",
        };
        f.write_str(name)
    }
}

/// Temperature unit requested from the weather service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value of the weather service's `units` query parameter
    pub fn api_param(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "standard",
            TemperatureUnit::Celsius => "metric",
            TemperatureUnit::Fahrenheit => "imperial",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn parse(value: &str) -> Option<TemperatureUnit> {
        match value.trim().to_lowercase().as_str() {
            "standard" | "kelvin" => Some(TemperatureUnit::Kelvin),
            "metric" | "celsius" => Some(TemperatureUnit::Celsius),
            "imperial" | "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            _ => None,
        }
    }
}

/// Current conditions for a city, as structured data
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub condition: String, // free-form description, e.g. "clear sky"
    pub temperature: f64,
    pub unit: TemperatureUnit,
}

impl WeatherObservation {
    pub fn celsius(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Kelvin => self.temperature - 273.15,
            TemperatureUnit::Celsius => self.temperature,
            TemperatureUnit::Fahrenheit => (self.temperature - 32.0) * 5.0 / 9.0,
        }
    }
}

impl fmt::Display for WeatherObservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} with a temperature of {:.1}{}",
            self.condition,
            self.temperature,
            self.unit.symbol()
        )
    }
}

/// Response body of the current weather endpoint (only the fields we read)
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
}

#[derive(Debug, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
}
