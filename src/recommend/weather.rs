use super::CandidateSet;
use crate::catalog::Catalog;
use crate::models::{TempoBand, Track};

/// Condition keywords per band, checked in order; the first band with a hit wins.
/// "partly sunny" contains "sunny" and therefore lands in the energetic band.
const BAND_KEYWORDS: [(TempoBand, &[&str]); 3] = [
    (TempoBand::Energetic, &["clear", "sunny", "few clouds"]),
    (
        TempoBand::Moderate,
        &["partly cloudy", "partly sunny", "broken clouds"],
    ),
    (
        TempoBand::Calm,
        &["cloudy", "rain", "fog", "snow", "overcast"],
    ),
];

/// Optional refinement of the energetic band by temperature.
/// Warm readings keep only the faster end of the band, cool readings the slower end.
#[derive(Debug, Clone, PartialEq)]
pub struct WarmSplit {
    pub threshold_celsius: f64,
    pub warm_min_tempo: u32,
}

impl WarmSplit {
    pub fn new(threshold_celsius: f64) -> Self {
        WarmSplit {
            threshold_celsius,
            warm_min_tempo: 120,
        }
    }

    fn admits(&self, tempo: u32, temperature_celsius: f64) -> bool {
        if temperature_celsius >= self.threshold_celsius {
            tempo >= self.warm_min_tempo
        } else {
            TempoBand::Energetic.admits(tempo) && tempo < self.warm_min_tempo
        }
    }
}

/// Maps a weather observation to the tracks whose tempo suits it
#[derive(Debug, Clone, Default)]
pub struct WeatherClassifier {
    pub warm_split: Option<WarmSplit>,
}

impl WeatherClassifier {
    pub fn new(warm_split: Option<WarmSplit>) -> Self {
        WeatherClassifier { warm_split }
    }

    /// The band matched by a condition description, if any
    pub fn band_for(condition_text: &str) -> Option<TempoBand> {
        let condition = condition_text.to_lowercase();
        BAND_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| condition.contains(k)))
            .map(|(band, _)| *band)
    }

    /// Tracks matching the band for `condition_text`. An unrecognized
    /// condition yields an empty set.
    pub fn classify<'a>(
        &self,
        catalog: &'a Catalog,
        condition_text: &str,
        temperature_celsius: f64,
    ) -> CandidateSet<'a> {
        let Some(band) = Self::band_for(condition_text) else {
            return CandidateSet::empty();
        };

        CandidateSet::filter(catalog, |track: &Track| match (band, &self.warm_split) {
            (TempoBand::Energetic, Some(split)) => split.admits(track.tempo, temperature_celsius),
            _ => band.admits(track.tempo),
        })
    }
}

/// Classify with the canonical rule table (temperature does not narrow the band)
pub fn classify_weather<'a>(
    catalog: &'a Catalog,
    condition_text: &str,
    temperature_celsius: f64,
) -> CandidateSet<'a> {
    WeatherClassifier::default().classify(catalog, condition_text, temperature_celsius)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tempo_catalog() -> Catalog {
        Catalog::new(vec![
            Track::new("Slow", "A", 60, None),
            Track::new("Edge Calm", "B", 89, None),
            Track::new("Edge Moderate", "C", 90, None),
            Track::new("Mid", "D", 100, None),
            Track::new("Shared Edge", "E", 110, None),
            Track::new("Quick", "F", 115, None),
            Track::new("Fast", "G", 130, None),
        ])
    }

    #[test]
    fn test_band_table() {
        assert_eq!(WeatherClassifier::band_for("clear sky"), Some(TempoBand::Energetic));
        assert_eq!(WeatherClassifier::band_for("Sunny"), Some(TempoBand::Energetic));
        assert_eq!(WeatherClassifier::band_for("few clouds"), Some(TempoBand::Energetic));
        assert_eq!(WeatherClassifier::band_for("partly cloudy"), Some(TempoBand::Moderate));
        assert_eq!(WeatherClassifier::band_for("broken clouds"), Some(TempoBand::Moderate));
        assert_eq!(WeatherClassifier::band_for("cloudy"), Some(TempoBand::Calm));
        assert_eq!(WeatherClassifier::band_for("light rain"), Some(TempoBand::Calm));
        assert_eq!(WeatherClassifier::band_for("fog"), Some(TempoBand::Calm));
        assert_eq!(WeatherClassifier::band_for("heavy snow"), Some(TempoBand::Calm));
        assert_eq!(WeatherClassifier::band_for("overcast clouds"), Some(TempoBand::Calm));
    }

    #[test]
    fn test_first_band_wins() {
        // Rain is calm, but "clear" is checked first
        assert_eq!(
            WeatherClassifier::band_for("clear with a chance of rain"),
            Some(TempoBand::Energetic)
        );
        // "sunny" matches before the moderate row is reached
        assert_eq!(
            WeatherClassifier::band_for("Partly Sunny"),
            Some(TempoBand::Energetic)
        );
    }

    #[test]
    fn test_partly_sunny_picks_energetic_tracks() {
        let catalog = Catalog::new(vec![
            Track::new("Fast", "A", 130, None),
            Track::new("Mid", "B", 100, None),
        ]);
        let candidates = classify_weather(&catalog, "partly sunny", 20.0);
        assert_eq!(candidates.titles(), vec!["Fast"]);
    }

    #[test]
    fn test_unknown_condition_is_empty_not_error() {
        let catalog = tempo_catalog();
        assert_eq!(WeatherClassifier::band_for("mist"), None);
        assert!(classify_weather(&catalog, "mist", 10.0).is_empty());
        assert!(classify_weather(&catalog, "", 10.0).is_empty());
    }

    #[test]
    fn test_candidates_satisfy_band_predicate() {
        let catalog = tempo_catalog();

        let energetic = classify_weather(&catalog, "clear sky", 20.0);
        assert_eq!(energetic.titles(), vec!["Shared Edge", "Quick", "Fast"]);

        let moderate = classify_weather(&catalog, "broken clouds", 20.0);
        assert_eq!(moderate.titles(), vec!["Edge Moderate", "Mid", "Shared Edge"]);

        let calm = classify_weather(&catalog, "moderate rain", 20.0);
        assert_eq!(calm.titles(), vec!["Slow", "Edge Calm"]);
    }

    #[test]
    fn test_temperature_is_ignored_by_default() {
        let catalog = tempo_catalog();
        let cold = classify_weather(&catalog, "clear sky", -10.0);
        let hot = classify_weather(&catalog, "clear sky", 35.0);
        assert_eq!(cold, hot);
    }

    #[test]
    fn test_warm_split_narrows_energetic_band() {
        let catalog = tempo_catalog();
        let classifier = WeatherClassifier::new(Some(WarmSplit::new(24.0)));

        let warm = classifier.classify(&catalog, "clear sky", 30.0);
        assert_eq!(warm.titles(), vec!["Fast"]);

        let cool = classifier.classify(&catalog, "clear sky", 12.0);
        assert_eq!(cool.titles(), vec!["Shared Edge", "Quick"]);

        // Other bands are unaffected
        let calm = classifier.classify(&catalog, "fog", 30.0);
        assert_eq!(calm.titles(), vec!["Slow", "Edge Calm"]);
    }

    #[test]
    fn test_classification_is_repeatable() {
        let catalog = tempo_catalog();
        let first = classify_weather(&catalog, "few clouds", 18.0);
        let second = classify_weather(&catalog, "few clouds", 18.0);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(classify_weather(&catalog, "clear sky", 20.0).is_empty());
    }
}
