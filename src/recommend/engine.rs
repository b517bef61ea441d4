use super::{CandidateSet, Recommendation, WeatherClassifier, classify_date, select};
use crate::catalog::Catalog;
use crate::client::WeatherProvider;
use crate::models::WeatherObservation;
use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::{debug, info, warn};

/// Ties the weather service, the classifiers and the selector together
pub struct RecommendationEngine<'c, W: WeatherProvider> {
    catalog: &'c Catalog,
    weather: W,
    classifier: WeatherClassifier,
}

impl<'c, W: WeatherProvider> RecommendationEngine<'c, W> {
    pub fn new(catalog: &'c Catalog, weather: W, classifier: WeatherClassifier) -> Self {
        Self {
            catalog,
            weather,
            classifier,
        }
    }

    /// Recommend a song for today in `city`, using the local date
    pub fn recommend(&self, city: Option<&str>) -> Recommendation<'c> {
        let today = Local::now().date_naive();
        self.recommend_on(city, today, &mut rand::thread_rng())
    }

    /// Recommend a song for a given date. A missing city or a failed weather
    /// lookup only disables the weather rule; the holiday rule still runs.
    pub fn recommend_on<R: Rng + ?Sized>(
        &self,
        city: Option<&str>,
        today: NaiveDate,
        rng: &mut R,
    ) -> Recommendation<'c> {
        let observation = city.and_then(|city| self.observe(city));

        let weather_candidates = match &observation {
            Some(obs) => self
                .classifier
                .classify(self.catalog, &obs.condition, obs.celsius()),
            None => CandidateSet::empty(),
        };
        let calendar_candidates = classify_date(self.catalog, today);

        debug!(
            "{} weather candidates, {} holiday candidates for {}",
            weather_candidates.len(),
            calendar_candidates.len(),
            today
        );

        select(&weather_candidates, &calendar_candidates, rng)
    }

    /// Current weather for `city`, or `None` if the lookup failed
    pub fn observe(&self, city: &str) -> Option<WeatherObservation> {
        match self.weather.current_weather(city) {
            Ok(obs) => {
                info!("The weather in {city} is {obs}");
                Some(obs)
            }
            Err(e) => {
                warn!("Error fetching weather data for {city}: {e}; using holidays only");
                None
            }
        }
    }
}
