pub mod calendar;
pub mod engine;
pub mod selector;
pub mod weather;


pub use calendar::classify_date;
pub use engine::RecommendationEngine;
pub use selector::{Recommendation, Source, select};
pub use weather::{WarmSplit, WeatherClassifier, classify_weather};

use crate::catalog::Catalog;
use crate::models::Track;
use rand::Rng;
use rand::seq::SliceRandom;

/// Tracks from the catalog that satisfy one classification rule.
/// Borrows from the catalog; never owns or changes a track.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet<'a> {
    tracks: Vec<&'a Track>,
}

impl<'a> CandidateSet<'a> {
    pub fn empty() -> Self {
        CandidateSet { tracks: Vec::new() }
    }

    /// All catalog tracks for which `predicate` holds, in catalog order
    pub fn filter<F>(catalog: &'a Catalog, predicate: F) -> Self
    where
        F: Fn(&Track) -> bool,
    {
        CandidateSet {
            tracks: catalog.iter().filter(|t| predicate(t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn titles(&self) -> Vec<&'a str> {
        self.tracks.iter().map(|t| t.title.as_str()).collect()
    }

    /// Uniformly random member, or `None` when the set is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Track> {
        self.tracks.choose(rng).copied()
    }
}
