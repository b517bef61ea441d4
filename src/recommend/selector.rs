use super::CandidateSet;
use crate::models::Track;
use rand::Rng;
use std::fmt;

/// Which rule produced the winning candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Calendar,
    Weather,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Calendar => f.write_str("holiday"),
            Source::Weather => f.write_str("weather"),
        }
    }
}

/// Outcome of one recommendation. `NoMatch` is a normal result, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recommendation<'a> {
    Pick { track: &'a Track, source: Source },
    NoMatch,
}

impl<'a> Recommendation<'a> {
    pub fn track(&self) -> Option<&'a Track> {
        match self {
            Recommendation::Pick { track, .. } => Some(*track),
            Recommendation::NoMatch => None,
        }
    }
}

/// Pick one track. Calendar candidates take strict priority; weather
/// candidates are only consulted when no holiday track applies.
pub fn select<'a, R: Rng + ?Sized>(
    weather: &CandidateSet<'a>,
    calendar: &CandidateSet<'a>,
    rng: &mut R,
) -> Recommendation<'a> {
    if let Some(track) = calendar.choose(rng) {
        return Recommendation::Pick {
            track,
            source: Source::Calendar,
        };
    }

    match weather.choose(rng) {
        Some(track) => Recommendation::Pick {
            track,
            source: Source::Weather,
        },
        None => Recommendation::NoMatch,
    }
}
