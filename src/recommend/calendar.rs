use super::CandidateSet;
use crate::catalog::Catalog;
use crate::models::Holiday;
use chrono::{Datelike, NaiveDate};

/// An inclusive window of (month, day) pairs within a single year
#[derive(Debug, Clone, Copy)]
struct Window {
    start: (u32, u32),
    end: (u32, u32),
}

impl Window {
    const fn day(month: u32, day: u32) -> Self {
        Window {
            start: (month, day),
            end: (month, day),
        }
    }

    fn contains(&self, date: NaiveDate) -> bool {
        let md = (date.month(), date.day());
        self.start <= md && md <= self.end
    }
}

/// Evaluated in order; the first window containing the date decides the holiday
const HOLIDAY_WINDOWS: [(Window, Holiday); 4] = [
    (
        Window {
            start: (12, 1),
            end: (12, 30),
        },
        Holiday::Christmas,
    ),
    (Window::day(10, 31), Holiday::Halloween),
    (Window::day(2, 14), Holiday::ValentinesDay),
    (Window::day(7, 4), Holiday::FourthOfJuly),
];

/// The holiday whose window contains `today`, in the same year
pub fn holiday_for(today: NaiveDate) -> Option<Holiday> {
    HOLIDAY_WINDOWS
        .iter()
        .find(|(window, _)| window.contains(today))
        .map(|(_, holiday)| *holiday)
}

/// Tracks tagged with today's holiday. Empty when no holiday applies or no
/// track carries the tag.
pub fn classify_date(catalog: &Catalog, today: NaiveDate) -> CandidateSet<'_> {
    match holiday_for(today) {
        Some(holiday) => CandidateSet::filter(catalog, |track| track.holiday == Some(holiday)),
        None => CandidateSet::empty(),
    }
}
