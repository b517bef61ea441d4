//! Song-of-the-day recommendations from a CSV catalog, driven by the
//! current weather and the calendar.

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod recommend;
