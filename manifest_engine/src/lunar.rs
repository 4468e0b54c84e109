//! Manifest Engine v1: Lunar Phase
//!
//! Conway's integer approximation of the synodic phase. Depends on the
//! calendar date only; no ephemeris. All modulo operations are floor
//! modulo so the intermediate `r` never goes negative.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::LunarPhase;

/// Phase angle for a calendar date.
pub fn compute_lunar_phase(date: NaiveDate) -> LunarPhase {
    let year = date.year() as i64;
    let month = date.month() as i64;
    let day = date.day() as i64;

    let mut r = year.rem_euclid(100) % 19;
    if r > 9 {
        r -= 19;
    }
    r = (r * 11).rem_euclid(30) + month + day;
    if month < 3 {
        r += 2;
    }
    let phase = (r + 8).rem_euclid(30);

    LunarPhase::from_degrees(phase as f64 / 30.0 * 360.0)
}

impl LunarPhase {
    /// Phase for the calendar date of an instant. The time of day is ignored.
    pub fn at(now: &NaiveDateTime) -> Self {
        compute_lunar_phase(now.date())
    }
}
