//! A coarse estimation of the moon phase of a given day
//!
//! This counts days since a known new moon and divides by the mean synodic month.
//! It is good enough for a calendar icon, not for ephemeris computations.

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Mean length of the synodic month, in days
pub const SYNODIC_MONTH: f64 = 29.53;

/// The eight phases shown in the calendar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub fn symbol(&self) -> &'static str {
        match self {
            MoonPhase::New => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::Full => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// The phase that covers a position in the lunar cycle (0.0 and 1.0 being new moons)
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction < 0.03 || fraction > 0.97 {
            MoonPhase::New
        } else if fraction < 0.22 {
            MoonPhase::WaxingCrescent
        } else if fraction < 0.28 {
            MoonPhase::FirstQuarter
        } else if fraction < 0.47 {
            MoonPhase::WaxingGibbous
        } else if fraction < 0.53 {
            MoonPhase::Full
        } else if fraction < 0.72 {
            MoonPhase::WaningGibbous
        } else if fraction < 0.78 {
            MoonPhase::LastQuarter
        } else {
            MoonPhase::WaningCrescent
        }
    }
}

impl Display for MoonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

/// A day with a new moon (January 7th, 2026)
fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 7).unwrap_or(NaiveDate::MIN)
}

/// Position of `date` in the lunar cycle, in `[0, 1)`.
///
/// Days before the reference new moon wrap around into the previous cycles.
pub fn phase_fraction(date: NaiveDate) -> f64 {
    let days = (date - reference_new_moon()).num_days() as f64;
    days.rem_euclid(SYNODIC_MONTH) / SYNODIC_MONTH
}

/// Estimate the moon phase of a given day
pub fn estimate_phase(date: NaiveDate) -> MoonPhase {
    MoonPhase::from_fraction(phase_fraction(date))
}
