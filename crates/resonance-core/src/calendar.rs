//! Winter-solstice calendar trigger.
//!
//! The harmony boost fires on one fixed (month, day) pair. The trigger
//! date is resolved against an explicit [`chrono::NaiveDate`] so that
//! composition stays deterministic under test; only the outermost
//! callers reach for the system clock.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Multiplicative boost applied to the harmony score on the trigger date
pub const SOLSTICE_BOOST: f64 = 1.44;

/// Fixed calendar trigger, defaulting to the winter solstice (Dec 22).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolsticeCalendar {
    pub month: u32,
    pub day: u32,
}

impl SolsticeCalendar {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Whether the trigger fires on the given date.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        (date.month(), date.day()) == (self.month, self.day)
    }

    /// Whether the trigger fires today, per the local system clock.
    pub fn is_active_now(&self) -> bool {
        self.is_active_on(Local::now().date_naive())
    }
}

impl Default for SolsticeCalendar {
    fn default() -> Self {
        Self::new(12, 22)
    }
}
