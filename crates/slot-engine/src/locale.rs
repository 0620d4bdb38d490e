//! Month-name tables used when rendering answers.

use chrono::Datelike;

/// Full month names for one locale, January first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthNames([&'static str; 12]);

impl MonthNames {
    pub const fn new(names: [&'static str; 12]) -> Self {
        Self(names)
    }

    /// Name of the month `date` falls in.
    pub fn name_for(&self, date: &impl Datelike) -> &'static str {
        self.0[date.month0() as usize]
    }
}

/// `fr-FR` full month names, lowercase as French writes them mid-sentence.
pub const FRENCH: MonthNames = MonthNames::new([
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
]);
