use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed range narrower than this has no room for a meaningful random
/// draw; the picker keeps the range open until a wider end date is chosen.
pub const MIN_PERIOD_DAYS: i64 = 2;

/// The user's answer to "when should this come back to me?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodSelection {
    /// Random day 1–6 months out, drawn fresh every time the option is applied.
    Surprise,

    /// Random instant inside a user-picked date range. `to` stays unset
    /// until the user picks a second boundary; the selection is pending
    /// until both bounds are in place.
    CustomPeriod {
        from: NaiveDate,
        to: Option<NaiveDate>,
    },

    /// One specific day.
    CustomDate { date: NaiveDate },
}

impl PeriodSelection {
    /// Build a range selection from a (possibly partial) picker state.
    ///
    /// A closed range spanning fewer than [`MIN_PERIOD_DAYS`] calendar days
    /// resets `to`, reopening the range — the picker waits for a wider end
    /// date rather than reporting an error.
    pub fn custom_period(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        let to = to.filter(|t| (*t - from).num_days() >= MIN_PERIOD_DAYS);
        PeriodSelection::CustomPeriod { from, to }
    }

    /// True when the selection cannot yield a send time yet.
    pub fn is_pending(&self) -> bool {
        match self {
            PeriodSelection::CustomPeriod { from, to } => match to {
                None => true,
                Some(to) => (*to - *from).num_days() < MIN_PERIOD_DAYS,
            },
            _ => false,
        }
    }
}
