//! `restrip-scheduler` — turns a period selection into one delivery instant.
//!
//! # Overview
//!
//! The web form offers three ways to pick when a snap comes back. Each maps
//! to exactly one absolute send time via [`compute_send_time`]:
//!
//! | Selection      | Behaviour                                                  |
//! |----------------|------------------------------------------------------------|
//! | `Surprise`     | Random day 30–180 days out, at the 18:00 send hour         |
//! | `CustomDate`   | That day at 18:00, with a same-day cutoff rule             |
//! | `CustomPeriod` | Uniform random instant inside the range, no send-hour snap |
//!
//! An open range (no second boundary yet, or one narrower than two days)
//! yields `None`: the selection is still pending, which is not an error.
//!
//! Both the clock and the randomness are caller-supplied — see
//! [`random::RandomSource`] — so every computation here is a pure function
//! of its inputs.

pub mod period;
pub mod random;
pub mod send_time;

pub use period::{PeriodSelection, MIN_PERIOD_DAYS};
pub use random::{RandomSource, SplitMix64};
pub use send_time::{compute_send_time, SEND_HOUR, SURPRISE_MAX_DAYS, SURPRISE_MIN_DAYS};
