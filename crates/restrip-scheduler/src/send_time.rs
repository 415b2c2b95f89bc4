use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike};

use crate::period::{PeriodSelection, MIN_PERIOD_DAYS};
use crate::random::RandomSource;

/// Normalized local delivery hour — snaps date-based selections to 18:00.
pub const SEND_HOUR: u32 = 18;

/// Surprise window, in days from now (1–6 months).
pub const SURPRISE_MIN_DAYS: i64 = 30;
pub const SURPRISE_MAX_DAYS: i64 = 180;

// Fallback when bumping a late same-day pick would cross midnight: the last
// minute of the originally selected calendar day.
const LAST_SLOT_HOUR: u32 = 23;
const LAST_SLOT_MINUTE: u32 = 59;

/// Compute the single delivery instant for `selection`.
///
/// Returns `None` when the selection cannot resolve yet — an open range, or
/// a closed one narrower than [`MIN_PERIOD_DAYS`]. That is a pending picker
/// state, not an error; the validator refuses to submit it.
///
/// `Surprise` and `CustomPeriod` consume fresh randomness on every call, so
/// re-applying the same selection yields a new draw.
pub fn compute_send_time<Tz: TimeZone>(
    selection: &PeriodSelection,
    now: DateTime<Tz>,
    rng: &mut dyn RandomSource,
) -> Option<DateTime<Tz>> {
    match selection {
        PeriodSelection::Surprise => surprise(now, rng),
        PeriodSelection::CustomDate { date } => custom_date(now, *date),
        PeriodSelection::CustomPeriod { from, to } => {
            let to = (*to)?;
            if (to - *from).num_days() < MIN_PERIOD_DAYS {
                return None;
            }
            period_draw(&now.timezone(), *from, to, rng)
        }
    }
}

/// Uniform random day 30–180 days out, at the send hour.
fn surprise<Tz: TimeZone>(now: DateTime<Tz>, rng: &mut dyn RandomSource) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let days = rng.int_between(SURPRISE_MIN_DAYS, SURPRISE_MAX_DAYS);
    let target = (now + Duration::days(days)).date_naive();
    local_time(&tz, target, SEND_HOUR, 0)
}

/// A specific day at the send hour, with a same-day cutoff: a pick for
/// "today" must never resolve to an instant already in the past.
fn custom_date<Tz: TimeZone>(now: DateTime<Tz>, picked: NaiveDate) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let today = now.date_naive();

    if picked != today {
        return local_time(&tz, picked, SEND_HOUR, 0);
    }

    if now.hour() >= SEND_HOUR {
        // Send hour already passed today; push out one hour, verbatim,
        // unless that leaves the selected calendar day.
        let bumped = now + Duration::hours(1);
        if bumped.date_naive() == today {
            Some(bumped)
        } else {
            local_time(&tz, today, LAST_SLOT_HOUR, LAST_SLOT_MINUTE)
        }
    } else {
        local_time(&tz, today, SEND_HOUR, 0)
    }
}

/// Uniform random instant in `[midnight(from), midnight(to))`.
///
/// Range draws keep the raw random time of day — no send-hour snap.
fn period_draw<Tz: TimeZone>(
    tz: &Tz,
    from: NaiveDate,
    to: NaiveDate,
    rng: &mut dyn RandomSource,
) -> Option<DateTime<Tz>> {
    let start = local_time(tz, from, 0, 0)?;
    let end = local_time(tz, to, 0, 0)?;
    let span_ms = (end - start.clone()).num_milliseconds();
    let offset_ms = (rng.fraction() * span_ms as f64) as i64;
    Some(start + Duration::milliseconds(offset_ms))
}

/// Resolve a wall-clock time on `date` in `tz`. `None` only when the local
/// time does not exist (DST gap); ambiguous times take the earlier mapping.
fn local_time<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Tz>> {
    tz.with_ymd_and_hms(date.year(), date.month(), date.day(), hour, minute, 0)
        .earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SplitMix64;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn hms<Tz: TimeZone>(t: &DateTime<Tz>) -> (u32, u32, u32) {
        (t.hour(), t.minute(), t.second())
    }

    #[test]
    fn surprise_lands_30_to_180_days_out_at_send_hour() {
        let now = utc(2025, 3, 10, 9, 30);
        for seed in 0..64 {
            let mut rng = SplitMix64::seeded(seed);
            let t = compute_send_time(&PeriodSelection::Surprise, now, &mut rng).unwrap();
            let days = (t.date_naive() - now.date_naive()).num_days();
            assert!(
                (SURPRISE_MIN_DAYS..=SURPRISE_MAX_DAYS).contains(&days),
                "seed {seed}: {days} days out"
            );
            assert_eq!(hms(&t), (SEND_HOUR, 0, 0));
        }
    }

    #[test]
    fn surprise_draws_fresh_on_every_call() {
        let now = utc(2025, 3, 10, 9, 30);
        let mut rng = SplitMix64::seeded(1);
        let mut distinct = std::collections::HashSet::new();
        for _ in 0..5 {
            distinct.insert(compute_send_time(&PeriodSelection::Surprise, now, &mut rng).unwrap());
        }
        assert!(distinct.len() > 1, "re-selection should re-draw");
    }

    #[test]
    fn same_day_pick_after_send_hour_bumps_one_hour_verbatim() {
        let now = utc(2025, 3, 10, 19, 0);
        let sel = PeriodSelection::CustomDate {
            date: date(2025, 3, 10),
        };
        let mut rng = SplitMix64::seeded(0);
        let t = compute_send_time(&sel, now, &mut rng).unwrap();
        assert_eq!(t, now + Duration::hours(1));
    }

    #[test]
    fn same_day_pick_near_midnight_clamps_to_last_minute() {
        let sel = PeriodSelection::CustomDate {
            date: date(2025, 3, 10),
        };
        let mut rng = SplitMix64::seeded(0);
        for now in [utc(2025, 3, 10, 23, 30), utc(2025, 3, 10, 23, 0)] {
            let t = compute_send_time(&sel, now, &mut rng).unwrap();
            assert_eq!(t, utc(2025, 3, 10, 23, 59));
        }
    }

    #[test]
    fn same_day_pick_before_send_hour_snaps_to_send_hour() {
        let now = utc(2025, 3, 10, 10, 0);
        let sel = PeriodSelection::CustomDate {
            date: date(2025, 3, 10),
        };
        let mut rng = SplitMix64::seeded(0);
        let t = compute_send_time(&sel, now, &mut rng).unwrap();
        assert_eq!(t, utc(2025, 3, 10, 18, 0));
    }

    #[test]
    fn future_day_pick_snaps_to_send_hour_regardless_of_hour() {
        let sel = PeriodSelection::CustomDate {
            date: date(2025, 3, 15),
        };
        let mut rng = SplitMix64::seeded(0);
        for now in [utc(2025, 3, 10, 7, 0), utc(2025, 3, 10, 22, 0)] {
            let t = compute_send_time(&sel, now, &mut rng).unwrap();
            assert_eq!(t, utc(2025, 3, 15, 18, 0));
        }
    }

    #[test]
    fn cutoff_runs_in_the_clients_own_offset() {
        // 19:00 in UTC+05:30 is 13:30 UTC — the cutoff must see hour 19.
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let now = tz.with_ymd_and_hms(2025, 3, 10, 19, 0, 0).unwrap();
        let sel = PeriodSelection::CustomDate {
            date: date(2025, 3, 10),
        };
        let mut rng = SplitMix64::seeded(0);
        let t = compute_send_time(&sel, now, &mut rng).unwrap();
        assert_eq!(t, now + Duration::hours(1));
        assert_eq!(t.offset().local_minus_utc(), 5 * 3600 + 1800);
    }

    #[test]
    fn period_draw_stays_inside_the_range() {
        let now = utc(2025, 3, 10, 12, 0);
        let sel = PeriodSelection::custom_period(date(2025, 6, 1), Some(date(2025, 6, 11)));
        let start = utc(2025, 6, 1, 0, 0);
        let end = utc(2025, 6, 11, 0, 0);
        for seed in 0..64 {
            let mut rng = SplitMix64::seeded(seed);
            let t = compute_send_time(&sel, now, &mut rng).unwrap();
            assert!(start <= t && t < end, "seed {seed}: {t} outside range");
        }
    }

    #[test]
    fn period_draw_keeps_the_raw_time_of_day() {
        let now = utc(2025, 3, 10, 12, 0);
        let sel = PeriodSelection::custom_period(date(2025, 6, 1), Some(date(2025, 6, 11)));
        let off_hour = (0..8).any(|seed| {
            let mut rng = SplitMix64::seeded(seed);
            let t = compute_send_time(&sel, now, &mut rng).unwrap();
            hms(&t) != (SEND_HOUR, 0, 0)
        });
        assert!(off_hour, "range draws are not snapped to the send hour");
    }

    #[test]
    fn open_or_narrow_range_yields_no_send_time() {
        let now = utc(2025, 3, 10, 12, 0);
        let mut rng = SplitMix64::seeded(0);

        let open = PeriodSelection::CustomPeriod {
            from: date(2025, 6, 1),
            to: None,
        };
        assert_eq!(compute_send_time(&open, now, &mut rng), None);

        // A literal narrow range (bypassing the constructor) is also refused.
        let narrow = PeriodSelection::CustomPeriod {
            from: date(2025, 6, 1),
            to: Some(date(2025, 6, 2)),
        };
        assert_eq!(compute_send_time(&narrow, now, &mut rng), None);
    }

    #[test]
    fn identical_inputs_and_seed_give_identical_results() {
        let now = utc(2025, 3, 10, 12, 0);
        let sel = PeriodSelection::custom_period(date(2025, 6, 1), Some(date(2025, 9, 1)));
        let a = compute_send_time(&sel, now, &mut SplitMix64::seeded(9));
        let b = compute_send_time(&sel, now, &mut SplitMix64::seeded(9));
        assert_eq!(a, b);
    }
}
