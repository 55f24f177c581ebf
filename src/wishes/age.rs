//! Relative age of a wish ("just now", "5 minutes ago", ...)
//!
//! Buckets are computed from whole minutes, each coarser unit rounded from the
//! previous one:
//!
//! ```text
//! minutes = round(elapsed_ms / 60_000)    < 1   → just now
//!                                         < 60  → N minutes
//! hours   = round(minutes / 60)           < 24  → N hours
//! days    = round(hours / 24)                   → N days
//! ```
//!
//! Rounding is half-up, so 30 seconds already reads as "1 minute ago".

use std::fmt;

const MS_PER_MINUTE: i64 = 60 * 1000;

/// Human-readable age bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl RelativeAge {
    /// Age of something created at `created_at` as seen at `now` (both Unix ms)
    ///
    /// A creation time in the future (clock adjusted backwards) reads as
    /// `JustNow`.
    pub fn between(created_at: i64, now: i64) -> Self {
        let minutes = round_div(now.saturating_sub(created_at), MS_PER_MINUTE);
        if minutes < 1 {
            return RelativeAge::JustNow;
        }
        if minutes < 60 {
            return RelativeAge::Minutes(minutes);
        }

        let hours = round_div(minutes, 60);
        if hours < 24 {
            return RelativeAge::Hours(hours);
        }

        RelativeAge::Days(round_div(hours, 24))
    }
}

impl fmt::Display for RelativeAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (count, unit) = match *self {
            RelativeAge::JustNow => return f.write_str("just now"),
            RelativeAge::Minutes(n) => (n, "minute"),
            RelativeAge::Hours(n) => (n, "hour"),
            RelativeAge::Days(n) => (n, "day"),
        };

        if count == 1 {
            write!(f, "1 {} ago", unit)
        } else {
            write!(f, "{} {}s ago", count, unit)
        }
    }
}

/// Divide rounding half-up (towards +inf), `divisor` must be positive
fn round_div(value: i64, divisor: i64) -> i64 {
    (value.saturating_mul(2).saturating_add(divisor)).div_euclid(divisor * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: i64 = MS_PER_MINUTE;
    const HOUR: i64 = 60 * MIN;
    const DAY: i64 = 24 * HOUR;

    fn age(elapsed_ms: i64) -> RelativeAge {
        let now = 1_723_593_600_000;
        RelativeAge::between(now - elapsed_ms, now)
    }

    #[test]
    fn test_just_now() {
        assert_eq!(age(0), RelativeAge::JustNow);
        assert_eq!(age(29_999), RelativeAge::JustNow);
    }

    #[test]
    fn test_minutes_round_half_up() {
        assert_eq!(age(30_000), RelativeAge::Minutes(1));
        assert_eq!(age(5 * MIN + 29_000), RelativeAge::Minutes(5));
        assert_eq!(age(59 * MIN), RelativeAge::Minutes(59));
    }

    #[test]
    fn test_hours_bucket() {
        assert_eq!(age(59 * MIN + 40_000), RelativeAge::Hours(1));
        assert_eq!(age(89 * MIN), RelativeAge::Hours(1));
        assert_eq!(age(90 * MIN), RelativeAge::Hours(2));
        assert_eq!(age(23 * HOUR), RelativeAge::Hours(23));
    }

    #[test]
    fn test_days_bucket() {
        // 23.5 hours rounds to 24 hours, which is a day
        assert_eq!(age(23 * HOUR + 30 * MIN), RelativeAge::Days(1));
        assert_eq!(age(3 * DAY), RelativeAge::Days(3));
        assert_eq!(age(3 * DAY + 11 * HOUR), RelativeAge::Days(3));
        assert_eq!(age(3 * DAY + 12 * HOUR), RelativeAge::Days(4));
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(age(-10 * MIN), RelativeAge::JustNow);
    }

    #[test]
    fn test_display() {
        assert_eq!(RelativeAge::JustNow.to_string(), "just now");
        assert_eq!(RelativeAge::Minutes(1).to_string(), "1 minute ago");
        assert_eq!(RelativeAge::Minutes(7).to_string(), "7 minutes ago");
        assert_eq!(RelativeAge::Hours(2).to_string(), "2 hours ago");
        assert_eq!(RelativeAge::Days(1).to_string(), "1 day ago");
    }
}
