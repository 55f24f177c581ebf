//! Static page content
//!
//! Copy, the milestones timeline, and the date/clock formatting shown in the
//! hero section.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use std::fmt::Display;

pub const HERO_TITLE: &str = "Happy Independence Day";
pub const HERO_SUBTITLE: &str = "Pakistan 🤍 14 August";
pub const HERO_TAGLINE: &str = "Celebrate Independence with learning, quizzes, and wishes.";
pub const FLAG_CAPTION: &str = "Long Live Pakistan!";
pub const EMPTY_WALL: &str = "No wishes yet — let yours be the first!";
pub const MESSAGE_PLACEHOLDER: &str = "Azadi Mubarak! May Pakistan prosper.";
pub const FOOTER_CREDIT: &str = "Crafted with ❤️ in Rust + Leptos. Pakistan Zindabad!";
pub const QUIZ_OUTRO: &str = "Pakistan Zindabad — Keep learning & celebrating! 🎉";

/// Id of the wishes section, target of the "Write Wishes" button
pub const WISHES_ANCHOR: &str = "wishes";

/// Pakistan Standard Time, UTC+5 all year
const PKT_OFFSET_SECS: i32 = 5 * 60 * 60;

/// One entry of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub text: &'static str,
}

/// Road to independence, oldest first
pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: 1857,
        title: "War of Independence",
        text: "The foundation of the freedom movement.",
    },
    Milestone {
        year: 1906,
        title: "All India Muslim League",
        text: "Demand for constitutional political representation.",
    },
    Milestone {
        year: 1940,
        title: "Lahore Resolution",
        text: "The demand for a separate homeland.",
    },
    Milestone {
        year: 1947,
        title: "Independence",
        text: "Establishment of Pakistan — 14 August.",
    },
];

/// "Friday, August 14, 2026"
pub fn format_long_date<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%A, %B %-d, %Y").to_string()
}

/// "9:05:07 PM"
pub fn format_clock<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%-I:%M:%S %p").to_string()
}

/// The given instant on the Karachi wall clock
pub fn karachi_time(now: DateTime<Utc>) -> DateTime<FixedOffset> {
    // UTC+5 is always a valid offset
    let offset = FixedOffset::east_opt(PKT_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_chronological() {
        assert!(MILESTONES.windows(2).all(|w| w[0].year < w[1].year));
        assert_eq!(MILESTONES[3].year, 1947);
    }

    #[test]
    fn test_long_date() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 14, 9, 0, 0).unwrap();
        assert_eq!(format_long_date(&dt), "Friday, August 14, 2026");
    }

    #[test]
    fn test_karachi_clock() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 13, 19, 5, 7).unwrap();
        let pkt = karachi_time(dt);

        assert_eq!(format_clock(&pkt), "12:05:07 AM");
        assert_eq!(format_long_date(&pkt), "Friday, August 14, 2026");
    }
}
