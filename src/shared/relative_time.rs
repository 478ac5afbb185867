//! Relative Zeitangaben für das Marker-Popup ("today at 3:04 PM").
//!
//! Die Regeln folgen der Tagesdifferenz zwischen Datum und Bezugszeitpunkt:
//!
//! | Tagesdifferenz | Ausgabe                     |
//! |----------------|-----------------------------|
//! | < -6           | `10/11/2026`                |
//! | -6 .. -2       | `last Monday at 3:04 PM`    |
//! | -1             | `yesterday at 3:04 PM`      |
//! | 0              | `today at 3:04 PM`          |
//! | 1              | `tomorrow at 3:04 PM`       |
//! | 2 .. 6         | `Friday at 3:04 PM`         |
//! | > 6            | `10/25/2026`                |

use chrono::{DateTime, TimeZone};

/// Formatiert `date` relativ zu `base`.
pub fn format_relative<Tz: TimeZone>(date: &DateTime<Tz>, base: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let days = date
        .date_naive()
        .signed_duration_since(base.date_naive())
        .num_days();
    let time = date.format("%-I:%M %p");

    match days {
        d if d < -6 => date.format("%m/%d/%Y").to_string(),
        d if d < -1 => format!("last {} at {}", date.format("%A"), time),
        -1 => format!("yesterday at {}", time),
        0 => format!("today at {}", time),
        1 => format!("tomorrow at {}", time),
        d if d < 7 => format!("{} at {}", date.format("%A"), time),
        _ => date.format("%m/%d/%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("gültiges Datum")
    }

    #[test]
    fn same_day_is_today() {
        let base = at(2026, 10, 18, 18, 0);
        assert_eq!(format_relative(&at(2026, 10, 18, 15, 4), &base), "today at 3:04 PM");
    }

    #[test]
    fn previous_day_is_yesterday_even_within_24_hours() {
        let base = at(2026, 10, 18, 0, 30);
        assert_eq!(
            format_relative(&at(2026, 10, 17, 23, 45), &base),
            "yesterday at 11:45 PM"
        );
    }

    #[test]
    fn within_last_week_uses_weekday() {
        // 2026-10-18 ist ein Sonntag
        let base = at(2026, 10, 18, 12, 0);
        assert_eq!(
            format_relative(&at(2026, 10, 12, 9, 5), &base),
            "last Monday at 9:05 AM"
        );
    }

    #[test]
    fn older_dates_use_numeric_format() {
        let base = at(2026, 10, 18, 12, 0);
        assert_eq!(format_relative(&at(2026, 10, 11, 9, 5), &base), "10/11/2026");
    }

    #[test]
    fn future_dates_are_supported() {
        let base = at(2026, 10, 18, 12, 0);
        assert_eq!(
            format_relative(&at(2026, 10, 19, 8, 0), &base),
            "tomorrow at 8:00 AM"
        );
        assert_eq!(
            format_relative(&at(2026, 10, 23, 8, 0), &base),
            "Friday at 8:00 AM"
        );
        assert_eq!(format_relative(&at(2026, 10, 25, 8, 0), &base), "10/25/2026");
    }
}
