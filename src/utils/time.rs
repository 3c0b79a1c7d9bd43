use chrono::{ DateTime, Utc };

/// One minute in milliseconds
pub const MINUTE_MS: u64 = 60 * 1000;
/// One hour in milliseconds
pub const HOUR_MS: u64 = 60 * MINUTE_MS;
/// One day in milliseconds
pub const DAY_MS: u64 = 24 * HOUR_MS;

/// Formats elapsed milliseconds as a coarse relative-time label.
///
/// Buckets use ceiling division into the unit, so a card crosses from
/// "just now" straight to "1 minutes ago" at exactly one minute. Negative
/// elapsed time (a timestamp in the future) reads as "just now" - a bad
/// value only ever costs us a cosmetic label.
pub fn format_elapsed(elapsed_ms: i64) -> String {
    let elapsed = u64::try_from(elapsed_ms).unwrap_or(0);

    if elapsed < MINUTE_MS {
        "just now".to_string()
    } else if elapsed < HOUR_MS {
        format!("{} minutes ago", elapsed.div_ceil(MINUTE_MS))
    } else if elapsed < DAY_MS {
        format!("{} hours ago", elapsed.div_ceil(HOUR_MS))
    } else {
        format!("{} days ago", elapsed.div_ceil(DAY_MS))
    }
}

/// Label for a card's RFC 3339 creation timestamp at the given clock time.
/// Unparseable timestamps degrade to "just now" instead of erroring.
pub fn relative_label(created_at: &str, now: DateTime<Utc>) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(created) => {
            let elapsed = now.signed_duration_since(created.with_timezone(&Utc));
            format_elapsed(elapsed.num_milliseconds())
        }
        Err(_) => "just now".to_string(),
    }
}

/// Label relative to the wall clock
pub fn relative_label_now(created_at: &str) -> String {
    relative_label(created_at, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{ Duration, TimeZone };

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(format_elapsed(0), "just now");
        assert_eq!(format_elapsed(59_999), "just now");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        assert_eq!(format_elapsed(-1), "just now");
        assert_eq!(format_elapsed(-86_400_000), "just now");
    }

    #[test]
    fn minute_bucket_uses_ceiling_division() {
        assert_eq!(format_elapsed(60_000), "1 minutes ago");
        assert_eq!(format_elapsed(60_001), "2 minutes ago");
        assert_eq!(format_elapsed(90_000), "2 minutes ago");
        assert_eq!(format_elapsed(3_599_999), "60 minutes ago");
    }

    #[test]
    fn hour_bucket_boundaries() {
        assert_eq!(format_elapsed(3_600_000), "1 hours ago");
        assert_eq!(format_elapsed(3_600_001), "2 hours ago");
        assert_eq!(format_elapsed(86_399_999), "24 hours ago");
    }

    #[test]
    fn day_bucket_boundaries() {
        assert_eq!(format_elapsed(86_400_000), "1 days ago");
        assert_eq!(format_elapsed(86_400_000 * 3), "3 days ago");
    }

    #[test]
    fn formatting_is_idempotent_for_a_fixed_pair() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let created = (now - Duration::milliseconds(90_000)).to_rfc3339();
        assert_eq!(relative_label(&created, now), relative_label(&created, now));
    }

    #[test]
    fn malformed_timestamp_degrades_to_just_now() {
        let now = Utc::now();
        assert_eq!(relative_label("not-a-date", now), "just now");
        assert_eq!(relative_label("", now), "just now");
    }

    #[test]
    fn label_advances_with_virtual_time_without_remount() {
        // Same card, advancing clock: the ticker recomputes from the same
        // timestamp string each tick.
        let created_instant = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let created = created_instant.to_rfc3339();

        let now = created_instant + Duration::milliseconds(90_000);
        assert_eq!(relative_label(&created, now), "2 minutes ago");

        let later = created_instant + Duration::milliseconds(HOUR_MS as i64);
        assert_eq!(relative_label(&created, later), "1 hours ago");

        let much_later = created_instant + Duration::milliseconds(DAY_MS as i64);
        assert_eq!(relative_label(&created, much_later), "1 days ago");
    }
}
