use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Offset-carrying layouts. The offset is dropped and the local wall-clock time kept.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses the timestamp layouts found in price and news exports.
///
/// Accepts a bare `YYYY-MM-DD` date (read as midnight), naive date-times, and
/// RFC 3339 or `YYYY-MM-DD HH:MM:SS±HH:MM` forms. For offset forms the local
/// time is kept, so the calendar date is the one the publisher saw.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.naive_local());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Parses a calendar date, discarding any time-of-day component.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|ts| ts.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_accepted_layouts() {
        assert_eq!(parse_timestamp("2020-06-05"), Some(ts(2020, 6, 5, 0, 0, 0)));
        assert_eq!(
            parse_timestamp("2020-06-05 10:30:54"),
            Some(ts(2020, 6, 5, 10, 30, 54))
        );
        assert_eq!(
            parse_timestamp("2020-06-05T10:30:54"),
            Some(ts(2020, 6, 5, 10, 30, 54))
        );
        assert_eq!(
            parse_timestamp("2020-06-05 10:30"),
            Some(ts(2020, 6, 5, 10, 30, 0))
        );
    }

    #[test]
    fn test_offset_keeps_local_wall_clock() {
        assert_eq!(
            parse_timestamp("2020-06-05 22:30:54-04:00"),
            Some(ts(2020, 6, 5, 22, 30, 54))
        );
        assert_eq!(
            parse_timestamp("2020-06-05T22:30:54-04:00"),
            Some(ts(2020, 6, 5, 22, 30, 54))
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2020-13-40"), None);
    }

    #[test]
    fn test_parse_date_drops_time() {
        assert_eq!(
            parse_date("2021-03-04 15:59:00"),
            NaiveDate::from_ymd_opt(2021, 3, 4)
        );
    }
}
