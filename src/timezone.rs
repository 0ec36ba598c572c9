//! Resolving canonical timezone names to UTC offsets.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset for a canonical timezone name, e.g.
/// "Pacific/Auckland".
///
/// Returns `None` when the name is not a known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    let timezone = time_tz::timezones::get_by_name(canonical_timezone)?;

    Some(timezone.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

#[cfg(test)]
mod get_local_offset_tests {
    use super::get_local_offset;

    #[test]
    fn resolves_known_timezones() {
        assert!(get_local_offset("Pacific/Auckland").is_some());
        assert!(get_local_offset("Europe/Berlin").is_some());
    }

    #[test]
    fn rejects_unknown_timezones() {
        assert_eq!(get_local_offset("Middle/Nowhere"), None);
    }
}
