//! Calendar-date windows for report queries.

use time::{Date, Month};

/// An inclusive calendar-date range used to filter transactions for a
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    /// The first date in the window.
    pub start: Date,
    /// The last date in the window, inclusive.
    pub end: Date,
}

impl DateWindow {
    /// Create a window from `start` to `end`, inclusive on both ends.
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// The window covering the whole calendar month that `date` falls in.
    pub fn month_of(date: Date) -> Self {
        let year = date.year();
        let month = date.month();
        let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
        let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
            .expect("invalid month end date");

        Self { start, end }
    }

    /// Whether `date` falls within the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The month windows for the `months` trailing calendar months ending at
/// (and including) the month `anchor` falls in, oldest first.
pub(crate) fn trailing_months(anchor: Date, months: usize) -> Vec<DateWindow> {
    let mut windows = Vec::with_capacity(months);
    let mut year = anchor.year();
    let mut month = anchor.month();

    for _ in 0..months {
        windows.push(DateWindow::month_of(
            Date::from_calendar_date(year, month, 1).expect("invalid month start date"),
        ));

        if month == Month::January {
            year -= 1;
        }
        month = month.previous();
    }

    windows.reverse();
    windows
}

/// Formats a month as an abbreviated name plus 2-digit year, e.g. "Jan 24".
pub(crate) fn month_label(date: Date) -> String {
    format!("{} {:02}", month_abbrev(date.month()), date.year().rem_euclid(100))
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod window_tests {
    use time::macros::date;

    use super::{DateWindow, month_label, trailing_months};

    #[test]
    fn month_of_covers_whole_month() {
        let window = DateWindow::month_of(date!(2024 - 05 - 15));

        assert_eq!(window.start, date!(2024 - 05 - 01));
        assert_eq!(window.end, date!(2024 - 05 - 31));
    }

    #[test]
    fn month_of_handles_leap_february() {
        let window = DateWindow::month_of(date!(2024 - 02 - 10));
        assert_eq!(window.end, date!(2024 - 02 - 29));

        let window = DateWindow::month_of(date!(2023 - 02 - 10));
        assert_eq!(window.end, date!(2023 - 02 - 28));
    }

    #[test]
    fn contains_is_inclusive_on_both_ends() {
        let window = DateWindow::new(date!(2024 - 05 - 01), date!(2024 - 05 - 31));

        assert!(window.contains(date!(2024 - 05 - 01)));
        assert!(window.contains(date!(2024 - 05 - 31)));
        assert!(!window.contains(date!(2024 - 04 - 30)));
        assert!(!window.contains(date!(2024 - 06 - 01)));
    }

    #[test]
    fn trailing_months_walks_back_across_year_boundaries() {
        let windows = trailing_months(date!(2024 - 02 - 15), 4);

        assert_eq!(windows.len(), 4);
        assert_eq!(windows[0].start, date!(2023 - 11 - 01));
        assert_eq!(windows[1].start, date!(2023 - 12 - 01));
        assert_eq!(windows[2].start, date!(2024 - 01 - 01));
        assert_eq!(windows[3].start, date!(2024 - 02 - 01));
        assert_eq!(windows[3].end, date!(2024 - 02 - 29));
    }

    #[test]
    fn trailing_months_includes_the_anchor_month_last() {
        let windows = trailing_months(date!(2024 - 05 - 01), 1);

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0], DateWindow::month_of(date!(2024 - 05 - 01)));
    }

    #[test]
    fn month_label_uses_abbreviation_and_two_digit_year() {
        assert_eq!(month_label(date!(2024 - 01 - 01)), "Jan 24");
        assert_eq!(month_label(date!(2009 - 12 - 31)), "Dec 09");
    }
}
