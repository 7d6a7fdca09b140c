use chrono::{Datelike, NaiveDate, Weekday};
use cpm_schedule::{WorkCalendar, WorkCalendarConfig};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn default_calendar_weekends_unavailable() {
    let cal = WorkCalendar::default();
    // 2025-01-04 is a Saturday, 2025-01-05 is a Sunday
    assert!(!cal.is_available(d(2025, 1, 4)));
    assert!(!cal.is_available(d(2025, 1, 5)));
    assert!(cal.is_available(d(2025, 1, 6)));
}

#[test]
fn time_zero_lands_on_first_working_day() {
    let cal = WorkCalendar::default();
    // Saturday start rolls to Monday
    let date = cal.date_at(d(2025, 1, 4), 0.0).unwrap();
    assert_eq!(date.weekday(), Weekday::Mon);
    assert_eq!(date, d(2025, 1, 6));
}

#[test]
fn fractional_times_round_up_to_whole_days() {
    let cal = WorkCalendar::default();
    let monday = d(2025, 1, 6);
    assert_eq!(cal.date_at(monday, 0.5), Some(d(2025, 1, 7)));
    assert_eq!(cal.date_at(monday, 4.0), Some(d(2025, 1, 10)));
    assert_eq!(cal.date_at(monday, 5.0), Some(d(2025, 1, 13)));
}

#[test]
fn unbounded_or_negative_times_have_no_date() {
    let cal = WorkCalendar::default();
    assert_eq!(cal.date_at(d(2025, 1, 6), f64::INFINITY), None);
    assert_eq!(cal.date_at(d(2025, 1, 6), -1.0), None);
}

#[test]
fn six_day_week_with_holiday() {
    let config = WorkCalendarConfig::new(
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ],
        [d(2025, 1, 7)],
    );
    let cal = WorkCalendar::from_config(&config).unwrap();
    assert!(cal.is_available(d(2025, 1, 4)));
    assert!(!cal.is_available(d(2025, 1, 7)));

    // Mon 6, Wed 8, Thu 9, Fri 10, Sat 11
    assert_eq!(cal.date_at(d(2025, 1, 6), 4.0), Some(d(2025, 1, 11)));
}

#[test]
fn whole_weeks_skip_holidays_inside_them() {
    let config = WorkCalendarConfig::new(
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ],
        // Wednesday holiday, plus one on a Saturday that changes nothing
        [d(2025, 1, 8), d(2025, 1, 11)],
    );
    let cal = WorkCalendar::from_config(&config).unwrap();
    let monday = d(2025, 1, 6);

    assert_eq!(WorkCalendar::default().date_at(monday, 10.0), Some(d(2025, 1, 20)));
    assert_eq!(cal.date_at(monday, 10.0), Some(d(2025, 1, 21)));
    assert_eq!(cal.date_at(monday, 12.0), Some(d(2025, 1, 23)));
}

#[test]
fn holiday_on_the_jump_target_pushes_the_date() {
    let config = WorkCalendarConfig::new(
        [Weekday::Mon, Weekday::Wed, Weekday::Fri],
        [d(2025, 1, 13)],
    );
    let cal = WorkCalendar::from_config(&config).unwrap();
    // Three working days from Monday 6 land on Monday 13, a holiday
    assert_eq!(cal.date_at(d(2025, 1, 6), 3.0), Some(d(2025, 1, 15)));
}
