use clocky::core::calculator::duration::{aggregate_total, compute_duration, total_of};
use clocky::errors::AppError;
use clocky::models::duration::WorkDuration;
use clocky::models::overnight::OvernightPolicy;
use clocky::models::shift::ShiftRecord;
use chrono::{NaiveDate, NaiveTime};

fn hhmm(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

#[test]
fn test_nine_to_five_is_eight_hours() {
    let d = compute_duration("09:00", "17:00", OvernightPolicy::Wrap).unwrap();
    assert_eq!(d.to_string(), "8h 0m");
}

#[test]
fn test_same_day_duration_matches_difference() {
    for start in (0..24 * 60).step_by(37) {
        for end in (start..24 * 60).step_by(53) {
            let d = compute_duration(&hhmm(start), &hhmm(end), OvernightPolicy::Reject)
                .expect("same-day pair must be accepted");
            let diff = end - start;
            assert_eq!(d.hours(), diff / 60, "{} -> {}", hhmm(start), hhmm(end));
            assert_eq!(d.minutes(), diff % 60, "{} -> {}", hhmm(start), hhmm(end));

            let reparsed: WorkDuration = d.to_string().parse().unwrap();
            assert_eq!(reparsed, d);
        }
    }
}

#[test]
fn test_equal_times_give_zero() {
    let d = compute_duration("12:34", "12:34", OvernightPolicy::Reject).unwrap();
    assert_eq!(d, WorkDuration::ZERO);
    assert_eq!(d.to_string(), "0h 0m");
}

#[test]
fn test_overnight_wraps_past_midnight() {
    let d = compute_duration("22:00", "06:00", OvernightPolicy::Wrap).unwrap();
    assert_eq!(d.to_string(), "8h 0m");

    let d = compute_duration("23:30", "00:15", OvernightPolicy::Wrap).unwrap();
    assert_eq!(d.to_string(), "0h 45m");
}

#[test]
fn test_overnight_rejected_by_policy() {
    let err = compute_duration("22:00", "06:00", OvernightPolicy::Reject).unwrap_err();
    match err {
        AppError::OvernightShift { start, end } => {
            assert_eq!(start, "22:00");
            assert_eq!(end, "06:00");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_times_are_rejected() {
    for bad in ["9:00", "24:00", "12:60", "ab:cd", "", "12:00:00", "1200", "-1:00"] {
        let err = compute_duration(bad, "17:00", OvernightPolicy::Wrap).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidTime(ref s) if s == bad),
            "{bad:?} gave {err:?}"
        );
        assert!(err.is_input_error());
    }

    let err = compute_duration("09:00", "17:5", OvernightPolicy::Wrap).unwrap_err();
    assert!(matches!(err, AppError::InvalidTime(ref s) if s == "17:5"));
}

#[test]
fn test_aggregate_of_nothing_is_zero() {
    let empty: Vec<&str> = Vec::new();
    assert_eq!(aggregate_total(empty).unwrap().to_string(), "0h 0m");
}

#[test]
fn test_aggregate_carries_minutes() {
    let total = aggregate_total(["1h 30m", "2h 45m"]).unwrap();
    assert_eq!(total.to_string(), "4h 15m");
}

#[test]
fn test_aggregate_skips_blank_entries() {
    let total = aggregate_total(vec![String::new(), "1h 0m".into(), "   ".into(), "0h 59m".into()])
        .unwrap();
    assert_eq!(total.to_string(), "1h 59m");
}

#[test]
fn test_aggregate_fails_on_malformed_entry() {
    let err = aggregate_total(["1h 30m", "abc"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(ref s) if s == "abc"));

    assert!(aggregate_total(["1h 75m"]).is_err());
    assert!(aggregate_total(["-1h 0m"]).is_err());
    assert!(aggregate_total(["1h"]).is_err());
}

#[test]
fn test_aggregate_can_exceed_a_day() {
    let total = aggregate_total(["23h 59m", "23h 59m", "0h 2m"]).unwrap();
    assert_eq!(total.hours(), 48);
    assert_eq!(total.minutes(), 0);
}

fn dur(hours: u32, minutes: u32) -> WorkDuration {
    WorkDuration::new(hours, minutes).unwrap()
}

#[test]
fn test_work_duration_normalizes_minutes() {
    let d = dur(1, 90);
    assert_eq!(d.to_string(), "2h 30m");
    assert_eq!(d.total_minutes(), 150);
    assert_eq!(dur(1, 30).checked_add(dur(0, 45)), Some(dur(2, 15)));
}

#[test]
fn test_huge_stored_duration_is_summed_without_overflow() {
    let d: WorkDuration = "71582789h 0m".parse().unwrap();
    assert_eq!(d.total_minutes(), 71_582_789 * 60);

    let total = aggregate_total(["71582789h 0m", "1h 30m"]).unwrap();
    assert_eq!(total.to_string(), "71582790h 30m");
}

#[test]
fn test_aggregate_overflow_is_an_error() {
    let max = format!("{}h 59m", u32::MAX);

    let err = aggregate_total([max.as_str(), "0h 1m"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(ref s) if s == "0h 1m"));

    // hours beyond u32 do not parse at all
    let err = aggregate_total(["4294967296h 0m"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidDuration(_)));

    assert_eq!(WorkDuration::new(u32::MAX, 60), None);
    assert_eq!(dur(u32::MAX, 0).checked_add(dur(0, 59)), Some(dur(u32::MAX, 59)));
}

#[test]
fn test_total_of_records_overflow_is_an_error() {
    let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let t = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let records = vec![
        ShiftRecord::new(date, t, t, dur(u32::MAX, 0)),
        ShiftRecord::new(date, t, t, dur(1, 0)),
    ];

    assert!(matches!(
        total_of(&records).unwrap_err(),
        AppError::InvalidDuration(ref s) if s == "1h 0m"
    ));
}

#[test]
fn test_total_of_records_ignores_missing_durations() {
    let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

    let mut no_hours = ShiftRecord::new(date, t(8, 0), t(9, 0), dur(1, 0));
    no_hours.hours = None;

    let records = vec![
        ShiftRecord::new(date, t(9, 0), t(17, 0), dur(8, 0)),
        no_hours,
        ShiftRecord::new(date, t(18, 0), t(19, 20), dur(1, 20)),
    ];

    assert_eq!(total_of(&records).unwrap().to_string(), "9h 20m");
    assert_eq!(total_of(&[]).unwrap().to_string(), "0h 0m");
}
