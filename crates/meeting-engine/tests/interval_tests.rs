//! Tests for the half-open day interval type.

use meeting_engine::error::MeetingError;
use meeting_engine::interval::{clock_time, time_of_day, Interval, END_OF_DAY, WHOLE_DAY};

fn iv(start: u32, end: u32) -> Interval {
    Interval::new(start, end).unwrap()
}

#[test]
fn whole_day_spans_1440_minutes() {
    assert_eq!(WHOLE_DAY.start(), 0);
    assert_eq!(WHOLE_DAY.end(), END_OF_DAY);
    assert_eq!(WHOLE_DAY.duration(), 1440);
}

#[test]
fn inclusive_end_is_stored_exclusive() {
    assert_eq!(Interval::from_start_end(0, 1439, true).unwrap(), WHOLE_DAY);
    assert_eq!(Interval::from_start_end(600, 659, true).unwrap(), iv(600, 660));
    assert_eq!(Interval::from_start_end(600, 660, false).unwrap(), iv(600, 660));
}

#[test]
fn from_start_duration() {
    let range = Interval::from_start_duration(540, 30).unwrap();
    assert_eq!(range, iv(540, 570));
    assert_eq!(range.duration(), 30);
}

#[test]
fn start_after_end_is_invalid_range() {
    assert_eq!(
        Interval::new(700, 600),
        Err(MeetingError::InvalidRange { start: 700, end: 600 })
    );
}

#[test]
fn bounds_past_end_of_day_are_invalid() {
    assert!(Interval::new(0, 1441).is_err());
    assert!(Interval::from_start_end(0, 1440, true).is_err());
    assert!(Interval::from_start_duration(1400, 60).is_err());
    assert!(Interval::from_start_duration(10, u32::MAX).is_err());
}

#[test]
fn zero_length_interval_is_legal() {
    let empty = iv(300, 300);
    assert!(empty.is_empty());
    assert_eq!(empty.duration(), 0);
    assert!(!empty.contains(300));
    assert!(!empty.overlaps(&iv(0, 1440)));
}

#[test]
fn overlap_excludes_adjacent_ranges() {
    assert!(iv(0, 100).overlaps(&iv(50, 200)));
    assert!(iv(50, 200).overlaps(&iv(0, 100)));
    assert!(iv(0, 300).overlaps(&iv(100, 200)));
    assert!(!iv(0, 100).overlaps(&iv(100, 200)));
    assert!(!iv(100, 200).overlaps(&iv(0, 100)));
}

#[test]
fn contains_point_is_half_open() {
    let range = iv(600, 660);
    assert!(range.contains(600));
    assert!(range.contains(659));
    assert!(!range.contains(660));
    assert!(!range.contains(599));
}

#[test]
fn contains_interval() {
    let outer = iv(100, 500);
    assert!(outer.contains_interval(&iv(100, 500)));
    assert!(outer.contains_interval(&iv(200, 300)));
    assert!(!outer.contains_interval(&iv(50, 300)));
    assert!(!outer.contains_interval(&iv(400, 600)));
}

#[test]
fn ordering_by_start_then_end() {
    let mut ranges = vec![iv(600, 700), iv(0, 100), iv(600, 650), iv(300, 400)];
    ranges.sort();
    assert_eq!(
        ranges,
        vec![iv(0, 100), iv(300, 400), iv(600, 650), iv(600, 700)]
    );
}

#[test]
fn empty_interval_overlaps_nothing() {
    let empty = iv(300, 300);
    for other in [iv(0, 1440), iv(300, 301), iv(299, 300), iv(300, 300)] {
        assert!(!empty.overlaps(&other), "{} overlaps {}", empty, other);
        assert!(!other.overlaps(&empty), "{} overlaps {}", other, empty);
    }
}

#[test]
fn time_of_day_converts_clock_time() {
    assert_eq!(time_of_day(0, 0).unwrap(), 0);
    assert_eq!(time_of_day(9, 30).unwrap(), 570);
    assert_eq!(time_of_day(24, 0).unwrap(), END_OF_DAY);
    assert!(time_of_day(24, 1).is_err());
    assert!(time_of_day(10, 60).is_err());
}

#[test]
fn display_renders_clock_times() {
    assert_eq!(iv(570, 1440).to_string(), "[09:30, 24:00)");
    assert_eq!(clock_time(0), "00:00");
    assert_eq!(clock_time(1439), "23:59");
}

#[test]
fn deserialize_validates_bounds() {
    let ok: Interval = serde_json::from_str(r#"{"start":600,"end":660}"#).unwrap();
    assert_eq!(ok, iv(600, 660));

    let reversed = serde_json::from_str::<Interval>(r#"{"start":660,"end":600}"#);
    assert!(reversed.is_err(), "reversed bounds must not deserialize");

    let too_late = serde_json::from_str::<Interval>(r#"{"start":0,"end":2000}"#);
    assert!(too_late.is_err(), "bounds past the day must not deserialize");
}

#[test]
fn serialize_writes_start_and_end() {
    let json = serde_json::to_string(&iv(600, 660)).unwrap();
    assert_eq!(json, r#"{"start":600,"end":660}"#);
}
