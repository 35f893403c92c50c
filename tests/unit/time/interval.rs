use super::*;

fn day(d: i64) -> JulianDate {
    JulianDate::new(d, 0.0)
}

#[test]
fn closed_interval_contains_both_bounds() {
    let i = TimeInterval::closed(day(1), day(2), "x");
    assert!(i.contains(day(1)));
    assert!(i.contains(JulianDate::new(1, 100.0)));
    assert!(i.contains(day(2)));
    assert!(!i.contains(day(3)));
    assert!(!i.contains(day(0)));
}

#[test]
fn open_bounds_exclude_endpoints() {
    let i = TimeInterval::new(day(1), day(2), false, false, ());
    assert!(!i.contains(day(1)));
    assert!(!i.contains(day(2)));
    assert!(i.contains(JulianDate::new(1, 1.0)));
}

#[test]
fn emptiness_depends_on_inclusivity() {
    assert!(TimeInterval::closed(day(2), day(1), ()).is_empty());
    assert!(!TimeInterval::closed(day(1), day(1), ()).is_empty());
    assert!(TimeInterval::new(day(1), day(1), true, false, ()).is_empty());
}

#[test]
fn intersection_honors_shared_endpoints() {
    let a = TimeInterval::closed(day(1), day(2), ());
    let touching_closed = TimeInterval::closed(day(2), day(3), ());
    let touching_open = TimeInterval::new(day(2), day(3), false, true, ());
    assert!(a.intersects(&touching_closed));
    assert!(!a.intersects(&touching_open));
    assert!(!a.intersects(&TimeInterval::closed(day(4), day(5), ())));
}

#[test]
fn collection_keeps_chronological_order() {
    let mut c = TimeIntervalCollection::new();
    assert!(c.add_interval(TimeInterval::closed(day(5), day(6), 2)).unwrap());
    assert!(c.add_interval(TimeInterval::closed(day(1), day(2), 1)).unwrap());

    let data: Vec<i32> = c.iter().map(|i| i.data).collect();
    assert_eq!(data, vec![1, 2]);
    assert_eq!(c.start(), Some(day(1)));
    assert_eq!(c.stop(), Some(day(6)));
    assert_eq!(c.len(), 2);
}

#[test]
fn collection_finds_data_for_date() {
    let mut c = TimeIntervalCollection::new();
    c.add_interval(TimeInterval::closed(day(1), day(2), "a"))
        .unwrap();
    c.add_interval(TimeInterval::new(day(2), day(3), false, true, "b"))
        .unwrap();

    assert_eq!(c.find_data_for_interval_containing_date(day(1)), Some(&"a"));
    assert_eq!(c.find_data_for_interval_containing_date(day(2)), Some(&"a"));
    assert_eq!(
        c.find_data_for_interval_containing_date(JulianDate::new(2, 1.0)),
        Some(&"b")
    );
    assert_eq!(c.find_data_for_interval_containing_date(day(4)), None);
    assert_eq!(c.index_of(day(3)), Some(1));
}

#[test]
fn degenerate_interval_before_open_interval_with_same_start() {
    let mut c = TimeIntervalCollection::new();
    c.add_interval(TimeInterval::new(day(1), day(2), false, true, "open"))
        .unwrap();
    c.add_interval(TimeInterval::closed(day(1), day(1), "point"))
        .unwrap();

    assert_eq!(c.get(0).map(|i| i.data), Some("point"));
    assert_eq!(c.find_data_for_interval_containing_date(day(1)), Some(&"point"));
    assert_eq!(c.find_data_for_interval_containing_date(day(2)), Some(&"open"));
}

#[test]
fn overlapping_interval_is_rejected() {
    let mut c = TimeIntervalCollection::new();
    c.add_interval(TimeInterval::closed(day(1), day(3), 1.0))
        .unwrap();
    let err = c
        .add_interval(TimeInterval::closed(day(2), day(4), 2.0))
        .unwrap_err();
    assert!(matches!(err, SceneError::Interval(_)));
    assert_eq!(c.len(), 1);
}

#[test]
fn empty_interval_is_ignored() {
    let mut c = TimeIntervalCollection::new();
    assert!(!c.add_interval(TimeInterval::closed(day(3), day(1), 0)).unwrap());
    assert!(c.is_empty());

    c.add_interval(TimeInterval::closed(day(1), day(2), 0)).unwrap();
    c.clear();
    assert!(c.is_empty());
    assert_eq!(c.start(), None);
}

#[test]
fn deserialized_interval_dates_are_normalized() {
    let i: TimeInterval<f64> = serde_json::from_value(serde_json::json!({
        "start": {"dayNumber": 1, "secondsOfDay": 90_000.0},
        "stop": {"dayNumber": 3},
        "isStartIncluded": true,
        "isStopIncluded": true,
        "data": 2.0
    }))
    .unwrap();
    assert_eq!(i.start, JulianDate::new(2, 3_600.0));
    assert!(i.contains(JulianDate::new(2, 7_200.0)));
    assert!(!i.contains(JulianDate::new(2, 0.0)));
}
