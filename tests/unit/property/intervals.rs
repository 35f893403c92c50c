use super::*;
use crate::foundation::core::Color;
use crate::foundation::error::SceneError;
use crate::property::constant::ConstantProperty;
use std::cell::Cell;

fn day(d: i64) -> JulianDate {
    JulianDate::new(d, 0.0)
}

#[test]
fn value_follows_containing_interval() {
    let p = TimeIntervalCollectionProperty::new();
    p.add_interval(TimeInterval::closed(day(1), day(2), Color::BLUE))
        .unwrap();
    p.add_interval(TimeInterval::new(day(2), day(3), false, true, Color::RED))
        .unwrap();

    assert_eq!(p.get_value(day(1)), Some(Color::BLUE));
    assert_eq!(p.get_value(JulianDate::new(2, 10.0)), Some(Color::RED));
    assert_eq!(p.get_value(day(5)), None);
    assert_eq!(p.intervals().len(), 2);
}

#[test]
fn constant_only_while_empty() {
    let p = TimeIntervalCollectionProperty::new();
    assert!(p.is_constant());
    p.add_interval(TimeInterval::closed(day(1), day(2), 2.0))
        .unwrap();
    assert!(!p.is_constant());
    p.clear();
    assert!(p.is_constant());
}

#[test]
fn mutations_raise_definition_changed() {
    let p = TimeIntervalCollectionProperty::new();
    let count = Rc::new(Cell::new(0));
    {
        let count = Rc::clone(&count);
        p.definition_changed()
            .add_event_listener(move |_| count.set(count.get() + 1));
    }

    p.add_interval(TimeInterval::closed(day(1), day(2), 1.0))
        .unwrap();
    assert_eq!(count.get(), 1);

    // Empty intervals are ignored and do not notify.
    p.add_interval(TimeInterval::closed(day(4), day(3), 1.0))
        .unwrap();
    assert_eq!(count.get(), 1);

    let err = p
        .add_interval(TimeInterval::closed(day(1), day(2), 9.0))
        .unwrap_err();
    assert!(matches!(err, SceneError::Interval(_)));
    assert_eq!(count.get(), 1);

    p.clear();
    assert_eq!(count.get(), 2);
    p.clear();
    assert_eq!(count.get(), 2);
}

#[test]
fn equality_compares_interval_sets() {
    let a = TimeIntervalCollectionProperty::new();
    let b = TimeIntervalCollectionProperty::new();
    assert!(a.equals(&b));

    a.add_interval(TimeInterval::closed(day(1), day(2), 1.0))
        .unwrap();
    assert!(!a.equals(&b));
    b.add_interval(TimeInterval::closed(day(1), day(2), 1.0))
        .unwrap();
    assert!(a.equals(&b));

    assert!(!a.equals(&ConstantProperty::new(1.0)));
}
