use std::any::Any;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::foundation::core::JulianDate;
use crate::foundation::error::SceneResult;
use crate::foundation::event::Event;
use crate::property::base::{Property, PropertyValue};
use crate::time::interval::{TimeInterval, TimeIntervalCollection};

/// A property whose value is the data of the interval containing the query time.
///
/// Outside every interval the property has no value. An empty collection is time-invariant.
pub struct TimeIntervalCollectionProperty<T> {
    intervals: RefCell<TimeIntervalCollection<T>>,
    definition_changed: Event<()>,
}

impl<T: PropertyValue> TimeIntervalCollectionProperty<T> {
    /// Create a property with no intervals.
    pub fn new() -> Self {
        Self::from_intervals(TimeIntervalCollection::new())
    }

    /// Create a property backed by an existing collection.
    pub fn from_intervals(intervals: TimeIntervalCollection<T>) -> Self {
        Self {
            intervals: RefCell::new(intervals),
            definition_changed: Event::new(),
        }
    }

    /// Shorthand for `Rc::new(TimeIntervalCollectionProperty::new())`.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::new())
    }

    /// Read access to the backing intervals.
    pub fn intervals(&self) -> Ref<'_, TimeIntervalCollection<T>> {
        self.intervals.borrow()
    }

    /// Add an interval and raise `definition_changed` when it was inserted.
    pub fn add_interval(&self, interval: TimeInterval<T>) -> SceneResult<()> {
        let inserted = self.intervals.borrow_mut().add_interval(interval)?;
        if inserted {
            self.definition_changed.raise_event(&());
        }
        Ok(())
    }

    /// Remove every interval, raising `definition_changed` if any were present.
    pub fn clear(&self) {
        let had_any = {
            let mut intervals = self.intervals.borrow_mut();
            let had_any = !intervals.is_empty();
            intervals.clear();
            had_any
        };
        if had_any {
            self.definition_changed.raise_event(&());
        }
    }
}

impl<T: PropertyValue> Default for TimeIntervalCollectionProperty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PropertyValue> Property<T> for TimeIntervalCollectionProperty<T> {
    fn is_constant(&self) -> bool {
        self.intervals.borrow().is_empty()
    }

    fn get_value(&self, time: JulianDate) -> Option<T> {
        self.intervals
            .borrow()
            .find_data_for_interval_containing_date(time)
            .cloned()
    }

    fn definition_changed(&self) -> &Event<()> {
        &self.definition_changed
    }

    fn equals(&self, other: &dyn Property<T>) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| *self.intervals.borrow() == *other.intervals.borrow())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: PropertyValue> std::fmt::Debug for TimeIntervalCollectionProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeIntervalCollectionProperty")
            .field("intervals", &*self.intervals.borrow())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/property/intervals.rs"]
mod tests;
