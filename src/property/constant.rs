use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::core::JulianDate;
use crate::foundation::event::Event;
use crate::property::base::{Property, PropertyValue};

/// A property whose value does not change with time.
///
/// The held value may still be replaced (or unset) through [`ConstantProperty::set_value`], which
/// raises [`Property::definition_changed`].
pub struct ConstantProperty<T> {
    value: RefCell<Option<T>>,
    definition_changed: Event<()>,
}

impl<T: PropertyValue> ConstantProperty<T> {
    /// Create a property holding `value`.
    pub fn new(value: T) -> Self {
        Self::with_value(Some(value))
    }

    /// Create a property holding no value.
    pub fn empty() -> Self {
        Self::with_value(None)
    }

    /// Create a property from an optional value.
    pub fn with_value(value: Option<T>) -> Self {
        Self {
            value: RefCell::new(value),
            definition_changed: Event::new(),
        }
    }

    /// Shorthand for `Rc::new(ConstantProperty::new(value))`.
    pub fn shared(value: T) -> Rc<Self> {
        Rc::new(Self::new(value))
    }

    /// Current value.
    pub fn value(&self) -> Option<T> {
        self.value.borrow().clone()
    }

    /// Replace the held value. Raises `definition_changed` only when the value actually changes.
    pub fn set_value(&self, value: Option<T>) {
        let changed = {
            let mut current = self.value.borrow_mut();
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };
        if changed {
            self.definition_changed.raise_event(&());
        }
    }
}

impl<T: PropertyValue> Property<T> for ConstantProperty<T> {
    fn is_constant(&self) -> bool {
        true
    }

    fn get_value(&self, _time: JulianDate) -> Option<T> {
        self.value()
    }

    fn definition_changed(&self) -> &Event<()> {
        &self.definition_changed
    }

    fn equals(&self, other: &dyn Property<T>) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| *self.value.borrow() == *other.value.borrow())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: PropertyValue> std::fmt::Debug for ConstantProperty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstantProperty")
            .field("value", &*self.value.borrow())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/property/constant.rs"]
mod tests;
