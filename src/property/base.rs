use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::foundation::core::{Color, JulianDate};
use crate::foundation::event::Event;

/// Shared reference to a property, as stored in material slots.
///
/// Identity of a slot is the identity of this `Rc`.
pub type PropertyRef<T> = Rc<dyn Property<T>>;

/// Value types a [`Property`] can produce.
pub trait PropertyValue: Clone + PartialEq + fmt::Debug + 'static {
    /// Wrap a typed property reference into the type-erased [`SlotProperty`].
    fn into_slot(property: PropertyRef<Self>) -> SlotProperty;
}

impl PropertyValue for Color {
    fn into_slot(property: PropertyRef<Self>) -> SlotProperty {
        SlotProperty::Color(property)
    }
}

impl PropertyValue for f64 {
    fn into_slot(property: PropertyRef<Self>) -> SlotProperty {
        SlotProperty::Number(property)
    }
}

/// A value that may vary with time.
pub trait Property<T: PropertyValue> {
    /// `true` when the value does not depend on time.
    fn is_constant(&self) -> bool;

    /// Value at `time`, or `None` when the property has no value there.
    fn get_value(&self, time: JulianDate) -> Option<T>;

    /// Raised whenever the definition of this property changes.
    fn definition_changed(&self) -> &Event<()>;

    /// Structural equality with another property of the same value type.
    fn equals(&self, other: &dyn Property<T>) -> bool;

    /// Access the concrete property for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: PropertyValue> dyn Property<T> {
    /// Downcast to a concrete property type.
    pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
        self.as_any().downcast_ref::<P>()
    }
}

impl<T: PropertyValue> fmt::Debug for dyn Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("is_constant", &self.is_constant())
            .finish_non_exhaustive()
    }
}

/// `true` when both references point at the same property, or are both `None`.
pub fn same_property<T: PropertyValue>(
    a: Option<&PropertyRef<T>>,
    b: Option<&PropertyRef<T>>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b)),
        _ => false,
    }
}

/// Slot equality: both unset, the same reference, or structurally equal.
pub fn property_equals<T: PropertyValue>(
    a: Option<&PropertyRef<T>>,
    b: Option<&PropertyRef<T>>,
) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => same_property(Some(a), Some(b)) || a.equals(&**b),
        _ => false,
    }
}

/// Type-erased slot reference carried by material change notifications.
#[derive(Clone)]
pub enum SlotProperty {
    /// A color-valued property.
    Color(PropertyRef<Color>),
    /// A scalar-valued property.
    Number(PropertyRef<f64>),
}

impl SlotProperty {
    fn addr(&self) -> *const () {
        match self {
            Self::Color(p) => Rc::as_ptr(p) as *const (),
            Self::Number(p) => Rc::as_ptr(p) as *const (),
        }
    }

    /// `true` when this slot reference is `property` itself.
    pub fn is<T: PropertyValue>(&self, property: &PropertyRef<T>) -> bool {
        std::ptr::addr_eq(self.addr(), Rc::as_ptr(property))
    }

    /// `true` when both slot references point at the same property.
    pub fn same_as(&self, other: &SlotProperty) -> bool {
        std::ptr::addr_eq(self.addr(), other.addr())
    }

    /// Color property, when this slot holds one.
    pub fn as_color(&self) -> Option<&PropertyRef<Color>> {
        match self {
            Self::Color(p) => Some(p),
            Self::Number(_) => None,
        }
    }

    /// Scalar property, when this slot holds one.
    pub fn as_number(&self) -> Option<&PropertyRef<f64>> {
        match self {
            Self::Number(p) => Some(p),
            Self::Color(_) => None,
        }
    }
}

impl fmt::Debug for SlotProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(p) => f.debug_tuple("Color").field(&self.addr()).field(p).finish(),
            Self::Number(p) => f.debug_tuple("Number").field(&self.addr()).field(p).finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/property/base.rs"]
mod tests;
