use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::foundation::core::JulianDate;
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::event::{Event, Subscription};
use crate::property::base::{
    PropertyRef, PropertyValue, SlotProperty, property_equals, same_property,
};

/// Common interface of material properties: named slots resolved together at a time instant.
pub trait MaterialProperty: Any {
    /// Material type name understood by renderers (for example `"PolylineOutline"`).
    fn material_type(&self) -> &'static str;

    /// `true` when every defined slot is constant.
    fn is_constant(&self) -> bool;

    /// Raised when a slot is reassigned or the definition of a current slot changes.
    fn definition_changed(&self) -> &Event<MaterialChange>;

    /// Structural equality: same material kind and pairwise-equal slots.
    fn equals(&self, other: &dyn MaterialProperty) -> bool;

    /// Access the concrete material for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn MaterialProperty {
    /// Downcast to a concrete material type.
    pub fn downcast_ref<M: Any>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }
}

impl fmt::Debug for dyn MaterialProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialProperty")
            .field("material_type", &self.material_type())
            .field("is_constant", &self.is_constant())
            .finish_non_exhaustive()
    }
}

/// Arguments of a material's `definition_changed` event.
#[derive(Clone)]
pub struct MaterialChange {
    /// Material whose definition changed.
    pub material: Rc<dyn MaterialProperty>,
    /// Slot name, for example `"outlineColor"`.
    pub property_name: &'static str,
    /// Slot reference after the change.
    pub new_value: Option<SlotProperty>,
    /// Slot reference before the change. Equal to `new_value` when only the slot's own value
    /// changed.
    pub old_value: Option<SlotProperty>,
}

impl MaterialChange {
    /// `true` when the change was raised by `material`.
    pub fn is_from<M: MaterialProperty>(&self, material: &Rc<M>) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.material), Rc::as_ptr(material))
    }
}

impl fmt::Debug for MaterialChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterialChange")
            .field("material", &self.material.material_type())
            .field("property_name", &self.property_name)
            .field("new_value", &self.new_value)
            .field("old_value", &self.old_value)
            .finish()
    }
}

/// Time used when a constant material is resolved without an explicit time.
pub(crate) fn resolve_time(
    time: Option<JulianDate>,
    is_constant: bool,
) -> SceneResult<JulianDate> {
    match time {
        Some(t) => Ok(t),
        None if is_constant => Ok(JulianDate::J2000),
        None => Err(SceneError::evaluation(
            "a time is required to resolve a time-varying material",
        )),
    }
}

/// One named material slot and its subscription to the held property.
pub(crate) struct Slot<T: PropertyValue> {
    name: &'static str,
    property: RefCell<Option<PropertyRef<T>>>,
    subscription: RefCell<Option<Subscription>>,
}

impl<T: PropertyValue> Slot<T> {
    /// Create a slot already bound to `property` on behalf of `owner`.
    pub(crate) fn bound<M: MaterialProperty>(
        name: &'static str,
        property: Option<PropertyRef<T>>,
        owner: &Weak<M>,
        accessor: fn(&M) -> &Slot<T>,
    ) -> Self {
        let subscription = property
            .as_ref()
            .map(|p| Self::subscribe(name, p, owner, accessor));
        Self {
            name,
            property: RefCell::new(property),
            subscription: RefCell::new(subscription),
        }
    }

    pub(crate) fn get(&self) -> Option<PropertyRef<T>> {
        self.property.borrow().clone()
    }

    pub(crate) fn is_constant(&self) -> bool {
        self.property.borrow().as_ref().is_none_or(|p| p.is_constant())
    }

    pub(crate) fn equals(&self, other: &Slot<T>) -> bool {
        property_equals(self.property.borrow().as_ref(), other.property.borrow().as_ref())
    }

    /// Value at `time`; `None` when the slot or its value is unset.
    pub(crate) fn resolve(&self, time: JulianDate) -> Option<T> {
        let property = self.get()?;
        property.get_value(time)
    }

    /// Replace the held property and notify `owner` when the reference changes.
    pub(crate) fn assign<M: MaterialProperty>(
        &self,
        property: Option<PropertyRef<T>>,
        owner: &Weak<M>,
        accessor: fn(&M) -> &Slot<T>,
    ) {
        if same_property(self.property.borrow().as_ref(), property.as_ref()) {
            return;
        }

        let subscription = property
            .as_ref()
            .map(|p| Self::subscribe(self.name, p, owner, accessor));
        let old = self.property.replace(property.clone());
        // Dropping the previous subscription detaches from the replaced property.
        let previous = self.subscription.replace(subscription);
        drop(previous);

        tracing::debug!(
            property = self.name,
            defined = property.is_some(),
            "material slot reassigned"
        );

        if let Some(owner) = owner.upgrade() {
            let change = MaterialChange {
                material: owner.clone(),
                property_name: self.name,
                new_value: property.map(T::into_slot),
                old_value: old.map(T::into_slot),
            };
            owner.definition_changed().raise_event(&change);
        }
    }

    fn subscribe<M: MaterialProperty>(
        name: &'static str,
        property: &PropertyRef<T>,
        owner: &Weak<M>,
        accessor: fn(&M) -> &Slot<T>,
    ) -> Subscription {
        let owner = owner.clone();
        property.definition_changed().subscribe(move |_| {
            let Some(owner) = owner.upgrade() else {
                return;
            };
            let current = accessor(&owner).get().map(T::into_slot);
            tracing::trace!(property = name, "material slot definition changed");
            let change = MaterialChange {
                material: owner.clone(),
                property_name: name,
                new_value: current.clone(),
                old_value: current,
            };
            owner.definition_changed().raise_event(&change);
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/material/base.rs"]
mod tests;
