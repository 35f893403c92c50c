//! Dynamic scene materials: time-dynamic properties and the materials built from them.
//!
//! A [`Property`] yields a value for any [`JulianDate`]. It is either constant or backed by a
//! [`TimeIntervalCollection`]. Materials such as [`PolylineOutlineMaterialProperty`] hold a
//! property per slot and resolve them all at a given time into a plain value struct.
//!
//! # Change notification
//!
//! Every property raises its `definition_changed` [`Event`] when its definition changes.
//! A material forwards those events as [`MaterialChange`] values on its own event, and raises
//! one whenever a slot is reassigned to a different property.
//!
//! # Definitions
//!
//! Materials can also be described as JSON and built through [`MaterialDef`] or
//! [`parse_material_json`]. Building validates every value.
//!
//! The crate is single-threaded: shared handles are `Rc` and listeners are `Fn` closures.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod definition;
mod foundation;
mod material;
mod property;
mod time;

pub use definition::color::ColorDef;
pub use definition::material::{
    ColorMaterialDef, IntervalDef, MaterialDef, PolylineOutlineMaterialDef, PropertyDef,
    parse_material_json,
};
pub use foundation::core::{Color, JulianDate, SECONDS_PER_DAY};
pub use foundation::error::{SceneError, SceneResult};
pub use foundation::event::{Event, ListenerId, Subscription};
pub use material::base::{MaterialChange, MaterialProperty};
pub use material::color::{ColorMaterial, ColorMaterialProperty};
pub use material::polyline_outline::{PolylineOutlineMaterial, PolylineOutlineMaterialProperty};
pub use property::base::{
    Property, PropertyRef, PropertyValue, SlotProperty, property_equals, same_property,
};
pub use property::constant::ConstantProperty;
pub use property::intervals::TimeIntervalCollectionProperty;
pub use time::interval::{TimeInterval, TimeIntervalCollection};
