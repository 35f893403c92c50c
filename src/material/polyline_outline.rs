use std::any::Any;
use std::rc::{Rc, Weak};

use crate::foundation::core::{Color, JulianDate};
use crate::foundation::error::SceneResult;
use crate::foundation::event::Event;
use crate::material::base::{MaterialChange, MaterialProperty, Slot, resolve_time};
use crate::property::base::PropertyRef;
use crate::property::constant::ConstantProperty;

/// Resolved polyline outline material at one time instant.
///
/// Every field is always present; `None` means the slot, or its value, is unset. Serialization
/// writes `null` for unset fields rather than omitting them.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolylineOutlineMaterial {
    /// Line color.
    pub color: Option<Color>,
    /// Outline color.
    pub outline_color: Option<Color>,
    /// Outline width in pixels.
    pub outline_width: Option<f64>,
}

/// Polyline material with a colored line surrounded by an outline.
///
/// Slots default to constant white `color`, constant black `outline_color` and constant `0.0`
/// `outline_width`. Instances are shared (`Rc`) and mutated through `&self`.
pub struct PolylineOutlineMaterialProperty {
    this: Weak<Self>,
    color: Slot<Color>,
    outline_color: Slot<Color>,
    outline_width: Slot<f64>,
    definition_changed: Event<MaterialChange>,
}

impl PolylineOutlineMaterialProperty {
    /// Create a material with the default slots.
    pub fn new() -> Rc<Self> {
        Self::with_properties(
            Some(ConstantProperty::shared(Color::WHITE)),
            Some(ConstantProperty::shared(Color::BLACK)),
            Some(ConstantProperty::shared(0.0_f64)),
        )
    }

    /// Create a material with explicit slots.
    pub fn with_properties(
        color: Option<PropertyRef<Color>>,
        outline_color: Option<PropertyRef<Color>>,
        outline_width: Option<PropertyRef<f64>>,
    ) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| Self {
            this: this.clone(),
            color: Slot::bound("color", color, this, Self::color_slot),
            outline_color: Slot::bound(
                "outlineColor",
                outline_color,
                this,
                Self::outline_color_slot,
            ),
            outline_width: Slot::bound(
                "outlineWidth",
                outline_width,
                this,
                Self::outline_width_slot,
            ),
            definition_changed: Event::new(),
        })
    }

    fn color_slot(&self) -> &Slot<Color> {
        &self.color
    }

    fn outline_color_slot(&self) -> &Slot<Color> {
        &self.outline_color
    }

    fn outline_width_slot(&self) -> &Slot<f64> {
        &self.outline_width
    }

    /// Property of the line color.
    pub fn color(&self) -> Option<PropertyRef<Color>> {
        self.color.get()
    }

    /// Replace the line color property.
    pub fn set_color(&self, property: Option<PropertyRef<Color>>) {
        self.color.assign(property, &self.this, Self::color_slot);
    }

    /// Property of the outline color.
    pub fn outline_color(&self) -> Option<PropertyRef<Color>> {
        self.outline_color.get()
    }

    /// Replace the outline color property.
    pub fn set_outline_color(&self, property: Option<PropertyRef<Color>>) {
        self.outline_color
            .assign(property, &self.this, Self::outline_color_slot);
    }

    /// Property of the outline width.
    pub fn outline_width(&self) -> Option<PropertyRef<f64>> {
        self.outline_width.get()
    }

    /// Replace the outline width property.
    pub fn set_outline_width(&self, property: Option<PropertyRef<f64>>) {
        self.outline_width
            .assign(property, &self.this, Self::outline_width_slot);
    }

    /// Resolve every slot at `time` into a new record.
    ///
    /// `time` may be omitted only while the material is constant.
    pub fn get_value(&self, time: Option<JulianDate>) -> SceneResult<PolylineOutlineMaterial> {
        let mut result = PolylineOutlineMaterial::default();
        self.get_value_into(time, &mut result)?;
        Ok(result)
    }

    /// Resolve every slot at `time` into `result`, overwriting all of its fields.
    pub fn get_value_into<'a>(
        &self,
        time: Option<JulianDate>,
        result: &'a mut PolylineOutlineMaterial,
    ) -> SceneResult<&'a mut PolylineOutlineMaterial> {
        let time = resolve_time(time, self.is_constant())?;
        result.color = self.color.resolve(time);
        result.outline_color = self.outline_color.resolve(time);
        result.outline_width = self.outline_width.resolve(time);
        Ok(result)
    }
}

impl MaterialProperty for PolylineOutlineMaterialProperty {
    fn material_type(&self) -> &'static str {
        "PolylineOutline"
    }

    fn is_constant(&self) -> bool {
        self.color.is_constant()
            && self.outline_color.is_constant()
            && self.outline_width.is_constant()
    }

    fn definition_changed(&self) -> &Event<MaterialChange> {
        &self.definition_changed
    }

    fn equals(&self, other: &dyn MaterialProperty) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };
        std::ptr::eq(self, other)
            || (self.color.equals(&other.color)
                && self.outline_color.equals(&other.outline_color)
                && self.outline_width.equals(&other.outline_width))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq for PolylineOutlineMaterialProperty {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl std::fmt::Debug for PolylineOutlineMaterialProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolylineOutlineMaterialProperty")
            .field("color", &self.color())
            .field("outline_color", &self.outline_color())
            .field("outline_width", &self.outline_width())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/material/polyline_outline.rs"]
mod tests;
