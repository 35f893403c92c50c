use std::any::Any;
use std::rc::{Rc, Weak};

use crate::foundation::core::{Color, JulianDate};
use crate::foundation::error::SceneResult;
use crate::foundation::event::Event;
use crate::material::base::{MaterialChange, MaterialProperty, Slot, resolve_time};
use crate::property::base::PropertyRef;
use crate::property::constant::ConstantProperty;

/// Resolved solid color material at one time instant.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ColorMaterial {
    /// Fill color; `None` when unset.
    pub color: Option<Color>,
}

/// Material filling a surface with a single, possibly time-varying, color.
pub struct ColorMaterialProperty {
    this: Weak<Self>,
    color: Slot<Color>,
    definition_changed: Event<MaterialChange>,
}

impl ColorMaterialProperty {
    /// Create a material with a constant white color.
    pub fn new() -> Rc<Self> {
        Self::with_color(Some(ConstantProperty::shared(Color::WHITE)))
    }

    /// Create a material with an explicit color slot.
    pub fn with_color(color: Option<PropertyRef<Color>>) -> Rc<Self> {
        Rc::new_cyclic(|this: &Weak<Self>| Self {
            this: this.clone(),
            color: Slot::bound("color", color, this, Self::color_slot),
            definition_changed: Event::new(),
        })
    }

    fn color_slot(&self) -> &Slot<Color> {
        &self.color
    }

    /// Property of the fill color.
    pub fn color(&self) -> Option<PropertyRef<Color>> {
        self.color.get()
    }

    /// Replace the fill color property.
    pub fn set_color(&self, property: Option<PropertyRef<Color>>) {
        self.color.assign(property, &self.this, Self::color_slot);
    }

    /// Resolve the material at `time` into a new record.
    pub fn get_value(&self, time: Option<JulianDate>) -> SceneResult<ColorMaterial> {
        let mut result = ColorMaterial::default();
        self.get_value_into(time, &mut result)?;
        Ok(result)
    }

    /// Resolve the material at `time` into `result`.
    pub fn get_value_into<'a>(
        &self,
        time: Option<JulianDate>,
        result: &'a mut ColorMaterial,
    ) -> SceneResult<&'a mut ColorMaterial> {
        let time = resolve_time(time, self.is_constant())?;
        result.color = self.color.resolve(time);
        Ok(result)
    }
}

impl MaterialProperty for ColorMaterialProperty {
    fn material_type(&self) -> &'static str {
        "Color"
    }

    fn is_constant(&self) -> bool {
        self.color.is_constant()
    }

    fn definition_changed(&self) -> &Event<MaterialChange> {
        &self.definition_changed
    }

    fn equals(&self, other: &dyn MaterialProperty) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .is_some_and(|other| std::ptr::eq(self, other) || self.color.equals(&other.color))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PartialEq for ColorMaterialProperty {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl std::fmt::Debug for ColorMaterialProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMaterialProperty")
            .field("color", &self.color())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/material/color.rs"]
mod tests;
