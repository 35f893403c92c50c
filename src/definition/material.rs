use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::definition::color::ColorDef;
use crate::foundation::core::{Color, JulianDate};
use crate::foundation::error::{SceneError, SceneResult};
use crate::material::base::MaterialProperty;
use crate::material::color::ColorMaterialProperty;
use crate::material::polyline_outline::PolylineOutlineMaterialProperty;
use crate::property::base::{PropertyRef, PropertyValue};
use crate::property::constant::ConstantProperty;
use crate::property::intervals::TimeIntervalCollectionProperty;
use crate::time::interval::TimeInterval;

// ----------------------------
// Boundary (serde) structures
// ----------------------------

/// One interval of a time-varying property definition.
///
/// Dates are written as `{"dayNumber": .., "secondsOfDay": ..}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IntervalDef<T> {
    /// Interval start.
    pub start: JulianDate,
    /// Interval stop.
    pub stop: JulianDate,
    /// Whether `start` is part of the interval (default `true`).
    #[serde(default = "included")]
    pub start_included: bool,
    /// Whether `stop` is part of the interval (default `true`).
    #[serde(default = "included")]
    pub stop_included: bool,
    /// Value held over the interval.
    pub value: T,
}

fn included() -> bool {
    true
}

/// Property definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyDef<T> {
    /// JSON shorthand: a bare value is a constant property.
    Constant(T),
    /// A list of intervals is a time-varying property.
    Intervals(Vec<IntervalDef<T>>),
}

/// Definition of a [`PolylineOutlineMaterialProperty`]. Absent fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PolylineOutlineMaterialDef {
    /// Line color.
    #[serde(default)]
    pub color: Option<PropertyDef<ColorDef>>,
    /// Outline color.
    #[serde(default)]
    pub outline_color: Option<PropertyDef<ColorDef>>,
    /// Outline width, finite and `>= 0`.
    #[serde(default)]
    pub outline_width: Option<PropertyDef<f64>>,
}

/// Definition of a [`ColorMaterialProperty`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorMaterialDef {
    /// Fill color.
    #[serde(default)]
    pub color: Option<PropertyDef<ColorDef>>,
}

/// Material definition, keyed by material kind.
///
/// ```json
/// { "polylineOutline": { "color": "#ff0000", "outlineWidth": 2.0 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialDef {
    /// Polyline with an outline.
    PolylineOutline(PolylineOutlineMaterialDef),
    /// Solid color fill.
    SolidColor(ColorMaterialDef),
}

// ----------------------------
// Building runtime properties
// ----------------------------

impl PolylineOutlineMaterialDef {
    /// Build a runtime material, validating every value.
    #[tracing::instrument(skip_all)]
    pub fn build(&self) -> SceneResult<Rc<PolylineOutlineMaterialProperty>> {
        let material = PolylineOutlineMaterialProperty::new();
        if let Some(def) = &self.color {
            material.set_color(Some(build_property("color", def, color_value)?));
        }
        if let Some(def) = &self.outline_color {
            material.set_outline_color(Some(build_property("outlineColor", def, color_value)?));
        }
        if let Some(def) = &self.outline_width {
            material.set_outline_width(Some(build_property("outlineWidth", def, width_value)?));
        }
        Ok(material)
    }
}

impl ColorMaterialDef {
    /// Build a runtime material, validating every value.
    #[tracing::instrument(skip_all)]
    pub fn build(&self) -> SceneResult<Rc<ColorMaterialProperty>> {
        let material = ColorMaterialProperty::new();
        if let Some(def) = &self.color {
            material.set_color(Some(build_property("color", def, color_value)?));
        }
        Ok(material)
    }
}

impl MaterialDef {
    /// Build the runtime material described by this definition.
    pub fn build(&self) -> SceneResult<Rc<dyn MaterialProperty>> {
        let material: Rc<dyn MaterialProperty> = match self {
            Self::PolylineOutline(def) => def.build()?,
            Self::SolidColor(def) => def.build()?,
        };
        Ok(material)
    }
}

/// Parse a JSON material definition and build it.
pub fn parse_material_json(json: &str) -> SceneResult<Rc<dyn MaterialProperty>> {
    let def: MaterialDef = serde_json::from_str(json)?;
    def.build()
}

fn color_value(name: &str, def: &ColorDef) -> SceneResult<Color> {
    // Checked after narrowing: finite f64 channels can still overflow f32.
    let color = Color::from(*def);
    if !color.is_finite() {
        return Err(SceneError::validation(format!(
            "{name} color channels must be finite"
        )));
    }
    Ok(color)
}

fn width_value(name: &str, width: &f64) -> SceneResult<f64> {
    if !width.is_finite() || *width < 0.0 {
        return Err(SceneError::validation(format!(
            "{name} must be finite and >= 0, got {width}"
        )));
    }
    Ok(*width)
}

fn build_property<T, U>(
    name: &'static str,
    def: &PropertyDef<T>,
    value: fn(&str, &T) -> SceneResult<U>,
) -> SceneResult<PropertyRef<U>>
where
    U: PropertyValue,
{
    match def {
        PropertyDef::Constant(v) => {
            let property: PropertyRef<U> = Rc::new(ConstantProperty::new(value(name, v)?));
            Ok(property)
        }
        PropertyDef::Intervals(intervals) => {
            let property = TimeIntervalCollectionProperty::new();
            for interval in intervals {
                property.add_interval(TimeInterval::new(
                    interval.start,
                    interval.stop,
                    interval.start_included,
                    interval.stop_included,
                    value(name, &interval.value)?,
                ))?;
            }
            tracing::debug!(
                property = name,
                intervals = property.intervals().len(),
                "built time-varying property"
            );
            let property: PropertyRef<U> = Rc::new(property);
            Ok(property)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/definition/material.rs"]
mod tests;
