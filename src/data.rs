//! Data points and their array/object coercion.
//!
//! Every point type accepts three wire shapes: a keyed object, a positional
//! array whose layout is chosen by its length, and (for types with a scalar
//! field) a bare number. `null` inside a data list is the all-default point.

use crate::color::ColorValue;
use crate::error::{OptionsError, Result};
use crate::options::common::{DashStyle, DataLabelOptions, Marker};
use crate::validators;
use crate::wire::{option_object, OptionObject, WireMap, WireValue};
use serde_json::Value;

/// Array/object coercion contract of a data point type.
pub trait DataPoint: OptionObject + PartialEq {
    /// Slot keys per supported array length, shortest first.
    const LAYOUTS: &'static [&'static [&'static str]];

    /// Field that receives a bare number, if the type accepts one.
    const SCALAR_FIELD: Option<&'static str> = None;

    /// Whether a string in the `x` slot is taken as the point's name.
    const NAME_FROM_X: bool = true;

    fn supported_lengths() -> Vec<usize> {
        Self::LAYOUTS.iter().map(|layout| layout.len()).collect()
    }

    /// Build a point from its positional form.
    fn from_array(items: &[Value]) -> Result<Self> {
        let layout = Self::LAYOUTS
            .iter()
            .find(|layout| layout.len() == items.len())
            .ok_or_else(|| OptionsError::UnsupportedDimensions {
                kind: Self::KIND,
                len: items.len(),
                supported: Self::supported_lengths(),
            })?;

        let mut map = WireMap::new();
        for (slot, item) in layout.iter().zip(items) {
            if Self::NAME_FROM_X && *slot == "x" && item.is_string() {
                log::trace!("{}: x slot {} taken as name", Self::KIND, item);
                map.insert("name".to_string(), item.clone());
            } else {
                map.insert(slot.to_string(), item.clone());
            }
        }
        Self::from_dict(&map)
    }

    /// Export in the most compact form that loses nothing: `null` for a
    /// default point, then the shortest covering positional layout, then the
    /// keyed object.
    fn to_array(&self) -> Value {
        if *self == Self::default() {
            return Value::Null;
        }

        let dict = self.to_dict();
        for layout in Self::LAYOUTS {
            let name_rides_x = Self::NAME_FROM_X
                && layout.contains(&"x")
                && !dict.contains_key("x")
                && dict.get("name").is_some_and(Value::is_string);

            let covered = dict
                .keys()
                .all(|key| layout.contains(&key.as_str()) || (name_rides_x && key == "name"));
            if !covered {
                continue;
            }

            if layout.len() == 1 && Self::SCALAR_FIELD == Some(layout[0]) {
                return dict.get(layout[0]).cloned().unwrap_or(Value::Null);
            }

            let slots = layout
                .iter()
                .map(|slot| match dict.get(*slot) {
                    Some(value) => value.clone(),
                    None if *slot == "x" && name_rides_x => dict.get("name").cloned().unwrap_or(Value::Null),
                    None => Value::Null,
                })
                .collect();
            return Value::Array(slots);
        }

        Value::Object(dict)
    }
}

/// Coerce one wire entry of a data list.
pub fn coerce_point<P: DataPoint>(field: &str, value: &Value) -> Result<P> {
    match value {
        Value::Null => Ok(P::default()),
        Value::Object(map) => P::from_dict(map),
        Value::Array(items) => P::from_array(items),
        Value::Number(_) | Value::String(_) => match P::SCALAR_FIELD {
            Some(scalar) => {
                let mut map = WireMap::new();
                map.insert(scalar.to_string(), value.clone());
                P::from_dict(&map)
            }
            None => Err(OptionsError::invalid(
                field,
                value,
                format!("an array of length {:?} or an object", P::supported_lengths()),
            )),
        },
        Value::Bool(_) => Err(OptionsError::invalid(field, value, "a number, array or object")),
    }
}

/// The `data` list of a series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataPoints<P>(pub Vec<P>);

impl<P> DataPoints<P> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.0.iter()
    }
}

impl<P> From<Vec<P>> for DataPoints<P> {
    fn from(points: Vec<P>) -> Self {
        DataPoints(points)
    }
}

impl<P: DataPoint> WireValue for DataPoints<P> {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        let items = match value {
            Value::Array(items) => items,
            Value::String(s) if s.is_empty() => return Ok(None),
            other => return Err(OptionsError::invalid(field, other, "an array of data points")),
        };

        items
            .iter()
            .map(|item| coerce_point::<P>(field, item))
            .collect::<Result<Vec<P>>>()
            .map(|points| Some(DataPoints(points)))
    }

    fn to_wire(&self) -> Value {
        Value::Array(self.0.iter().map(DataPoint::to_array).collect())
    }
}

// =============================================================================
// Point types
// =============================================================================

option_object! {
    /// Fields common to every point type.
    pub struct DataBase {
        id: String => "id",
        name: String => "name",
        class_name: String => "className",
        color: ColorValue => "color",
        color_index: i64 => "colorIndex" where validators::non_negative_integer,
        custom: WireMap => "custom",
        data_labels: DataLabelOptions => "dataLabels",
        description: String => "description",
        drilldown: String => "drilldown",
        selected: bool => "selected",
    }
}

option_object! {
    pub struct CartesianData: base(DataBase) {
        x: f64 => "x",
        y: f64 => "y",
        marker: Marker => "marker",
    }
}

impl DataPoint for CartesianData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[&["y"], &["x", "y"]];
    const SCALAR_FIELD: Option<&'static str> = Some("y");
}

option_object! {
    /// Point with a third dimension (bubble size).
    pub struct Cartesian3DData: base(DataBase) {
        x: f64 => "x",
        y: f64 => "y",
        z: f64 => "z",
        marker: Marker => "marker",
    }
}

impl DataPoint for Cartesian3DData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[&["y", "z"], &["x", "y", "z"]];
}

option_object! {
    /// Point carrying a value at an `(x, y)` cell, as in heatmaps.
    pub struct CartesianValueData: base(DataBase) {
        x: f64 => "x",
        y: f64 => "y",
        value: f64 => "value",
        point_padding: f64 => "pointPadding" where validators::non_negative,
    }
}

impl DataPoint for CartesianValueData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[&["y", "value"], &["x", "y", "value"]];
}

option_object! {
    pub struct RangeData: base(DataBase) {
        x: f64 => "x",
        low: f64 => "low",
        high: f64 => "high",
    }
}

impl DataPoint for RangeData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[&["low", "high"], &["x", "low", "high"]];
}

option_object! {
    pub struct BoxPlotData: base(DataBase) {
        x: f64 => "x",
        low: f64 => "low",
        q1: f64 => "q1",
        median: f64 => "median",
        q3: f64 => "q3",
        high: f64 => "high",
        box_dash_style: DashStyle => "boxDashStyle",
        median_color: ColorValue => "medianColor",
        whisker_color: ColorValue => "whiskerColor",
    }
}

impl DataPoint for BoxPlotData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[
        &["low", "q1", "median", "q3", "high"],
        &["x", "low", "q1", "median", "q3", "high"],
    ];
}

option_object! {
    pub struct VectorData: base(DataBase) {
        x: f64 => "x",
        y: f64 => "y",
        length: f64 => "length" where validators::non_negative,
        direction: f64 => "direction",
    }
}

impl DataPoint for VectorData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[&["x", "y", "length", "direction"]];
    const NAME_FROM_X: bool = false;
}

option_object! {
    /// Point of a series without an x dimension, such as a pie slice.
    pub struct SinglePointData: base(DataBase) {
        y: f64 => "y",
        sliced: bool => "sliced",
    }
}

impl DataPoint for SinglePointData {
    const LAYOUTS: &'static [&'static [&'static str]] = &[&["y"], &["name", "y"]];
    const SCALAR_FIELD: Option<&'static str> = Some("y");
    const NAME_FROM_X: bool = false;
}
