//! Color-like values.
//!
//! Any field documented as accepting "a color, gradient or pattern" is typed
//! [`ColorValue`] and resolved by [`ColorValue::resolve`], in this order:
//!
//! 1. falsy input (`null`, `false`, `0`, `""`, `{}`, `[]`) is absent
//! 2. typed values are used as-is (`From<Gradient>`, `From<Pattern>`)
//! 3. an object or string carrying a gradient discriminator
//!    (`linearGradient`, `radialGradient`, `linear_gradient`,
//!    `radial_gradient`) becomes a [`Gradient`]
//! 4. otherwise one carrying a pattern discriminator (`patternOptions`,
//!    `pattern_options`) becomes a [`Pattern`]
//! 5. any other string must be a CSS color
//! 6. everything else is rejected

use crate::error::{OptionsError, Result};
use crate::validators;
use crate::wire::{option_object, to_camel_case, trim_value, OptionObject, WireMap, WireValue};
use serde_json::Value;

const GRADIENT_KEYS: [&str; 4] = [
    "linearGradient",
    "radialGradient",
    "linear_gradient",
    "radial_gradient",
];

const PATTERN_KEYS: [&str; 2] = ["patternOptions", "pattern_options"];

const EXPECTED: &str = "a CSS color string, a gradient or a pattern";

/// `where` check for plain CSS color string fields.
pub fn css_color(field: &str, value: String) -> Result<String> {
    validators::color_string(field, &value)
}

// === Gradients ===

option_object! {
    /// Start and end vectors, relative to the shape's bounding box.
    pub struct LinearGradient {
        x1: f64 => "x1",
        y1: f64 => "y1",
        x2: f64 => "x2",
        y2: f64 => "y2",
    }
}

option_object! {
    pub struct RadialGradient {
        cx: f64 => "cx",
        cy: f64 => "cy",
        r: f64 => "r" where validators::non_negative,
    }
}

/// One `[offset, color]` pair of a gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

impl GradientStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

impl WireValue for GradientStop {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        let pair = match value.as_array() {
            Some(pair) if pair.len() == 2 => pair,
            _ => return Err(OptionsError::invalid(field, value, "an [offset, color] pair")),
        };

        let offset = validators::number(field, &pair[0])?
            .ok_or_else(|| OptionsError::invalid(field, value, "a numeric stop offset"))?;
        let offset = validators::unit_interval(field, offset)?;

        let color = match &pair[1] {
            Value::String(color) => validators::color_string(field, color)?,
            other => return Err(OptionsError::invalid(field, other, "a CSS color string")),
        };

        Ok(Some(GradientStop { offset, color }))
    }

    fn to_wire(&self) -> Value {
        Value::Array(vec![Value::from(self.offset), Value::from(self.color.as_str())])
    }
}

option_object! {
    /// Gradient fill; one of the two geometries plus its color stops.
    pub struct Gradient {
        linear_gradient: LinearGradient => "linearGradient",
        radial_gradient: RadialGradient => "radialGradient",
        stops: Vec<GradientStop> => "stops",
    }
}

// === Patterns ===

option_object! {
    pub struct PatternOptions {
        /// SVG path data of the tile.
        path: String => "path",
        /// Image URL used instead of a path.
        image: String => "image" where validators::url,
        width: f64 => "width" where validators::non_negative,
        height: f64 => "height" where validators::non_negative,
        color: String => "color" where css_color,
        background_color: String => "backgroundColor" where css_color,
        opacity: f64 => "opacity" where validators::unit_interval,
        pattern_transform: String => "patternTransform",
        id: String => "id",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    /// Pattern fill.
    pub struct Pattern {
        pattern_options: PatternOptions => "patternOptions",
        animation: Value => "animation",
    }
}

// === Resolution ===

#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    Plain(String),
    Gradient(Gradient),
    Pattern(Pattern),
}

impl From<Gradient> for ColorValue {
    fn from(gradient: Gradient) -> Self {
        ColorValue::Gradient(gradient)
    }
}

impl From<Pattern> for ColorValue {
    fn from(pattern: Pattern) -> Self {
        ColorValue::Pattern(pattern)
    }
}

impl ColorValue {
    /// A validated plain CSS color.
    pub fn plain(color: &str) -> Result<Self> {
        validators::color_string("color", color).map(ColorValue::Plain)
    }

    /// Resolve a raw wire value for the color-like field `field`.
    pub fn resolve(field: &str, value: &Value) -> Result<Option<Self>> {
        if is_falsy(value) {
            return Ok(None);
        }

        if has_discriminator(value, &GRADIENT_KEYS) {
            if let Some(gradient) = structured::<Gradient>(field, value)? {
                return Ok(Some(ColorValue::Gradient(gradient)));
            }
        } else if has_discriminator(value, &PATTERN_KEYS) {
            if let Some(pattern) = structured::<Pattern>(field, value)? {
                return Ok(Some(ColorValue::Pattern(pattern)));
            }
        }

        match value {
            Value::String(s) => validators::color_string(field, s).map(|c| Some(ColorValue::Plain(c))),
            other => Err(OptionsError::invalid(field, other, EXPECTED)),
        }
    }

    pub fn as_plain(&self) -> Option<&str> {
        match self {
            ColorValue::Plain(color) => Some(color),
            _ => None,
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn has_discriminator(value: &Value, keys: &[&str]) -> bool {
    match value {
        Value::Object(map) => keys.iter().any(|key| map.contains_key(*key)),
        Value::String(s) => keys.iter().any(|key| s.contains(key)),
        _ => false,
    }
}

/// Structured parse of a dict, or of a string holding a JSON object.
/// `Ok(None)` when a string does not parse, so the caller falls back to
/// treating it as a plain color.
fn structured<T: OptionObject>(field: &str, value: &Value) -> Result<Option<T>> {
    let map = match value {
        Value::Object(map) => camelize_keys(map),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(Value::Object(map)) => camelize_keys(&map),
            _ => {
                log::trace!("{}: \"{}\" is not a structured {}", field, s, T::KIND);
                return Ok(None);
            }
        },
        _ => return Ok(None),
    };
    T::from_dict(&map).map(Some)
}

fn camelize_keys(map: &WireMap) -> WireMap {
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(inner) => Value::Object(camelize_keys(inner)),
                other => other.clone(),
            };
            (to_camel_case(key), value)
        })
        .collect()
}

impl WireValue for ColorValue {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        ColorValue::resolve(field, value)
    }

    fn to_wire(&self) -> Value {
        match self {
            ColorValue::Plain(color) => Value::from(color.as_str()),
            ColorValue::Gradient(gradient) => Value::Object(gradient.to_untrimmed_dict()),
            ColorValue::Pattern(pattern) => Value::Object(pattern.to_untrimmed_dict()),
        }
    }
}

impl serde::Serialize for ColorValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&trim_value(self.to_wire()).unwrap_or(Value::Null), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ColorValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Value as serde::Deserialize>::deserialize(deserializer)?;
        ColorValue::resolve("color", &raw)
            .map_err(serde::de::Error::custom)?
            .ok_or_else(|| serde::de::Error::custom(format!("expected {}, received {}", EXPECTED, raw)))
    }
}
