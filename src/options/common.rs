// Enumerations and option objects shared across the document

use crate::color::ColorValue;
use crate::error::{OptionsError, Result};
use crate::validators;
use crate::wire::{option_object, wire_enum, WireMap, WireValue};
use serde_json::Value;

// =============================================================================
// Enumerations
// =============================================================================

wire_enum! {
    pub enum HorizontalAlign {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

wire_enum! {
    pub enum VerticalAlign {
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
}

wire_enum! {
    pub enum DashStyle {
        Solid => "Solid",
        ShortDash => "ShortDash",
        ShortDot => "ShortDot",
        ShortDashDot => "ShortDashDot",
        ShortDashDotDot => "ShortDashDotDot",
        Dot => "Dot",
        Dash => "Dash",
        LongDash => "LongDash",
        DashDot => "DashDot",
        LongDashDot => "LongDashDot",
        LongDashDotDot => "LongDashDotDot",
    }
}

wire_enum! {
    pub enum Cursor {
        Default => "default",
        Help => "help",
        NoCursor => "none",
        Pointer => "pointer",
    }
}

wire_enum! {
    /// How data labels that overflow the plot area are handled.
    pub enum Overflow {
        Allow => "allow",
        Justify => "justify",
    }
}

wire_enum! {
    pub enum LabelShape {
        Callout => "callout",
        Circle => "circle",
        ConnectorLine => "connector",
        Diamond => "diamond",
        Rect => "rect",
        Square => "square",
        Triangle => "triangle",
    }
}

wire_enum! {
    pub enum Stacking {
        Normal => "normal",
        Percent => "percent",
        Stream => "stream",
        Overlap => "overlap",
    }
}

wire_enum! {
    pub enum MarkerSymbol {
        Circle => "circle",
        Square => "square",
        Diamond => "diamond",
        Triangle => "triangle",
        TriangleDown => "triangle-down",
    }
}

// =============================================================================
// Length
// =============================================================================

/// A size given in pixels (`250`, `"250px"`) or relative to its container
/// (`"40%"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Pixels(f64),
    Percent(f64),
}

impl WireValue for Length {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Number(_) => Ok(validators::number(field, value)?.map(Length::Pixels)),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => match validators::parse_length(s) {
                Some((amount, true)) => Ok(Some(Length::Percent(amount))),
                Some((amount, false)) => Ok(Some(Length::Pixels(amount))),
                None => Err(OptionsError::invalid(
                    field,
                    value,
                    "a pixel length or a percentage such as \"50%\"",
                )),
            },
            other => Err(OptionsError::invalid(field, other, "a length")),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            Length::Pixels(px) => Value::from(*px),
            Length::Percent(pct) => Value::from(format!("{}%", pct)),
        }
    }
}

// =============================================================================
// Axis references
// =============================================================================

/// A series' link to an axis, either by position in the axis list or by id.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisRef {
    Index(i64),
    Id(String),
}

impl WireValue for AxisRef {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Number(_) => validators::integer(field, value)?
                .map(|index| validators::non_negative_integer(field, index).map(AxisRef::Index))
                .transpose(),
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(AxisRef::Id(s.clone()))),
            other => Err(OptionsError::invalid(field, other, "an axis index or id")),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            AxisRef::Index(index) => Value::from(*index),
            AxisRef::Id(id) => Value::from(id.as_str()),
        }
    }
}

// =============================================================================
// Box spacing
// =============================================================================

/// Margin or padding around a box: one value for every side, or a
/// `[top, right, bottom, left]` list. Each form exports as given.
#[derive(Debug, Clone, PartialEq)]
pub enum Spacing {
    Uniform(f64),
    Sides(Vec<f64>),
}

impl WireValue for Spacing {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Array(_) => Ok(Vec::<f64>::from_wire(field, value)?.map(Spacing::Sides)),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::Number(_) | Value::String(_) => {
                Ok(validators::number(field, value)?.map(Spacing::Uniform))
            }
            other => Err(OptionsError::invalid(field, other, "a number or a list of numbers")),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            Spacing::Uniform(amount) => Value::from(*amount),
            Spacing::Sides(sides) => sides.to_wire(),
        }
    }
}

// =============================================================================
// Shared option objects
// =============================================================================

option_object! {
    /// Labels drawn next to each point.
    pub struct DataLabelOptions {
        align: HorizontalAlign => "align",
        allow_overlap: bool => "allowOverlap",
        background_color: ColorValue => "backgroundColor",
        border_color: ColorValue => "borderColor",
        border_radius: f64 => "borderRadius" where validators::non_negative,
        border_width: f64 => "borderWidth" where validators::non_negative,
        color: ColorValue => "color",
        crop: bool => "crop",
        enabled: bool => "enabled",
        format: String => "format",
        inside: bool => "inside",
        overflow: Overflow => "overflow",
        padding: f64 => "padding" where validators::non_negative,
        rotation: f64 => "rotation",
        shape: LabelShape => "shape",
        style: WireMap => "style",
        use_html: bool => "useHTML",
        vertical_align: VerticalAlign => "verticalAlign",
        x: f64 => "x",
        y: f64 => "y",
        z_index: i64 => "zIndex",
    }
}

option_object! {
    pub struct Marker {
        enabled: bool => "enabled",
        enabled_threshold: f64 => "enabledThreshold" where validators::non_negative,
        fill_color: ColorValue => "fillColor",
        height: f64 => "height" where validators::non_negative,
        line_color: ColorValue => "lineColor",
        line_width: f64 => "lineWidth" where validators::non_negative,
        radius: f64 => "radius" where validators::non_negative,
        symbol: MarkerSymbol => "symbol",
        width: f64 => "width" where validators::non_negative,
    }
}

option_object! {
    pub struct Tooltip {
        animation: bool => "animation",
        background_color: ColorValue => "backgroundColor",
        border_color: ColorValue => "borderColor",
        border_radius: f64 => "borderRadius" where validators::non_negative,
        border_width: f64 => "borderWidth" where validators::non_negative,
        enabled: bool => "enabled",
        follow_pointer: bool => "followPointer",
        footer_format: String => "footerFormat",
        header_format: String => "headerFormat",
        hide_delay: i64 => "hideDelay" where validators::non_negative_integer,
        outside: bool => "outside",
        padding: f64 => "padding" where validators::non_negative,
        point_format: String => "pointFormat",
        shadow: bool => "shadow",
        shared: bool => "shared",
        split: bool => "split",
        style: WireMap => "style",
        use_html: bool => "useHTML",
        value_decimals: i64 => "valueDecimals" where validators::non_negative_integer,
        value_prefix: String => "valuePrefix",
        value_suffix: String => "valueSuffix",
        x_date_format: String => "xDateFormat",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::OptionObject;
    use serde_json::json;

    #[test]
    fn test_label_alignment_is_case_insensitive() {
        let labels = DataLabelOptions::from_kwargs([("align", json!("RIGHT"))]).unwrap();
        assert_eq!(labels.align, Some(HorizontalAlign::Right));
        assert_eq!(Value::Object(labels.to_dict()), json!({"align": "right"}));
    }

    #[test]
    fn test_invalid_enum_names_allowed_values() {
        let err = DataLabelOptions::from_dict(json!({"verticalAlign": "center"}).as_object().unwrap())
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("verticalAlign"));
        assert!(msg.contains("\"center\""));
        assert!(msg.contains("middle"));
    }

    #[test]
    fn test_dash_style_canonical_case() {
        assert_eq!(DashStyle::parse("dashStyle", "longdashdot").unwrap(), DashStyle::LongDashDot);
        assert_eq!(DashStyle::LongDashDot.to_string(), "LongDashDot");
        assert_eq!("triangle-down".parse::<MarkerSymbol>().unwrap(), MarkerSymbol::TriangleDown);
    }

    #[test]
    fn test_length_forms() {
        let px: Option<Length> = Length::from_wire("size", &json!(120)).unwrap();
        assert_eq!(px, Some(Length::Pixels(120.0)));
        let px: Option<Length> = Length::from_wire("size", &json!("80px")).unwrap();
        assert_eq!(px, Some(Length::Pixels(80.0)));
        let pct = Length::from_wire("size", &json!("75%")).unwrap().unwrap();
        assert_eq!(pct, Length::Percent(75.0));
        assert_eq!(pct.to_wire(), json!("75%"));
        assert_eq!(Length::from_wire("size", &json!("")).unwrap(), None);
        assert!(Length::from_wire("size", &json!("large")).is_err());
        assert!(Length::from_wire("size", &json!(true)).is_err());
    }

    #[test]
    fn test_axis_ref() {
        assert_eq!(AxisRef::from_wire("yAxis", &json!(1)).unwrap(), Some(AxisRef::Index(1)));
        assert_eq!(
            AxisRef::from_wire("yAxis", &json!("secondary")).unwrap(),
            Some(AxisRef::Id("secondary".to_string()))
        );
        assert!(AxisRef::from_wire("yAxis", &json!(-1)).is_err());
        assert!(AxisRef::from_wire("yAxis", &json!([0])).is_err());
    }

    #[test]
    fn test_spacing_keeps_its_form() {
        let uniform = Spacing::from_wire("margin", &json!(10)).unwrap().unwrap();
        assert_eq!(uniform, Spacing::Uniform(10.0));
        assert_eq!(uniform.to_wire(), json!(10.0));

        let sides = Spacing::from_wire("margin", &json!([10, 20, "30", 40])).unwrap().unwrap();
        assert_eq!(sides, Spacing::Sides(vec![10.0, 20.0, 30.0, 40.0]));
        assert_eq!(sides.to_wire(), json!([10.0, 20.0, 30.0, 40.0]));

        assert_eq!(Spacing::from_wire("margin", &json!("")).unwrap(), None);
        assert!(Spacing::from_wire("margin", &json!({"top": 10})).is_err());
        assert!(Spacing::from_wire("margin", &json!("wide")).is_err());
    }

    #[test]
    fn test_marker_color_and_ranges() {
        let marker = Marker::from_dict(
            json!({"fillColor": "#FFFFFF", "lineWidth": 2, "symbol": "Diamond"}).as_object().unwrap(),
        )
        .unwrap();
        assert_eq!(marker.fill_color, Some(ColorValue::Plain("#FFFFFF".to_string())));
        assert_eq!(marker.symbol, Some(MarkerSymbol::Diamond));

        assert!(Marker::from_dict(json!({"radius": -4}).as_object().unwrap()).is_err());
        assert!(Marker::from_dict(json!({"fillColor": 12}).as_object().unwrap()).is_err());
    }

    #[test]
    fn test_marker_and_data_labels_round_trip() {
        let marker = Marker {
            enabled: Some(true),
            enabled_threshold: Some(2.0),
            fill_color: Some(ColorValue::plain("#7cb5ec").unwrap()),
            height: Some(12.0),
            line_color: Some(ColorValue::plain("white").unwrap()),
            line_width: Some(1.0),
            radius: Some(4.0),
            symbol: Some(MarkerSymbol::TriangleDown),
            width: Some(12.0),
        };
        assert_eq!(Marker::from_dict(&marker.to_dict()).unwrap(), marker);

        let labels = DataLabelOptions {
            align: Some(HorizontalAlign::Center),
            allow_overlap: Some(false),
            background_color: Some(ColorValue::plain("rgba(252, 255, 197, 0.7)").unwrap()),
            border_color: None,
            border_radius: Some(5.0),
            border_width: Some(1.0),
            color: Some(ColorValue::plain("#000000").unwrap()),
            crop: Some(false),
            enabled: Some(true),
            format: Some("{point.y:.1f}".to_string()),
            inside: Some(true),
            overflow: Some(Overflow::Allow),
            padding: Some(3.0),
            rotation: Some(-90.0),
            shape: Some(LabelShape::ConnectorLine),
            style: json!({"fontSize": "13px"}).as_object().cloned(),
            use_html: Some(true),
            vertical_align: Some(VerticalAlign::Top),
            x: Some(4.0),
            y: Some(10.0),
            z_index: Some(6),
        };
        assert_eq!(DataLabelOptions::from_dict(&labels.to_dict()).unwrap(), labels);
    }

    #[test]
    fn test_tooltip_round_trip() {
        let tooltip = Tooltip {
            shared: Some(true),
            value_suffix: Some(" °C".to_string()),
            value_decimals: Some(1),
            border_width: Some(0.0),
            style: Some(json!({"fontSize": "12px"}).as_object().unwrap().clone()),
            ..Default::default()
        };
        let dict = tooltip.to_dict();
        assert_eq!(dict.get("borderWidth"), Some(&json!(0.0)));
        assert_eq!(dict.get("valueSuffix"), Some(&json!(" °C")));
        assert_eq!(Tooltip::from_dict(&dict).unwrap(), tooltip);
    }
}
