//! Annotations: free labels and shapes anchored to points or coordinates.
//!
//! Shapes are a discriminated union on their `"type"` key, dispatched the
//! same way as series.

use crate::color::ColorValue;
use crate::error::{OptionsError, Result};
use crate::options::common::{AxisRef, DashStyle, HorizontalAlign, LabelShape, Overflow, VerticalAlign};
use crate::validators;
use crate::wire::{
    discriminator, option_object, wire_enum, with_discriminator, without_discriminator, OptionObject, WireMap,
    WireValue,
};
use serde_json::Value;

option_object! {
    /// A position in axis values.
    pub struct AnnotationPoint {
        x: f64 => "x",
        y: f64 => "y",
        x_axis: AxisRef => "xAxis",
        y_axis: AxisRef => "yAxis",
    }
}

/// Where an annotation element is anchored: the id of an existing point, or
/// explicit coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorPoint {
    Id(String),
    Point(AnnotationPoint),
}

impl WireValue for AnchorPoint {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::String(s) if s.is_empty() => Ok(None),
            Value::String(s) => Ok(Some(AnchorPoint::Id(s.clone()))),
            Value::Object(map) => AnnotationPoint::from_dict(map).map(|p| Some(AnchorPoint::Point(p))),
            other => Err(OptionsError::invalid(field, other, "a point id or a point object")),
        }
    }

    fn to_wire(&self) -> Value {
        match self {
            AnchorPoint::Id(id) => Value::from(id.as_str()),
            AnchorPoint::Point(point) => Value::Object(point.to_untrimmed_dict()),
        }
    }
}

option_object! {
    pub struct ShapeStyle {
        dash_style: DashStyle => "dashStyle",
        fill: ColorValue => "fill",
        snap: f64 => "snap" where validators::non_negative,
        stroke: ColorValue => "stroke",
        stroke_width: f64 => "strokeWidth" where validators::non_negative,
    }
}

option_object! {
    pub struct RectShape: style(ShapeStyle) {
        point: AnchorPoint => "point",
        width: f64 => "width" where validators::non_negative,
        height: f64 => "height" where validators::non_negative,
        r: f64 => "r" where validators::non_negative,
    }
}

option_object! {
    pub struct CircleShape: style(ShapeStyle) {
        point: AnchorPoint => "point",
        r: f64 => "r" where validators::non_negative,
    }
}

option_object! {
    /// Ellipse through two points, with `ry` as the semi-minor radius.
    pub struct EllipseShape: style(ShapeStyle) {
        points: Vec<AnchorPoint> => "points",
        ry: f64 => "ry" where validators::non_negative,
    }
}

option_object! {
    pub struct PathShape: style(ShapeStyle) {
        points: Vec<AnchorPoint> => "points",
        marker_end: String => "markerEnd",
        marker_start: String => "markerStart",
    }
}

wire_enum! {
    pub enum ShapeType {
        Rect => "rect",
        Circle => "circle",
        Ellipse => "ellipse",
        Path => "path",
    }
}

/// One element of an annotation's `shapes` list.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationShape {
    Rect(RectShape),
    Circle(CircleShape),
    Ellipse(EllipseShape),
    Path(PathShape),
}

impl AnnotationShape {
    const KIND: &'static str = "annotation shape";

    pub fn shape_type(&self) -> ShapeType {
        match self {
            AnnotationShape::Rect(_) => ShapeType::Rect,
            AnnotationShape::Circle(_) => ShapeType::Circle,
            AnnotationShape::Ellipse(_) => ShapeType::Ellipse,
            AnnotationShape::Path(_) => ShapeType::Path,
        }
    }

    pub fn from_dict(map: &WireMap) -> Result<Self> {
        let literal = discriminator(Self::KIND, map, ShapeType::LITERALS)?;
        let body = without_discriminator(map);
        let shape = match ShapeType::parse("type", literal)? {
            ShapeType::Rect => AnnotationShape::Rect(RectShape::from_dict(&body)?),
            ShapeType::Circle => AnnotationShape::Circle(CircleShape::from_dict(&body)?),
            ShapeType::Ellipse => AnnotationShape::Ellipse(EllipseShape::from_dict(&body)?),
            ShapeType::Path => AnnotationShape::Path(PathShape::from_dict(&body)?),
        };
        Ok(shape)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => AnnotationShape::from_dict(&map),
            other => Err(OptionsError::invalid(Self::KIND, &other, "a JSON object")),
        }
    }

    fn body(&self) -> WireMap {
        match self {
            AnnotationShape::Rect(shape) => shape.to_untrimmed_dict(),
            AnnotationShape::Circle(shape) => shape.to_untrimmed_dict(),
            AnnotationShape::Ellipse(shape) => shape.to_untrimmed_dict(),
            AnnotationShape::Path(shape) => shape.to_untrimmed_dict(),
        }
    }

    pub fn to_untrimmed_dict(&self) -> WireMap {
        with_discriminator(self.shape_type().as_str(), self.body())
    }

    pub fn to_dict(&self) -> WireMap {
        crate::wire::trim_dict(self.to_untrimmed_dict())
    }
}

impl WireValue for AnnotationShape {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Object(map) => AnnotationShape::from_dict(map).map(Some),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => AnnotationShape::from_json(s).map(Some),
            other => Err(OptionsError::invalid(field, other, "a shape object with a \"type\"")),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Object(self.to_untrimmed_dict())
    }
}

option_object! {
    pub struct AnnotationLabel {
        align: HorizontalAlign => "align",
        allow_overlap: bool => "allowOverlap",
        background_color: ColorValue => "backgroundColor",
        border_color: ColorValue => "borderColor",
        border_radius: f64 => "borderRadius" where validators::non_negative,
        border_width: f64 => "borderWidth" where validators::non_negative,
        class_name: String => "className",
        distance: f64 => "distance",
        format: String => "format",
        overflow: Overflow => "overflow",
        padding: f64 => "padding" where validators::non_negative,
        point: AnchorPoint => "point",
        shape: LabelShape => "shape",
        style: WireMap => "style",
        text: String => "text",
        use_html: bool => "useHTML",
        vertical_align: VerticalAlign => "verticalAlign",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    pub struct Annotation {
        id: String => "id",
        label_options: AnnotationLabel => "labelOptions",
        labels: Vec<AnnotationLabel> => "labels",
        shape_options: ShapeStyle => "shapeOptions",
        shapes: Vec<AnnotationShape> => "shapes",
        visible: bool => "visible",
        z_index: i64 => "zIndex",
    }
}
