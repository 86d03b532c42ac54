//! Series definitions and dispatch on the `"type"` discriminator.
//!
//! Each concrete series embeds the shared [`SeriesOptions`] and
//! [`SeriesIdentity`] bases (plus any type-specific bases) and owns a
//! [`DataPoints`] list of its point type.

use crate::color::ColorValue;
use crate::data::{
    BoxPlotData, Cartesian3DData, CartesianData, CartesianValueData, DataPoints, RangeData, SinglePointData,
    VectorData,
};
use crate::error::{OptionsError, Result};
use crate::options::common::{AxisRef, DashStyle, Length};
use crate::options::plot_options::{ColumnOptions, PieOptions, SeriesOptions};
use crate::validators;
use crate::wire::{
    discriminator, option_object, trim_dict, trim_value, wire_enum, with_discriminator, without_discriminator,
    OptionObject, WireMap, WireValue,
};
use serde_json::Value;

wire_enum! {
    /// Registered series types.
    pub enum SeriesType {
        Line => "line",
        Spline => "spline",
        Area => "area",
        AreaSpline => "areaspline",
        Scatter => "scatter",
        Column => "column",
        Bar => "bar",
        AreaRange => "arearange",
        ColumnRange => "columnrange",
        BoxPlot => "boxplot",
        Bubble => "bubble",
        Heatmap => "heatmap",
        Vector => "vector",
        Pie => "pie",
    }
}

option_object! {
    /// How a series is identified and attached to axes and stacks.
    pub struct SeriesIdentity {
        id: String => "id",
        index: i64 => "index" where validators::non_negative_integer,
        legend_index: i64 => "legendIndex",
        name: String => "name",
        stack: String => "stack",
        x_axis: AxisRef => "xAxis",
        y_axis: AxisRef => "yAxis",
    }
}

option_object! {
    /// Line, spline, area, areaspline and scatter series.
    pub struct CartesianSeries: options(SeriesOptions), identity(SeriesIdentity) {
        data: DataPoints<CartesianData> => "data",
    }
}

option_object! {
    /// Column and bar series.
    pub struct BarSeries: options(SeriesOptions), column(ColumnOptions), identity(SeriesIdentity) {
        data: DataPoints<CartesianData> => "data",
    }
}

option_object! {
    pub struct AreaRangeSeries: options(SeriesOptions), identity(SeriesIdentity) {
        data: DataPoints<RangeData> => "data",
    }
}

option_object! {
    pub struct ColumnRangeSeries: options(SeriesOptions), column(ColumnOptions), identity(SeriesIdentity) {
        data: DataPoints<RangeData> => "data",
    }
}

option_object! {
    pub struct BoxPlotSeries: options(SeriesOptions), identity(SeriesIdentity) {
        data: DataPoints<BoxPlotData> => "data",
        median_color: ColorValue => "medianColor",
        median_width: f64 => "medianWidth" where validators::non_negative,
        stem_dash_style: DashStyle => "stemDashStyle",
        whisker_color: ColorValue => "whiskerColor",
        whisker_length: Length => "whiskerLength",
        whisker_width: f64 => "whiskerWidth" where validators::non_negative,
    }
}

wire_enum! {
    pub enum BubbleSizeBy {
        Area => "area",
        Width => "width",
    }
}

option_object! {
    pub struct BubbleSeries: options(SeriesOptions), identity(SeriesIdentity) {
        data: DataPoints<Cartesian3DData> => "data",
        display_negative: bool => "displayNegative",
        max_size: Length => "maxSize",
        min_size: Length => "minSize",
        size_by: BubbleSizeBy => "sizeBy",
        z_max: f64 => "zMax",
        z_min: f64 => "zMin",
    }
}

option_object! {
    pub struct HeatmapSeries: options(SeriesOptions), identity(SeriesIdentity) {
        data: DataPoints<CartesianValueData> => "data",
        colsize: f64 => "colsize" where validators::non_negative,
        null_color: ColorValue => "nullColor",
        rowsize: f64 => "rowsize" where validators::non_negative,
    }
}

wire_enum! {
    pub enum RotationOrigin {
        Start => "start",
        Center => "center",
        End => "end",
    }
}

option_object! {
    pub struct VectorSeries: options(SeriesOptions), identity(SeriesIdentity) {
        data: DataPoints<VectorData> => "data",
        rotation_origin: RotationOrigin => "rotationOrigin",
        vector_length: f64 => "vectorLength" where validators::non_negative,
    }
}

option_object! {
    pub struct PieSeries: options(SeriesOptions), pie(PieOptions), identity(SeriesIdentity) {
        data: DataPoints<SinglePointData> => "data",
    }
}

/// A series of any registered type.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line(CartesianSeries),
    Spline(CartesianSeries),
    Area(CartesianSeries),
    AreaSpline(CartesianSeries),
    Scatter(CartesianSeries),
    Column(BarSeries),
    Bar(BarSeries),
    AreaRange(AreaRangeSeries),
    ColumnRange(ColumnRangeSeries),
    BoxPlot(BoxPlotSeries),
    Bubble(BubbleSeries),
    Heatmap(HeatmapSeries),
    Vector(VectorSeries),
    Pie(PieSeries),
}

// Applies the same expression to whichever concrete series is held.
macro_rules! each_series {
    ($series:expr, $inner:ident => $body:expr) => {
        match $series {
            Series::Line($inner)
            | Series::Spline($inner)
            | Series::Area($inner)
            | Series::AreaSpline($inner)
            | Series::Scatter($inner) => $body,
            Series::Column($inner) | Series::Bar($inner) => $body,
            Series::AreaRange($inner) => $body,
            Series::ColumnRange($inner) => $body,
            Series::BoxPlot($inner) => $body,
            Series::Bubble($inner) => $body,
            Series::Heatmap($inner) => $body,
            Series::Vector($inner) => $body,
            Series::Pie($inner) => $body,
        }
    };
}

impl Series {
    const KIND: &'static str = "series";

    pub fn series_type(&self) -> SeriesType {
        match self {
            Series::Line(_) => SeriesType::Line,
            Series::Spline(_) => SeriesType::Spline,
            Series::Area(_) => SeriesType::Area,
            Series::AreaSpline(_) => SeriesType::AreaSpline,
            Series::Scatter(_) => SeriesType::Scatter,
            Series::Column(_) => SeriesType::Column,
            Series::Bar(_) => SeriesType::Bar,
            Series::AreaRange(_) => SeriesType::AreaRange,
            Series::ColumnRange(_) => SeriesType::ColumnRange,
            Series::BoxPlot(_) => SeriesType::BoxPlot,
            Series::Bubble(_) => SeriesType::Bubble,
            Series::Heatmap(_) => SeriesType::Heatmap,
            Series::Vector(_) => SeriesType::Vector,
            Series::Pie(_) => SeriesType::Pie,
        }
    }

    /// Build the concrete series registered for `"type"`.
    pub fn from_dict(map: &WireMap) -> Result<Self> {
        let literal = discriminator(Self::KIND, map, SeriesType::LITERALS)?;
        let series_type = SeriesType::parse("type", literal)?;
        log::debug!("dispatching series of type \"{}\"", series_type);

        let body = without_discriminator(map);
        let series = match series_type {
            SeriesType::Line => Series::Line(CartesianSeries::from_dict(&body)?),
            SeriesType::Spline => Series::Spline(CartesianSeries::from_dict(&body)?),
            SeriesType::Area => Series::Area(CartesianSeries::from_dict(&body)?),
            SeriesType::AreaSpline => Series::AreaSpline(CartesianSeries::from_dict(&body)?),
            SeriesType::Scatter => Series::Scatter(CartesianSeries::from_dict(&body)?),
            SeriesType::Column => Series::Column(BarSeries::from_dict(&body)?),
            SeriesType::Bar => Series::Bar(BarSeries::from_dict(&body)?),
            SeriesType::AreaRange => Series::AreaRange(AreaRangeSeries::from_dict(&body)?),
            SeriesType::ColumnRange => Series::ColumnRange(ColumnRangeSeries::from_dict(&body)?),
            SeriesType::BoxPlot => Series::BoxPlot(BoxPlotSeries::from_dict(&body)?),
            SeriesType::Bubble => Series::Bubble(BubbleSeries::from_dict(&body)?),
            SeriesType::Heatmap => Series::Heatmap(HeatmapSeries::from_dict(&body)?),
            SeriesType::Vector => Series::Vector(VectorSeries::from_dict(&body)?),
            SeriesType::Pie => Series::Pie(PieSeries::from_dict(&body)?),
        };
        Ok(series)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Series::from_dict(&map),
            other => Err(OptionsError::invalid(Self::KIND, &other, "a JSON object")),
        }
    }

    pub fn name(&self) -> Option<&str> {
        each_series!(self, inner => inner.identity.name.as_deref())
    }

    pub fn options(&self) -> &SeriesOptions {
        each_series!(self, inner => &inner.options)
    }

    /// Number of points in the series' data list.
    pub fn point_count(&self) -> usize {
        each_series!(self, inner => inner.data.as_ref().map_or(0, |data| data.len()))
    }

    pub fn to_untrimmed_dict(&self) -> WireMap {
        let body = each_series!(self, inner => inner.to_untrimmed_dict());
        with_discriminator(self.series_type().as_str(), body)
    }

    pub fn to_dict(&self) -> WireMap {
        trim_dict(self.to_untrimmed_dict())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }
}

impl WireValue for Series {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Object(map) => Series::from_dict(map).map(Some),
            Value::String(s) if s.trim().is_empty() => Ok(None),
            Value::String(s) => Series::from_json(s).map(Some),
            other => Err(OptionsError::invalid(field, other, "a series object with a \"type\"")),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Object(self.to_untrimmed_dict())
    }
}

impl serde::Serialize for Series {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&trim_value(self.to_wire()).unwrap_or(Value::Null), serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let map = <WireMap as serde::Deserialize>::deserialize(deserializer)?;
        Series::from_dict(&map).map_err(serde::de::Error::custom)
    }
}
