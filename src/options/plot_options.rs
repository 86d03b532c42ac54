//! Options shared by series, both as per-type defaults under
//! `plotOptions` and embedded in each series definition.

use crate::color::ColorValue;
use crate::options::common::{Cursor, DashStyle, DataLabelOptions, Length, Marker, Stacking, Tooltip};
use crate::validators;
use crate::wire::option_object;
use serde_json::Value;

option_object! {
    /// Options every series type understands.
    pub struct SeriesOptions {
        allow_point_select: bool => "allowPointSelect",
        animation: Value => "animation",
        class_name: String => "className",
        clip: bool => "clip",
        color: ColorValue => "color",
        color_index: i64 => "colorIndex" where validators::non_negative_integer,
        connect_nulls: bool => "connectNulls",
        cursor: Cursor => "cursor",
        dash_style: DashStyle => "dashStyle",
        data_labels: DataLabelOptions => "dataLabels",
        description: String => "description",
        enable_mouse_tracking: bool => "enableMouseTracking",
        fill_color: ColorValue => "fillColor",
        fill_opacity: f64 => "fillOpacity" where validators::unit_interval,
        line_width: f64 => "lineWidth" where validators::non_negative,
        marker: Marker => "marker",
        negative_color: ColorValue => "negativeColor",
        opacity: f64 => "opacity" where validators::unit_interval,
        point_interval: f64 => "pointInterval" where validators::non_negative,
        point_start: f64 => "pointStart",
        selected: bool => "selected",
        shadow: Value => "shadow",
        show_checkbox: bool => "showCheckbox",
        show_in_legend: bool => "showInLegend",
        stacking: Stacking => "stacking",
        threshold: f64 => "threshold",
        tooltip: Tooltip => "tooltip",
        turbo_threshold: i64 => "turboThreshold" where validators::non_negative_integer,
        visible: bool => "visible",
        z_index: i64 => "zIndex",
    }
}

option_object! {
    /// Bar and column geometry.
    pub struct ColumnOptions {
        border_color: ColorValue => "borderColor",
        border_radius: f64 => "borderRadius" where validators::non_negative,
        border_width: f64 => "borderWidth" where validators::non_negative,
        color_by_point: bool => "colorByPoint",
        colors: Vec<ColorValue> => "colors",
        group_padding: f64 => "groupPadding" where validators::non_negative,
        grouping: bool => "grouping",
        max_point_width: f64 => "maxPointWidth" where validators::non_negative,
        min_point_length: f64 => "minPointLength" where validators::non_negative,
        point_padding: f64 => "pointPadding" where validators::non_negative,
        point_width: f64 => "pointWidth" where validators::non_negative,
    }
}

option_object! {
    pub struct PieOptions {
        border_color: ColorValue => "borderColor",
        border_width: f64 => "borderWidth" where validators::non_negative,
        center: Vec<Length> => "center",
        color_by_point: bool => "colorByPoint",
        colors: Vec<ColorValue> => "colors",
        end_angle: f64 => "endAngle",
        ignore_hidden_point: bool => "ignoreHiddenPoint",
        inner_size: Length => "innerSize",
        min_size: Length => "minSize",
        size: Length => "size",
        sliced_offset: f64 => "slicedOffset" where validators::non_negative,
        start_angle: f64 => "startAngle",
    }
}

option_object! {
    pub struct ColumnPlotOptions: series(SeriesOptions), column(ColumnOptions) {}
}

option_object! {
    pub struct PiePlotOptions: series(SeriesOptions), pie(PieOptions) {}
}

option_object! {
    /// Per-type defaults; `series` applies to every type.
    pub struct PlotOptions {
        series: SeriesOptions => "series",
        line: SeriesOptions => "line",
        spline: SeriesOptions => "spline",
        area: SeriesOptions => "area",
        areaspline: SeriesOptions => "areaspline",
        arearange: SeriesOptions => "arearange",
        scatter: SeriesOptions => "scatter",
        column: ColumnPlotOptions => "column",
        bar: ColumnPlotOptions => "bar",
        columnrange: ColumnPlotOptions => "columnrange",
        boxplot: SeriesOptions => "boxplot",
        bubble: SeriesOptions => "bubble",
        heatmap: SeriesOptions => "heatmap",
        vector: SeriesOptions => "vector",
        pie: PiePlotOptions => "pie",
    }
}
