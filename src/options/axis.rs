use crate::color::ColorValue;
use crate::options::common::{DashStyle, HorizontalAlign, VerticalAlign};
use crate::validators;
use crate::wire::{option_object, wire_enum, WireMap};
use serde_json::Value;

wire_enum! {
    pub enum AxisType {
        Linear => "linear",
        Logarithmic => "logarithmic",
        Datetime => "datetime",
        Category => "category",
    }
}

wire_enum! {
    /// Title position along the axis line.
    pub enum AxisTitleAlign {
        Low => "low",
        Middle => "middle",
        High => "high",
    }
}

option_object! {
    pub struct AxisTitle {
        text: String => "text",
        align: AxisTitleAlign => "align",
        margin: f64 => "margin",
        offset: f64 => "offset",
        rotation: f64 => "rotation",
        style: WireMap => "style",
        use_html: bool => "useHTML",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    /// Tick labels.
    pub struct AxisLabels {
        align: HorizontalAlign => "align",
        enabled: bool => "enabled",
        format: String => "format",
        rotation: f64 => "rotation",
        step: i64 => "step" where validators::non_negative_integer,
        style: WireMap => "style",
        use_html: bool => "useHTML",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    /// Text attached to a plot band or plot line.
    pub struct PlotLabel {
        text: String => "text",
        align: HorizontalAlign => "align",
        vertical_align: VerticalAlign => "verticalAlign",
        rotation: f64 => "rotation",
        style: WireMap => "style",
        use_html: bool => "useHTML",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    /// A colored range across the plot area.
    pub struct PlotBand {
        border_color: ColorValue => "borderColor",
        border_width: f64 => "borderWidth" where validators::non_negative,
        class_name: String => "className",
        color: ColorValue => "color",
        from: f64 => "from",
        id: String => "id",
        label: PlotLabel => "label",
        to: f64 => "to",
        z_index: i64 => "zIndex",
    }
}

option_object! {
    pub struct PlotLine {
        class_name: String => "className",
        color: ColorValue => "color",
        dash_style: DashStyle => "dashStyle",
        id: String => "id",
        label: PlotLabel => "label",
        value: f64 => "value",
        width: f64 => "width" where validators::non_negative,
        z_index: i64 => "zIndex",
    }
}

option_object! {
    /// One x or y axis.
    pub struct Axis {
        allow_decimals: bool => "allowDecimals",
        alternate_grid_color: ColorValue => "alternateGridColor",
        axis_type: AxisType => "type",
        categories: Vec<String> => "categories",
        crosshair: Value => "crosshair",
        end_on_tick: bool => "endOnTick",
        grid_line_color: ColorValue => "gridLineColor",
        grid_line_dash_style: DashStyle => "gridLineDashStyle",
        grid_line_width: f64 => "gridLineWidth" where validators::non_negative,
        id: String => "id",
        labels: AxisLabels => "labels",
        line_color: ColorValue => "lineColor",
        line_width: f64 => "lineWidth" where validators::non_negative,
        max: f64 => "max",
        max_padding: f64 => "maxPadding",
        min: f64 => "min",
        min_padding: f64 => "minPadding",
        opposite: bool => "opposite",
        plot_bands: Vec<PlotBand> => "plotBands",
        plot_lines: Vec<PlotLine> => "plotLines",
        reversed: bool => "reversed",
        start_on_tick: bool => "startOnTick",
        tick_color: ColorValue => "tickColor",
        tick_interval: f64 => "tickInterval" where validators::non_negative,
        tick_length: f64 => "tickLength",
        tick_width: f64 => "tickWidth" where validators::non_negative,
        title: AxisTitle => "title",
        visible: bool => "visible",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::OptionObject;
    use serde_json::json;

    #[test]
    fn test_category_axis() {
        let axis = Axis::from_dict(
            json!({
                "type": "Category",
                "categories": ["Jan", "Feb", "Mar"],
                "title": {"text": "Month", "align": "HIGH"},
                "labels": {"rotation": -45, "step": 2}
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();

        assert_eq!(axis.axis_type, Some(AxisType::Category));
        assert_eq!(axis.categories.as_ref().map(Vec::len), Some(3));
        assert_eq!(axis.title.as_ref().and_then(|t| t.align), Some(AxisTitleAlign::High));
        assert_eq!(axis.labels.as_ref().and_then(|l| l.step), Some(2));

        let dict = axis.to_dict();
        assert_eq!(dict.get("type"), Some(&json!("category")));
        assert_eq!(Axis::from_dict(&dict).unwrap(), axis);
    }

    #[test]
    fn test_plot_bands_and_lines() {
        let axis = Axis::from_dict(
            json!({
                "plotBands": [{"from": 0, "to": 10, "color": "rgba(68, 170, 213, 0.1)", "label": {"text": "Calm"}}],
                "plotLines": {"value": 0, "width": 1, "color": "#808080", "dashStyle": "dash"}
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();

        let bands = axis.plot_bands.unwrap();
        assert_eq!(bands[0].to, Some(10.0));
        assert_eq!(bands[0].label.as_ref().and_then(|l| l.text.as_deref()), Some("Calm"));

        let lines = axis.plot_lines.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].dash_style, Some(DashStyle::Dash));
    }

    #[test]
    fn test_invalid_axis_values() {
        assert!(Axis::from_dict(json!({"type": "polar"}).as_object().unwrap()).is_err());
        assert!(Axis::from_dict(json!({"lineWidth": -1}).as_object().unwrap()).is_err());
        assert!(Axis::from_dict(json!({"plotLines": [{"color": 5}]}).as_object().unwrap()).is_err());
    }

    #[test]
    fn test_band_and_line_round_trip() {
        let label = PlotLabel {
            text: Some("Normal range".to_string()),
            align: Some(HorizontalAlign::Right),
            vertical_align: Some(VerticalAlign::Middle),
            rotation: Some(90.0),
            style: json!({"color": "#606060"}).as_object().cloned(),
            use_html: Some(false),
            x: Some(-10.0),
            y: Some(4.0),
        };
        let band = PlotBand {
            border_color: Some(ColorValue::plain("#ccc").unwrap()),
            border_width: Some(1.0),
            class_name: Some("normal".to_string()),
            color: Some(ColorValue::plain("rgba(68, 170, 213, 0.1)").unwrap()),
            from: Some(0.3),
            id: Some("band-1".to_string()),
            label: Some(label.clone()),
            to: Some(1.5),
            z_index: Some(2),
        };
        assert_eq!(PlotBand::from_dict(&band.to_dict()).unwrap(), band);

        let line = PlotLine {
            class_name: Some("target".to_string()),
            color: Some(ColorValue::plain("red").unwrap()),
            dash_style: Some(DashStyle::LongDashDot),
            id: Some("line-1".to_string()),
            label: Some(label),
            value: Some(5.5),
            width: Some(2.0),
            z_index: Some(5),
        };
        assert_eq!(PlotLine::from_dict(&line.to_dict()).unwrap(), line);
    }

    #[test]
    fn test_axis_type_set_by_field_name() {
        let mut axis = Axis::default();
        axis.set("axis_type", &json!("datetime")).unwrap();
        assert_eq!(axis.axis_type, Some(AxisType::Datetime));
    }

    #[test]
    fn test_axis_type_set_by_wire_key() {
        let mut axis = Axis::default();
        axis.set("type", &json!("datetime")).unwrap();
        assert_eq!(axis.axis_type, Some(AxisType::Datetime));

        let axis = Axis::from_kwargs([("type", json!("Category")), ("tickInterval", json!(2))]).unwrap();
        assert_eq!(axis.axis_type, Some(AxisType::Category));
        assert_eq!(axis.to_dict()["type"], json!("category"));

        assert!(Axis::default().set("kind", &json!("linear")).is_err());
    }
}
