use crate::color::ColorValue;
use crate::options::common::{Length, Spacing};
use crate::series::SeriesType;
use crate::validators;
use crate::wire::{option_object, wire_enum, WireMap};
use serde_json::Value;

wire_enum! {
    pub enum ZoomType {
        X => "x",
        Y => "y",
        XY => "xy",
    }
}

option_object! {
    /// Canvas-level settings.
    pub struct ChartOptions {
        align_ticks: bool => "alignTicks",
        animation: Value => "animation",
        background_color: ColorValue => "backgroundColor",
        border_color: ColorValue => "borderColor",
        border_radius: f64 => "borderRadius" where validators::non_negative,
        border_width: f64 => "borderWidth" where validators::non_negative,
        class_name: String => "className",
        height: Length => "height",
        inverted: bool => "inverted",
        margin: Spacing => "margin",
        plot_background_color: ColorValue => "plotBackgroundColor",
        plot_background_image: String => "plotBackgroundImage" where validators::url,
        plot_border_color: ColorValue => "plotBorderColor",
        plot_border_width: f64 => "plotBorderWidth" where validators::non_negative,
        plot_shadow: bool => "plotShadow",
        polar: bool => "polar",
        reflow: bool => "reflow",
        render_to: String => "renderTo",
        series_type: SeriesType => "type",
        shadow: bool => "shadow",
        spacing: Spacing => "spacing",
        style: WireMap => "style",
        styled_mode: bool => "styledMode",
        width: Length => "width",
        zoom_type: ZoomType => "zoomType",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Gradient;
    use crate::wire::OptionObject;
    use serde_json::json;

    #[test]
    fn test_chart_options() {
        let chart = ChartOptions::from_dict(
            json!({
                "type": "Column",
                "zoomType": "XY",
                "height": "56%",
                "width": 600,
                "margin": [10, 20, 30, 40],
                "animation": {"duration": 500}
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();

        assert_eq!(chart.series_type, Some(SeriesType::Column));
        assert_eq!(chart.zoom_type, Some(ZoomType::XY));
        assert_eq!(chart.height, Some(Length::Percent(56.0)));
        assert_eq!(chart.width, Some(Length::Pixels(600.0)));
        assert_eq!(chart.margin, Some(Spacing::Sides(vec![10.0, 20.0, 30.0, 40.0])));
        assert_eq!(chart.animation, Some(json!({"duration": 500})));
    }

    #[test]
    fn test_gradient_background() {
        let chart = ChartOptions::from_dict(
            json!({
                "backgroundColor": {
                    "linearGradient": {"x1": 0, "y1": 0, "x2": 1, "y2": 1},
                    "stops": [[0, "rgb(255, 255, 255)"], [1, "rgb(200, 200, 255)"]]
                }
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();
        assert!(matches!(chart.background_color, Some(ColorValue::Gradient(Gradient { .. }))));

        let restored = ChartOptions::from_dict(&chart.to_dict()).unwrap();
        assert_eq!(restored, chart);
    }

    #[test]
    fn test_scalar_spacing_exports_as_scalar() {
        let chart = ChartOptions::from_dict(json!({"margin": 10, "spacing": [5, 5]}).as_object().unwrap()).unwrap();
        let exported = chart.to_dict();
        assert_eq!(exported["margin"], json!(10.0));
        assert_eq!(exported["spacing"], json!([5.0, 5.0]));
        assert_eq!(ChartOptions::from_dict(&exported).unwrap(), chart);
    }

    #[test]
    fn test_series_type_set_by_wire_key() {
        let chart = ChartOptions::from_kwargs([("type", json!("pie")), ("zoomType", json!("x"))]).unwrap();
        assert_eq!(chart.series_type, Some(SeriesType::Pie));
        assert_eq!(chart.zoom_type, Some(ZoomType::X));
    }

    #[test]
    fn test_unknown_default_series_type() {
        let err = ChartOptions::from_dict(json!({"type": "donut"}).as_object().unwrap()).unwrap_err();
        assert!(err.to_string().contains("donut"));
    }
}
