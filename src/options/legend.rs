use crate::color::ColorValue;
use crate::options::common::{HorizontalAlign, Length, VerticalAlign};
use crate::validators;
use crate::wire::{option_object, wire_enum, WireMap};

wire_enum! {
    pub enum LegendLayout {
        Horizontal => "horizontal",
        Vertical => "vertical",
        Proximate => "proximate",
    }
}

option_object! {
    pub struct LegendTitle {
        text: String => "text",
        style: WireMap => "style",
    }
}

option_object! {
    /// The box listing each series or point with its symbol.
    pub struct Legend {
        align: HorizontalAlign => "align",
        background_color: ColorValue => "backgroundColor",
        border_color: ColorValue => "borderColor",
        border_radius: f64 => "borderRadius" where validators::non_negative,
        border_width: f64 => "borderWidth" where validators::non_negative,
        enabled: bool => "enabled",
        floating: bool => "floating",
        item_distance: f64 => "itemDistance" where validators::non_negative,
        item_hidden_style: WireMap => "itemHiddenStyle",
        item_hover_style: WireMap => "itemHoverStyle",
        item_margin_bottom: f64 => "itemMarginBottom",
        item_margin_top: f64 => "itemMarginTop",
        item_style: WireMap => "itemStyle",
        label_format: String => "labelFormat",
        layout: LegendLayout => "layout",
        margin: f64 => "margin",
        max_height: f64 => "maxHeight" where validators::non_negative,
        padding: f64 => "padding" where validators::non_negative,
        reversed: bool => "reversed",
        shadow: bool => "shadow",
        symbol_height: f64 => "symbolHeight" where validators::non_negative,
        symbol_padding: f64 => "symbolPadding",
        symbol_radius: f64 => "symbolRadius" where validators::non_negative,
        symbol_width: f64 => "symbolWidth" where validators::non_negative,
        title: LegendTitle => "title",
        use_html: bool => "useHTML",
        vertical_align: VerticalAlign => "verticalAlign",
        width: Length => "width",
        x: f64 => "x",
        y: f64 => "y",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::OptionObject;
    use serde_json::{json, Value};

    #[test]
    fn test_legend_from_dict() {
        let legend = Legend::from_dict(
            json!({
                "layout": "Vertical",
                "align": "right",
                "verticalAlign": "MIDDLE",
                "width": "30%",
                "borderWidth": 0,
                "title": {"text": "Cities", "style": {"fontStyle": "italic"}},
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();

        assert_eq!(legend.layout, Some(LegendLayout::Vertical));
        assert_eq!(legend.vertical_align, Some(VerticalAlign::Middle));
        assert_eq!(legend.width, Some(Length::Percent(30.0)));
        assert_eq!(legend.title.as_ref().and_then(|t| t.text.as_deref()), Some("Cities"));

        let dict = legend.to_dict();
        assert_eq!(dict.get("layout"), Some(&json!("vertical")));
        assert_eq!(dict.get("width"), Some(&json!("30%")));
        assert_eq!(dict.get("borderWidth"), Some(&json!(0.0)));
    }

    #[test]
    fn test_empty_title_is_trimmed() {
        let legend = Legend {
            enabled: Some(false),
            title: Some(LegendTitle::default()),
            ..Default::default()
        };
        assert_eq!(Value::Object(legend.to_dict()), json!({"enabled": false}));
    }

    #[test]
    fn test_round_trip() {
        let legend = Legend {
            align: Some(HorizontalAlign::Left),
            background_color: Some(ColorValue::plain("#FFFFFF").unwrap()),
            border_width: Some(1.0),
            enabled: Some(true),
            floating: Some(true),
            item_distance: Some(24.0),
            item_style: json!({"fontWeight": "bold"}).as_object().cloned(),
            label_format: Some("{name}".to_string()),
            layout: Some(LegendLayout::Proximate),
            max_height: Some(120.0),
            reversed: Some(true),
            symbol_radius: Some(0.0),
            title: Some(LegendTitle {
                text: Some("Cities".to_string()),
                style: None,
            }),
            vertical_align: Some(VerticalAlign::Top),
            width: Some(Length::Pixels(200.0)),
            x: Some(120.0),
            y: Some(100.0),
            ..Default::default()
        };
        assert_eq!(Legend::from_dict(&legend.to_dict()).unwrap(), legend);
    }

    #[test]
    fn test_invalid_layout() {
        assert!(Legend::from_dict(json!({"layout": "diagonal"}).as_object().unwrap()).is_err());
    }
}
