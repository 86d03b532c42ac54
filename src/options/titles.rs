// Chart title, subtitle and credits

use crate::options::common::{HorizontalAlign, VerticalAlign};
use crate::validators;
use crate::wire::{option_object, WireMap};

option_object! {
    pub struct Title {
        text: String => "text",
        align: HorizontalAlign => "align",
        floating: bool => "floating",
        margin: f64 => "margin",
        style: WireMap => "style",
        use_html: bool => "useHTML",
        vertical_align: VerticalAlign => "verticalAlign",
        width_adjust: f64 => "widthAdjust",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    pub struct Subtitle {
        text: String => "text",
        align: HorizontalAlign => "align",
        floating: bool => "floating",
        style: WireMap => "style",
        use_html: bool => "useHTML",
        vertical_align: VerticalAlign => "verticalAlign",
        width_adjust: f64 => "widthAdjust",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    pub struct CreditsPosition {
        align: HorizontalAlign => "align",
        vertical_align: VerticalAlign => "verticalAlign",
        x: f64 => "x",
        y: f64 => "y",
    }
}

option_object! {
    /// The attribution link in the chart corner.
    pub struct Credits {
        enabled: bool => "enabled",
        href: String => "href" where validators::url,
        position: CreditsPosition => "position",
        style: WireMap => "style",
        text: String => "text",
    }
}
