//! Concrete configuration nodes and the root document.

pub mod annotations;
pub mod axis;
pub mod chart;
pub mod common;
pub mod language;
pub mod legend;
pub mod plot_options;
pub mod titles;

use crate::color::ColorValue;
use crate::series::Series;
use crate::wire::option_object;

use annotations::Annotation;
use axis::Axis;
use chart::ChartOptions;
use common::Tooltip;
use legend::Legend;
use plot_options::PlotOptions;
use titles::{Credits, Subtitle, Title};

option_object! {
    /// A complete chart configuration.
    pub struct Options {
        chart: ChartOptions => "chart",
        colors: Vec<ColorValue> => "colors",
        credits: Credits => "credits",
        title: Title => "title",
        subtitle: Subtitle => "subtitle",
        legend: Legend => "legend",
        tooltip: Tooltip => "tooltip",
        x_axis: Vec<Axis> => "xAxis",
        y_axis: Vec<Axis> => "yAxis",
        plot_options: PlotOptions => "plotOptions",
        series: Vec<Series> => "series",
        annotations: Vec<Annotation> => "annotations",
    }
}
