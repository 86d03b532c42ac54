// Read-only registry of documented default values

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;

/// Keys of the default-value registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultKey {
    LangDecimalPoint,
    LangThousandsSep,
    LangLoading,
    LangNoData,
    LangResetZoom,
    LangResetZoomTitle,
    LangMonths,
    LangShortMonths,
    LangWeekdays,
    LangNumericSymbols,
    LangViewFullscreen,
    LangPrintChart,
    LangDownloadPng,
    LangDownloadJpeg,
    LangDownloadPdf,
    LangDownloadSvg,
}

static REGISTRY: Lazy<HashMap<DefaultKey, Value>> = Lazy::new(|| {
    use DefaultKey::*;

    HashMap::from([
        (LangDecimalPoint, json!(".")),
        (LangThousandsSep, json!(" ")),
        (LangLoading, json!("Loading...")),
        (LangNoData, json!("No data to display")),
        (LangResetZoom, json!("Reset zoom")),
        (LangResetZoomTitle, json!("Reset zoom level 1:1")),
        (
            LangMonths,
            json!([
                "January", "February", "March", "April", "May", "June", "July",
                "August", "September", "October", "November", "December"
            ]),
        ),
        (
            LangShortMonths,
            json!(["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]),
        ),
        (
            LangWeekdays,
            json!(["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]),
        ),
        (LangNumericSymbols, json!(["k", "M", "G", "T", "P", "E"])),
        (LangViewFullscreen, json!("View in full screen")),
        (LangPrintChart, json!("Print chart")),
        (LangDownloadPng, json!("Download PNG image")),
        (LangDownloadJpeg, json!("Download JPEG image")),
        (LangDownloadPdf, json!("Download PDF document")),
        (LangDownloadSvg, json!("Download SVG vector image")),
    ])
});

impl DefaultKey {
    pub fn value(self) -> &'static Value {
        // Every key is registered above.
        REGISTRY.get(&self).unwrap_or(&Value::Null)
    }

    pub fn string(self) -> String {
        self.value().as_str().unwrap_or_default().to_string()
    }

    pub fn strings(self) -> Vec<String> {
        self.value()
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
