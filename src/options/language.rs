// Localized strings and number formatting symbols

use crate::defaults::DefaultKey;
use crate::wire::option_object;

option_object! {
    /// Interface text. Absent keys take the registry defaults.
    pub struct Language {
        decimal_point: String => "decimalPoint" = DefaultKey::LangDecimalPoint.string(),
        thousands_sep: String => "thousandsSep" = DefaultKey::LangThousandsSep.string(),
        loading: String => "loading" = DefaultKey::LangLoading.string(),
        no_data: String => "noData" = DefaultKey::LangNoData.string(),
        reset_zoom: String => "resetZoom" = DefaultKey::LangResetZoom.string(),
        reset_zoom_title: String => "resetZoomTitle" = DefaultKey::LangResetZoomTitle.string(),
        months: Vec<String> => "months" = DefaultKey::LangMonths.strings(),
        short_months: Vec<String> => "shortMonths" = DefaultKey::LangShortMonths.strings(),
        weekdays: Vec<String> => "weekdays" = DefaultKey::LangWeekdays.strings(),
        numeric_symbols: Vec<String> => "numericSymbols" = DefaultKey::LangNumericSymbols.strings(),
        view_fullscreen: String => "viewFullscreen" = DefaultKey::LangViewFullscreen.string(),
        print_chart: String => "printChart" = DefaultKey::LangPrintChart.string(),
        download_png: String => "downloadPNG" = DefaultKey::LangDownloadPng.string(),
        download_jpeg: String => "downloadJPEG" = DefaultKey::LangDownloadJpeg.string(),
        download_pdf: String => "downloadPDF" = DefaultKey::LangDownloadPdf.string(),
        download_svg: String => "downloadSVG" = DefaultKey::LangDownloadSvg.string(),
    }
}
