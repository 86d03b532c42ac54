// Library exports for chartopts

pub mod color;
pub mod data;
pub mod defaults;
pub mod error;
pub mod options;
pub mod runtime;
pub mod series;
pub mod validators;
pub mod wire;

pub use color::ColorValue;
pub use data::{DataPoint, DataPoints};
pub use error::{OptionsError, Result};
pub use options::Options;
pub use series::{Series, SeriesType};
pub use wire::{trim_dict, OptionObject, WireMap, WireValue};

use serde::Deserialize;
use std::fmt;

/// Which typed model a wire document is read into.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DocumentKind {
    #[serde(rename = "options")]
    #[default]
    Options,
    #[serde(rename = "series")]
    Series,
    #[serde(rename = "annotation")]
    Annotation,
    #[serde(rename = "language")]
    Language,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Options => "options",
            DocumentKind::Series => "series",
            DocumentKind::Annotation => "annotation",
            DocumentKind::Language => "language",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[serde(rename = "compact")]
    #[default]
    Compact,
    #[serde(rename = "pretty")]
    Pretty,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct NormalizeOptions {
    #[serde(default)]
    pub kind: DocumentKind,
    #[serde(default, rename = "output")]
    pub format: OutputFormat,
    #[serde(default, rename = "check")]
    pub check_only: bool,
}
