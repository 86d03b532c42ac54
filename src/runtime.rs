// Normalization pipeline: parse, validate, re-export

use crate::options::annotations::Annotation;
use crate::options::language::Language;
use crate::options::Options;
use crate::series::Series;
use crate::wire::{OptionObject, WireMap};
use crate::{DocumentKind, NormalizeOptions, OutputFormat};
use anyhow::{anyhow, Context, Result};
use serde_json::Value;

/// Validate `input` as the configured document kind. Returns the normalized
/// JSON text, or `None` when only checking.
pub fn normalize(input: &str, options: &NormalizeOptions) -> Result<Option<String>> {
    let document: Value = serde_json::from_str(input).context("Failed to parse input as JSON")?;

    let normalized = match document {
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let map = normalize_value(item, options.kind)
                    .with_context(|| format!("Invalid {} at index {}", options.kind, i))?;
                out.push(Value::Object(map));
            }
            Value::Array(out)
        }
        other => Value::Object(
            normalize_value(&other, options.kind).with_context(|| format!("Invalid {}", options.kind))?,
        ),
    };

    if options.check_only {
        log::info!("{} is valid", options.kind);
        return Ok(None);
    }

    let text = match options.format {
        OutputFormat::Compact => serde_json::to_string(&normalized),
        OutputFormat::Pretty => serde_json::to_string_pretty(&normalized),
    }
    .context("Failed to serialize normalized document")?;

    Ok(Some(text))
}

fn normalize_value(value: &Value, kind: DocumentKind) -> Result<WireMap> {
    let map = value
        .as_object()
        .ok_or_else(|| anyhow!("Expected a JSON object, found {}", value))?;
    normalize_map(map, kind)
}

/// Round-trip one wire map through the typed model of `kind`.
pub fn normalize_map(map: &WireMap, kind: DocumentKind) -> Result<WireMap> {
    let dict = match kind {
        DocumentKind::Options => Options::from_dict(map)?.to_dict(),
        DocumentKind::Series => Series::from_dict(map)?.to_dict(),
        DocumentKind::Annotation => Annotation::from_dict(map)?.to_dict(),
        DocumentKind::Language => Language::from_dict(map)?.to_dict(),
    };
    Ok(dict)
}
