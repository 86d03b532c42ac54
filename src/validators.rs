// Field validators
//
// Each validator receives the wire key of the field being assigned (used in
// error messages) and a raw value, and returns the normalized value.

use crate::error::{OptionsError, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while1},
    character::complete::{alpha1, char, multispace0, multispace1},
    combinator::{all_consuming, map, opt, recognize, verify},
    multi::separated_list1,
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};
use serde_json::Value;

// === Scalars ===

/// Free-form text. Numbers are coerced to their decimal representation.
pub fn string(field: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(OptionsError::invalid(field, other, "a string")),
    }
}

/// Numeric value. Numeric strings are coerced; falsy input other than `0`
/// (`""`, `false`, `[]`, `{}`) is treated as an absent value.
pub fn number(field: &str, value: &Value) -> Result<Option<f64>> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::Bool(false) => return Ok(None),
        Value::Array(items) if items.is_empty() => return Ok(None),
        Value::Object(map) if map.is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(Some(n)),
        _ => Err(OptionsError::invalid(field, value, "a finite number")),
    }
}

/// Integral value, with the same coercion rules as [`number`].
pub fn integer(field: &str, value: &Value) -> Result<Option<i64>> {
    if let Some(i) = value.as_i64() {
        return Ok(Some(i));
    }
    match number(field, value) {
        Ok(Some(n)) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Ok(Some(n as i64)),
        Ok(None) => Ok(None),
        _ => Err(OptionsError::invalid(field, value, "an integer")),
    }
}

/// Boolean value. Accepts `true`/`false` literals and their string forms.
pub fn boolean(field: &str, value: &Value) -> Result<Option<bool>> {
    match value {
        Value::Bool(b) => Ok(Some(*b)),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(OptionsError::invalid(field, value, "a boolean")),
        },
        other => Err(OptionsError::invalid(field, other, "a boolean")),
    }
}

// === Range constraints ===

pub fn non_negative(field: &str, value: f64) -> Result<f64> {
    if value < 0.0 {
        return Err(OptionsError::invalid(field, &Value::from(value), "a number >= 0"));
    }
    Ok(value)
}

pub fn non_negative_integer(field: &str, value: i64) -> Result<i64> {
    if value < 0 {
        return Err(OptionsError::invalid(field, &Value::from(value), "an integer >= 0"));
    }
    Ok(value)
}

/// Ratio in `[0, 1]`, e.g. opacity.
pub fn unit_interval(field: &str, value: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&value) {
        return Err(OptionsError::invalid(field, &Value::from(value), "a number between 0 and 1"));
    }
    Ok(value)
}

// === Enumerations ===

/// Match `value` against a fixed literal set, ignoring case.
///
/// The input is lowercased before comparison and the canonical literal from
/// `allowed` is returned, so `"LEFT"` resolves to `"left"` and `"shortdash"`
/// to `"ShortDash"`.
pub fn enumerated<'a>(field: &str, value: &str, allowed: &[&'a str]) -> Result<&'a str> {
    let lowered = value.trim().to_lowercase();
    allowed
        .iter()
        .find(|candidate| candidate.to_lowercase() == lowered)
        .copied()
        .ok_or_else(|| {
            OptionsError::invalid(field, &Value::from(value), format!("one of {:?}", allowed))
        })
}

// === Colors ===

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}

/// #rgb, #rgba, #rrggbb or #rrggbbaa
fn hex_color(input: &str) -> IResult<&str, &str> {
    recognize(preceded(
        char('#'),
        verify(take_while1(|c: char| c.is_ascii_hexdigit()), |digits: &str| {
            matches!(digits.len(), 3 | 4 | 6 | 8)
        }),
    ))(input)
}

fn color_argument(input: &str) -> IResult<&str, f64> {
    terminated(double, opt(alt((tag("%"), tag_no_case("deg")))))(input)
}

/// rgb(), rgba(), hsl() and hsla() with comma, space or slash separators
fn color_function(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((
            tag_no_case("rgba"),
            tag_no_case("rgb"),
            tag_no_case("hsla"),
            tag_no_case("hsl"),
        )),
        delimited(
            ws(char('(')),
            verify(
                separated_list1(
                    alt((ws(char(',')), ws(char('/')), map(multispace1, |_| ' '))),
                    color_argument,
                ),
                |args: &Vec<f64>| matches!(args.len(), 3 | 4),
            ),
            ws(char(')')),
        ),
    ))(input)
}

/// var(--custom-property)
fn color_variable(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        tag_no_case("var"),
        delimited(
            ws(char('(')),
            pair(
                tag("--"),
                take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            ),
            ws(char(')')),
        ),
    ))(input)
}

/// Named colors and keywords such as `transparent` or `currentColor`
fn color_keyword(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic())(input)
}

/// Validate a CSS color string and return it without surrounding whitespace.
pub fn color_string(field: &str, value: &str) -> Result<String> {
    let parsed = all_consuming(ws(alt((
        hex_color,
        color_function,
        color_variable,
        color_keyword,
    ))))(value);

    match parsed {
        Ok((_, color)) => Ok(color.to_string()),
        Err(_) => Err(OptionsError::invalid(
            field,
            &Value::from(value),
            "a CSS color (#hex, rgb(), rgba(), hsl(), hsla(), var() or a color name)",
        )),
    }
}

// === URLs ===

fn absolute_url(input: &str) -> IResult<&str, ()> {
    let (input, _) = recognize(pair(
        alpha1,
        take_while(|c: char| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
    ))(input)?;
    let (input, _) = tag("://")(input)?;
    let (input, _) = take_while1(|c: char| !c.is_whitespace() && !matches!(c, '/' | '?' | '#'))(input)?;
    let (input, _) = take_while(|c: char| !c.is_whitespace())(input)?;
    Ok((input, ()))
}

fn data_uri(input: &str) -> IResult<&str, ()> {
    map(
        preceded(tag_no_case("data:"), take_while1(|c: char| !c.is_whitespace())),
        |_| (),
    )(input)
}

/// Absolute URL (`scheme://host/...`) or `data:` URI.
pub fn url(field: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    match all_consuming(alt((data_uri, absolute_url)))(trimmed) {
        Ok(_) => Ok(trimmed.to_string()),
        Err(_) => Err(OptionsError::invalid(field, &Value::from(value.as_str()), "an absolute URL")),
    }
}

// === Lengths ===

/// Parse `"120"`, `"120px"` or `"50%"`. Returns the magnitude and whether it
/// is a percentage.
pub fn parse_length(input: &str) -> Option<(f64, bool)> {
    let parsed: IResult<&str, (f64, Option<&str>)> = all_consuming(ws(pair(
        double,
        opt(alt((tag("%"), tag_no_case("px")))),
    )))(input);

    match parsed {
        Ok((_, (magnitude, unit))) if magnitude.is_finite() => Some((magnitude, unit == Some("%"))),
        _ => None,
    }
}
