//! Wire contract shared by every option object.
//!
//! Option objects are declared once with [`option_object!`], which generates
//! the struct, its `Default`, the [`OptionObject`] implementation (read,
//! write, keyword assignment) and serde glue from a static field list:
//!
//! ```text
//! option_object! {
//!     pub struct Marker {
//!         enabled: bool => "enabled",
//!         radius: f64 => "radius" where validators::non_negative,
//!         fill_color: ColorValue => "fillColor",
//!     }
//! }
//! ```
//!
//! Every field is stored as `Option<T>`; `T` implements [`WireValue`], which
//! is where per-kind validation lives.

use crate::error::{OptionsError, Result};
use crate::validators;
use serde_json::{Map, Value};

/// Camel-cased wire dictionary.
pub type WireMap = Map<String, Value>;

// =============================================================================
// Field codec
// =============================================================================

/// Conversion between a typed field value and its wire representation.
pub trait WireValue: Sized {
    /// Coerce a non-null wire value. `Ok(None)` means the input is an empty
    /// signal for this kind of field (e.g. `""` for a number).
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>>;

    fn to_wire(&self) -> Value;
}

/// Read one field value. `null` is always absent.
pub fn read_field<T: WireValue>(field: &str, value: &Value) -> Result<Option<T>> {
    if value.is_null() {
        return Ok(None);
    }
    T::from_wire(field, value)
}

pub fn write_field<T: WireValue>(value: &Option<T>) -> Value {
    value.as_ref().map_or(Value::Null, WireValue::to_wire)
}

impl WireValue for String {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        validators::string(field, value).map(Some)
    }

    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }
}

impl WireValue for f64 {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        validators::number(field, value)
    }

    fn to_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for i64 {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        validators::integer(field, value)
    }

    fn to_wire(&self) -> Value {
        Value::from(*self)
    }
}

impl WireValue for bool {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        validators::boolean(field, value)
    }

    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }
}

/// Free-form mappings such as CSS style objects or `custom` payloads.
impl WireValue for WireMap {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Object(map) => Ok(Some(map.clone())),
            Value::String(s) if s.is_empty() => Ok(None),
            other => Err(OptionsError::invalid(field, other, "an object")),
        }
    }

    fn to_wire(&self) -> Value {
        Value::Object(self.clone())
    }
}

/// Values the renderer accepts in several shapes (e.g. `animation` as a
/// boolean or an object) and that are passed through untouched.
impl WireValue for Value {
    fn from_wire(_field: &str, value: &Value) -> Result<Option<Self>> {
        Ok(Some(value.clone()))
    }

    fn to_wire(&self) -> Value {
        self.clone()
    }
}

/// Lists. A single non-array value is accepted as a one-element list.
impl<T: WireValue> WireValue for Vec<T> {
    fn from_wire(field: &str, value: &Value) -> Result<Option<Self>> {
        let items: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        let mut out = Vec::with_capacity(items.len());
        for item in items {
            if let Some(parsed) = read_field::<T>(field, item)? {
                out.push(parsed);
            }
        }
        Ok(Some(out))
    }

    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }
}

// =============================================================================
// Option object contract
// =============================================================================

/// Lifecycle shared by every configuration node.
///
/// Implementations are generated by [`option_object!`]; only the provided
/// methods are meant to be called directly.
pub trait OptionObject: Sized + Default {
    /// Type name used in diagnostics.
    const KIND: &'static str;

    /// Read the declared fields (and embedded bases) from a wire map.
    fn read_fields(map: &WireMap) -> Result<Self>;

    /// Write every declared field, `null` when absent.
    fn write_fields(&self, map: &mut WireMap);

    /// Assign a field by snake_case name. `Ok(false)` if no such field.
    fn assign(&mut self, name: &str, value: &Value) -> Result<bool>;

    fn wire_keys(keys: &mut Vec<&'static str>);

    /// Populate from a wire map. Unrecognized keys are ignored.
    fn from_dict(map: &WireMap) -> Result<Self> {
        let mut known = Vec::new();
        Self::wire_keys(&mut known);
        for key in map.keys() {
            if !known.contains(&key.as_str()) {
                log::debug!("{}: ignoring unrecognized key \"{}\"", Self::KIND, key);
            }
        }
        Self::read_fields(map)
    }

    fn from_json(json: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Self::from_dict(&map),
            other => Err(OptionsError::invalid(Self::KIND, &other, "a JSON object")),
        }
    }

    /// Keyword construction: declared defaults, then each `(name, value)`
    /// pair assigned through the field's validator.
    fn from_kwargs<I, K>(kwargs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut object = Self::default();
        for (name, value) in kwargs {
            object.set(name.as_ref(), &value)?;
        }
        Ok(object)
    }

    /// Assign one field by its snake_case name or its wire key.
    fn set(&mut self, name: &str, value: &Value) -> Result<()> {
        let snake = to_snake_case(name);
        if self.assign(&snake, value)? || (snake != name && self.assign(name, value)?) {
            Ok(())
        } else {
            Err(OptionsError::UnknownField {
                owner: Self::KIND,
                name: name.to_string(),
            })
        }
    }

    fn to_untrimmed_dict(&self) -> WireMap {
        let mut map = WireMap::new();
        self.write_fields(&mut map);
        map
    }

    fn to_dict(&self) -> WireMap {
        trim_dict(self.to_untrimmed_dict())
    }

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_dict())?)
    }

    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_dict())?)
    }
}

// =============================================================================
// Discriminated unions
// =============================================================================

/// Wire key carrying the concrete type of a polymorphic object.
pub const TYPE_KEY: &str = "type";

/// Resolve the `"type"` entry of `map` against the registered literals,
/// case-insensitively. Returns the canonical literal.
pub fn discriminator(kind: &'static str, map: &WireMap, known: &[&'static str]) -> Result<&'static str> {
    let unknown = |value: String| OptionsError::UnknownType {
        kind,
        value,
        known: known.join(", "),
    };

    match map.get(TYPE_KEY) {
        None | Some(Value::Null) => Err(OptionsError::MissingType { kind }),
        Some(Value::String(s)) if s.trim().is_empty() => Err(OptionsError::MissingType { kind }),
        Some(Value::String(s)) => validators::enumerated(TYPE_KEY, s, known).map_err(|_| unknown(s.clone())),
        Some(other) => Err(unknown(other.to_string())),
    }
}

/// `map` without its discriminator, for delegation to the concrete type.
pub fn without_discriminator(map: &WireMap) -> WireMap {
    let mut rest = map.clone();
    rest.shift_remove(TYPE_KEY);
    rest
}

/// `{"type": literal, ...body}` with the discriminator first.
pub fn with_discriminator(literal: &str, body: WireMap) -> WireMap {
    let mut map = WireMap::new();
    map.insert(TYPE_KEY.to_string(), Value::from(literal));
    map.extend(body);
    map
}

// =============================================================================
// Trimming
// =============================================================================

/// Drop map entries whose value is `null`, `""` or an empty collection,
/// recursively. `false` and `0` are kept.
pub fn trim_dict(map: WireMap) -> WireMap {
    map.into_iter()
        .filter_map(|(key, value)| trim_value(value).map(|value| (key, value)))
        .collect()
}

/// Trim a map entry value; `None` means the entry is dropped.
pub fn trim_value(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Object(map) => {
            let trimmed = trim_dict(map);
            if trimmed.is_empty() {
                None
            } else {
                Some(Value::Object(trimmed))
            }
        }
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(Value::Array(items.into_iter().map(trim_element).collect())),
        other => Some(other),
    }
}

// Array positions are significant: scalars (including null) stay as they are.
fn trim_element(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(trim_dict(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(trim_element).collect()),
        other => other,
    }
}

// =============================================================================
// Key mapping
// =============================================================================

/// `border_color` -> `borderColor`. Already camel-cased input is unchanged.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `borderColor` -> `border_color`, `useHTML` -> `use_html`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                out.push('_');
            }
        }
        out.extend(c.to_lowercase());
    }
    out
}

// =============================================================================
// Declaration macros
// =============================================================================

/// Declare an option object from its field list.
///
/// `field: Type => "wireKey"` declares an `Option<Type>` field. A field may
/// add `where path::to::check` (a `fn(&str, Type) -> Result<Type>` run after
/// coercion) and `= expr` (a default applied by `Default` and for keys absent
/// from the input). `pub struct Name: base(BaseType), ...` embeds base structs
/// whose fields live at the same level of the wire map.
macro_rules! option_object {
    (@default) => {
        None
    };
    (@default $default:expr) => {
        Some($default)
    };

    (@check $key:literal, $value:expr) => {
        $value
    };
    (@check $key:literal, $value:expr, $check:path) => {
        match $value {
            Some(value) => Some($check($key, value)?),
            None => None,
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident $(: $($base:ident($base_ty:ty)),+ )? {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty => $key:literal $(where $check:path)? $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $($(pub $base: $base_ty,)+)?
            $($(#[$field_meta])* pub $field: Option<$ty>,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($($base: <$base_ty as Default>::default(),)+)?
                    $($field: $crate::wire::option_object!(@default $($default)?),)*
                }
            }
        }

        impl $crate::wire::OptionObject for $name {
            const KIND: &'static str = stringify!($name);

            fn read_fields(map: &$crate::wire::WireMap) -> $crate::error::Result<Self> {
                Ok(Self {
                    $($($base: <$base_ty as $crate::wire::OptionObject>::read_fields(map)?,)+)?
                    $($field: match map.get($key) {
                        Some(value) => $crate::wire::option_object!(
                            @check $key, $crate::wire::read_field::<$ty>($key, value)? $(, $check)?
                        ),
                        None => $crate::wire::option_object!(@default $($default)?),
                    },)*
                })
            }

            fn write_fields(&self, map: &mut $crate::wire::WireMap) {
                $(map.insert($key.to_string(), $crate::wire::write_field(&self.$field));)*
                $($(<$base_ty as $crate::wire::OptionObject>::write_fields(&self.$base, map);)+)?
            }

            #[allow(unused_variables)]
            fn assign(&mut self, name: &str, value: &::serde_json::Value) -> $crate::error::Result<bool> {
                $(if name == stringify!($field) || name == $key {
                    self.$field = $crate::wire::option_object!(
                        @check $key, $crate::wire::read_field::<$ty>($key, value)? $(, $check)?
                    );
                    return Ok(true);
                })*
                $($(if <$base_ty as $crate::wire::OptionObject>::assign(&mut self.$base, name, value)? {
                    return Ok(true);
                })+)?
                Ok(false)
            }

            #[allow(unused_variables)]
            fn wire_keys(keys: &mut Vec<&'static str>) {
                $(keys.push($key);)*
                $($(<$base_ty as $crate::wire::OptionObject>::wire_keys(keys);)+)?
            }
        }

        impl $crate::wire::WireValue for $name {
            fn from_wire(field: &str, value: &::serde_json::Value) -> $crate::error::Result<Option<Self>> {
                match value {
                    ::serde_json::Value::Object(map) => {
                        <Self as $crate::wire::OptionObject>::from_dict(map).map(Some)
                    }
                    ::serde_json::Value::String(s) if s.is_empty() => Ok(None),
                    other => Err($crate::error::OptionsError::invalid(
                        field,
                        other,
                        concat!("a ", stringify!($name), " object"),
                    )),
                }
            }

            fn to_wire(&self) -> ::serde_json::Value {
                ::serde_json::Value::Object(<Self as $crate::wire::OptionObject>::to_untrimmed_dict(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(&<Self as $crate::wire::OptionObject>::to_dict(self), serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let map = <$crate::wire::WireMap as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::wire::OptionObject>::from_dict(&map).map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Declare a string enumeration. Parsing is case-insensitive; the literal
/// given for each variant is its canonical wire form.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const LITERALS: &'static [&'static str] = &[$($literal),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }

            /// Case-insensitive parse; `field` names the assignment in errors.
            pub fn parse(field: &str, value: &str) -> $crate::error::Result<Self> {
                let literal = $crate::validators::enumerated(field, value, Self::LITERALS)?;
                let index = Self::LITERALS
                    .iter()
                    .position(|candidate| *candidate == literal)
                    .unwrap_or_default();
                Ok(Self::ALL[index])
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::OptionsError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(stringify!($name), s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::wire::WireValue for $name {
            fn from_wire(field: &str, value: &::serde_json::Value) -> $crate::error::Result<Option<Self>> {
                match value {
                    ::serde_json::Value::String(s) if s.is_empty() => Ok(None),
                    ::serde_json::Value::String(s) => Self::parse(field, s).map(Some),
                    other => Err($crate::error::OptionsError::invalid(
                        field,
                        other,
                        format!("one of {:?}", Self::LITERALS),
                    )),
                }
            }

            fn to_wire(&self) -> ::serde_json::Value {
                ::serde_json::Value::from(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(stringify!($name), &raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use option_object;
pub(crate) use wire_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    wire_enum! {
        pub enum Side {
            Left => "left",
            Right => "right",
        }
    }

    option_object! {
        pub struct Inner {
            width: f64 => "width" where validators::non_negative,
        }
    }

    option_object! {
        pub struct Sample {
            title: String => "title",
            border_width: f64 => "borderWidth" where validators::non_negative,
            enabled: bool => "enabled",
            side: Side => "side",
            use_html: bool => "useHTML",
            decimal_point: String => "decimalPoint" = ".".to_string(),
            inner: Inner => "inner",
            tags: Vec<String> => "tags",
        }
    }

    option_object! {
        pub struct Extended: sample(Sample) {
            extra: i64 => "extra",
        }
    }

    #[test]
    fn test_from_dict_maps_wire_keys() {
        let sample = Sample::from_dict(
            json!({
                "title": "Revenue",
                "borderWidth": 2,
                "enabled": false,
                "side": "RIGHT",
                "useHTML": true,
                "inner": {"width": 4},
                "tags": ["a", "b"],
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();

        assert_eq!(sample.title.as_deref(), Some("Revenue"));
        assert_eq!(sample.border_width, Some(2.0));
        assert_eq!(sample.enabled, Some(false));
        assert_eq!(sample.side, Some(Side::Right));
        assert_eq!(sample.use_html, Some(true));
        assert_eq!(sample.inner.as_ref().and_then(|i| i.width), Some(4.0));
        assert_eq!(sample.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_defaults_apply_to_absent_keys_only() {
        let absent = Sample::from_dict(&WireMap::new()).unwrap();
        assert_eq!(absent.decimal_point.as_deref(), Some("."));

        let explicit = Sample::from_dict(json!({"decimalPoint": ","}).as_object().unwrap()).unwrap();
        assert_eq!(explicit.decimal_point.as_deref(), Some(","));

        let nulled = Sample::from_dict(json!({"decimalPoint": null}).as_object().unwrap()).unwrap();
        assert_eq!(nulled.decimal_point, None);

        assert_eq!(Sample::default().decimal_point.as_deref(), Some("."));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let sample = Sample::from_dict(json!({"title": "T", "colour": "red"}).as_object().unwrap()).unwrap();
        assert_eq!(sample.title.as_deref(), Some("T"));
        assert!(!sample.to_dict().contains_key("colour"));
    }

    #[test]
    fn test_validation_failure_aborts_construction() {
        let result = Sample::from_dict(json!({"title": "T", "borderWidth": -1}).as_object().unwrap());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("borderWidth"));

        let nested = Sample::from_dict(json!({"inner": {"width": -3}}).as_object().unwrap());
        assert!(nested.is_err());
    }

    #[test]
    fn test_to_dict_trims_but_keeps_false_and_zero() {
        let sample = Sample {
            title: Some(String::new()),
            border_width: Some(0.0),
            enabled: Some(false),
            decimal_point: None,
            inner: Some(Inner::default()),
            tags: Some(vec![]),
            ..Default::default()
        };
        let dict = sample.to_dict();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("borderWidth"), Some(&json!(0.0)));
        assert_eq!(dict.get("enabled"), Some(&json!(false)));

        let untrimmed = sample.to_untrimmed_dict();
        assert_eq!(untrimmed.get("side"), Some(&Value::Null));
        assert_eq!(untrimmed.get("inner"), Some(&json!({"width": null})));
    }

    #[test]
    fn test_round_trip() {
        let sample = Sample {
            title: Some("Sales".to_string()),
            border_width: Some(1.5),
            side: Some(Side::Left),
            inner: Some(Inner { width: Some(0.0) }),
            tags: Some(vec!["q1".to_string()]),
            ..Default::default()
        };
        let restored = Sample::from_dict(&sample.to_dict()).unwrap();
        assert_eq!(restored, sample);

        let json = sample.to_json().unwrap();
        assert_eq!(Sample::from_json(&json).unwrap(), sample);
    }

    #[test]
    fn test_kwargs_and_set() {
        let sample = Sample::from_kwargs([
            ("title", json!("Hello")),
            ("border_width", json!(3)),
            ("side", json!("Left")),
        ])
        .unwrap();
        assert_eq!(sample.title.as_deref(), Some("Hello"));
        assert_eq!(sample.border_width, Some(3.0));
        assert_eq!(sample.side, Some(Side::Left));
        assert_eq!(sample.decimal_point.as_deref(), Some("."));

        let mut sample = sample;
        sample.set("useHTML", &json!(true)).unwrap();
        assert_eq!(sample.use_html, Some(true));

        let err = sample.set("colour", &json!("red")).unwrap_err();
        assert!(err.is_lookup_failure());

        // A failed assignment leaves the field untouched.
        assert!(sample.set("border_width", &json!(-2)).is_err());
        assert_eq!(sample.border_width, Some(3.0));
    }

    #[test]
    fn test_embedded_base_shares_wire_level() {
        let extended = Extended::from_dict(
            json!({"title": "Base title", "extra": 7}).as_object().unwrap(),
        )
        .unwrap();
        assert_eq!(extended.sample.title.as_deref(), Some("Base title"));
        assert_eq!(extended.extra, Some(7));

        let dict = extended.to_dict();
        assert_eq!(dict.get("title"), Some(&json!("Base title")));
        assert_eq!(dict.get("extra"), Some(&json!(7)));

        let mut extended = extended;
        extended.set("enabled", &json!(true)).unwrap();
        assert_eq!(extended.sample.enabled, Some(true));
    }

    #[test]
    fn test_serde_glue() {
        let sample: Sample = serde_json::from_value(json!({"title": "Via serde", "side": "RIGHT"})).unwrap();
        assert_eq!(sample.side, Some(Side::Right));
        let value = serde_json::to_value(&sample).unwrap();
        assert_eq!(value["side"], json!("right"));

        let bad: std::result::Result<Sample, _> = serde_json::from_value(json!({"side": "up"}));
        assert!(bad.is_err());
    }

    #[test]
    fn test_trim_value_rules() {
        assert_eq!(trim_value(json!(null)), None);
        assert_eq!(trim_value(json!("")), None);
        assert_eq!(trim_value(json!([])), None);
        assert_eq!(trim_value(json!({"a": null, "b": ""})), None);
        assert_eq!(trim_value(json!(0)), Some(json!(0)));
        assert_eq!(trim_value(json!(false)), Some(json!(false)));
        assert_eq!(trim_value(json!([null, 5, ""])), Some(json!([null, 5, ""])));
        assert_eq!(trim_value(json!([{"a": null}])), Some(json!([{}])));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(to_camel_case("border_color"), "borderColor");
        assert_eq!(to_camel_case("x_axis"), "xAxis");
        assert_eq!(to_camel_case("borderColor"), "borderColor");
        assert_eq!(to_snake_case("borderColor"), "border_color");
        assert_eq!(to_snake_case("useHTML"), "use_html");
        assert_eq!(to_snake_case("xAxis"), "x_axis");
        assert_eq!(to_snake_case("border_width"), "border_width");
    }

    #[test]
    fn test_discriminator_lookup() {
        let known = ["line", "areaspline"];
        let map = json!({"type": "AreaSpline", "name": "s"});
        assert_eq!(discriminator("series", map.as_object().unwrap(), &known).unwrap(), "areaspline");

        let missing = discriminator("series", json!({"name": "s"}).as_object().unwrap(), &known).unwrap_err();
        assert!(matches!(missing, OptionsError::MissingType { .. }));

        let unknown = discriminator("series", json!({"type": "donut"}).as_object().unwrap(), &known).unwrap_err();
        assert!(unknown.is_lookup_failure());
        assert!(unknown.to_string().contains("donut"));
        assert!(unknown.to_string().contains("line, areaspline"));

        let rest = without_discriminator(map.as_object().unwrap());
        assert_eq!(Value::Object(rest.clone()), json!({"name": "s"}));
        let restored = with_discriminator("areaspline", rest);
        assert_eq!(restored.keys().next().map(String::as_str), Some("type"));
    }

    #[test]
    fn test_list_accepts_single_item() {
        let tags: Option<Vec<String>> = read_field("tags", &json!("solo")).unwrap();
        assert_eq!(tags, Some(vec!["solo".to_string()]));
    }
}
