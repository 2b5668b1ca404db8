use crate::error::BannerError;
use derive_more::Display;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Fixed style of the overlay element. Caller styles are merged over it.
pub const DEFAULT_OVERLAY_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("background-color", "rgba(255, 235, 59, 0.5)"),
    ("color", "black"),
    ("text-align", "center"),
    ("font-weight", "bold"),
    ("padding", "0.5rem"),
    ("z-index", "50"),
];

/// CSS applied to the `%c` console notice.
pub const DEFAULT_CONSOLE_STYLE: &str = "background: rgba(255, 235, 59, 0.8); \
     border: 2px dashed black; \
     border-radius: 5px; \
     color: black; \
     font-weight: bold; \
     padding: 4px 8px;";

/// Ordered list of inline CSS declarations.
///
/// Property names are stored trimmed and lowercased, so `Color` and
/// `color` address the same declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Display)]
#[display(fmt = "{}", "self.to_css()")]
pub struct StyleMap(Vec<(String, String)>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_overlay() -> Self {
        DEFAULT_OVERLAY_STYLE
            .iter()
            .fold(Self::new(), |style, (prop, value)| style.with(prop, value))
    }

    /// Parses `prop: value; prop: value` inline CSS.
    pub fn parse(css: &str) -> Result<Self, BannerError> {
        let mut style = Self::new();
        for segment in css.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            let (prop, value) = segment
                .split_once(':')
                .ok_or_else(|| BannerError::MalformedStyle(segment.to_string()))?;
            if prop.trim().is_empty() {
                return Err(BannerError::MalformedStyle(segment.to_string()));
            }
            style.set(prop, value);
        }
        Ok(style)
    }

    pub fn with(mut self, prop: &str, value: &str) -> Self {
        self.set(prop, value);
        self
    }

    /// Replaces an existing declaration in place, or appends a new one.
    pub fn set(&mut self, prop: &str, value: &str) {
        let prop = normalize(prop);
        let value = value.trim().to_string();
        match self.0.iter_mut().find(|(existing, _)| *existing == prop) {
            Some(slot) => slot.1 = value,
            None => self.0.push((prop, value)),
        }
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        let prop = normalize(prop);
        self.0
            .iter()
            .find(|(existing, _)| *existing == prop)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `base` with every declaration of `self` applied on top.
    pub fn merged_over(&self, base: &StyleMap) -> StyleMap {
        let mut merged = base.clone();
        for (prop, value) in &self.0 {
            merged.set(prop, value);
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn to_css(&self) -> String {
        self.iter()
            .map(|(prop, value)| format!("{}: {};", prop, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn normalize(prop: &str) -> String {
    prop.trim().to_ascii_lowercase()
}

impl FromStr for StyleMap {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for StyleMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Turns a camelCase object key (`backgroundColor`, `msTransition`) into its
/// CSS property name. Keys that already contain a dash are left alone.
fn hyphenate(key: &str) -> String {
    let key = key.trim();
    if key.contains('-') {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    match out.strip_prefix("ms-") {
        Some(rest) => format!("-ms-{}", rest),
        None => out,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StyleValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Int(n) => write!(f, "{}", n),
            StyleValue::Float(n) => write!(f, "{}", n),
        }
    }
}

// Accepts either an inline CSS string or an object keyed like inline style
// props (camelCase or dashed), with string or numeric values.
impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleVisitor;

        impl<'de> Visitor<'de> for StyleVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an inline CSS string or a map of CSS properties")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleMap, E> {
                StyleMap::parse(v).map_err(E::custom)
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<StyleMap, A::Error> {
                let mut style = StyleMap::new();
                while let Some((prop, value)) = map.next_entry::<String, StyleValue>()? {
                    if prop.trim().is_empty() {
                        return Err(de::Error::custom("empty CSS property name"));
                    }
                    style.set(&hyphenate(&prop), &value.to_string());
                }
                Ok(style)
            }
        }

        deserializer.deserialize_any(StyleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overlay_contains_fixed_position() {
        let style = StyleMap::default_overlay();
        assert_eq!(style.get("position"), Some("fixed"));
        assert_eq!(style.get("z-index"), Some("50"));
        assert_eq!(style.len(), DEFAULT_OVERLAY_STYLE.len());
    }

    #[test]
    fn test_caller_value_wins_on_collision() {
        let caller = StyleMap::new().with("color", "red").with("margin", "1px");
        let merged = caller.merged_over(&StyleMap::default_overlay());

        assert_eq!(merged.get("color"), Some("red"));
        assert_eq!(merged.get("margin"), Some("1px"));
        assert_eq!(merged.get("font-weight"), Some("bold"));
        assert_eq!(merged.len(), DEFAULT_OVERLAY_STYLE.len() + 1);
    }

    #[test]
    fn test_collision_keeps_base_position() {
        let base = StyleMap::new().with("top", "0").with("color", "black");
        let merged = StyleMap::new().with("top", "2px").merged_over(&base);
        assert_eq!(merged.to_css(), "top: 2px; color: black;");
    }

    #[test]
    fn test_property_names_are_case_insensitive() {
        let style = StyleMap::new().with(" Color ", "blue");
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.get("COLOR"), Some("blue"));
    }

    #[test]
    fn test_parse_inline_css() {
        let style = StyleMap::parse("color: red; ; padding : 1rem ;").unwrap();
        assert_eq!(style.get("color"), Some("red"));
        assert_eq!(style.get("padding"), Some("1rem"));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_parse_rejects_segment_without_colon() {
        let err = StyleMap::parse("color red").unwrap_err();
        assert!(matches!(err, BannerError::MalformedStyle(ref s) if s == "color red"));
    }

    #[test]
    fn test_parse_rejects_empty_property() {
        assert!(StyleMap::parse(": red").is_err());
    }

    #[test]
    fn test_deserialize_from_string_and_object() {
        let from_str: StyleMap = serde_json::from_str(r#""color: red""#).unwrap();
        let from_map: StyleMap = serde_json::from_str(r#"{"color": "red"}"#).unwrap();
        assert_eq!(from_str, from_map);
    }

    #[test]
    fn test_camel_case_keys_replace_default_declarations() {
        let caller: StyleMap =
            serde_json::from_str(r#"{"backgroundColor": "red", "WebkitUserSelect": "none"}"#)
                .unwrap();
        let merged = caller.merged_over(&StyleMap::default_overlay());

        assert_eq!(merged.get("background-color"), Some("red"));
        assert_eq!(merged.get("-webkit-user-select"), Some("none"));
        assert_eq!(merged.len(), DEFAULT_OVERLAY_STYLE.len() + 1);
    }

    #[test]
    fn test_hyphenate_keeps_dashed_and_custom_properties() {
        assert_eq!(hyphenate("z-index"), "z-index");
        assert_eq!(hyphenate("--accent"), "--accent");
        assert_eq!(hyphenate("msTransform"), "-ms-transform");
        assert_eq!(hyphenate("color"), "color");
    }

    #[test]
    fn test_numeric_values_are_stored_as_text() {
        let style: StyleMap = serde_json::from_str(r#"{"zIndex": 100, "opacity": 0.5}"#).unwrap();
        assert_eq!(style.get("z-index"), Some("100"));
        assert_eq!(style.get("opacity"), Some("0.5"));
    }

    #[test]
    fn test_display_matches_css() {
        let style = StyleMap::new().with("color", "red").with("top", "0");
        assert_eq!(style.to_string(), "color: red; top: 0;");
        assert_eq!(style.to_string(), style.to_css());
    }

    #[test]
    fn test_serializes_as_css() {
        let style = StyleMap::new().with("color", "red");
        assert_eq!(serde_json::to_string(&style).unwrap(), r#""color: red;""#);
    }
}
