use crate::error::BannerError;
use crate::style::StyleMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_IS_DEV: bool = false;
pub const DEFAULT_BANNER_TITLE: &str = "⚠️ DEV MODE ⚠️";
pub const DEFAULT_PAGE_PREFIX: &str = "(DEV)";
pub const DEFAULT_CONSOLE_MESSAGE: &str = DEFAULT_BANNER_TITLE;
pub const DEFAULT_DISPLAY_PAGE_PREFIX: bool = true;
pub const DEFAULT_DISPLAY_CONSOLE_MESSAGE: bool = true;

/// Everything the banner needs for one render pass.
///
/// Supplied fresh by the host on every render. Every field has a default,
/// so a JSON override document may name any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BannerConfig {
    pub is_dev: bool,
    pub title: String,
    pub page_prefix: String,
    pub console_message: String,
    pub display_page_prefix: bool,
    pub display_console_message: bool,
    pub class_name: Option<String>,
    pub style: StyleMap,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            is_dev: DEFAULT_IS_DEV,
            title: DEFAULT_BANNER_TITLE.to_string(),
            page_prefix: DEFAULT_PAGE_PREFIX.to_string(),
            console_message: DEFAULT_CONSOLE_MESSAGE.to_string(),
            display_page_prefix: DEFAULT_DISPLAY_PAGE_PREFIX,
            display_console_message: DEFAULT_DISPLAY_CONSOLE_MESSAGE,
            class_name: None,
            style: StyleMap::default(),
        }
    }
}

impl BannerConfig {
    pub fn new(is_dev: bool) -> Self {
        Self {
            is_dev,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BannerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_page_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.page_prefix = prefix.into();
        self
    }

    pub fn with_console_message(mut self, message: impl Into<String>) -> Self {
        self.console_message = message.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Caller style merged over the fixed overlay style.
    pub fn effective_style(&self) -> StyleMap {
        self.style.merged_over(&StyleMap::default_overlay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BannerConfig::default();
        assert!(!config.is_dev);
        assert_eq!(config.title, "⚠️ DEV MODE ⚠️");
        assert_eq!(config.page_prefix, "(DEV)");
        assert_eq!(config.console_message, config.title);
        assert!(config.display_page_prefix);
        assert!(config.display_console_message);
        assert!(config.class_name.is_none());
        assert!(config.style.is_empty());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = BannerConfig::from_json(r#"{"isDev": true, "pagePrefix": "[STAGING]"}"#)
            .unwrap();
        assert!(config.is_dev);
        assert_eq!(config.page_prefix, "[STAGING]");
        assert_eq!(config.title, DEFAULT_BANNER_TITLE);
        assert!(config.display_console_message);
    }

    #[test]
    fn test_json_style_override() {
        let config = BannerConfig::from_json(r#"{"style": {"color": "white"}}"#).unwrap();
        assert_eq!(config.effective_style().get("color"), Some("white"));
        assert_eq!(config.effective_style().get("position"), Some("fixed"));
    }

    #[test]
    fn test_camel_case_style_override_from_json() {
        let config = BannerConfig::from_json(
            r#"{"isDev": true, "style": {"backgroundColor": "red", "zIndex": 100}}"#,
        )
        .unwrap();
        let style = config.effective_style();
        assert_eq!(style.get("background-color"), Some("red"));
        assert_eq!(style.get("z-index"), Some("100"));
        assert_eq!(style.len(), StyleMap::default_overlay().len());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = BannerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, BannerError::Config(_)));
    }

    #[test]
    fn test_malformed_style_string_is_rejected() {
        assert!(BannerConfig::from_json(r#"{"style": "color red"}"#).is_err());
    }
}
