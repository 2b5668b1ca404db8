use crate::config::BannerConfig;
use crate::style::StyleMap;

/// The element the banner renders while active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub text: String,
    pub class: Option<String>,
    pub style: StyleMap,
}

impl Overlay {
    /// `None` while inactive: the banner renders nothing.
    pub fn from_config(config: &BannerConfig) -> Option<Self> {
        if !config.is_dev {
            return None;
        }
        Some(Self {
            text: config.title.clone(),
            class: config.class_name.clone(),
            style: config.effective_style(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_renders_nothing() {
        assert!(Overlay::from_config(&BannerConfig::default()).is_none());
    }

    #[test]
    fn test_active_overlay_uses_title_and_class() {
        let config = BannerConfig::new(true)
            .with_title("STAGING")
            .with_class_name("banner");
        let overlay = Overlay::from_config(&config).unwrap();
        assert_eq!(overlay.text, "STAGING");
        assert_eq!(overlay.class.as_deref(), Some("banner"));
        assert_eq!(overlay.style, StyleMap::default_overlay());
    }

    #[test]
    fn test_overlay_style_merges_caller_values() {
        let config = BannerConfig::new(true)
            .with_style(StyleMap::new().with("background-color", "red"));
        let overlay = Overlay::from_config(&config).unwrap();
        assert_eq!(overlay.style.get("background-color"), Some("red"));
        assert_eq!(overlay.style.get("position"), Some("fixed"));
    }
}
