use crate::host::{BrowserConsole, DocumentTitle};
use banner_shared::config::{
    DEFAULT_BANNER_TITLE, DEFAULT_CONSOLE_MESSAGE, DEFAULT_DISPLAY_CONSOLE_MESSAGE,
    DEFAULT_DISPLAY_PAGE_PREFIX, DEFAULT_IS_DEV, DEFAULT_PAGE_PREFIX,
};
use banner_shared::{BannerConfig, BannerEffects, Overlay, StyleMap};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct AdvisoryBannerProps {
    #[prop_or(DEFAULT_IS_DEV)]
    pub is_dev: bool,
    #[prop_or(AttrValue::Static(DEFAULT_BANNER_TITLE))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_PAGE_PREFIX))]
    pub page_prefix: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_CONSOLE_MESSAGE))]
    pub console_message: AttrValue,
    #[prop_or(DEFAULT_DISPLAY_PAGE_PREFIX)]
    pub display_page_prefix: bool,
    #[prop_or(DEFAULT_DISPLAY_CONSOLE_MESSAGE)]
    pub display_console_message: bool,
    #[prop_or_default]
    pub class: Option<AttrValue>,
    /// Merged over the default overlay style; caller values win.
    #[prop_or_default]
    pub style: StyleMap,
}

impl From<&AdvisoryBannerProps> for BannerConfig {
    fn from(props: &AdvisoryBannerProps) -> Self {
        Self {
            is_dev: props.is_dev,
            title: props.title.to_string(),
            page_prefix: props.page_prefix.to_string(),
            console_message: props.console_message.to_string(),
            display_page_prefix: props.display_page_prefix,
            display_console_message: props.display_console_message,
            class_name: props.class.as_ref().map(|c| c.to_string()),
            style: props.style.clone(),
        }
    }
}

impl From<BannerConfig> for AdvisoryBannerProps {
    fn from(config: BannerConfig) -> Self {
        Self {
            is_dev: config.is_dev,
            title: config.title.into(),
            page_prefix: config.page_prefix.into(),
            console_message: config.console_message.into(),
            display_page_prefix: config.display_page_prefix,
            display_console_message: config.display_console_message,
            class: config.class_name.map(AttrValue::from),
            style: config.style,
        }
    }
}

/// Fixed banner across the top of the page while `is_dev` is set.
///
/// After each render the title-prefix and console-notice effects are
/// re-evaluated; each one only fires when its own inputs changed.
#[function_component(AdvisoryBanner)]
pub fn advisory_banner(props: &AdvisoryBannerProps) -> Html {
    let config = BannerConfig::from(props);
    let effects = use_mut_ref(BannerEffects::new);

    {
        let config = config.clone();
        use_effect(move || {
            effects
                .borrow_mut()
                .update(&config, &mut DocumentTitle, &mut BrowserConsole);
        });
    }

    match Overlay::from_config(&config) {
        Some(overlay) => html! {
            <div class={overlay.class} style={overlay.style.to_string()}>
                { overlay.text }
            </div>
        },
        None => html! {},
    }
}
