use crate::config::BannerConfig;
use crate::host::{ConsoleSink, TitleStore};
use crate::style::DEFAULT_CONSOLE_STYLE;

/// Inputs the title-prefixing effect is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixDeps {
    pub is_dev: bool,
    pub page_prefix: String,
    pub display_page_prefix: bool,
}

/// Inputs the console-notice effect is keyed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDeps {
    pub is_dev: bool,
    pub console_message: String,
    pub display_console_message: bool,
}

impl From<&BannerConfig> for PrefixDeps {
    fn from(config: &BannerConfig) -> Self {
        Self {
            is_dev: config.is_dev,
            page_prefix: config.page_prefix.clone(),
            display_page_prefix: config.display_page_prefix,
        }
    }
}

impl From<&BannerConfig> for NoticeDeps {
    fn from(config: &BannerConfig) -> Self {
        Self {
            is_dev: config.is_dev,
            console_message: config.console_message.clone(),
            display_console_message: config.display_console_message,
        }
    }
}

/// The prefixing guard: `None` when `current` already starts with `prefix`.
pub fn prefixed_title(current: &str, prefix: &str) -> Option<String> {
    if current.starts_with(prefix) {
        None
    } else {
        Some(format!("{} {}", prefix, current))
    }
}

/// Prepends the page prefix to the title once. Returns whether the title changed.
pub fn apply_page_prefix<T: TitleStore>(store: &mut T, deps: &PrefixDeps) -> bool {
    if !deps.is_dev || !deps.display_page_prefix {
        return false;
    }

    match prefixed_title(&store.title(), &deps.page_prefix) {
        Some(title) => {
            log::info!("🏷️ AdvisoryBanner: page title set to {:?}", title);
            store.set_title(&title);
            true
        }
        None => false,
    }
}

/// Writes the styled console notice. Returns whether anything was emitted.
pub fn emit_console_notice<C: ConsoleSink>(sink: &mut C, deps: &NoticeDeps) -> bool {
    if !deps.is_dev || !deps.display_console_message {
        return false;
    }
    sink.styled_log(&deps.console_message, DEFAULT_CONSOLE_STYLE);
    true
}

/// Runs a body only when its dependency value differs from the previous run.
#[derive(Debug, Clone)]
pub struct TrackedEffect<D> {
    last: Option<D>,
}

impl<D> Default for TrackedEffect<D> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<D: PartialEq> TrackedEffect<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `body` on the first run and whenever `deps` changed since the last run.
    pub fn run<R>(&mut self, deps: D, body: impl FnOnce(&D) -> R) -> Option<R> {
        if self.last.as_ref() == Some(&deps) {
            return None;
        }
        let result = body(&deps);
        self.last = Some(deps);
        Some(result)
    }
}

/// What one `BannerEffects::update` call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectReport {
    pub prefix_ran: bool,
    pub title_changed: bool,
    pub notice_ran: bool,
    pub notice_emitted: bool,
}

/// Both side effects of the banner, keyed on their dependency sets.
///
/// The host calls [`BannerEffects::update`] after every render pass.
#[derive(Debug, Clone, Default)]
pub struct BannerEffects {
    prefix: TrackedEffect<PrefixDeps>,
    notice: TrackedEffect<NoticeDeps>,
}

impl BannerEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<T, C>(&mut self, config: &BannerConfig, title: &mut T, console: &mut C) -> EffectReport
    where
        T: TitleStore,
        C: ConsoleSink,
    {
        let mut report = EffectReport::default();

        if let Some(changed) = self.prefix.run(PrefixDeps::from(config), |deps| {
            apply_page_prefix(title, deps)
        }) {
            report.prefix_ran = true;
            report.title_changed = changed;
        }

        if let Some(emitted) = self.notice.run(NoticeDeps::from(config), |deps| {
            emit_console_notice(console, deps)
        }) {
            report.notice_ran = true;
            report.notice_emitted = emitted;
        }

        log::debug!("AdvisoryBanner effects: {:?}", report);
        report
    }
}
