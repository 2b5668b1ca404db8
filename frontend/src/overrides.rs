use banner_shared::{AppMode, BannerConfig};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

/// LocalStorage key holding a JSON `BannerConfig` override document.
pub const OVERRIDES_KEY: &str = "advisory_banner";

/// Reads banner overrides from LocalStorage, falling back to defaults.
pub fn load_overrides() -> BannerConfig {
    match LocalStorage::get::<BannerConfig>(OVERRIDES_KEY) {
        Ok(config) => {
            log::info!("🔧 AdvisoryBanner: loaded overrides from `{}`", OVERRIDES_KEY);
            config
        }
        Err(StorageError::KeyNotFound(_)) => BannerConfig::default(),
        Err(e) => {
            log::warn!("⚠️ AdvisoryBanner: ignoring invalid overrides: {:?}", e);
            BannerConfig::default()
        }
    }
}

/// Final banner config for the page: stored overrides, activated by the build mode only.
pub fn resolve_config(mode: AppMode, overrides: BannerConfig) -> BannerConfig {
    BannerConfig {
        is_dev: mode.is_development(),
        ..overrides
    }
}
