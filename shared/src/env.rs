use crate::error::BannerError;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Build/environment mode the host derives the activation flag from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AppMode {
    #[strum(to_string = "development", serialize = "dev")]
    Development,
    #[strum(to_string = "production", serialize = "prod")]
    Production,
}

impl AppMode {
    /// Reads the compile-time `APP_ENV` variable, falling back to the build profile.
    pub fn from_build() -> Self {
        Self::resolve(option_env!("APP_ENV"), cfg!(debug_assertions))
    }

    fn resolve(app_env: Option<&str>, debug_build: bool) -> Self {
        match app_env.map(Self::parse) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                log::warn!("⚠️ {}, using build profile instead", e);
                Self::from_profile(debug_build)
            }
            None => Self::from_profile(debug_build),
        }
    }

    fn from_profile(debug_build: bool) -> Self {
        if debug_build {
            AppMode::Development
        } else {
            AppMode::Production
        }
    }

    pub fn parse(value: &str) -> Result<Self, BannerError> {
        AppMode::from_str(value.trim()).map_err(|_| BannerError::UnknownMode(value.to_string()))
    }

    pub fn is_development(self) -> bool {
        self == AppMode::Development
    }
}
