pub mod config;
pub mod effects;
pub mod env;
pub mod error;
pub mod host;
pub mod overlay;
pub mod style;

pub use config::BannerConfig;
pub use effects::{BannerEffects, EffectReport, TrackedEffect};
pub use env::AppMode;
pub use error::BannerError;
pub use host::{ConsoleLine, ConsoleSink, MemoryTitle, RecordingConsole, TitleStore};
pub use overlay::Overlay;
pub use style::StyleMap;
