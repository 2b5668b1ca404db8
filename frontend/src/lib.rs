pub mod components;
pub mod host;
pub mod overrides;

pub use components::advisory_banner::{AdvisoryBanner, AdvisoryBannerProps};
pub use host::{BrowserConsole, DocumentTitle};
