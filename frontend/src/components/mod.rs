pub mod advisory_banner;
