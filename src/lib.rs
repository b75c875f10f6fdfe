// Library for tests to access modules

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod timeseries;
pub mod view;

/// Package name, baked in at build time.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package version, baked in at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
