pub mod client;
pub mod config;
pub mod feed;
pub mod imprint;
pub mod model;

#[cfg(feature = "tui")]
pub mod tui;
