pub mod api;
pub mod config;
pub mod emotion;
pub mod inference;
pub mod logging;
pub mod manager;
pub mod pipeline;
