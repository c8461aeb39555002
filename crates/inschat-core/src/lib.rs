//! Core InsChat client library (auth client, config, logging).

pub mod client;
pub mod config;
pub mod logging;
