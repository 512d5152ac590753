//! Application glue module
//!
//! Configuration for the decoder and the tools built on it.

mod config;

pub use config::{ConfigError, DecoderConfig};
