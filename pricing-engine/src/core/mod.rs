//! Core - engine configuration

pub mod config;

pub use config::{DEFAULT_TAX_RATE, DEFAULT_TIMEZONE, DEFAULT_ZONE, PricingConfig};
