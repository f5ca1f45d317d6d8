//! Configuration loading and management for the allocation engine.
//!
//! Billing conventions (rounding scales, default split method) are loaded
//! from a YAML file at startup and shared with every request handler.
//!
//! # Example
//!
//! ```no_run
//! use billing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/billing.yaml").unwrap();
//! println!("Amount scale: {}", config.billing().rounding_scale);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::BillingConfig;
