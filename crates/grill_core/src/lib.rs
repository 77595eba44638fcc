//! Shared delivery-service domain primitives.
//!
//! This crate owns the customer/order contracts, configuration, the error
//! taxonomy and the delivery metric calculations. It excludes AWS SDK and
//! Lambda runtime concerns, which live in `grill_lambda`.

pub mod config;
pub mod contract;
pub mod delivery;
pub mod error;
pub mod records;
