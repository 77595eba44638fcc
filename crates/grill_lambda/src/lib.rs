//! AWS-oriented adapters and handlers for the delivery service.
//!
//! This crate owns runtime integration details (Lambda handlers, API Gateway
//! proxy events, DynamoDB and Amazon Location adapters). Domain contracts and
//! delivery calculations come from `grill_core`.

pub mod adapters;
pub mod handlers;
pub mod runtime;
pub mod telemetry;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
