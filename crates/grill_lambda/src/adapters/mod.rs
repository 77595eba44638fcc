pub mod dynamodb;
pub mod geocoder;
pub mod location;
pub mod record_store;
pub mod route_calculator;

use std::future::Future;

/// Drives an AWS SDK future from a synchronous port method. Requires the
/// multi-thread Tokio runtime the Lambda binaries start.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
