pub mod api;
pub mod customer;
pub mod order;
pub mod router;
