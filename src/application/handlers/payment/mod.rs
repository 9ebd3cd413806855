//! Payment handlers.
//!
//! ## Commands
//! - Verifying that a provider order was paid in full

mod verify_order;

pub use verify_order::{VerifiedOrder, VerifyOrderCommand, VerifyOrderHandler};
