//! Payment domain module.
//!
//! Read-only view of provider orders and the rules an order must satisfy
//! before a song may be generated.
//!
//! # Module Structure
//!
//! - `order` - Order, status and amount value objects
//! - `requirement` - Status and price rules
//! - `errors` - Verification failure kinds

mod errors;
mod order;
mod requirement;

pub use errors::VerificationError;
pub use order::{Money, Order, OrderStatus, PurchaseUnit};
pub use requirement::{PaymentRequirement, SONG_PRICE_CURRENCY, SONG_PRICE_VALUE};
