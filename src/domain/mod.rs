//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, timestamps, validation errors)
//! - `payment` - Provider orders and the rules that gate generation
//! - `generation` - Generation requests and the mock result

pub mod foundation;
pub mod generation;
pub mod payment;
