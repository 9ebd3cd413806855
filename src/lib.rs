//! Melody Magic - Paid Song Generation Server
//!
//! This crate gates a song generation endpoint behind PayPal payment
//! verification. A request carries a PayPal order id; the order must be
//! `COMPLETED` for exactly 3.00 USD before the generated versions are returned.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
