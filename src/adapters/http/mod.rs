//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module; `router` assembles them.

pub mod generation;
pub mod health;
pub mod router;

// Re-export key types for convenience
pub use generation::GenerationAppState;
pub use generation::generation_routes;
pub use health::health_routes;
pub use router::app_router;
