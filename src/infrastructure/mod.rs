//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete stand-ins for the third-party payment and seat booking providers.
//!
//! # Modules
//!
//! - [`gateways`] - In-process gateway implementations

pub mod gateways;
