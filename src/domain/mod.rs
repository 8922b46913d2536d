//! Domain layer containing business entities and collaborator contracts.
//!
//! This module implements the core domain model following Clean Architecture
//! principles. It defines entities and outbound gateway interfaces independent
//! of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`gateways`] - Outbound collaborator trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod gateways;
