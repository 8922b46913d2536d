//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating validation,
//! aggregation, and the outbound collaborator calls. Services consume gateway
//! traits and provide a clean API for callers.
//!
//! # Available Services
//!
//! - [`services::purchase_service::TicketPurchaseService`] - Purchase validation and execution

pub mod services;
