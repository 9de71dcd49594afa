//! # IO Module
//!
//! The adapter layer between HTTP clients and the domain services.
//!
//! Requests arrive as the DTOs defined in `shared`, are mapped to domain
//! commands, and domain results are mapped back to response DTOs. Domain
//! errors are translated to HTTP status codes here and nowhere else.

pub mod rest;
