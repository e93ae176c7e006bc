//! Restaurant menu API server library.
//!
//! Exposes the building blocks (config, state, error handling, service,
//! routes) so integration tests and the binary entrypoint can both access
//! them.

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod mapper;
pub mod query;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
