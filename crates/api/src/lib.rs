//! The Office API server library.
//!
//! Exposes the building blocks (config, state, error handling, envelopes,
//! hypermedia links, routes) so integration tests and the binary entrypoint
//! share the same router.

pub mod config;
pub mod error;
pub mod handlers;
pub mod hateoas;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
