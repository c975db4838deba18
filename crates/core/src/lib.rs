//! Domain layer for The Office API.
//!
//! Holds the static episode dataset, the read-only [`catalog::EpisodeCatalog`]
//! query service, range validation shared by every maturity level, and the
//! health check service. This crate has no HTTP dependencies; the `api` crate
//! turns its results into responses.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod health;
pub mod maturity;
pub mod types;
pub mod validation;
