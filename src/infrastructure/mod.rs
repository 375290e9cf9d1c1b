//! Infrastructure layer.
//!
//! Provides technical concerns that support the service without containing
//! domain logic.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root: store selection and the HTTP server
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
