//! Trust Portal - Policy Document Lifecycle
//!
//! This crate implements the policy authoring core of a multi-tenant
//! compliance backend: versioned drafting, an approval workflow, and
//! template-based policy creation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
