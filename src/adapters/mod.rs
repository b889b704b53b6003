//! Adapters - concrete implementations of the ports.

pub mod document;
pub mod postgres;
