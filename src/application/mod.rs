//! Application layer - one command handler per public operation.

pub mod handlers;
