//! Domains module containing business logic organized by bounded contexts.
//!
//! This server only exposes tools; it has no resources or prompts.

pub mod tools;
