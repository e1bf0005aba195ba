//! Core types shared across the traitset facilities
//!
//! This crate provides the canonical schema constants used by the logging
//! facility and by tests that assert on captured events.

pub mod schema;
