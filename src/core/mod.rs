//! Core business logic for JWT inspection.
//!
//! This module contains the domain logic separated from CLI and
//! terminal concerns. All types and functions here are testable
//! without the CLI layer.

pub mod decoder;
pub mod expiry;
pub mod time_travel;
pub mod timestamps;
