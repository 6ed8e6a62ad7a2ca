//! Command handlers.
//!
//! Each command is implemented in its own module and exposes
//! a single `execute` function.

pub mod decode;
pub mod version;
