//! Host-side editor primitives.
//!
//! The editor integration owns the concrete mode tracking; this crate only
//! names the modes it can report so downstream crates can match on them.

/// Editor mode definitions.
pub mod mode;

pub use mode::Mode;
