//! Utility modules.

/// Date/time serialization helpers shared by the wire types.
pub mod datetime;
