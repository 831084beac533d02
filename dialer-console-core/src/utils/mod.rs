//! Utility module

pub mod validation;
