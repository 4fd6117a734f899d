//! Utility functions shared by the codec implementations

pub mod numeric;
pub mod validation;
