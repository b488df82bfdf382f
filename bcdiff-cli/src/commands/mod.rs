//! Command implementations for the bcdiff CLI

pub mod compare;
pub mod symbols;
