//! Domain types shared by the MIAS duty roster crates.
//!
//! Holds the closed duty/prayer enumerations, the validated create input
//! for a duty record, and the domain error type.

pub mod error;
pub mod roster;
pub mod types;
