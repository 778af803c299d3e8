//! Host document helpers

pub mod focus;
pub mod snapshot;
