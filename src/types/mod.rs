//! Core types for Voxform.

pub mod generation;
pub mod voice;

pub use generation::*;
pub use voice::*;
