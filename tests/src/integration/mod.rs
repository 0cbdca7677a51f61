//! Cross-crate integration scenarios.

pub mod end_to_end;
pub mod wire;
