// src/model/mod.rs
// Containers composing modules into whole models.

pub mod sequential;

pub use sequential::{mlp, Sequential};
