// src/lib.rs

pub mod core;
pub mod loader;
pub use crate::core::engine::HoverEngine;
