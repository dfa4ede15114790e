// src/core/mod.rs

pub mod engine;
pub mod markdown;
pub mod slug;
pub mod tooltip;
pub mod types;
