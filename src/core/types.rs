// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The glossary lookup table: normalized slug -> raw Markdown-flavored
/// definition. Loaded once per session and never mutated afterwards.
pub type GlossaryMap = HashMap<String, String>;

/// On-screen bounding box of an anchor, viewport-relative, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Current page scroll offsets at the time of a pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_x: f64,
    pub scroll_y: f64,
}

/// An in-page link as the binder sees it: the hyperlink reference plus
/// where the element currently sits on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anchor {
    pub href: String,
    pub rect: Rect,
}

/// An anchor the binder accepted: the anchor itself, the slug derived
/// from its fragment, and its definition already stripped of Markdown.
#[derive(Debug, Clone)]
pub struct AnchorBinding {
    pub anchor: Anchor,
    pub slug: String,
    pub definition: String,
}
