// src/core/tooltip.rs
use crate::core::types::{Rect, Viewport};

/// Style-hook class added to every bound anchor.
pub const TOOLTIP_CLASS: &str = "glossary-tooltip";

/// Vertical gap between the tooltip's bottom edge and the anchor, in px.
const MARGIN: f64 = 10.0;
/// Rendered line height in px, approximating the stylesheet's 0.68rem
/// font at line-height 1.5.
const LINE_HEIGHT: f64 = 16.0;
/// Top plus bottom padding from the stylesheet, in px.
const VERTICAL_PADDING: f64 = 20.0;

/// Absolute page position of the tooltip's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// The two states of the shared tooltip. Content and position always
/// belong to the most recently entered bound anchor.
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible { content: String, position: Position },
}

/// The singleton tooltip. Created once at startup, then repopulated and
/// repositioned for whichever anchor is currently hovered; at most one is
/// ever visible. Lives until page teardown, so there is no reset.
pub struct Tooltip {
    state: TooltipState,
}

impl Tooltip {
    pub fn new() -> Self {
        Self {
            state: TooltipState::Hidden,
        }
    }

    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    /// Estimated rendered height for the given content, the headless
    /// stand-in for reading `offsetHeight` after populating the element.
    pub fn measure_height(content: &str) -> f64 {
        let lines = content.lines().count().max(1) as f64;
        lines * LINE_HEIGHT + VERTICAL_PADDING
    }

    /// Pointer-enter transition: repopulate the tooltip and place it
    /// directly above the anchor's bounding box, left edges aligned,
    /// accounting for the current scroll offsets.
    pub fn show(&mut self, content: &str, anchor: Rect, viewport: Viewport) {
        let height = Self::measure_height(content);
        let position = Position {
            top: anchor.top + viewport.scroll_y - height - MARGIN,
            left: anchor.left + viewport.scroll_x,
        };
        self.state = TooltipState::Visible {
            content: content.to_string(),
            position,
        };
    }

    /// Pointer-leave transition.
    pub fn hide(&mut self) {
        self.state = TooltipState::Hidden;
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

/// The stylesheet block an embedder injects into the document head: the
/// tooltip element itself plus the cursor hint on bound anchors.
pub fn stylesheet() -> String {
    format!(
        r#"#glossary-tooltip {{
  display: none;
  position: absolute;
  background: rgba(0, 0, 0, 0.9);
  color: white;
  padding: 10px 12px;
  font-size: 0.68rem;
  line-height: 1.5;
  max-width: 320px;
  white-space: pre-line;
  border-radius: 6px;
  box-shadow: 0 4px 10px rgba(0,0,0,0.4);
  z-index: 1000;
  pointer-events: none;
}}

.{TOOLTIP_CLASS} {{
  cursor: help;
}}
"#
    )
}
