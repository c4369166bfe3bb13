//! Visibility of a bounding box inside a viewport.
//!
//! Coordinates follow the browser's client-rect convention: the origin is the
//! viewport's top-left corner and `y` grows downwards.

use serde::{Deserialize, Serialize};

/// Edges of an element's bounding box, relative to the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` is visible in `viewport`.
///
/// Full visibility allows edges to touch the viewport border. Partial
/// visibility needs a horizontal and a vertical edge strictly inside the
/// viewport, so a box exactly covering the viewport is fully but not
/// partially visible.
pub fn is_visible_in_viewport(rect: &Rect, viewport: &Viewport, partially: bool) -> bool {
    if partially {
        let inside = |edge: f64, extent: f64| edge > 0.0 && edge < extent;
        (inside(rect.top, viewport.height) || inside(rect.bottom, viewport.height))
            && (inside(rect.left, viewport.width) || inside(rect.right, viewport.width))
    } else {
        rect.top >= 0.0
            && rect.left >= 0.0
            && rect.bottom <= viewport.height
            && rect.right <= viewport.width
    }
}
