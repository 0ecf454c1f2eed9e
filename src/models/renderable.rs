//! Renderable key descriptors handed to the rendering collaborator.

use serde::Serialize;

use crate::constants::BASE_KEY_SIZE;
use crate::models::KeyGeometry;

/// A single key ready for rendering: resolved label plus normalized
/// placement in 0-1 render space.
///
/// # Coordinate conversion
///
/// Layout space has its origin at the top-left with Y growing downward;
/// render space has its origin at the bottom-left with Y growing upward.
/// Division by [`BASE_KEY_SIZE`] maps layout units to the 0-1 range:
///
/// - `norm_x = x / BASE`
/// - `norm_y = 1 - (y + h) / BASE`
/// - `norm_w = w / BASE`
/// - `norm_h = h / BASE`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableKey {
    /// Display label (may span two lines for modifier-wrapped keys, or be
    /// empty for a blank key).
    pub label: String,
    /// Normalized X position.
    pub norm_x: f32,
    /// Normalized Y position (bottom-left origin).
    pub norm_y: f32,
    /// Normalized width.
    pub norm_w: f32,
    /// Normalized height.
    pub norm_h: f32,
}

impl RenderableKey {
    /// Builds a renderable key from a geometry key and a resolved label.
    #[must_use]
    pub fn from_geometry(geometry: &KeyGeometry, label: String) -> Self {
        Self {
            label,
            norm_x: geometry.x / BASE_KEY_SIZE,
            norm_y: 1.0 - (geometry.y + geometry.h) / BASE_KEY_SIZE,
            norm_w: geometry.w / BASE_KEY_SIZE,
            norm_h: geometry.h / BASE_KEY_SIZE,
        }
    }
}
