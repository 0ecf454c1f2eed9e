//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "LayerLens";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "layerlens";

/// Size of a 1u key in layout units used to normalize key placement.
///
/// Positions and sizes from the board description are divided by this value
/// to map layout units into the 0-1 render space, with the Y axis flipped
/// so the origin moves from top-left (layout space) to bottom-left
/// (render space).
pub const BASE_KEY_SIZE: f32 = 14.0;
