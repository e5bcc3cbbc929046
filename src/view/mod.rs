//! Cell/pixel coordinate mapping.
//!
//! Two rendering surfaces share the grid but compose differently:
//!
//! - [`GridSurface`]: the schematic grid view. Rotates the grid by a
//!   90-degree multiple, then fits the rotated extent into the viewport
//!   at a fill fraction, centered.
//! - [`MapSurface`]: the background-image view. Composes pan and zoom
//!   with a fixed 90-degree base rotation of the rendering surface and an
//!   aspect-fit letterbox rectangle for the background.
//!
//! Both expose an exact inverse: for every supported rotation and every
//! in-bounds cell, forward-then-inverse round-trips to the same cell.

mod grid_surface;
mod map_surface;
mod rotation;
mod types;

pub use grid_surface::GridSurface;
pub use map_surface::MapSurface;
pub use rotation::Rotation;
pub use types::{PixelPoint, PixelRect, Viewport};
