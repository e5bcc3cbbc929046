//! Background-image rendering surface with pan and zoom.
//!
//! The background floor plan is authored in the other orientation than
//! the grid, so the rendering surface carries a fixed base rotation:
//! rotate 90 degrees, then translate by the viewport's own width. The
//! background is aspect-fitted (letterboxed) into that rotated surface,
//! and the whole composition is panned and zoomed by gestures.
//!
//! The inverse pipeline undoes the exact same composition in reverse
//! order: unapply pan and zoom, unapply the base rotation, locate the
//! point inside the letterbox rectangle, then divide by per-cell size.

use crate::config::ViewConfig;
use crate::grid::Cell;
use crate::view::{PixelPoint, PixelRect, Viewport};

/// Maps cells to pixels over an aspect-fitted background image.
#[derive(Debug, Clone)]
pub struct MapSurface {
    viewport: Viewport,
    background_width: f32,
    background_height: f32,
    rows: usize,
    cols: usize,
    zoom: f32,
    pan_x: f32,
    pan_y: f32,
    min_zoom: f32,
    max_zoom: f32,
}

impl MapSurface {
    /// Create a surface for a `rows x cols` grid drawn over a background
    /// image of the given pixel dimensions.
    pub fn new(
        viewport: Viewport,
        background_width: f32,
        background_height: f32,
        rows: usize,
        cols: usize,
        config: &ViewConfig,
    ) -> Self {
        Self {
            viewport,
            background_width,
            background_height,
            rows,
            cols,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
        }
    }

    /// Current zoom scale.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current pan offset.
    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    /// Apply a pinch gesture's incremental scale factor, clamped into the
    /// configured zoom range.
    pub fn pinch(&mut self, scale_delta: f32) {
        self.set_zoom(self.zoom * scale_delta);
    }

    /// Set the zoom scale directly, clamped into the configured range.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Set the pan offset.
    pub fn set_pan(&mut self, x: f32, y: f32) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// The aspect-fit letterbox rectangle of the background within the
    /// rotated surface, centered on the long axis.
    ///
    /// The rotated surface spans `viewport.height` horizontally and
    /// `viewport.width` vertically.
    pub fn letterbox_rect(&self) -> PixelRect {
        let surface_width = self.viewport.height;
        let surface_height = self.viewport.width;

        let view_aspect = self.viewport.height / self.viewport.width;
        let bmp_aspect = self.background_width / self.background_height;

        if bmp_aspect > view_aspect {
            let scaled_height = surface_width / bmp_aspect;
            let top = (surface_height - scaled_height) / 2.0;
            PixelRect::new(0.0, top, surface_width, scaled_height)
        } else {
            let scaled_width = surface_height * bmp_aspect;
            let left = (surface_width - scaled_width) / 2.0;
            PixelRect::new(left, 0.0, scaled_width, surface_height)
        }
    }

    /// Pixel position of a cell's center on screen.
    pub fn cell_to_pixel(&self, cell: Cell) -> PixelPoint {
        let rect = self.letterbox_rect();
        let cell_width = rect.width / self.cols as f32;
        let cell_height = rect.height / self.rows as f32;

        // Point in the rotated surface
        let x = rect.left + (cell.col as f32 + 0.5) * cell_width;
        let y = rect.top + (cell.row as f32 + 0.5) * cell_height;

        // Base rotation: rotate 90 degrees, translate by viewport width
        let screen_x = self.viewport.width - y;
        let screen_y = x;

        PixelPoint::new(
            self.pan_x + self.zoom * screen_x,
            self.pan_y + self.zoom * screen_y,
        )
    }

    /// Resolve a tap position to the logical cell under it.
    ///
    /// Returns `None` for taps outside the letterboxed background or
    /// outside the grid.
    pub fn pixel_to_cell(&self, point: PixelPoint) -> Option<Cell> {
        // Unapply pan and zoom
        let px = (point.x - self.pan_x) / self.zoom;
        let py = (point.y - self.pan_y) / self.zoom;

        // Unapply the base rotation
        let rotated = PixelPoint::new(py, self.viewport.width - px);

        let rect = self.letterbox_rect();
        if !rect.contains(rotated) {
            return None;
        }

        let col = ((rotated.x - rect.left) / rect.width * self.cols as f32) as usize;
        let row = ((rotated.y - rect.top) / rect.height * self.rows as f32) as usize;
        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(Cell::new(row, col))
    }
}
