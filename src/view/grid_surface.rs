//! Schematic grid rendering surface.

use crate::config::ViewConfig;
use crate::grid::Cell;
use crate::view::{PixelPoint, PixelRect, Rotation, Viewport};

/// Maps cells to pixels on the schematic grid view.
///
/// The rotated grid extent is fitted into the viewport at a fill
/// fraction (square cells, centered). Geometry is precomputed at
/// construction; rebuild the surface when the viewport or rotation
/// changes.
#[derive(Debug, Clone)]
pub struct GridSurface {
    rotation: Rotation,
    rows: usize,
    cols: usize,
    cell_size: f32,
    offset_x: f32,
    offset_y: f32,
    draw_rows: usize,
    draw_cols: usize,
}

impl GridSurface {
    /// Fit a `rows x cols` grid into `viewport` under `rotation`.
    pub fn new(
        viewport: Viewport,
        rotation: Rotation,
        rows: usize,
        cols: usize,
        config: &ViewConfig,
    ) -> Self {
        let (draw_rows, draw_cols) = rotation.rotated_extent(rows, cols);

        let cell_width = viewport.width / draw_cols as f32;
        let cell_height = viewport.height / draw_rows as f32;
        let cell_size = cell_width.min(cell_height) * config.fill_fraction;

        let grid_width = cell_size * draw_cols as f32;
        let grid_height = cell_size * draw_rows as f32;
        let offset_x = (viewport.width - grid_width) / 2.0;
        let offset_y = (viewport.height - grid_height) / 2.0;

        Self {
            rotation,
            rows,
            cols,
            cell_size,
            offset_x,
            offset_y,
            draw_rows,
            draw_cols,
        }
    }

    /// Active rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Side length of one cell in pixels.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Pixel rectangle covering a cell, for renderers.
    pub fn cell_rect(&self, cell: Cell) -> PixelRect {
        let (draw_row, draw_col) = self.rotation.to_draw(cell, self.rows, self.cols);
        PixelRect::new(
            self.offset_x + draw_col as f32 * self.cell_size,
            self.offset_y + draw_row as f32 * self.cell_size,
            self.cell_size,
            self.cell_size,
        )
    }

    /// Pixel position of a cell's center.
    pub fn cell_to_pixel(&self, cell: Cell) -> PixelPoint {
        let rect = self.cell_rect(cell);
        PixelPoint::new(
            rect.left + self.cell_size / 2.0,
            rect.top + self.cell_size / 2.0,
        )
    }

    /// Resolve a tap position to the logical cell under it.
    ///
    /// Returns `None` for taps outside the fitted grid area.
    pub fn pixel_to_cell(&self, point: PixelPoint) -> Option<Cell> {
        let x = point.x - self.offset_x;
        let y = point.y - self.offset_y;
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let draw_col = (x / self.cell_size) as usize;
        let draw_row = (y / self.cell_size) as usize;
        if draw_row >= self.draw_rows || draw_col >= self.draw_cols {
            return None;
        }

        Some(
            self.rotation
                .from_draw(draw_row, draw_col, self.rows, self.cols),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn surface(rotation: Rotation, rows: usize, cols: usize) -> GridSurface {
        GridSurface::new(
            Viewport::new(1080.0, 1920.0),
            rotation,
            rows,
            cols,
            &ViewConfig::default(),
        )
    }

    #[test]
    fn test_fit_is_centered() {
        let s = surface(Rotation::Deg0, 4, 4);
        // 4x4 grid in 1080x1920: cell = 1080/4 * 0.9 = 243
        assert_relative_eq!(s.cell_size(), 243.0);
        let center = s.cell_to_pixel(Cell::new(1, 1));
        // Grid spans 972 px, centered: offset_x = 54, offset_y = 474
        assert_relative_eq!(center.x, 54.0 + 1.5 * 243.0);
        assert_relative_eq!(center.y, 474.0 + 1.5 * 243.0);
    }

    #[test]
    fn test_round_trip_all_rotations_all_cells() {
        let (rows, cols) = (6, 9);
        for rotation in Rotation::ALL {
            let s = surface(rotation, rows, cols);
            for row in 0..rows {
                for col in 0..cols {
                    let cell = Cell::new(row, col);
                    let pixel = s.cell_to_pixel(cell);
                    assert_eq!(
                        s.pixel_to_cell(pixel),
                        Some(cell),
                        "round trip failed for {:?} under {:?}",
                        cell,
                        rotation
                    );
                }
            }
        }
    }

    #[test]
    fn test_tap_outside_grid_rejected() {
        let s = surface(Rotation::Deg0, 4, 4);
        assert_eq!(s.pixel_to_cell(PixelPoint::new(1.0, 1.0)), None);
        assert_eq!(s.pixel_to_cell(PixelPoint::new(1079.0, 1919.0)), None);
        // Inside horizontally, above the centered grid vertically
        assert_eq!(s.pixel_to_cell(PixelPoint::new(540.0, 100.0)), None);
    }

    #[test]
    fn test_cell_rect_tiles_without_overlap() {
        let s = surface(Rotation::Deg90, 3, 5);
        let a = s.cell_rect(Cell::new(0, 0));
        let b = s.cell_rect(Cell::new(1, 0));
        // Under Deg90 adjacent rows land in adjacent draw columns
        assert_relative_eq!(a.left - b.left, s.cell_size());
        assert_relative_eq!(a.top, b.top);
    }

    #[test]
    fn test_landscape_viewport() {
        let s = GridSurface::new(
            Viewport::new(1920.0, 1080.0),
            Rotation::Deg270,
            5,
            8,
            &ViewConfig::default(),
        );
        for row in 0..5 {
            for col in 0..8 {
                let cell = Cell::new(row, col);
                assert_eq!(s.pixel_to_cell(s.cell_to_pixel(cell)), Some(cell));
            }
        }
    }
}
