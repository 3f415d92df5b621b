//! Battle board geometry: cell <-> pixel conversion for a fixed rectangular grid.

use glam::{IVec2, Vec2};
use serde::Deserialize;

/// Board extent in cells plus the pixel size of one square cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GridSpec {
    #[serde(default = "default_extent")]
    pub width: i32,
    #[serde(default = "default_extent")]
    pub height: i32,
    #[serde(default = "default_cell_size")]
    pub cell_size: i32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            cell_size: default_cell_size(),
        }
    }
}

impl GridSpec {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size <= 0 {
            return Err("Grid validation failed: cell_size must be > 0".to_string());
        }
        if self.width <= 0 || self.height <= 0 {
            return Err("Grid validation failed: width and height must be > 0".to_string());
        }
        Ok(())
    }

    /// Cell under a pixel position. Floors, so negative pixels land in negative cells.
    pub fn pixel_to_cell(&self, pixel: Vec2) -> IVec2 {
        let size = self.cell_size as f32;
        IVec2::new(
            (pixel.x / size).floor() as i32,
            (pixel.y / size).floor() as i32,
        )
    }

    /// Pixel center of a cell.
    pub fn cell_center(&self, cell: IVec2) -> Vec2 {
        let size = self.cell_size as f32;
        Vec2::new(
            cell.x as f32 * size + size / 2.0,
            cell.y as f32 * size + size / 2.0,
        )
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}

const fn default_extent() -> i32 {
    10
}

const fn default_cell_size() -> i32 {
    80
}
