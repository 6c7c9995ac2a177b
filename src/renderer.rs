//! Pattern rasterization to a pixel surface

use crate::color::Rgb;
use crate::pattern::Pattern;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fill color (white).
const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Default background color (black).
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Error type for rasterization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Pattern has no rows, or its first row has no cells
    #[error("invalid pattern: no rows or empty first row")]
    InvalidPattern,
}

/// Pixel dimensions of one matrix cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSize {
    pub x: u32,
    pub y: u32,
}

impl CellSize {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Uniform square cells.
    pub const fn square(size: u32) -> Self {
        Self { x: size, y: size }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

/// Fill and background colors for rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub fill: Rgb,
    pub background: Rgb,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self { fill: WHITE, background: BLACK }
    }
}

/// Rasterize a pattern into a filled surface.
///
/// The surface measures `pattern.cols * cell.x` by `pattern.rows * cell.y`
/// pixels (cell components of zero count as one). The whole surface is
/// painted `colors.background` first; each `true` cell `(i, j)` then gets a
/// `fill_rect` of `colors.fill` at `[j*cell.x, i*cell.y, cell.x, cell.y]`.
/// `false` cells are never touched after the background pass.
///
/// Identical inputs always produce pixel-identical surfaces.
///
/// # Errors
///
/// Returns [`RenderError::InvalidPattern`] when the matrix is empty or its
/// first row is empty; no partial surface is produced.
///
/// # Examples
///
/// ```
/// use pixmirror::pattern::parse_pattern;
/// use pixmirror::renderer::{render_picture, CellSize, ColorConfig};
///
/// let pattern = parse_pattern(".@!@.!");
/// let surface = render_picture(&pattern, CellSize::square(2), &ColorConfig::default()).unwrap();
/// assert_eq!(surface.width(), 4);
/// assert_eq!(surface.height(), 4);
/// ```
pub fn render_picture(
    pattern: &Pattern,
    cell: CellSize,
    colors: &ColorConfig,
) -> Result<Surface, RenderError> {
    if pattern.matrix.is_empty() || pattern.matrix[0].is_empty() {
        return Err(RenderError::InvalidPattern);
    }

    let cell_x = cell.x.max(1);
    let cell_y = cell.y.max(1);

    let width = pattern.cols as u32 * cell_x;
    let height = pattern.rows as u32 * cell_y;

    let mut surface = Surface::new(width, height);
    surface.clear();
    surface.fill(colors.background);

    for (i, row) in pattern.matrix.iter().enumerate() {
        for (j, &filled) in row.iter().enumerate() {
            if filled {
                surface.fill_rect(
                    colors.fill,
                    j as u32 * cell_x,
                    i as u32 * cell_y,
                    cell_x,
                    cell_y,
                );
            }
            // Empty cells stay background; redrawing them would be wasted work
        }
    }

    Ok(surface)
}
