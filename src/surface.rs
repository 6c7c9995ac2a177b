//! Software pixel-buffer surface
//!
//! [`Surface`] is the one seam between the pipeline and its raster host: the
//! rasterizer and the mirror compositor only go through the operations here,
//! so swapping the backing store touches nothing else. The backing store is
//! an `image::RgbaImage`, which is all a headless pipeline needs.

use crate::color::Rgb;
use image::{Rgba, RgbaImage};

/// Transparent color used when clearing.
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

impl From<Rgb> for Rgba<u8> {
    fn from(c: Rgb) -> Self {
        Rgba([c.r, c.g, c.b, 255])
    }
}

/// An owned 2D pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Allocate a surface of the given size, all pixels transparent.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height) }
    }

    /// Wrap an existing image buffer.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
    }

    /// Fill the whole surface with a solid opaque color.
    pub fn fill(&mut self, color: Rgb) {
        let rgba = Rgba::from(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Fill a rectangle with a solid opaque color, clipped to the surface.
    pub fn fill_rect(&mut self, color: Rgb, x: u32, y: u32, w: u32, h: u32) {
        let rgba = Rgba::from(color);
        let x_end = x.saturating_add(w).min(self.image.width());
        let y_end = y.saturating_add(h).min(self.image.height());
        for py in y..y_end {
            for px in x..x_end {
                self.image.put_pixel(px, py, rgba);
            }
        }
    }

    /// Draw another surface at a signed offset, replacing pixels byte for
    /// byte (no alpha blending). Out-of-bounds regions are clipped.
    pub fn draw(&mut self, src: &Surface, x: i64, y: i64) {
        image::imageops::replace(&mut self.image, &src.image, x, y);
    }

    /// Read back one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = Surface::new(3, 2);
        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 2);
        assert_eq!(surface.pixel(2, 1), TRANSPARENT);
    }

    #[test]
    fn test_fill_covers_every_pixel() {
        let mut surface = Surface::new(4, 4);
        surface.fill(Rgb::new(10, 20, 30));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(surface.pixel(x, y), Rgba([10, 20, 30, 255]));
            }
        }
    }

    #[test]
    fn test_clear_resets_fill() {
        let mut surface = Surface::new(2, 2);
        surface.fill(Rgb::new(255, 0, 0));
        surface.clear();
        assert_eq!(surface.pixel(1, 1), TRANSPARENT);
    }

    #[test]
    fn test_fill_rect_stays_inside_bounds() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(Rgb::new(0, 255, 0), 2, 2, 10, 10);
        assert_eq!(surface.pixel(3, 3), Rgba([0, 255, 0, 255]));
        assert_eq!(surface.pixel(1, 1), TRANSPARENT);
    }

    #[test]
    fn test_fill_rect_exact_extent() {
        let mut surface = Surface::new(6, 6);
        surface.fill_rect(Rgb::new(5, 5, 5), 1, 2, 2, 3);
        assert_eq!(surface.pixel(1, 2), Rgba([5, 5, 5, 255]));
        assert_eq!(surface.pixel(2, 4), Rgba([5, 5, 5, 255]));
        assert_eq!(surface.pixel(3, 2), TRANSPARENT);
        assert_eq!(surface.pixel(1, 5), TRANSPARENT);
    }

    #[test]
    fn test_draw_replaces_not_blends() {
        let mut dest = Surface::new(2, 1);
        dest.fill(Rgb::new(255, 255, 255));

        // Source is fully transparent; replace must still overwrite
        let src = Surface::new(1, 1);
        dest.draw(&src, 1, 0);

        assert_eq!(dest.pixel(0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(dest.pixel(1, 0), TRANSPARENT);
    }

    #[test]
    fn test_draw_negative_offset_clips() {
        let mut dest = Surface::new(2, 2);
        let mut src = Surface::new(2, 2);
        src.fill(Rgb::new(9, 9, 9));
        dest.draw(&src, -1, -1);
        assert_eq!(dest.pixel(0, 0), Rgba([9, 9, 9, 255]));
        assert_eq!(dest.pixel(1, 1), TRANSPARENT);
    }
}
