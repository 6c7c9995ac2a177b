//! Pixmirror - procedural generation of symmetric pixel-art sprites
//!
//! This library provides functionality to:
//! - Parse compact text patterns into boolean occupancy matrices
//! - Rasterize a pattern into a pixel surface under a color configuration
//! - Composite a surface with mirrored copies of itself, with seam-overlap
//!   control, for two-fold or four-fold (quadrant) symmetry
//! - Generate related color pairs from a caller-seeded PRNG

pub mod color;
pub mod mirror;
pub mod pattern;
pub mod renderer;
pub mod rng;
pub mod surface;
