//! Color pair generation and hex encoding
//!
//! Produces a vivid base color and a related, contrasting companion from a
//! caller-seeded [`Rng`], for use as background/foreground of a sprite.

use crate::rng::Rng;
use serde::{Deserialize, Serialize};

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Generate a vivid color biased toward the `[min, max]` range.
///
/// All three channels start at `min`; one of six symmetric combinations is
/// chosen uniformly, setting one channel to `max` and another to a uniform
/// value in `[0, max]`. Reversed bounds degrade without panicking.
pub fn generate_color(rng: &mut Rng, min: u8, max: u8) -> Rgb {
    let mut r = min;
    let mut g = min;
    let mut b = min;

    match rng.range_u8(1, 6) {
        1 => {
            r = max;
            g = rng.range_u8(0, max);
        }
        2 => {
            r = max;
            b = rng.range_u8(0, max);
        }
        3 => {
            g = max;
            r = rng.range_u8(0, max);
        }
        4 => {
            g = max;
            b = rng.range_u8(0, max);
        }
        5 => {
            b = max;
            r = rng.range_u8(0, max);
        }
        _ => {
            b = max;
            g = rng.range_u8(0, max);
        }
    }

    Rgb { r, g, b }
}

/// Derive a color related to but distinguishable from `base`.
///
/// Channels equal to the base's maximum move up by `max_up`, channels equal
/// to its minimum by `min_up`, and any remaining channel by the integer
/// average of the two. Additions saturate at 255.
///
/// # Examples
///
/// ```
/// use pixmirror::color::{generate_related_color, Rgb};
///
/// let base = Rgb::new(0, 50, 0);
/// let related = generate_related_color(base, 10, 50);
/// assert_eq!(related, Rgb::new(10, 100, 10));
/// ```
pub fn generate_related_color(base: Rgb, min_up: u8, max_up: u8) -> Rgb {
    let mid_up = ((min_up as u16 + max_up as u16) / 2) as u8;
    let lo = base.r.min(base.g).min(base.b);
    let hi = base.r.max(base.g).max(base.b);

    let bump = |c: u8| {
        // Max wins when all channels are equal
        if c == hi {
            c.saturating_add(max_up)
        } else if c == lo {
            c.saturating_add(min_up)
        } else {
            c.saturating_add(mid_up)
        }
    };

    Rgb { r: bump(base.r), g: bump(base.g), b: bump(base.b) }
}

/// Render a color as a `#rrggbb` hex string, each channel zero-padded.
///
/// # Examples
///
/// ```
/// use pixmirror::color::{to_hex, Rgb};
///
/// assert_eq!(to_hex(Rgb::new(255, 7, 0)), "#ff0700");
/// ```
pub fn to_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_color_shape() {
        let mut rng = Rng::new(99);
        for _ in 0..200 {
            let c = generate_color(&mut rng, 0, 50);
            let channels = [c.r, c.g, c.b];
            // Exactly one channel pinned at max
            assert!(channels.contains(&50));
            assert!(channels.iter().all(|&v| v <= 50));
        }
    }

    #[test]
    fn test_generate_color_deterministic_per_seed() {
        let mut a = Rng::new(3);
        let mut b = Rng::new(3);
        for _ in 0..16 {
            assert_eq!(generate_color(&mut a, 0, 200), generate_color(&mut b, 0, 200));
        }
    }

    #[test]
    fn test_generate_color_reversed_bounds_degrade() {
        let mut rng = Rng::new(5);
        // min > max: degenerate but must not panic
        let c = generate_color(&mut rng, 200, 100);
        let channels = [c.r, c.g, c.b];
        assert!(channels.contains(&100));
    }

    #[test]
    fn test_related_color_moves_every_channel() {
        let related = generate_related_color(Rgb::new(0, 50, 0), 10, 50);
        assert_eq!(related, Rgb::new(10, 100, 10));
    }

    #[test]
    fn test_related_color_middle_channel_gets_average() {
        let related = generate_related_color(Rgb::new(0, 20, 60), 10, 30);
        assert_eq!(related.r, 10); // min channel
        assert_eq!(related.g, 40); // middle channel, +20
        assert_eq!(related.b, 90); // max channel
    }

    #[test]
    fn test_related_color_uniform_base() {
        // All channels equal: every channel counts as the max
        let related = generate_related_color(Rgb::new(30, 30, 30), 10, 50);
        assert_eq!(related, Rgb::new(80, 80, 80));
    }

    #[test]
    fn test_related_color_saturates() {
        let related = generate_related_color(Rgb::new(250, 250, 250), 10, 50);
        assert_eq!(related, Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_to_hex_zero_padded() {
        assert_eq!(to_hex(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(to_hex(Rgb::new(1, 15, 16)), "#010f10");
        assert_eq!(to_hex(Rgb::new(255, 255, 255)), "#ffffff");
    }

    #[test]
    fn test_rgb_serde_roundtrip() {
        let color = Rgb::new(12, 200, 1);
        let json = serde_json::to_string(&color).unwrap();
        let parsed: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(color, parsed);
    }
}
