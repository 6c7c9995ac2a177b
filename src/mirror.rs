//! Mirror/reflection compositing
//!
//! Stitches a surface together with flipped copies of itself to produce a
//! symmetric image: the caller draws one half (or quadrant) of a shape and
//! the compositor supplies the rest. The tricky part is the seam: with
//! `seam_overlap` set, the axis row/column appears exactly once in the
//! output instead of being doubled.

use crate::surface::Surface;
use image::imageops;
use serde::{Deserialize, Serialize};

/// A reflection axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Mirroring rule for one axis.
///
/// With `seam_overlap` set, the mirrored copy's first cell-span along the
/// axis coincides with the source's last one rather than duplicating it,
/// shrinking the combined size by one cell span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirrorAxis {
    pub seam_overlap: bool,
}

/// Which axes to mirror on; an absent axis means no mirroring there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MirrorSpec {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub x: Option<MirrorAxis>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub y: Option<MirrorAxis>,
}

impl MirrorSpec {
    /// Mirror on the x axis only.
    pub const fn x(seam_overlap: bool) -> Self {
        Self { x: Some(MirrorAxis { seam_overlap }), y: None }
    }

    /// Mirror on the y axis only.
    pub const fn y(seam_overlap: bool) -> Self {
        Self { x: None, y: Some(MirrorAxis { seam_overlap }) }
    }

    /// Mirror on both axes (quadrant symmetry).
    pub const fn both(seam_overlap_x: bool, seam_overlap_y: bool) -> Self {
        Self {
            x: Some(MirrorAxis { seam_overlap: seam_overlap_x }),
            y: Some(MirrorAxis { seam_overlap: seam_overlap_y }),
        }
    }
}

/// Produce the exact mirror image of a surface along one axis.
///
/// The result has the source's dimensions; pixel `(x, y)` of a horizontal
/// reflection equals source pixel `(width-1-x, y)`, and likewise for the
/// vertical case.
pub fn reflect(source: &Surface, axis: Axis) -> Surface {
    let flipped = match axis {
        Axis::Horizontal => imageops::flip_horizontal(source.as_image()),
        Axis::Vertical => imageops::flip_vertical(source.as_image()),
    };
    Surface::from_image(flipped)
}

/// Compose a surface with mirrored copies of itself.
///
/// With neither axis set this is the identity: the source itself is handed
/// back, no copy made. Otherwise the horizontal stage runs first (source on
/// the left, its reflection on the right), then the vertical stage runs on
/// that result (prior stage on top, its reflection below), so requesting
/// both axes yields true four-fold symmetry.
///
/// `cell_x`/`cell_y` give one grid cell's pixel span and matter only when
/// `seam_overlap` is set on the corresponding axis; zero counts as one.
///
/// # Examples
///
/// ```
/// use pixmirror::mirror::{mirror, MirrorSpec};
/// use pixmirror::surface::Surface;
///
/// let source = Surface::new(4, 3);
/// let out = mirror(source, &MirrorSpec::x(true), 2, 2);
/// assert_eq!(out.width(), 6); // 4*2 minus one 2px cell at the seam
/// assert_eq!(out.height(), 3);
/// ```
pub fn mirror(source: Surface, spec: &MirrorSpec, cell_x: u32, cell_y: u32) -> Surface {
    if spec.x.is_none() && spec.y.is_none() {
        return source;
    }

    let cell_x = cell_x.max(1);
    let cell_y = cell_y.max(1);

    let mut stage = source;
    if let Some(axis) = spec.x {
        stage = compose(&stage, Axis::Horizontal, axis, cell_x);
    }
    if let Some(axis) = spec.y {
        stage = compose(&stage, Axis::Vertical, axis, cell_y);
    }
    stage
}

/// One composition stage: source plus its reflection along `axis`.
fn compose(source: &Surface, axis: Axis, rule: MirrorAxis, cell_span: u32) -> Surface {
    let overlap = if rule.seam_overlap { cell_span } else { 0 };
    let reflection = reflect(source, axis);

    let mut dest = match axis {
        Axis::Horizontal => {
            let width = (source.width() * 2).saturating_sub(overlap);
            let mut dest = Surface::new(width, source.height());
            dest.draw(&reflection, source.width() as i64 - overlap as i64, 0);
            dest
        }
        Axis::Vertical => {
            let height = (source.height() * 2).saturating_sub(overlap);
            let mut dest = Surface::new(source.width(), height);
            dest.draw(&reflection, 0, source.height() as i64 - overlap as i64);
            dest
        }
    };

    // The original goes on last: with seam overlap the reflection's first
    // cell span lands inside the original's footprint, and the original
    // must overpaint it or the seam column shows up twice.
    dest.draw(source, 0, 0);
    dest
}
