//! Errors

use thiserror::Error;

/// Errors produced while drawing or reading and writing images
///
/// Draws that are skipped by design (a singular shader context, fewer than
///   three points, zero area) are not errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A scanline of a path fill finished with non-zero winding
    ///
    /// The edge set did not describe closed contours
    #[error("winding did not return to zero on row {row} (residual {winding})")]
    WindingImbalance { row: i32, winding: i32 },
    /// A transform that had to be inverted has a zero determinant
    #[error("singular transform")]
    SingularMatrix,
    /// Decoded image size does not match its pixel data
    #[error("image of {width}x{height} has an unexpected number of pixels")]
    ImageSize { width: u32, height: u32 },
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
