//! Aliased scanline fill engine
//!
//! Binary coverage (one sample at each pixel center) fills of convex
//! polygons and arbitrary paths, colored by a flat paint or a shader and
//! merged into a premultiplied ARGB [Bitmap] with Porter-Duff compositing.
//!
//! # How does this work
//!
//! ```text
//!     canvas = Canvas( Bitmap )
//!     canvas.draw_path(path, paint)
//!       path.transform(ctm)
//!       build_path_edges()      -- flatten curves, clip to device
//!         Clip::line()           -- synthesize vertical edges off-screen
//!       fill_path()             -- winding active-edge sweep
//!         blit(span)            -- (row, x_left, x_right)
//!           shader.set_context(ctm)
//!           shader.shade_row()
//!           blend()              -- packed Porter-Duff
//! ```
//!
//! Convex polygons take `fill_convex` instead of `fill_path`, sorting the
//!   x crossings of each row rather than tracking winding.
//!
//! # Example
//!
//!     use scanfill::{Bitmap, Canvas, Color, Paint, Rect, Pixel};
//!
//!     let mut bitmap = Bitmap::new(8, 8);
//!     {
//!         let mut canvas = Canvas::new(&mut bitmap);
//!         canvas.scale(4.0, 4.0);
//!         canvas.draw_rect(Rect::from_ltrb(0.0, 0.0, 1.0, 1.0),
//!                          &Paint::new(Color::rgb(1.0, 0.0, 0.0)));
//!     }
//!     assert_eq!(bitmap.get(3, 3), Pixel(0xFFFF_0000));
//!     assert_eq!(bitmap.get(4, 4), Pixel(0));
//!

pub mod point;
pub mod color;
pub mod math;
pub mod transform;
pub mod buffer;
pub mod io;
pub mod path_storage;
pub mod curves;
pub mod clip;
pub mod edge;
pub mod scan;
pub mod raster;
pub mod blend;
pub mod shader;
pub mod bitmap_shader;
pub mod gradient;
pub mod triangle;
pub mod compose;
pub mod paint;
pub mod base;
pub mod canvas;
pub mod error;

pub use point::*;
pub use color::*;
pub use transform::*;
pub use buffer::*;
pub use path_storage::*;
pub use curves::*;
pub use clip::*;
pub use edge::*;
pub use scan::*;
pub use raster::*;
pub use blend::*;
pub use shader::*;
pub use bitmap_shader::*;
pub use gradient::*;
pub use triangle::*;
pub use compose::*;
pub use paint::*;
pub use base::*;
pub use canvas::*;
pub use error::*;

/// Access to the pixels of a raster surface
pub trait PixelData {
    /// Width in pixels
    fn width(&self) -> usize;
    /// Height in pixels
    fn height(&self) -> usize;
    /// All pixels in row-major order
    fn pixeldata(&self) -> &[Pixel];
}

/// Per-pixel color source
///
/// Lifecycle: `set_context` with the device transform of a draw, then any
///   number of `shade_row` calls for spans of that draw.
pub trait Shade {
    /// True iff every pixel this shader can produce has alpha 255
    fn is_opaque(&self) -> bool;
    /// Establish the device to shader-space mapping for `ctm`
    ///
    /// Returns false, leaving the shader unusable for this draw, when the
    ///   combined transform is singular.
    fn set_context(&self, ctm: &Transform) -> bool;
    /// Shade `row.len()` consecutive device pixels starting at (`x`,`y`)
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]);
}
