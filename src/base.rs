//! Rendering Base
//!
//! Writes spans into a [Bitmap], either a single color or the output of a
//!   shader, composited with the paint's blend mode.

use crate::blend::{BlendMode, blend_hline, blend_row};
use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::paint::Paint;
use crate::scan::Span;
use crate::transform::Transform;
use crate::Shade;

/// Rendering Base
#[derive(Debug)]
pub struct RenderingBase<'a> {
    pub bitmap: &'a mut Bitmap,
    /// Shader output for the current span
    scratch: Vec<Pixel>,
}

impl<'a> RenderingBase<'a> {
    pub fn new(bitmap: &'a mut Bitmap) -> Self {
        Self { bitmap, scratch: vec![] }
    }
    /// Set every pixel to `p`
    pub fn clear(&mut self, p: Pixel) {
        self.bitmap.fill(p);
    }
    /// Inclusive pixel limits, (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i32, i32, i32, i32) {
        let w = self.bitmap.width() as i32;
        let h = self.bitmap.height() as i32;
        (0, w - 1, 0, h - 1)
    }
    /// Limit a span to the bitmap, None if nothing is left
    fn clip(&self, span: Span) -> Option<Span> {
        let (_, _, ymin, ymax) = self.limits();
        if span.y < ymin || span.y > ymax {
            return None;
        }
        let s = span.clamp(self.bitmap.width());
        if s.is_empty() { None } else { Some(s) }
    }
    /// Composite a single pixel value across a span
    pub fn blend_hline(&mut self, span: Span, p: Pixel, mode: BlendMode) {
        if let Some(s) = self.clip(span) {
            let row = self.bitmap.row_mut(s.y as usize);
            blend_hline(p, &mut row[s.x0 as usize .. s.x1 as usize], mode);
        }
    }
    /// Composite a row of pixels starting at (`x`,`y`)
    pub fn blend_color_hspan(&mut self, x: i32, y: i32, colors: &[Pixel], mode: BlendMode) {
        let span = Span::new(y, x, x + colors.len() as i32);
        if let Some(s) = self.clip(span) {
            let off = (s.x0 - x) as usize;
            let row = self.bitmap.row_mut(s.y as usize);
            blend_row(&colors[off .. off + s.len()], &mut row[s.x0 as usize .. s.x1 as usize], mode);
        }
    }
    /// Copy a row of pixels starting at (`x`,`y`)
    pub fn copy_color_hspan(&mut self, x: i32, y: i32, colors: &[Pixel]) {
        self.blend_color_hspan(x, y, colors, BlendMode::Src);
    }
    /// Fill a span with `paint`, shaders are mapped through `ctm`
    ///
    /// Shader output is copied rather than composited when the shader is
    ///   opaque and the blend mode is `SrcOver` or `Src`. A span is skipped
    ///   if the shader's transform is singular.
    pub fn blit(&mut self, span: Span, paint: &Paint, ctm: &Transform) {
        let s = match self.clip(span) {
            Some(s) => s,
            None => return,
        };
        let mode = paint.get_blend_mode();
        let shader = match paint.get_shader() {
            None => {
                let p = Pixel::from(paint.get_color().pin_to_unit());
                self.blend_hline(s, p, mode);
                return;
            },
            Some(shader) => shader,
        };
        if !shader.set_context(ctm) {
            log::debug!("singular shader transform, span at row {} skipped", s.y);
            return;
        }
        let mut buf = std::mem::take(&mut self.scratch);
        buf.clear();
        buf.resize(s.len(), Pixel(0));
        shader.shade_row(s.x0, s.y, &mut buf);
        let mode = match mode {
            BlendMode::SrcOver if shader.is_opaque() => BlendMode::Src,
            m => m,
        };
        self.blend_color_hspan(s.x0, s.y, &buf, mode);
        self.scratch = buf;
    }
}
