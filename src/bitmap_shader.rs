//! Bitmap Shader

use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::math::floor_to_int;
use crate::shader::{Context, TileMode, span_start, span_step};
use crate::transform::Transform;
use crate::Shade;

/// Sample a Bitmap, nearest pixel
///
/// `local` maps bitmap pixel coordinates into paint space
#[derive(Debug,Clone)]
pub struct BitmapShader {
    bitmap: Bitmap,
    local: Transform,
    tile: TileMode,
    opaque: bool,
    ctx: Context,
}

impl BitmapShader {
    /// None for an empty bitmap
    pub fn new(bitmap: Bitmap, local: Transform, tile: TileMode) -> Option<Self> {
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return None;
        }
        let opaque = bitmap.is_opaque();
        Some(Self { bitmap, local, tile, opaque, ctx: Context::default() })
    }
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
    pub fn tile_mode(&self) -> TileMode {
        self.tile
    }
    /// Pixel index for coordinate `v` along a side of `n` pixels
    fn index(&self, v: f32, n: usize) -> usize {
        let i = match self.tile {
            TileMode::Clamp => floor_to_int(v),
            _ => floor_to_int(self.tile.tile(v / n as f32) * n as f32),
        };
        i.max(0).min(n as i32 - 1) as usize
    }
}

impl Shade for BitmapShader {
    fn is_opaque(&self) -> bool {
        self.opaque
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.ctx.set(ctm, &self.local)
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let inv = match self.ctx.get() {
            Some(inv) => inv,
            None => return,
        };
        let (w, h) = (self.bitmap.width(), self.bitmap.height());
        let mut p = span_start(&inv, x, y);
        let dp = span_step(&inv);
        for px in row.iter_mut() {
            *px = self.bitmap.get(self.index(p.x, w), self.index(p.y, h));
            p = p + dp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Bitmap {
        let mut bm = Bitmap::new(2, 2);
        bm.set(0, 0, Pixel(0xFFFF_0000));
        bm.set(1, 0, Pixel(0xFF00_FF00));
        bm.set(0, 1, Pixel(0xFF00_00FF));
        bm.set(1, 1, Pixel(0xFFFF_FFFF));
        bm
    }
    fn row(s: &BitmapShader, x: i32, y: i32, n: usize) -> Vec<Pixel> {
        let mut r = vec![Pixel(0); n];
        s.shade_row(x, y, &mut r);
        r
    }
    const R: Pixel = Pixel(0xFFFF_0000);
    const G: Pixel = Pixel(0xFF00_FF00);

    #[test]
    fn empty_bitmap() {
        assert!(BitmapShader::new(Bitmap::new(0, 3), Transform::new(), TileMode::Clamp).is_none());
    }

    #[test]
    fn identity_copies_pixels() {
        let s = BitmapShader::new(checker(), Transform::new(), TileMode::Clamp).unwrap();
        assert!(s.is_opaque());
        assert!(s.set_context(&Transform::new()));
        assert_eq!(row(&s, 0, 0, 2), vec![R, G]);
        assert_eq!(row(&s, 0, 1, 2), vec![Pixel(0xFF00_00FF), Pixel(0xFFFF_FFFF)]);
    }

    #[test]
    fn clamp_repeat_mirror() {
        let c = BitmapShader::new(checker(), Transform::new(), TileMode::Clamp).unwrap();
        let r = BitmapShader::new(checker(), Transform::new(), TileMode::Repeat).unwrap();
        let m = BitmapShader::new(checker(), Transform::new(), TileMode::Mirror).unwrap();
        for s in &[&c, &r, &m] {
            assert!(s.set_context(&Transform::new()));
        }
        assert_eq!(row(&c, -2, 0, 6), vec![R, R, R, G, G, G]);
        assert_eq!(row(&r, -2, 0, 6), vec![R, G, R, G, R, G]);
        assert_eq!(row(&m, -2, 0, 6), vec![G, R, R, G, G, R]);
    }

    #[test]
    fn scaled() {
        let s = BitmapShader::new(checker(), Transform::new_scale(2.0, 2.0), TileMode::Clamp).unwrap();
        assert!(s.set_context(&Transform::new()));
        assert_eq!(row(&s, 0, 0, 4), vec![R, R, G, G]);
        assert!(!s.set_context(&Transform::new_scale(0.0, 1.0)));
    }

    #[test]
    fn translucent_bitmap() {
        let mut bm = checker();
        bm.set(1, 1, Pixel(0x8080_8080));
        let s = BitmapShader::new(bm, Transform::new(), TileMode::Clamp).unwrap();
        assert!(!s.is_opaque());
    }
}
