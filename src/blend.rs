//! Porter-Duff Compositing
//!
//! All arithmetic is on packed premultiplied [Pixel]s; each mode is a sum of
//!   the source and destination scaled by the other's alpha or its inverse.

use crate::color::Pixel;
use crate::math::quad_mul_div255;

/// Compositing operation
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum BlendMode {
    /// 0
    Clear,
    /// S
    Src,
    /// D
    Dst,
    /// S + (1 - Sa) D
    SrcOver,
    /// D + (1 - Da) S
    DstOver,
    /// Da S
    SrcIn,
    /// Sa D
    DstIn,
    /// (1 - Da) S
    SrcOut,
    /// (1 - Sa) D
    DstOut,
    /// Da S + (1 - Sa) D
    SrcATop,
    /// Sa D + (1 - Da) S
    DstATop,
    /// (1 - Da) S + (1 - Sa) D
    Xor,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SrcOver
    }
}

impl BlendMode {
    /// All modes
    pub const ALL: [BlendMode; 12] = [
        BlendMode::Clear, BlendMode::Src, BlendMode::Dst,
        BlendMode::SrcOver, BlendMode::DstOver,
        BlendMode::SrcIn, BlendMode::DstIn,
        BlendMode::SrcOut, BlendMode::DstOut,
        BlendMode::SrcATop, BlendMode::DstATop,
        BlendMode::Xor,
    ];
}

fn src_in(src: Pixel, dst: Pixel) -> u32 {
    quad_mul_div255(src.0, dst.a())
}
fn dst_in(src: Pixel, dst: Pixel) -> u32 {
    quad_mul_div255(dst.0, src.a())
}
fn src_out(src: Pixel, dst: Pixel) -> u32 {
    quad_mul_div255(src.0, 255 - dst.a())
}
fn dst_out(src: Pixel, dst: Pixel) -> u32 {
    quad_mul_div255(dst.0, 255 - src.a())
}

/// Composite `src` onto `dst`
///
///     use scanfill::{blend, BlendMode, Pixel};
///     let red = Pixel(0xFFFF_0000);
///     let blue = Pixel(0xFF00_00FF);
///     assert_eq!(blend(red, blue, BlendMode::SrcOver), red);
///     assert_eq!(blend(red, blue, BlendMode::DstOver), blue);
///     assert_eq!(blend(red, blue, BlendMode::Clear), Pixel(0));
pub fn blend(src: Pixel, dst: Pixel, mode: BlendMode) -> Pixel {
    let v = match mode {
        BlendMode::Clear   => 0,
        BlendMode::Src     => src.0,
        BlendMode::Dst     => dst.0,
        BlendMode::SrcOver => src.0.wrapping_add(dst_out(src, dst)),
        BlendMode::DstOver => dst.0.wrapping_add(src_out(src, dst)),
        BlendMode::SrcIn   => src_in(src, dst),
        BlendMode::DstIn   => dst_in(src, dst),
        BlendMode::SrcOut  => src_out(src, dst),
        BlendMode::DstOut  => dst_out(src, dst),
        BlendMode::SrcATop => src_in(src, dst).wrapping_add(dst_out(src, dst)),
        BlendMode::DstATop => dst_in(src, dst).wrapping_add(src_out(src, dst)),
        BlendMode::Xor     => src_out(src, dst).wrapping_add(dst_out(src, dst)),
    };
    Pixel(v)
}

/// Composite a row of `src` onto `dst`
pub fn blend_row(src: &[Pixel], dst: &mut [Pixel], mode: BlendMode) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d = blend(*s, *d, mode);
    }
}

/// Composite a single `src` across a row of `dst`
pub fn blend_hline(src: Pixel, dst: &mut [Pixel], mode: BlendMode) {
    match mode {
        BlendMode::Src => dst.iter_mut().for_each(|d| *d = src),
        BlendMode::SrcOver if src.a() == 255 => dst.iter_mut().for_each(|d| *d = src),
        BlendMode::Dst => {},
        _ => dst.iter_mut().for_each(|d| *d = blend(src, *d, mode)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premul(a: u32, r: u32, g: u32, b: u32) -> Pixel {
        let s = |v: u32| v * a / 255;
        Pixel::pack_argb(a, s(r), s(g), s(b))
    }

    #[test]
    fn src_over_matches_float() {
        let vals = [0u32, 1, 17, 64, 127, 128, 200, 254, 255];
        for &sa in &vals {
            for &da in &vals {
                for &c in &vals {
                    let src = premul(sa, c, 255 - c, c / 2);
                    let dst = premul(da, 255 - c, c, 255);
                    let out = blend(src, dst, BlendMode::SrcOver);
                    let k = 1.0 - sa as f32 / 255.0;
                    let exp = |s: u32, d: u32| s as f32 + d as f32 * k;
                    for &(o, s, d) in &[(out.a(), src.a(), dst.a()),
                                        (out.r(), src.r(), dst.r()),
                                        (out.g(), src.g(), dst.g()),
                                        (out.b(), src.b(), dst.b())] {
                        assert!((o as f32 - exp(s, d)).abs() <= 1.0,
                                "{:08x} over {:08x} = {:08x}", src.0, dst.0, out.0);
                    }
                }
            }
        }
    }

    #[test]
    fn opaque_and_transparent() {
        let s = premul(255, 10, 20, 30);
        let d = premul(128, 200, 100, 50);
        let zero = Pixel(0);
        assert_eq!(blend(s, d, BlendMode::SrcOver), s);
        assert_eq!(blend(zero, d, BlendMode::SrcOver), d);
        assert_eq!(blend(s, zero, BlendMode::DstOver), s);
        assert_eq!(blend(s, d, BlendMode::Src), s);
        assert_eq!(blend(s, d, BlendMode::Dst), d);
        assert_eq!(blend(s, d, BlendMode::SrcIn), Pixel(quad_mul_div255(s.0, 128)));
        assert_eq!(blend(s, d, BlendMode::DstIn), d);
        assert_eq!(blend(s, d, BlendMode::DstOut), zero);
        assert_eq!(blend(s, zero, BlendMode::SrcOut), s);
        assert_eq!(blend(s, zero, BlendMode::SrcATop), zero);
        assert_eq!(blend(zero, d, BlendMode::DstATop), zero);
        assert_eq!(blend(s, zero, BlendMode::Xor), s);
        assert_eq!(blend(zero, d, BlendMode::Xor), d);
    }

    #[test]
    fn opaque_pair() {
        let s = Pixel(0xFFFF_0000);
        let d = Pixel(0xFF00_FF00);
        assert_eq!(blend(s, d, BlendMode::SrcATop), s);
        assert_eq!(blend(s, d, BlendMode::DstATop), d);
        assert_eq!(blend(s, d, BlendMode::Xor), Pixel(0));
        assert_eq!(blend(s, d, BlendMode::SrcOut), Pixel(0));
    }

    #[test]
    fn results_stay_premultiplied() {
        let vals = [0u32, 33, 128, 255];
        for &mode in BlendMode::ALL.iter() {
            for &sa in &vals {
                for &da in &vals {
                    let out = blend(premul(sa, 255, 0, 90), premul(da, 40, 255, 255), mode);
                    assert!(out.r() <= out.a() && out.g() <= out.a() && out.b() <= out.a(),
                            "{:?} {:08x}", mode, out.0);
                }
            }
        }
    }

    #[test]
    fn rows() {
        let mut dst = vec![Pixel(0xFF00_00FF); 3];
        blend_hline(Pixel(0xFFFF_0000), &mut dst, BlendMode::SrcOver);
        assert_eq!(dst, vec![Pixel(0xFFFF_0000); 3]);
        blend_row(&[Pixel(0), Pixel(0xFF00_FF00), Pixel(0)], &mut dst, BlendMode::Src);
        assert_eq!(dst, vec![Pixel(0), Pixel(0xFF00_FF00), Pixel(0)]);
        blend_hline(Pixel(0x8080_0000), &mut dst, BlendMode::Dst);
        assert_eq!(dst[1], Pixel(0xFF00_FF00));
    }
}
