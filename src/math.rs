//! Fixed point and rounding helpers

/// Round half up to the nearest integer
pub fn round_to_int(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Largest integer less than or equal to `v`
pub fn floor_to_int(v: f32) -> i32 {
    v.floor() as i32
}

/// Smallest integer greater than or equal to `v`
pub fn ceil_to_int(v: f32) -> i32 {
    v.ceil() as i32
}

/// Clamp `x` into [0,limit]
pub fn pin(x: i32, limit: i32) -> i32 {
    x.max(0).min(limit)
}

/// Divide by 255 with rounding, exact for `v` in [0, 255*255]
///
/// See agg_color_rgba.h:395 for the same shift and add trick
pub fn div255(v: u32) -> u32 {
    let v = v + 128;
    (v + (v >> 8)) >> 8
}

/// Multiply two u8 values as fractions of 255
pub fn multiply_u8(a: u8, b: u8) -> u8 {
    div255(u32::from(a) * u32::from(b)) as u8
}

/// Spread 0xAARRGGBB into 0x00AA_00GG_00RR_00BB
///
/// Each component lands in the low byte of its own 16 bit lane so a
///   single 64 bit multiply scales all four without carries between them
pub fn extend(x: u32) -> u64 {
    let hi = u64::from(x & 0xFF00_FF00); // A and G
    let lo = u64::from(x & 0x00FF_00FF); // R and B
    (hi << 24) | lo
}

/// Copy a 16 bit value into each lane, 0x00XX_00XX_00XX_00XX
pub fn duplicate(x: u64) -> u64 {
    (x << 48) | (x << 32) | (x << 16) | x
}

/// Inverse of [extend](fn.extend.html)
pub fn compact(x: u64) -> u32 {
    (((x >> 24) & 0xFF00_FF00) | (x & 0x00FF_00FF)) as u32
}

/// Scale all four packed components of `x` by `s/255`, with rounding
pub fn quad_mul_div255(x: u32, s: u32) -> u32 {
    debug_assert!(s <= 255);
    let mut prod = extend(x) * u64::from(s);
    prod += duplicate(128);
    prod += (prod >> 8) & duplicate(0xFF);
    prod >>= 8;
    compact(prod)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div255_matches_rounding() {
        for v in 0 ..= 255 * 255 {
            let exact = (v as f64 / 255.0).round() as u32;
            assert_eq!(div255(v), exact, "v = {}", v);
        }
    }

    #[test]
    fn quad_matches_scalar() {
        let xs = [0u32, 0xFFFF_FFFF, 0x8040_2010, 0x7F00_7F3A, 0xC0C0_8001];
        for &x in xs.iter() {
            for s in 0 ..= 255 {
                let q = quad_mul_div255(x, s);
                for shift in &[0, 8, 16, 24] {
                    let c = (x >> shift) & 0xFF;
                    assert_eq!((q >> shift) & 0xFF, div255(c * s));
                }
            }
        }
    }

    #[test]
    fn extend_compact() {
        assert_eq!(extend(0xAABB_CCDD), 0x00AA_00CC_00BB_00DD);
        assert_eq!(compact(0x00AA_00CC_00BB_00DD), 0xAABB_CCDD);
        assert_eq!(duplicate(0x80), 0x0080_0080_0080_0080);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to_int(0.5), 1);
        assert_eq!(round_to_int(-0.5), 0);
        assert_eq!(round_to_int(2.49), 2);
        assert_eq!(floor_to_int(-0.1), -1);
        assert_eq!(ceil_to_int(0.1), 1);
        assert_eq!(pin(-3, 10), 0);
        assert_eq!(pin(30, 10), 10);
        assert_eq!(multiply_u8(255, 128), 128);
    }
}
