//! Colors and Pixels

use std::ops::{Add, AddAssign, Sub, Mul};

/// Convert an f32 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

/// Color as Red, Green, Blue and Alpha
///
/// Components are not premultiplied and not guaranteed to lie within
///   [0,1] until [pin_to_unit](#method.pin_to_unit) is called
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create new color
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
    /// Create new opaque color
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }
    /// Clamp all components into [0,1]
    pub fn pin_to_unit(&self) -> Self {
        let pin = |v: f32| v.max(0.0).min(1.0);
        Self::rgba(pin(self.r), pin(self.g), pin(self.b), pin(self.a))
    }
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, c: Color) -> Color {
        Color::rgba(self.r + c.r, self.g + c.g, self.b + c.b, self.a + c.a)
    }
}
impl AddAssign for Color {
    fn add_assign(&mut self, c: Color) {
        *self = *self + c;
    }
}
impl Sub for Color {
    type Output = Color;
    fn sub(self, c: Color) -> Color {
        Color::rgba(self.r - c.r, self.g - c.g, self.b - c.b, self.a - c.a)
    }
}
impl Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Color {
        Color::rgba(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}
impl Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

/// Packed premultiplied ARGB, 8 bits per component
///
/// Alpha occupies the high byte, then Red, Green and Blue
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Pack premultiplied components
    pub fn pack_argb(a: u32, r: u32, g: u32, b: u32) -> Self {
        debug_assert!(a <= 255 && r <= a && g <= a && b <= a,
                      "invalid premultiplied pixel {} {} {} {}", a, r, g, b);
        Pixel((a << 24) | (r << 16) | (g << 8) | b)
    }
    pub fn a(self) -> u32 { self.0 >> 24 }
    pub fn r(self) -> u32 { (self.0 >> 16) & 0xFF }
    pub fn g(self) -> u32 { (self.0 >> 8) & 0xFF }
    pub fn b(self) -> u32 { self.0 & 0xFF }

    /// Straight (un-premultiplied) Red, Green, Blue, Alpha bytes
    pub fn to_rgba8(self) -> [u8; 4] {
        let a = self.a();
        if a == 0 {
            return [0, 0, 0, 0];
        }
        let un = |v: u32| ((v * 255 + a / 2) / a).min(255) as u8;
        [un(self.r()), un(self.g()), un(self.b()), a as u8]
    }
    /// Premultiply straight Red, Green, Blue, Alpha bytes
    pub fn from_rgba8(p: [u8; 4]) -> Self {
        let a = u32::from(p[3]);
        let pre = |v: u8| crate::math::div255(u32::from(v) * a);
        Pixel::pack_argb(a, pre(p[0]), pre(p[1]), pre(p[2]))
    }
}

impl From<Color> for Pixel {
    /// Pin to [0,1], premultiply by alpha and round to [0,255]
    fn from(c: Color) -> Pixel {
        let c = c.pin_to_unit();
        let a = cu8(c.a);
        let r = cu8(c.a * c.r).min(a);
        let g = cu8(c.a * c.g).min(a);
        let b = cu8(c.a * c.b).min(a);
        Pixel::pack_argb(a.into(), r.into(), g.into(), b.into())
    }
}

impl From<Pixel> for Color {
    /// Components divided by 255, left premultiplied
    fn from(p: Pixel) -> Color {
        Color::rgba(p.r() as f32 / 255.0,
                    p.g() as f32 / 255.0,
                    p.b() as f32 / 255.0,
                    p.a() as f32 / 255.0)
    }
}
