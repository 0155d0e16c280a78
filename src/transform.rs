//! Affine Transformations

use crate::error::Error;
use crate::point::Point;

use std::ops::Mul;

/// Affine Transform
///
/// Maps a point as
///
/// ```text
///     x' = sx  * x + shx * y + tx
///     y' = shy * x + sy  * y + ty
/// ```
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f32,
    pub shy: f32,
    pub shx: f32,
    pub sy: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self { sx: 1.0,  sy: 1.0,
               shx: 0.0, shy: 0.0,
               tx: 0.0,  ty: 0.0,
        }
    }
    /// Create from the two rows of the matrix
    ///
    /// `[a c e]` and `[b d f]`
    pub fn from_row(a: f32, c: f32, e: f32, b: f32, d: f32, f: f32) -> Self {
        Self { sx: a, shx: c, tx: e, shy: b, sy: d, ty: f }
    }
    pub fn new_translate(tx: f32, ty: f32) -> Self {
        Self::from_row(1.0, 0.0, tx, 0.0, 1.0, ty)
    }
    pub fn new_scale(sx: f32, sy: f32) -> Self {
        Self::from_row(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }
    /// Rotation, angle is in radians
    pub fn new_rotate(angle: f32) -> Self {
        let (sa, ca) = angle.sin_cos();
        Self::from_row(ca, -sa, 0.0, sa, ca, 0.0)
    }
    /// Combine two transforms, `b` is applied first, then `a`
    pub fn concat(a: &Transform, b: &Transform) -> Self {
        Self::from_row(a.sx  * b.sx + a.shx * b.shy,
                       a.sx  * b.shx + a.shx * b.sy,
                       a.sx  * b.tx + a.shx * b.ty + a.tx,
                       a.shy * b.sx + a.sy * b.shy,
                       a.shy * b.shx + a.sy * b.sy,
                       a.shy * b.tx + a.sy * b.ty + a.ty)
    }
    /// Translate before the current transform
    pub fn pre_translate(&mut self, dx: f32, dy: f32) {
        *self = *self * Self::new_translate(dx, dy);
    }
    /// Scale before the current transform
    pub fn pre_scale(&mut self, sx: f32, sy: f32) {
        *self = *self * Self::new_scale(sx, sy);
    }
    /// Rotate before the current transform
    pub fn pre_rotate(&mut self, angle: f32) {
        *self = *self * Self::new_rotate(angle);
    }
    pub fn determinant(&self) -> f32 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// Inverse transform
    ///
    /// None if the determinant is exactly zero
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let d = 1.0 / det;
        Some(Self::from_row(self.sy * d,
                            -self.shx * d,
                            (self.shx * self.ty - self.sy * self.tx) * d,
                            -self.shy * d,
                            self.sx * d,
                            (self.shy * self.tx - self.sx * self.ty) * d))
    }
    /// Inverse transform, [Error::SingularMatrix] if there is none
    pub fn try_invert(&self) -> Result<Transform, Error> {
        self.invert().ok_or(Error::SingularMatrix)
    }
    /// Perform the transform
    pub fn transform(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    pub fn map_point(&self, p: Point) -> Point {
        let (x,y) = self.transform(p.x, p.y);
        Point::new(x, y)
    }
    /// Transform each of `src` into `dst`
    pub fn map_points(&self, dst: &mut [Point], src: &[Point]) {
        debug_assert_eq!(dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = self.map_point(*s);
        }
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;
    /// `self * rhs` applies `rhs` first
    fn mul(self, rhs: Transform) -> Self {
        Transform::concat(&self, &rhs)
    }
}

impl Mul<Point> for Transform {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        self.map_point(p)
    }
}
