//! Points and Rectangles

use std::ops::{Add, Sub, Mul, Neg};

/// Point or vector in 2D
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    /// Distance from the origin
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    /// Linear interpolation from self to `p` at `t`
    pub fn lerp(self, p: Point, t: f32) -> Point {
        self + (p - self) * t
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, p: Point) -> Point {
        Point::new(self.x + p.x, self.y + p.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, p: Point) -> Point {
        Point::new(self.x - p.x, self.y - p.y)
    }
}
impl Mul<f32> for Point {
    type Output = Point;
    fn mul(self, s: f32) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}
impl Mul<Point> for f32 {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        p * self
    }
}
impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f32,f32)> for Point {
    fn from(p: (f32,f32)) -> Point {
        Point::new(p.0, p.1)
    }
}

/// Axis aligned rectangle
///
/// Contains points with `left <= x < right` and `top <= y < bottom`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create from edges
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Create from an origin and size
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_ltrb(x, y, x + w, y + h)
    }
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
    /// Expand if the point is outside
    pub fn expand(&mut self, p: Point) {
        if p.x < self.left   { self.left = p.x; }
        if p.x > self.right  { self.right = p.x; }
        if p.y < self.top    { self.top = p.y; }
        if p.y > self.bottom { self.bottom = p.y; }
    }
    /// Corners in clockwise order starting at the top left
    pub fn corners(&self) -> [Point; 4] {
        [Point::new(self.left,  self.top),
         Point::new(self.right, self.top),
         Point::new(self.right, self.bottom),
         Point::new(self.left,  self.bottom)]
    }
}
