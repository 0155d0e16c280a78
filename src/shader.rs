//! Shaders
//!
//! A [Shader] supplies the source color of every pixel in a span. All
//!   variants follow the [Shade] lifecycle: `set_context` with the device
//!   transform of a draw, then `shade_row` for each span of that draw.
//!
//!     use std::rc::Rc;
//!     use scanfill::{Shader, Shade, Color, Pixel, Point, Transform};
//!
//!     let red = Rc::new(Shader::solid(Color::rgb(1.0, 0.0, 0.0)));
//!     let ramp = Shader::linear_gradient(Point::new(0.0, 0.0), Point::new(4.0, 0.0),
//!                                        &[Color::white(), Color::black()],
//!                                        Default::default()).unwrap();
//!     let both = Shader::join(red, Rc::new(ramp));
//!     assert!(both.set_context(&Transform::new()));
//!     let mut row = vec![Pixel(0); 4];
//!     both.shade_row(0, 0, &mut row);
//!     assert_eq!(row[0].a(), 255);
//!     assert_eq!(row[0].g(), 0);

use crate::bitmap_shader::BitmapShader;
use crate::buffer::Bitmap;
use crate::color::{Color, Pixel};
use crate::compose::{DecoratorShader, JoinedShader};
use crate::gradient::{LinearGradient, LinearPosGradient, SweepGradient};
use crate::point::Point;
use crate::transform::Transform;
use crate::triangle::TriangleShader;
use crate::Shade;

use std::cell::Cell;
use std::rc::Rc;

/// Mapping of coordinates outside of a shader's domain
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum TileMode {
    /// Pin to the nearest edge
    Clamp,
    /// Wrap around
    Repeat,
    /// Reflect on every other period
    Mirror,
}

impl Default for TileMode {
    fn default() -> Self {
        TileMode::Clamp
    }
}

impl TileMode {
    /// Map a unit coordinate `t` into [0,1]
    ///
    ///     use scanfill::TileMode;
    ///     assert_eq!(TileMode::Clamp.tile(1.25), 1.0);
    ///     assert_eq!(TileMode::Repeat.tile(1.25), 0.25);
    ///     assert_eq!(TileMode::Mirror.tile(1.25), 0.75);
    ///     assert_eq!(TileMode::Mirror.tile(-0.25), 0.25);
    pub fn tile(self, t: f32) -> f32 {
        match self {
            TileMode::Clamp => t.max(0.0).min(1.0),
            TileMode::Repeat => t - t.floor(),
            TileMode::Mirror => {
                let u = t.rem_euclid(2.0);
                if u > 1.0 { 2.0 - u } else { u }
            },
        }
    }
}

/// Inverse of the combined device and shader transforms, set per draw
#[derive(Debug,Default,Clone)]
pub(crate) struct Context {
    inverse: Cell<Option<Transform>>,
}

impl Context {
    /// Invert `ctm * local`, false if singular
    pub(crate) fn set(&self, ctm: &Transform, local: &Transform) -> bool {
        let inv = (*ctm * *local).invert();
        self.inverse.set(inv);
        inv.is_some()
    }
    pub(crate) fn get(&self) -> Option<Transform> {
        self.inverse.get()
    }
}

/// Device to shader space start point for a span at (`x`,`y`)
pub(crate) fn span_start(inv: &Transform, x: i32, y: i32) -> Point {
    inv.map_point(Point::new(x as f32 + 0.5, y as f32 + 0.5))
}

/// Shader space step for one device pixel to the right
pub(crate) fn span_step(inv: &Transform) -> Point {
    Point::new(inv.sx, inv.shy)
}

/// Constant color
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct SolidShader {
    pub color: Color,
    pixel: Pixel,
}

impl SolidShader {
    pub fn new(color: Color) -> Self {
        Self { color, pixel: Pixel::from(color) }
    }
}

impl Shade for SolidShader {
    fn is_opaque(&self) -> bool {
        self.color.is_opaque()
    }
    fn set_context(&self, _ctm: &Transform) -> bool {
        true
    }
    fn shade_row(&self, _x: i32, _y: i32, row: &mut [Pixel]) {
        row.iter_mut().for_each(|p| *p = self.pixel);
    }
}

/// Per-pixel color source
///
/// Composed shaders share their children through `Rc`
#[derive(Debug,Clone)]
pub enum Shader {
    Solid(SolidShader),
    Bitmap(BitmapShader),
    Linear(LinearGradient),
    LinearPos(LinearPosGradient),
    Sweep(SweepGradient),
    Triangle(TriangleShader),
    Decorator(DecoratorShader),
    Joined(JoinedShader),
}

impl Shader {
    /// Constant color
    pub fn solid(color: Color) -> Self {
        Shader::Solid(SolidShader::new(color))
    }
    /// Sample `bitmap` through `local`, which maps bitmap to paint space
    ///
    /// None if the bitmap is empty
    pub fn bitmap(bitmap: Bitmap, local: Transform, tile: TileMode) -> Option<Self> {
        BitmapShader::new(bitmap, local, tile).map(Shader::Bitmap)
    }
    /// Evenly spaced colors from `p0` to `p1`
    ///
    /// None if there are no colors
    pub fn linear_gradient(p0: Point, p1: Point, colors: &[Color], tile: TileMode) -> Option<Self> {
        LinearGradient::new(p0, p1, colors, tile).map(Shader::Linear)
    }
    /// Colors placed at `positions` between `p0` (0.0) and `p1` (1.0)
    ///
    /// None unless there are at least two colors and one position per color
    pub fn linear_pos_gradient(p0: Point, p1: Point, colors: &[Color], positions: &[f32]) -> Option<Self> {
        LinearPosGradient::new(p0, p1, colors, positions).map(Shader::LinearPos)
    }
    /// Colors swept around `center`, starting at angle `start` in radians
    ///
    /// None if there are no colors
    pub fn sweep_gradient(center: Point, start: f32, colors: &[Color]) -> Option<Self> {
        SweepGradient::new(center, start, colors).map(Shader::Sweep)
    }
    /// Barycentric blend of three colors at the corners of a triangle
    pub fn triangle(pts: [Point; 3], colors: [Color; 3]) -> Self {
        Shader::Triangle(TriangleShader::new(pts, colors))
    }
    /// `shader` with its space remapped by `m`
    pub fn decorate(shader: Rc<Shader>, m: Transform) -> Self {
        Shader::Decorator(DecoratorShader::new(shader, m))
    }
    /// Product of two shaders
    pub fn join(a: Rc<Shader>, b: Rc<Shader>) -> Self {
        Shader::Joined(JoinedShader::new(a, b))
    }
}

macro_rules! dispatch {
    ($self:ident, $s:ident => $e:expr) => {
        match $self {
            Shader::Solid($s)     => $e,
            Shader::Bitmap($s)    => $e,
            Shader::Linear($s)    => $e,
            Shader::LinearPos($s) => $e,
            Shader::Sweep($s)     => $e,
            Shader::Triangle($s)  => $e,
            Shader::Decorator($s) => $e,
            Shader::Joined($s)    => $e,
        }
    }
}

impl Shade for Shader {
    fn is_opaque(&self) -> bool {
        dispatch!(self, s => s.is_opaque())
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        dispatch!(self, s => s.set_context(ctm))
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        dispatch!(self, s => s.shade_row(x, y, row))
    }
}

impl From<Color> for Shader {
    fn from(c: Color) -> Shader {
        Shader::solid(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid() {
        let s = Shader::solid(Color::rgba(0.0, 1.0, 0.0, 0.5));
        assert!(!s.is_opaque());
        assert!(s.set_context(&Transform::new_scale(0.0, 0.0)));
        let mut row = [Pixel(0); 3];
        s.shade_row(5, 5, &mut row);
        assert_eq!(row, [Pixel::pack_argb(128, 0, 128, 0); 3]);
        assert!(Shader::from(Color::black()).is_opaque());
    }

    #[test]
    fn opacity_needs_full_alpha() {
        let c = Color::rgba(1.0, 0.0, 0.0, 0.999);
        assert_eq!(Pixel::from(c).a(), 255);
        let g = Shader::linear_gradient(Point::new(0.0, 0.0), Point::new(1.0, 0.0),
                                        &[c, c], TileMode::Clamp).unwrap();
        let t = Shader::triangle([Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)], [c; 3]);
        assert!(!Shader::solid(c).is_opaque());
        assert!(!g.is_opaque());
        assert!(!t.is_opaque());
    }

    #[test]
    fn tile_modes() {
        for &t in &[0.0f32, 0.3, 1.0] {
            assert_eq!(TileMode::Clamp.tile(t), t);
            assert_eq!(TileMode::Mirror.tile(t), t);
        }
        assert_eq!(TileMode::Clamp.tile(-3.0), 0.0);
        assert_eq!(TileMode::Repeat.tile(-0.25), 0.75);
        assert_eq!(TileMode::Repeat.tile(3.5), 0.5);
        assert_eq!(TileMode::Mirror.tile(2.5), 0.5);
        assert_eq!(TileMode::Mirror.tile(3.5), 0.5);
        assert_eq!(TileMode::Mirror.tile(-1.5), 0.5);
        assert_eq!(TileMode::default(), TileMode::Clamp);
    }

    #[test]
    fn context_singular() {
        let c = Context::default();
        assert!(c.get().is_none());
        assert!(c.set(&Transform::new_scale(2.0, 2.0), &Transform::new()));
        assert_eq!(c.get(), Some(Transform::new_scale(0.5, 0.5)));
        assert!(!c.set(&Transform::new_scale(2.0, 0.0), &Transform::new()));
        assert!(c.get().is_none());
    }

    #[test]
    fn span_mapping() {
        let inv = Transform::new_scale(0.5, 0.25);
        assert_eq!(span_start(&inv, 1, 3), Point::new(0.75, 0.875));
        assert_eq!(span_step(&inv), Point::new(0.5, 0.0));
    }
}
