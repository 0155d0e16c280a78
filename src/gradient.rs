//! Gradients
//!
//! Linear gradients run along the unit segment of a matrix built from
//!   their two end points; sweep gradients run around a center point.

use crate::color::{Color, Pixel};
use crate::math::floor_to_int;
use crate::point::Point;
use crate::shader::{Context, TileMode, span_start, span_step};
use crate::transform::Transform;
use crate::Shade;

use std::f32::consts::PI;

/// Matrix mapping the unit segment (0,0)-(1,0) onto `p0`-`p1`
fn unit_matrix(p0: Point, p1: Point) -> Transform {
    let d = p1 - p0;
    Transform::from_row(d.x, -d.y, p0.x, d.y, d.x, p0.y)
}

fn all_opaque(colors: &[Color]) -> bool {
    colors.iter().all(Color::is_opaque)
}

/// Color at `x` in [0, N-1] along evenly spaced colors
fn evenly_spaced(colors: &[Color], x: f32) -> Color {
    let n = colors.len();
    let k = (floor_to_int(x).max(0) as usize).min(n - 1);
    let t = x - k as f32;
    if t <= 0.0 || k + 1 >= n {
        colors[k]
    } else {
        colors[k] + t * (colors[k + 1] - colors[k])
    }
}

/// Linear Gradient with evenly spaced colors
///
///     use scanfill::{LinearGradient, Shade, Color, Pixel, Point, TileMode, Transform};
///     let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0),
///                                 &[Color::black(), Color::white()],
///                                 TileMode::Clamp).unwrap();
///     assert!(g.set_context(&Transform::new()));
///     let mut row = [Pixel(0); 2];
///     g.shade_row(0, 0, &mut row);
///     assert_eq!(row[0], Pixel::from(Color::rgb(0.25, 0.25, 0.25)));
///     assert_eq!(row[1], Pixel::from(Color::rgb(0.75, 0.75, 0.75)));
#[derive(Debug,Clone)]
pub struct LinearGradient {
    colors: Vec<Color>,
    unit: Transform,
    tile: TileMode,
    ctx: Context,
}

impl LinearGradient {
    /// None if `colors` is empty
    pub fn new(p0: Point, p1: Point, colors: &[Color], tile: TileMode) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors: colors.to_vec(), unit: unit_matrix(p0, p1), tile,
                    ctx: Context::default() })
    }
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Shade for LinearGradient {
    fn is_opaque(&self) -> bool {
        all_opaque(&self.colors)
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.ctx.set(ctm, &self.unit)
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        if self.colors.len() == 1 {
            row.iter_mut().for_each(|p| *p = Pixel::from(self.colors[0]));
            return;
        }
        let inv = match self.ctx.get() {
            Some(inv) => inv,
            None => return,
        };
        let scale = (self.colors.len() - 1) as f32;
        let mut t = span_start(&inv, x, y).x;
        for p in row.iter_mut() {
            let c = evenly_spaced(&self.colors, self.tile.tile(t) * scale);
            *p = Pixel::from(c);
            t += inv.sx;
        }
    }
}

/// Linear Gradient with colors at explicit positions
///
/// Positions are expected to increase from 0.0 to 1.0
#[derive(Debug,Clone)]
pub struct LinearPosGradient {
    colors: Vec<Color>,
    positions: Vec<f32>,
    unit: Transform,
    ctx: Context,
}

impl LinearPosGradient {
    /// None unless there are at least two colors, each with a position
    pub fn new(p0: Point, p1: Point, colors: &[Color], positions: &[f32]) -> Option<Self> {
        if colors.len() < 2 || colors.len() != positions.len() {
            return None;
        }
        Some(Self { colors: colors.to_vec(), positions: positions.to_vec(),
                    unit: unit_matrix(p0, p1), ctx: Context::default() })
    }
    /// Color at `t` in [0,1]
    fn color_at(&self, t: f32) -> Color {
        let n = self.colors.len();
        let mut k = 0;
        while k < n - 2 && t > self.positions[k + 1] {
            k += 1;
        }
        let (start, end) = (self.positions[k], self.positions[k + 1]);
        let span = end - start;
        if span <= 0.0 {
            return if t < end { self.colors[k] } else { self.colors[k + 1] };
        }
        let u = ((t - start) / span).max(0.0).min(1.0);
        self.colors[k] + u * (self.colors[k + 1] - self.colors[k])
    }
}

impl Shade for LinearPosGradient {
    fn is_opaque(&self) -> bool {
        all_opaque(&self.colors)
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.ctx.set(ctm, &self.unit)
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let inv = match self.ctx.get() {
            Some(inv) => inv,
            None => return,
        };
        let mut t = span_start(&inv, x, y).x;
        for p in row.iter_mut() {
            *p = Pixel::from(self.color_at(t.max(0.0).min(1.0)));
            t += inv.sx;
        }
    }
}

/// Angular Gradient
///
/// Colors are evenly spaced around `center`, clockwise in device space,
///   beginning at angle `start`
#[derive(Debug,Clone)]
pub struct SweepGradient {
    colors: Vec<Color>,
    center: Point,
    start: f32,
    ctx: Context,
}

impl SweepGradient {
    /// None if `colors` is empty
    pub fn new(center: Point, start: f32, colors: &[Color]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        Some(Self { colors: colors.to_vec(), center, start, ctx: Context::default() })
    }
    /// Color at unit angle `t` in [0,1)
    fn color_at(&self, t: f32) -> Color {
        let n = self.colors.len() - 1;
        let frac = 1.0 / n as f32;
        let k = (floor_to_int(t * n as f32).max(0) as usize).min(n - 1);
        let u = ((t - k as f32 * frac) / frac).max(0.0).min(1.0);
        self.colors[k] * (1.0 - u) + self.colors[k + 1] * u
    }
}

impl Shade for SweepGradient {
    fn is_opaque(&self) -> bool {
        all_opaque(&self.colors)
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.ctx.set(ctm, &Transform::new())
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        if self.colors.len() == 1 {
            row.iter_mut().for_each(|p| *p = Pixel::from(self.colors[0]));
            return;
        }
        let inv = match self.ctx.get() {
            Some(inv) => inv,
            None => return,
        };
        let mut p = span_start(&inv, x, y);
        let dp = span_step(&inv);
        for px in row.iter_mut() {
            let d = p - self.center;
            let angle = (d.y.atan2(d.x) - self.start).rem_euclid(2.0 * PI);
            let t = (angle / (2.0 * PI)).min(1.0);
            *px = Pixel::from(self.color_at(t));
            p = p + dp;
        }
    }
}
