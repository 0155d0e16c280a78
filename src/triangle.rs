//! Triangle Shader

use crate::color::{Color, Pixel};
use crate::point::Point;
use crate::shader::{Context, span_start};
use crate::transform::Transform;
use crate::Shade;

/// Color interpolated across a triangle from its three corners
///
/// The triangle's edges `p1 - p0` and `p2 - p0` form a basis; a point
///   at `(u,v)` in that basis has color `c0 + u (c1 - c0) + v (c2 - c0)`
#[derive(Debug,Clone)]
pub struct TriangleShader {
    colors: [Color; 3],
    d1: Color,
    d2: Color,
    basis: Transform,
    ctx: Context,
}

/// Matrix mapping the unit triangle (0,0), (1,0), (0,1) onto `pts`
pub fn triangle_basis(pts: &[Point; 3]) -> Transform {
    let u = pts[1] - pts[0];
    let v = pts[2] - pts[0];
    Transform::from_row(u.x, v.x, pts[0].x, u.y, v.y, pts[0].y)
}

impl TriangleShader {
    pub fn new(pts: [Point; 3], colors: [Color; 3]) -> Self {
        Self { colors,
               d1: colors[1] - colors[0],
               d2: colors[2] - colors[0],
               basis: triangle_basis(&pts),
               ctx: Context::default(),
        }
    }
}

impl Shade for TriangleShader {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(Color::is_opaque)
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.ctx.set(ctm, &self.basis)
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let inv = match self.ctx.get() {
            Some(inv) => inv,
            None => return,
        };
        let p = span_start(&inv, x, y);
        let mut c = self.colors[0] + p.x * self.d1 + p.y * self.d2;
        let dc = inv.sx * self.d1 + inv.shy * self.d2;
        for px in row.iter_mut() {
            *px = Pixel::from(c);
            c += dc;
        }
    }
}
