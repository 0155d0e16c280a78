//! Drawing Canvas
//!
//! Maps shapes through the current transform, rasterizes them and writes
//!   the resulting spans into a [Bitmap].

use crate::base::RenderingBase;
use crate::buffer::Bitmap;
use crate::color::{Color, Pixel};
use crate::error::Error;
use crate::paint::Paint;
use crate::path_storage::Path;
use crate::point::{Point, Rect};
use crate::raster::Rasterizer;
use crate::shader::Shader;
use crate::transform::Transform;
use crate::triangle::triangle_basis;

use std::rc::Rc;

/// Drawing Canvas
///
///     use scanfill::{Bitmap, Canvas, Color, Paint, Path, Pixel, Point};
///     let mut bm = Bitmap::new(10, 10);
///     let mut canvas = Canvas::new(&mut bm);
///     let mut path = Path::new();
///     path.add_polygon(&[Point::new(1.0, 1.0), Point::new(9.0, 1.0), Point::new(1.0, 9.0)]);
///     canvas.draw_path(&path, &Paint::new(Color::white())).unwrap();
///     assert_eq!(bm.get(1, 1), Pixel(0xFFFF_FFFF));
///     assert_eq!(bm.get(8, 8), Pixel(0));
#[derive(Debug)]
pub struct Canvas<'a> {
    ren: RenderingBase<'a>,
    ctm: Transform,
    stack: Vec<Transform>,
}

impl<'a> Canvas<'a> {
    /// Create a new canvas drawing into `bitmap`
    pub fn new(bitmap: &'a mut Bitmap) -> Self {
        Self { ren: RenderingBase::new(bitmap), ctm: Transform::new(), stack: vec![] }
    }
    pub fn width(&self) -> usize {
        self.ren.bitmap.width()
    }
    pub fn height(&self) -> usize {
        self.ren.bitmap.height()
    }
    /// Current transform
    pub fn ctm(&self) -> Transform {
        self.ctm
    }
    /// Save the current transform
    pub fn save(&mut self) {
        self.stack.push(self.ctm);
    }
    /// Restore the most recently saved transform
    pub fn restore(&mut self) {
        match self.stack.pop() {
            Some(m) => self.ctm = m,
            None => log::warn!("restore without matching save"),
        }
    }
    /// Apply `m` before the current transform
    pub fn concat(&mut self, m: &Transform) {
        self.ctm = self.ctm * *m;
    }
    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.ctm.pre_translate(tx, ty);
    }
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.ctm.pre_scale(sx, sy);
    }
    /// Rotate by `angle` radians
    pub fn rotate(&mut self, angle: f32) {
        self.ctm.pre_rotate(angle);
    }
    /// Set every pixel to `color`, ignoring the blend mode
    pub fn clear(&mut self, color: Color) {
        self.ren.clear(Pixel::from(color));
    }
    pub fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let pts = [Point::new(rect.right, rect.top),
                   Point::new(rect.right, rect.bottom),
                   Point::new(rect.left, rect.bottom),
                   Point::new(rect.left, rect.top)];
        self.draw_convex_polygon(&pts, paint);
    }
    /// Fill a convex polygon
    ///
    /// Fewer than 3 points draws nothing
    pub fn draw_convex_polygon(&mut self, pts: &[Point], paint: &Paint) {
        if pts.len() < 3 {
            log::debug!("polygon with {} points skipped", pts.len());
            return;
        }
        let mut dst = vec![Point::default(); pts.len()];
        self.ctm.map_points(&mut dst, pts);
        let mut ras = Rasterizer::new(self.width(), self.height());
        ras.add_polygon(&dst);
        if ras.num_edges() < 2 {
            return;
        }
        let (ren, ctm) = (&mut self.ren, &self.ctm);
        ras.fill_convex(|span| ren.blit(span, paint, ctm));
    }
    /// Fill a path with the non-zero winding rule
    ///
    /// Every contour is closed. Curves are flattened after being mapped
    ///   through the current transform.
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) -> Result<(), Error> {
        let dst = path.transform(&self.ctm);
        let mut ras = Rasterizer::new(self.width(), self.height());
        ras.add_path(&dst);
        if ras.num_edges() < 2 {
            return Ok(());
        }
        let (ren, ctm) = (&mut self.ren, &self.ctm);
        ras.fill_path(|span| ren.blit(span, paint, ctm))
    }
    /// Draw triangles, three `indices` into `verts` per triangle
    ///
    /// Triangles are shaded from per vertex `colors`, from `texs`
    ///   coordinates into the paint's shader, or from the product of both.
    ///   Without either, or with `texs` and no paint shader, nothing is drawn.
    ///   A triangle with an index past the end of `verts`, `colors` or `texs`
    ///   is skipped.
    pub fn draw_mesh(&mut self, verts: &[Point], colors: Option<&[Color]>, texs: Option<&[Point]>,
                     indices: &[usize], paint: &Paint) {
        let texture = texs.and_then(|t| paint.get_shader().map(|s| (t, s)));
        for tri in indices.chunks_exact(3) {
            let pts = match pick(verts, tri) {
                Some(pts) => pts,
                None => {
                    log::debug!("triangle {:?} out of range of {} vertices", tri, verts.len());
                    continue;
                },
            };
            let color = match colors.map(|c| pick(c, tri)) {
                Some(Some(c)) => Some(Rc::new(Shader::triangle(pts, c))),
                Some(None) => {
                    log::debug!("triangle {:?} has no colors", tri);
                    continue;
                },
                None => None,
            };
            let proxy = match texture {
                Some((t, shader)) => {
                    let tex = match pick(t, tri) {
                        Some(tex) => tex,
                        None => {
                            log::debug!("triangle {:?} has no texture coordinates", tri);
                            continue;
                        },
                    };
                    match triangle_basis(&tex).invert() {
                        Some(inv) => {
                            let m = triangle_basis(&pts) * inv;
                            Some(Rc::new(Shader::decorate(shader.clone(), m)))
                        },
                        None => {
                            log::debug!("singular texture triangle skipped");
                            continue;
                        },
                    }
                },
                None => None,
            };
            let shader = match (proxy, color) {
                (Some(p), Some(c)) => Rc::new(Shader::join(p, c)),
                (Some(p), None) => p,
                (None, Some(c)) => c,
                (None, None) => continue,
            };
            let paint = paint.clone().shader(Some(shader));
            self.draw_convex_polygon(&pts, &paint);
        }
    }
    /// Draw a quadrilateral subdivided `level + 1` times along each side
    ///
    /// Corners are in order around the quad; positions, colors and texture
    ///   coordinates are interpolated bilinearly across it.
    pub fn draw_quad(&mut self, verts: [Point; 4], colors: Option<[Color; 4]>, texs: Option<[Point; 4]>,
                     level: usize, paint: &Paint) {
        const INDICES: [usize; 6] = [1, 2, 3, 0, 1, 3];
        let n = (level + 1) as f32;
        for i in 0 ..= level {
            let (a, b) = (i as f32 / n, (i + 1) as f32 / n);
            for j in 0 ..= level {
                let (c, d) = (j as f32 / n, (j + 1) as f32 / n);
                let uv = [(a, c), (b, c), (b, d), (a, d)];
                let v = uv.map(|(u, v)| bilerp_point(&verts, u, v));
                let cs = colors.map(|cs| uv.map(|(u, v)| bilerp_color(&cs, u, v)));
                let ts = texs.map(|ts| uv.map(|(u, v)| bilerp_point(&ts, u, v)));
                self.draw_mesh(&v, cs.as_ref().map(|c| &c[..]), ts.as_ref().map(|t| &t[..]),
                               &INDICES, paint);
            }
        }
    }
}

/// The three values of `v` a triangle's indices refer to
fn pick<T: Copy>(v: &[T], tri: &[usize]) -> Option<[T; 3]> {
    Some([*v.get(tri[0])?, *v.get(tri[1])?, *v.get(tri[2])?])
}

/// Bilinear weights of the corners of a quad at (`u`,`v`)
fn bilerp_weights(u: f32, v: f32) -> [f32; 4] {
    [(1.0 - u) * (1.0 - v), u * (1.0 - v), u * v, (1.0 - u) * v]
}

fn bilerp_point(p: &[Point; 4], u: f32, v: f32) -> Point {
    let w = bilerp_weights(u, v);
    w[0] * p[0] + w[1] * p[1] + w[2] * p[2] + w[3] * p[3]
}

fn bilerp_color(c: &[Color; 4], u: f32, v: f32) -> Color {
    let w = bilerp_weights(u, v);
    w[0] * c[0] + w[1] * c[1] + w[2] * c[2] + w[3] * c[3]
}
