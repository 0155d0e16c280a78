//! Bezier curve evaluation and flattening
//!
//! Curves are flattened into a polyline whose segment count grows with the
//!   second difference of the control points, a bound on how far the
//!   curve strays from its chord.

use crate::point::Point;

/// Intermediate values of a quadratic evaluated with de Casteljau
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct QuadPoint {
    pub ab: f32,
    pub bc: f32,
    /// Point on the curve
    pub abc: f32,
}

/// Intermediate values of a cubic evaluated with de Casteljau
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct CubicPoint {
    pub abc: QuadPoint,
    pub bcd: QuadPoint,
    /// Point on the curve
    pub abcd: f32,
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Evaluate one coordinate of a quadratic at `t`
pub fn quad_point(a: f32, b: f32, c: f32, t: f32) -> QuadPoint {
    let ab = lerp(a, b, t);
    let bc = lerp(b, c, t);
    QuadPoint { ab, bc, abc: lerp(ab, bc, t) }
}

/// Evaluate one coordinate of a cubic at `t`
pub fn cubic_point(a: f32, b: f32, c: f32, d: f32, t: f32) -> CubicPoint {
    let abc = quad_point(a, b, c, t);
    let bcd = quad_point(b, c, d, t);
    CubicPoint { abc, bcd, abcd: lerp(abc.abc, bcd.abc, t) }
}

/// Most line segments a single curve is flattened into
pub const MAX_SEGMENTS: usize = 1024;

fn segment_count(n: f32) -> usize {
    (n as usize).max(1).min(MAX_SEGMENTS)
}

/// Number of line segments used to approximate a quadratic
pub fn quad_segments(pts: &[Point; 3]) -> usize {
    let err = (pts[0] - 2.0 * pts[1] + pts[2]) * 0.25;
    segment_count((err.length() * 4.0).sqrt().ceil())
}

/// Number of line segments used to approximate a cubic
pub fn cubic_segments(pts: &[Point; 4]) -> usize {
    let e1 = pts[0] - 2.0 * pts[1] + pts[2];
    let e2 = pts[1] - 2.0 * pts[2] + pts[3];
    let err = Point::new(e1.x.abs().max(e2.x.abs()),
                         e1.y.abs().max(e2.y.abs()));
    segment_count((err.length() * 3.0).sqrt().ceil())
}

/// Flatten a quadratic into a polyline from its first to last point
///
/// The last point is the curve's end point exactly
pub fn flatten_quad(pts: &[Point; 3]) -> Vec<Point> {
    let n = quad_segments(pts);
    let mut out = Vec::with_capacity(n + 1);
    out.push(pts[0]);
    for i in 1 .. n {
        let t = i as f32 * (1.0 / n as f32);
        out.push(Point::new(quad_point(pts[0].x, pts[1].x, pts[2].x, t).abc,
                            quad_point(pts[0].y, pts[1].y, pts[2].y, t).abc));
    }
    out.push(pts[2]);
    out
}

/// Flatten a cubic into a polyline from its first to last point
///
/// The last point is the curve's end point exactly
pub fn flatten_cubic(pts: &[Point; 4]) -> Vec<Point> {
    let n = cubic_segments(pts);
    let mut out = Vec::with_capacity(n + 1);
    out.push(pts[0]);
    for i in 1 .. n {
        let t = i as f32 * (1.0 / n as f32);
        out.push(Point::new(cubic_point(pts[0].x, pts[1].x, pts[2].x, pts[3].x, t).abcd,
                            cubic_point(pts[0].y, pts[1].y, pts[2].y, pts[3].y, t).abcd));
    }
    out.push(pts[3]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn de_casteljau() {
        let q = quad_point(0.0, 4.0, 0.0, 0.5);
        assert_eq!(q, QuadPoint { ab: 2.0, bc: 2.0, abc: 2.0 });
        let c = cubic_point(0.0, 8.0, 8.0, 0.0, 0.5);
        assert_eq!(c.abcd, 6.0);
        assert_eq!(cubic_point(1.0, 2.0, 3.0, 4.0, 0.0).abcd, 1.0);
        assert_eq!(cubic_point(1.0, 2.0, 3.0, 4.0, 1.0).abcd, 4.0);
    }

    #[test]
    fn straight_curves_use_one_segment() {
        let q = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 10.0)];
        assert_eq!(quad_segments(&q), 1);
        assert_eq!(flatten_quad(&q), vec![q[0], q[2]]);
        let c = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::new(3.0, 0.0)];
        assert_eq!(cubic_segments(&c), 1);
    }

    #[test]
    fn segments_are_bounded() {
        let c = [Point::new(0.0, 0.0), Point::new(1e7, 1e7), Point::new(-1e7, 1e7), Point::new(0.0, 0.0)];
        assert_eq!(cubic_segments(&c), MAX_SEGMENTS);
        assert_eq!(flatten_cubic(&c).len(), MAX_SEGMENTS + 1);
        let q = [Point::new(0.0, 0.0), Point::new(1e30, -1e30), Point::new(0.0, 0.0)];
        assert_eq!(quad_segments(&q), MAX_SEGMENTS);
    }

    #[test]
    fn segments_grow_with_curvature() {
        let small = [Point::new(0.0, 0.0), Point::new(5.0, 2.0), Point::new(10.0, 0.0)];
        let large = [Point::new(0.0, 0.0), Point::new(50.0, 200.0), Point::new(100.0, 0.0)];
        assert!(quad_segments(&large) > quad_segments(&small));
        // |err| = 100 -> ceil(sqrt(400)) = 20
        assert_eq!(quad_segments(&large), 20);

        let c = [Point::new(0.0, 0.0), Point::new(0.0, 100.0), Point::new(100.0, 100.0), Point::new(100.0, 0.0)];
        // err = (100, 100) -> ceil(sqrt(424.26)) = 21
        assert_eq!(cubic_segments(&c), 21);
    }

    #[test]
    fn flatten_ends_exactly() {
        let c = [Point::new(0.3, 0.1), Point::new(17.0, 90.0), Point::new(40.0, -3.0), Point::new(77.7, 12.1)];
        let poly = flatten_cubic(&c);
        assert_eq!(poly.len(), cubic_segments(&c) + 1);
        assert_eq!(poly[0], c[0]);
        assert_eq!(*poly.last().unwrap(), c[3]);
        let q = [Point::new(0.3, 0.1), Point::new(17.0, 90.0), Point::new(40.0, -3.0)];
        assert_eq!(*flatten_quad(&q).last().unwrap(), q[2]);
    }
}
