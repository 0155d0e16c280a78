//! Path Storage
//!
//! Contours of lines, quadratic and cubic curves, and iteration over them
//!   as closed segments.

use crate::curves::{quad_point, cubic_point};
use crate::point::{Point, Rect};
use crate::transform::Transform;

/// Control point tangent length of a cubic quarter circle, per unit radius
const CIRCLE_TANGENT: f32 = 0.551_915_024_493_510_6;

/// Drawing commands
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PathVerb {
    /// Start a new contour, 1 point
    Move,
    /// Straight line, 1 point
    Line,
    /// Quadratic curve, 2 points
    Quad,
    /// Cubic curve, 3 points
    Cubic,
}

impl PathVerb {
    /// Number of points the verb consumes
    pub fn num_points(self) -> usize {
        match self {
            PathVerb::Move | PathVerb::Line => 1,
            PathVerb::Quad => 2,
            PathVerb::Cubic => 3,
        }
    }
}

/// Direction contours are added in
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PathDirection {
    Clockwise,
    CounterClockwise
}
impl Default for PathDirection {
    fn default() -> PathDirection {
        PathDirection::Clockwise
    }
}

/// Segment of a path with its control points
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Segment {
    Move(Point),
    Line([Point; 2]),
    Quad([Point; 3]),
    Cubic([Point; 4]),
}

/// Vector path of one or more contours
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
    pub verbs: Vec<PathVerb>,
}

impl Path {
    pub fn new() -> Self {
        Self { points: vec![], verbs: vec![] }
    }
    /// Remove all contours
    pub fn reset(&mut self) {
        self.points.clear();
        self.verbs.clear();
    }
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.points.push(p.into());
        self.verbs.push(PathVerb::Move);
    }
    /// Add a line from the last point
    ///
    /// Starts a contour at the origin if the path is empty
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.ensure_move();
        self.points.push(p.into());
        self.verbs.push(PathVerb::Line);
    }
    pub fn quad_to<P: Into<Point>>(&mut self, p1: P, p2: P) {
        self.ensure_move();
        self.points.push(p1.into());
        self.points.push(p2.into());
        self.verbs.push(PathVerb::Quad);
    }
    pub fn cubic_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.ensure_move();
        self.points.push(p1.into());
        self.points.push(p2.into());
        self.points.push(p3.into());
        self.verbs.push(PathVerb::Cubic);
    }
    fn ensure_move(&mut self) {
        if self.verbs.is_empty() {
            self.move_to(Point::default());
        }
    }
    /// Add a rectangle as a new contour starting at its top left
    pub fn add_rect(&mut self, r: &Rect, dir: PathDirection) {
        self.move_to((r.left, r.top));
        match dir {
            PathDirection::Clockwise => {
                self.line_to((r.right, r.top));
                self.line_to((r.right, r.bottom));
                self.line_to((r.left, r.bottom));
            },
            PathDirection::CounterClockwise => {
                self.line_to((r.left, r.bottom));
                self.line_to((r.right, r.bottom));
                self.line_to((r.right, r.top));
            },
        }
    }
    /// Add a polygon as a new contour
    ///
    /// Fewer than 2 points are ignored
    pub fn add_polygon(&mut self, pts: &[Point]) {
        if pts.len() < 2 {
            return;
        }
        self.move_to(pts[0]);
        for &p in &pts[1..] {
            self.line_to(p);
        }
    }
    /// Add a circle as a contour of four cubic curves
    pub fn add_circle(&mut self, center: Point, radius: f32, dir: PathDirection) {
        let (x, y) = (center.x, center.y);
        let r = radius;
        let t = radius * CIRCLE_TANGENT;
        self.move_to((x + r, y));
        match dir {
            PathDirection::Clockwise => {
                self.cubic_to((x + r, y + t), (x + t, y + r), (x, y + r));
                self.cubic_to((x - t, y + r), (x - r, y + t), (x - r, y));
                self.cubic_to((x - r, y - t), (x - t, y - r), (x, y - r));
                self.cubic_to((x + t, y - r), (x + r, y - t), (x + r, y));
            },
            PathDirection::CounterClockwise => {
                self.cubic_to((x + r, y - t), (x + t, y - r), (x, y - r));
                self.cubic_to((x - t, y - r), (x - r, y - t), (x - r, y));
                self.cubic_to((x - r, y + t), (x - t, y + r), (x, y + r));
                self.cubic_to((x + t, y + r), (x + r, y + t), (x + r, y));
            },
        }
    }
    /// Copy of the path with every point transformed
    pub fn transform(&self, m: &Transform) -> Path {
        let mut out = self.clone();
        m.map_points(&mut out.points, &self.points);
        out
    }
    /// Iterate over segments, closing each contour
    pub fn edger(&self) -> Edger<'_> {
        Edger { path: self, verb: 0, point: 0, first: None, last: Point::default() }
    }
    /// Tight bounding rectangle, including curve extrema
    ///
    /// An empty path has an empty rectangle at the origin
    pub fn bounds(&self) -> Rect {
        let p0 = match self.points.first() {
            None => return Rect::default(),
            Some(&p) => p,
        };
        let mut r = Rect::from_ltrb(p0.x, p0.y, p0.x, p0.y);
        for seg in self.edger() {
            match seg {
                Segment::Move(p) => r.expand(p),
                Segment::Line(pts) => {
                    r.expand(pts[0]);
                    r.expand(pts[1]);
                },
                Segment::Quad(pts) => {
                    r.expand(pts[0]);
                    r.expand(pts[2]);
                    let tx = quad_extremum(pts[0].x, pts[1].x, pts[2].x);
                    let ty = quad_extremum(pts[0].y, pts[1].y, pts[2].y);
                    for t in tx.iter().chain(ty.iter()) {
                        r.expand(Point::new(quad_point(pts[0].x, pts[1].x, pts[2].x, *t).abc,
                                            quad_point(pts[0].y, pts[1].y, pts[2].y, *t).abc));
                    }
                },
                Segment::Cubic(pts) => {
                    r.expand(pts[0]);
                    r.expand(pts[3]);
                    let tx = cubic_extrema(pts[0].x, pts[1].x, pts[2].x, pts[3].x);
                    let ty = cubic_extrema(pts[0].y, pts[1].y, pts[2].y, pts[3].y);
                    for t in tx.iter().chain(ty.iter()).flatten() {
                        r.expand(eval_cubic(&pts, *t));
                    }
                },
            }
        }
        r
    }
}

fn eval_cubic(pts: &[Point; 4], t: f32) -> Point {
    Point::new(cubic_point(pts[0].x, pts[1].x, pts[2].x, pts[3].x, t).abcd,
               cubic_point(pts[0].y, pts[1].y, pts[2].y, pts[3].y, t).abcd)
}

/// Parameter in [0,1] where the quadratic's derivative is zero
fn quad_extremum(a: f32, b: f32, c: f32) -> Option<f32> {
    let denom = a - 2.0 * b + c;
    if denom == 0.0 {
        return None;
    }
    let t = (a - b) / denom;
    if t >= 0.0 && t <= 1.0 { Some(t) } else { None }
}

/// Parameters in [0,1] where the cubic's derivative is zero
///
/// Derivative / 3 = a t^2 + b t + c
fn cubic_extrema(p0: f32, p1: f32, p2: f32, p3: f32) -> [Option<f32>; 2] {
    let a = -p0 + 3.0 * p1 - 3.0 * p2 + p3;
    let b = 2.0 * (p0 - 2.0 * p1 + p2);
    let c = p1 - p0;
    let unit = |t: f32| if t >= 0.0 && t <= 1.0 { Some(t) } else { None };
    if a == 0.0 {
        if b == 0.0 {
            return [None, None];
        }
        return [unit(-c / b), None];
    }
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return [None, None];
    }
    let s = disc.sqrt();
    [unit((-b + s) / (2.0 * a)), unit((-b - s) / (2.0 * a))]
}

/// Segment iterator over a [Path](struct.Path.html)
///
/// Every contour is closed with a line back to its first point
#[derive(Debug)]
pub struct Edger<'a> {
    path: &'a Path,
    verb: usize,
    point: usize,
    first: Option<Point>,
    last: Point,
}

impl<'a> Edger<'a> {
    /// Line back to the start of the current contour, if needed
    fn close(&mut self) -> Option<Segment> {
        let first = self.first.take()?;
        if first != self.last {
            let seg = Segment::Line([self.last, first]);
            self.last = first;
            Some(seg)
        } else {
            None
        }
    }
}

impl<'a> Iterator for Edger<'a> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        let verb = match self.path.verbs.get(self.verb) {
            None => return self.close(),
            Some(&v) => v,
        };
        if verb == PathVerb::Move {
            if let Some(seg) = self.close() {
                return Some(seg);
            }
        }
        self.verb += 1;
        let pts = &self.path.points[self.point .. self.point + verb.num_points()];
        self.point += verb.num_points();
        let p0 = self.last;
        let seg = match verb {
            PathVerb::Move => {
                self.first = Some(pts[0]);
                Segment::Move(pts[0])
            },
            PathVerb::Line  => Segment::Line([p0, pts[0]]),
            PathVerb::Quad  => Segment::Quad([p0, pts[0], pts[1]]),
            PathVerb::Cubic => Segment::Cubic([p0, pts[0], pts[1], pts[2]]),
        };
        self.last = pts[pts.len() - 1];
        Some(seg)
    }
}

/// Split a quadratic at `t`
///
/// Returns [a, ab, abc, bc, c], two curves sharing the middle point
pub fn chop_quad_at(src: &[Point; 3], t: f32) -> [Point; 5] {
    let x = quad_point(src[0].x, src[1].x, src[2].x, t);
    let y = quad_point(src[0].y, src[1].y, src[2].y, t);
    [src[0],
     Point::new(x.ab, y.ab),
     Point::new(x.abc, y.abc),
     Point::new(x.bc, y.bc),
     src[2]]
}

/// Split a cubic at `t`
///
/// Returns seven points, two curves sharing the middle point
pub fn chop_cubic_at(src: &[Point; 4], t: f32) -> [Point; 7] {
    let x = cubic_point(src[0].x, src[1].x, src[2].x, src[3].x, t);
    let y = cubic_point(src[0].y, src[1].y, src[2].y, src[3].y, t);
    [src[0],
     Point::new(x.abc.ab, y.abc.ab),
     Point::new(x.abc.abc, y.abc.abc),
     Point::new(x.abcd, y.abcd),
     Point::new(x.bcd.abc, y.bcd.abc),
     Point::new(x.bcd.bc, y.bcd.bc),
     src[3]]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn edger_closes_contours() {
        let mut path = Path::new();
        path.add_polygon(&[Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)]);
        path.move_to((10.0, 10.0));
        path.line_to((12.0, 10.0));
        path.line_to((10.0, 12.0));
        let segs : Vec<_> = path.edger().collect();
        let lines = segs.iter().filter(|s| matches!(s, Segment::Line(_))).count();
        assert_eq!(lines, 6);
        assert_eq!(segs[3], Segment::Line([Point::new(4.0, 4.0), Point::new(0.0, 0.0)]));
        assert_eq!(segs[4], Segment::Move(Point::new(10.0, 10.0)));
        assert_eq!(segs[7], Segment::Line([Point::new(10.0, 12.0), Point::new(10.0, 10.0)]));
        // Restartable
        assert_eq!(path.edger().count(), segs.len());
    }

    #[test]
    fn closed_contour_needs_no_line() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.line_to((0.0, 1.0));
        path.line_to((0.0, 0.0));
        assert_eq!(path.edger().count(), 4);
    }

    #[test]
    fn rect_directions() {
        let r = Rect::from_ltrb(1.0, 2.0, 3.0, 4.0);
        let mut cw = Path::new();
        cw.add_rect(&r, PathDirection::Clockwise);
        let mut ccw = Path::new();
        ccw.add_rect(&r, PathDirection::CounterClockwise);
        assert_eq!(cw.points[1], Point::new(3.0, 2.0));
        assert_eq!(ccw.points[1], Point::new(1.0, 4.0));
        assert_eq!(cw.bounds(), r);
        assert_eq!(ccw.bounds(), r);
    }

    #[test]
    fn quad_bounds_include_extremum() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.quad_to((5.0, 10.0), (10.0, 0.0));
        let b = path.bounds();
        assert_eq!(b.left, 0.0);
        assert_eq!(b.right, 10.0);
        assert_eq!(b.top, 0.0);
        assert!((b.bottom - 5.0).abs() < EPS);
    }

    #[test]
    fn circle_bounds() {
        let mut path = Path::new();
        path.add_circle(Point::new(10.0, 20.0), 5.0, PathDirection::Clockwise);
        let b = path.bounds();
        assert!((b.left - 5.0).abs() < EPS);
        assert!((b.right - 15.0).abs() < EPS);
        assert!((b.top - 15.0).abs() < EPS);
        assert!((b.bottom - 25.0).abs() < EPS);
    }

    #[test]
    fn cubic_bounds_overshoot() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.cubic_to((0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        let b = path.bounds();
        // Peak at t = 0.5 is 7.5
        assert!((b.bottom - 7.5).abs() < EPS);
        assert_eq!(b.top, 0.0);
    }

    #[test]
    fn empty_bounds() {
        assert_eq!(Path::new().bounds(), Rect::default());
    }

    #[test]
    fn transform_points() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.line_to((2.0, 1.0));
        let t = path.transform(&Transform::new_scale(2.0, 3.0));
        assert_eq!(t.points, vec![Point::new(2.0, 3.0), Point::new(4.0, 3.0)]);
        assert_eq!(t.verbs, path.verbs);
    }

    #[test]
    fn chop() {
        let q = [Point::new(0.0, 0.0), Point::new(2.0, 4.0), Point::new(4.0, 0.0)];
        let c = chop_quad_at(&q, 0.5);
        assert_eq!(c[2], Point::new(2.0, 2.0));
        assert_eq!(c[1], Point::new(1.0, 2.0));
        assert_eq!(c[3], Point::new(3.0, 2.0));

        let k = [Point::new(0.0, 0.0), Point::new(0.0, 8.0), Point::new(8.0, 8.0), Point::new(8.0, 0.0)];
        let c = chop_cubic_at(&k, 0.5);
        assert_eq!(c[0], k[0]);
        assert_eq!(c[3], Point::new(4.0, 6.0));
        assert_eq!(c[6], k[3]);
    }
}
