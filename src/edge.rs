//! Edges
//!
//! Directed, y-monotonic line segments with integer scanline bounds,
//!   produced from polygons and paths already mapped to device space.

use crate::clip::Clip;
use crate::curves::{flatten_quad, flatten_cubic};
use crate::math::round_to_int;
use crate::path_storage::{Path, Segment};
use crate::point::Point;

use std::cmp::Ordering;

/// Edge of a polygon or path
///
/// `start.y <= end.y` always holds; the original direction of the segment
///   is kept in `wind`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Edge {
    /// Upper end point
    pub start: Point,
    /// Lower end point
    pub end: Point,
    /// Inverse slope, dx/dy
    pub m: f32,
    /// x intercept at y = 0
    pub b: f32,
    /// First scanline covered
    pub y0: i32,
    /// One past the last scanline covered
    pub y1: i32,
    /// x at the center of the current scanline, starts at `y0 + 0.5`
    pub x: f32,
    /// Winding contribution, +1 for downward and -1 for upward segments
    pub wind: i32,
}

impl Edge {
    /// Create a new edge from `p0` to `p1`
    ///
    /// Winding is +1 if `p0` is above `p1`, -1 otherwise
    ///
    ///     use scanfill::{Edge, Point};
    ///     let e = Edge::new(Point::new(1.0, 4.0), Point::new(1.0, 0.0));
    ///     assert_eq!(e.wind, -1);
    ///     assert_eq!((e.y0, e.y1), (0, 4));
    ///     assert_eq!(e.start, Point::new(1.0, 0.0));
    pub fn new(p0: Point, p1: Point) -> Self {
        let wind = if p0.y < p1.y { 1 } else { -1 };
        Self::with_winding(p0, p1, wind)
    }
    /// Create a new edge with an explicit winding, end points are ordered
    ///   by y
    pub(crate) fn with_winding(p0: Point, p1: Point, wind: i32) -> Self {
        let (start, end) = if p0.y > p1.y { (p1, p0) } else { (p0, p1) };
        let m = (end.x - start.x) / (end.y - start.y);
        let b = start.x - m * start.y;
        let y0 = round_to_int(start.y);
        let y1 = round_to_int(end.y);
        let x = m * (y0 as f32 + 0.5) + b;
        Self { start, end, m, b, y0, y1, x, wind }
    }
    /// True if the edge crosses the center of scanline `y`
    pub fn is_valid(&self, y: i32) -> bool {
        self.y0 <= y && y < self.y1
    }
    /// x where the edge crosses the horizontal line at `y`
    pub fn compute_x(&self, y: f32) -> f32 {
        self.start.x + self.m * (y - self.start.y)
    }
    /// End points in their original drawing order
    pub fn directed(&self) -> (Point, Point) {
        if self.wind > 0 {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}

/// Order edges by first scanline, then by x on that scanline
pub fn edge_order(a: &Edge, b: &Edge) -> Ordering {
    a.y0.cmp(&b.y0)
        .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
}

/// Sort edges by first scanline, then by x
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_by(edge_order);
}

/// Build clipped edges for a closed polygon
///
/// The last point connects back to the first
///
///     use scanfill::{build_edges, Point};
///     let tri = [Point::new(1.0, -9.0), Point::new(7.0, -8.0), Point::new(3.0, -1.0)];
///     assert!(build_edges(8, 8, &tri).is_empty());
pub fn build_edges(width: usize, height: usize, pts: &[Point]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(pts.len() + 2);
    let n = pts.len();
    if n < 2 {
        return edges;
    }
    let mut clip = Clip::new(width, height);
    clip.move_to(pts[n - 1]);
    for p in pts {
        clip.line_to(&mut edges, *p);
    }
    log::trace!("polygon of {} points -> {} edges", n, edges.len());
    edges
}

/// Build clipped edges for every contour of a path
///
/// Curves are flattened and each contour is closed
pub fn build_path_edges(path: &Path, width: usize, height: usize) -> Vec<Edge> {
    let clip = Clip::new(width, height);
    let mut edges = vec![];
    let polyline = |edges: &mut Vec<Edge>, pts: Vec<Point>| {
        for w in pts.windows(2) {
            clip.line(edges, w[0], w[1]);
        }
    };
    let (w, h) = (width as f32, height as f32);
    for seg in path.edger() {
        match seg {
            Segment::Move(_) => {},
            Segment::Line(p) => clip.line(&mut edges, p[0], p[1]),
            Segment::Quad(p) if outside(&p, w, h) => clip.line(&mut edges, p[0], p[2]),
            Segment::Cubic(p) if outside(&p, w, h) => clip.line(&mut edges, p[0], p[3]),
            Segment::Quad(p) => polyline(&mut edges, flatten_quad(&p)),
            Segment::Cubic(p) => polyline(&mut edges, flatten_cubic(&p)),
        }
    }
    log::trace!("path -> {} edges", edges.len());
    edges
}

/// True if the control hull of a curve lies wholly beyond one side of the
///   device
///
/// Such a curve only contributes winding, which its chord carries as well
fn outside(pts: &[Point], width: f32, height: f32) -> bool {
    pts.iter().all(|p| p.y <= 0.0) || pts.iter().all(|p| p.y >= height) ||
        pts.iter().all(|p| p.x <= 0.0) || pts.iter().all(|p| p.x >= width)
}

/// Clip an existing set of edges to `width` by `height`
///
/// Edges already inside the box come back unchanged
pub fn clip_edges(edges: &[Edge], width: usize, height: usize) -> Vec<Edge> {
    let clip = Clip::new(width, height);
    let mut out = Vec::with_capacity(edges.len());
    for e in edges {
        let (p0, p1) = e.directed();
        clip.line(&mut out, p0, p1);
    }
    out
}
