//! Clipping Region
//!
//! Segments are clipped to the device box `[0,right] x [0,bottom]` before
//!   becoming [Edge](../edge/struct.Edge.html)s. Portions left or right of
//!   the box are not discarded, they are projected onto the nearest
//!   vertical side so the winding they carry still reaches every row they
//!   span.

use crate::edge::Edge;
use crate::point::Point;

/// Clip Region
///
/// Clipping for the edge builder, also tracks the current point of a
///   polygon being added with `move_to` / `line_to`
#[derive(Debug,Default,Copy,Clone)]
pub struct Clip {
    /// Current Point
    p1: Point,
    /// Right side of the clip box
    right: f32,
    /// Bottom side of the clip box
    bottom: f32,
}

impl Clip {
    /// Create new Clipping region of `width` by `height`
    pub fn new(width: usize, height: usize) -> Self {
        Self { p1: Point::default(), right: width as f32, bottom: height as f32 }
    }
    /// Move to point `p`
    ///
    /// Point is saved internally as the current point
    pub fn move_to(&mut self, p: Point) {
        self.p1 = p;
    }
    /// Clip the line from the current point to `p` into `edges`
    ///
    /// `p` becomes the current point
    pub fn line_to(&mut self, edges: &mut Vec<Edge>, p: Point) {
        self.line(edges, self.p1, p);
        self.p1 = p;
    }
    /// Clip the directed line from `p0` to `p1` into `edges`
    ///
    /// Pushes between zero and three edges, each with `y0 < y1` and lying
    ///   within the clip box. Horizontal lines carry no winding and are
    ///   dropped.
    pub fn line(&self, edges: &mut Vec<Edge>, p0: Point, p1: Point) {
        if p0.y == p1.y {
            return;
        }
        let (mut p0, mut p1, wind) = if p0.y > p1.y {
            (p1, p0, -1)
        } else {
            (p0, p1, 1)
        };
        // Both points above or below clip box
        if p1.y <= 0.0 || p0.y >= self.bottom {
            return;
        }
        let m = (p1.x - p0.x) / (p1.y - p0.y);
        let b = p0.x - p0.y * m;

        // Top and Bottom
        if p0.y < 0.0 {
            p0 = Point::new(b, 0.0);
        }
        if p1.y > self.bottom {
            p1 = Point::new(m * self.bottom + b, self.bottom);
        }

        // Left and Right, p0 is now the left most point
        if p0.x > p1.x {
            std::mem::swap(&mut p0, &mut p1);
        }
        let right = self.right;
        let mut push = |a: Point, b: Point| {
            let e = Edge::with_winding(a, b, wind);
            if e.is_valid(e.y0) {
                edges.push(e);
            }
        };
        if p1.x <= 0.0 {
            push(Point::new(0.0, p0.y), Point::new(0.0, p1.y));
            return;
        }
        if p0.x >= right {
            push(Point::new(right, p0.y), Point::new(right, p1.y));
            return;
        }
        if p0.x < 0.0 {
            let y = -b / m;
            push(Point::new(0.0, p0.y), Point::new(0.0, y));
            p0 = Point::new(0.0, y);
        }
        if p1.x > right {
            let y = (right - b) / m;
            push(Point::new(right, p1.y), Point::new(right, y));
            p1 = Point::new(right, y);
        }
        push(p0, p1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(p0: (f32,f32), p1: (f32,f32)) -> Vec<Edge> {
        let c = Clip::new(10, 10);
        let mut edges = vec![];
        c.line(&mut edges, p0.into(), p1.into());
        edges
    }
    fn total_winding(edges: &[Edge], y: i32) -> i32 {
        edges.iter().filter(|e| e.is_valid(y)).map(|e| e.wind).sum()
    }

    #[test]
    fn inside() {
        let e = clip((1.0, 1.0), (3.0, 5.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].wind, 1);
        assert_eq!((e[0].y0, e[0].y1), (1, 5));
        let e = clip((3.0, 5.0), (1.0, 1.0));
        assert_eq!(e[0].wind, -1);
        assert_eq!(e[0].start, Point::new(1.0, 1.0));
    }

    #[test]
    fn horizontal_dropped() {
        assert!(clip((1.0, 1.0), (8.0, 1.0)).is_empty());
    }

    #[test]
    fn above_and_below() {
        assert!(clip((1.0, -5.0), (3.0, -1.0)).is_empty());
        assert!(clip((1.0, 10.0), (3.0, 15.0)).is_empty());
        assert!(clip((1.0, -5.0), (3.0, 0.0)).is_empty());
    }

    #[test]
    fn clip_top_bottom() {
        let e = clip((0.0, -10.0), (10.0, 20.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].start.y, 0.0);
        assert_eq!(e[0].end.y, 10.0);
        assert!((e[0].start.x - 10.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn left_projection() {
        let e = clip((-5.0, 2.0), (-1.0, 7.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].start, Point::new(0.0, 2.0));
        assert_eq!(e[0].end, Point::new(0.0, 7.0));
        assert_eq!(e[0].m, 0.0);
    }

    #[test]
    fn right_projection() {
        let e = clip((15.0, 8.0), (12.0, 1.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].wind, -1);
        assert_eq!(e[0].start, Point::new(10.0, 1.0));
    }

    #[test]
    fn straddle_both_sides() {
        let e = clip((-5.0, 0.0), (15.0, 10.0));
        assert_eq!(e.len(), 3);
        for y in 0 .. 10 {
            assert_eq!(total_winding(&e, y), 1, "row {}", y);
        }
        for edge in &e {
            assert!(edge.start.x >= 0.0 && edge.end.x <= 10.0);
            assert_eq!(edge.wind, 1);
        }
    }

    #[test]
    fn clip_state() {
        let mut c = Clip::new(10, 10);
        let mut edges = vec![];
        c.move_to(Point::new(1.0, 1.0));
        c.line_to(&mut edges, Point::new(1.0, 9.0));
        c.line_to(&mut edges, Point::new(8.0, 9.0));
        c.line_to(&mut edges, Point::new(1.0, 1.0));
        assert_eq!(edges.len(), 2);
        assert_eq!(edges.iter().map(|e| e.wind).sum::<i32>(), 0);
    }
}
