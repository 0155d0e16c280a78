//! Scanline Rasterizer
//!
//! Aliased fills, a pixel is covered when its center `(x+0.5, y+0.5)`
//!   lies inside the shape. Covered pixels are reported as [Span]s.

use crate::edge::{Edge, build_edges, build_path_edges, sort_edges};
use crate::error::Error;
use crate::math::{pin, round_to_int};
use crate::path_storage::Path;
use crate::point::Point;
use crate::scan::Span;

use std::cmp::Ordering;

/// Fill a convex polygon
///
/// Each row's crossings are sorted by x and paired, winding is ignored.
///   Only valid for shapes crossing every row an even number of times.
pub fn fill_convex<F>(edges: &mut [Edge], width: usize, height: usize, mut blit: F)
    where F: FnMut(Span)
{
    if edges.len() < 2 {
        return;
    }
    sort_edges(edges);
    let y_top = edges[0].y0.max(0);
    let y_bot = edges.iter().map(|e| e.y1).max().unwrap_or(0).min(height as i32);
    let w = width as i32;
    let mut xs = Vec::with_capacity(edges.len());
    for y in y_top .. y_bot {
        xs.clear();
        let fy = y as f32 + 0.5;
        xs.extend(edges.iter()
                  .take_while(|e| e.y0 <= y)
                  .filter(|e| e.is_valid(y))
                  .map(|e| e.compute_x(fy)));
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        for pair in xs.chunks_exact(2) {
            let x0 = pin(round_to_int(pair[0]), w);
            let x1 = pin(round_to_int(pair[1]), w);
            if x0 < x1 {
                blit(Span::new(y, x0, x1));
            }
        }
    }
}

/// Fill an arbitrary set of closed contours with the non-zero winding rule
///
/// Edges are swept row by row; the active edges of a row are a prefix of
///   `edges`, kept sorted by x. A row whose winding does not return to zero
///   stops the fill with [Error::WindingImbalance]; spans already reported
///   are left in place.
pub fn fill_path<F>(mut edges: Vec<Edge>, mut blit: F) -> Result<(), Error>
    where F: FnMut(Span)
{
    if edges.is_empty() {
        return Ok(());
    }
    sort_edges(&mut edges);
    let mut top = edges[0].y0;
    while !edges.is_empty() {
        let mut w = 0;
        let mut left = 0;
        let mut i = 0;
        let mut keep = 0;
        while i < edges.len() && edges[i].is_valid(top) {
            let e = edges[i];
            let x = round_to_int(e.x);
            if w == 0 {
                left = x;
            }
            w += e.wind;
            if w == 0 && left < x {
                blit(Span::new(top, left, x));
            }
            if e.is_valid(top + 1) {
                edges[keep] = Edge { x: e.x + e.m, .. e };
                keep += 1;
            }
            i += 1;
        }
        if w != 0 {
            log::warn!("winding imbalance {} at row {}", w, top);
            return Err(Error::WindingImbalance { row: top, winding: w });
        }
        edges.drain(keep .. i);
        top += 1;
        let mut n = keep;
        while n < edges.len() && edges[n].is_valid(top) {
            n += 1;
        }
        log::trace!("row {} active edges {}", top, n);
        edges[.. n].sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    }
    Ok(())
}

/// Scanline Rasterizer
///
/// Collects clipped edges from polygons and paths for a `width` by
///   `height` device, then fills them
///
///     use scanfill::{Rasterizer, Point, Span};
///     let mut ras = Rasterizer::new(8, 8);
///     ras.add_polygon(&[Point::new(1.0, 1.0), Point::new(3.0, 1.0),
///                       Point::new(3.0, 3.0), Point::new(1.0, 3.0)]);
///     let mut spans = vec![];
///     ras.fill_convex(|s| spans.push(s));
///     assert_eq!(spans, vec![Span::new(1, 1, 3), Span::new(2, 1, 3)]);
#[derive(Debug,Default,Clone)]
pub struct Rasterizer {
    width: usize,
    height: usize,
    edges: Vec<Edge>,
}

impl Rasterizer {
    /// Create a new rasterizer for a device of `width` by `height`
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, edges: vec![] }
    }
    /// Remove all edges
    pub fn reset(&mut self) {
        self.edges.clear();
    }
    /// Edges collected so far
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
    /// Add a closed polygon in device space
    pub fn add_polygon(&mut self, pts: &[Point]) {
        let e = build_edges(self.width, self.height, pts);
        self.edges.extend(e);
    }
    /// Add every contour of a path in device space
    pub fn add_path(&mut self, path: &Path) {
        let e = build_path_edges(path, self.width, self.height);
        self.edges.extend(e);
    }
    /// Fill the collected edges as a convex polygon, see [fill_convex]
    pub fn fill_convex<F: FnMut(Span)>(&mut self, blit: F) {
        fill_convex(&mut self.edges, self.width, self.height, blit);
        self.edges.clear();
    }
    /// Fill the collected edges with the winding rule, see [fill_path]
    pub fn fill_path<F: FnMut(Span)>(&mut self, blit: F) -> Result<(), Error> {
        let edges = std::mem::take(&mut self.edges);
        fill_path(edges, blit)
    }
}
