//! Scanline Spans

/// Horizontal run of covered pixels on row `y`, `[x0, x1)`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub y: i32,
    pub x0: i32,
    pub x1: i32,
}

impl Span {
    pub fn new(y: i32, x0: i32, x1: i32) -> Self {
        Self { y, x0, x1 }
    }
    /// Number of pixels covered
    pub fn len(&self) -> usize {
        (self.x1 - self.x0).max(0) as usize
    }
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0
    }
    /// Limit the span to `[0, width)`
    pub fn clamp(&self, width: usize) -> Self {
        let w = width as i32;
        Self::new(self.y, self.x0.max(0).min(w), self.x1.max(0).min(w))
    }
    /// True if pixel `x` is covered
    pub fn contains(&self, x: i32) -> bool {
        self.x0 <= x && x < self.x1
    }
}
