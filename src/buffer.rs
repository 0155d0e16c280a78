//! Raster surface

use crate::color::Pixel;
use crate::PixelData;

/// Bitmap of premultiplied pixels
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Bitmap {
    /// Pixel data of Image
    pixels: Vec<Pixel>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl Bitmap {
    /// Create a new bitmap of width and height
    ///
    /// All pixels start fully transparent
    ///
    ///     use scanfill::{Bitmap, Pixel};
    ///     let bm = Bitmap::new(2, 3);
    ///     assert_eq!(bm.width(), 2);
    ///     assert_eq!(bm.height(), 3);
    ///     assert_eq!(bm.get(1, 2), Pixel(0));
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![Pixel(0); width * height] }
    }
    /// Wrap existing pixel data
    ///
    /// None if the data does not hold exactly width * height pixels
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Option<Self> {
        if pixels.len() != width * height {
            return None;
        }
        Some(Self { width, height, pixels })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// True if the bitmap holds no pixels
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[Pixel] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &self.pixels[i .. i + self.width]
    }
    /// Mutable pixels of row `y`
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &mut self.pixels[i .. i + self.width]
    }
    /// Pixel at (x,y)
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        assert!(x < self.width, "request {} >= {} width :: get", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: get", y, self.height);
        self.pixels[y * self.width + x]
    }
    /// Set pixel at (x,y)
    pub fn set(&mut self, x: usize, y: usize, p: Pixel) {
        assert!(x < self.width, "request {} >= {} width :: set", x, self.width);
        assert!(y < self.height, "request {} >= {} height :: set", y, self.height);
        self.pixels[y * self.width + x] = p;
    }
    /// Set every pixel to `p`
    pub fn fill(&mut self, p: Pixel) {
        self.pixels.iter_mut().for_each(|v| *v = p);
    }
    /// True if every pixel has an alpha of 255
    pub fn is_opaque(&self) -> bool {
        self.pixels.iter().all(|p| p.a() == 255)
    }
}

impl PixelData for Bitmap {
    fn width(&self) -> usize {
        self.width
    }
    fn height(&self) -> usize {
        self.height
    }
    fn pixeldata(&self) -> &[Pixel] {
        &self.pixels
    }
}
