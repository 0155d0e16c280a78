//! Reading and writing of Bitmaps as image files
//!
//! Pixels are stored premultiplied in a [Bitmap] and as straight RGBA in
//!   files; conversion happens here.

use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::error::Error;
use crate::PixelData;

use std::path::Path;

/// Read an image file into a Bitmap
pub fn read_png<P: AsRef<Path>>(filename: P) -> Result<Bitmap, Error> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let pixels = img.pixels()
        .map(|p| Pixel::from_rgba8(p.0))
        .collect();
    Bitmap::from_pixels(w as usize, h as usize, pixels)
        .ok_or(Error::ImageSize { width: w, height: h })
}

/// Write a Bitmap to an image file, format chosen by the extension
pub fn write_png<P: AsRef<Path>>(bitmap: &Bitmap, filename: P) -> Result<(), Error> {
    let buf = to_rgba8(bitmap);
    image::save_buffer(filename, &buf,
                       bitmap.width() as u32, bitmap.height() as u32,
                       image::ColorType::Rgba8)?;
    Ok(())
}

/// Straight RGBA bytes of a Bitmap in row-major order
pub fn to_rgba8(bitmap: &Bitmap) -> Vec<u8> {
    let mut buf = Vec::with_capacity(bitmap.width() * bitmap.height() * 4);
    for p in bitmap.pixeldata() {
        buf.extend_from_slice(&p.to_rgba8());
    }
    buf
}

/// Compare two image files pixel by pixel
///
/// Differences are logged at `info`
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, Error> {
    let b1 = read_png(f1)?;
    let b2 = read_png(f2)?;
    if b1.width() != b2.width() || b1.height() != b2.height() {
        log::info!("image sizes differ {}x{} != {}x{}",
                   b1.width(), b1.height(), b2.width(), b2.height());
        return Ok(false);
    }
    let mut flag = true;
    for y in 0 .. b1.height() {
        for (x, (p1, p2)) in b1.row(y).iter().zip(b2.row(y)).enumerate() {
            if p1 != p2 {
                log::info!("[{},{}]: {:08x} {:08x}", x, y, p1.0, p2.0);
                flag = false;
            }
        }
    }
    Ok(flag)
}
