
extern crate scanfill;

use scanfill::{Bitmap, Canvas, Color, Paint, Pixel, Rect};
use scanfill::io::{img_diff, read_png, to_rgba8, write_png};

use std::path::PathBuf;

fn tmp(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("scanfill_{}_{}", std::process::id(), name))
}

fn scene() -> Bitmap {
    let mut bm = Bitmap::new(16, 8);
    {
        let mut canvas = Canvas::new(&mut bm);
        canvas.draw_rect(Rect::from_ltrb(1.0, 1.0, 7.0, 7.0), &Paint::new(Color::rgb(1.0, 0.0, 0.0)));
        canvas.draw_rect(Rect::from_ltrb(9.0, 2.0, 15.0, 6.0), &Paint::new(Color::rgb(0.2, 0.4, 0.6)));
    }
    bm
}

#[test]
fn round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();
    let bm = scene();
    let f = tmp("round_trip.png");
    write_png(&bm, &f).unwrap();
    let back = read_png(&f).unwrap();
    assert_eq!(back, bm);
    assert!(img_diff(&f, &f).unwrap());
    let _ = std::fs::remove_file(&f);
}

#[test]
fn diff_detects_changes() {
    let a = scene();
    let mut b = scene();
    b.set(3, 3, Pixel(0xFF00_00FF));
    let fa = tmp("diff_a.png");
    let fb = tmp("diff_b.png");
    write_png(&a, &fa).unwrap();
    write_png(&b, &fb).unwrap();
    assert!(!img_diff(&fa, &fb).unwrap());

    let fc = tmp("diff_c.png");
    write_png(&Bitmap::new(4, 4), &fc).unwrap();
    assert!(!img_diff(&fa, &fc).unwrap());
    for f in &[fa, fb, fc] {
        let _ = std::fs::remove_file(f);
    }
}

#[test]
fn straight_alpha_on_disk() {
    let mut bm = Bitmap::new(2, 1);
    bm.set(0, 0, Pixel::pack_argb(128, 128, 64, 0));
    let rgba = to_rgba8(&bm);
    assert_eq!(&rgba[.. 4], &[255, 128, 0, 128]);
    assert_eq!(&rgba[4 ..], &[0, 0, 0, 0]);
}

#[test]
fn missing_file() {
    assert!(read_png(tmp("does_not_exist.png")).is_err());
}
