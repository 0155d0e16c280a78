//! Composed Shaders

use crate::color::Pixel;
use crate::math::div255;
use crate::shader::Shader;
use crate::transform::Transform;
use crate::Shade;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shader with its space remapped by an extra transform
///
/// The wrapped shader sees `ctm * m` as its device transform. The combined
///   transform is kept here and handed to the wrapped shader again before
///   every row, so decorators sharing one shader do not see each other's
///   context.
#[derive(Debug,Clone)]
pub struct DecoratorShader {
    shader: Rc<Shader>,
    m: Transform,
    ctm: Cell<Option<Transform>>,
}

impl DecoratorShader {
    pub fn new(shader: Rc<Shader>, m: Transform) -> Self {
        Self { shader, m, ctm: Cell::new(None) }
    }
    pub fn inner(&self) -> &Rc<Shader> {
        &self.shader
    }
}

impl Shade for DecoratorShader {
    fn is_opaque(&self) -> bool {
        self.shader.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        let t = *ctm * self.m;
        let ok = self.shader.set_context(&t);
        self.ctm.set(if ok { Some(t) } else { None });
        ok
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        if let Some(t) = self.ctm.get() {
            if self.shader.set_context(&t) {
                self.shader.shade_row(x, y, row)
            }
        }
    }
}

/// Product of two shaders, component by component
#[derive(Debug,Clone)]
pub struct JoinedShader {
    a: Rc<Shader>,
    b: Rc<Shader>,
    /// Output of `b` for the current row
    scratch: RefCell<Vec<Pixel>>,
}

impl JoinedShader {
    pub fn new(a: Rc<Shader>, b: Rc<Shader>) -> Self {
        Self { a, b, scratch: RefCell::new(vec![]) }
    }
}

/// Multiply two premultiplied pixels as fractions of 255
pub fn multiply_pixels(p: Pixel, q: Pixel) -> Pixel {
    Pixel::pack_argb(div255(p.a() * q.a()),
                     div255(p.r() * q.r()),
                     div255(p.g() * q.g()),
                     div255(p.b() * q.b()))
}

impl Shade for JoinedShader {
    fn is_opaque(&self) -> bool {
        self.a.is_opaque() && self.b.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        self.a.set_context(ctm) && self.b.set_context(ctm)
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let mut other = std::mem::take(&mut *self.scratch.borrow_mut());
        other.clear();
        other.resize(row.len(), Pixel(0));
        self.a.shade_row(x, y, row);
        self.b.shade_row(x, y, &mut other);
        for (p, q) in row.iter_mut().zip(&other) {
            *p = multiply_pixels(*p, *q);
        }
        *self.scratch.borrow_mut() = other;
    }
}
