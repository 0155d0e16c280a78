//! Paint

use crate::blend::BlendMode;
use crate::color::Color;
use crate::shader::Shader;

use std::rc::Rc;

/// How to color a shape
///
/// A shader, when present, replaces the color
///
///     use scanfill::{Paint, Color, BlendMode};
///     let p = Paint::new(Color::white()).blend_mode(BlendMode::Xor);
///     assert_eq!(p.get_color(), Color::white());
///     assert_eq!(p.get_blend_mode(), BlendMode::Xor);
///     assert!(p.get_shader().is_none());
#[derive(Debug,Clone)]
pub struct Paint {
    color: Color,
    mode: BlendMode,
    shader: Option<Rc<Shader>>,
}

impl Default for Paint {
    fn default() -> Self {
        Self { color: Color::black(), mode: BlendMode::default(), shader: None }
    }
}

impl Paint {
    /// Paint with a solid color
    pub fn new(color: Color) -> Self {
        Self { color, .. Self::default() }
    }
    /// Paint with a shader
    pub fn with_shader(shader: Rc<Shader>) -> Self {
        Self { shader: Some(shader), .. Self::default() }
    }
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
    pub fn blend_mode(mut self, mode: BlendMode) -> Self {
        self.mode = mode;
        self
    }
    pub fn shader(mut self, shader: Option<Rc<Shader>>) -> Self {
        self.shader = shader;
        self
    }
    pub fn get_color(&self) -> Color {
        self.color
    }
    pub fn get_blend_mode(&self) -> BlendMode {
        self.mode
    }
    pub fn get_shader(&self) -> Option<&Rc<Shader>> {
        self.shader.as_ref()
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Paint {
        Paint::new(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let p = Paint::default();
        assert_eq!(p.get_color(), Color::black());
        assert_eq!(p.get_blend_mode(), BlendMode::SrcOver);
        assert!(p.get_shader().is_none());
    }

    #[test]
    fn builders() {
        let s = Rc::new(Shader::solid(Color::white()));
        let p = Paint::with_shader(s.clone()).blend_mode(BlendMode::DstIn);
        assert!(Rc::ptr_eq(p.get_shader().unwrap(), &s));
        assert_eq!(p.get_blend_mode(), BlendMode::DstIn);
        let p = p.shader(None).color(Color::white());
        assert!(p.get_shader().is_none());
        assert_eq!(Paint::from(Color::white()).get_color(), p.get_color());
    }
}
