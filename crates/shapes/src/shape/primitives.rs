//! Leaf shapes: circle, rectangle, spacer and regular polygon.
//!
//! Each leaf draws a closed outline starting from its own center and wraps
//! the drawing in `gsave`/`grestore`. The spacer reserves room and draws
//! nothing.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::ps::Command;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub(crate) radius: f64,
}

impl Circle {
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn width(&self) -> f64 {
        2.0 * self.radius
    }
    #[inline]
    pub fn height(&self) -> f64 {
        2.0 * self.radius
    }

    pub(crate) fn emit(&self, out: &mut Vec<Command>) {
        out.extend([
            Command::Gsave,
            Command::TranslateToCurrentPoint,
            Command::NewPath,
            Command::Arc {
                radius: self.radius,
            },
            Command::ClosePath,
            Command::Stroke,
            Command::Grestore,
        ]);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rectangle {
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn emit(&self, out: &mut Vec<Command>) {
        let (w, h) = (self.width, self.height);
        out.extend([
            Command::Gsave,
            Command::MoveRel(Vector2::new(-w / 2.0, -h / 2.0)),
            Command::LineRel(Vector2::new(w, 0.0)),
            Command::LineRel(Vector2::new(0.0, h)),
            Command::LineRel(Vector2::new(-w, 0.0)),
            Command::ClosePath,
            Command::Stroke,
            Command::Grestore,
        ]);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spacer {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Spacer {
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Regular polygon with its first edge horizontal at the bottom.
///
/// Bounding box (n sides of length s, θ = π/n):
/// - height: `s·cot θ` for even n, `s·(1 + cos θ)/(2 sin θ)` for odd n.
/// - width: `s·cot θ` when 4 | n, `s/sin θ` for other even n, and
///   `s·sin(π(n−1)/(2n))/sin θ` for odd n.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polygon {
    pub(crate) sides: usize,
    pub(crate) side_length: f64,
}

impl Polygon {
    #[inline]
    pub fn sides(&self) -> usize {
        self.sides
    }
    #[inline]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }

    #[inline]
    fn half_angle(&self) -> f64 {
        PI / self.sides as f64
    }

    pub fn height(&self) -> f64 {
        let s = self.side_length;
        let th = self.half_angle();
        if self.sides % 2 == 0 {
            s * th.cos() / th.sin()
        } else {
            s * (1.0 + th.cos()) / (2.0 * th.sin())
        }
    }

    pub fn width(&self) -> f64 {
        let s = self.side_length;
        let n = self.sides as f64;
        let th = self.half_angle();
        if self.sides % 4 == 0 {
            s * th.cos() / th.sin()
        } else if self.sides % 2 == 0 {
            s / th.sin()
        } else {
            s * (PI * (n - 1.0) / (2.0 * n)).sin() / th.sin()
        }
    }

    /// Explicit edge vectors; the closing edge is left to `closepath`.
    pub fn edges(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        let n = self.sides as f64;
        (0..self.sides - 1).map(move |i| {
            let dir = i as f64 * 2.0 * PI / n;
            Vector2::new(dir.cos(), dir.sin()) * self.side_length
        })
    }

    pub(crate) fn emit(&self, out: &mut Vec<Command>) {
        out.push(Command::Gsave);
        out.push(Command::MoveRel(Vector2::new(
            -self.side_length / 2.0,
            -self.height() / 2.0,
        )));
        out.extend(self.edges().map(Command::LineRel));
        out.extend([Command::ClosePath, Command::Stroke, Command::Grestore]);
    }
}
