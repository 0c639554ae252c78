use nalgebra::{Matrix2, Vector2};

/// 2D affine map `x ↦ M x + t` (user space to page space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Counter-clockwise rotation by `deg` degrees.
    pub fn rotation(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: Matrix2::new(sx, 0.0, 0.0, sy),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }

    /// Linear part only; relative offsets ignore translation.
    #[inline]
    pub fn apply_delta(&self, d: Vector2<f64>) -> Vector2<f64> {
        self.m * d
    }

    /// Half-widths of the axis-aligned box around the image of a circle of
    /// radius `r` centred at the origin.
    pub fn circle_half_extent(&self, r: f64) -> Vector2<f64> {
        let row0 = Vector2::new(self.m[(0, 0)], self.m[(0, 1)]);
        let row1 = Vector2::new(self.m[(1, 0)], self.m[(1, 1)]);
        Vector2::new(r * row0.norm(), r * row1.norm())
    }
}
