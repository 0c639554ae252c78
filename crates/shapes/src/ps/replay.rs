//! Command replay: a tiny PostScript graphics-state machine.
//!
//! Model
//! - State = current transform (user → page), current point, current path.
//!   `gsave`/`grestore` push/pop the whole state.
//! - The pen starts at the page origin with an identity transform, as if the
//!   caller had issued `0 0 moveto`.
//! - Only stroked geometry counts towards the extent; a path that is never
//!   stroked (or a spacer that emits nothing) leaves no ink.

use nalgebra::Vector2;

use super::affine::Affine2;
use super::command::Command;
use crate::error::ReplayError;

/// Axis-aligned box in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Extent {
    fn point(p: Vector2<f64>) -> Self {
        Self { min: p, max: p }
    }

    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) * 0.5
    }

    /// Whether `self` lies inside `other`, with slack `eps`.
    pub fn within_eps(&self, other: &Extent, eps: f64) -> bool {
        self.min.x >= other.min.x - eps
            && self.min.y >= other.min.y - eps
            && self.max.x <= other.max.x + eps
            && self.max.y <= other.max.y + eps
    }
}

#[derive(Clone, Debug)]
struct GState {
    ctm: Affine2,
    pen: Option<Vector2<f64>>,
    subpath_start: Option<Vector2<f64>>,
    path: Option<Extent>,
}

impl GState {
    fn extend_path(&mut self, e: Extent) {
        self.path = Some(match self.path {
            Some(p) => p.union(&e),
            None => e,
        });
    }
}

/// Replay `commands` and return the box of everything stroked, or `None`
/// if nothing was stroked.
pub fn ink_extent(commands: &[Command]) -> Result<Option<Extent>, ReplayError> {
    let mut st = GState {
        ctm: Affine2::identity(),
        pen: Some(Vector2::zeros()),
        subpath_start: None,
        path: None,
    };
    let mut saved: Vec<GState> = Vec::new();
    let mut ink: Option<Extent> = None;

    for (index, cmd) in commands.iter().enumerate() {
        match *cmd {
            Command::Gsave => saved.push(st.clone()),
            Command::Grestore => {
                st = saved.pop().ok_or(ReplayError::UnbalancedRestore { index })?;
            }
            Command::NewPath => {
                st.pen = None;
                st.subpath_start = None;
                st.path = None;
            }
            Command::TranslateToCurrentPoint => {
                let pen = st.pen.ok_or(ReplayError::NoCurrentPoint { index })?;
                st.ctm.t = pen;
            }
            Command::MoveRel(d) => {
                let pen = st.pen.ok_or(ReplayError::NoCurrentPoint { index })?;
                let next = pen + st.ctm.apply_delta(d);
                st.pen = Some(next);
                st.subpath_start = Some(next);
            }
            Command::LineRel(d) => {
                let pen = st.pen.ok_or(ReplayError::NoCurrentPoint { index })?;
                let next = pen + st.ctm.apply_delta(d);
                st.extend_path(Extent::point(pen).union(&Extent::point(next)));
                if st.subpath_start.is_none() {
                    st.subpath_start = Some(pen);
                }
                st.pen = Some(next);
            }
            Command::Arc { radius } => {
                let start = st.ctm.apply(Vector2::new(radius, 0.0));
                if let Some(pen) = st.pen {
                    // arc joins an existing current point with a straight segment
                    st.extend_path(Extent::point(pen).union(&Extent::point(start)));
                } else {
                    st.subpath_start = Some(start);
                }
                let center = st.ctm.apply(Vector2::zeros());
                let half = st.ctm.circle_half_extent(radius);
                st.extend_path(Extent {
                    min: center - half,
                    max: center + half,
                });
                st.pen = Some(start);
            }
            Command::ClosePath => {
                if let Some(start) = st.subpath_start {
                    st.pen = Some(start);
                }
            }
            Command::Stroke => {
                if let Some(p) = st.path.take() {
                    ink = Some(match ink {
                        Some(i) => i.union(&p),
                        None => p,
                    });
                }
                st.pen = None;
                st.subpath_start = None;
            }
            Command::Rotate(deg) => st.ctm = st.ctm.compose(&Affine2::rotation(deg)),
            Command::Scale(sx, sy) => st.ctm = st.ctm.compose(&Affine2::scaling(sx, sy)),
        }
    }
    Ok(ink)
}
