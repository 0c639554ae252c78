//! Compound shapes: an ordered child list plus a layout strategy.
//!
//! Traversal (shared by every layout):
//! ```text
//! gsave
//! move by initial_offset
//! for child: move by half_step(child); child; move by half_step(child)
//! grestore
//! ```
//! Each child is drawn at its own center; the two half steps around a child
//! add up to its full extent along the stacking axis, so consecutive child
//! centers sit exactly `(a + b) / 2` apart.

use nalgebra::Vector2;

use super::{Shape, ShapeRef};
use crate::ps::Command;

/// How a compound arranges its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// All children centred on the compound's own center.
    Layered,
    /// Bottom to top, first child lowest.
    Vertical,
    /// Left to right, first child leftmost.
    Horizontal,
}

impl Layout {
    /// Bounding box of `children` under this layout.
    pub fn extent(self, children: &[ShapeRef]) -> (f64, f64) {
        let max_w = children.iter().map(|c| c.width()).fold(0.0, f64::max);
        let max_h = children.iter().map(|c| c.height()).fold(0.0, f64::max);
        match self {
            Layout::Layered => (max_w, max_h),
            Layout::Vertical => (max_w, children.iter().map(|c| c.height()).sum::<f64>()),
            Layout::Horizontal => (children.iter().map(|c| c.width()).sum::<f64>(), max_h),
        }
    }

    /// Move from the compound's center to the start of the stacking axis.
    /// `None` when there is nothing to move.
    pub fn initial_offset(self, width: f64, height: f64) -> Option<Vector2<f64>> {
        match self {
            Layout::Layered => None,
            Layout::Vertical => Some(Vector2::new(0.0, -height / 2.0)),
            Layout::Horizontal => Some(Vector2::new(-width / 2.0, 0.0)),
        }
    }

    /// Move from a slot edge to the child's center (and on to the far edge).
    pub fn half_step(self, child: &Shape) -> Option<Vector2<f64>> {
        match self {
            Layout::Layered => None,
            Layout::Vertical => Some(Vector2::new(0.0, child.height() / 2.0)),
            Layout::Horizontal => Some(Vector2::new(child.width() / 2.0, 0.0)),
        }
    }
}

/// Non-empty, ordered group of children.
///
/// Width and height are computed once at construction; children never change.
#[derive(Clone, Debug, PartialEq)]
pub struct Compound {
    pub(crate) layout: Layout,
    pub(crate) children: Vec<ShapeRef>,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Compound {
    pub(crate) fn new(layout: Layout, children: Vec<ShapeRef>) -> Self {
        let (width, height) = layout.extent(&children);
        Self {
            layout,
            children,
            width,
            height,
        }
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }
    #[inline]
    pub fn children(&self) -> &[ShapeRef] {
        &self.children
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn emit(&self, out: &mut Vec<Command>) {
        out.push(Command::Gsave);
        if let Some(d) = self.layout.initial_offset(self.width, self.height) {
            out.push(Command::MoveRel(d));
        }
        for child in &self.children {
            let step = self.layout.half_step(child);
            if let Some(d) = step {
                out.push(Command::MoveRel(d));
            }
            child.emit(out);
            if let Some(d) = step {
                out.push(Command::MoveRel(d));
            }
        }
        out.push(Command::Grestore);
    }
}
