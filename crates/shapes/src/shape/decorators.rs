//! Single-child decorators: axis scaling and quarter-turn rotation.

use super::ShapeRef;
use crate::ps::Command;

/// Stretches its child by independent x/y factors.
///
/// Renders as `gsave sx sy scale <child> grestore`, so the drawn geometry
/// agrees with the scaled bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaled {
    pub(crate) child: ShapeRef,
    pub(crate) x_scale: f64,
    pub(crate) y_scale: f64,
}

impl Scaled {
    #[inline]
    pub fn child(&self) -> &ShapeRef {
        &self.child
    }
    #[inline]
    pub fn factors(&self) -> (f64, f64) {
        (self.x_scale, self.y_scale)
    }
    pub fn width(&self) -> f64 {
        self.x_scale * self.child.width()
    }
    pub fn height(&self) -> f64 {
        self.y_scale * self.child.height()
    }

    pub(crate) fn emit(&self, out: &mut Vec<Command>) {
        out.push(Command::Gsave);
        out.push(Command::Scale(self.x_scale, self.y_scale));
        self.child.emit(out);
        out.push(Command::Grestore);
    }
}

/// Counter-clockwise quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    R90,
    R180,
    R270,
}

impl Rotation {
    pub fn degrees(self) -> f64 {
        match self {
            Rotation::R90 => 90.0,
            Rotation::R180 => 180.0,
            Rotation::R270 => 270.0,
        }
    }

    /// Quarter turns exchange the bounding-box axes; a half turn does not.
    #[inline]
    pub fn swaps_axes(self) -> bool {
        !matches!(self, Rotation::R180)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Rotated {
    pub(crate) child: ShapeRef,
    pub(crate) rotation: Rotation,
}

impl Rotated {
    #[inline]
    pub fn child(&self) -> &ShapeRef {
        &self.child
    }
    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn width(&self) -> f64 {
        if self.rotation.swaps_axes() {
            self.child.height()
        } else {
            self.child.width()
        }
    }

    pub fn height(&self) -> f64 {
        if self.rotation.swaps_axes() {
            self.child.width()
        } else {
            self.child.height()
        }
    }

    pub(crate) fn emit(&self, out: &mut Vec<Command>) {
        out.push(Command::Gsave);
        out.push(Command::Rotate(self.rotation.degrees()));
        self.child.emit(out);
        out.push(Command::Grestore);
    }
}
