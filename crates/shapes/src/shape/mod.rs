//! Shape tree: primitives, decorators and compounds.
//!
//! Purpose
//! - One closed `Shape` enum answers width, height and render for every
//!   variant; children are shared `Arc` handles so subtrees can be reused and
//!   trees can be rendered from several threads.
//!
//! Invariants
//! - Parameters are validated once, in `build`; afterwards every query is a
//!   total, pure function of the stored parameters and the children.
//! - `width() >= 0` and `height() >= 0`.
//! - Rendering is anchored at the shape's own center and leaves the caller's
//!   current point and transform untouched (every emission is wrapped in
//!   `gsave`/`grestore`, or emits nothing at all).
//!
//! Code cross-refs: `ps::Command`, `cfg::RenderCfg`, `build::*`

pub mod build;
mod compound;
mod decorators;
mod primitives;

use std::sync::Arc;

pub use compound::{Compound, Layout};
pub use decorators::{Rotated, Rotation, Scaled};
pub use primitives::{Circle, Polygon, Rectangle, Spacer};

use crate::cfg::RenderCfg;
use crate::ps::{to_text, Command};

/// Shared, immutable handle to a shape.
pub type ShapeRef = Arc<Shape>;

/// Every concrete shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Spacer(Spacer),
    Polygon(Polygon),
    Scaled(Scaled),
    Rotated(Rotated),
    Compound(Compound),
}

impl Shape {
    pub fn width(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.width(),
            Shape::Rectangle(s) => s.width(),
            Shape::Spacer(s) => s.width(),
            Shape::Polygon(s) => s.width(),
            Shape::Scaled(s) => s.width(),
            Shape::Rotated(s) => s.width(),
            Shape::Compound(s) => s.width(),
        }
    }

    pub fn height(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.height(),
            Shape::Rectangle(s) => s.height(),
            Shape::Spacer(s) => s.height(),
            Shape::Polygon(s) => s.height(),
            Shape::Scaled(s) => s.height(),
            Shape::Rotated(s) => s.height(),
            Shape::Compound(s) => s.height(),
        }
    }

    /// Append this shape's commands, anchored at the current point.
    pub fn emit(&self, out: &mut Vec<Command>) {
        match self {
            Shape::Circle(s) => s.emit(out),
            Shape::Rectangle(s) => s.emit(out),
            Shape::Spacer(_) => {}
            Shape::Polygon(s) => s.emit(out),
            Shape::Scaled(s) => s.emit(out),
            Shape::Rotated(s) => s.emit(out),
            Shape::Compound(s) => s.emit(out),
        }
    }

    pub fn commands(&self) -> Vec<Command> {
        let mut out = Vec::new();
        self.emit(&mut out);
        out
    }

    /// PostScript text with the default number format.
    pub fn to_postscript(&self) -> String {
        self.to_postscript_with(&RenderCfg::default())
    }

    pub fn to_postscript_with(&self, cfg: &RenderCfg) -> String {
        let commands = self.commands();
        tracing::trace!(
            nodes = self.node_count(),
            commands = commands.len(),
            "render shape"
        );
        to_text(&commands, cfg)
    }

    /// Nodes in the tree, counting shared subtrees once per reference.
    pub fn node_count(&self) -> usize {
        1 + match self {
            Shape::Scaled(s) => s.child().node_count(),
            Shape::Rotated(s) => s.child().node_count(),
            Shape::Compound(c) => c.children().iter().map(|ch| ch.node_count()).sum::<usize>(),
            _ => 0,
        }
    }
}
