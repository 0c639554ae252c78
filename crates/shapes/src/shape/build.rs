//! Validating constructors, one per shape variant.
//!
//! All of them fail fast with a `ShapeError` on bad parameters, so a
//! `ShapeRef` in hand is always renderable. Derived extents are checked
//! too: a box that overflows to infinity is rejected like a bad parameter.

use std::sync::Arc;

use super::compound::{Compound, Layout};
use super::decorators::{Rotated, Rotation, Scaled};
use super::primitives::{Circle, Polygon, Rectangle, Spacer};
use super::{Shape, ShapeRef};
use crate::error::{check_non_negative, check_positive, ShapeError};

fn rejected(err: &ShapeError) {
    tracing::debug!(%err, "rejected shape");
}

fn positive(what: &'static str, value: f64) -> Result<f64, ShapeError> {
    check_positive(what, value).inspect_err(rejected)
}

/// Wrap a validated shape, rejecting it if its bounding box is not finite.
fn finish(shape: Shape) -> Result<ShapeRef, ShapeError> {
    let (w, h) = match &shape {
        Shape::Circle(_) => ("circle width", "circle height"),
        Shape::Rectangle(_) => ("rectangle width", "rectangle height"),
        Shape::Spacer(_) => ("spacer width", "spacer height"),
        Shape::Polygon(_) => ("polygon width", "polygon height"),
        Shape::Scaled(_) => ("scaled width", "scaled height"),
        Shape::Rotated(_) => ("rotated width", "rotated height"),
        Shape::Compound(_) => ("compound width", "compound height"),
    };
    check_non_negative(w, shape.width()).inspect_err(rejected)?;
    check_non_negative(h, shape.height()).inspect_err(rejected)?;
    Ok(Arc::new(shape))
}

pub fn circle(radius: f64) -> Result<ShapeRef, ShapeError> {
    let radius = positive("circle radius", radius)?;
    finish(Shape::Circle(Circle { radius }))
}

pub fn rectangle(width: f64, height: f64) -> Result<ShapeRef, ShapeError> {
    finish(Shape::Rectangle(Rectangle {
        width: positive("rectangle width", width)?,
        height: positive("rectangle height", height)?,
    }))
}

/// Invisible box; zero extents are allowed.
pub fn spacer(width: f64, height: f64) -> Result<ShapeRef, ShapeError> {
    finish(Shape::Spacer(Spacer {
        width: check_non_negative("spacer width", width).inspect_err(rejected)?,
        height: check_non_negative("spacer height", height).inspect_err(rejected)?,
    }))
}

pub fn polygon(sides: usize, side_length: f64) -> Result<ShapeRef, ShapeError> {
    if sides < 3 {
        return Err(ShapeError::TooFewSides { sides }).inspect_err(rejected);
    }
    finish(Shape::Polygon(Polygon {
        sides,
        side_length: positive("polygon side length", side_length)?,
    }))
}

/// `polygon(4, side_length)`.
pub fn square(side_length: f64) -> Result<ShapeRef, ShapeError> {
    polygon(4, side_length)
}

/// `polygon(3, side_length)`.
pub fn triangle(side_length: f64) -> Result<ShapeRef, ShapeError> {
    polygon(3, side_length)
}

/// Both factors must be positive: zero or mirrored scales have no
/// meaningful bounding box and make the page transform singular.
pub fn scaled(child: ShapeRef, x_scale: f64, y_scale: f64) -> Result<ShapeRef, ShapeError> {
    finish(Shape::Scaled(Scaled {
        x_scale: positive("x scale", x_scale)?,
        y_scale: positive("y scale", y_scale)?,
        child,
    }))
}

/// Cannot fail.
pub fn rotated(child: ShapeRef, rotation: Rotation) -> ShapeRef {
    Arc::new(Shape::Rotated(Rotated { child, rotation }))
}

pub fn compound(
    layout: Layout,
    children: impl IntoIterator<Item = ShapeRef>,
) -> Result<ShapeRef, ShapeError> {
    let children: Vec<ShapeRef> = children.into_iter().collect();
    if children.is_empty() {
        return Err(ShapeError::EmptyCompound { layout }).inspect_err(rejected);
    }
    finish(Shape::Compound(Compound::new(layout, children)))
}

pub fn layered(children: impl IntoIterator<Item = ShapeRef>) -> Result<ShapeRef, ShapeError> {
    compound(Layout::Layered, children)
}

pub fn vertical(children: impl IntoIterator<Item = ShapeRef>) -> Result<ShapeRef, ShapeError> {
    compound(Layout::Vertical, children)
}

pub fn horizontal(children: impl IntoIterator<Item = ShapeRef>) -> Result<ShapeRef, ShapeError> {
    compound(Layout::Horizontal, children)
}
