//! Composable 2D shapes rendered to PostScript drawing commands.
//!
//! Shapes form an immutable tree: primitives (`Circle`, `Rectangle`,
//! `Spacer`, regular `Polygon`), decorators (scale, quarter-turn rotation)
//! and compounds (layered, vertical, horizontal stacks). Every shape reports
//! its bounding box and renders itself anchored at its own center.
//!
//! Conventions
//! - Build shapes through the factory functions in [`shape::build`]; they
//!   validate parameters and hand back shared [`ShapeRef`] handles.
//! - Rendering is pure: the same tree always yields the same commands.
//! - Output text is one PostScript command per line (see [`ps`]).

pub mod cfg;
pub mod error;
pub mod page;
pub mod ps;
pub mod rand;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::RenderCfg;
pub use error::ShapeError;
pub use shape::{Layout, Rotation, Shape, ShapeRef};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::RenderCfg;
    pub use crate::error::{PageError, ReplayError, ShapeError};
    pub use crate::page::Page;
    pub use crate::ps::{ink_extent, Command, Extent};
    pub use crate::shape::build::{
        circle, horizontal, layered, polygon, rectangle, rotated, scaled, spacer, square,
        triangle, vertical,
    };
    pub use crate::shape::{Layout, Rotation, Shape, ShapeRef};
    pub use nalgebra::Vector2 as Vec2;
}
