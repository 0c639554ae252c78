//! PostScript drawing commands.
//!
//! Purpose
//! - `Command`: the structural form of everything a shape emits.
//! - `to_text`: one command per line, numbers formatted by `RenderCfg`.
//! - `ink_extent`: replay a command list and measure what it strokes.
//!
//! Code cross-refs: `shape::Shape::commands`, `page::Page`, `cfg::RenderCfg`

mod affine;
mod command;
mod replay;

pub use affine::Affine2;
pub use command::{to_text, Command};
pub use replay::{ink_extent, Extent};

#[cfg(test)]
mod tests;
