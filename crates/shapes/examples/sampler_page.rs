//! Print a one-page PostScript sampler of every shape kind to stdout.
//!
//! Usage: `cargo run -p shapes --example sampler_page > sampler.ps`

use anyhow::Result;
use nalgebra::Vector2;
use shapes::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(std::io::stderr)
        .init();

    let leaves = horizontal([
        circle(30.0)?,
        spacer(20.0, 0.0)?,
        rectangle(80.0, 40.0)?,
        spacer(20.0, 0.0)?,
        triangle(60.0)?,
        spacer(20.0, 0.0)?,
        square(50.0)?,
        spacer(20.0, 0.0)?,
        polygon(7, 30.0)?,
    ])?;

    let tower = vertical([
        rectangle(100.0, 20.0)?,
        layered([circle(25.0)?, square(35.0)?])?,
        rotated(triangle(50.0)?, Rotation::R180),
    ])?;
    let decorated = horizontal([
        tower.clone(),
        spacer(30.0, 0.0)?,
        rotated(tower.clone(), Rotation::R90),
        spacer(30.0, 0.0)?,
        scaled(tower, 0.5, 1.5)?,
    ])?;

    let page = Page::default();
    let c = page.center();
    let doc = page.document(
        &[
            (leaves.clone(), Vector2::new(c.x, c.y + 200.0)),
            (decorated, Vector2::new(c.x, c.y - 100.0)),
        ],
        &RenderCfg::default(),
    )?;
    tracing::info!(
        width = leaves.width(),
        height = leaves.height(),
        "sampler row"
    );
    print!("{doc}");
    Ok(())
}
