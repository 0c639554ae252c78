//! Single-page PostScript documents.
//!
//! A page places shapes by their centers in page coordinates (points,
//! origin bottom-left) and wraps them in the DSC header/trailer a viewer
//! expects.

use nalgebra::Vector2;

use crate::cfg::RenderCfg;
use crate::error::PageError;
use crate::shape::ShapeRef;

/// Page size in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    width: f64,
    height: f64,
}

impl Default for Page {
    /// US Letter.
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
        }
    }
}

impl Page {
    pub fn new(width: f64, height: f64) -> Result<Self, PageError> {
        for (what, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PageError::BadDimension { what, value });
            }
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Document with every `(shape, center)` placement drawn in order.
    pub fn document(
        &self,
        placements: &[(ShapeRef, Vector2<f64>)],
        cfg: &RenderCfg,
    ) -> Result<String, PageError> {
        if let Some(index) = placements
            .iter()
            .position(|(_, at)| !(at.x.is_finite() && at.y.is_finite()))
        {
            return Err(PageError::BadPlacement { index });
        }
        let mut out = String::from("%!PS-Adobe-3.0\n");
        out.push_str(&format!(
            "%%BoundingBox: 0 0 {} {}\n",
            self.width.ceil(),
            self.height.ceil()
        ));
        out.push_str("%%Pages: 1\n%%EndComments\n%%Page: 1 1\n");
        for (shape, at) in placements {
            out.push_str("newpath\n");
            cfg.write_num(&mut out, at.x);
            out.push(' ');
            cfg.write_num(&mut out, at.y);
            out.push_str(" moveto\n");
            out.push_str(&shape.to_postscript_with(cfg));
        }
        out.push_str("showpage\n%%EOF\n");
        tracing::trace!(placements = placements.len(), bytes = out.len(), "page document");
        Ok(out)
    }

    /// One shape centred on the page.
    pub fn centered(&self, shape: ShapeRef, cfg: &RenderCfg) -> Result<String, PageError> {
        self.document(&[(shape, self.center())], cfg)
    }
}
