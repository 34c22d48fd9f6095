use std::path::{Path, PathBuf};

use crate::foundation::core::Viewport;
use crate::foundation::error::{LandingError, LandingResult};

/// Rendered frame, straight-alpha RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Parses and rasterizes SVG documents. Holds the font database between frames.
pub struct Rasterizer {
    opts: usvg::Options<'static>,
}

impl std::fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rasterizer")
            .field("resources_dir", &self.opts.resources_dir)
            .field("font_faces", &self.opts.fontdb.len())
            .finish()
    }
}

impl Rasterizer {
    /// `resources_dir` resolves relative image hrefs; missing images are skipped.
    pub fn new(resources_dir: Option<&Path>) -> Self {
        let mut opts = usvg::Options {
            resources_dir: resources_dir.map(Path::to_path_buf),
            ..usvg::Options::default()
        };
        opts.fontdb_mut().load_system_fonts();
        tracing::debug!(faces = opts.fontdb.len(), "font database loaded");
        Self { opts }
    }

    pub fn resources_dir(&self) -> Option<&PathBuf> {
        self.opts.resources_dir.as_ref()
    }

    pub fn rasterize(&self, svg: &str, viewport: Viewport) -> LandingResult<FrameRGBA> {
        let tree = usvg::Tree::from_data(svg.as_bytes(), &self.opts)
            .map_err(|e| LandingError::render(format!("parse svg: {e}")))?;
        let (width, height) = viewport.pixel_size();
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| LandingError::render("failed to allocate frame pixmap"))?;

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(FrameRGBA {
            width,
            height,
            data,
        })
    }
}
