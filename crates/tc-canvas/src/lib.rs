//! # tc-canvas — Braille-dot drawing surface
//!
//! A [`Canvas`] is a grid of terminal cells where every cell is split into a
//! 2×4 block of pixels and rendered as one Unicode Braille glyph. Drawing
//! happens in *screen* coordinates (pixels); colors and text live in
//! *output* coordinates (cells).
//!
//! - **[`surface`]** — `Surface` (width, height) for both coordinate spaces
//! - **[`braille`]** — 2×4 pixel block → Braille glyph
//! - **[`layer`]** — lazily activated per-cell overlays (color, text)
//! - **[`canvas`]** — the `Canvas`: pixels, overlays, text, compositing, rendering
//! - **[`raster`]** — lines, rectangles, triangles, circles, regular polygons
//! - **[`sample`](mod@sample)** — sample a function at evenly spaced points
//! - **[`error`]** — construction and auto-sizing errors
//!
//! ```
//! use tc_canvas::Canvas;
//!
//! let mut canvas = Canvas::new(15, 5)?;
//! canvas.stroke_line(0, 0, canvas.w(), canvas.h());
//! assert_eq!(canvas.to_string().lines().count(), 5);
//! # Ok::<(), tc_canvas::CanvasError>(())
//! ```

pub mod braille;
pub mod canvas;
pub mod error;
pub mod layer;
pub mod raster;
pub mod sample;
pub mod surface;

pub use canvas::{Canvas, PixelCoords};
pub use error::{AutoSizeError, CanvasError, Result};
pub use sample::sample;
pub use surface::Surface;
pub use tc_term::Color;
