// SPDX-License-Identifier: MIT
//
// tc-term — Terminal side of textcanvas.
//
// Everything that knows about escape sequences lives here, so the canvas
// core never has to. The canvas only ever asks two questions of a color:
// "wrap this glyph" and "are you the no-color sentinel". Both answers come
// from `color::Color`, which builds its SGR sequences with the pure writers
// in `ansi`.
//
// The `terminal` module is a single size query used by the driver binary to
// pick a canvas size when the environment does not provide one.

pub mod ansi;
pub mod color;
pub mod terminal;

pub use color::{Attr, Color, Paint};
