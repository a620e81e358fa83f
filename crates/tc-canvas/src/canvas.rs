//! The canvas: pixel grid, color and text overlays, and rendering.
//!
//! # Coordinate spaces
//!
//! - **Screen** coordinates address pixels. The pixel grid is
//!   `screen.width × screen.height`, indexed `[y][x]`.
//! - **Output** coordinates address terminal cells. One cell covers a 2×4
//!   block of pixels, so `screen = output × (2, 4)`.
//!
//! Pixels are written in screen space, colors and text in output space. A
//! pixel at `(x, y)` belongs to the cell `(x / 2, y / 4)`.
//!
//! # Overlays
//!
//! The color overlay is activated by the first [`Canvas::set_color`], the
//! text overlay by the first text operation (or by compositing a canvas that
//! has one). [`Canvas::clear`] resets them in place and never deactivates
//! them.
//!
//! Out-of-bounds coordinates are never an error. Reads return `None`,
//! writes are dropped.

use std::fmt;

use log::{debug, trace};
use tc_term::Color;

use crate::braille::{self, Block};
use crate::error::{AutoSizeError, CanvasError, Result};
use crate::layer::{ColorLayer, TextLayer};
use crate::surface::Surface;

/// Largest output width whose screen width still fits in a `u16`.
const MAX_WIDTH: i32 = 32_767;
/// Largest output height whose screen height still fits in a `u16`.
const MAX_HEIGHT: i32 = 16_383;

/// Environment variable read by [`Canvas::auto_size`] for the width.
pub const WIDTH_VAR: &str = "WIDTH";
/// Environment variable read by [`Canvas::auto_size`] for the height.
pub const HEIGHT_VAR: &str = "HEIGHT";

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A drawing surface rendered as Braille glyphs.
///
/// ```
/// use tc_canvas::{Canvas, Color};
///
/// let mut canvas = Canvas::new(3, 2)?;
/// canvas.set_color(Color::new().bright_green());
/// canvas.set_pixel(0, 0, true);
/// assert_eq!(canvas.to_string(), "\x1b[0;92m⠁\x1b[0m⠀⠀\n⠀⠀⠀\n");
/// # Ok::<(), tc_canvas::CanvasError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    output: Surface,
    screen: Surface,
    buffer: Vec<Vec<bool>>,
    color_buffer: ColorLayer,
    text_buffer: TextLayer,
    is_inverted: bool,
    color: Color,
}

impl Canvas {
    /// Output size used by [`Canvas::default`].
    pub const DEFAULT_SIZE: (i32, i32) = (80, 24);

    /// Create a blank canvas of `width × height` terminal cells.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidSize`] unless `1 <= width <= 32767` and
    /// `1 <= height <= 16383`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if !is_valid_size(width, height) {
            return Err(CanvasError::InvalidSize { width, height });
        }
        Ok(Self::blank(width, height))
    }

    /// Infallible constructor. Callers guarantee the size is valid.
    fn blank(width: i32, height: i32) -> Self {
        let output = Surface::new(width, height);
        let screen = Surface::new(width * 2, height * 4);
        let (cols, rows) = screen.dims();

        debug!("new canvas: output={output}, screen={screen}");

        Self {
            output,
            screen,
            buffer: vec![vec![false; cols]; rows],
            color_buffer: ColorLayer::default(),
            text_buffer: TextLayer::default(),
            is_inverted: false,
            color: Color::NONE,
        }
    }

    /// Create a canvas sized by the `WIDTH` and `HEIGHT` environment
    /// variables.
    ///
    /// # Errors
    ///
    /// See [`Canvas::auto_size`], plus [`AutoSizeError::Canvas`] if the
    /// values are not a valid size.
    pub fn auto() -> std::result::Result<Self, AutoSizeError> {
        let (width, height) = Self::auto_size()?;
        Ok(Self::new(width, height)?)
    }

    /// Read `WIDTH` and `HEIGHT` from the environment.
    ///
    /// Shells usually don't export these, so run with `WIDTH=$COLUMNS
    /// HEIGHT=$LINES`.
    ///
    /// # Errors
    ///
    /// [`AutoSizeError::Missing`] if a variable is unset,
    /// [`AutoSizeError::NotANumber`] if it does not parse as an integer.
    pub fn auto_size() -> std::result::Result<(i32, i32), AutoSizeError> {
        Self::auto_size_from(|var| std::env::var(var).ok())
    }

    /// [`Canvas::auto_size`] with a custom variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Canvas::auto_size`].
    pub fn auto_size_from<F>(lookup: F) -> std::result::Result<(i32, i32), AutoSizeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| {
            let value = lookup(var).ok_or(AutoSizeError::Missing(var))?;
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| AutoSizeError::NotANumber { var, value })
        };
        Ok((read(WIDTH_VAR)?, read(HEIGHT_VAR)?))
    }

    /// One-line summary: `Canvas(output=(W×H), screen=(W×H)))`.
    #[must_use]
    pub fn repr(&self) -> String {
        format!("Canvas(output=({}), screen=({})))", self.output, self.screen)
    }

    // -- Dimensions ---------------------------------------------------------

    /// Size in terminal cells.
    #[inline]
    #[must_use]
    pub const fn output(&self) -> Surface {
        self.output
    }

    /// Size in pixels.
    #[inline]
    #[must_use]
    pub const fn screen(&self) -> Surface {
        self.screen
    }

    /// Last pixel column (`screen.width - 1`).
    #[inline]
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.screen.width() - 1
    }

    /// Last pixel row (`screen.height - 1`).
    #[inline]
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.screen.height() - 1
    }

    /// Horizontal center pixel (`screen.width / 2`).
    #[inline]
    #[must_use]
    pub const fn cx(&self) -> i32 {
        self.screen.width() / 2
    }

    /// Vertical center pixel (`screen.height / 2`).
    #[inline]
    #[must_use]
    pub const fn cy(&self) -> i32 {
        self.screen.height() / 2
    }

    /// `true` if `(x, y)` is a cell inside the output.
    #[inline]
    #[must_use]
    pub const fn check_output_bounds(&self, x: i32, y: i32) -> bool {
        self.output.contains(x, y)
    }

    /// `true` if `(x, y)` is a pixel inside the screen.
    #[inline]
    #[must_use]
    pub const fn check_screen_bounds(&self, x: i32, y: i32) -> bool {
        self.screen.contains(x, y)
    }

    // -- Buffers ------------------------------------------------------------

    /// Pixel grid, indexed `[y][x]`.
    #[must_use]
    pub fn pixels(&self) -> &[Vec<bool>] {
        &self.buffer
    }

    /// Color overlay, indexed `[y][x]`. Empty until colorized.
    #[must_use]
    pub fn color_buffer(&self) -> &[Vec<Color>] {
        self.color_buffer.rows()
    }

    /// Text overlay, indexed `[y][x]`. Empty until textual.
    #[must_use]
    pub fn text_buffer(&self) -> &[Vec<String>] {
        self.text_buffer.rows()
    }

    /// `true` once the color overlay has been activated.
    #[inline]
    #[must_use]
    pub const fn is_colorized(&self) -> bool {
        self.color_buffer.is_active()
    }

    /// `true` once the text overlay has been activated.
    #[inline]
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        self.text_buffer.is_active()
    }

    /// Current pen color.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    // -- Pen state ----------------------------------------------------------

    /// `true` while pixel writes are negated.
    #[inline]
    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.is_inverted
    }

    /// Toggle inverted mode. While inverted, every pixel write is negated.
    pub const fn invert(&mut self) {
        self.is_inverted = !self.is_inverted;
    }

    /// Set the pen color for subsequent pixels and text.
    ///
    /// Activates the color overlay. Already drawn pixels keep their color.
    pub fn set_color(&mut self, color: Color) {
        self.activate_color();
        self.color = color;
    }

    fn activate_color(&mut self) {
        let (cols, rows) = self.output.dims();
        if self.color_buffer.activate(cols, rows, &Color::NONE) {
            debug!("color overlay activated ({})", self.output);
        }
    }

    fn activate_text(&mut self) {
        let (cols, rows) = self.output.dims();
        if self.text_buffer.activate(cols, rows, &String::new()) {
            debug!("text overlay activated ({})", self.output);
        }
    }

    // -- Pixels -------------------------------------------------------------

    /// Turn every pixel off and reset active overlays, in place.
    pub fn clear(&mut self) {
        for pixel in self.buffer.iter_mut().flatten() {
            *pixel = false;
        }
        self.color_buffer.reset(&Color::NONE);
        self.text_buffer.reset(&String::new());
    }

    /// Turn every pixel on. Ignores inverted mode and colors.
    pub fn fill(&mut self) {
        for pixel in self.buffer.iter_mut().flatten() {
            *pixel = true;
        }
    }

    /// Pixel state at `(x, y)`, or `None` outside the screen.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (x, y) = self.screen.index(x, y)?;
        Some(self.buffer[y][x])
    }

    /// Write one pixel. Writes outside the screen are dropped.
    ///
    /// While inverted, `state` is negated. When colorized, the owning cell
    /// takes the pen color if the pixel ends up on, and loses its color if
    /// it ends up off.
    pub fn set_pixel(&mut self, x: i32, y: i32, state: bool) {
        let Some((x, y)) = self.screen.index(x, y) else {
            return;
        };
        let state = state ^ self.is_inverted;

        self.buffer[y][x] = state;

        if let Some(cell) = self.color_buffer.get_mut(x / 2, y / 4) {
            *cell = if state { self.color } else { Color::NONE };
        }
    }

    /// Every screen coordinate, row by row.
    #[must_use]
    pub const fn iter_buffer(&self) -> PixelCoords {
        PixelCoords::new(self.screen)
    }

    /// Every output cell with the pixel block under it, row by row.
    pub fn iter_blocks(&self) -> impl Iterator<Item = ((usize, usize), Block)> + '_ {
        let (cols, rows) = self.output.dims();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| ((col, row), self.block(col, row))))
    }

    fn block(&self, col: usize, row: usize) -> Block {
        let mut block = [[false; 2]; 4];
        for (dy, dots) in block.iter_mut().enumerate() {
            let line = &self.buffer[row * 4 + dy];
            dots.copy_from_slice(&line[col * 2..col * 2 + 2]);
        }
        block
    }

    // -- Text ---------------------------------------------------------------

    /// Write `text` left to right from cell `(x, y)`, one char per cell.
    ///
    /// Chars falling outside the output are skipped but still advance. A
    /// space erases the cell back to the pixels below it. Other chars are
    /// stored wrapped in the pen color.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.write_text(text, x, y, Advance::Right, Spaces::Erase);
    }

    /// [`Canvas::draw_text`], top to bottom.
    pub fn draw_text_vertical(&mut self, text: &str, x: i32, y: i32) {
        self.write_text(text, x, y, Advance::Down, Spaces::Erase);
    }

    /// [`Canvas::draw_text`], except spaces leave the cell untouched.
    pub fn merge_text(&mut self, text: &str, x: i32, y: i32) {
        self.write_text(text, x, y, Advance::Right, Spaces::Skip);
    }

    /// [`Canvas::merge_text`], top to bottom.
    pub fn merge_text_vertical(&mut self, text: &str, x: i32, y: i32) {
        self.write_text(text, x, y, Advance::Down, Spaces::Skip);
    }

    fn write_text(&mut self, text: &str, mut x: i32, mut y: i32, advance: Advance, spaces: Spaces) {
        self.activate_text();

        for ch in text.chars() {
            let cell = self
                .output
                .index(x, y)
                .and_then(|(col, row)| self.text_buffer.get_mut(col, row));
            if let Some(cell) = cell {
                if ch != ' ' {
                    *cell = self.color.format_char(ch);
                } else if spaces == Spaces::Erase {
                    cell.clear();
                }
            }

            match advance {
                Advance::Right => x = x.saturating_add(1),
                Advance::Down => y = y.saturating_add(1),
            }
        }
    }

    // -- Compositing --------------------------------------------------------

    /// Copy `other` onto this canvas with its origin at pixel `(dx, dy)`.
    ///
    /// Every pixel of `other` overrides the one below it, on or off. Colors
    /// and text of covered cells are copied too, including empty text.
    /// Inverted mode does not apply.
    pub fn draw_canvas(&mut self, other: &Self, dx: i32, dy: i32) {
        self.composite(other, dx, dy, Blend::Draw);
    }

    /// Like [`Canvas::draw_canvas`], but off pixels and empty text cells of
    /// `other` are transparent. A cell's color is copied only along with a
    /// pixel that is on.
    pub fn merge_canvas(&mut self, other: &Self, dx: i32, dy: i32) {
        self.composite(other, dx, dy, Blend::Merge);
    }

    fn composite(&mut self, other: &Self, dx: i32, dy: i32, blend: Blend) {
        trace!("{blend:?} {} onto {} at ({dx}, {dy})", other.repr(), self.repr());

        if other.is_colorized() {
            self.activate_color();
        }
        if other.is_textual() {
            self.activate_text();
        }

        for (sy, line) in other.buffer.iter().enumerate() {
            for (sx, &pixel) in line.iter().enumerate() {
                let (Some(x), Some(y)) = (offset(sx, dx), offset(sy, dy)) else {
                    continue;
                };
                let Some((x, y)) = self.screen.index(x, y) else {
                    continue;
                };

                let copy_pixel = blend == Blend::Draw || pixel;
                if copy_pixel {
                    self.buffer[y][x] = pixel;
                    if let (Some(src), Some(dst)) = (
                        other.color_buffer.get(sx / 2, sy / 4),
                        self.color_buffer.get_mut(x / 2, y / 4),
                    ) {
                        *dst = *src;
                    }
                }

                let text = other
                    .text_buffer
                    .get(sx / 2, sy / 4)
                    .filter(|text| blend == Blend::Draw || !text.is_empty());
                if let (Some(src), Some(dst)) = (text, self.text_buffer.get_mut(x / 2, y / 4)) {
                    dst.clone_from(src);
                }
            }
        }
    }

    // -- Rendering ----------------------------------------------------------

    /// Render to a string, one line per output row, each ending in `\n`.
    ///
    /// A cell shows its text if it has any, otherwise the Braille glyph of
    /// its pixels in the cell's color.
    #[must_use]
    pub fn render(&self) -> String {
        let (cols, rows) = self.output.dims();
        let mut out = String::with_capacity((cols * 3 + 1) * rows);

        for ((col, row), block) in self.iter_blocks() {
            match self.text_buffer.get(col, row) {
                Some(text) if !text.is_empty() => out.push_str(text),
                _ => {
                    let glyph = braille::encode(block);
                    match self.color_buffer.get(col, row) {
                        Some(color) if !color.is_none() => out.push_str(&color.format_char(glyph)),
                        _ => out.push(glyph),
                    }
                }
            }
            if col + 1 == cols {
                out.push('\n');
            }
        }

        out
    }
}

impl Default for Canvas {
    /// An 80×24 canvas.
    fn default() -> Self {
        let (width, height) = Self::DEFAULT_SIZE;
        Self::blank(width, height)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("output", &self.output)
            .field("screen", &self.screen)
            .field("is_inverted", &self.is_inverted)
            .field("is_colorized", &self.is_colorized())
            .field("is_textual", &self.is_textual())
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

const fn is_valid_size(width: i32, height: i32) -> bool {
    0 < width && width <= MAX_WIDTH && 0 < height && height <= MAX_HEIGHT
}

fn offset(index: usize, delta: i32) -> Option<i32> {
    i32::try_from(index).ok()?.checked_add(delta)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Advance {
    Right,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Spaces {
    Erase,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blend {
    Draw,
    Merge,
}

// ---------------------------------------------------------------------------
// PixelCoords
// ---------------------------------------------------------------------------

/// Iterator over every `(x, y)` of a screen, `y` outer and `x` inner.
///
/// Cloning restarts nothing; it forks the iteration at the current point.
/// Call [`Canvas::iter_buffer`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct PixelCoords {
    screen: Surface,
    x: i32,
    y: i32,
}

impl PixelCoords {
    const fn new(screen: Surface) -> Self {
        Self { screen, x: 0, y: 0 }
    }

    fn remaining(&self) -> usize {
        let (cols, rows) = self.screen.dims();
        let done = usize::try_from(self.y).unwrap_or(0) * cols + usize::try_from(self.x).unwrap_or(0);
        (cols * rows).saturating_sub(done)
    }
}

impl Iterator for PixelCoords {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.screen.height() || self.screen.width() <= 0 {
            return None;
        }
        let item = (self.x, self.y);
        self.x += 1;
        if self.x >= self.screen.width() {
            self.x = 0;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for PixelCoords {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_row(canvas: &Canvas, y: usize) -> Vec<&str> {
        canvas.text_buffer()[y].iter().map(String::as_str).collect()
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn output_and_screen_sizes() {
        let canvas = Canvas::new(7, 4).unwrap();
        assert_eq!(canvas.output(), Surface::new(7, 4));
        assert_eq!(canvas.screen(), Surface::new(14, 16));
        assert_eq!(canvas.pixels().len(), 16);
        assert_eq!(canvas.pixels()[0].len(), 14);
    }

    #[test]
    fn default_is_80_by_24() {
        let canvas = Canvas::default();
        assert_eq!(canvas.output(), Surface::new(80, 24));
        assert_eq!(canvas.screen(), Surface::new(160, 96));
    }

    #[test]
    fn one_by_one_is_valid() {
        assert!(Canvas::new(1, 1).is_ok());
    }

    #[test]
    fn invalid_sizes() {
        for (w, h) in [(0, 1), (1, 0), (-1, 5), (5, -1), (0, 0)] {
            assert_eq!(
                Canvas::new(w, h),
                Err(CanvasError::InvalidSize { width: w, height: h })
            );
        }
    }

    #[test]
    fn size_limits() {
        assert!(Canvas::new(MAX_WIDTH + 1, 1).is_err());
        assert!(Canvas::new(1, MAX_HEIGHT + 1).is_err());
        assert!(Canvas::new(i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn repr() {
        let canvas = Canvas::new(7, 4).unwrap();
        assert_eq!(canvas.repr(), "Canvas(output=(7×4), screen=(14×16)))");
    }

    #[test]
    fn shortcuts() {
        let canvas = Canvas::new(7, 4).unwrap();
        assert_eq!(canvas.w(), 13);
        assert_eq!(canvas.h(), 15);
        assert_eq!(canvas.cx(), 7);
        assert_eq!(canvas.cy(), 8);
    }

    #[test]
    fn bounds_checks() {
        let canvas = Canvas::new(2, 1).unwrap();
        assert!(canvas.check_output_bounds(1, 0));
        assert!(!canvas.check_output_bounds(2, 0));
        assert!(canvas.check_screen_bounds(3, 3));
        assert!(!canvas.check_screen_bounds(3, 4));
        assert!(!canvas.check_screen_bounds(-1, 0));
    }

    // -- Auto size ----------------------------------------------------------

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
    }

    #[test]
    fn auto_size_reads_both() {
        let size = Canvas::auto_size_from(env(&[("WIDTH", "12"), ("HEIGHT", " 34 ")]));
        assert_eq!(size, Ok((12, 34)));
    }

    #[test]
    fn auto_size_missing() {
        assert_eq!(
            Canvas::auto_size_from(env(&[("HEIGHT", "34")])),
            Err(AutoSizeError::Missing("WIDTH"))
        );
        assert_eq!(
            Canvas::auto_size_from(env(&[("WIDTH", "12")])),
            Err(AutoSizeError::Missing("HEIGHT"))
        );
    }

    #[test]
    fn auto_size_not_a_number() {
        assert_eq!(
            Canvas::auto_size_from(env(&[("WIDTH", "wide"), ("HEIGHT", "34")])),
            Err(AutoSizeError::NotANumber { var: "WIDTH", value: "wide".into() })
        );
    }

    // -- Pixels -------------------------------------------------------------

    #[test]
    fn get_pixel_out_of_bounds() {
        let canvas = Canvas::new(1, 1).unwrap();
        assert_eq!(canvas.get_pixel(0, 0), Some(false));
        assert_eq!(canvas.get_pixel(2, 0), None);
        assert_eq!(canvas.get_pixel(0, 4), None);
        assert_eq!(canvas.get_pixel(-1, -1), None);
    }

    #[test]
    fn set_pixel_round_trip() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set_pixel(1, 3, true);
        assert_eq!(canvas.get_pixel(1, 3), Some(true));
        canvas.set_pixel(1, 3, false);
        assert_eq!(canvas.get_pixel(1, 3), Some(false));
    }

    #[test]
    fn set_pixel_out_of_bounds_is_noop() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let before = canvas.clone();
        canvas.set_pixel(2, 0, true);
        canvas.set_pixel(0, -1, true);
        canvas.set_pixel(i32::MAX, i32::MIN, true);
        assert_eq!(canvas, before);
    }

    #[test]
    fn diagonal_render() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        for i in 0..6 {
            canvas.set_pixel(i, i, true);
        }
        assert_eq!(canvas.to_string(), "⠑⢄⠀\n⠀⠀⠑\n");
    }

    #[test]
    fn inverted_writes_are_negated() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.invert();
        assert!(canvas.is_inverted());
        canvas.set_pixel(0, 0, false);
        assert_eq!(canvas.get_pixel(0, 0), Some(true));
        canvas.set_pixel(0, 0, true);
        assert_eq!(canvas.get_pixel(0, 0), Some(false));
        canvas.invert();
        assert!(!canvas.is_inverted());
    }

    #[test]
    fn fill_and_clear_ignore_inversion() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.invert();
        canvas.fill();
        assert!(canvas.pixels().iter().flatten().all(|&p| p));
        canvas.clear();
        assert!(canvas.pixels().iter().flatten().all(|&p| !p));
    }

    #[test]
    fn clear_keeps_buffer_allocation() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.fill();
        let before = canvas.pixels().as_ptr();
        canvas.clear();
        assert_eq!(canvas.pixels().as_ptr(), before);
    }

    #[test]
    fn clear_does_not_activate_overlays() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.clear();
        assert!(!canvas.is_colorized());
        assert!(!canvas.is_textual());
    }

    #[test]
    fn clear_resets_overlays() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.set_color(Color::new().red());
        canvas.set_pixel(0, 0, true);
        canvas.draw_text("ab", 0, 0);
        canvas.clear();
        assert!(canvas.is_colorized());
        assert!(canvas.is_textual());
        assert_eq!(canvas.color_buffer(), &[vec![Color::NONE; 2]]);
        assert_eq!(canvas.text_buffer(), &[vec![String::new(); 2]]);
    }

    #[test]
    fn iter_buffer_row_major() {
        let canvas = Canvas::new(1, 1).unwrap();
        let coords: Vec<_> = canvas.iter_buffer().collect();
        assert_eq!(coords.len(), 8);
        assert_eq!(&coords[..3], &[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(coords[7], (1, 3));
    }

    #[test]
    fn iter_buffer_exact_size_and_restartable() {
        let canvas = Canvas::new(2, 1).unwrap();
        let mut it = canvas.iter_buffer();
        assert_eq!(it.len(), 16);
        it.next();
        assert_eq!(it.len(), 15);
        assert_eq!(canvas.iter_buffer().count(), 16);
    }

    #[test]
    fn iter_blocks_row_major() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.set_pixel(2, 4, true);
        let blocks: Vec<_> = canvas.iter_blocks().collect();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[3].0, (1, 1));
        assert!(blocks[3].1[0][0]);
        assert!(blocks[..3].iter().all(|(_, b)| *b == [[false; 2]; 4]));
    }

    // -- Color --------------------------------------------------------------

    #[test]
    fn set_color_activates_overlay() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        assert!(!canvas.is_colorized());
        assert!(canvas.color_buffer().is_empty());
        canvas.set_color(Color::new().red());
        assert!(canvas.is_colorized());
        assert_eq!(canvas.color_buffer().len(), 2);
        assert_eq!(canvas.color_buffer()[0].len(), 3);
        assert_eq!(canvas.color(), Color::new().red());
    }

    #[test]
    fn set_pixel_colors_owning_cell() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set_color(Color::new().red());
        canvas.set_pixel(3, 5, true);
        assert_eq!(canvas.color_buffer()[1][1], Color::new().red());
    }

    #[test]
    fn unset_pixel_drops_cell_color() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set_color(Color::new().red());
        canvas.set_pixel(0, 0, true);
        canvas.set_pixel(1, 1, true);
        canvas.set_pixel(1, 1, false);
        assert_eq!(canvas.color_buffer()[0][0], Color::NONE);
        assert_eq!(canvas.get_pixel(0, 0), Some(true));
    }

    #[test]
    fn colored_render() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.set_color(Color::new().bright_green());
        for i in 0..6 {
            canvas.set_pixel(i, i, true);
        }
        assert_eq!(
            canvas.to_string(),
            "\x1b[0;92m⠑\x1b[0m\x1b[0;92m⢄\x1b[0m⠀\n⠀⠀\x1b[0;92m⠑\x1b[0m\n"
        );
    }

    #[test]
    fn set_color_is_not_retroactive() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        canvas.set_pixel(0, 0, true);
        canvas.set_color(Color::new().blue());
        assert_eq!(canvas.color_buffer()[0][0], Color::NONE);
    }

    // -- Text ---------------------------------------------------------------

    #[test]
    fn draw_text_renders_over_pixels() {
        let mut canvas = Canvas::new(5, 3).unwrap();
        canvas.draw_text("foo", 1, 1);
        assert_eq!(canvas.to_string(), "⠀⠀⠀⠀⠀\n⠀foo⠀\n⠀⠀⠀⠀⠀\n");
    }

    #[test]
    fn draw_text_activates_even_when_empty() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.draw_text("", 0, 0);
        assert!(canvas.is_textual());
        assert_eq!(canvas.text_buffer(), &[vec![String::new(); 2]]);
    }

    #[test]
    fn draw_text_overflow() {
        let mut canvas = Canvas::new(5, 2).unwrap();
        canvas.draw_text("foo", -1, 0);
        canvas.draw_text("bar", 3, 1);
        assert_eq!(text_row(&canvas, 0), ["o", "o", "", "", ""]);
        assert_eq!(text_row(&canvas, 1), ["", "", "", "b", "a"]);
    }

    #[test]
    fn draw_text_outside_rows() {
        let mut canvas = Canvas::new(3, 1).unwrap();
        canvas.draw_text("abc", 0, 1);
        canvas.draw_text("abc", 0, -1);
        assert_eq!(text_row(&canvas, 0), ["", "", ""]);
    }

    #[test]
    fn text_on_boundaries() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.draw_text("a", 0, 1);
        canvas.draw_text("b", 1, 0);
        canvas.draw_text("c", 2, 1);
        canvas.draw_text("d", 1, 2);
        assert_eq!(canvas.to_string(), "⠀b⠀\na⠀c\n⠀d⠀\n");
    }

    #[test]
    fn draw_text_space_erases() {
        let mut canvas = Canvas::new(5, 1).unwrap();
        canvas.draw_text("bar", 1, 0);
        assert_eq!(text_row(&canvas, 0), ["", "b", "a", "r", ""]);
        canvas.draw_text("  ", 2, 0);
        assert_eq!(text_row(&canvas, 0), ["", "b", "", "", ""]);
    }

    #[test]
    fn merge_text_space_keeps() {
        let mut canvas = Canvas::new(5, 1).unwrap();
        canvas.draw_text("bar", 1, 0);
        canvas.merge_text("  z", 2, 0);
        assert_eq!(text_row(&canvas, 0), ["", "b", "a", "r", "z"]);
    }

    #[test]
    fn vertical_text() {
        let mut canvas = Canvas::new(2, 3).unwrap();
        canvas.draw_text_vertical("ab", 1, 1);
        assert_eq!(canvas.to_string(), "⠀⠀\n⠀a\n⠀b\n");
        canvas.merge_text_vertical(" c", 1, 0);
        assert_eq!(canvas.to_string(), "⠀⠀\n⠀c\n⠀b\n");
        canvas.draw_text_vertical(" ", 1, 2);
        assert_eq!(canvas.to_string(), "⠀⠀\n⠀c\n⠀⠀\n");
    }

    #[test]
    fn colored_text() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.set_color(Color::new().red());
        canvas.draw_text("hi", 0, 0);
        assert_eq!(text_row(&canvas, 0), ["\x1b[0;31mh\x1b[0m", "\x1b[0;31mi\x1b[0m"]);
        assert_eq!(canvas.to_string(), "\x1b[0;31mh\x1b[0m\x1b[0;31mi\x1b[0m\n");
    }

    #[test]
    fn erased_text_shows_pixels() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.fill();
        canvas.draw_text("xy", 0, 0);
        canvas.draw_text(" ", 1, 0);
        assert_eq!(canvas.to_string(), "x⣿\n");
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_matches_render() {
        let mut canvas = Canvas::new(4, 2).unwrap();
        canvas.set_pixel(3, 3, true);
        assert_eq!(format!("{canvas}"), canvas.render());
    }

    #[test]
    fn debug_is_summary() {
        let canvas = Canvas::new(1, 1).unwrap();
        let debug = format!("{canvas:?}");
        assert!(debug.starts_with("Canvas { output: Surface(1×1), screen: Surface(2×4)"));
    }
}
