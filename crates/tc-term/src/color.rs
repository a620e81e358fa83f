// SPDX-License-Identifier: MIT
//
// Glyph decoration: text attributes plus a foreground and a background paint.
//
// A `Color` is a small `Copy` value built with chained `const fn`
// combinators (`Color::NONE.bold().red().bg_blue()`). It carries no escape
// bytes itself. Formatting a string through it asks the `ansi` writers for
// an SGR opener, appends the text and a reset.
//
// The canvas depends on exactly two things from this module: `format` and
// `is_none`. Everything else is convenience for building values.
//
// Paints are a tagged union over the three terminal color depths:
//
//   Ansi16   palette index 0–15 (SGR 30–37 / 90–97, backgrounds +10)
//   Ansi256  extended palette   (SGR 38;5;N / 48;5;N)
//   Rgb      24-bit TrueColor   (SGR 38;2;R;G;B / 48;2;R;G;B)

use std::fmt;

use bitflags::bitflags;

use crate::ansi;

// ─── Attributes ──────────────────────────────────────────────────────────────

bitflags! {
    /// Text attributes applied by a [`Color`].
    ///
    /// Emitted in declaration order (SGR 1, 3, 4) regardless of the order the
    /// builder methods were called in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const BOLD      = 1 << 0;
        const ITALIC    = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

// ─── Paint ───────────────────────────────────────────────────────────────────

/// One color slot (foreground or background) of a [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    /// Terminal default; contributes no SGR parameter.
    #[default]
    Default,
    /// Standard palette: 0–7 normal, 8–15 bright.
    Ansi16(u8),
    /// Extended 256-color palette.
    Ansi256(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Paint {
    /// `true` for [`Paint::Default`].
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// `true` for paints that need the multi-parameter extended syntax.
    #[inline]
    #[must_use]
    pub const fn is_extended(self) -> bool {
        matches!(self, Self::Ansi256(_) | Self::Rgb(..))
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// How to decorate a glyph: attributes, foreground and background.
///
/// [`Color::NONE`] is the no-color sentinel. Formatting through it returns
/// the text untouched; every other value wraps the text in an SGR opener and
/// a reset.
///
/// # Examples
///
/// ```
/// use tc_term::Color;
///
/// assert_eq!(Color::NONE.format("x"), "x");
/// assert_eq!(Color::new().red().format("x"), "\x1b[0;31mx\x1b[0m");
/// assert_eq!(
///     Color::new().bold().underline().red().bg_green().format("x"),
///     "\x1b[1;4;31;42mx\x1b[0m",
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub attrs: Attr,
    pub fg: Paint,
    pub bg: Paint,
}

macro_rules! palette {
    ($($idx:literal => $fg:ident, $bright:ident, $bg:ident, $bg_bright:ident;)*) => {
        $(
            #[doc = concat!("Foreground `", stringify!($fg), "`.")]
            #[inline]
            #[must_use]
            pub const fn $fg(self) -> Self {
                self.with_fg(Paint::Ansi16($idx))
            }

            #[doc = concat!("Foreground `", stringify!($bright), "`.")]
            #[inline]
            #[must_use]
            pub const fn $bright(self) -> Self {
                self.with_fg(Paint::Ansi16($idx + 8))
            }

            #[doc = concat!("Background `", stringify!($bg), "`.")]
            #[inline]
            #[must_use]
            pub const fn $bg(self) -> Self {
                self.with_bg(Paint::Ansi16($idx))
            }

            #[doc = concat!("Background `", stringify!($bg_bright), "`.")]
            #[inline]
            #[must_use]
            pub const fn $bg_bright(self) -> Self {
                self.with_bg(Paint::Ansi16($idx + 8))
            }
        )*
    };
}

impl Color {
    /// The no-color sentinel.
    pub const NONE: Self = Self {
        attrs: Attr::empty(),
        fg: Paint::Default,
        bg: Paint::Default,
    };

    /// Same as [`Color::NONE`], as a starting point for the builders.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// `true` iff formatting through this color is the identity.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.attrs.is_empty() && self.fg.is_default() && self.bg.is_default()
    }

    // ─── Builders ────────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, paint: Paint) -> Self {
        self.fg = paint;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, paint: Paint) -> Self {
        self.bg = paint;
        self
    }

    #[inline]
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::BOLD);
        self
    }

    #[inline]
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::ITALIC);
        self
    }

    #[inline]
    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.attrs = self.attrs.union(Attr::UNDERLINE);
        self
    }

    palette! {
        0 => gray,    bright_gray,    bg_gray,    bg_bright_gray;
        1 => red,     bright_red,     bg_red,     bg_bright_red;
        2 => green,   bright_green,   bg_green,   bg_bright_green;
        3 => yellow,  bright_yellow,  bg_yellow,  bg_bright_yellow;
        4 => blue,    bright_blue,    bg_blue,    bg_bright_blue;
        5 => magenta, bright_magenta, bg_magenta, bg_bright_magenta;
        6 => cyan,    bright_cyan,    bg_cyan,    bg_bright_cyan;
        7 => white,   bright_white,   bg_white,   bg_bright_white;
    }

    /// Foreground from the 256-color palette.
    #[inline]
    #[must_use]
    pub const fn ansi256(self, index: u8) -> Self {
        self.with_fg(Paint::Ansi256(index))
    }

    /// Background from the 256-color palette.
    #[inline]
    #[must_use]
    pub const fn bg_ansi256(self, index: u8) -> Self {
        self.with_bg(Paint::Ansi256(index))
    }

    /// 24-bit foreground.
    #[inline]
    #[must_use]
    pub const fn rgb(self, r: u8, g: u8, b: u8) -> Self {
        self.with_fg(Paint::Rgb(r, g, b))
    }

    /// 24-bit background.
    #[inline]
    #[must_use]
    pub const fn bg_rgb(self, r: u8, g: u8, b: u8) -> Self {
        self.with_bg(Paint::Rgb(r, g, b))
    }

    /// 24-bit foreground from `#RRGGBB` or `#RGB` (the `#` is optional).
    ///
    /// Returns `None` if the string is not valid hex.
    #[must_use]
    pub fn hex(self, s: &str) -> Option<Self> {
        parse_hex(s).map(|(r, g, b)| self.rgb(r, g, b))
    }

    /// 24-bit background from `#RRGGBB` or `#RGB`.
    #[must_use]
    pub fn bg_hex(self, s: &str) -> Option<Self> {
        parse_hex(s).map(|(r, g, b)| self.bg_rgb(r, g, b))
    }

    // ─── Formatting ──────────────────────────────────────────────────────

    /// Wrap `text` in this color's escape sequences.
    #[must_use]
    pub fn format(self, text: &str) -> String {
        if self.is_none() {
            return text.to_owned();
        }

        let mut out = String::with_capacity(text.len() + 24);
        // Writing into a `String` cannot fail.
        let _ = self.write_wrapped(&mut out, text);
        out
    }

    /// Like [`Color::format`] for a single character.
    #[must_use]
    pub fn format_char(self, ch: char) -> String {
        let mut buf = [0; 4];
        self.format(ch.encode_utf8(&mut buf))
    }

    fn write_wrapped(self, w: &mut impl fmt::Write, text: &str) -> fmt::Result {
        if self.is_none() {
            return w.write_str(text);
        }
        ansi::sgr_open(w, self.attrs, self.fg, self.bg)?;
        w.write_str(text)?;
        ansi::reset(w)
    }
}

/// Writes the format template, with `{}` where the text goes.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_wrapped(f, "{}")
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => Some((
            parse_hex_byte(&bytes[0..2])?,
            parse_hex_byte(&bytes[2..4])?,
            parse_hex_byte(&bytes[4..6])?,
        )),
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}
