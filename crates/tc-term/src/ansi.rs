// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write SGR (Select Graphic Rendition) sequences to any
// `fmt::Write`. No state and no decisions about when to emit; that is the
// `Color`'s job. This module just knows the byte-level encoding.
//
// The canvas wraps every colored glyph individually (open, glyph, reset), so
// the only sequences needed are the SGR opener and the reset. The other half
// of the module goes the opposite direction: stripping sequences back out so
// callers can measure what the terminal will actually display.
//
// All writers return `fmt::Result` propagated from the underlying writer.
// In practice they never fail when writing to a `String`.
use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::color::{Attr, Paint};

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset all SGR attributes (SGR 0).
pub const RESET: &str = "\x1b[0m";

// ─── Reset ───────────────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> fmt::Result {
    w.write_str(RESET)
}

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Write the SGR parameters selecting `paint` as the foreground color.
///
/// Uses compact SGR codes for the 16 standard colors (30-37, 90-97), the
/// 256-color extended format for palette indices, and 24-bit `TrueColor` for
/// RGB. Writes nothing for [`Paint::Default`].
pub fn fg(w: &mut impl Write, paint: Paint) -> fmt::Result {
    match paint {
        Paint::Default => Ok(()),
        Paint::Ansi16(idx) => {
            if idx < 8 {
                write!(w, "{}", 30 + u16::from(idx))
            } else {
                write!(w, "{}", 82 + u16::from(idx))
            }
        }
        Paint::Ansi256(idx) => write!(w, "38;5;{idx}"),
        Paint::Rgb(r, g, b) => write!(w, "38;2;{r};{g};{b}"),
    }
}

// ─── Background Color ────────────────────────────────────────────────────────

/// Write the SGR parameters selecting `paint` as the background color.
///
/// Same encoding strategy as [`fg`] but with BG-specific SGR codes
/// (40–47, 100–107, 48;5;N, 48;2;R;G;B).
pub fn bg(w: &mut impl Write, paint: Paint) -> fmt::Result {
    match paint {
        Paint::Default => Ok(()),
        Paint::Ansi16(idx) => {
            if idx < 8 {
                write!(w, "{}", 40 + u16::from(idx))
            } else {
                write!(w, "{}", 92 + u16::from(idx))
            }
        }
        Paint::Ansi256(idx) => write!(w, "48;5;{idx}"),
        Paint::Rgb(r, g, b) => write!(w, "48;2;{r};{g};{b}"),
    }
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Write the SGR parameters for text attributes, semicolon-separated.
///
/// An empty attribute set is written as `0` (explicit "normal intensity"),
/// so the opener always starts with at least one parameter.
pub fn attrs(w: &mut impl Write, attr: Attr) -> fmt::Result {
    if attr.is_empty() {
        return w.write_char('0');
    }

    let mut first = true;
    for (flag, code) in [(Attr::BOLD, '1'), (Attr::ITALIC, '3'), (Attr::UNDERLINE, '4')] {
        if attr.contains(flag) {
            if !first {
                w.write_char(';')?;
            }
            w.write_char(code)?;
            first = false;
        }
    }
    Ok(())
}

// ─── SGR Opener ──────────────────────────────────────────────────────────────

/// Write a complete SGR opener: `ESC[` attributes `;` colors `m`.
///
/// Two 16-color paints share one sequence (`ESC[0;31;42m`). An extended
/// foreground (256 or RGB) closes its sequence before the background starts
/// a new one (`ESC[0;38;5;136mESC[48;5;79m`), which is what terminals parse
/// most reliably.
pub fn sgr_open(w: &mut impl Write, attr: Attr, fg_paint: Paint, bg_paint: Paint) -> fmt::Result {
    w.write_str(CSI)?;
    attrs(w, attr)?;

    if !fg_paint.is_default() || !bg_paint.is_default() {
        w.write_char(';')?;
    }

    fg(w, fg_paint)?;

    if !fg_paint.is_default() && !bg_paint.is_default() {
        if fg_paint.is_extended() {
            w.write_char('m')?;
            w.write_str(CSI)?;
        } else {
            w.write_char(';')?;
        }
    }

    bg(w, bg_paint)?;
    w.write_char('m')
}

// ─── Measuring ───────────────────────────────────────────────────────────────

/// Remove every escape sequence from `text` (SGR, other CSI, OSC).
#[must_use]
pub fn strip(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}

/// Display width of `text` in terminal columns, escape sequences excluded.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip(text).width()
}
