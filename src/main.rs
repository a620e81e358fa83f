// SPDX-License-Identifier: MIT
//
// textcanvas — draw a demo scene with Braille dots and print it.
//
// The binary wires the two crates together:
//
//   tc-term   → colors, terminal size
//   tc-canvas → canvas, primitives, rendering
//
// Size resolution, first match wins:
//
//   WIDTH / HEIGHT env vars  → exact size, errors are fatal
//   terminal size (stdout)   → full width, one row left for the prompt
//   Canvas::DEFAULT_SIZE     → 80×24
//
// Logs go to stderr (RUST_LOG, default `warn`) so stdout only ever carries
// the canvas.

use std::f64::consts::TAU;
use std::process;

use log::{debug, warn};

use tc_canvas::{AutoSizeError, Canvas, Color, sample};
use tc_term::terminal;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut canvas = open_canvas().unwrap_or_else(|e| {
        eprintln!("textcanvas: {e}");
        process::exit(1);
    });

    if let Err(e) = draw_scene(&mut canvas) {
        eprintln!("textcanvas: {e}");
        process::exit(1);
    }

    print!("{canvas}");
}

// ─── Sizing ─────────────────────────────────────────────────────────────────

fn open_canvas() -> Result<Canvas, AutoSizeError> {
    match Canvas::auto() {
        Ok(canvas) => {
            debug!("sized from environment: {}", canvas.repr());
            Ok(canvas)
        }
        Err(AutoSizeError::Missing(var)) => {
            debug!("{var} is not set, asking the terminal");
            Ok(terminal_canvas())
        }
        Err(e) => Err(e),
    }
}

fn terminal_canvas() -> Canvas {
    if let Some(size) = terminal::get_size() {
        match Canvas::new(i32::from(size.cols), i32::from(size.rows) - 1) {
            Ok(canvas) => {
                debug!("sized from terminal: {}", canvas.repr());
                return canvas;
            }
            Err(e) => warn!("terminal size {}×{} unusable: {e}", size.cols, size.rows),
        }
    }

    let (width, height) = Canvas::DEFAULT_SIZE;
    warn!("terminal size unavailable, falling back to {width}×{height}");
    Canvas::default()
}

// ─── Scene ──────────────────────────────────────────────────────────────────

/// Colored spokes from the center, a hexagon in a circle, one period of a
/// sine wave and a title in a frame.
fn draw_scene(canvas: &mut Canvas) -> tc_canvas::Result<()> {
    let (w, h, cx, cy) = (canvas.w(), canvas.h(), canvas.cx(), canvas.cy());

    let spokes = [
        ((0, 0), Color::new().bright_red()),
        ((w, 0), Color::new().bright_yellow()),
        ((w, h), Color::new().bright_green()),
        ((0, h), Color::new().bright_blue()),
        ((cx, 0), Color::new().bright_cyan()),
        ((w, cy), Color::new().bright_magenta()),
        ((cx, h), Color::new().bright_gray()),
        ((0, cy), Color::NONE),
    ];
    for ((x, y), color) in spokes {
        canvas.set_color(color);
        canvas.stroke_line(cx, cy, x, y);
    }

    let radius = cx.min(cy) / 2;
    canvas.set_color(Color::new().bright_white());
    canvas.stroke_circle(cx, cy, radius);
    canvas.stroke_ngon(cx, cy, radius, 6, 0.0)?;

    canvas.set_color(Color::new().rgb(255, 160, 0));
    let columns = usize::try_from(canvas.screen().width()).unwrap_or(0);
    let (xs, ys) = sample(0.0, TAU, columns, f64::sin);
    let amplitude = f64::from(cy / 2);
    let points: Vec<(i32, i32)> = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| (to_pixel(x / TAU * f64::from(w)), cy - to_pixel(y * amplitude)))
        .collect();
    for pair in points.windows(2) {
        let [(x1, y1), (x2, y2)] = [pair[0], pair[1]];
        canvas.stroke_line(x1, y1, x2, y2);
    }

    canvas.set_color(Color::NONE);
    canvas.frame();
    canvas.set_color(Color::new().bold().bright_white());
    canvas.draw_text(" textcanvas ", 2, 0);

    Ok(())
}

#[allow(clippy::cast_possible_truncation)]
fn to_pixel(v: f64) -> i32 {
    // Saturating cast.
    v.round() as i32
}

// ─── Tests ──────────────────────────────────────────────────────────────────
