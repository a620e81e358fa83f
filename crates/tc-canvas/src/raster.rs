//! Drawing primitives.
//!
//! Everything here goes through [`Canvas::set_pixel`], so inverted mode,
//! clipping and colors apply uniformly. Coordinates are screen pixels and
//! may lie anywhere; only the visible part is drawn.

use std::f64::consts::TAU;

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};

impl Canvas {
    // -- Lines --------------------------------------------------------------

    /// Draw the line from `(x1, y1)` to `(x2, y2)`, both ends included.
    ///
    /// Bresenham's algorithm, integer only. Axis-aligned lines are filled as
    /// a plain range.
    pub fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let screen = self.screen();

        // Ranges are clipped to the screen; the rest would be dropped anyway.
        if x1 == x2 {
            let from = y1.min(y2).max(0);
            let to = y1.max(y2).min(screen.height() - 1);
            for y in from..=to {
                self.set_pixel(x1, y, true);
            }
            return;
        }
        if y1 == y2 {
            let from = x1.min(x2).max(0);
            let to = x1.max(x2).min(screen.width() - 1);
            for x in from..=to {
                self.set_pixel(x, y1, true);
            }
            return;
        }

        // i64 so that lines between far off-screen points cannot overflow.
        let (x2, y2) = (i64::from(x2), i64::from(y2));
        let (mut x, mut y) = (i64::from(x1), i64::from(y1));

        let dx = (x2 - x).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let dy = -(y2 - y).abs();
        let sy = if y < y2 { 1 } else { -1 };
        let mut error = dx + dy;

        loop {
            self.set_pixel_wide(x, y);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * error;
            if e2 >= dy {
                error += dy;
                x += sx;
            }
            if e2 <= dx {
                error += dx;
                y += sy;
            }
        }
    }

    fn set_pixel_wide(&mut self, x: i64, y: i64) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.set_pixel(x, y, true);
        }
    }

    // -- Rectangles ---------------------------------------------------------

    /// Outline of the `width × height` rectangle whose top-left is `(x, y)`.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let right = x.saturating_add(width.saturating_sub(1));
        let bottom = y.saturating_add(height.saturating_sub(1));
        self.stroke_line(x, y, right, y);
        self.stroke_line(right, y, right, bottom);
        self.stroke_line(right, bottom, x, bottom);
        self.stroke_line(x, bottom, x, y);
    }

    /// Outline of the whole screen.
    pub fn frame(&mut self) {
        let screen = self.screen();
        self.stroke_rect(0, 0, screen.width(), screen.height());
    }

    /// Solid `width × height` rectangle whose top-left is `(x, y)`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let right = x.saturating_add(width.saturating_sub(1));
        // Rows outside the screen would be dropped anyway.
        let rows = y.max(0)..y.saturating_add(height).min(self.screen().height());
        for yy in rows {
            self.stroke_line(x, yy, right, yy);
        }
    }

    // -- Triangles ----------------------------------------------------------

    pub fn stroke_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        self.stroke_line(x1, y1, x2, y2);
        self.stroke_line(x2, y2, x3, y3);
        self.stroke_line(x3, y3, x1, y1);
    }

    /// Solid triangle, either winding.
    ///
    /// The outline is stroked first so thin slivers still show their edges.
    /// Then every point of the bounding box passing the edge-sign test is
    /// set. Points on an edge count as inside.
    pub fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) {
        self.stroke_triangle(x1, y1, x2, y2, x3, y3);

        let v1 = (i64::from(x1), i64::from(y1));
        let v2 = (i64::from(x2), i64::from(y2));
        let v3 = (i64::from(x3), i64::from(y3));

        // Only the visible part of the bounding box can change anything.
        let screen = self.screen();
        let min_x = x1.min(x2).min(x3).max(0);
        let max_x = x1.max(x2).max(x3).min(screen.width() - 1);
        let min_y = y1.min(y2).min(y3).max(0);
        let max_y = y1.max(y2).max(y3).min(screen.height() - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = (i64::from(x), i64::from(y));
                if is_in_triangle(p, v1, v2, v3) {
                    self.set_pixel(x, y, true);
                }
            }
        }
    }

    // -- Circles ------------------------------------------------------------

    /// Circle outline centered on `(x, y)`.
    pub fn stroke_circle(&mut self, x: i32, y: i32, radius: i32) {
        let (x, y) = (i64::from(x), i64::from(y));
        for (dx, dy) in octant(radius) {
            let (dx, dy) = (i64::from(dx), i64::from(dy));
            self.set_pixel_wide(x + dx, y + dy);
            self.set_pixel_wide(x + dx, y - dy);
            self.set_pixel_wide(x - dx, y + dy);
            self.set_pixel_wide(x - dx, y - dy);
            self.set_pixel_wide(x + dy, y + dx);
            self.set_pixel_wide(x + dy, y - dx);
            self.set_pixel_wide(x - dy, y + dx);
            self.set_pixel_wide(x - dy, y - dx);
        }
    }

    /// Solid circle centered on `(x, y)`.
    pub fn fill_circle(&mut self, x: i32, y: i32, radius: i32) {
        for (dx, dy) in octant(radius) {
            self.span(x, y, dx, dy);
            self.span(x, y, dx, -dy);
            self.span(x, y, dy, dx);
            self.span(x, y, dy, -dx);
        }
    }

    /// Horizontal line from `(x - half, y + dy)` to `(x + half, y + dy)`.
    /// Rows that fall outside `i32` are skipped, columns saturate.
    fn span(&mut self, x: i32, y: i32, half: i32, dy: i32) {
        if let Some(row) = y.checked_add(dy) {
            self.stroke_line(x.saturating_sub(half), row, x.saturating_add(half), row);
        }
    }

    // -- Regular polygons ---------------------------------------------------

    /// Outline of a regular polygon.
    ///
    /// The first vertex sits at `angle` radians from the positive x axis,
    /// counter-clockwise on screen.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidSides`] if `sides < 3`. Nothing is drawn.
    pub fn stroke_ngon(&mut self, x: i32, y: i32, radius: i32, sides: u32, angle: f64) -> Result<()> {
        let vertices = ngon_vertices(x, y, radius, sides, angle)?;
        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            self.stroke_line(x1, y1, x2, y2);
        }
        Ok(())
    }

    /// Solid regular polygon.
    ///
    /// Filled as a fan of triangles from the canvas center to each edge, so
    /// the polygon should be centered on the canvas.
    ///
    /// # Errors
    ///
    /// [`CanvasError::InvalidSides`] if `sides < 3`. Nothing is drawn.
    pub fn fill_ngon(&mut self, x: i32, y: i32, radius: i32, sides: u32, angle: f64) -> Result<()> {
        let vertices = ngon_vertices(x, y, radius, sides, angle)?;
        let (cx, cy) = (self.cx(), self.cy());
        for (i, &(x1, y1)) in vertices.iter().enumerate() {
            let (x2, y2) = vertices[(i + 1) % vertices.len()];
            self.fill_triangle(cx, cy, x1, y1, x2, y2);
        }
        Ok(())
    }
}

type Point = (i64, i64);

/// Which side of the edge `a → b` the point `p` lies on.
fn sign(p: Point, a: Point, b: Point) -> i128 {
    let [px, py, ax, ay, bx, by] = [p.0, p.1, a.0, a.1, b.0, b.1].map(i128::from);
    (px - bx) * (ay - by) - (ax - bx) * (py - by)
}

fn is_in_triangle(p: Point, v1: Point, v2: Point, v3: Point) -> bool {
    let d1 = sign(p, v1, v2);
    let d2 = sign(p, v2, v3);
    let d3 = sign(p, v3, v1);

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;

    !(has_neg && has_pos)
}

/// Offsets `(dx, dy)` of one circle octant, from `(r, 0)` up to the diagonal.
///
/// Jesko's method. The error term grows by `1/16` of the radius per step;
/// everything is kept scaled by 16 to stay in integers.
fn octant(radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    let mut t1 = i64::from(radius);
    let mut dx = radius;
    let mut dy = 0;

    while dx >= dy {
        points.push((dx, dy));
        dy += 1;
        t1 += 16 * i64::from(dy);
        let t2 = t1 - 16 * i64::from(dx);
        if t2 >= 0 {
            t1 = t2;
            dx -= 1;
        }
    }

    points
}

#[allow(clippy::cast_possible_truncation, clippy::suboptimal_flops)]
fn ngon_vertices(x: i32, y: i32, radius: i32, sides: u32, angle: f64) -> Result<Vec<(i32, i32)>> {
    if sides < 3 {
        return Err(CanvasError::InvalidSides(sides));
    }

    let step = TAU / f64::from(sides);
    let (x, y, radius) = (f64::from(x), f64::from(y), f64::from(radius));

    Ok((0..sides)
        .map(|i| {
            // No fused multiply-add: vertices landing on exact halves must
            // round the same way on every target.
            let theta = angle + f64::from(i) * step;
            // Saturating cast; far off-screen vertices clip like any other.
            let vx = (x + radius * theta.cos()).round_ties_even() as i32;
            let vy = (y - radius * theta.sin()).round_ties_even() as i32;
            (vx, vy)
        })
        .collect())
}
