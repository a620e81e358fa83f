// SPDX-License-Identifier: MIT
//
// Terminal size query.
//
// Safety: `ioctl(TIOCGWINSZ)` is the POSIX interface for asking the kernel
// how big the terminal is. There is no safe wrapper in std.
#![allow(unsafe_code)]
//
// The canvas never touches the terminal. Only the driver binary asks for the
// size, and only when `WIDTH`/`HEIGHT` are not set.

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

// ─── Query ──────────────────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)` on stdout.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_size_does_not_panic() {
        // Under `cargo test` stdout is usually captured, so `None` is fine.
        if let Some(size) = get_size() {
            assert!(size.cols > 0 && size.rows > 0);
        }
    }
}
