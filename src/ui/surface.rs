use ratatui::style::Color;
use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

/// Colors derived from the live terminal background.
///
/// Ghost text has to read as "dimmed" against whatever background the user's
/// terminal actually has, so the palette is queried from the terminal
/// (OSC 11) rather than assumed. Dark backgrounds get a lighter ghost,
/// light backgrounds a darker one.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Whether the terminal has a dark background
    pub is_dark: bool,
    /// The terminal's actual background color
    pub background: Color,
    /// Dimmed foreground for the hint overlay
    pub ghost_text: Color,
    /// Muted foreground for secondary chrome (status lines, logs)
    pub muted_text: Color,
}

impl Default for Surface {
    fn default() -> Self {
        Self::default_dark()
    }
}

impl Surface {
    /// Query the terminal background and derive the palette.
    ///
    /// **Important**: call this BEFORE `crossterm::terminal::enable_raw_mode()`.
    ///
    /// Falls back to dark defaults when the query fails (not a tty,
    /// emulator without OSC 11 support).
    #[must_use]
    pub fn from_terminal() -> Self {
        query_background()
            .map(|(r, g, b)| Self::from_background(r, g, b))
            .unwrap_or_default()
    }

    /// Derive the palette from a known background color.
    #[must_use]
    pub fn from_background(r: u8, g: u8, b: u8) -> Self {
        let lum = luminance(r, g, b);
        let is_dark = lum <= 0.5;

        // Far enough from the background to be legible, well short of
        // full-contrast text.
        let ghost_val = if is_dark {
            (105.0 + lum * 110.0).min(150.0) as u8
        } else {
            (135.0 - lum * 65.0).max(70.0) as u8
        };
        let muted_val = if is_dark {
            ghost_val.saturating_add(30)
        } else {
            ghost_val.saturating_sub(20)
        };

        Self {
            is_dark,
            background: Color::Rgb(r, g, b),
            ghost_text: Color::Rgb(ghost_val, ghost_val, ghost_val),
            muted_text: Color::Rgb(muted_val, muted_val, muted_val),
        }
    }

    /// Fallback palette for dark terminals.
    #[must_use]
    pub fn default_dark() -> Self {
        Self {
            is_dark: true,
            background: Color::Reset,
            ghost_text: Color::Rgb(125, 125, 125),
            muted_text: Color::Rgb(150, 150, 150),
        }
    }

    /// Fallback palette for light terminals.
    #[must_use]
    pub fn default_light() -> Self {
        Self {
            is_dark: false,
            background: Color::Reset,
            ghost_text: Color::Rgb(110, 110, 110),
            muted_text: Color::Rgb(90, 90, 90),
        }
    }
}

fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b)) / 255.0
}

fn query_background() -> Option<(u8, u8, u8)> {
    if !io::IsTerminal::is_terminal(&io::stdin()) {
        return None;
    }

    crossterm::terminal::enable_raw_mode().ok()?;
    let result = query_osc11();
    drain_pending_input();
    let _ = crossterm::terminal::disable_raw_mode();
    result
}

fn query_osc11() -> Option<(u8, u8, u8)> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x1b]11;?\x07").ok()?;
    stdout.flush().ok()?;

    let start = Instant::now();
    let deadline = Duration::from_millis(100);
    let mut collected = Vec::new();

    while start.elapsed() < deadline {
        let mut buf = [0u8; 128];
        if let Ok(n) = read_stdin_with_timeout(&mut buf, Duration::from_millis(10))
            && n > 0
        {
            collected.extend_from_slice(&buf[..n]);
            if let Some(rgb) = parse_osc11(&collected) {
                return Some(rgb);
            }
        }
    }

    parse_osc11(&collected)
}

#[cfg(unix)]
fn read_stdin_with_timeout(buf: &mut [u8], timeout: Duration) -> io::Result<usize> {
    use std::os::unix::io::AsRawFd;

    let mut pollfd = libc::pollfd {
        fd: io::stdin().as_raw_fd(),
        events: libc::POLLIN,
        revents: 0,
    };

    // SAFETY: poll over a single valid fd with matching count
    let ready = unsafe { libc::poll(&mut pollfd, 1, timeout.as_millis() as i32) };

    if ready <= 0 || pollfd.revents & libc::POLLIN == 0 {
        return Ok(0);
    }

    io::stdin().read(buf)
}

#[cfg(not(unix))]
fn read_stdin_with_timeout(_buf: &mut [u8], _timeout: Duration) -> io::Result<usize> {
    Ok(0)
}

/// Swallow any response bytes still in flight so they never reach the event
/// loop as phantom keystrokes.
fn drain_pending_input() {
    let start = Instant::now();
    while start.elapsed() < Duration::from_millis(50) {
        while crossterm::event::poll(Duration::from_millis(1)).unwrap_or(false) {
            let _ = crossterm::event::read();
        }

        let mut buf = [0u8; 256];
        match read_stdin_with_timeout(&mut buf, Duration::from_millis(1)) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
    }
}

fn parse_osc11(data: &[u8]) -> Option<(u8, u8, u8)> {
    let s = String::from_utf8_lossy(data);
    let rest = &s[s.find("rgb:")? + 4..];
    let mut parts = rest.split('/');

    // OSC 11 reports 16-bit channels; keep the high byte
    let channel = |raw: &str| -> Option<u8> {
        let hex = raw.trim_end_matches(|c: char| !c.is_ascii_hexdigit());
        u16::from_str_radix(hex, 16).ok().map(|v| (v >> 8) as u8)
    };

    let r = channel(parts.next()?)?;
    let g = channel(parts.next()?)?;
    let b = channel(parts.next()?)?;
    Some((r, g, b))
}
